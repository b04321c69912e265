//! Digital Signal Processing
//!
//! Fixed-point DSP primitives for the transmit chain:
//! - Q1.15 sample format shared with the DAC driver
//! - Polyphase FIR interpolation for pulse shaping

pub mod filter;
