//! Digital Voice Modem Transmit Firmware Library
//!
//! This library provides the transmit-side modulation core for an
//! STM32-based multi-mode digital voice modem. Protocol frames arrive
//! from a host as fixed-size byte blocks and leave as a continuous
//! oversampled 4FSK baseband symbol stream, paced against the space
//! reported by the hardware transmit queue.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROTOCOL LAYER                            │
//! │  Mode tables (YSF, M17)  │  Frame framing (external)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     MODEM LAYER                              │
//! │  Byte Queue  │  Preamble/Frame State Machine  │  Pacer       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      DSP LAYER                               │
//! │  Symbol Mapper  │  Polyphase RRC Interpolator (Q1.15)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  HARDWARE SINK (external)                    │
//! │  DAC transmit queue: space() / write()                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **No allocation**: every buffer is sized at compile time
//! - **Bounded work per tick**: `process` never exceeds one block refill
//!   plus as many byte conversions as the sink has room for
//! - **Type-driven design**: per-protocol behavior is data, not code
//! - **No unsafe in application code**
//! - **Explicit error handling**: all fallible operations return `Result`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Digital Signal Processing
///
/// Fixed-point sample format and the pulse-shaping interpolation filter.
pub mod dsp;

/// Modem Core
///
/// Byte queue, mode descriptors, and the transmit state machine.
pub mod modem;

/// Protocol Mode Tables
///
/// Per-protocol constants: filters, symbol levels, frame geometry.
pub mod modes;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::dsp::filter::Sample;
    pub use crate::modem::sink::TransmitSink;
    pub use crate::modem::tx::Modulator;

    // Error handling
    pub use core::result::Result;

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
