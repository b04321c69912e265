//! System configuration and modem constants
//!
//! Compile-time constants shared by every protocol mode. Per-protocol
//! values (frame geometry, filters, levels) live in [`crate::modes`].

/// DAC sample rate for the transmit baseband stream (24 kHz)
pub const TX_SAMPLE_RATE: u32 = 24_000;

/// 4FSK symbol rate common to the supported protocols (4800 baud)
pub const SYMBOL_RATE: u32 = 4_800;

/// Symbols carried by one byte (four 2-bit groups)
pub const SYMBOLS_PER_BYTE: usize = 4;

/// Upper bound on the per-mode interpolation factor L
///
/// Both supported modes run L = `TX_SAMPLE_RATE` / `SYMBOL_RATE` = 5;
/// scratch buffers are sized for up to 8 to leave headroom for a
/// future 40 kHz DAC clock.
pub const MAX_SYMBOL_LENGTH: usize = 8;

/// Pending output block size in bytes
///
/// Must hold the longest preamble run, so it equals the largest
/// TX-delay ceiling across modes.
pub const PO_BUFFER_SIZE: usize = 1200;

/// Interpolator delay line length in samples
///
/// `phase_length + block - 1` for the longest supported filter
/// (9 + 4 - 1), rounded up with spare.
pub const FILTER_STATE_LEN: usize = 16;

/// Transmit byte queue capacity for YSF (12.5 frames of 120 bytes)
pub const YSF_TX_QUEUE_LEN: usize = 1500;

/// Transmit byte queue capacity for M17 (83 frames of 48 bytes)
pub const M17_TX_QUEUE_LEN: usize = 4000;
