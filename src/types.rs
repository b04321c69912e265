//! Shared types used across the modem firmware
//!
//! Domain types and the producer-facing error taxonomy. Errors here are
//! expected, recoverable conditions reported synchronously to the frame
//! producer; the drain path itself cannot fail.

use core::fmt;

/// Protocol mode tag carried alongside every sample block written to
/// the hardware sink, so the I/O layer can track the active mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModemMode {
    /// Idle, nothing keyed
    #[default]
    Idle,
    /// Yaesu System Fusion (C4FSK, 120-byte frames)
    Ysf,
    /// M17 (4FSK, 48-byte frames)
    M17,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ModemMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "IDLE"),
            Self::Ysf => defmt::write!(f, "YSF"),
            Self::M17 => defmt::write!(f, "M17"),
        }
    }
}

/// Error returned to the frame producer by `write_frame`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxError {
    /// Supplied data does not match the protocol's fixed frame length
    InvalidLength,
    /// Queue has less than one frame of free space
    QueueFull,
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "frame length mismatch"),
            Self::QueueFull => write!(f, "transmit queue full"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidLength => defmt::write!(f, "InvalidLength"),
            Self::QueueFull => defmt::write!(f, "QueueFull"),
        }
    }
}

/// Keyed/unkeyed state of the transmit chain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyState {
    /// Not transmitting; next output starts with a preamble
    #[default]
    Unkeyed,
    /// Transmitting frames (or holding key-up through the hang window)
    Keyed,
}

#[cfg(feature = "embedded")]
impl defmt::Format for KeyState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Unkeyed => defmt::write!(f, "UNKEYED"),
            Self::Keyed => defmt::write!(f, "KEYED"),
        }
    }
}
