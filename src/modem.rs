//! Modem Core
//!
//! The transmit-side machinery shared by every protocol mode:
//! - fixed-capacity byte queue between host producer and drain tick
//! - per-mode descriptor (frame geometry, filters, symbol levels)
//! - the frame/preamble state machine and output pacer

pub mod mode;
pub mod queue;
pub mod sink;
pub mod tx;
