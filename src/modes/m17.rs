//! M17 (4FSK)
//!
//! 48-byte frames (40 ms) at 4800 baud, L = 5 against the 24 kHz DAC
//! clock. M17 keeps the channel keyed through a configurable hang
//! window after the queue drains, filling with zero-level symbols so
//! intermittent host traffic does not toggle the PTT.

use crate::config::M17_TX_QUEUE_LEN;
use crate::modem::mode::ModeConfig;
use crate::modem::tx::Modulator;
use crate::types::ModemMode;

/// Frame length in bytes
pub const FRAME_LENGTH_BYTES: usize = 48;

/// Preamble byte (dibits 01 11 01 11, the +3/-3 alternation)
pub const PREAMBLE_BYTE: u8 = 0x77;

/// Samples per symbol (24000 / 4800)
pub const RADIO_SYMBOL_LENGTH: usize = 5;

/// Frames per second (40 ms frames), used for the hang conversion
pub const FRAMES_PER_SEC: u32 = 25;

/// 4FSK transmit filter
///
/// Generated using rcosdesign(0.5, 8, 5, 'sqrt') in MATLAB.
/// numTaps = 45, L = 5.
pub const RRC_FILTER: [i16; 45] = [
    0, 0, 0, 0, 0, -413, -751, -845, -587, 0, 743, 1355, 1556, 1156, 133, -1233, -2499, -3156,
    -2765, -1071, 1911, 5537, 9011, 11439, 12323, 11439, 9011, 5537, 1911, -1071, -2765, -3156,
    -2499, -1233, 133, 1156, 1556, 1355, 743, 0, -587, -845, -751, -413, 0,
];

/// Taps per polyphase branch
pub const RRC_FILTER_PHASE_LEN: usize = 9;

/// Symbol levels, high deviation, indexed by dibit value
///
/// Dibit 0b01 carries +3 (LEVELA, 1362), 0b00 +1 (LEVELB, 454),
/// 0b10 -1 (LEVELC, -454) and 0b11 -3 (LEVELD, -1362).
pub const LEVELS_HI: [i16; 4] = [454, 1362, -454, -1362];

/// Symbol levels, low deviation, indexed by dibit value
pub const LEVELS_LO: [i16; 4] = [227, 681, -227, -681];

/// Mode descriptor
pub static MODE: ModeConfig = ModeConfig {
    mode: ModemMode::M17,
    frame_length: FRAME_LENGTH_BYTES,
    sync_byte: PREAMBLE_BYTE,
    symbol_length: RADIO_SYMBOL_LENGTH,
    filter: &RRC_FILTER,
    phase_length: RRC_FILTER_PHASE_LEN,
    levels_hi: LEVELS_HI,
    levels_lo: LEVELS_LO,
    // 500 ms base plus 10 ms per host unit at 1200 bytes/s
    tx_delay_base: 600,
    tx_delay_step: 12,
    tx_delay_max: 1200,
    // 200 ms
    tx_delay_default: 240,
    // Host configures hang in whole seconds
    hang_per_unit: FRAMES_PER_SEC,
};

/// Create an M17 transmit modulator
#[must_use]
pub fn modulator() -> Modulator<M17_TX_QUEUE_LEN> {
    Modulator::new(&MODE)
}
