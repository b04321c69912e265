//! Yaesu System Fusion (C4FSK)
//!
//! 120-byte frames at 4800 baud, L = 5 against the 24 kHz DAC clock.
//! Two transmit filter variants are provided: the narrow default and a
//! shorter wide filter for radios needing the relaxed TX bandwidth.

use crate::config::YSF_TX_QUEUE_LEN;
use crate::modem::mode::ModeConfig;
use crate::modem::tx::Modulator;
use crate::types::ModemMode;

/// Frame length in bytes
pub const FRAME_LENGTH_BYTES: usize = 120;

/// Sync byte repeated for the preamble
pub const START_SYNC: u8 = 0x77;

/// Sync byte closing a transmission (used by the outer framing layer)
pub const END_SYNC: u8 = 0xFF;

/// Samples per symbol (24000 / 4800)
pub const RADIO_SYMBOL_LENGTH: usize = 5;

/// Narrow C4FSK transmit filter
///
/// Generated using rcosdesign(0.2, 8, 5, 'sqrt') in MATLAB.
/// numTaps = 45, L = 5.
pub const C4FSK_FILTER: [i16; 45] = [
    0, 0, 0, 0, 401, 104, -340, -731, -847, -553, 112, 909, 1472, 1450, 683, -675, -2144, -3040,
    -2706, -770, 2667, 6995, 11237, 14331, 15464, 14331, 11237, 6995, 2667, -770, -2706, -3040,
    -2144, -675, 683, 1450, 1472, 909, 112, -553, -847, -731, -340, 104, 401,
];

/// Taps per polyphase branch for the narrow filter
pub const C4FSK_FILTER_PHASE_LEN: usize = 9;

/// Wide C4FSK transmit filter
///
/// Generated using rcosdesign(0.2, 4, 5, 'sqrt') in MATLAB.
/// numTaps = 25, L = 5.
pub const C4FSK_FILTER_WIDE: [i16; 25] = [
    0, 0, 0, 0, 688, -680, -2158, -3060, -2724, -775, 2684, 7041, 11310, 14425, 15565, 14425,
    11310, 7041, 2684, -775, -2724, -3060, -2158, -680, 688,
];

/// Taps per polyphase branch for the wide filter
pub const C4FSK_FILTER_WIDE_PHASE_LEN: usize = 5;

/// Symbol levels, high deviation, indexed by dibit value
///
/// Dibit 0b11 carries +3 (LEVELA, 3510), 0b10 +1 (LEVELB, 1170),
/// 0b00 -1 (LEVELC, -1170) and 0b01 -3 (LEVELD, -3510).
pub const LEVELS_HI: [i16; 4] = [-1170, -3510, 1170, 3510];

/// Symbol levels, low deviation, indexed by dibit value
pub const LEVELS_LO: [i16; 4] = [-585, -1755, 585, 1755];

/// Mode descriptor with the narrow transmit filter
pub static MODE: ModeConfig = ModeConfig {
    mode: ModemMode::Ysf,
    frame_length: FRAME_LENGTH_BYTES,
    sync_byte: START_SYNC,
    symbol_length: RADIO_SYMBOL_LENGTH,
    filter: &C4FSK_FILTER,
    phase_length: C4FSK_FILTER_PHASE_LEN,
    levels_hi: LEVELS_HI,
    levels_lo: LEVELS_LO,
    // 500 ms base plus 10 ms per host unit at 1200 bytes/s
    tx_delay_base: 600,
    tx_delay_step: 12,
    tx_delay_max: 1200,
    // 200 ms
    tx_delay_default: 240,
    hang_per_unit: 0,
};

/// Mode descriptor with the wide transmit filter
pub static MODE_WIDE: ModeConfig = ModeConfig {
    mode: ModemMode::Ysf,
    frame_length: FRAME_LENGTH_BYTES,
    sync_byte: START_SYNC,
    symbol_length: RADIO_SYMBOL_LENGTH,
    filter: &C4FSK_FILTER_WIDE,
    phase_length: C4FSK_FILTER_WIDE_PHASE_LEN,
    levels_hi: LEVELS_HI,
    levels_lo: LEVELS_LO,
    tx_delay_base: 600,
    tx_delay_step: 12,
    tx_delay_max: 1200,
    tx_delay_default: 240,
    hang_per_unit: 0,
};

/// Create a YSF transmit modulator (narrow filter)
#[must_use]
pub fn modulator() -> Modulator<YSF_TX_QUEUE_LEN> {
    Modulator::new(&MODE)
}

/// Create a YSF transmit modulator with the wide filter
#[must_use]
pub fn modulator_wide() -> Modulator<YSF_TX_QUEUE_LEN> {
    Modulator::new(&MODE_WIDE)
}
