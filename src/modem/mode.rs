//! Protocol Mode Descriptor
//!
//! One `ModeConfig` instance per supported protocol. The state machine
//! in [`crate::modem::tx`] is generic over this data, so adding a mode
//! means adding a table, not another copy of the machine.

use crate::dsp::filter::Sample;
use crate::types::ModemMode;

/// Per-protocol constants driving the shared modulator
///
/// Level tables are indexed by dibit value (`byte >> 6` for the first
/// symbol), so each protocol's exact 2-bit-to-level mapping is encoded
/// in table order.
pub struct ModeConfig {
    /// Mode tag passed to the hardware sink
    pub mode: ModemMode,
    /// Frame length in bytes
    pub frame_length: usize,
    /// Sync byte repeated for the preamble
    pub sync_byte: u8,
    /// Interpolation factor L (samples per symbol)
    pub symbol_length: usize,
    /// Pulse-shaping filter impulse response (Q1.15 raw bits)
    pub filter: &'static [i16],
    /// Taps per polyphase branch (`filter.len() / symbol_length`)
    pub phase_length: usize,
    /// Symbol levels, high deviation, indexed by dibit
    pub levels_hi: [i16; 4],
    /// Symbol levels, low deviation, indexed by dibit
    pub levels_lo: [i16; 4],
    /// Preamble bytes emitted before TX delay adjustment
    pub tx_delay_base: u16,
    /// Preamble bytes added per TX delay unit
    pub tx_delay_step: u16,
    /// Preamble length ceiling in bytes
    pub tx_delay_max: u16,
    /// Preamble length before the host configures a TX delay
    pub tx_delay_default: u16,
    /// Hang frame-equivalents per configuration unit (0 = no hang)
    pub hang_per_unit: u32,
}

impl ModeConfig {
    /// Map one byte to four symbol levels, most-significant pair first
    ///
    /// The deviation flag selects the whole table for the byte; it is
    /// never consulted mid-byte.
    #[must_use]
    pub fn map_byte(&self, byte: u8, lo_dev: bool) -> [Sample; 4] {
        let levels = if lo_dev { &self.levels_lo } else { &self.levels_hi };

        let mut symbols = [Sample::ZERO; 4];
        let mut c = byte;
        for symbol in &mut symbols {
            let dibit = usize::from(c >> 6);
            *symbol = Sample::from_bits(levels[dibit]);
            c <<= 2;
        }

        symbols
    }

    /// Convert a host TX delay setting into a preamble byte count
    ///
    /// Linear formula with silent clamping; out-of-range settings are
    /// never rejected.
    #[must_use]
    pub fn tx_delay_bytes(&self, delay: u8) -> u16 {
        let bytes = self
            .tx_delay_base
            .saturating_add(u16::from(delay).saturating_mul(self.tx_delay_step));
        bytes.min(self.tx_delay_max)
    }

    /// Convert a host hang setting into a frame-equivalent count
    #[must_use]
    pub fn hang_frames(&self, hang: u8) -> u32 {
        u32::from(hang) * self.hang_per_unit
    }

    /// Whether this mode holds key-up after the queue drains
    #[must_use]
    pub const fn has_hang(&self) -> bool {
        self.hang_per_unit > 0
    }

    /// Sink samples produced per modulated byte (`4 * L`)
    #[must_use]
    pub const fn samples_per_byte(&self) -> usize {
        4 * self.symbol_length
    }
}
