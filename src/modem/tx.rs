//! Transmit State Machine and Output Pacer
//!
//! The orchestrating component of the modulator: selects preamble,
//! frame, or hang-silence content for the pending output block, then
//! drains it byte by byte through the symbol mapper and pulse-shaping
//! filter, throttled by the space the hardware sink reports.
//!
//! `process` is called unconditionally from the scheduler tick and
//! performs a bounded amount of work: at most one block refill plus as
//! many byte conversions as the sink currently has room for.

use crate::config::PO_BUFFER_SIZE;
use crate::dsp::filter::{FirInterpolator, Sample, MAX_BLOCK_OUT};
use crate::modem::mode::ModeConfig;
use crate::modem::queue::ByteQueue;
use crate::modem::sink::TransmitSink;
use crate::types::{KeyState, TxError};

/// Content of the pending output block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockKind {
    /// Preamble sync bytes or frame data, run through the mapper
    Data,
    /// Hang-window silence, zero-level symbols bypassing the mapper
    Silence,
}

/// Transmit modulator for one protocol mode
///
/// Owns the byte queue, the filter state, and the pending output
/// block; the hardware sink is injected per tick. `QUEUE` is the byte
/// queue capacity, a whole multiple of the mode's frame length.
pub struct Modulator<const QUEUE: usize> {
    /// Protocol constants driving the machine
    config: &'static ModeConfig,
    /// Frame bytes awaiting transmission
    buffer: ByteQueue<QUEUE>,
    /// Pulse-shaping interpolation filter
    filter: FirInterpolator,
    /// Pending output block
    po_buffer: [u8; PO_BUFFER_SIZE],
    /// Valid bytes in the pending block
    po_len: usize,
    /// Read cursor into the pending block
    po_ptr: usize,
    /// What the pending block holds
    po_kind: BlockKind,
    /// Preamble length in bytes
    tx_delay: u16,
    /// Hang duration in frame-equivalents
    tx_hang: u32,
    /// Frame-equivalents of silence emitted since the queue drained
    tx_count: u32,
    /// Low-deviation level table selected
    lo_dev: bool,
    /// Keyed/unkeyed state
    key: KeyState,
}

impl<const QUEUE: usize> Modulator<QUEUE> {
    /// Create a modulator for a protocol mode
    #[must_use]
    pub fn new(config: &'static ModeConfig) -> Self {
        Self {
            config,
            buffer: ByteQueue::new(),
            filter: FirInterpolator::new(
                config.filter,
                config.symbol_length,
                config.phase_length,
            ),
            po_buffer: [0; PO_BUFFER_SIZE],
            po_len: 0,
            po_ptr: 0,
            po_kind: BlockKind::Data,
            tx_delay: config.tx_delay_default,
            tx_hang: 0,
            tx_count: 0,
            lo_dev: false,
            key: KeyState::Unkeyed,
        }
    }

    /// Enqueue exactly one frame of protocol data
    ///
    /// # Errors
    /// `TxError::InvalidLength` if `data` is not one frame long;
    /// `TxError::QueueFull` if less than a frame of queue space
    /// remains. Neither error mutates the queue.
    pub fn write_frame(&mut self, data: &[u8]) -> Result<(), TxError> {
        if data.len() != self.config.frame_length {
            return Err(TxError::InvalidLength);
        }

        if self.buffer.space() < self.config.frame_length {
            return Err(TxError::QueueFull);
        }

        for &byte in data {
            // Space was checked for the whole frame
            let _ = self.buffer.put(byte);
        }

        // Fresh data restarts the hang window
        self.tx_count = 0;

        Ok(())
    }

    /// Queue space expressed in whole frames, for producer flow control
    #[must_use]
    pub fn frame_space(&self) -> usize {
        self.buffer.space() / self.config.frame_length
    }

    /// Current keyed/unkeyed state
    #[must_use]
    pub const fn key_state(&self) -> KeyState {
        self.key
    }

    /// One bounded refill/drain tick, invoked from the scheduler
    pub fn process(&mut self, sink: &mut impl TransmitSink) {
        if self.po_len == 0 && !self.refill() {
            return;
        }

        let cost = self.config.samples_per_byte();
        let mut space = sink.space();

        // Local space estimate only; no re-query mid-burst
        while space > cost {
            match self.po_kind {
                BlockKind::Data => {
                    let byte = self.po_buffer[self.po_ptr];
                    self.write_byte(byte, sink);
                }
                BlockKind::Silence => self.write_silence(sink),
            }
            self.po_ptr += 1;
            space -= cost;

            if self.po_ptr >= self.po_len {
                self.po_ptr = 0;
                self.po_len = 0;
                return;
            }
        }
    }

    /// Set the preamble duration from a host TX delay setting
    pub fn set_tx_delay(&mut self, delay: u8) {
        self.tx_delay = self.config.tx_delay_bytes(delay);
    }

    /// Set the hang duration from a host setting
    ///
    /// Ignored by modes without hang support.
    pub fn set_hang(&mut self, hang: u8) {
        self.tx_hang = self.config.hang_frames(hang);
    }

    /// Select the low-deviation level table
    ///
    /// Takes effect at the next byte boundary; the filter history is
    /// reset when the setting changes.
    pub fn set_low_deviation(&mut self, on: bool) {
        if self.lo_dev != on {
            self.lo_dev = on;
            self.filter.reset();
        }
    }

    /// Halt output immediately
    ///
    /// Clears the pending block and the queue; the next enqueued frame
    /// starts over with a preamble. Filter history survives a stop.
    pub fn stop(&mut self) {
        self.po_len = 0;
        self.po_ptr = 0;
        self.buffer.clear();
        self.tx_count = 0;
        self.key = KeyState::Unkeyed;
    }

    /// Refill the pending block; returns false when there is nothing
    /// to transmit this tick.
    fn refill(&mut self) -> bool {
        if self.buffer.used() >= self.config.frame_length {
            if self.key == KeyState::Unkeyed {
                let len = usize::from(self.tx_delay).min(PO_BUFFER_SIZE);
                self.po_buffer[..len].fill(self.config.sync_byte);
                self.po_len = len;
                self.key = KeyState::Keyed;
            } else {
                // Refill only runs with a whole frame queued
                for slot in &mut self.po_buffer[..self.config.frame_length] {
                    *slot = self.buffer.get().unwrap_or(0);
                }
                self.po_len = self.config.frame_length;
                self.tx_count = 0;
            }
            self.po_kind = BlockKind::Data;
        } else if self.key == KeyState::Keyed
            && self.config.has_hang()
            && self.tx_count < self.tx_hang
        {
            // Hold key-up with a frame-equivalent of silence
            self.po_len = self.config.frame_length;
            self.po_kind = BlockKind::Silence;
            self.tx_count += 1;
        } else {
            self.key = KeyState::Unkeyed;
            return false;
        }

        self.po_ptr = 0;
        true
    }

    /// Modulate one byte: four symbol levels through the filter
    fn write_byte(&mut self, byte: u8, sink: &mut impl TransmitSink) {
        let symbols = self.config.map_byte(byte, self.lo_dev);
        let mut out = [Sample::ZERO; MAX_BLOCK_OUT];
        let n = self.filter.process(&symbols, &mut out);
        sink.write(self.config.mode, &out[..n]);
    }

    /// Emit one byte period of zero-level symbols
    fn write_silence(&mut self, sink: &mut impl TransmitSink) {
        let symbols = [Sample::ZERO; 4];
        let mut out = [Sample::ZERO; MAX_BLOCK_OUT];
        let n = self.filter.process(&symbols, &mut out);
        sink.write(self.config.mode, &out[..n]);
    }
}

#[cfg(feature = "embedded")]
impl<const QUEUE: usize> defmt::Format for Modulator<QUEUE> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Modulator({}, {}, queued={}, pending={})",
            self.config.mode,
            self.key,
            self.buffer.used(),
            self.po_len - self.po_ptr
        );
    }
}
