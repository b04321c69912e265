//! TX Hang Behavior Tests
//!
//! Tests for the M17 hang window: the channel stays keyed for a
//! configured number of frame-equivalents of silence after the queue
//! drains, and new data resets the countdown.
//! Run with: cargo test --no-default-features --features std --test hang_tests

use dvmodem_firmware::dsp::filter::Sample;
use dvmodem_firmware::modem::sink::TransmitSink;
use dvmodem_firmware::modes::m17;
use dvmodem_firmware::types::{KeyState, ModemMode};

struct MockSink {
    space: usize,
    samples: Vec<Sample>,
}

impl MockSink {
    fn new(space: usize) -> Self {
        Self {
            space,
            samples: Vec::new(),
        }
    }
}

impl TransmitSink for MockSink {
    fn space(&self) -> usize {
        self.space
    }

    fn write(&mut self, _mode: ModemMode, samples: &[Sample]) {
        self.samples.extend_from_slice(samples);
    }
}

const FRAME: usize = m17::FRAME_LENGTH_BYTES;
const SPB: usize = 20; // 4 symbols/byte * L

#[test]
fn test_hang_holds_key_for_configured_frames() {
    let mut tx = m17::modulator();
    tx.set_tx_delay(0);
    tx.set_hang(1); // 25 frame-equivalents
    tx.write_frame(&[0xFFu8; FRAME]).unwrap();

    let mut sink = MockSink::new(1_000_000);
    tx.process(&mut sink); // preamble
    tx.process(&mut sink); // frame
    let after_data = sink.samples.len();
    assert_eq!(tx.key_state(), KeyState::Keyed);

    // Each further tick emits one frame-equivalent of silence
    for i in 1..=25 {
        tx.process(&mut sink);
        assert_eq!(sink.samples.len(), after_data + i * FRAME * SPB);
        assert_eq!(tx.key_state(), KeyState::Keyed, "tick {i}");
    }

    // Window exhausted: key released, no further output
    tx.process(&mut sink);
    assert_eq!(sink.samples.len(), after_data + 25 * FRAME * SPB);
    assert_eq!(tx.key_state(), KeyState::Unkeyed);
}

#[test]
fn test_hang_fill_settles_to_silence() {
    let mut tx = m17::modulator();
    tx.set_tx_delay(0);
    tx.set_hang(1);
    tx.write_frame(&[0x00u8; FRAME]).unwrap();

    let mut sink = MockSink::new(1_000_000);
    tx.process(&mut sink); // preamble
    tx.process(&mut sink); // frame
    tx.process(&mut sink); // first silence frame
    tx.process(&mut sink); // second silence frame

    // Once the filter flushes the last data symbols, the hang output
    // is exactly zero
    let tail = &sink.samples[sink.samples.len() - FRAME * SPB..];
    assert!(tail.iter().all(|&s| s == Sample::ZERO));
}

#[test]
fn test_new_frame_during_hang_resets_counter() {
    let mut tx = m17::modulator();
    tx.set_tx_delay(0);
    tx.set_hang(1);
    tx.write_frame(&[0xFFu8; FRAME]).unwrap();

    let mut sink = MockSink::new(1_000_000);
    tx.process(&mut sink); // preamble
    tx.process(&mut sink); // frame

    // Burn most of the hang window
    for _ in 0..20 {
        tx.process(&mut sink);
    }
    assert_eq!(tx.key_state(), KeyState::Keyed);

    // New data arrives: no new preamble, and the window restarts
    tx.write_frame(&[0xFFu8; FRAME]).unwrap();
    let before = sink.samples.len();
    tx.process(&mut sink);
    assert_eq!(sink.samples.len(), before + FRAME * SPB); // frame, not preamble

    for i in 1..=25 {
        tx.process(&mut sink);
        assert_eq!(tx.key_state(), KeyState::Keyed, "tick {i}");
    }
    tx.process(&mut sink);
    assert_eq!(tx.key_state(), KeyState::Unkeyed);
}

#[test]
fn test_zero_hang_releases_immediately() {
    let mut tx = m17::modulator();
    tx.set_tx_delay(0);
    tx.set_hang(0);
    tx.write_frame(&[0u8; FRAME]).unwrap();

    let mut sink = MockSink::new(1_000_000);
    tx.process(&mut sink); // preamble
    tx.process(&mut sink); // frame
    let emitted = sink.samples.len();

    tx.process(&mut sink);
    assert_eq!(sink.samples.len(), emitted);
    assert_eq!(tx.key_state(), KeyState::Unkeyed);
}

#[test]
fn test_transmission_after_hang_expiry_sends_preamble() {
    let mut tx = m17::modulator();
    tx.set_tx_delay(0); // 600-byte preamble
    tx.set_hang(1);
    tx.write_frame(&[0u8; FRAME]).unwrap();

    let mut sink = MockSink::new(1_000_000);
    // Preamble, frame, 25 silence frames, release
    for _ in 0..28 {
        tx.process(&mut sink);
    }
    assert_eq!(tx.key_state(), KeyState::Unkeyed);

    // Next transmission keys up from scratch
    tx.write_frame(&[0u8; FRAME]).unwrap();
    let before = sink.samples.len();
    tx.process(&mut sink);
    assert_eq!(sink.samples.len(), before + 600 * SPB);
}
