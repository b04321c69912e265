//! Transmit Byte Queue Tests
//!
//! Tests for the fixed-capacity FIFO between the frame producer and
//! the drain tick.
//! Run with: cargo test --no-default-features --features std --test queue_tests

use dvmodem_firmware::modem::queue::{ByteQueue, QueueError};

#[test]
fn test_new_queue_is_empty() {
    let q: ByteQueue<64> = ByteQueue::new();
    assert_eq!(q.used(), 0);
    assert_eq!(q.space(), 64);
}

#[test]
fn test_put_get_fifo_order() {
    let mut q: ByteQueue<16> = ByteQueue::new();
    for byte in [0x10, 0x20, 0x30, 0x40] {
        q.put(byte).unwrap();
    }
    assert_eq!(q.get(), Ok(0x10));
    assert_eq!(q.get(), Ok(0x20));
    assert_eq!(q.get(), Ok(0x30));
    assert_eq!(q.get(), Ok(0x40));
}

#[test]
fn test_used_plus_space_is_capacity() {
    let mut q: ByteQueue<32> = ByteQueue::new();
    assert_eq!(q.used() + q.space(), 32);

    for i in 0..20 {
        q.put(i).unwrap();
        assert_eq!(q.used() + q.space(), 32);
    }
    for _ in 0..7 {
        q.get().unwrap();
        assert_eq!(q.used() + q.space(), 32);
    }
}

#[test]
fn test_put_fails_when_full() {
    let mut q: ByteQueue<8> = ByteQueue::new();
    for i in 0..8 {
        q.put(i).unwrap();
    }
    assert_eq!(q.space(), 0);
    assert_eq!(q.put(0xAA), Err(QueueError::QueueFull));
    // Failed put leaves the contents intact
    assert_eq!(q.used(), 8);
    assert_eq!(q.get(), Ok(0));
}

#[test]
fn test_get_fails_when_empty() {
    let mut q: ByteQueue<8> = ByteQueue::new();
    assert_eq!(q.get(), Err(QueueError::QueueEmpty));

    q.put(0x55).unwrap();
    assert_eq!(q.get(), Ok(0x55));
    assert_eq!(q.get(), Err(QueueError::QueueEmpty));
}

#[test]
fn test_wraparound_preserves_order() {
    let mut q: ByteQueue<4> = ByteQueue::new();
    // Cycle the ring several times past its capacity
    for round in 0u8..10 {
        for i in 0..4 {
            q.put(round.wrapping_mul(4) + i).unwrap();
        }
        for i in 0..4 {
            assert_eq!(q.get(), Ok(round.wrapping_mul(4) + i));
        }
    }
}

#[test]
fn test_clear() {
    let mut q: ByteQueue<8> = ByteQueue::new();
    for i in 0..5 {
        q.put(i).unwrap();
    }
    q.clear();
    assert_eq!(q.used(), 0);
    assert_eq!(q.space(), 8);
    assert_eq!(q.get(), Err(QueueError::QueueEmpty));
}
