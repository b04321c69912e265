//! Transmit Byte Queue
//!
//! Single-producer/single-consumer FIFO holding protocol frame bytes
//! awaiting modulation. Capacity is fixed at compile time and there is
//! no overwrite-on-full: writers must check `space` first.

use heapless::Deque;

/// Error returned by queue operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// `put` called with no free space
    QueueFull,
    /// `get` called with no data
    QueueEmpty,
}

#[cfg(feature = "embedded")]
impl defmt::Format for QueueError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::QueueFull => defmt::write!(f, "QueueFull"),
            Self::QueueEmpty => defmt::write!(f, "QueueEmpty"),
        }
    }
}

/// Fixed-capacity FIFO byte queue
///
/// Invariant: `used() + space() == N` at all times.
pub struct ByteQueue<const N: usize> {
    inner: Deque<u8, N>,
}

impl<const N: usize> ByteQueue<N> {
    /// Create an empty queue
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: Deque::new() }
    }

    /// Bytes the queue can still accept
    #[must_use]
    pub fn space(&self) -> usize {
        N - self.inner.len()
    }

    /// Bytes currently held
    #[must_use]
    pub fn used(&self) -> usize {
        self.inner.len()
    }

    /// Append one byte at the tail
    ///
    /// # Errors
    /// `QueueError::QueueFull` if the queue is at capacity; the queue
    /// is unchanged.
    pub fn put(&mut self, byte: u8) -> Result<(), QueueError> {
        self.inner
            .push_back(byte)
            .map_err(|_| QueueError::QueueFull)
    }

    /// Remove the byte at the head
    ///
    /// # Errors
    /// `QueueError::QueueEmpty` if no data is queued.
    pub fn get(&mut self) -> Result<u8, QueueError> {
        self.inner.pop_front().ok_or(QueueError::QueueEmpty)
    }

    /// Discard all queued bytes
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
