//! Hardware Sink Interface
//!
//! The downstream transmit queue (DAC driver) as seen by the modulator.
//! Both operations are synchronous and non-blocking; the reported space
//! is authoritative for pacing. Injected into `process` so the core has
//! no global I/O dependency and tests can supply a mock.

use crate::dsp::filter::Sample;
use crate::types::ModemMode;

/// Sample consumer on the hardware side of the modulator
pub trait TransmitSink {
    /// Samples of room remaining in the hardware output queue
    fn space(&self) -> usize;

    /// Accept a block of oversampled baseband samples
    ///
    /// Must not block; called only with blocks that fit the space
    /// reported at the start of the current drain burst.
    fn write(&mut self, mode: ModemMode, samples: &[Sample]);
}
