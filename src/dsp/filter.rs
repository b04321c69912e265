//! Pulse-Shaping Interpolation Filter
//!
//! Polyphase FIR interpolator operating on Q1.15 fixed-point samples.
//! One symbol level in, L oversampled shaped samples out, with the
//! delay line carried across calls so successive blocks join without
//! discontinuities. Arithmetic matches the CMSIS `q15` convention:
//! products accumulate in `i32`, the result is shifted down 15 bits
//! and saturated.

use fixed::types::I1F15;

use crate::config::{FILTER_STATE_LEN, MAX_SYMBOL_LENGTH, SYMBOLS_PER_BYTE};

/// Fixed-point sample type (Q1.15 format)
pub type Sample = I1F15;

/// Convert f32 to fixed-point sample
#[must_use]
pub fn to_sample(value: f32) -> Sample {
    Sample::from_num(value.clamp(-1.0, 0.99997))
}

/// Convert fixed-point sample to f32
#[must_use]
pub fn from_sample(sample: Sample) -> f32 {
    sample.to_num::<f32>()
}

/// Maximum output samples produced per input block
pub const MAX_BLOCK_OUT: usize = SYMBOLS_PER_BYTE * MAX_SYMBOL_LENGTH;

/// Polyphase FIR interpolation filter state
///
/// Coefficients are a root-raised-cosine impulse response in raw Q1.15
/// bits, stored at the interpolated rate; phase `p` of output symbol
/// `n` is `sum_k coeffs[k*L + p] * x[n-k]`. The coefficient table and
/// interpolation factor are fixed at construction per protocol mode.
pub struct FirInterpolator {
    /// Filter coefficients, `phase_length * l` taps (Q1.15 raw bits)
    coeffs: &'static [i16],
    /// Interpolation factor L
    l: usize,
    /// Taps per polyphase branch
    phase_length: usize,
    /// Delay line, newest sample first
    state: [i16; FILTER_STATE_LEN],
}

impl FirInterpolator {
    /// Create a new interpolator for a protocol's coefficient set
    ///
    /// `coeffs.len()` must equal `phase_length * l`, and the delay line
    /// must be able to hold `phase_length` history samples.
    #[must_use]
    pub fn new(coeffs: &'static [i16], l: usize, phase_length: usize) -> Self {
        debug_assert_eq!(coeffs.len(), phase_length * l);
        debug_assert!(phase_length <= FILTER_STATE_LEN);
        debug_assert!(l <= MAX_SYMBOL_LENGTH);

        Self {
            coeffs,
            l,
            phase_length,
            state: [0; FILTER_STATE_LEN],
        }
    }

    /// Interpolation factor L
    #[must_use]
    pub const fn factor(&self) -> usize {
        self.l
    }

    /// Interpolate a block of symbol levels
    ///
    /// Writes `input.len() * L` samples into `output` and returns that
    /// count. `output` must be at least that long.
    pub fn process(&mut self, input: &[Sample], output: &mut [Sample]) -> usize {
        let mut produced = 0;

        for &sample in input {
            // Shift the delay line and insert the new symbol
            for k in (1..self.phase_length).rev() {
                self.state[k] = self.state[k - 1];
            }
            self.state[0] = sample.to_bits();

            for phase in 0..self.l {
                let mut acc: i32 = 0;
                for k in 0..self.phase_length {
                    acc += i32::from(self.coeffs[k * self.l + phase]) * i32::from(self.state[k]);
                }

                let value = (acc >> 15).clamp(i32::from(i16::MIN), i32::from(i16::MAX));
                #[allow(clippy::cast_possible_truncation)]
                let bits = value as i16;
                output[produced] = Sample::from_bits(bits);
                produced += 1;
            }
        }

        produced
    }

    /// Reset filter history
    ///
    /// Only needed when the coefficient or deviation configuration
    /// changes; a transmit stop leaves the history valid.
    pub fn reset(&mut self) {
        self.state.fill(0);
    }
}
