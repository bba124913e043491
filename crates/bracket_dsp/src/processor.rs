//! Dual-Channel (Stereo) Processor
//!
//! Two independent [`FilterChain`]s, one per channel, with non-shared history
//! state. Coefficient sets are copied into each chain rather than shared by
//! reference, so the channels could diverge if that were ever needed - here
//! both are always updated identically.

use crate::chain::FilterChain;
use crate::coeffs::CutCoefficients;

/// Stereo cut-filter processor
///
/// # Lifecycle
/// [`StereoFilter::prepare`] must be called before any processing, and again
/// whenever the sample rate changes (with audio stopped - preparation is not
/// reentrant-safe with [`StereoFilter::process_block`]).
///
/// # Real-time Safety
/// `process_block` and `apply_coefficients` perform no allocations and no
/// syscalls. Safe to call from an audio callback.
pub struct StereoFilter {
    left: FilterChain,
    right: FilterChain,
    sample_rate: f32,
    max_block_size: usize,
    prepared: bool,
}

impl StereoFilter {
    /// Create an unprepared processor; call [`StereoFilter::prepare`] next
    pub fn new() -> Self {
        Self {
            left: FilterChain::new(),
            right: FilterChain::new(),
            sample_rate: 0.0,
            max_block_size: 0,
            prepared: false,
        }
    }

    /// Initialize both chains for the given stream format
    ///
    /// # Panics
    /// Panics if `sample_rate` is not positive or `max_block_size` is zero.
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        assert!(
            sample_rate > 0.0 && sample_rate.is_finite(),
            "prepare() requires a positive sample rate, got {}",
            sample_rate
        );
        assert!(max_block_size > 0, "prepare() requires a non-zero block size");

        self.sample_rate = sample_rate;
        self.max_block_size = max_block_size;
        self.left.reset();
        self.right.reset();
        self.prepared = true;
    }

    /// Push identical coefficient sets into both channel chains
    #[inline]
    pub fn apply_coefficients(&mut self, low_cut: &CutCoefficients, high_cut: &CutCoefficients) {
        self.left.apply_low_cut(low_cut);
        self.left.apply_high_cut(high_cut);
        self.right.apply_low_cut(low_cut);
        self.right.apply_high_cut(high_cut);
    }

    /// Filter both channel buffers in place, independently
    ///
    /// # Panics
    /// Panics on host-contract breaches: processing before `prepare`, buffers
    /// of unequal length, or a block longer than the prepared maximum.
    #[inline]
    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        assert!(self.prepared, "process_block() called before prepare()");
        assert_eq!(
            left.len(),
            right.len(),
            "channel buffers must be the same length"
        );
        assert!(
            left.len() <= self.max_block_size,
            "block of {} samples exceeds prepared maximum {}",
            left.len(),
            self.max_block_size
        );

        self.left.process_block(left);
        self.right.process_block(right);
    }

    /// Clear all filter history (on playback stop or source switch)
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }
}

impl Default for StereoFilter {
    fn default() -> Self {
        Self::new()
    }
}
