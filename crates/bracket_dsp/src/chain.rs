//! Filter Stages and Per-Channel Filter Chain
//!
//! One `FilterChain` is the complete processing path for a single audio
//! channel: a low-cut cascade followed by a high-cut cascade. Every cascade
//! pre-allocates [`MAX_SECTIONS`] stages at construction; changing slope only
//! flips bypass flags, so the real-time path never allocates.

use biquad::{Biquad, Coefficients, DirectForm2Transposed};

use crate::coeffs::{pass_through, CutCoefficients, MAX_SECTIONS};

/// One second-order IIR section with its own history and a bypass flag
///
/// DirectForm2Transposed is used for its numerical stability. A bypassed
/// stage is an exact identity regardless of its stored coefficients.
pub struct FilterStage {
    filter: DirectForm2Transposed<f32>,
    active: bool,
}

impl FilterStage {
    pub fn new() -> Self {
        Self {
            filter: DirectForm2Transposed::<f32>::new(pass_through()),
            active: false,
        }
    }

    /// Swap in new coefficients WITHOUT clearing history
    ///
    /// The stage keeps filtering its old state with the new coefficients from
    /// the next sample on. Updates land at block boundaries, so smooth
    /// parameter automation stays click-free; a large instantaneous jump can
    /// still produce a small transient. Accepted tradeoff, not a bug.
    pub fn set_coefficients(&mut self, coeffs: Coefficients<f32>) {
        self.filter.update_coefficients(coeffs);
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        if self.active {
            self.filter.run(x)
        } else {
            x
        }
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        self.filter.reset_state();
    }
}

impl Default for FilterStage {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed bank of cascaded stages realizing one cut filter
///
/// Applying a coefficient set activates exactly `set.len()` stages and
/// bypasses the rest. Stage count and ordering never change at runtime.
pub(crate) struct CutBank {
    stages: [FilterStage; MAX_SECTIONS],
}

impl CutBank {
    fn new() -> Self {
        Self {
            stages: core::array::from_fn(|_| FilterStage::new()),
        }
    }

    pub(crate) fn apply(&mut self, coeffs: &CutCoefficients) {
        for (i, stage) in self.stages.iter_mut().enumerate() {
            if let Some(&section) = coeffs.sections().get(i) {
                stage.set_coefficients(section);
                stage.set_active(true);
            } else {
                stage.set_active(false);
            }
        }
    }

    #[inline]
    fn process(&mut self, x: f32) -> f32 {
        let mut y = x;
        for stage in self.stages.iter_mut() {
            y = stage.process(y);
        }
        y
    }

    fn reset(&mut self) {
        for stage in self.stages.iter_mut() {
            stage.reset();
        }
    }

    #[cfg(test)]
    fn active_count(&self) -> usize {
        self.stages.iter().filter(|s| s.is_active()).count()
    }
}

/// The complete filter path for one audio channel
///
/// Fixed topology: low-cut cascade then high-cut cascade. Only coefficients
/// and bypass flags mutate after construction.
pub struct FilterChain {
    low_cut: CutBank,
    high_cut: CutBank,
}

impl FilterChain {
    pub fn new() -> Self {
        Self {
            low_cut: CutBank::new(),
            high_cut: CutBank::new(),
        }
    }

    pub fn apply_low_cut(&mut self, coeffs: &CutCoefficients) {
        self.low_cut.apply(coeffs);
    }

    pub fn apply_high_cut(&mut self, coeffs: &CutCoefficients) {
        self.high_cut.apply(coeffs);
    }

    /// Run one sample through both cascades in order
    ///
    /// # Real-time Safety
    /// No allocations, no syscalls. Safe to call from an audio callback.
    #[inline]
    pub fn process_sample(&mut self, x: f32) -> f32 {
        self.high_cut.process(self.low_cut.process(x))
    }

    /// Filter a channel buffer in place
    #[inline]
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Clear all stage delay lines
    pub fn reset(&mut self) {
        self.low_cut.reset();
        self.high_cut.reset();
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}
