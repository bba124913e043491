//! Filter Update Pipeline
//!
//! The single synchronization point between control-rate parameter changes
//! and sample-rate processing. Once per delivered audio block the pipeline
//! snapshots the shared parameters, redesigns both cut cascades, hot-swaps
//! them into the stereo filter, and then processes the block - all
//! synchronously on the render context, with no locks and no allocation.

use std::sync::Arc;

use tracing::{debug, info};

use bracket_dsp::{
    high_cut_coefficients, low_cut_coefficients, StereoFilter, MAX_FREQ_HZ, MIN_FREQ_HZ,
};

use crate::config::StreamConfig;
use crate::error::{EngineError, EngineResult};
use crate::params::{ChainSettings, FilterParams};

/// Fraction of the sample rate usable as a cutoff ceiling
///
/// Keeps a 20kHz cut legal at 44.1kHz while pulling the ceiling safely under
/// Nyquist at lower rates (e.g., ~10.8kHz at 22.05kHz).
const MAX_CUTOFF_RATIO: f32 = 0.49;

/// Per-block coordinator owning the render-side filter state
///
/// The control context keeps its own `Arc<FilterParams>` handle for writes;
/// the pipeline is the sole owner of the filters themselves.
pub struct FilterPipeline {
    params: Arc<FilterParams>,
    filter: StereoFilter,
    sample_rate: f32,
}

impl FilterPipeline {
    /// Create an unprepared pipeline sharing the given parameter store
    pub fn new(params: Arc<FilterParams>) -> Self {
        Self {
            params,
            filter: StereoFilter::new(),
            sample_rate: 0.0,
        }
    }

    /// Initialize for a stream format; call before the first block and again
    /// on any sample-rate change (with audio stopped)
    pub fn prepare(&mut self, config: &StreamConfig) -> EngineResult<()> {
        config.validate().map_err(EngineError::ConfigError)?;

        self.sample_rate = config.sample_rate as f32;
        self.filter
            .prepare(self.sample_rate, config.max_block_size as usize);
        self.update_filters()?;

        info!(
            sample_rate = config.sample_rate,
            max_block_size = config.max_block_size,
            "filter pipeline prepared"
        );
        Ok(())
    }

    /// Refresh both channel chains from the current parameter snapshot
    ///
    /// Called at the start of every block, before processing. Cutoffs are
    /// clamped against the prepared sample rate so a parameter stored for a
    /// higher rate can never push the factory past Nyquist.
    pub fn update_filters(&mut self) -> EngineResult<()> {
        if !self.filter.is_prepared() {
            return Err(EngineError::NotPrepared);
        }

        let settings = self.params.snapshot();
        let ceiling = (self.sample_rate * MAX_CUTOFF_RATIO).min(MAX_FREQ_HZ);

        let low_cut = low_cut_coefficients(
            settings.low_cut_freq.clamp(MIN_FREQ_HZ, ceiling),
            self.sample_rate,
            settings.low_cut_slope,
        )?;
        let high_cut = high_cut_coefficients(
            settings.high_cut_freq.clamp(MIN_FREQ_HZ, ceiling),
            self.sample_rate,
            settings.high_cut_slope,
        )?;

        self.filter.apply_coefficients(&low_cut, &high_cut);
        Ok(())
    }

    /// Process one audio block: refresh coefficients, then filter both
    /// channels in place
    ///
    /// # Real-time Safety
    /// No locks, no allocation, no logging. Must complete before the next
    /// block is due; every step is bounded.
    pub fn render_block(&mut self, left: &mut [f32], right: &mut [f32]) -> EngineResult<()> {
        self.update_filters()?;
        self.filter.process_block(left, right);
        Ok(())
    }

    /// Clear filter history (on playback stop)
    pub fn reset(&mut self) {
        debug!("filter pipeline reset");
        self.filter.reset();
    }

    /// The settings the render side currently sees
    pub fn current_settings(&self) -> ChainSettings {
        self.params.snapshot()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}
