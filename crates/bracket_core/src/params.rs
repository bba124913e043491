//! Filter Parameters - Lock-Free Store and Snapshot
//!
//! The control context (UI interaction, host automation) writes parameters at
//! any time; the render context reads them exactly once per audio block.
//! Each parameter is an independent atomic, so neither context ever blocks
//! the other and no single field can be observed torn. The four fields of a
//! snapshot may reflect slightly different control-thread instants - full
//! cross-field consistency is not required, only glitch safety.
//!
//! Floats are stored as `AtomicU32` bit patterns, slopes as their choice
//! index.

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, trace};

use bracket_dsp::{Slope, MAX_FREQ_HZ, MIN_FREQ_HZ};

/// Host-facing descriptor for a continuous (frequency) parameter
///
/// The normalized mapping uses a skewed curve so control travel is biased
/// toward low frequencies, matching how cutoffs are perceived.
#[derive(Debug, Clone, Copy)]
pub struct FloatParamSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    /// Skew factor; 1.0 is linear, < 1.0 biases resolution toward `min`
    pub skew: f32,
    pub default: f32,
}

impl FloatParamSpec {
    /// Map a normalized position in `[0, 1]` to a parameter value
    pub fn value_from_normalized(&self, normalized: f32) -> f32 {
        let p = normalized.clamp(0.0, 1.0);
        self.min + (self.max - self.min) * p.powf(1.0 / self.skew)
    }

    /// Map a parameter value back to its normalized position in `[0, 1]`
    pub fn normalized_from_value(&self, value: f32) -> f32 {
        let p = (value.clamp(self.min, self.max) - self.min) / (self.max - self.min);
        p.powf(self.skew)
    }
}

/// Host-facing descriptor for a choice (slope) parameter
#[derive(Debug, Clone, Copy)]
pub struct ChoiceParamSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub choices: [&'static str; 4],
    pub default_index: usize,
}

/// Display labels for the four slope choices
pub const SLOPE_LABELS: [&str; 4] = ["12 db/Oct", "24 db/Oct", "36 db/Oct", "48 db/Oct"];

pub const LOW_CUT_FREQ: FloatParamSpec = FloatParamSpec {
    id: "LowCutFreq",
    name: "LowCutFreq",
    min: MIN_FREQ_HZ,
    max: MAX_FREQ_HZ,
    skew: 0.25,
    default: MIN_FREQ_HZ,
};

pub const HIGH_CUT_FREQ: FloatParamSpec = FloatParamSpec {
    id: "HighCutFreq",
    name: "HighCutFreq",
    min: MIN_FREQ_HZ,
    max: MAX_FREQ_HZ,
    skew: 0.25,
    default: MAX_FREQ_HZ,
};

pub const LOW_CUT_SLOPE: ChoiceParamSpec = ChoiceParamSpec {
    id: "LowCutSlope",
    name: "LowCutSlope",
    choices: SLOPE_LABELS,
    default_index: 0,
};

pub const HIGH_CUT_SLOPE: ChoiceParamSpec = ChoiceParamSpec {
    id: "HighCutSlope",
    name: "HighCutSlope",
    choices: SLOPE_LABELS,
    default_index: 0,
};

/// Immutable point-in-time copy of the user-facing settings
///
/// Rebuilt fresh each audio block from [`FilterParams::snapshot`]; no
/// identity beyond value equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSettings {
    pub low_cut_freq: f32,
    pub high_cut_freq: f32,
    pub low_cut_slope: Slope,
    pub high_cut_slope: Slope,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            low_cut_freq: LOW_CUT_FREQ.default,
            high_cut_freq: HIGH_CUT_FREQ.default,
            low_cut_slope: Slope::default(),
            high_cut_slope: Slope::default(),
        }
    }
}

/// Shared lock-free parameter storage
///
/// Lives behind an `Arc`: the control context holds one handle for writes,
/// the render pipeline another for per-block snapshot reads. Setters clamp
/// to the parameter range, so out-of-range values never reach the
/// coefficient factory from this path.
pub struct FilterParams {
    low_cut_freq_bits: AtomicU32,
    high_cut_freq_bits: AtomicU32,
    low_cut_slope_index: AtomicU32,
    high_cut_slope_index: AtomicU32,
}

impl FilterParams {
    pub fn new() -> Self {
        Self {
            low_cut_freq_bits: AtomicU32::new(LOW_CUT_FREQ.default.to_bits()),
            high_cut_freq_bits: AtomicU32::new(HIGH_CUT_FREQ.default.to_bits()),
            low_cut_slope_index: AtomicU32::new(LOW_CUT_SLOPE.default_index as u32),
            high_cut_slope_index: AtomicU32::new(HIGH_CUT_SLOPE.default_index as u32),
        }
    }

    pub fn set_low_cut_freq(&self, freq: f32) {
        let clamped = freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ);
        trace!("LowCutFreq -> {}Hz", clamped);
        self.low_cut_freq_bits
            .store(clamped.to_bits(), Ordering::Relaxed);
    }

    pub fn set_high_cut_freq(&self, freq: f32) {
        let clamped = freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ);
        trace!("HighCutFreq -> {}Hz", clamped);
        self.high_cut_freq_bits
            .store(clamped.to_bits(), Ordering::Relaxed);
    }

    pub fn set_low_cut_slope(&self, slope: Slope) {
        debug!("LowCutSlope -> {}", slope);
        self.low_cut_slope_index
            .store(slope.index() as u32, Ordering::Relaxed);
    }

    pub fn set_high_cut_slope(&self, slope: Slope) {
        debug!("HighCutSlope -> {}", slope);
        self.high_cut_slope_index
            .store(slope.index() as u32, Ordering::Relaxed);
    }

    /// Read all four parameters once
    ///
    /// # Real-time Safety
    /// Four relaxed atomic loads; no locks, no allocation. Called from the
    /// render context at the start of every block.
    pub fn snapshot(&self) -> ChainSettings {
        ChainSettings {
            low_cut_freq: f32::from_bits(self.low_cut_freq_bits.load(Ordering::Relaxed)),
            high_cut_freq: f32::from_bits(self.high_cut_freq_bits.load(Ordering::Relaxed)),
            low_cut_slope: Slope::from_index(
                self.low_cut_slope_index.load(Ordering::Relaxed) as usize
            )
            .unwrap_or_default(),
            high_cut_slope: Slope::from_index(
                self.high_cut_slope_index.load(Ordering::Relaxed) as usize,
            )
            .unwrap_or_default(),
        }
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::new()
    }
}
