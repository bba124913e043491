//! Bracket Core - Filter Engine
//!
//! This crate coordinates the control and render sides of the Bracket filter
//! core:
//! - Lock-free parameter storage shared between contexts
//! - Per-block parameter snapshot and coefficient refresh
//! - Host-facing parameter descriptors (ranges, labels, skew curves)
//! - Stream configuration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Control Context                         │
//! │   (UI / host automation) ──atomic stores──▶ FilterParams    │
//! └─────────────────────────────────────────────────────────────┘
//!                               │ Arc (lock-free reads)
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Render Context                         │
//! │   snapshot ──▶ coefficient factory ──▶ StereoFilter         │
//! │              (zero allocation in this path)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod params;
mod pipeline;

pub use config::StreamConfig;
pub use error::{EngineError, EngineResult};
pub use params::{
    ChainSettings, ChoiceParamSpec, FilterParams, FloatParamSpec, HIGH_CUT_FREQ, HIGH_CUT_SLOPE,
    LOW_CUT_FREQ, LOW_CUT_SLOPE, SLOPE_LABELS,
};
pub use pipeline::FilterPipeline;

// Re-export DSP types for convenience
pub use bracket_dsp::{
    high_cut_coefficients, low_cut_coefficients, CutCoefficients, DspError, Slope, StereoFilter,
    MAX_FREQ_HZ, MAX_SECTIONS, MIN_FREQ_HZ,
};
