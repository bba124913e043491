//! Bracket DSP - Cut-Filter Processing Core
//!
//! This crate provides the signal path for Bracket, including:
//! - Butterworth low-cut/high-cut coefficient design (12-48 dB/oct)
//! - Per-channel filter chains of pre-allocated BiQuad stages
//! - A stereo processor with fully independent channel state
//! - Zero-allocation processing path
//!
//! # Architecture
//!
//! Every cascade owns the maximum number of stages from the start; slope
//! changes only flip bypass flags, and coefficient swaps preserve stage
//! history. Nothing in the processing path allocates, locks, or logs.

mod chain;
mod coeffs;
mod error;
mod processor;

pub use chain::{FilterChain, FilterStage};
pub use coeffs::{
    high_cut_coefficients, low_cut_coefficients, CutCoefficients, Slope, MAX_FREQ_HZ, MAX_SECTIONS,
    MIN_FREQ_HZ,
};
pub use error::DspError;
pub use processor::StereoFilter;
