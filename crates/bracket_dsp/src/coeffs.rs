//! Cut-Filter Coefficient Factory
//!
//! Designs Butterworth low-cut (high-pass) and high-cut (low-pass) cascades
//! as a sequence of BiQuad sections, using the RBJ (Robert Bristow-Johnson)
//! Audio EQ Cookbook designs from the `biquad` crate.
//!
//! A slope of `12*n` dB/oct is an analog Butterworth prototype of order `2n`
//! factored into `n` second-order sections. Section `k` (0-based) inherits
//! the Q of the prototype's k-th pole pair:
//!
//! ```text
//! Q_k = 1 / (2 * sin(pi * (2k + 1) / (4n)))
//! ```
//!
//! Each section is then realized digitally via the bilinear transform at the
//! shared cutoff frequency. All coefficients come out normalized (a0 = 1).

use std::f32::consts::PI;
use std::fmt;

use biquad::{Coefficients, ToHertz, Type};

use crate::error::DspError;

/// Maximum number of cascaded second-order sections per cut filter
pub const MAX_SECTIONS: usize = 4;

/// Lower bound of the user-facing cutoff range (Hz)
pub const MIN_FREQ_HZ: f32 = 20.0;

/// Upper bound of the user-facing cutoff range (Hz)
pub const MAX_FREQ_HZ: f32 = 20000.0;

/// Filter steepness in dB of attenuation per octave beyond cutoff
///
/// Quantized to the four slopes the control surface exposes. Each step adds
/// one second-order section to the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slope {
    #[default]
    Db12,
    Db24,
    Db36,
    Db48,
}

impl Slope {
    /// Number of cascaded BiQuad sections realizing this slope (1-4)
    pub fn sections(self) -> usize {
        self.index() + 1
    }

    /// Attenuation in dB per octave
    pub fn db_per_octave(self) -> u32 {
        12 * (self.index() as u32 + 1)
    }

    /// Position within the choice-parameter value list (0-3)
    pub fn index(self) -> usize {
        match self {
            Slope::Db12 => 0,
            Slope::Db24 => 1,
            Slope::Db36 => 2,
            Slope::Db48 => 3,
        }
    }

    /// Inverse of [`Slope::index`]; `None` for out-of-range indices
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slope::Db12),
            1 => Some(Slope::Db24),
            2 => Some(Slope::Db36),
            3 => Some(Slope::Db48),
            _ => None,
        }
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} db/Oct", self.db_per_octave())
    }
}

/// Which side of the spectrum a cut filter removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CutKind {
    /// Removes content below the cutoff (high-pass sections)
    LowCut,
    /// Removes content above the cutoff (low-pass sections)
    HighCut,
}

/// An ordered set of BiQuad coefficient sections for one cut filter
///
/// Fixed capacity of [`MAX_SECTIONS`]; only the first `len` entries are
/// meaningful. Plain value type so a set can be copied into each channel's
/// chain independently.
#[derive(Debug, Clone, Copy)]
pub struct CutCoefficients {
    sections: [Coefficients<f32>; MAX_SECTIONS],
    len: usize,
}

/// A do-nothing section (y = x), used to fill unused slots
pub(crate) fn pass_through() -> Coefficients<f32> {
    Coefficients {
        a1: 0.0,
        a2: 0.0,
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
    }
}

impl CutCoefficients {
    fn empty() -> Self {
        Self {
            sections: [pass_through(); MAX_SECTIONS],
            len: 0,
        }
    }

    fn push(&mut self, coeffs: Coefficients<f32>) {
        debug_assert!(self.len < MAX_SECTIONS);
        self.sections[self.len] = coeffs;
        self.len += 1;
    }

    /// Number of active sections (slope / 12)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active sections, in cascade order
    pub fn sections(&self) -> &[Coefficients<f32>] {
        &self.sections[..self.len]
    }
}

impl PartialEq for CutCoefficients {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .sections()
                .iter()
                .zip(other.sections())
                .all(|(a, b)| {
                    a.a1 == b.a1 && a.a2 == b.a2 && a.b0 == b.b0 && a.b1 == b.b1 && a.b2 == b.b2
                })
    }
}

/// Compute a low-cut (high-pass) Butterworth cascade
///
/// `freq` must lie in `(0, sample_rate / 2)`. Callers are expected to clamp
/// at the parameter boundary; this re-validates cheaply so out-of-range input
/// surfaces as an error instead of NaN/Inf coefficients in the audio path.
pub fn low_cut_coefficients(
    freq: f32,
    sample_rate: f32,
    slope: Slope,
) -> Result<CutCoefficients, DspError> {
    cascade(CutKind::LowCut, freq, sample_rate, slope)
}

/// Compute a high-cut (low-pass) Butterworth cascade
pub fn high_cut_coefficients(
    freq: f32,
    sample_rate: f32,
    slope: Slope,
) -> Result<CutCoefficients, DspError> {
    cascade(CutKind::HighCut, freq, sample_rate, slope)
}

/// Q of section `k` in an order-`2n` Butterworth cascade of `n` sections
fn butterworth_q(sections: usize, k: usize) -> f32 {
    let order = 2.0 * sections as f32;
    let theta = PI * (2 * k + 1) as f32 / (2.0 * order);
    1.0 / (2.0 * theta.sin())
}

fn cascade(
    kind: CutKind,
    freq: f32,
    sample_rate: f32,
    slope: Slope,
) -> Result<CutCoefficients, DspError> {
    if !(sample_rate > 0.0) || !sample_rate.is_finite() {
        return Err(DspError::InvalidSampleRate(sample_rate));
    }
    if !freq.is_finite() || freq <= 0.0 || freq >= sample_rate / 2.0 {
        return Err(DspError::InvalidCutoff { freq, sample_rate });
    }

    let sections = slope.sections();
    let mut out = CutCoefficients::empty();

    for k in 0..sections {
        let filter_type = match kind {
            CutKind::LowCut => Type::HighPass,
            CutKind::HighCut => Type::LowPass,
        };
        let coeffs = Coefficients::<f32>::from_params(
            filter_type,
            sample_rate.hz(),
            freq.hz(),
            butterworth_q(sections, k),
        )
        .map_err(|_| DspError::InvalidCoefficients { freq, sample_rate })?;
        out.push(coeffs);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_finite(coeffs: &CutCoefficients) -> bool {
        coeffs.sections().iter().all(|c| {
            c.a1.is_finite()
                && c.a2.is_finite()
                && c.b0.is_finite()
                && c.b1.is_finite()
                && c.b2.is_finite()
        })
    }

    #[test]
    fn test_section_count_matches_slope() {
        for slope in [Slope::Db12, Slope::Db24, Slope::Db36, Slope::Db48] {
            let low = low_cut_coefficients(1000.0, 44100.0, slope).unwrap();
            let high = high_cut_coefficients(5000.0, 44100.0, slope).unwrap();
            assert_eq!(low.len(), slope.sections());
            assert_eq!(high.len(), slope.sections());
        }
    }

    #[test]
    fn test_coefficients_are_finite() {
        // Sweep cutoffs across the usable band at several sample rates
        for sample_rate in [44100.0, 48000.0, 96000.0] {
            for freq in [20.0, 100.0, 1000.0, 10000.0, 20000.0] {
                for slope in [Slope::Db12, Slope::Db48] {
                    let coeffs = low_cut_coefficients(freq, sample_rate, slope).unwrap();
                    assert!(all_finite(&coeffs), "{}Hz @ {}Hz", freq, sample_rate);
                }
            }
        }
    }

    #[test]
    fn test_design_is_deterministic() {
        let a = high_cut_coefficients(5000.0, 44100.0, Slope::Db36).unwrap();
        let b = high_cut_coefficients(5000.0, 44100.0, Slope::Db36).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_cutoff_rejected() {
        assert!(low_cut_coefficients(0.0, 44100.0, Slope::Db12).is_err());
        assert!(low_cut_coefficients(-100.0, 44100.0, Slope::Db12).is_err());
        // At or above Nyquist
        assert!(low_cut_coefficients(22050.0, 44100.0, Slope::Db12).is_err());
        assert!(high_cut_coefficients(30000.0, 44100.0, Slope::Db12).is_err());
        // 20kHz cut at a low sample rate exceeds Nyquist - the reason callers
        // must clamp against the actual rate, not just the parameter range
        assert!(high_cut_coefficients(20000.0, 22050.0, Slope::Db12).is_err());
    }

    #[test]
    fn test_invalid_sample_rate_rejected() {
        assert!(matches!(
            low_cut_coefficients(1000.0, 0.0, Slope::Db12),
            Err(DspError::InvalidSampleRate(_))
        ));
        assert!(low_cut_coefficients(1000.0, -44100.0, Slope::Db12).is_err());
    }

    #[test]
    fn test_butterworth_section_q_values() {
        // Known pole-pair Qs for Butterworth prototypes
        assert!((butterworth_q(1, 0) - 0.7071).abs() < 1e-3); // order 2
        assert!((butterworth_q(2, 0) - 1.3066).abs() < 1e-3); // order 4
        assert!((butterworth_q(2, 1) - 0.5412).abs() < 1e-3);
        assert!((butterworth_q(4, 0) - 2.5629).abs() < 1e-3); // order 8
        assert!((butterworth_q(4, 3) - 0.5098).abs() < 1e-3);
    }

    #[test]
    fn test_slope_mapping() {
        assert_eq!(Slope::Db12.sections(), 1);
        assert_eq!(Slope::Db48.sections(), 4);
        assert_eq!(Slope::Db36.db_per_octave(), 36);
        assert_eq!(Slope::from_index(2), Some(Slope::Db36));
        assert_eq!(Slope::from_index(4), None);
        for i in 0..4 {
            assert_eq!(Slope::from_index(i).unwrap().index(), i);
        }
    }

    #[test]
    fn test_slope_labels() {
        assert_eq!(Slope::Db12.to_string(), "12 db/Oct");
        assert_eq!(Slope::Db48.to_string(), "48 db/Oct");
    }
}
