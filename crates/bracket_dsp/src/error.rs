//! DSP Error Types

use thiserror::Error;

/// Errors that can occur during filter design
#[derive(Error, Debug)]
pub enum DspError {
    #[error("Cutoff {freq}Hz is outside (0, Nyquist) at sample rate {sample_rate}Hz")]
    InvalidCutoff { freq: f32, sample_rate: f32 },

    #[error("Sample rate must be positive, got {0}")]
    InvalidSampleRate(f32),

    #[error("Filter design failed for cutoff {freq}Hz at sample rate {sample_rate}Hz")]
    InvalidCoefficients { freq: f32, sample_rate: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DspError::InvalidCutoff {
            freq: 30000.0,
            sample_rate: 44100.0,
        };
        assert!(err.to_string().contains("30000"));

        let err = DspError::InvalidSampleRate(-1.0);
        assert!(err.to_string().contains("-1"));
    }
}
