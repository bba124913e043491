//! Engine Error Types

use thiserror::Error;

/// Errors that can occur in the filter engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Stream configuration error: {0}")]
    ConfigError(String),

    #[error("Pipeline used before prepare()")]
    NotPrepared,

    #[error("DSP error: {0}")]
    Dsp(#[from] bracket_dsp::DspError),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::ConfigError("bad block size".into());
        assert!(err.to_string().contains("bad block size"));

        let err = EngineError::NotPrepared;
        assert!(err.to_string().contains("prepare"));
    }

    #[test]
    fn test_error_from_dsp() {
        let dsp_err = bracket_dsp::DspError::InvalidSampleRate(0.0);
        let engine_err: EngineError = dsp_err.into();
        assert!(matches!(engine_err, EngineError::Dsp(_)));
    }
}
