//! Error handling for rppg-vitals
//!
//! This module defines the error taxonomy and a Result alias used
//! throughout the crate. The [`host`](crate::host) layer collapses these
//! errors into boolean flags and the `0.0` "no estimate" sentinel.

use thiserror::Error;

/// Main error type for rppg-vitals operations
#[derive(Error, Debug)]
pub enum VitalsError {
    /// Empty sample buffer
    #[error("Invalid buffer: {0}")]
    InvalidBuffer(String),

    /// Explicit length parameter does not match the buffer
    #[error("Length mismatch: expected {expected} samples, buffer holds {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Sample rate is not a positive, finite number
    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(f32),

    /// Filter cutoffs outside (0, nyquist) or not ordered
    #[error("Invalid band {low}..{high} Hz (nyquist {nyquist} Hz)")]
    InvalidBand { low: f32, high: f32, nyquist: f32 },

    /// Input too short or search range empty
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors parsing sample recordings
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<VitalsError>,
    },
}

impl VitalsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        VitalsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for rppg-vitals operations
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
