//! Configuration module for rppg-vitals
//!
//! [`AnalysisConfig`] holds everything needed to turn a recording into
//! per-window vital sign estimates: the sample rate, the BPM/BrPM search
//! bands and the analysis window geometry. It is stored as TOML; every
//! field is optional and falls back to its default.
//!
//! # Example
//!
//! ```toml
//! sample_rate = 30.0
//! window_seconds = 10.0
//! hop_seconds = 1.0
//!
//! [heart_rate]
//! min = 40.0
//! max = 180.0
//!
//! [respiration_rate]
//! min = 6.0
//! max = 42.0
//! ```

use crate::error::{Result, VitalsError};
use crate::types::RateBand;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default sample rate in Hz (typical camera frame rate)
pub const DEFAULT_SAMPLE_RATE_HZ: f32 = 30.0;

/// Default analysis window length in seconds
pub const DEFAULT_WINDOW_SECONDS: f32 = 10.0;

/// Default hop between consecutive windows in seconds
pub const DEFAULT_HOP_SECONDS: f32 = 1.0;

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sample rate of the input waveform (Hz)
    pub sample_rate: f32,

    /// Length of one analysis window (seconds)
    pub window_seconds: f32,

    /// Step between the starts of consecutive windows (seconds)
    pub hop_seconds: f32,

    // Tables serialize after plain values
    /// Heart rate search band (BPM)
    pub heart_rate: RateBand,

    /// Respiration rate search band (BrPM)
    pub respiration_rate: RateBand,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE_HZ,
            window_seconds: DEFAULT_WINDOW_SECONDS,
            hop_seconds: DEFAULT_HOP_SECONDS,
            heart_rate: RateBand::HEART_RATE,
            respiration_rate: RateBand::RESPIRATION_RATE,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| VitalsError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VitalsError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save the configuration as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    VitalsError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| VitalsError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            VitalsError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }

    /// Number of samples in one analysis window (at least 1)
    pub fn window_samples(&self) -> usize {
        ((self.window_seconds * self.sample_rate).round() as usize).max(1)
    }

    /// Number of samples between window starts (at least 1)
    pub fn hop_samples(&self) -> usize {
        ((self.hop_seconds * self.sample_rate).round() as usize).max(1)
    }

    /// Check the configuration for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(VitalsError::Config(format!(
                "sample_rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if !self.heart_rate.is_valid() {
            return Err(VitalsError::Config(format!(
                "heart_rate band must satisfy 0 < min < max, got {}..{}",
                self.heart_rate.min, self.heart_rate.max
            )));
        }
        if !self.respiration_rate.is_valid() {
            return Err(VitalsError::Config(format!(
                "respiration_rate band must satisfy 0 < min < max, got {}..{}",
                self.respiration_rate.min, self.respiration_rate.max
            )));
        }
        if !(self.window_seconds > 0.0) || !(self.hop_seconds > 0.0) {
            return Err(VitalsError::Config(format!(
                "window_seconds and hop_seconds must be positive, got {} and {}",
                self.window_seconds, self.hop_seconds
            )));
        }
        Ok(())
    }
}
