//! Core data types for rppg-vitals
//!
//! This module contains the frequency band types shared by the filter,
//! the peak finder and the configuration, and the per-window result record.

use serde::{Deserialize, Serialize};

/// Seconds per minute, used for Hz <-> per-minute conversion
pub const SECONDS_PER_MINUTE: f32 = 60.0;

/// A frequency band in Hz
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    /// Lower edge (Hz)
    pub low: f32,
    /// Upper edge (Hz)
    pub high: f32,
}

impl FrequencyBand {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Check that both edges, normalized by `nyquist`, satisfy
    /// `0 < low < high < 1`. NaN edges or a NaN `nyquist` fail.
    pub fn is_valid_below(&self, nyquist: f32) -> bool {
        let low_norm = self.low / nyquist;
        let high_norm = self.high / nyquist;
        low_norm > 0.0 && high_norm < 1.0 && low_norm < high_norm
    }
}

/// A rate band in cycles per minute (BPM or BrPM)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBand {
    /// Lower bound (per minute)
    pub min: f32,
    /// Upper bound (per minute)
    pub max: f32,
}

impl RateBand {
    /// Default heart rate search band (BPM)
    pub const HEART_RATE: RateBand = RateBand::new(40.0, 180.0);

    /// Default respiration rate search band (BrPM)
    pub const RESPIRATION_RATE: RateBand = RateBand::new(6.0, 42.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Convert to a band in Hz
    pub fn to_hz(self) -> FrequencyBand {
        FrequencyBand::new(self.min / SECONDS_PER_MINUTE, self.max / SECONDS_PER_MINUTE)
    }

    /// Check that `0 < min < max`
    pub fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min < self.max
    }
}

/// Vital sign estimates for one analysis window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalSigns {
    /// Heart rate in beats per minute (0.0 = no estimate)
    pub heart_rate_bpm: f32,
    /// Respiration rate in breaths per minute (0.0 = no estimate)
    pub respiration_rate_brpm: f32,
    /// Detrended, band-passed, min-max normalized waveform
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub waveform: Vec<f32>,
}
