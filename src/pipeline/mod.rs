//! Vitals pipeline
//!
//! Composes the analysis stages into the three pipeline operations:
//!
//! - [`process`]: detrend, band-pass through [`HEART_RATE_BAND`], min-max
//!   normalize. Produces the conditioned waveform.
//! - [`heart_rate`]: power spectrum of the signal *as given* (no
//!   pre-filtering), peak in the BPM band.
//! - [`respiration_rate`]: band-pass through [`RESPIRATION_BAND`] first,
//!   then power spectrum and peak in the BrPM band.
//!
//! [`VitalsAnalyzer`] runs all three over one window with a shared
//! [`AnalysisConfig`].

pub mod window;

pub use window::{AnalysisWindow, Windows};

use crate::analysis::filter::validate_sample_rate;
use crate::analysis::{
    bandpass, detrend, peak_frequency, power_spectrum, HEART_RATE_BAND, RESPIRATION_BAND,
};
use crate::config::AnalysisConfig;
use crate::error::{Result, ResultExt, VitalsError};
use crate::types::{RateBand, VitalSigns, SECONDS_PER_MINUTE};

/// Condition a raw waveform: detrend, band-pass (0.8-3.0 Hz), normalize to [0, 1].
///
/// If the filtered signal is flat it is returned unnormalized.
pub fn process(input: &[f32], sample_rate: f32) -> Result<Vec<f32>> {
    if input.is_empty() {
        return Err(VitalsError::InvalidBuffer("process input is empty".to_string()));
    }

    let mut detrended = input.to_vec();
    detrend(&mut detrended);

    let mut output = bandpass(&detrended, sample_rate, HEART_RATE_BAND)?;
    normalize(&mut output);

    Ok(output)
}

/// Min-max normalize `signal` to [0, 1] in place. Flat signals are left untouched.
pub fn normalize(signal: &mut [f32]) {
    let (min, max) = signal
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    if range > 0.0 {
        for s in signal.iter_mut() {
            *s = (*s - min) / range;
        }
    }
}

/// Estimate heart rate (BPM) from the spectral peak inside `band`.
///
/// The signal is analysed as given; only the search band limits the result.
pub fn heart_rate(signal: &[f32], sample_rate: f32, band: RateBand) -> Result<f32> {
    validate_sample_rate(sample_rate)?;

    let psd = power_spectrum(signal)?;
    let peak_hz = peak_frequency(&psd, sample_rate, band.to_hz())?;

    Ok(peak_hz * SECONDS_PER_MINUTE)
}

/// Estimate respiration rate (BrPM): band-pass 0.1-0.7 Hz, then spectral peak inside `band`.
pub fn respiration_rate(signal: &[f32], sample_rate: f32, band: RateBand) -> Result<f32> {
    let filtered = bandpass(signal, sample_rate, RESPIRATION_BAND)?;

    let psd = power_spectrum(&filtered)?;
    let peak_hz = peak_frequency(&psd, sample_rate, band.to_hz())?;

    Ok(peak_hz * SECONDS_PER_MINUTE)
}

/// Runs the full pipeline over analysis windows
#[derive(Debug, Clone, Default)]
pub struct VitalsAnalyzer {
    config: AnalysisConfig,
}

impl VitalsAnalyzer {
    /// Create an analyzer, rejecting configurations that cannot work
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get current config
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse one window of samples.
    ///
    /// Conditioning failures are errors. A rate that cannot be estimated
    /// (e.g. the window is too short for the search band) is reported as
    /// `0.0`, the "no estimate" value.
    pub fn analyze(&self, samples: &[f32]) -> Result<VitalSigns> {
        let sample_rate = self.config.sample_rate;

        let waveform = process(samples, sample_rate).context("Failed to condition waveform")?;

        let heart_rate_bpm = heart_rate(samples, sample_rate, self.config.heart_rate)
            .unwrap_or_else(|e| {
                tracing::warn!("No heart rate estimate: {}", e);
                0.0
            });

        let respiration_rate_brpm =
            respiration_rate(samples, sample_rate, self.config.respiration_rate).unwrap_or_else(
                |e| {
                    tracing::warn!("No respiration rate estimate: {}", e);
                    0.0
                },
            );

        tracing::debug!(
            "Window of {} samples: {:.1} BPM, {:.1} BrPM",
            samples.len(),
            heart_rate_bpm,
            respiration_rate_brpm
        );

        Ok(VitalSigns {
            heart_rate_bpm,
            respiration_rate_brpm,
            waveform,
        })
    }

    /// Slide analysis windows over a whole recording.
    pub fn windows<'a>(&self, recording: &'a [f32]) -> Windows<'a> {
        Windows::new(
            recording,
            self.config.window_samples(),
            self.config.hop_samples(),
            self.config.sample_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(freq: f32, amplitude: f32, sample_rate: f32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| amplitude * (2.0 * PI * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_process_output_is_normalized() {
        let input: Vec<f32> = sine(1.2, 1.0, 30.0, 300)
            .iter()
            .enumerate()
            .map(|(i, s)| s + 100.0 + 0.05 * i as f32)
            .collect();

        let out = process(&input, 30.0).unwrap();
        assert_eq!(out.len(), input.len());
        let min = out.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = out.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(min.abs() < 1e-6);
        assert!((max - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_process_flat_input_stays_unnormalized() {
        let out = process(&[5.0; 64], 30.0).unwrap();
        assert!(out.iter().all(|&v| v.abs() < 1e-4));
    }

    #[test]
    fn test_process_single_sample() {
        let out = process(&[3.0], 30.0).unwrap();
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn test_process_rejects_invalid_input() {
        assert!(matches!(process(&[], 30.0), Err(VitalsError::InvalidBuffer(_))));
        // nyquist 2 Hz is below the 3 Hz upper cutoff
        assert!(matches!(
            process(&[1.0; 16], 4.0),
            Err(VitalsError::InvalidBand { .. })
        ));
    }

    #[test]
    fn test_normalize() {
        let mut s = vec![2.0, 4.0, 3.0];
        normalize(&mut s);
        assert_eq!(s, vec![0.0, 1.0, 0.5]);

        let mut flat = vec![7.0; 4];
        normalize(&mut flat);
        assert_eq!(flat, vec![7.0; 4]);
    }

    #[test]
    fn test_heart_rate_of_sine() {
        let signal = sine(1.5, 1.0, 30.0, 300);
        let bpm = heart_rate(&signal, 30.0, RateBand::HEART_RATE).unwrap();
        assert!((bpm - 90.0).abs() < 4.0, "expected ~90 BPM, got {}", bpm);
    }

    #[test]
    fn test_heart_rate_is_not_prefiltered() {
        // 4 Hz lies outside the 0.8-3.0 Hz conditioning band but inside a
        // widened search band, so it must still be found.
        let signal = sine(4.0, 1.0, 30.0, 300);
        let bpm = heart_rate(&signal, 30.0, RateBand::new(40.0, 300.0)).unwrap();
        assert!((bpm - 240.0).abs() < 4.0, "expected ~240 BPM, got {}", bpm);
    }

    #[test]
    fn test_rate_errors() {
        assert!(heart_rate(&[], 30.0, RateBand::HEART_RATE).is_err());
        assert!(matches!(
            heart_rate(&[1.0; 8], -1.0, RateBand::HEART_RATE),
            Err(VitalsError::InvalidSampleRate(_))
        ));
        assert!(respiration_rate(&[], 30.0, RateBand::RESPIRATION_RATE).is_err());
        // 1 Hz sample rate: 0.7 Hz upper cutoff is above nyquist
        assert!(matches!(
            respiration_rate(&[1.0; 64], 1.0, RateBand::RESPIRATION_RATE),
            Err(VitalsError::InvalidBand { .. })
        ));
        // Too short to resolve any bin inside the band
        assert!(matches!(
            heart_rate(&[1.0; 4], 30.0, RateBand::HEART_RATE),
            Err(VitalsError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_analyzer_reports_sentinel_for_short_window() {
        let analyzer = VitalsAnalyzer::default();
        let vitals = analyzer.analyze(&[1.0, 2.0, 3.0, 2.0]).unwrap();
        assert_eq!(vitals.heart_rate_bpm, 0.0);
        assert_eq!(vitals.respiration_rate_brpm, 0.0);
        assert_eq!(vitals.waveform.len(), 4);
    }

    #[test]
    fn test_analyzer_rejects_invalid_config() {
        let config = AnalysisConfig {
            sample_rate: -30.0,
            ..Default::default()
        };
        assert!(VitalsAnalyzer::new(config).is_err());
    }
}
