//! Band-pass filtering
//!
//! A first-order IIR cascade (single-pole high-pass followed by single-pole
//! low-pass) approximating a Butterworth band-pass. Downstream peak
//! detection is tuned to this roll-off, so the cascade must stay first
//! order.
//!
//! Note the coefficient pairing: the stage built from the *high* cutoff's
//! RC constant is the high-pass stage, the stage built from the *low*
//! cutoff's RC constant is the low-pass stage.

use crate::error::{Result, VitalsError};
use crate::types::FrequencyBand;
use std::f32::consts::PI;

/// Conditioning band for the heart rate waveform (0.8-3.0 Hz = 48-180 BPM)
pub const HEART_RATE_BAND: FrequencyBand = FrequencyBand::new(0.8, 3.0);

/// Conditioning band for respiration (0.1-0.7 Hz = 6-42 BrPM)
pub const RESPIRATION_BAND: FrequencyBand = FrequencyBand::new(0.1, 0.7);

/// Smoothing coefficients of the two filter stages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandpassCoefficients {
    /// High-pass stage coefficient, `rc_high / (rc_high + dt)`
    pub alpha_high: f32,
    /// Low-pass stage coefficient, `dt / (rc_low + dt)`
    pub alpha_low: f32,
}

impl BandpassCoefficients {
    /// Validate the band against the sample rate and derive coefficients.
    pub fn new(sample_rate: f32, band: FrequencyBand) -> Result<Self> {
        validate_sample_rate(sample_rate)?;

        let nyquist = sample_rate / 2.0;
        if !band.is_valid_below(nyquist) {
            return Err(VitalsError::InvalidBand {
                low: band.low,
                high: band.high,
                nyquist,
            });
        }

        let rc_low = 1.0 / (2.0 * PI * band.low);
        let rc_high = 1.0 / (2.0 * PI * band.high);
        let dt = 1.0 / sample_rate;

        Ok(Self {
            alpha_high: rc_high / (rc_high + dt),
            alpha_low: dt / (rc_low + dt),
        })
    }

    /// Run the high-pass then low-pass recurrences over `input`.
    pub fn apply(&self, input: &[f32]) -> Vec<f32> {
        let Some(&first) = input.first() else {
            return Vec::new();
        };

        let mut temp = vec![0.0f32; input.len()];
        temp[0] = first;
        for i in 1..input.len() {
            temp[i] = self.alpha_high * (temp[i - 1] + input[i] - input[i - 1]);
        }

        let mut output = vec![0.0f32; input.len()];
        output[0] = temp[0];
        for i in 1..input.len() {
            output[i] = output[i - 1] + self.alpha_low * (temp[i] - output[i - 1]);
        }

        output
    }
}

/// Check that the sample rate is positive and finite.
pub fn validate_sample_rate(sample_rate: f32) -> Result<()> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(VitalsError::InvalidSampleRate(sample_rate))
    }
}

/// Band-pass filter `input` sampled at `sample_rate` Hz through `band`.
///
/// Returns a freshly allocated buffer of the same length. Fails with
/// [`VitalsError::InvalidBuffer`] for an empty input and
/// [`VitalsError::InvalidBand`] when the cutoffs are not inside
/// `(0, nyquist)` or are not ordered.
pub fn bandpass(input: &[f32], sample_rate: f32, band: FrequencyBand) -> Result<Vec<f32>> {
    if input.is_empty() {
        return Err(VitalsError::InvalidBuffer(
            "band-pass input is empty".to_string(),
        ));
    }

    let coeffs = BandpassCoefficients::new(sample_rate, band)?;
    tracing::trace!(
        "Band-pass {}..{} Hz at {} Hz: alpha_high={}, alpha_low={}",
        band.low,
        band.high,
        sample_rate,
        coeffs.alpha_high,
        coeffs.alpha_low
    );

    Ok(coeffs.apply(input))
}
