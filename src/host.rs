//! Host boundary
//!
//! Entry points for a host runtime that hands over raw sample buffers with
//! an explicit length. Failures never cross this boundary as errors:
//! buffer-producing calls report `false`, rate calls report `0.0`
//! ("no estimate"). The underlying cause is logged at debug level.
//!
//! The explicit `length` must equal the buffer length; output buffers must
//! hold at least `length` samples. On failure output buffers are left
//! unchanged.

use crate::analysis;
use crate::error::{Result, VitalsError};
use crate::pipeline;
use crate::types::{FrequencyBand, RateBand};

/// "No estimate" value returned by the rate functions
pub const NO_ESTIMATE: f32 = 0.0;

fn check_length(samples: &[f32], length: usize) -> Result<()> {
    if length == 0 {
        return Err(VitalsError::InvalidBuffer("length must be positive".to_string()));
    }
    if samples.len() != length {
        return Err(VitalsError::LengthMismatch {
            expected: length,
            actual: samples.len(),
        });
    }
    Ok(())
}

fn check_output(output: &[f32], length: usize) -> Result<()> {
    if output.len() < length {
        return Err(VitalsError::LengthMismatch {
            expected: length,
            actual: output.len(),
        });
    }
    Ok(())
}

fn write_output(result: Result<Vec<f32>>, output: &mut [f32], operation: &str) -> bool {
    match result {
        Ok(values) => {
            output[..values.len()].copy_from_slice(&values);
            true
        }
        Err(e) => {
            tracing::debug!("{} failed: {}", operation, e);
            false
        }
    }
}

fn rate_or_sentinel(result: Result<f32>, operation: &str) -> f32 {
    result.unwrap_or_else(|e| {
        tracing::debug!("{} failed: {}", operation, e);
        NO_ESTIMATE
    })
}

/// Condition `input` into `output` (detrend, band-pass 0.8-3.0 Hz, normalize).
pub fn process_rppg_signals(
    input: &[f32],
    output: &mut [f32],
    length: usize,
    sample_rate: f32,
) -> bool {
    let result = check_length(input, length)
        .and_then(|_| check_output(output, length))
        .and_then(|_| pipeline::process(input, sample_rate));

    write_output(result, output, "process_rppg_signals")
}

/// Heart rate in BPM from the spectral peak in `min_bpm..max_bpm`, or `0.0`.
pub fn heart_rate_bpm(
    samples: &[f32],
    length: usize,
    sample_rate: f32,
    min_bpm: f32,
    max_bpm: f32,
) -> f32 {
    let result = check_length(samples, length).and_then(|_| {
        pipeline::heart_rate(samples, sample_rate, RateBand::new(min_bpm, max_bpm))
    });

    rate_or_sentinel(result, "heart_rate_bpm")
}

/// Respiration rate in BrPM from the filtered spectral peak in
/// `min_brpm..max_brpm`, or `0.0`.
pub fn respiration_rate_brpm(
    samples: &[f32],
    length: usize,
    sample_rate: f32,
    min_brpm: f32,
    max_brpm: f32,
) -> f32 {
    let result = check_length(samples, length).and_then(|_| {
        pipeline::respiration_rate(samples, sample_rate, RateBand::new(min_brpm, max_brpm))
    });

    rate_or_sentinel(result, "respiration_rate_brpm")
}

/// Band-pass `input` into `output` with cutoffs `low_hz..high_hz`.
pub fn bandpass_filter(
    input: &[f32],
    output: &mut [f32],
    length: usize,
    sample_rate: f32,
    low_hz: f32,
    high_hz: f32,
) -> bool {
    let result = check_length(input, length)
        .and_then(|_| check_output(output, length))
        .and_then(|_| analysis::bandpass(input, sample_rate, FrequencyBand::new(low_hz, high_hz)));

    write_output(result, output, "bandpass_filter")
}
