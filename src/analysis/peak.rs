//! Peak frequency search over a power spectrum

use crate::error::{Result, VitalsError};
use crate::types::FrequencyBand;

/// Frequency resolution (Hz per bin) of a spectrum with `bins` bins.
pub fn frequency_resolution(bins: usize, sample_rate: f32) -> f32 {
    sample_rate / (bins * 2) as f32
}

/// Bin range `[min_bin, max_bin]` searched for `band`, or `None` if empty.
///
/// Band edges are truncated to bins; bin 0 (DC) is always excluded and the
/// upper bin is clamped to the last bin of the spectrum.
pub fn search_range(bins: usize, sample_rate: f32, band: FrequencyBand) -> Option<(usize, usize)> {
    if bins < 2 {
        return None;
    }

    let resolution = frequency_resolution(bins, sample_rate);
    // Float-to-int casts saturate: negative and NaN edges map to 0
    let min_bin = ((band.low / resolution) as usize).max(1);
    let max_bin = ((band.high / resolution) as usize).min(bins - 1);

    (min_bin <= max_bin).then_some((min_bin, max_bin))
}

/// Frequency (Hz) of the strongest bin of `psd` inside `band`.
///
/// Ties resolve to the lowest bin. Fails with
/// [`VitalsError::DegenerateInput`] when the clamped search range is empty.
pub fn peak_frequency(psd: &[f32], sample_rate: f32, band: FrequencyBand) -> Result<f32> {
    let (min_bin, max_bin) = search_range(psd.len(), sample_rate, band).ok_or_else(|| {
        VitalsError::DegenerateInput(format!(
            "no spectrum bins between {} and {} Hz ({} bins at {} Hz)",
            band.low,
            band.high,
            psd.len(),
            sample_rate
        ))
    })?;

    let mut peak_bin = min_bin;
    let mut max_power = psd[min_bin];
    for (i, &power) in psd.iter().enumerate().take(max_bin + 1).skip(min_bin + 1) {
        if power > max_power {
            max_power = power;
            peak_bin = i;
        }
    }

    let resolution = frequency_resolution(psd.len(), sample_rate);
    tracing::trace!(
        "Peak bin {} of [{}, {}] (power {}), {} Hz",
        peak_bin,
        min_bin,
        max_bin,
        max_power,
        peak_bin as f32 * resolution
    );

    Ok(peak_bin as f32 * resolution)
}
