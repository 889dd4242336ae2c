//! Spectral estimation
//!
//! Provides the power spectrum used for rate estimation:
//! - Zero-padding to the next power of two
//! - Hann windowing over the unpadded samples
//! - Radix-2 Cooley-Tukey FFT (iterative, in place)
//! - Squared-magnitude conversion up to Nyquist

use crate::error::{Result, VitalsError};
use rustfft::num_complex::Complex;
use std::f32::consts::PI;

/// Hann window coefficient at position `i` of `n` samples.
///
/// `w(i) = 0.5 * (1 - cos(2*pi*i / (n - 1)))`. For `n < 2` the window is
/// undefined and the coefficient is `1.0`.
pub fn hann(i: usize, n: usize) -> f32 {
    if n < 2 {
        return 1.0;
    }
    0.5 * (1.0 - (2.0 * PI * i as f32 / (n - 1) as f32).cos())
}

/// In-place forward FFT of `data`, whose length must be a power of two.
///
/// Produces the same bin ordering and values as the recursive even/odd
/// decimation-in-time split with twiddle `exp(-2*pi*i*k/N)`.
pub fn fft_in_place(data: &mut [Complex<f32>]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two(), "FFT size {} is not a power of two", n);

    // Bit-reversal permutation
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            data.swap(i, j);
        }
    }

    // Butterflies
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let twiddle = Complex::from_polar(1.0, -2.0 * PI * k as f32 / len as f32);
                let even = data[start + k];
                let odd = twiddle * data[start + k + half];
                data[start + k] = even + odd;
                data[start + k + half] = even - odd;
            }
        }
        len <<= 1;
    }
}

/// FFT size used for a signal of `length` samples.
pub fn padded_size(length: usize) -> usize {
    length.max(1).next_power_of_two()
}

/// Compute the power spectrum of `signal`.
///
/// The result holds `padded_size(len) / 2` bins (bin 0 = DC), each the
/// squared magnitude of the windowed, zero-padded FFT. A single sample
/// yields an empty spectrum.
pub fn power_spectrum(signal: &[f32]) -> Result<Vec<f32>> {
    let length = signal.len();
    if length == 0 {
        return Err(VitalsError::InvalidBuffer(
            "cannot compute spectrum of an empty signal".to_string(),
        ));
    }

    let fft_size = padded_size(length);

    let mut buffer: Vec<Complex<f32>> = signal
        .iter()
        .enumerate()
        .map(|(i, &s)| Complex::new(s * hann(i, length), 0.0))
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    fft_in_place(&mut buffer);

    let psd: Vec<f32> = buffer.iter().take(fft_size / 2).map(|c| c.norm_sqr()).collect();
    tracing::trace!(
        "Power spectrum: {} samples padded to {}, {} bins",
        length,
        fft_size,
        psd.len()
    );

    Ok(psd)
}
