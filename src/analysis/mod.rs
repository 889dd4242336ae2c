//! Analysis module for signal processing
//!
//! This module provides the numerical stages of the vitals pipeline:
//! - Detrending (DC and linear trend removal)
//! - First-order IIR band-pass filtering
//! - Hann-windowed power spectrum via radix-2 FFT
//! - Band-limited peak frequency detection

pub mod detrend;
pub mod fft;
pub mod filter;
pub mod peak;

pub use detrend::detrend;
pub use fft::{fft_in_place, hann, padded_size, power_spectrum};
pub use filter::{bandpass, BandpassCoefficients, HEART_RATE_BAND, RESPIRATION_BAND};
pub use peak::{frequency_resolution, peak_frequency};
