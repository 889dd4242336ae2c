//! # rppg-vitals: Vital signs from rPPG waveforms
//!
//! Extracts heart rate and respiration rate from a remote-photoplethysmography
//! waveform sampled at a known rate. Each call works on one fixed-length
//! analysis window and is a pure function of its inputs: no state is kept
//! between calls and all intermediate buffers are owned by the call.
//!
//! ## Architecture
//!
//! - **Analysis**: detrending, first-order IIR band-pass, Hann-windowed
//!   radix-2 FFT power spectrum, band-limited peak search
//! - **Pipeline**: `process`, `heart_rate` and `respiration_rate`, plus a
//!   [`VitalsAnalyzer`] that runs them over sliding windows of a recording
//! - **Host**: explicit-length entry points reporting failure as `false`
//!   or the `0.0` "no estimate" value
//!
//! ## Example
//!
//! ```
//! use rppg_vitals::{pipeline, RateBand};
//!
//! let fs = 30.0;
//! let signal: Vec<f32> = (0..300)
//!     .map(|i| (2.0 * std::f32::consts::PI * 1.2 * i as f32 / fs).sin())
//!     .collect();
//!
//! let bpm = pipeline::heart_rate(&signal, fs, RateBand::HEART_RATE).unwrap();
//! assert!((bpm - 72.0).abs() < 3.0);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod recording;
pub mod types;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use error::{Result, VitalsError};
pub use pipeline::VitalsAnalyzer;
pub use types::{FrequencyBand, RateBand, VitalSigns};
