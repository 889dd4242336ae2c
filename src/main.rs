//! rppg-vitals - command line entry point
//!
//! Reads an rPPG waveform recording, slides analysis windows over it and
//! prints one JSON object per window with the heart and respiration rates.

use anyhow::Context;
use clap::Parser;
use rppg_vitals::{recording, AnalysisConfig, VitalSigns, VitalsAnalyzer};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Estimate heart rate and respiration rate from an rPPG waveform
#[derive(Parser, Debug)]
#[command(name = "rppg-vitals", version, about)]
struct Cli {
    /// Recording to analyse (JSON array or delimited text)
    recording: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sample rate in Hz (overrides the configuration)
    #[arg(short, long)]
    sample_rate: Option<f32>,

    /// Analysis window length in seconds (overrides the configuration)
    #[arg(short, long)]
    window: Option<f32>,

    /// Step between windows in seconds (overrides the configuration)
    #[arg(long)]
    hop: Option<f32>,

    /// Write the conditioned waveform of the last window to this file
    #[arg(long)]
    normalized_out: Option<PathBuf>,
}

#[derive(Serialize)]
struct WindowReport {
    window: usize,
    start_seconds: f32,
    #[serde(flatten)]
    vitals: VitalSigns,
}

/// Outcome of writing the per-window reports
#[derive(Debug, Default)]
struct ReportSummary {
    written: usize,
    skipped: usize,
    last_waveform: Vec<f32>,
}

/// Write one JSON line per analysable window. Windows that fail are logged
/// and skipped.
fn write_reports(
    analyzer: &VitalsAnalyzer,
    samples: &[f32],
    out: &mut impl Write,
) -> anyhow::Result<ReportSummary> {
    let mut summary = ReportSummary::default();

    for window in analyzer.windows(samples) {
        let mut vitals = match analyzer.analyze(window.samples) {
            Ok(vitals) => vitals,
            Err(e) => {
                tracing::warn!("Skipping window {}: {}", window.index, e);
                summary.skipped += 1;
                continue;
            }
        };

        // The waveform goes to --normalized-out, not into the report line
        summary.last_waveform = std::mem::take(&mut vitals.waveform);

        let report = WindowReport {
            window: window.index,
            start_seconds: window.start_seconds,
            vitals,
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
        summary.written += 1;
    }

    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,rppg_vitals=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(sample_rate) = cli.sample_rate {
        config.sample_rate = sample_rate;
    }
    if let Some(window) = cli.window {
        config.window_seconds = window;
    }
    if let Some(hop) = cli.hop {
        config.hop_seconds = hop;
    }

    let analyzer = VitalsAnalyzer::new(config).context("Invalid analysis configuration")?;
    let samples = recording::load_samples(&cli.recording)
        .with_context(|| format!("Failed to load recording {:?}", cli.recording))?;

    tracing::info!(
        "Analysing {:.1} s at {} Hz, {} sample windows",
        samples.len() as f32 / analyzer.config().sample_rate,
        analyzer.config().sample_rate,
        analyzer.config().window_samples()
    );

    let stdout = std::io::stdout();
    let summary = write_reports(&analyzer, &samples, &mut stdout.lock())?;

    tracing::info!("Reported {} window(s)", summary.written);
    if summary.skipped > 0 {
        tracing::warn!("{} window(s) could not be analysed", summary.skipped);
    }

    if let Some(path) = &cli.normalized_out {
        recording::save_samples(path, &summary.last_waveform)
            .with_context(|| format!("Failed to write waveform to {:?}", path))?;
        tracing::info!("Wrote conditioned waveform to {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse(sample_rate: f32, seconds: f32) -> Vec<f32> {
        let n = (sample_rate * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * 1.2 * i as f32 / sample_rate).sin())
            .collect()
    }

    fn analyzer(sample_rate: f32) -> VitalsAnalyzer {
        VitalsAnalyzer::new(AnalysisConfig {
            sample_rate,
            window_seconds: 10.0,
            hop_seconds: 5.0,
            ..AnalysisConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_reports_one_line_per_window() {
        let mut out = Vec::new();
        let summary = write_reports(&analyzer(30.0), &pulse(30.0, 20.0), &mut out).unwrap();

        assert_eq!(summary.written, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.last_waveform.len(), 300);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2]["window"], 2);
        assert!(lines[0].get("waveform").is_none());
        let bpm = lines[0]["heart_rate_bpm"].as_f64().unwrap();
        assert!((bpm - 72.0).abs() < 3.0);
    }

    #[test]
    fn test_failed_windows_are_skipped() {
        // Nyquist of 2.5 Hz lies below the 3 Hz conditioning band edge
        let mut out = Vec::new();
        let summary = write_reports(&analyzer(5.0), &pulse(5.0, 20.0), &mut out).unwrap();

        assert_eq!(summary.written, 0);
        assert_eq!(summary.skipped, 3);
        assert!(summary.last_waveform.is_empty());
        assert!(out.is_empty());
    }
}
