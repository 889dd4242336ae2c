//! Loading sample recordings from disk
//!
//! Two formats are accepted:
//! - a JSON array of numbers (`[0.1, 0.2, ...]`)
//! - plain text with one or more numbers per line, separated by commas,
//!   semicolons or whitespace. Lines starting with `#` are comments.

use crate::error::{Result, ResultExt, VitalsError};
use std::path::Path;

/// Parse a recording from its text content.
pub fn parse_samples(content: &str) -> Result<Vec<f32>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content)
            .map_err(|e| VitalsError::Parse(format!("Invalid JSON sample array: {}", e)));
    }

    let mut samples = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value: f32 = token.parse().map_err(|_| {
                VitalsError::Parse(format!("line {}: invalid sample {:?}", line_no + 1, token))
            })?;
            samples.push(value);
        }
    }

    Ok(samples)
}

/// Load a recording file.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let samples = parse_samples(&content).with_context(|| format!("recording {:?}", path))?;

    if samples.is_empty() {
        return Err(VitalsError::InvalidBuffer(format!(
            "recording {:?} contains no samples",
            path
        )));
    }

    tracing::info!("Loaded {} samples from {:?}", samples.len(), path);
    Ok(samples)
}

/// Write samples as a JSON array.
pub fn save_samples(path: impl AsRef<Path>, samples: &[f32]) -> Result<()> {
    let content = serde_json::to_string(samples)
        .map_err(|e| VitalsError::Parse(format!("Failed to serialize samples: {}", e)))?;
    std::fs::write(path, content)?;
    Ok(())
}
