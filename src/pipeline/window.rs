//! Sliding analysis windows over a recording

/// One fixed-length analysis window borrowed from a recording
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisWindow<'a> {
    /// Zero-based window number
    pub index: usize,
    /// Offset of the first sample in the recording
    pub start: usize,
    /// Start time of the window (seconds)
    pub start_seconds: f32,
    /// The window's samples
    pub samples: &'a [f32],
}

/// Iterator over overlapping windows of `len` samples, `hop` samples apart.
///
/// A recording shorter than one window yields a single window holding the
/// whole recording; an empty recording yields nothing. Trailing samples that
/// do not fill a complete window are not analysed.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    recording: &'a [f32],
    len: usize,
    hop: usize,
    sample_rate: f32,
    next_start: usize,
    index: usize,
}

impl<'a> Windows<'a> {
    pub fn new(recording: &'a [f32], len: usize, hop: usize, sample_rate: f32) -> Self {
        Self {
            recording,
            len: len.max(1),
            hop: hop.max(1),
            sample_rate,
            next_start: 0,
            index: 0,
        }
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = AnalysisWindow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start;
        let samples = if self.recording.len() < self.len {
            // Short recording: analyse it once, as a whole
            if start > 0 || self.recording.is_empty() {
                return None;
            }
            self.recording
        } else {
            self.recording.get(start..start + self.len)?
        };

        let window = AnalysisWindow {
            index: self.index,
            start,
            start_seconds: start as f32 / self.sample_rate,
            samples,
        };

        self.next_start = start + self.hop;
        self.index += 1;
        Some(window)
    }
}
