//! Parsing options and thresholds.

/// Options for the layout pipeline.
///
/// The defaults are the empirically tuned page-space values; they rarely
/// need changing for ordinary single-column resumes.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum vertical delta (page units) for a fragment to join the
    /// current line.
    pub line_tolerance: f32,

    /// Vertical gap (page units) treated as a blank-line separator, used
    /// for heading confirmation and subsection splitting.
    pub gap_threshold: f32,

    /// Horizontal merge threshold as a fraction of the average character
    /// width.
    pub merge_factor: f32,

    /// Minimum extracted character count before the parse is trusted
    /// (0 disables the gate). This is the caller-side sanity check at the
    /// extraction boundary; the pipeline stages never apply it.
    pub min_chars: usize,
}

impl ParseOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line grouping tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the blank-line gap threshold.
    pub fn with_gap_threshold(mut self, gap: f32) -> Self {
        self.gap_threshold = gap;
        self
    }

    /// Set the horizontal merge factor.
    pub fn with_merge_factor(mut self, factor: f32) -> Self {
        self.merge_factor = factor;
        self
    }

    /// Enable the minimum-length gate.
    pub fn with_min_chars(mut self, min: usize) -> Self {
        self.min_chars = min;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            line_tolerance: 5.0,
            gap_threshold: 15.0,
            merge_factor: 0.8,
            min_chars: 0,
        }
    }
}
