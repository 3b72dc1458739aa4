#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Needleman-Wunsch: both sequences consumed end to end.
    Global,
    /// Smith-Waterman: best-scoring substring pair.
    Local,
}

impl Default for AlignmentMode {
    fn default() -> Self {
        AlignmentMode::Global
    }
}
