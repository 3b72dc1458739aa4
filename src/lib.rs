//! Pairwise alignment of nucleic-acid sequences.
//!
//! Computes global (Needleman-Wunsch) or local (Smith-Waterman) alignments
//! of two DNA or RNA sequences with straightforward O(n*m) dynamic
//! programming: alphabet detection, scoring, matrix fill, traceback.

use thiserror::Error;

pub mod alignment_mode;
pub mod alphabet;
pub mod matrix;
pub mod scoring;
pub mod traceback;

pub use alignment_mode::AlignmentMode;
pub use alphabet::{classify, reconcile, NucleicAcidType, ResolvedType};
pub use matrix::{Cell, Direction, Matrix, Position};
pub use scoring::{ScoringModel, GAP_CHAR, GAP_SCORE, MATCH_SCORE, MISMATCH_SCORE};
pub use traceback::AlignmentResult;

/// Cap on per-sequence length. The cell grid is O(n*m), so unbounded
/// inputs would allocate without limit.
pub const MAX_SEQUENCE_SIZE: usize = 100_000;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("invalid character '{0}' in sequence")]
    InvalidCharacter(char),
    #[error("sequence contains both 'T' and 'U'")]
    MixedTandU,
    #[error("sequence types do not match: {0:?} vs {1:?}")]
    TypeMismatch(ResolvedType, ResolvedType),
    #[error("sequence too large: {0}")]
    SequenceTooLarge(usize),
}

/// One pairwise alignment over two borrowed sequences.
///
/// The sequences are uppercase strings over {A, C, G, T, U}; everything
/// else is rejected during classification. A single invocation owns its
/// matrix exclusively; only the [`AlignmentResult`] survives the call.
pub struct PairwiseAligner<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    mode: AlignmentMode,
}

impl<'a> PairwiseAligner<'a> {
    pub fn new(seq1: &'a str, seq2: &'a str) -> Result<Self, AlignerError> {
        let longest = seq1.len().max(seq2.len());
        if longest > MAX_SEQUENCE_SIZE {
            return Err(AlignerError::SequenceTooLarge(longest));
        }
        Ok(Self {
            seq1: seq1.as_bytes(),
            seq2: seq2.as_bytes(),
            mode: AlignmentMode::default(),
        })
    }

    pub fn with_alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Runs the full pipeline: classify both sequences, reconcile their
    /// types, build the scoring model, initialize and fill the matrix,
    /// then trace back the optimal alignment.
    pub fn align(&self) -> Result<AlignmentResult, AlignerError> {
        let type1 = classify(self.seq1)?;
        let type2 = classify(self.seq2)?;
        let acid = reconcile(type1, type2)?;
        log::debug!(
            "aligning {}x{} symbols as {:?} ({:?} mode)",
            self.seq1.len(),
            self.seq2.len(),
            acid,
            self.mode
        );

        let scoring = ScoringModel::new(acid);
        let mut matrix = Matrix::new(self.seq1.len() + 1, self.seq2.len() + 1);
        match self.mode {
            AlignmentMode::Global => matrix.init_global(self.seq1, self.seq2, &scoring),
            AlignmentMode::Local => matrix.init_local(),
        }
        matrix.fill(self.seq1, self.seq2, &scoring);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("filled matrix:\n{}", matrix);
        }

        let result = traceback::traceback(&matrix, self.seq1, self.seq2, self.mode);
        log::debug!(
            "alignment of length {} scored {}",
            result.aligned_seq1.len(),
            result.score
        );
        Ok(result)
    }
}

/// Aligns two sequences in the given mode.
pub fn align(
    seq1: &str,
    seq2: &str,
    mode: AlignmentMode,
) -> Result<AlignmentResult, AlignerError> {
    PairwiseAligner::new(seq1, seq2)?
        .with_alignment_mode(mode)
        .align()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_global() {
        let aligner = PairwiseAligner::new("AC", "AC").unwrap();
        assert_eq!(aligner.mode(), AlignmentMode::Global);
    }

    #[test]
    fn rejects_oversized_sequences() {
        let big = "A".repeat(MAX_SEQUENCE_SIZE + 1);
        assert!(matches!(
            PairwiseAligner::new(&big, "AC"),
            Err(AlignerError::SequenceTooLarge(n)) if n == MAX_SEQUENCE_SIZE + 1
        ));
    }

    #[test]
    fn surfaces_classification_errors() {
        assert!(matches!(
            align("ACGT", "ACGU", AlignmentMode::Global),
            Err(AlignerError::TypeMismatch(..))
        ));
        assert!(matches!(
            align("ACXT", "ACGT", AlignmentMode::Global),
            Err(AlignerError::InvalidCharacter('X'))
        ));
    }
}
