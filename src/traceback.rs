use std::fmt;

use crate::alignment_mode::AlignmentMode;
use crate::matrix::{Direction, Matrix, Position};
use crate::scoring::GAP_CHAR;

/// A finished alignment: the two gapped sequences (always equal length)
/// and the accumulated score.
///
/// The score is the sum of the cumulative cell values along the backtrace
/// path, not the value of the traceback's starting cell alone.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub score: f32,
    /// Where the traceback stopped, i.e. where the alignment begins.
    pub start_position: Position,
    /// Where the traceback started, i.e. where the alignment ends.
    pub end_position: Position,
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.aligned_seq1)?;
        writeln!(f, "{}", self.aligned_seq2)?;
        write!(f, "Score: {}", self.score)
    }
}

/// Walks backpointers from the mode-dependent start coordinate and
/// reconstructs the alignment.
///
/// Global tracebacks start at the bottom-right corner; local tracebacks
/// start at the last row-major interior maximum. Both stop on reaching
/// row 0 or column 0.
pub(crate) fn traceback(
    matrix: &Matrix,
    seq1: &[u8],
    seq2: &[u8],
    mode: AlignmentMode,
) -> AlignmentResult {
    let start = match mode {
        AlignmentMode::Global => Position::new(matrix.rows() - 1, matrix.cols() - 1),
        AlignmentMode::Local => matrix
            .interior_max()
            .unwrap_or_else(|| Position::new(0, 0)),
    };

    let mut aligned1 = Vec::new();
    let mut aligned2 = Vec::new();
    let mut score = 0.0;
    let mut current = start;

    while current.row > 0 && current.col > 0 {
        let cell = matrix.get(current.row, current.col);
        let (direction, target) = cell
            .backpointer
            .unwrap_or_else(|| unreachable!("interior cell without a backpointer"));
        match direction {
            Direction::Diag => {
                aligned1.push(seq1[current.row - 1]);
                aligned2.push(seq2[current.col - 1]);
            }
            Direction::Left => {
                aligned1.push(GAP_CHAR);
                aligned2.push(seq2[current.col - 1]);
            }
            Direction::Top => {
                aligned1.push(seq1[current.row - 1]);
                aligned2.push(GAP_CHAR);
            }
        }
        score += cell.value;
        current = target;
    }

    // Built from the end of the alignment backwards.
    aligned1.reverse();
    aligned2.reverse();

    AlignmentResult {
        aligned_seq1: bytes_to_string(aligned1),
        aligned_seq2: bytes_to_string(aligned2),
        score,
        start_position: current,
        end_position: start,
    }
}

fn bytes_to_string(bytes: Vec<u8>) -> String {
    // Alignment output is drawn from the validated alphabet plus '-'.
    bytes.into_iter().map(char::from).collect()
}
