use std::fmt;

use crate::scoring::{ScoringModel, GAP_CHAR};

/// Which dynamic-programming predecessor a cell's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Top,
    Diag,
}

/// A (row, col) coordinate in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One entry of the grid: a cumulative score plus the predecessor it was
/// derived from. Boundary cells without a predecessor carry `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub value: f32,
    pub backpointer: Option<(Direction, Position)>,
}

/// The (|s1|+1) x (|s2|+1) dynamic-programming grid. Row 0 and column 0
/// represent the "no symbol consumed" boundary.
pub struct Matrix {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Global (Needleman-Wunsch) border: leading gaps accumulate their
    /// penalty along row 0 and column 0, with backpointers running along
    /// the border back to the origin.
    pub fn init_global(&mut self, seq1: &[u8], seq2: &[u8], scoring: &ScoringModel) {
        self.set(0, 0, Cell::default());
        for row in 1..self.rows {
            let value = self.get(row - 1, 0).value + scoring.score(seq1[row - 1], GAP_CHAR);
            self.set(
                row,
                0,
                Cell {
                    value,
                    backpointer: Some((Direction::Top, Position::new(row - 1, 0))),
                },
            );
        }
        for col in 1..self.cols {
            let value = self.get(0, col - 1).value + scoring.score(GAP_CHAR, seq2[col - 1]);
            self.set(
                0,
                col,
                Cell {
                    value,
                    backpointer: Some((Direction::Left, Position::new(0, col - 1))),
                },
            );
        }
    }

    /// Local (Smith-Waterman) border: every border cell is zero with no
    /// predecessor, so a traceback ends when it reaches the border.
    /// Interior cells are not clamped at zero during the fill.
    pub fn init_local(&mut self) {
        for row in 0..self.rows {
            self.set(row, 0, Cell::default());
        }
        for col in 0..self.cols {
            self.set(0, col, Cell::default());
        }
    }

    /// Fills every interior cell in row-major order from its three
    /// predecessors. Candidates are considered in the fixed order left,
    /// top, diag with a strict greater-than replacement rule, so on ties
    /// LEFT beats TOP beats DIAG.
    pub fn fill(&mut self, seq1: &[u8], seq2: &[u8], scoring: &ScoringModel) {
        for row in 1..self.rows {
            for col in 1..self.cols {
                let c1 = seq1[row - 1];
                let c2 = seq2[col - 1];
                let left = self.get(row, col - 1).value + scoring.score(GAP_CHAR, c2);
                let top = self.get(row - 1, col).value + scoring.score(c1, GAP_CHAR);
                let diag = self.get(row - 1, col - 1).value + scoring.score(c1, c2);

                let candidates = [left, top, diag];
                let cell = match max_index(&candidates) {
                    0 => Cell {
                        value: left,
                        backpointer: Some((Direction::Left, Position::new(row, col - 1))),
                    },
                    1 => Cell {
                        value: top,
                        backpointer: Some((Direction::Top, Position::new(row - 1, col))),
                    },
                    2 => Cell {
                        value: diag,
                        backpointer: Some((Direction::Diag, Position::new(row - 1, col - 1))),
                    },
                    _ => unreachable!("max_index over three candidates"),
                };
                self.set(row, col, cell);
            }
        }
    }

    /// The interior coordinate holding the matrix maximum; on ties the
    /// last one in row-major order wins. `None` when a sequence is empty
    /// and the matrix has no interior.
    pub fn interior_max(&self) -> Option<Position> {
        let mut best: Option<(f32, Position)> = None;
        for row in 1..self.rows {
            for col in 1..self.cols {
                let value = self.get(row, col).value;
                match best {
                    Some((max, _)) if value < max => {}
                    _ => best = Some((value, Position::new(row, col))),
                }
            }
        }
        best.map(|(_, pos)| pos)
    }
}

/// Index of the largest value, first occurrence winning ties.
fn max_index(values: &[f32; 3]) -> usize {
    let mut max_idx = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > values[max_idx] {
            max_idx = i;
        }
    }
    max_idx
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{} ", self.get(row, col).value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ResolvedType;

    fn dna_scoring() -> ScoringModel {
        ScoringModel::new(ResolvedType::Dna)
    }

    #[test]
    fn max_index_prefers_earlier_candidates_on_ties() {
        assert_eq!(max_index(&[1.0, 1.0, 1.0]), 0);
        assert_eq!(max_index(&[0.0, 2.0, 2.0]), 1);
        assert_eq!(max_index(&[-1.0, -1.0, 3.0]), 2);
        assert_eq!(max_index(&[5.0, 1.0, 5.0]), 0);
    }

    #[test]
    fn global_border_accumulates_gap_penalties() {
        let (s1, s2) = (b"AC".as_ref(), b"AC".as_ref());
        let mut m = Matrix::new(3, 3);
        m.init_global(s1, s2, &dna_scoring());

        assert_eq!(m.get(0, 0).value, 0.0);
        assert!(m.get(0, 0).backpointer.is_none());
        assert_eq!(m.get(1, 0).value, -2.0);
        assert_eq!(m.get(2, 0).value, -4.0);
        assert_eq!(m.get(0, 1).value, -2.0);
        assert_eq!(m.get(0, 2).value, -4.0);
        assert_eq!(
            m.get(2, 0).backpointer,
            Some((Direction::Top, Position::new(1, 0)))
        );
        assert_eq!(
            m.get(0, 2).backpointer,
            Some((Direction::Left, Position::new(0, 1)))
        );
    }

    #[test]
    fn local_border_is_zero_without_backpointers() {
        let mut m = Matrix::new(4, 3);
        m.init_local();
        for row in 0..4 {
            assert_eq!(m.get(row, 0).value, 0.0);
            assert!(m.get(row, 0).backpointer.is_none());
        }
        for col in 0..3 {
            assert_eq!(m.get(0, col).value, 0.0);
            assert!(m.get(0, col).backpointer.is_none());
        }
    }

    #[test]
    fn fill_matches_worked_example() {
        // Global AC vs AC: M[1][1] = 3 (A/A match), M[2][2] = 6 (C/C after it).
        let (s1, s2) = (b"AC".as_ref(), b"AC".as_ref());
        let scoring = dna_scoring();
        let mut m = Matrix::new(3, 3);
        m.init_global(s1, s2, &scoring);
        m.fill(s1, s2, &scoring);

        assert_eq!(m.get(1, 1).value, 3.0);
        assert_eq!(
            m.get(1, 1).backpointer,
            Some((Direction::Diag, Position::new(0, 0)))
        );
        assert_eq!(m.get(2, 2).value, 6.0);
        assert_eq!(
            m.get(2, 2).backpointer,
            Some((Direction::Diag, Position::new(1, 1)))
        );
    }

    #[test]
    fn tied_left_and_top_candidates_pick_left() {
        // Local AC vs CA: at (2,2) left and top both reach 1.0 while diag
        // is -2.0, so the backpointer must be LEFT.
        let (s1, s2) = (b"AC".as_ref(), b"CA".as_ref());
        let scoring = dna_scoring();
        let mut m = Matrix::new(3, 3);
        m.init_local();
        m.fill(s1, s2, &scoring);

        assert_eq!(m.get(2, 2).value, 1.0);
        assert_eq!(
            m.get(2, 2).backpointer,
            Some((Direction::Left, Position::new(2, 1)))
        );
    }

    #[test]
    fn local_fill_keeps_negative_interior_values() {
        let (s1, s2) = (b"A".as_ref(), b"C".as_ref());
        let scoring = dna_scoring();
        let mut m = Matrix::new(2, 2);
        m.init_local();
        m.fill(s1, s2, &scoring);
        assert_eq!(m.get(1, 1).value, -1.0);
    }

    #[test]
    fn interior_max_picks_last_tie_in_row_major_order() {
        // Local AC vs CA: (1,2) and (2,1) both hold the maximum 3.0; the
        // row-major scan must keep the later (2,1).
        let (s1, s2) = (b"AC".as_ref(), b"CA".as_ref());
        let scoring = dna_scoring();
        let mut m = Matrix::new(3, 3);
        m.init_local();
        m.fill(s1, s2, &scoring);

        assert_eq!(m.get(1, 2).value, 3.0);
        assert_eq!(m.get(2, 1).value, 3.0);
        assert_eq!(m.interior_max(), Some(Position::new(2, 1)));
    }

    #[test]
    fn interior_max_is_none_without_interior() {
        let m = Matrix::new(1, 5);
        assert_eq!(m.interior_max(), None);
        let m = Matrix::new(5, 1);
        assert_eq!(m.interior_max(), None);
    }
}
