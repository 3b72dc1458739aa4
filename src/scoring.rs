use crate::alphabet::ResolvedType;

/// Gap placeholder used in aligned output.
pub const GAP_CHAR: u8 = b'-';

// Nucleotide scoring parameters, identical for DNA and RNA.
pub const MATCH_SCORE: f32 = 3.0;
pub const MISMATCH_SCORE: f32 = -1.0;
pub const GAP_SCORE: f32 = -2.0;

/// Substitution/gap scores under one resolved alphabet.
///
/// The score is computed structurally from the symbol pair rather than
/// looked up in a table, so every pair over the resolved alphabet (plus
/// the gap character) has a defined score.
#[derive(Debug, Clone, Copy)]
pub struct ScoringModel {
    acid: ResolvedType,
}

impl ScoringModel {
    pub fn new(acid: ResolvedType) -> Self {
        Self { acid }
    }

    pub fn acid(&self) -> ResolvedType {
        self.acid
    }

    /// Score for an ordered symbol pair; either side may be [`GAP_CHAR`].
    ///
    /// Panics on a non-gap symbol outside the resolved alphabet: inputs
    /// are validated during classification, so reaching scoring with a
    /// foreign symbol means that validation was bypassed.
    pub fn score(&self, a: u8, b: u8) -> f32 {
        match (a == GAP_CHAR, b == GAP_CHAR) {
            (true, true) => 0.0,
            (true, false) => {
                self.check_symbol(b);
                GAP_SCORE
            }
            (false, true) => {
                self.check_symbol(a);
                GAP_SCORE
            }
            (false, false) => {
                self.check_symbol(a);
                self.check_symbol(b);
                if a == b {
                    MATCH_SCORE
                } else {
                    MISMATCH_SCORE
                }
            }
        }
    }

    fn check_symbol(&self, symbol: u8) {
        assert!(
            self.acid.alphabet().contains(&symbol),
            "symbol '{}' is outside the {:?} alphabet; sequence validation was bypassed",
            symbol as char,
            self.acid
        );
    }
}
