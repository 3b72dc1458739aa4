use crate::AlignerError;

/// Classification of a single input sequence.
///
/// `Ambiguous` means the sequence contains only symbols common to both
/// alphabets (A, C, G) and neither T nor U.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NucleicAcidType {
    Dna,
    Rna,
    Ambiguous,
}

/// Nucleic-acid type after reconciling both sequences. The scoring model
/// is only constructible from a resolved type, so an ambiguous alphabet
/// can never reach scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedType {
    Dna,
    Rna,
}

impl ResolvedType {
    /// The four symbols valid under this alphabet.
    pub fn alphabet(&self) -> [u8; 4] {
        match self {
            ResolvedType::Dna => [b'A', b'C', b'G', b'T'],
            ResolvedType::Rna => [b'A', b'C', b'G', b'U'],
        }
    }
}

/// Classifies a sequence as DNA, RNA, or ambiguous.
///
/// U without T means RNA, T without U means DNA, neither means ambiguous.
/// A sequence mixing T and U, or containing any symbol outside
/// {A, C, G, T, U}, is rejected.
pub fn classify(seq: &[u8]) -> Result<NucleicAcidType, AlignerError> {
    let mut has_t = false;
    let mut has_u = false;
    for &symbol in seq {
        match symbol {
            b'A' | b'C' | b'G' => {}
            b'T' => has_t = true,
            b'U' => has_u = true,
            other => return Err(AlignerError::InvalidCharacter(other as char)),
        }
    }
    match (has_t, has_u) {
        (true, true) => Err(AlignerError::MixedTandU),
        (true, false) => Ok(NucleicAcidType::Dna),
        (false, true) => Ok(NucleicAcidType::Rna),
        (false, false) => Ok(NucleicAcidType::Ambiguous),
    }
}

/// Reconciles the classifications of the two input sequences into the
/// single alphabet the alignment runs under.
///
/// An ambiguous side adopts the other side's type; two ambiguous sides
/// default to DNA; two concrete but different types cannot be aligned.
pub fn reconcile(
    t1: NucleicAcidType,
    t2: NucleicAcidType,
) -> Result<ResolvedType, AlignerError> {
    use NucleicAcidType::*;
    match (t1, t2) {
        (Dna, Dna) | (Dna, Ambiguous) | (Ambiguous, Dna) | (Ambiguous, Ambiguous) => {
            Ok(ResolvedType::Dna)
        }
        (Rna, Rna) | (Rna, Ambiguous) | (Ambiguous, Rna) => Ok(ResolvedType::Rna),
        (Dna, Rna) => Err(AlignerError::TypeMismatch(ResolvedType::Dna, ResolvedType::Rna)),
        (Rna, Dna) => Err(AlignerError::TypeMismatch(ResolvedType::Rna, ResolvedType::Dna)),
    }
}
