use phf::{Set, phf_set};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static AMINO_ACID_CODES: Set<char> = phf_set! {
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Amino acid sequence is empty")]
    Empty,

    #[error("Sequence contains an invalid amino acid '{residue}' at position {position}")]
    InvalidResidue { residue: char, position: usize },
}

/// A protein sequence over the 20 standard one-letter amino-acid codes.
///
/// Residues are stored upper-case. Only the length is consumed by the model; the identity
/// of each residue plays no role in the prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    residues: String,
}

impl Sequence {
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SequenceError::Empty);
        }

        let mut residues = String::with_capacity(trimmed.len());
        for (i, c) in trimmed.chars().enumerate() {
            let upper = c.to_ascii_uppercase();
            if !AMINO_ACID_CODES.contains(&upper) {
                return Err(SequenceError::InvalidResidue {
                    residue: c,
                    position: i + 1,
                });
            }
            residues.push(upper);
        }

        Ok(Self { residues })
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }
}

pub fn is_standard_residue(code: char) -> bool {
    AMINO_ACID_CODES.contains(&code.to_ascii_uppercase())
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.residues)
    }
}
