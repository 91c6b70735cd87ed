use phf::{Map, phf_map};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse topological class of a protein fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum StructuralClass {
    /// Mostly alpha-helical.
    #[serde(rename = "a", alias = "alpha")]
    Alpha,
    /// Mostly beta-sheet.
    #[serde(rename = "b", alias = "beta")]
    Beta,
    /// A mix of both topologies.
    #[serde(rename = "ab", alias = "alpha-beta", alias = "mixed")]
    AlphaBeta,
}

/// Enthalpic stabilization per native residue, in kJ/mol.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnthalpyCoefficients {
    /// Stabilization from local (sequence-near) interactions.
    pub local: f64,
    /// Stabilization from non-local contacts between distant residues.
    pub nonlocal: f64,
}

impl EnthalpyCoefficients {
    pub const fn new(local: f64, nonlocal: f64) -> Self {
        Self { local, nonlocal }
    }
}

static CLASS_ALIASES: Map<&'static str, StructuralClass> = phf_map! {
    "a" => StructuralClass::Alpha,
    "alpha" => StructuralClass::Alpha,
    "b" => StructuralClass::Beta,
    "beta" => StructuralClass::Beta,
    "ab" => StructuralClass::AlphaBeta,
    "a/b" => StructuralClass::AlphaBeta,
    "alpha-beta" => StructuralClass::AlphaBeta,
    "alpha/beta" => StructuralClass::AlphaBeta,
    "mixed" => StructuralClass::AlphaBeta,
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown structural class '{0}'. Expected one of 'a', 'b' or 'ab'.")]
pub struct ParseClassError(pub String);

impl StructuralClass {
    pub const ALL: [StructuralClass; 3] = [Self::Alpha, Self::Beta, Self::AlphaBeta];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::AlphaBeta => "ab",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::AlphaBeta => "alpha/beta",
        }
    }

    /// Built-in enthalpy coefficients of the class (De Sancho & Muñoz, 2011).
    pub const fn default_enthalpy(self) -> EnthalpyCoefficients {
        match self {
            Self::Alpha => EnthalpyCoefficients::new(2.15, 4.82),
            Self::Beta => EnthalpyCoefficients::new(1.31, 5.3),
            Self::AlphaBeta => EnthalpyCoefficients::new(1.5, 5.21),
        }
    }
}

impl FromStr for StructuralClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        CLASS_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ParseClassError(s.to_string()))
    }
}

impl fmt::Display for StructuralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_short_labels() {
        assert_eq!("a".parse(), Ok(StructuralClass::Alpha));
        assert_eq!("b".parse(), Ok(StructuralClass::Beta));
        assert_eq!("ab".parse(), Ok(StructuralClass::AlphaBeta));
    }

    #[test]
    fn from_str_is_case_insensitive_and_trims_whitespace() {
        assert_eq!(" AB ".parse(), Ok(StructuralClass::AlphaBeta));
        assert_eq!("Alpha".parse(), Ok(StructuralClass::Alpha));
        assert_eq!("MIXED".parse(), Ok(StructuralClass::AlphaBeta));
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        let result = "c".parse::<StructuralClass>();
        assert_eq!(result, Err(ParseClassError("c".to_string())));
    }

    #[test]
    fn from_str_rejects_empty_label() {
        assert!("".parse::<StructuralClass>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for class in StructuralClass::ALL {
            assert_eq!(class.to_string().parse(), Ok(class));
        }
    }

    #[test]
    fn default_enthalpy_matches_published_table() {
        assert_eq!(
            StructuralClass::Alpha.default_enthalpy(),
            EnthalpyCoefficients::new(2.15, 4.82)
        );
        assert_eq!(
            StructuralClass::Beta.default_enthalpy(),
            EnthalpyCoefficients::new(1.31, 5.3)
        );
        assert_eq!(
            StructuralClass::AlphaBeta.default_enthalpy(),
            EnthalpyCoefficients::new(1.5, 5.21)
        );
    }

    #[test]
    fn all_default_coefficients_are_positive() {
        for class in StructuralClass::ALL {
            let dh = class.default_enthalpy();
            assert!(dh.local > 0.0 && dh.nonlocal > 0.0, "{}", class.name());
        }
    }
}
