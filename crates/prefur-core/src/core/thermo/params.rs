use super::input::{InputError, check_parameter};
use crate::core::models::class::{EnthalpyCoefficients, StructuralClass};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Conformational entropy lost per native residue, in J/(mol·K).
pub const DEFAULT_RESIDUE_ENTROPY: f64 = 21.5;

/// Fraction of the ideal combinatorial entropy of choosing the native residues that the
/// model retains.
pub const DEFAULT_MIXING_ENTROPY_SCALE: f64 = 0.55;

/// Attempt frequency of a single residue, in s⁻¹. With a unit size exponent this is the
/// empirical folding speed limit of `(N / 100) µs`.
pub const DEFAULT_ATTEMPT_PREFACTOR: f64 = 1.0e8;

pub const DEFAULT_SIZE_EXPONENT: f64 = 1.0;

/// Fraction of the per-residue non-local stabilization missing across the boundary between
/// the native and the unfolded part of a partially folded chain.
pub const DEFAULT_INTERFACE_FRACTION: f64 = 0.1;

/// Pre-exponential factor of the rate law, `ν(N) = prefactor / N^size_exponent`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct AttemptFrequency {
    pub prefactor: f64,
    pub size_exponent: f64,
}

impl Default for AttemptFrequency {
    fn default() -> Self {
        Self {
            prefactor: DEFAULT_ATTEMPT_PREFACTOR,
            size_exponent: DEFAULT_SIZE_EXPONENT,
        }
    }
}

impl AttemptFrequency {
    /// Attempt frequency in s⁻¹ for a chain of `residue_count` residues.
    #[inline]
    pub fn at(&self, residue_count: usize) -> f64 {
        self.prefactor / (residue_count as f64).powf(self.size_exponent)
    }
}

/// Constants of the free-energy and rate model.
///
/// Every field has a built-in default, so a parameter file only needs to list the values
/// it changes. Class enthalpies not listed in `enthalpy` fall back to
/// [`StructuralClass::default_enthalpy`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ModelParameters {
    /// J/(mol·K) per native residue.
    pub residue_entropy: f64,
    pub mixing_entropy_scale: f64,
    pub interface_fraction: f64,
    pub attempt_frequency: AttemptFrequency,
    pub enthalpy: BTreeMap<StructuralClass, EnthalpyCoefficients>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            residue_entropy: DEFAULT_RESIDUE_ENTROPY,
            mixing_entropy_scale: DEFAULT_MIXING_ENTROPY_SCALE,
            interface_fraction: DEFAULT_INTERFACE_FRACTION,
            attempt_frequency: AttemptFrequency::default(),
            enthalpy: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid model parameters in '{path}': {source}")]
    Invalid { path: String, source: InputError },
}

impl ModelParameters {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate().map_err(|e| ParamLoadError::Invalid {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(params)
    }

    pub fn enthalpy_for(&self, class: StructuralClass) -> EnthalpyCoefficients {
        self.enthalpy
            .get(&class)
            .copied()
            .unwrap_or_else(|| class.default_enthalpy())
    }

    /// Residue entropy converted to kJ/(mol·K).
    pub(crate) fn residue_entropy_kj(&self) -> f64 {
        self.residue_entropy * 1.0e-3
    }

    pub fn validate(&self) -> Result<(), InputError> {
        check_parameter("residue-entropy", self.residue_entropy)?;
        check_parameter("mixing-entropy-scale", self.mixing_entropy_scale)?;
        check_parameter("interface-fraction", self.interface_fraction)?;
        check_parameter("attempt-frequency.prefactor", self.attempt_frequency.prefactor)?;
        check_parameter(
            "attempt-frequency.size-exponent",
            self.attempt_frequency.size_exponent,
        )?;
        for coefficients in self.enthalpy.values() {
            check_parameter("enthalpy.local", coefficients.local)?;
            check_parameter("enthalpy.nonlocal", coefficients.nonlocal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_parameters_are_valid() {
        assert!(ModelParameters::default().validate().is_ok());
    }

    #[test]
    fn enthalpy_for_falls_back_to_class_defaults() {
        let params = ModelParameters::default();
        for class in StructuralClass::ALL {
            assert_eq!(params.enthalpy_for(class), class.default_enthalpy());
        }
    }

    #[test]
    fn attempt_frequency_decreases_with_chain_length() {
        let nu = AttemptFrequency::default();
        assert_eq!(nu.at(1), 1.0e8);
        assert_eq!(nu.at(100), 1.0e6);
        assert!(nu.at(101) < nu.at(100));
    }

    #[test]
    fn load_succeeds_with_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.toml");
        fs::write(
            &path,
            r#"
            residue-entropy = 20.0
            interface-fraction = 0.0

            [attempt-frequency]
            size-exponent = 0.5

            [enthalpy.b]
            local = 1.4
            nonlocal = 5.5
            "#,
        )
        .unwrap();

        let params = ModelParameters::load(&path).unwrap();
        assert_eq!(params.residue_entropy, 20.0);
        assert_eq!(params.mixing_entropy_scale, DEFAULT_MIXING_ENTROPY_SCALE);
        assert_eq!(params.interface_fraction, 0.0);
        assert_eq!(params.attempt_frequency.prefactor, DEFAULT_ATTEMPT_PREFACTOR);
        assert_eq!(params.attempt_frequency.size_exponent, 0.5);
        assert_eq!(
            params.enthalpy_for(StructuralClass::Beta),
            EnthalpyCoefficients::new(1.4, 5.5)
        );
        assert_eq!(
            params.enthalpy_for(StructuralClass::Alpha),
            StructuralClass::Alpha.default_enthalpy()
        );
    }

    #[test]
    fn load_accepts_long_class_names_as_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.toml");
        fs::write(&path, "[enthalpy.mixed]\nlocal = 1.0\nnonlocal = 6.0\n").unwrap();

        let params = ModelParameters::load(&path).unwrap();
        assert_eq!(
            params.enthalpy_for(StructuralClass::AlphaBeta),
            EnthalpyCoefficients::new(1.0, 6.0)
        );
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ModelParameters::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.toml");
        fs::write(&path, "heat-capacity = 1.0\n").unwrap();
        let result = ModelParameters::load(&path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_unknown_class() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.toml");
        fs::write(&path, "[enthalpy.c]\nlocal = 1.0\nnonlocal = 6.0\n").unwrap();
        let result = ModelParameters::load(&path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_negative_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.toml");
        fs::write(&path, "mixing-entropy-scale = -0.1\n").unwrap();
        let result = ModelParameters::load(&path);
        assert!(matches!(
            result,
            Err(ParamLoadError::Invalid {
                source: InputError::Parameter {
                    name: "mixing-entropy-scale",
                    ..
                },
                ..
            })
        ));
    }
}
