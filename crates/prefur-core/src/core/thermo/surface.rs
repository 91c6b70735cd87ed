use super::input::{InputError, check_parameter, check_residue_count, check_temperature};
use super::params::ModelParameters;
use super::{GAS_CONSTANT, PROFILE_RESOLUTION};
use crate::core::models::class::EnthalpyCoefficients;
use crate::core::models::profile::{FreeEnergyProfile, ProfilePoint};

/// Mean-field free-energy surface of a two-state protein over `x = n / N`, the fraction of
/// native residues.
///
/// Per residue, the enthalpy gained on folding has a local part that grows linearly with
/// `x` and a non-local part that grows with the number of native pairs (`x²`). The entropy
/// loses a fixed conformational cost per native residue and carries the combinatorial
/// entropy of choosing which residues are native. On top of these bulk terms, a partially
/// folded chain misses a fraction `φ` of the non-local contacts of the residues on the
/// boundary between its native and unfolded parts. That boundary grows as the surface of the
/// native region, `N^(2/3)·x·(1 - x)`, so the shape of the surface, and not only its scale,
/// depends on the chain length:
///
/// ```text
/// h(x) = -(ΔH_loc·x + ΔH_nonloc·x²)
/// s(x) = -ΔS_res·x - c·R·[x·ln x + (1 - x)·ln(1 - x)]
/// H_int(x) = φ·ΔH_nonloc·N^(2/3)·x·(1 - x)
/// G(x) = N·(h(x) - T·s(x)) + H_int(x)
/// ```
#[derive(Debug, Clone)]
pub struct FreeEnergySurface<'a> {
    residue_count: usize,
    coefficients: EnthalpyCoefficients,
    parameters: &'a ModelParameters,
}

impl<'a> FreeEnergySurface<'a> {
    pub fn new(
        residue_count: usize,
        coefficients: EnthalpyCoefficients,
        parameters: &'a ModelParameters,
    ) -> Result<Self, InputError> {
        check_residue_count(residue_count)?;
        check_parameter("enthalpy.local", coefficients.local)?;
        check_parameter("enthalpy.nonlocal", coefficients.nonlocal)?;
        parameters.validate()?;
        Ok(Self {
            residue_count,
            coefficients,
            parameters,
        })
    }

    pub fn residue_count(&self) -> usize {
        self.residue_count
    }

    /// Enthalpy per residue at coordinate `x`, in kJ/mol.
    #[inline]
    fn residue_enthalpy(&self, x: f64) -> f64 {
        -(self.coefficients.local * x + self.coefficients.nonlocal * x * x)
    }

    /// Entropy per residue at coordinate `x`, in kJ/(mol·K).
    #[inline]
    fn residue_entropy(&self, x: f64) -> f64 {
        let conformational = -self.parameters.residue_entropy_kj() * x;
        let combinatorial = -self.parameters.mixing_entropy_scale * GAS_CONSTANT * mixing(x);
        conformational + combinatorial
    }

    /// Enthalpy missing across the native/unfolded boundary, in kJ/mol. Zero at both ends.
    #[inline]
    fn interface_enthalpy(&self, x: f64) -> f64 {
        let boundary = (self.residue_count as f64).powf(2.0 / 3.0) * x * (1.0 - x);
        self.parameters.interface_fraction * self.coefficients.nonlocal * boundary
    }

    pub fn enthalpy(&self, x: f64) -> f64 {
        self.residue_count as f64 * self.residue_enthalpy(x) + self.interface_enthalpy(x)
    }

    pub fn entropy(&self, x: f64) -> f64 {
        self.residue_count as f64 * self.residue_entropy(x)
    }

    pub fn free_energy(&self, x: f64, temperature: f64) -> f64 {
        self.residue_count as f64 * (self.residue_enthalpy(x) - temperature * self.residue_entropy(x))
            + self.interface_enthalpy(x)
    }

    /// Samples the surface at [`PROFILE_RESOLUTION`] evenly spaced points of `[0, 1]`.
    pub fn profile(&self, temperature: f64) -> Result<FreeEnergyProfile, InputError> {
        check_temperature(temperature)?;
        let last = (PROFILE_RESOLUTION - 1) as f64;
        let n = self.residue_count as f64;

        let points = (0..PROFILE_RESOLUTION)
            .map(|i| {
                let x = i as f64 / last;
                let h = self.residue_enthalpy(x);
                let s = self.residue_entropy(x);
                let interface = self.interface_enthalpy(x);
                ProfilePoint {
                    coordinate: x,
                    enthalpy: n * h + interface,
                    entropic_term: -n * temperature * s,
                    free_energy: n * (h - temperature * s) + interface,
                }
            })
            .collect();

        Ok(FreeEnergyProfile::from_points(points)?)
    }
}

/// `x·ln x + (1 - x)·ln(1 - x)`, with `0·ln 0 = 0` at the end points.
#[inline]
fn mixing(x: f64) -> f64 {
    let term = |p: f64| if p > 0.0 { p * p.ln() } else { 0.0 };
    term(x) + term(1.0 - x)
}
