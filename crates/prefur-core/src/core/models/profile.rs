use thiserror::Error;

/// Minimum number of samples for a profile to hold an unfolded basin, a transition state
/// and a folded basin.
pub const MIN_PROFILE_SAMPLES: usize = 3;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProfileError {
    #[error("Profile has {0} sample(s); at least 3 are required")]
    TooFewSamples(usize),

    #[error("Free energy at sample {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },
}

/// One sample of a free-energy profile. Energies are in kJ/mol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Fraction of native residues, from 0 (unfolded) to 1 (folded).
    pub coordinate: f64,
    pub enthalpy: f64,
    /// Entropic contribution `-T·S`.
    pub entropic_term: f64,
    pub free_energy: f64,
}

/// A free-energy profile `G(x)` sampled uniformly over the reaction coordinate `x ∈ [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeEnergyProfile {
    points: Vec<ProfilePoint>,
}

impl FreeEnergyProfile {
    pub(crate) fn from_points(points: Vec<ProfilePoint>) -> Result<Self, ProfileError> {
        if points.len() < MIN_PROFILE_SAMPLES {
            return Err(ProfileError::TooFewSamples(points.len()));
        }
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.free_energy.is_finite())
        {
            return Err(ProfileError::NonFinite {
                index,
                value: p.free_energy,
            });
        }
        Ok(Self { points })
    }

    /// Builds a profile from bare free energies, spreading them uniformly over `[0, 1]`.
    ///
    /// Enthalpy and entropy are unknown for such a profile; the free energy is reported
    /// as purely enthalpic.
    pub fn from_free_energies(values: &[f64]) -> Result<Self, ProfileError> {
        if values.len() < MIN_PROFILE_SAMPLES {
            return Err(ProfileError::TooFewSamples(values.len()));
        }
        let last = (values.len() - 1) as f64;
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &g)| ProfilePoint {
                coordinate: i as f64 / last,
                enthalpy: g,
                entropic_term: 0.0,
                free_energy: g,
            })
            .collect();
        Self::from_points(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&ProfilePoint> {
        self.points.get(index)
    }

    pub fn free_energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.free_energy)
    }
}
