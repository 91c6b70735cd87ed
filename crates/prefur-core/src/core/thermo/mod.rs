//! # Thermodynamics and Kinetics
//!
//! The numerical engine of PREFUR, organized as three stages that each depend only on the
//! output of the previous one:
//!
//! - **Surface** ([`surface`]) - Builds the free-energy profile `G(x)` over the fraction of
//!   native residues from the residue count and the class enthalpy coefficients
//! - **Barriers** ([`barrier`]) - Locates the unfolded basin, the transition state and the
//!   folded basin, and reports the one-sided barrier heights
//! - **Kinetics** ([`kinetics`]) - Converts a barrier into a rate constant with a
//!   size-dependent attempt frequency
//!
//! Shared model constants live in [`params`]; argument checks shared by the stages live in
//! [`input`].

pub mod barrier;
pub mod input;
pub mod kinetics;
pub mod params;
pub mod surface;

pub use input::InputError;

/// Molar gas constant in kJ/(mol·K), matching the kJ/mol energy units of the model.
pub const GAS_CONSTANT: f64 = 8.314_462_618e-3;

/// Default temperature of a prediction, in kelvin.
pub const DEFAULT_TEMPERATURE: f64 = 298.0;

/// Number of samples of every free-energy profile over `x ∈ [0, 1]`.
pub const PROFILE_RESOLUTION: usize = 1001;
