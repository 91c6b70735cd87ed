//! # Data Models
//!
//! The immutable values a prediction is made of.
//!
//! - [`class`] - The coarse structural class of a protein and its enthalpy coefficients
//! - [`sequence`] - Validated amino-acid sequences, reduced to a residue count downstream
//! - [`profile`] - A free-energy profile sampled over the folding reaction coordinate

pub mod class;
pub mod profile;
pub mod sequence;
