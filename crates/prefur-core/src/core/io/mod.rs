//! # File I/O
//!
//! Export of computed free-energy profiles for plotting and inspection.
//!
//! - [`profile`] - CSV writer for `FreeEnergyProfile` samples

pub mod profile;
