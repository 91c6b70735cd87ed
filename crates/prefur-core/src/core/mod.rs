//! # Core Module
//!
//! Fundamental data structures and the physical model behind PREFUR predictions.
//!
//! ## Overview
//!
//! A prediction walks through three purely numerical stages: a one-dimensional free-energy
//! surface is built over the fraction of native residues, the folding and unfolding barriers
//! are extracted from it, and each barrier is converted into a rate constant. Every stage is
//! a pure function of its inputs and produces an immutable value consumed by the next.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Structural classes, amino-acid sequences and sampled
//!   free-energy profiles
//! - **Thermodynamics and Kinetics** ([`thermo`]) - Surface construction, barrier extraction,
//!   the rate law and the model parameters they share
//! - **File I/O** ([`io`]) - Tabular export of free-energy profiles
//!
//! ## Scientific Foundation
//!
//! The model is the mean-field two-state picture of De Sancho and Muñoz (Phys. Chem. Chem.
//! Phys. 13, 17030-17043, 2011): local and non-local enthalpic stabilization compete with the
//! conformational entropy lost per native residue, and the resulting barrier is crossed at a
//! size-dependent attempt frequency.

pub mod io;
pub mod models;
pub mod thermo;
