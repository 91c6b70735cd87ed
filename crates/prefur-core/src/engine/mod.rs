//! # Engine Module
//!
//! Validated prediction settings and the error taxonomy of the PREFUR engine.
//!
//! ## Overview
//!
//! Every prediction is described by a [`config::PredictionConfig`]: the residue count
//! (given directly or derived from a sequence), the structural class, the temperature and
//! the model constants. The builder checks each value once, so the workflows downstream can
//! assume well-formed input and only have to report genuine model failures.
//!
//! - **Configuration** ([`config`]) - `PredictionConfig`, its builder and chain input forms
//! - **Error Handling** ([`error`]) - `EngineError`, separating invalid input from
//!   degenerate free-energy landscapes

pub mod config;
pub mod error;
