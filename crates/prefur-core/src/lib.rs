//! # PREFUR Core Library
//!
//! Prediction of protein folding and unfolding rate constants from two purely structural
//! inputs: the number of residues in the chain and its coarse structural class
//! (alpha, beta or mixed alpha/beta).
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the numerical model stays
//! independent of how a prediction is requested or rendered.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`StructuralClass`, `Sequence`,
//!   `FreeEnergyProfile`), the thermodynamic model (`thermo`: free-energy surface, barrier
//!   extraction, rate law) and profile export.
//!
//! - **[`engine`]: The Configuration Layer.** Validated prediction settings built through
//!   `PredictionConfigBuilder`, and the `EngineError` taxonomy every workflow reports through.
//!
//! - **[`workflows`]: The Public API.** Complete procedures tying `engine` and `core`
//!   together: rate prediction and free-energy profile generation.
//!
//! ## Example
//!
//! ```
//! use prefur::engine::config::ChainInput;
//! use prefur::workflows::predict::predict_rates;
//!
//! let (folding, unfolding) = predict_rates(ChainInput::Length(100), "a", 298.0).unwrap();
//! assert!(folding > unfolding);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
