//! # Workflows Module
//!
//! Top-level entry points of the PREFUR library.
//!
//! ## Overview
//!
//! A workflow takes a validated [`PredictionConfig`](crate::engine::config::PredictionConfig)
//! and runs the full model on it. Workflows are pure and synchronous: identical inputs give
//! bit-identical outputs, and independent calls share no state, so callers may run as many
//! of them concurrently as they like.
//!
//! - **Rate Prediction** ([`predict`]) - Folding and unfolding rate constants, together with
//!   the barriers and basin locations they were derived from
//! - **Profile Generation** ([`profile`]) - The sampled free-energy surface itself

pub mod predict;
pub mod profile;
