//! # Synapse - Numerically Stable Activation Functions
//!
//! Synapse provides the activation functions used by neural network layers,
//! implemented over [`ndarray`] arrays of any rank with numerically stable
//! formulas.
//!
//! ## Key Features
//!
//! - **Elementwise activations**: ReLU family, ELU/SELU, sigmoid, tanh, GELU, mish and more
//! - **Axis-reducing activations**: softmax and log-softmax jointly over any set of axes
//! - **Resolution**: look activations up by name or JSON config
//! - **Pure functions**: inputs are never mutated, every call returns a new array
//! - **Parallelism**: large inputs are processed on the rayon pool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use synapse::activations::{self, Activation};
//! use ndarray::array;
//!
//! let logits = array![[2.0_f64, 1.0, 0.1], [0.5, 0.5, 0.5]];
//! let probabilities = activations::softmax(&logits, -1).unwrap();
//!
//! let activation: Activation = "silu".parse().unwrap();
//! let hidden = activation.apply(&logits).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions, the [`activations::Activation`] enum and the resolver
//! - [`error`] - Error types and result handling

pub mod activations;
pub mod error;

pub use activations::{Activation, AxisSpec, Identifier};
pub use error::{ActivationError, Result};

#[cfg(test)]
mod tests;
