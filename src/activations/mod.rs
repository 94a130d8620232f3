//! # Activation Functions Module
//!
//! This module provides the activation functions used by neural network layers.
//! Every function borrows an `ndarray` array and returns a new array of the same
//! shape; inputs are never mutated.
//!
//! ## Available Activations
//!
//! - **ReLU family**: `relu`, `relu6`, `leaky_relu`, and the generalized `relu_with`
//! - **Exponential units**: `elu`, `selu`, `exponential`
//! - **Smooth rectifiers**: `softplus`, `silu` (alias `swish`), `gelu`, `mish`
//! - **Squashing functions**: `sigmoid`, `hard_sigmoid`, `tanh`, `softsign`
//! - **Normalizing functions**: `softmax`, `log_softmax` over one or more axes
//! - **Linear**: Identity function - No transformation, element type preserved
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use synapse::activations::{self, Identifier};
//! use ndarray::array;
//!
//! let data = array![[1.0_f32, -0.5], [0.0, 2.0]];
//!
//! // Call a function directly
//! let rectified = activations::relu(&data);
//! let probabilities = activations::softmax(&data, -1).unwrap();
//!
//! // Or resolve one by name and apply it
//! let gelu = activations::get(Some(Identifier::Name("gelu"))).unwrap();
//! let output = gelu.apply(&data).unwrap();
//! ```
//!
//! ## Numerical Stability
//!
//! - `sigmoid` and `silu` branch on the sign of the input so `exp` never overflows
//! - `softplus` and `mish` use `log1p(exp(-|x|)) + max(x, 0)`
//! - `softmax` and `log_softmax` subtract the slice maximum before exponentiating
//! - `exponential` is left unguarded and overflows to `+inf`

pub mod elementwise;
pub mod functions;
pub mod gelu;
pub mod resolver;
pub mod softmax;

pub use elementwise::{
    elu, exponential, gelu, hard_sigmoid, leaky_relu, linear, mish, relu, relu6, relu_with, selu,
    sigmoid, silu, softplus, softsign, swish, tanh, ReluOptions, PARALLEL_THRESHOLD, SELU_ALPHA,
    SELU_SCALE,
};
pub use functions::Activation;
pub use resolver::{deserialize, get, serialize, Identifier};
pub use softmax::{log_softmax, softmax, AxisSpec};
