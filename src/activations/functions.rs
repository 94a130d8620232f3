use std::str::FromStr;

use ndarray::{Array, ArrayBase, Data, Dimension, NdFloat};
use serde::{Deserialize, Serialize};

use super::elementwise::{
    elu, exponential, gelu, hard_sigmoid, leaky_relu, linear, mish, relu, relu6, relu_with, selu,
    sigmoid, silu, softplus, softsign, tanh, ReluOptions,
};
use super::softmax::{log_softmax, softmax, AxisSpec};
use crate::error::{ActivationError, Result};

fn default_negative_slope() -> f64 {
    0.2
}

fn default_alpha() -> f64 {
    1.0
}

/// An enumeration of the activation functions available to a layer.
///
/// Serialized with an internal `class_name` tag, e.g.
/// `{"class_name": "leaky_relu", "negative_slope": 0.1}`. Missing parameters
/// take their defaults. `Relu` carries the [`ReluOptions`] fields inline, e.g.
/// `{"class_name": "relu", "max_value": 6.0}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "class_name", rename_all = "snake_case")]
pub enum Activation {
    Relu(ReluOptions),
    Relu6,
    LeakyRelu {
        #[serde(default = "default_negative_slope")]
        negative_slope: f64,
    },
    Elu {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    Selu,
    Softplus,
    Softsign,
    Sigmoid,
    HardSigmoid,
    Silu,
    Gelu {
        #[serde(default)]
        approximate: bool,
    },
    Mish,
    Tanh,
    Exponential,
    #[default]
    Linear,
    Softmax {
        #[serde(default)]
        axis: AxisSpec,
    },
    LogSoftmax {
        #[serde(default)]
        axis: AxisSpec,
    },
}

impl Activation {
    /// Canonical names, in declaration order.
    pub const NAMES: [&'static str; 17] = [
        "relu",
        "relu6",
        "leaky_relu",
        "elu",
        "selu",
        "softplus",
        "softsign",
        "sigmoid",
        "hard_sigmoid",
        "silu",
        "gelu",
        "mish",
        "tanh",
        "exponential",
        "linear",
        "softmax",
        "log_softmax",
    ];

    /// Canonical name of the activation.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Relu(_) => "relu",
            Activation::Relu6 => "relu6",
            Activation::LeakyRelu { .. } => "leaky_relu",
            Activation::Elu { .. } => "elu",
            Activation::Selu => "selu",
            Activation::Softplus => "softplus",
            Activation::Softsign => "softsign",
            Activation::Sigmoid => "sigmoid",
            Activation::HardSigmoid => "hard_sigmoid",
            Activation::Silu => "silu",
            Activation::Gelu { .. } => "gelu",
            Activation::Mish => "mish",
            Activation::Tanh => "tanh",
            Activation::Exponential => "exponential",
            Activation::Linear => "linear",
            Activation::Softmax { .. } => "softmax",
            Activation::LogSoftmax { .. } => "log_softmax",
        }
    }

    /// Config fields the activation accepts besides `class_name`.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Activation::Relu(_) => &["negative_slope", "max_value", "threshold"],
            Activation::LeakyRelu { .. } => &["negative_slope"],
            Activation::Elu { .. } => &["alpha"],
            Activation::Gelu { .. } => &["approximate"],
            Activation::Softmax { .. } | Activation::LogSoftmax { .. } => &["axis"],
            _ => &[],
        }
    }

    /// Whether the activation maps every element independently.
    pub fn is_elementwise(&self) -> bool {
        !matches!(self, Activation::Softmax { .. } | Activation::LogSoftmax { .. })
    }

    /// Apply the activation, returning a new array of the same shape.
    ///
    /// Only the softmax family can fail, on an invalid axis selection.
    pub fn apply<A, S, D>(&self, input: &ArrayBase<S, D>) -> Result<Array<A, D>>
    where
        A: NdFloat,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let output = match self {
            Activation::Relu(options) if *options == ReluOptions::default() => relu(input),
            Activation::Relu(options) => relu_with(input, options),
            Activation::Relu6 => relu6(input),
            Activation::LeakyRelu { negative_slope } => leaky_relu(input, *negative_slope),
            Activation::Elu { alpha } => elu(input, *alpha),
            Activation::Selu => selu(input),
            Activation::Softplus => softplus(input),
            Activation::Softsign => softsign(input),
            Activation::Sigmoid => sigmoid(input),
            Activation::HardSigmoid => hard_sigmoid(input),
            Activation::Silu => silu(input),
            Activation::Gelu { approximate } => gelu(input, *approximate),
            Activation::Mish => mish(input),
            Activation::Tanh => tanh(input),
            Activation::Exponential => exponential(input),
            Activation::Linear => linear(input),
            Activation::Softmax { axis } => return softmax(input, axis.clone()),
            Activation::LogSoftmax { axis } => return log_softmax(input, axis.clone()),
        };
        Ok(output)
    }
}

/// Case-sensitive lookup by name. Parametrized activations get their defaults,
/// and `swish` resolves to [`Activation::Silu`].
impl FromStr for Activation {
    type Err = ActivationError;

    fn from_str(s: &str) -> Result<Self> {
        let activation = match s {
            "relu" => Activation::Relu(ReluOptions::default()),
            "relu6" => Activation::Relu6,
            "leaky_relu" => Activation::LeakyRelu {
                negative_slope: default_negative_slope(),
            },
            "elu" => Activation::Elu {
                alpha: default_alpha(),
            },
            "selu" => Activation::Selu,
            "softplus" => Activation::Softplus,
            "softsign" => Activation::Softsign,
            "sigmoid" => Activation::Sigmoid,
            "hard_sigmoid" => Activation::HardSigmoid,
            "silu" | "swish" => Activation::Silu,
            "gelu" => Activation::Gelu { approximate: false },
            "mish" => Activation::Mish,
            "tanh" => Activation::Tanh,
            "exponential" => Activation::Exponential,
            "linear" => Activation::Linear,
            "softmax" => Activation::Softmax {
                axis: AxisSpec::default(),
            },
            "log_softmax" => Activation::LogSoftmax {
                axis: AxisSpec::default(),
            },
            _ => return Err(ActivationError::unknown_identifier(s)),
        };
        Ok(activation)
    }
}
