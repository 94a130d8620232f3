//! Elementwise activation functions.
//!
//! Every function borrows its input and returns a freshly allocated array of
//! the same shape. Float functions are generic over [`NdFloat`], so both `f32`
//! and `f64` arrays are accepted.

use ndarray::{Array, ArrayBase, Data, Dimension, NdFloat};
use serde::{Deserialize, Serialize};

use super::gelu::Gelu;

/// Element count from which maps run on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// SELU negative-side multiplier.
pub const SELU_ALPHA: f64 = 1.673_263_242_354_377_284_817_042_991_671_7;
/// SELU output scale.
pub const SELU_SCALE: f64 = 1.050_700_987_355_480_493_419_334_985_294_6;

/// Cast an `f64` constant into the element type.
#[inline]
pub(crate) fn constant<A: NdFloat>(value: f64) -> A {
    A::from(value).unwrap_or_else(A::nan)
}

/// Apply `f` to every element of a copy of `x`.
pub(crate) fn map_elements<A, S, D, F>(x: &ArrayBase<S, D>, f: F) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
    F: Fn(A) -> A + Sync + Send,
{
    let mut output = x.to_owned();
    if output.len() >= PARALLEL_THRESHOLD {
        log::trace!("parallel elementwise map over {} elements", output.len());
        output.par_mapv_inplace(f);
    } else {
        output.mapv_inplace(f);
    }
    output
}

#[inline]
pub(crate) fn sigmoid_scalar<A: NdFloat>(v: A) -> A {
    if v >= A::zero() {
        A::one() / (A::one() + (-v).exp())
    } else {
        let z = v.exp();
        z / (A::one() + z)
    }
}

#[inline]
pub(crate) fn softplus_scalar<A: NdFloat>(v: A) -> A {
    (-v.abs()).exp().ln_1p() + v.max(A::zero())
}

/// `max(0, x)`
pub fn relu<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, |v| v.max(A::zero()))
}

/// `min(max(0, x), 6)`
pub fn relu6<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    let six = constant::<A>(6.0);
    map_elements(x, move |v| v.max(A::zero()).min(six))
}

/// Options for the generalized rectifier, [`relu_with`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReluOptions {
    /// Slope applied below the threshold
    #[serde(default, skip_serializing_if = "is_zero")]
    pub negative_slope: f64,
    /// Upper saturation value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Values at or below this are treated as inactive
    #[serde(default, skip_serializing_if = "is_zero")]
    pub threshold: f64,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

impl Default for ReluOptions {
    fn default() -> Self {
        ReluOptions {
            negative_slope: 0.0,
            max_value: None,
            threshold: 0.0,
        }
    }
}

/// Generalized rectifier with optional slope, saturation and threshold.
///
/// With default options this is [`relu`]. Otherwise:
/// - values above `threshold` pass through, everything else becomes zero
/// - the result is clipped to `[0, max_value]` when `max_value` is set
/// - `negative_slope * max(threshold - x, 0)` is subtracted
pub fn relu_with<A, S, D>(x: &ArrayBase<S, D>, options: &ReluOptions) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    let threshold = constant::<A>(options.threshold);
    let slope = constant::<A>(options.negative_slope);
    let max_value = options.max_value.map(constant::<A>);
    let thresholded = options.threshold != 0.0;
    let sloped = options.negative_slope != 0.0;

    map_elements(x, move |v| {
        let mut out = if thresholded {
            if v > threshold { v } else { A::zero() }
        } else {
            v.max(A::zero())
        };
        if let Some(max) = max_value {
            out = out.max(A::zero()).min(max);
        }
        if sloped {
            out -= slope * (threshold - v).max(A::zero());
        }
        out
    })
}

/// `x` if `x > 0`, otherwise `negative_slope * x`
pub fn leaky_relu<A, S, D>(x: &ArrayBase<S, D>, negative_slope: f64) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    let slope = constant::<A>(negative_slope);
    map_elements(x, move |v| if v > A::zero() { v } else { slope * v })
}

/// `x` if `x > 0`, otherwise `alpha * (exp(x) - 1)`
pub fn elu<A, S, D>(x: &ArrayBase<S, D>, alpha: f64) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    let a = constant::<A>(alpha);
    map_elements(x, move |v| if v > A::zero() { v } else { a * v.exp_m1() })
}

/// Scaled ELU with the self-normalizing constants.
pub fn selu<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    let alpha = constant::<A>(SELU_ALPHA);
    let scale = constant::<A>(SELU_SCALE);
    map_elements(x, move |v| {
        if v > A::zero() {
            scale * v
        } else {
            scale * alpha * v.exp_m1()
        }
    })
}

/// `ln(1 + exp(x))`, evaluated as `log1p(exp(-|x|)) + max(x, 0)`
pub fn softplus<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, softplus_scalar)
}

/// `x / (1 + |x|)`
pub fn softsign<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, |v| v / (A::one() + v.abs()))
}

/// Logistic sigmoid. Negative inputs use `exp(x) / (1 + exp(x))` so the
/// exponential never overflows.
pub fn sigmoid<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, sigmoid_scalar)
}

/// `clip(x / 6 + 0.5, 0, 1)`
pub fn hard_sigmoid<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    let six = constant::<A>(6.0);
    let half = constant::<A>(0.5);
    map_elements(x, move |v| (v / six + half).max(A::zero()).min(A::one()))
}

/// `x * sigmoid(x)`
pub fn silu<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, |v| v * sigmoid_scalar(v))
}

/// Alias of [`silu`].
pub fn swish<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    silu(x)
}

/// Gaussian error linear unit.
///
/// `approximate = false` computes `x * Φ(x)` through `erf`; `true` uses the
/// tanh approximation.
pub fn gelu<A, S, D>(x: &ArrayBase<S, D>, approximate: bool) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    if approximate {
        map_elements(x, Gelu::tanh_approximation)
    } else {
        map_elements(x, Gelu::exact)
    }
}

/// `x * tanh(softplus(x))`
pub fn mish<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, |v| v * softplus_scalar(v).tanh())
}

/// Hyperbolic tangent, in `(-1, 1)`.
pub fn tanh<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, |v| v.tanh())
}

/// `exp(x)`; large inputs overflow to `+inf`.
pub fn exponential<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    map_elements(x, |v| v.exp())
}

/// Identity. Works for any element type, integers included.
pub fn linear<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    x.to_owned()
}
