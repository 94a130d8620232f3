use ndarray::NdFloat;

use super::elementwise::constant;

/// GELU (Gaussian Error Linear Unit) scalar kernels
pub struct Gelu;

impl Gelu {
    /// GELU(x) = x * Φ(x) = 0.5 * x * (1 + erf(x / sqrt(2)))
    ///
    /// `erf` is evaluated in f64 regardless of the element type.
    #[inline]
    pub fn exact<A: NdFloat>(x: A) -> A {
        match x.to_f64() {
            Some(xd) => {
                let cdf = 0.5 * (1.0 + libm::erf(xd / std::f64::consts::SQRT_2));
                x * constant::<A>(cdf)
            }
            None => A::nan(),
        }
    }

    /// Approximation of GELU using tanh
    /// GELU(x) ≈ 0.5 * x * (1 + tanh(sqrt(2/π) * (x + 0.044715 * x^3)))
    #[inline]
    pub fn tanh_approximation<A: NdFloat>(x: A) -> A {
        let sqrt_2_over_pi = constant::<A>((2.0_f64 / std::f64::consts::PI).sqrt());
        let coeff = constant::<A>(0.044715);
        let half = constant::<A>(0.5);
        let inner = sqrt_2_over_pi * (x + coeff * x * x * x);
        half * x * (A::one() + inner.tanh())
    }
}
