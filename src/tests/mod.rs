// Test modules for all components
pub mod test_activations;

use ndarray::{ArrayBase, Data, Dimension};

/// Assert `|actual - expected| <= atol + rtol * |expected|` elementwise.
pub fn assert_all_close<S1, S2, D>(
    actual: &ArrayBase<S1, D>,
    expected: &ArrayBase<S2, D>,
    rtol: f64,
    atol: f64,
) where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    assert_eq!(actual.shape(), expected.shape(), "shape mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= atol + rtol * e.abs(),
            "element {} differs: {} vs expected {}",
            i,
            a,
            e
        );
    }
}
