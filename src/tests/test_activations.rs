use ndarray::{array, Array, Array1, Array3};
use crate::activations::{self, Activation, ReluOptions, SELU_ALPHA, SELU_SCALE};
use super::assert_all_close;

#[test]
fn test_relu_activation() {
    let input = array![-1.0, 0.0, 1.0, 2.0];
    let output = activations::relu(&input);
    assert_eq!(output, array![0.0, 0.0, 1.0, 2.0]);

    assert_eq!(activations::relu(&array![-5.0_f32])[0], 0.0);
    assert_eq!(activations::relu(&array![5.0_f32])[0], 5.0);
}

#[test]
fn test_relu6_activation() {
    let output = activations::relu6(&array![-3.0, 3.0, 6.0, 9.0]);
    assert_eq!(output, array![0.0, 3.0, 6.0, 6.0]);
}

#[test]
fn test_sigmoid_activation() {
    let output = activations::sigmoid(&array![0.0_f32, -0.0]);
    assert_eq!(output[0], 0.5);
    assert_eq!(output[1], 0.5);

    let output = activations::sigmoid(&array![2.0_f64, -2.0]);
    assert!((output[0] - 0.880_797_077_977_882_3).abs() < 1e-12);
    assert!((output[1] - 0.119_202_922_022_117_7).abs() < 1e-12);
}

#[test]
fn test_tanh_activation() {
    let output = activations::tanh(&array![0.0, 0.5]);
    assert_eq!(output[0], 0.0);
    assert!((output[1] - 0.5_f64.tanh()).abs() < 1e-15);
}

#[test]
fn test_leaky_relu() {
    let output = activations::leaky_relu(&array![-1.0, 0.0, 1.0], 0.01);
    assert_eq!(output, array![-0.01, 0.0, 1.0]);

    let output = activations::leaky_relu(&array![-2.0_f32, 3.0], 0.3);
    assert!((output[0] - (-0.6)).abs() < 1e-6);
    assert_eq!(output[1], 3.0);
}

#[test]
fn test_elu() {
    let output = activations::elu(&array![-1.0_f64, 0.0, 1.0], 1.0);
    assert!((output[0] - (-0.632)).abs() < 0.001);
    assert!((output[0] - ((-1.0_f64).exp() - 1.0)).abs() < 1e-12);
    assert_eq!(output[1], 0.0);
    assert_eq!(output[2], 1.0);

    let output = activations::elu(&array![-2.0], 0.5);
    assert!((output[0] - 0.5 * ((-2.0_f64).exp() - 1.0)).abs() < 1e-12);
}

#[test]
fn test_selu() {
    let output = activations::selu(&array![[1.0_f32, 2.0]]);
    assert!((output[[0, 0]] - 1.0507).abs() < 1e-4);
    assert!((output[[0, 1]] - 2.1014).abs() < 1e-4);

    let negative = array![-1.0, -2.0];
    let output = activations::selu(&negative);
    let expected = negative.mapv(|v: f64| (v.exp() - 1.0) * SELU_SCALE * SELU_ALPHA);
    assert_all_close(&output, &expected, 1e-7, 1e-12);
}

#[test]
fn test_softplus() {
    let output = activations::softplus(&array![0.0, 1.0, -1.0]);
    assert!((output[0] - 2.0_f64.ln()).abs() < 1e-12);
    assert!((output[1] - (1.0 + 1.0_f64.exp()).ln()).abs() < 1e-12);
    assert!((output[2] - (1.0 + (-1.0_f64).exp()).ln()).abs() < 1e-12);

    let large = array![1e5_f32];
    let output = activations::softplus(&large);
    assert!(output[0].is_finite());
    assert_eq!(output[0], 1e5);
}

#[test]
fn test_softsign() {
    let output = activations::softsign(&array![1.0, -3.0, 0.0]);
    assert_eq!(output, array![0.5, -0.75, 0.0]);
}

#[test]
fn test_hard_sigmoid() {
    let output = activations::hard_sigmoid(&array![-6.0, -3.0, 0.0, 3.0, 6.0, 9.0]);
    assert_eq!(output, array![0.0, 0.0, 0.5, 1.0, 1.0, 1.0]);
}

#[test]
fn test_silu_and_swish() {
    let input = array![1.0_f64, -1.0, 0.0];
    let output = activations::silu(&input);
    assert!((output[0] - 0.731_058_578_630_004_9).abs() < 1e-12);
    assert!((output[1] - (-0.268_941_421_369_995_1)).abs() < 1e-12);
    assert_eq!(output[2], 0.0);
    assert_eq!(activations::swish(&input), output);
}

#[test]
fn test_gelu() {
    let output = activations::gelu(&array![0.0_f64, 1.0, -1.0], false);

    // GELU(0) = 0
    assert!(output[0].abs() < 1e-12);
    // GELU(1) = Φ(1) ≈ 0.841345
    assert!((output[1] - 0.841_344_746_068_542_9).abs() < 1e-9);
    // GELU(-1) = -Φ(-1) ≈ -0.158655
    assert!((output[2] - (-0.158_655_253_931_457_05)).abs() < 1e-9);
}

#[test]
fn test_gelu_approximate() {
    let output = activations::gelu(&array![0.0_f32, 1.0, -1.0], true);
    assert!(output[0].abs() < 1e-6);
    assert!((output[1] - 0.841_192).abs() < 1e-5);
    assert!((output[2] - (-0.158_808)).abs() < 1e-5);
}

#[test]
fn test_mish() {
    let output = activations::mish(&array![1.0, 0.0]);
    let expected = (1.0 + 1.0_f64.exp()).ln().tanh();
    assert!((output[0] - expected).abs() < 1e-12);
    assert_eq!(output[1], 0.0);
}

#[test]
fn test_exponential() {
    let output = activations::exponential(&array![0.0, 1.0]);
    assert_eq!(output[0], 1.0);
    assert!((output[1] - std::f64::consts::E).abs() < 1e-12);
}

#[test]
fn test_linear_preserves_dtype() {
    let ints = array![[1_i32, -2], [3, 4]];
    let output: Array<i32, _> = activations::linear(&ints);
    assert_eq!(output, ints);

    let floats = array![0.25_f32, -7.5];
    assert_eq!(activations::linear(&floats), floats);
}

#[test]
fn test_relu_with_defaults_matches_relu() {
    let input = Array1::linspace(-5.0, 5.0, 21);
    let output = activations::relu_with(&input, &ReluOptions::default());
    assert_eq!(output, activations::relu(&input));
}

#[test]
fn test_relu_with_options() {
    let input = array![-2.0, 0.5, 1.0, 2.0, 8.0];

    let capped = activations::relu_with(&input, &ReluOptions { max_value: Some(6.0), ..Default::default() });
    assert_eq!(capped, activations::relu6(&input));

    let sloped = activations::relu_with(&input, &ReluOptions { negative_slope: 0.1, ..Default::default() });
    assert_all_close(&sloped, &activations::leaky_relu(&input, 0.1), 1e-12, 1e-12);

    let thresholded = activations::relu_with(&input, &ReluOptions { threshold: 1.0, ..Default::default() });
    assert_eq!(thresholded, array![0.0, 0.0, 0.0, 2.0, 8.0]);

    let combined = activations::relu_with(
        &input,
        &ReluOptions { negative_slope: 0.5, max_value: Some(4.0), threshold: 1.0 },
    );
    assert_all_close(&combined, &array![-1.5, -0.25, 0.0, 2.0, 4.0], 1e-12, 1e-12);
}

#[test]
fn test_shape_is_preserved() {
    let input = Array3::from_shape_fn((2, 3, 4), |(i, j, k)| (i as f64) - (j as f64) * 0.5 + (k as f64) * 0.25);
    let elementwise = [
        Activation::Relu(ReluOptions::default()),
        Activation::Relu6,
        Activation::LeakyRelu { negative_slope: 0.2 },
        Activation::Elu { alpha: 1.0 },
        Activation::Selu,
        Activation::Softplus,
        Activation::Softsign,
        Activation::Sigmoid,
        Activation::HardSigmoid,
        Activation::Silu,
        Activation::Gelu { approximate: false },
        Activation::Gelu { approximate: true },
        Activation::Mish,
        Activation::Tanh,
        Activation::Exponential,
        Activation::Linear,
    ];
    for activation in elementwise.iter() {
        assert!(activation.is_elementwise());
        let output = activation.apply(&input).unwrap();
        assert_eq!(output.shape(), input.shape(), "{:?} changed the shape", activation);
    }
}

#[test]
fn test_apply_dispatches_to_functions() {
    let input = array![[-2.0, -0.5], [0.5, 2.0]];
    assert_eq!(Activation::Relu(ReluOptions::default()).apply(&input).unwrap(), activations::relu(&input));
    assert_eq!(Activation::Sigmoid.apply(&input).unwrap(), activations::sigmoid(&input));
    assert_eq!(
        Activation::LeakyRelu { negative_slope: 0.3 }.apply(&input).unwrap(),
        activations::leaky_relu(&input, 0.3)
    );
    assert_eq!(
        Activation::Gelu { approximate: true }.apply(&input).unwrap(),
        activations::gelu(&input, true)
    );
    assert_eq!(Activation::Linear.apply(&input).unwrap(), input);
    assert_eq!(
        Activation::Softmax { axis: 0.into() }.apply(&input).unwrap(),
        activations::softmax(&input, 0).unwrap()
    );
}

#[test]
fn test_input_is_not_mutated() {
    let input = array![-1.0, 0.0, 1.0];
    let snapshot = input.clone();
    let _ = activations::elu(&input, 1.0);
    let _ = activations::softmax(&input, -1).unwrap();
    assert_eq!(input, snapshot);
}

#[test]
fn test_parallel_path_matches_scalar_formula() {
    let input = Array1::linspace(-20.0, 20.0, 3 * activations::PARALLEL_THRESHOLD);
    let output = activations::sigmoid(&input);
    let expected = input.mapv(|v: f64| 1.0 / (1.0 + (-v).exp()));
    assert_all_close(&output, &expected, 1e-12, 1e-15);

    let output = activations::softplus(&input);
    let expected = input.mapv(|v: f64| v.max(0.0) + (-v.abs()).exp().ln_1p());
    assert_eq!(output, expected);
}
