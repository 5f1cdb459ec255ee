/*
 * @Description  : 激活层单元测试
 */

use crate::nn::{Activation, Module};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

/// 测试 ReLU：负值截断为0，非负值保持
#[test]
fn test_relu() {
    let act = Activation::relu();
    let x = Tensor::new(&[-2.0, -0.5, 0.0, 1.5], &[1, 4]);
    let y = act.forward(&x).unwrap();
    assert_eq!(y, Tensor::new(&[0.0, 0.0, 0.0, 1.5], &[1, 4]));
}

/// 测试 Sigmoid 的几个已知值
#[test]
fn test_sigmoid() {
    let act = Activation::sigmoid();
    let x = Tensor::new(&[0.0, 2.0, -2.0], &[1, 3]);
    let y = act.forward(&x).unwrap();

    let values = y.as_slice();
    assert_abs_diff_eq!(values[0], 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(values[1], 0.880_797, epsilon = 1e-5);
    assert_abs_diff_eq!(values[2], 0.119_203, epsilon = 1e-5);
}

/// 测试 Tanh 的奇函数性质
#[test]
fn test_tanh() {
    let act = Activation::tanh();
    let x = Tensor::new(&[0.0, 1.0, -1.0], &[1, 3]);
    let y = act.forward(&x).unwrap();

    let values = y.as_slice();
    assert_abs_diff_eq!(values[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(values[1], 0.761_594, epsilon = 1e-5);
    assert_abs_diff_eq!(values[1] + values[2], 0.0, epsilon = 1e-6);
}

/// 测试 Softplus：处处为正，且softplus(0)=ln2
#[test]
fn test_softplus() {
    let act = Activation::softplus();
    let x = Tensor::new(&[0.0, -3.0, 3.0], &[1, 3]);
    let y = act.forward(&x).unwrap();

    let values = y.as_slice();
    assert_abs_diff_eq!(values[0], std::f32::consts::LN_2, epsilon = 1e-6);
    assert!(values.iter().all(|&v| v > 0.0));
}

/// 测试激活层无参数、无子模块
#[test]
fn test_activation_is_stateless() {
    let act = Activation::relu();
    assert_eq!(act.num_params(), 0);
    assert!(act.base().children().is_empty());
    assert_eq!(act.kind(), "ReLU");
}
