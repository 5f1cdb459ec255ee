/*
 * @Description  : Linear 层单元测试（Batch-First 设计）
 */

use crate::nn::{Init, Linear, Module, ModuleError};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

/// 测试参数形状：weight [in, out]，bias [1, out]
#[test]
fn test_linear_parameter_shapes() {
    let fc = Linear::new_seeded(784, 128, true, 42).unwrap();
    assert_eq!(fc.in_features(), 784);
    assert_eq!(fc.out_features(), 128);
    assert_eq!(fc.weights().shape(), vec![784, 128]);
    assert_eq!(fc.bias().unwrap().shape(), vec![1, 128]);
}

/// 测试不带 bias 的 Linear
#[test]
fn test_linear_no_bias() {
    let fc = Linear::new_seeded(8, 4, false, 42).unwrap();
    assert!(fc.bias().is_none());
    assert_eq!(fc.num_params(), 1);
}

/// 测试常数初始化下的前向数值
#[test]
fn test_linear_forward_values() {
    // 权重全0.5，偏置全0：y[i][j] = 0.5 * sum(x[i])
    let fc = Linear::new_with_init(3, 2, true, &Init::Constant(0.5)).unwrap();
    let x = Tensor::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let y = fc.forward(&x).unwrap();

    assert_eq!(y.shape(), &[2, 2]);
    let values = y.as_slice();
    assert_abs_diff_eq!(values[0], 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(values[1], 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(values[2], 7.5, epsilon = 1e-6);
    assert_abs_diff_eq!(values[3], 7.5, epsilon = 1e-6);
}

/// 测试 bias 的按行广播
#[test]
fn test_linear_bias_broadcast() {
    let fc = Linear::new_with_init(2, 2, true, &Init::Constant(0.0)).unwrap();
    // 权重全0，所以输出完全由bias决定
    fc.bias()
        .unwrap()
        .set_value(&Tensor::new(&[1.0, -1.0], &[1, 2]))
        .unwrap();

    let x = Tensor::new(&[5.0, 6.0, 7.0, 8.0], &[2, 2]);
    let y = fc.forward(&x).unwrap();
    assert_eq!(y, Tensor::new(&[1.0, -1.0, 1.0, -1.0], &[2, 2]));
}

/// 测试输入宽度不匹配返回 ShapeMismatch
#[test]
fn test_linear_shape_mismatch() {
    let fc = Linear::new_seeded(4, 2, true, 42).unwrap();
    let x = Tensor::new(&[1.0, 2.0, 3.0], &[1, 3]);

    let err = fc.forward(&x).unwrap_err();
    match err {
        ModuleError::ShapeMismatch { expected, got, .. } => {
            assert_eq!(expected, vec![1, 4]);
            assert_eq!(got, vec![1, 3]);
        }
        other => panic!("期望ShapeMismatch，实际为{other:?}"),
    }
}

/// 测试1阶输入同样返回 ShapeMismatch（Batch-First要求2阶）
#[test]
fn test_linear_rejects_non_2d_input() {
    let fc = Linear::new_seeded(3, 2, true, 42).unwrap();
    let x = Tensor::new(&[1.0, 2.0, 3.0], &[3]);
    assert!(matches!(
        fc.forward(&x).unwrap_err(),
        ModuleError::ShapeMismatch { .. }
    ));
}

/// 测试相同种子构造的层前向结果一致（可重复性）
#[test]
fn test_linear_seeded_reproducible() {
    let fc1 = Linear::new_seeded(4, 3, true, 7).unwrap();
    let fc2 = Linear::new_seeded(4, 3, true, 7).unwrap();

    let x = Tensor::new(&[0.1, 0.2, 0.3, 0.4], &[1, 4]);
    assert_eq!(fc1.forward(&x).unwrap(), fc2.forward(&x).unwrap());
}
