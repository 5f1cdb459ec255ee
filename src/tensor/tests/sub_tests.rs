use crate::tensor::Tensor;

/// 测试同形状张量相减
#[test]
fn test_sub_same_shape() {
    let a = Tensor::new(&[10.0, 20.0, 30.0, 40.0], &[2, 2]);
    let b = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let expected = Tensor::new(&[9.0, 18.0, 27.0, 36.0], &[2, 2]);
    assert_eq!(&a - &b, expected);
}

/// 测试行广播减法：[2,2] - [1,2]
#[test]
fn test_sub_broadcast_row() {
    let a = Tensor::new(&[10.0, 20.0, 30.0, 40.0], &[2, 2]);
    let b = Tensor::new(&[1.0, 2.0], &[1, 2]);
    let expected = Tensor::new(&[9.0, 18.0, 29.0, 38.0], &[2, 2]);
    assert_eq!(&a - &b, expected);
}

/// 测试张量与纯数相减（两个方向）
#[test]
fn test_sub_number() {
    let a = Tensor::new(&[1.0, 2.0], &[1, 2]);
    assert_eq!(&a - 1.0, Tensor::new(&[0.0, 1.0], &[1, 2]));
    assert_eq!(3.0 - &a, Tensor::new(&[2.0, 1.0], &[1, 2]));
}

/// 测试形状无法广播时panic
#[test]
#[should_panic(expected = "无法相减")]
fn test_sub_incompatible_shape_panics() {
    let a = Tensor::new(&[1.0, 2.0, 3.0], &[1, 3]);
    let b = Tensor::new(&[1.0, 2.0], &[2, 1]);
    let _ = &a - &b;
}
