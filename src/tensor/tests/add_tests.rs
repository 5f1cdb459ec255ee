use crate::tensor::Tensor;

/// 测试同形状张量相加
#[test]
fn test_add_same_shape() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let b = Tensor::new(&[10.0, 20.0, 30.0, 40.0], &[2, 2]);
    let expected = Tensor::new(&[11.0, 22.0, 33.0, 44.0], &[2, 2]);
    assert_eq!(&a + &b, expected);
    assert_eq!(a + b, expected);
}

/// 测试行广播：[2,3] + [1,3]
#[test]
fn test_add_broadcast_row() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let b = Tensor::new(&[10.0, 20.0, 30.0], &[1, 3]);
    let expected = Tensor::new(&[11.0, 22.0, 33.0, 14.0, 25.0, 36.0], &[2, 3]);
    assert_eq!(&a + &b, expected);
    // 广播与操作数顺序无关
    assert_eq!(&b + &a, expected);
}

/// 测试张量与纯数相加
#[test]
fn test_add_number() {
    let a = Tensor::new(&[1.0, 2.0], &[1, 2]);
    let expected = Tensor::new(&[2.5, 3.5], &[1, 2]);
    assert_eq!(&a + 1.5, expected);
    assert_eq!(1.5 + &a, expected);
}

/// 测试形状无法广播时panic
#[test]
#[should_panic(expected = "无法相加")]
fn test_add_incompatible_shape_panics() {
    let a = Tensor::new(&[1.0, 2.0, 3.0], &[1, 3]);
    let b = Tensor::new(&[1.0, 2.0], &[1, 2]);
    let _ = &a + &b;
}
