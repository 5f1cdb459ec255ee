use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 测试张量的基本创建
#[test]
fn test_new_basic() {
    let t = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    assert_eq!(t.shape(), &[2, 2]);
    assert_eq!(t.size(), 4);
    assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

/// 测试data长度与shape不符时panic
#[test]
#[should_panic]
fn test_new_wrong_len_panics() {
    let _ = Tensor::new(&[1.0, 2.0, 3.0], &[2, 2]);
}

/// 测试全零/全一张量
#[test]
fn test_zeros_and_ones() {
    let zeros = Tensor::zeros(&[2, 3]);
    assert_eq!(zeros.shape(), &[2, 3]);
    assert!(zeros.as_slice().iter().all(|&x| x == 0.0));

    let ones = Tensor::ones(&[3, 2]);
    assert_eq!(ones.shape(), &[3, 2]);
    assert!(ones.as_slice().iter().all(|&x| x == 1.0));
}

/// 测试均匀随机张量的取值范围
#[test]
fn test_new_random_range() {
    let t = Tensor::new_random(-1.0, 1.0, &[10, 10]);
    assert_eq!(t.shape(), &[10, 10]);
    assert!(t.as_slice().iter().all(|&x| (-1.0..=1.0).contains(&x)));
}

/// 测试带种子的随机张量可重复
#[test]
fn test_new_random_with_rng_reproducible() {
    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);
    let t1 = Tensor::new_random_with_rng(0.0, 1.0, &[4, 4], &mut rng1);
    let t2 = Tensor::new_random_with_rng(0.0, 1.0, &[4, 4], &mut rng2);
    assert_eq!(t1, t2);
}

/// 测试带种子的正态分布张量可重复，且所有值有限
#[test]
fn test_new_normal_with_rng_reproducible() {
    let mut rng1 = StdRng::seed_from_u64(7);
    let mut rng2 = StdRng::seed_from_u64(7);
    let t1 = Tensor::new_normal_with_rng(0.0, 1.0, &[8, 8], &mut rng1);
    let t2 = Tensor::new_normal_with_rng(0.0, 1.0, &[8, 8], &mut rng2);
    assert_eq!(t1, t2);
    assert!(t1.as_slice().iter().all(|x| x.is_finite()));
}
