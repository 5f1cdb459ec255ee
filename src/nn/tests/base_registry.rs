/*
 * @Description  : ModuleBase 注册表单元测试
 *
 * 测试注册表的核心不变式：
 * - 三个注册表共用一个命名空间
 * - 重名注册失败且不改变注册表（原子性）
 * - 插入顺序保持
 */

use crate::nn::{Init, Linear, ModuleBase, ModuleError};
use crate::tensor::Tensor;

/// 测试参数注册与按名查找
#[test]
fn test_add_and_get_parameter() {
    let mut base = ModuleBase::new();
    let w = base.add_parameter("w", &[2, 3], &Init::Zeros).unwrap();
    assert_eq!(w.shape(), vec![2, 3]);
    assert_eq!(w.size(), 6);

    // 查找返回的句柄与注册返回的句柄共享底层存储
    let found = base.parameter("w").unwrap();
    assert!(found.ptr_eq(&w));

    assert_eq!(
        base.parameter("nope").unwrap_err(),
        ModuleError::ParameterNotFound("nope".to_string())
    );
}

/// 测试常量注册与按名查找
#[test]
fn test_add_and_get_constant() {
    let mut base = ModuleBase::new();
    let value = Tensor::new(&[1.0, 2.0], &[1, 2]);
    base.add_constant("c", value.clone()).unwrap();
    assert_eq!(base.constant("c"), Some(&value));
    assert_eq!(base.constant("nope"), None);
}

/// 测试子模块注册与按名查找
#[test]
fn test_add_and_get_child() {
    let mut base = ModuleBase::new();
    base.add_child("fc", Linear::new_seeded(2, 2, true, 1).unwrap())
        .unwrap();
    assert!(base.child("fc").is_ok());
    assert_eq!(
        base.child("nope").unwrap_err(),
        ModuleError::ChildNotFound("nope".to_string())
    );
}

/// 测试重名参数注册失败且注册表保持原状
#[test]
fn test_duplicate_parameter_name_atomic() {
    let mut base = ModuleBase::new();
    base.add_parameter("w", &[2, 2], &Init::Zeros).unwrap();

    let err = base.add_parameter("w", &[3, 3], &Init::Ones).unwrap_err();
    assert_eq!(err, ModuleError::DuplicateName("w".to_string()));

    // 失败的注册不留痕迹：仍只有一个参数，且形状是第一次注册的
    assert_eq!(base.own_parameters().len(), 1);
    assert_eq!(base.parameter("w").unwrap().shape(), vec![2, 2]);
}

/// 测试重名子模块注册失败且子模块表保持原状
#[test]
fn test_duplicate_child_name_atomic() {
    let mut base = ModuleBase::new();
    base.add_child("fc", Linear::new_seeded(2, 2, true, 1).unwrap())
        .unwrap();

    let err = base
        .add_child("fc", Linear::new_seeded(4, 4, true, 2).unwrap())
        .unwrap_err();
    assert_eq!(err, ModuleError::DuplicateName("fc".to_string()));

    assert_eq!(base.children().len(), 1);
    // 留下的仍是第一次注册的2x2层
    let kept = base.child("fc").unwrap();
    assert_eq!(kept.borrow().base().parameter("weight").unwrap().shape(), vec![2, 2]);
}

/// 测试三个注册表共用一个命名空间
#[test]
fn test_registries_share_namespace() {
    let mut base = ModuleBase::new();
    base.add_parameter("x", &[1], &Init::Zeros).unwrap();

    assert_eq!(
        base.add_constant("x", Tensor::ones(&[1])).unwrap_err(),
        ModuleError::DuplicateName("x".to_string())
    );
    assert_eq!(
        base.add_child("x", Linear::new_seeded(1, 1, false, 1).unwrap())
            .unwrap_err(),
        ModuleError::DuplicateName("x".to_string())
    );
    assert!(base.constants().is_empty());
    assert!(base.children().is_empty());
}

/// 测试push_child的位置键按调用顺序递增
#[test]
fn test_push_child_positional_keys() {
    let mut base = ModuleBase::new();
    base.push_child(Linear::new_seeded(2, 2, true, 1).unwrap())
        .unwrap();
    base.push_child(Linear::new_seeded(2, 2, true, 2).unwrap())
        .unwrap();

    let keys: Vec<&str> = base.children().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(keys, vec!["0", "1"]);
}
