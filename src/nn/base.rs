/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : ModuleBase - 所有模块变体内嵌的公共注册表
 *
 * 不用多级继承链，也不做字段反射：参数、常量、子模块一律显式注册，
 * 每个模块变体以组合的方式内嵌一个 ModuleBase。
 */

use super::{Init, Module, ModuleError, Parameter};
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

/// 共享的子模块句柄。
/// 同一个子模块实例可以被多个父模块注册（别名），参数更新对所有路径可见。
pub type SharedModule = Rc<RefCell<dyn Module>>;

/// 模块的公共注册表：有序的参数表、常量表与子模块表
///
/// # 不变式
/// - 三个注册表共用一个命名空间，名称在模块内唯一（否则`DuplicateName`）；
/// - 注册失败不改变任何注册表（原子性）；
/// - 插入顺序即遍历顺序：子模块表是递归遍历（参数收集、描述）的唯一依据，
///   凡要参与遍历的子模块都必须注册在此，不得只挂在未注册的字段上；
/// - 构造完成后注册表的键集合不再变动，参数“值”则由外部优化器在
///   两次前向计算之间原地更新。
#[derive(Default)]
pub struct ModuleBase {
    parameters: Vec<(String, Parameter)>,
    constants: Vec<(String, Tensor)>,
    children: Vec<(String, SharedModule)>,
}

impl ModuleBase {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_name_free(&self, name: &str) -> Result<(), ModuleError> {
        let taken = self.parameters.iter().any(|(n, _)| n == name)
            || self.constants.iter().any(|(n, _)| n == name)
            || self.children.iter().any(|(n, _)| n == name);
        if taken {
            Err(ModuleError::DuplicateName(name.to_string()))
        } else {
            Ok(())
        }
    }

    // ==================== 注册 ====================

    /// 注册一个可训练参数，按`init`策略生成初始值，返回参数句柄
    pub fn add_parameter(
        &mut self,
        name: &str,
        shape: &[usize],
        init: &Init,
    ) -> Result<Parameter, ModuleError> {
        self.add_parameter_from(name, init.generate(shape))
    }

    /// 注册一个可训练参数（使用指定的RNG初始化，确保可重复性）
    pub fn add_parameter_with_rng(
        &mut self,
        name: &str,
        shape: &[usize],
        init: &Init,
        rng: &mut StdRng,
    ) -> Result<Parameter, ModuleError> {
        self.add_parameter_from(name, init.generate_with_rng(shape, rng))
    }

    /// 注册一个可训练参数（直接给定初始值张量）
    pub fn add_parameter_from(
        &mut self,
        name: &str,
        value: Tensor,
    ) -> Result<Parameter, ModuleError> {
        self.ensure_name_free(name)?;
        let param = Parameter::new(value);
        self.parameters.push((name.to_string(), param.clone()));
        Ok(param)
    }

    /// 注册一个常量：构造时设定一次，参与计算但永不被训练更新
    pub fn add_constant(&mut self, name: &str, value: Tensor) -> Result<(), ModuleError> {
        self.ensure_name_free(name)?;
        self.constants.push((name.to_string(), value));
        Ok(())
    }

    /// 注册一个子模块，返回共享句柄
    pub fn add_child<M>(&mut self, name: &str, module: M) -> Result<SharedModule, ModuleError>
    where
        M: Module + 'static,
    {
        self.add_child_shared(name, Rc::new(RefCell::new(module)))
    }

    /// 注册一个已共享的子模块句柄。
    /// 用于把同一个子模块实例挂到第二个父模块（或第二个名字）下。
    pub fn add_child_shared(
        &mut self,
        name: &str,
        module: SharedModule,
    ) -> Result<SharedModule, ModuleError> {
        self.ensure_name_free(name)?;
        self.children.push((name.to_string(), module.clone()));
        Ok(module)
    }

    /// 按调用顺序追加子模块，键为当前子模块数量的十进制字符串（"0"、"1"...）。
    /// 这是链式容器“按顺序塞入若干子模块”的便捷入口。
    pub fn push_child<M>(&mut self, module: M) -> Result<SharedModule, ModuleError>
    where
        M: Module + 'static,
    {
        let key = self.children.len().to_string();
        self.add_child(&key, module)
    }

    /// 按调用顺序追加一个已共享的子模块句柄
    pub fn push_child_shared(&mut self, module: SharedModule) -> Result<SharedModule, ModuleError> {
        let key = self.children.len().to_string();
        self.add_child_shared(&key, module)
    }

    // ==================== 查询 ====================

    /// 按名查找本模块自身的参数（不含子模块的参数）
    pub fn parameter(&self, name: &str) -> Result<Parameter, ModuleError> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.clone())
            .ok_or_else(|| ModuleError::ParameterNotFound(name.to_string()))
    }

    /// 按名查找常量
    pub fn constant(&self, name: &str) -> Option<&Tensor> {
        self.constants
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// 按名查找子模块
    pub fn child(&self, name: &str) -> Result<SharedModule, ModuleError> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, m)| m.clone())
            .ok_or_else(|| ModuleError::ChildNotFound(name.to_string()))
    }

    /// 本模块自身的参数表（按注册顺序）
    pub fn own_parameters(&self) -> &[(String, Parameter)] {
        &self.parameters
    }

    /// 本模块的常量表（按注册顺序）
    pub fn constants(&self) -> &[(String, Tensor)] {
        &self.constants
    }

    /// 本模块的子模块表（按注册顺序，即默认执行/遍历顺序）
    pub fn children(&self) -> &[(String, SharedModule)] {
        &self.children
    }
}
