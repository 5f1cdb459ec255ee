/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : 激活层 - 无参数的逐元素非线性变换
 */

use crate::nn::{Module, ModuleBase, ModuleError};
use crate::tensor::Tensor;
use enum_dispatch::enum_dispatch;

/// 激活函数的逐元素变换
#[enum_dispatch(ActivationFn)]
pub trait ActivationOp {
    /// 对输入逐元素应用激活函数
    fn apply(&self, input: &Tensor) -> Tensor;
    /// 激活函数名（用于描述符与打印）
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy)]
pub struct ReLU;
impl ActivationOp for ReLU {
    fn apply(&self, input: &Tensor) -> Tensor {
        input.map(|x| x.max(0.0))
    }
    fn name(&self) -> &'static str {
        "ReLU"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sigmoid;
impl ActivationOp for Sigmoid {
    fn apply(&self, input: &Tensor) -> Tensor {
        input.map(|x| 1.0 / (1.0 + (-x).exp()))
    }
    fn name(&self) -> &'static str {
        "Sigmoid"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tanh;
impl ActivationOp for Tanh {
    fn apply(&self, input: &Tensor) -> Tensor {
        input.map(f32::tanh)
    }
    fn name(&self) -> &'static str {
        "Tanh"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Softplus;
impl ActivationOp for Softplus {
    fn apply(&self, input: &Tensor) -> Tensor {
        input.map(|x| x.exp().ln_1p())
    }
    fn name(&self) -> &'static str {
        "Softplus"
    }
}

/// 内置激活函数的封闭集合
#[enum_dispatch]
#[derive(Debug, Clone, Copy)]
pub enum ActivationFn {
    ReLU,
    Sigmoid,
    Tanh,
    Softplus,
}

/// 激活层：无参数、无子模块的叶子模块
pub struct Activation {
    base: ModuleBase,
    func: ActivationFn,
}

impl Activation {
    pub fn new(func: impl Into<ActivationFn>) -> Self {
        Self {
            base: ModuleBase::new(),
            func: func.into(),
        }
    }

    pub fn relu() -> Self {
        Self::new(ReLU)
    }

    pub fn sigmoid() -> Self {
        Self::new(Sigmoid)
    }

    pub fn tanh() -> Self {
        Self::new(Tanh)
    }

    pub fn softplus() -> Self {
        Self::new(Softplus)
    }

    pub fn func(&self) -> ActivationFn {
        self.func
    }
}

impl Module for Activation {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModuleError> {
        Ok(self.func.apply(input))
    }

    fn base(&self) -> &ModuleBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModuleBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        self.func.name()
    }
}
