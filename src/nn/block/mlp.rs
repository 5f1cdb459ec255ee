/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : Mlp - 自定义块的标准样例：隐藏层 + 激活 + 输出层
 */

use crate::nn::{Activation, ActivationFn, Linear, Module, ModuleBase, ModuleError, ReLU, SharedModule};
use crate::tensor::Tensor;

/// 多层感知机块：`output(act(hidden(x)))`
///
/// 与把三个子模块塞进[`Sequential`](crate::nn::Sequential)等价，
/// 但以自定义`forward`的方式写出，作为“自带前向逻辑的块”的标准样例。
pub struct Mlp {
    base: ModuleBase,
    hidden: SharedModule,
    activation: SharedModule,
    output: SharedModule,
}

impl Mlp {
    /// 创建多层感知机块，默认使用 `ReLU` 激活
    pub fn new(
        in_features: usize,
        hidden_features: usize,
        out_features: usize,
    ) -> Result<Self, ModuleError> {
        Self::with_activation(in_features, hidden_features, out_features, ReLU.into())
    }

    /// 创建多层感知机块，使用指定的激活函数
    pub fn with_activation(
        in_features: usize,
        hidden_features: usize,
        out_features: usize,
        activation: ActivationFn,
    ) -> Result<Self, ModuleError> {
        let mut base = ModuleBase::new();
        let hidden = base.add_child("hidden", Linear::new(in_features, hidden_features, true)?)?;
        let activation = base.add_child("activation", Activation::new(activation))?;
        let output = base.add_child("output", Linear::new(hidden_features, out_features, true)?)?;
        Ok(Self {
            base,
            hidden,
            activation,
            output,
        })
    }

    /// 创建多层感知机块（带种子，确保可重复性）
    pub fn new_seeded(
        in_features: usize,
        hidden_features: usize,
        out_features: usize,
        seed: u64,
    ) -> Result<Self, ModuleError> {
        let mut base = ModuleBase::new();
        let hidden = base.add_child(
            "hidden",
            Linear::new_seeded(in_features, hidden_features, true, seed)?,
        )?;
        let activation = base.add_child("activation", Activation::relu())?;
        let output = base.add_child(
            "output",
            Linear::new_seeded(hidden_features, out_features, true, seed + 1)?,
        )?;
        Ok(Self {
            base,
            hidden,
            activation,
            output,
        })
    }
}

impl Module for Mlp {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModuleError> {
        let h = self.hidden.borrow().forward(input)?;
        let h = self.activation.borrow().forward(&h)?;
        self.output.borrow().forward(&h)
    }

    fn base(&self) -> &ModuleBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModuleBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Mlp"
    }
}
