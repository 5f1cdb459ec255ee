/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : FixedHidden - 带固定（不可训练）权重和数据相关控制流的块
 */

use crate::nn::{Linear, Module, ModuleBase, ModuleError, SharedModule};
use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 带固定隐层权重的块，演示三件事：
/// - 常量参与计算但永不被训练（`fixed_weight`在构造时随机生成后冻结，
///   不会出现在`parameters()`里）；
/// - 同一个子模块在一次前向计算里被调用两次（`dense`层的参数共享）；
/// - 数据相关的控制流：对中间结果反复折半，直到其L1范数不超过1。
///
/// 对固定的参数值，输出仍是输入的确定性纯函数——循环的分支只依赖
/// 数据本身，对非零有限输入必然终止（每次折半严格缩小范数）。
pub struct FixedHidden {
    base: ModuleBase,
    dense: SharedModule,
    features: usize,
}

impl FixedHidden {
    /// 创建块。`features`同时是输入宽度、隐层宽度与输出宽度
    /// （`dense`要被复用两次，所以必须是方阵变换）。
    pub fn new(features: usize) -> Result<Self, ModuleError> {
        let mut base = ModuleBase::new();
        base.add_constant(
            "fixed_weight",
            Tensor::new_random(0.0, 1.0, &[features, features]),
        )?;
        let dense = base.add_child("dense", Linear::new(features, features, true)?)?;
        Ok(Self {
            base,
            dense,
            features,
        })
    }

    /// 创建块（带种子，确保可重复性）
    pub fn new_seeded(features: usize, seed: u64) -> Result<Self, ModuleError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut base = ModuleBase::new();
        base.add_constant(
            "fixed_weight",
            Tensor::new_random_with_rng(0.0, 1.0, &[features, features], &mut rng),
        )?;
        let dense = base.add_child("dense", Linear::new_seeded(features, features, true, seed + 1)?)?;
        Ok(Self {
            base,
            dense,
            features,
        })
    }

    /// 固定权重常量
    pub fn fixed_weight(&self) -> &Tensor {
        // 构造时必定注册，此处查不到属于内部逻辑错误
        self.base
            .constant("fixed_weight")
            .unwrap_or_else(|| unreachable!("常量fixed_weight在构造时注册"))
    }

    fn check_input(&self, input: &Tensor) -> Result<(), ModuleError> {
        if input.dimension() != 2 || input.shape()[1] != self.features {
            let batch = input.shape().first().copied().unwrap_or(0);
            return Err(ModuleError::ShapeMismatch {
                expected: vec![batch, self.features],
                got: input.shape().to_vec(),
                message: format!("FixedHidden块期望输入为[batch, {}]", self.features),
            });
        }
        Ok(())
    }
}

impl Module for FixedHidden {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModuleError> {
        self.check_input(input)?;
        let dense = self.dense.borrow();

        let hidden = dense.forward(input)?;
        // 常量只参与计算，不参与训练
        let hidden = (hidden.mat_mul(self.fixed_weight()) + 1.0).map(|x| x.max(0.0));
        // 复用同一个dense层：两次调用共享同一份权重
        let mut output = dense.forward(&hidden)?;

        // 数据相关的控制流：折半直到L1范数不超过1
        while output.abs_sum() > 1.0 {
            output = output / 2.0;
        }
        Ok(output)
    }

    fn base(&self) -> &ModuleBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModuleBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "FixedHidden"
    }
}
