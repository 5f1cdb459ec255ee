/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : Linear (全连接) 层
 */

use crate::nn::{Init, Module, ModuleBase, ModuleError, Parameter};
use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Linear (全连接) 层
///
/// PyTorch 风格的全连接层：`output = x @ W + b`
///
/// # 输入/输出形状
/// - 输入：[`batch_size`, `in_features`]
/// - 输出：[`batch_size`, `out_features`]
///
/// # 使用示例
/// ```ignore
/// let fc = Linear::new(784, 128, true)?;
/// let h = fc.forward(&x)?;
/// ```
pub struct Linear {
    base: ModuleBase,
    /// 权重参数句柄 [`in_features`, `out_features`]
    weights: Parameter,
    /// 偏置参数句柄 [1, `out_features`]（可选）
    bias: Option<Parameter>,
    /// 输入特征维度
    in_features: usize,
    /// 输出特征维度
    out_features: usize,
}

impl Linear {
    /// 创建新的 Linear 层。
    /// 权重用 Kaiming 初始化（适合 `ReLU`），偏置零初始化。
    pub fn new(in_features: usize, out_features: usize, use_bias: bool) -> Result<Self, ModuleError> {
        Self::new_with_init(in_features, out_features, use_bias, &Init::Kaiming)
    }

    /// 创建新的 Linear 层，权重用指定的初始化策略，偏置零初始化
    pub fn new_with_init(
        in_features: usize,
        out_features: usize,
        use_bias: bool,
        weight_init: &Init,
    ) -> Result<Self, ModuleError> {
        let mut base = ModuleBase::new();
        let weights = base.add_parameter("weight", &[in_features, out_features], weight_init)?;
        let bias = if use_bias {
            Some(base.add_parameter("bias", &[1, out_features], &Init::Zeros)?)
        } else {
            None
        };
        Ok(Self {
            base,
            weights,
            bias,
            in_features,
            out_features,
        })
    }

    /// 创建新的 Linear 层（带种子，确保可重复性）
    pub fn new_seeded(
        in_features: usize,
        out_features: usize,
        use_bias: bool,
        seed: u64,
    ) -> Result<Self, ModuleError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut base = ModuleBase::new();
        let weights = base.add_parameter_with_rng(
            "weight",
            &[in_features, out_features],
            &Init::Kaiming,
            &mut rng,
        )?;
        let bias = if use_bias {
            // 零初始化无需种子
            Some(base.add_parameter("bias", &[1, out_features], &Init::Zeros)?)
        } else {
            None
        };
        Ok(Self {
            base,
            weights,
            bias,
            in_features,
            out_features,
        })
    }

    /// 获取输入特征维度
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// 获取输出特征维度
    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// 获取权重参数句柄
    pub fn weights(&self) -> &Parameter {
        &self.weights
    }

    /// 获取偏置参数句柄（如果有）
    pub fn bias(&self) -> Option<&Parameter> {
        self.bias.as_ref()
    }

    /// 校验输入形状：2阶，宽度等于`in_features`
    fn check_input(&self, input: &Tensor) -> Result<(), ModuleError> {
        if input.dimension() != 2 || input.shape()[1] != self.in_features {
            let batch = input.shape().first().copied().unwrap_or(0);
            return Err(ModuleError::ShapeMismatch {
                expected: vec![batch, self.in_features],
                got: input.shape().to_vec(),
                message: format!("Linear层期望输入为[batch, {}]", self.in_features),
            });
        }
        Ok(())
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModuleError> {
        self.check_input(input)?;
        // x @ W: [batch, in] @ [in, out] = [batch, out]
        let output = input.mat_mul(&self.weights.value());
        // bias以[1, out]的形状按行广播
        match &self.bias {
            Some(bias) => Ok(output + bias.value()),
            None => Ok(output),
        }
    }

    fn base(&self) -> &ModuleBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModuleBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Linear"
    }
}
