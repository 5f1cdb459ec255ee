/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : Parameter - 可训练参数句柄，以及参数初始化策略 Init
 */

use super::ModuleError;
use crate::tensor::Tensor;
use std::cell::RefCell;
use std::rc::Rc;

// ==================== Init 枚举 ====================

/// 参数初始化策略
#[derive(Debug, Clone)]
pub enum Init {
    /// 常数初始化
    Constant(f32),
    /// 全零
    Zeros,
    /// 全一
    Ones,
    /// 正态分布
    Normal { mean: f32, std: f32 },
    /// Kaiming/He 初始化（适用于 `ReLU`）
    Kaiming,
    /// Xavier/Glorot 初始化（适用于 Sigmoid/Tanh）
    Xavier,
}

impl Init {
    /// 生成初始化后的 Tensor（使用全局 RNG）
    pub fn generate(&self, shape: &[usize]) -> Tensor {
        match self {
            Self::Constant(v) => &Tensor::ones(shape) * *v,
            Self::Zeros => Tensor::zeros(shape),
            Self::Ones => Tensor::ones(shape),
            Self::Normal { mean, std } => Tensor::new_normal(*mean, *std, shape),
            Self::Kaiming => {
                let fan_in = shape.first().copied().unwrap_or(1);
                let std = (2.0 / fan_in as f32).sqrt();
                Tensor::new_normal(0.0, std, shape)
            }
            Self::Xavier => {
                let fan_in = shape.first().copied().unwrap_or(1);
                let fan_out = shape.get(1).copied().unwrap_or(1);
                let std = (2.0 / (fan_in + fan_out) as f32).sqrt();
                Tensor::new_normal(0.0, std, shape)
            }
        }
    }

    /// 生成初始化后的 Tensor（使用指定的 RNG，确保可重复性）
    pub fn generate_with_rng(&self, shape: &[usize], rng: &mut rand::rngs::StdRng) -> Tensor {
        match self {
            Self::Constant(v) => &Tensor::ones(shape) * *v,
            Self::Zeros => Tensor::zeros(shape),
            Self::Ones => Tensor::ones(shape),
            Self::Normal { mean, std } => Tensor::new_normal_with_rng(*mean, *std, shape, rng),
            Self::Kaiming => {
                let fan_in = shape.first().copied().unwrap_or(1);
                let std = (2.0 / fan_in as f32).sqrt();
                Tensor::new_normal_with_rng(0.0, std, shape, rng)
            }
            Self::Xavier => {
                let fan_in = shape.first().copied().unwrap_or(1);
                let fan_out = shape.get(1).copied().unwrap_or(1);
                let std = (2.0 / (fan_in + fan_out) as f32).sqrt();
                Tensor::new_normal_with_rng(0.0, std, shape, rng)
            }
        }
    }
}

// ==================== Parameter 结构 ====================

/// 可训练参数句柄
///
/// # 设计原则
/// - 持有 `Rc<RefCell<Tensor>>`，Clone 语义（开销极低），
///   克隆出的句柄共享同一份底层存储；
/// - 模块在构造时注册参数并持有句柄，外部优化器通过 `parameters()`
///   拿到同样的句柄，在两次前向计算之间原地更新参数值；
/// - 同一参数被多个路径引用（别名）时，更新对所有路径可见（真共享）。
#[derive(Clone)]
pub struct Parameter {
    value: Rc<RefCell<Tensor>>,
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("shape", &self.shape())
            .finish()
    }
}

impl Parameter {
    /// 创建新的参数句柄（由 `ModuleBase::add_parameter` 调用）
    pub(in crate::nn) fn new(value: Tensor) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
        }
    }

    /// 获取参数当前值的拷贝
    pub fn value(&self) -> Tensor {
        self.value.borrow().clone()
    }

    /// 获取参数的形状
    pub fn shape(&self) -> Vec<usize> {
        self.value.borrow().shape().to_vec()
    }

    /// 参数中元素的数量
    pub fn size(&self) -> usize {
        self.value.borrow().size()
    }

    /// 原地设置参数值。新值的形状必须与当前形状一致。
    pub fn set_value(&self, value: &Tensor) -> Result<(), ModuleError> {
        let mut current = self.value.borrow_mut();
        if !current.is_same_shape(value) {
            return Err(ModuleError::ShapeMismatch {
                expected: current.shape().to_vec(),
                got: value.shape().to_vec(),
                message: "参数值只能以相同形状覆盖".to_string(),
            });
        }
        *current = value.clone();
        Ok(())
    }

    /// 以旧值计算新值并原地替换（优化器的典型用法）。
    /// 新值的形状必须与当前形状一致。
    pub fn update<F>(&self, f: F) -> Result<(), ModuleError>
    where
        F: FnOnce(&Tensor) -> Tensor,
    {
        let new_value = f(&self.value.borrow());
        self.set_value(&new_value)
    }

    /// 判断两个句柄是否指向同一份底层存储
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}
