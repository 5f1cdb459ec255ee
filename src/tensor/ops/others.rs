use crate::tensor::Tensor;
use ndarray::Zip;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl Tensor {
    /// 对张量中的所有元素求和并返回一个形状为[1]的标量张量。
    pub fn sum(&self) -> Tensor {
        let mut value = 0.0;
        Zip::from(&self.data).for_each(|a| value += a);
        Tensor::from(value)
    }

    /// 对张量中所有元素的绝对值求和，返回纯数（即L1范数）。
    /// 数据相关的控制流（如“折半直到范数不超过1”）用它作为标量摘要。
    pub fn abs_sum(&self) -> f32 {
        self.data.iter().map(|x| x.abs()).sum()
    }

    /// 对张量逐元素应用函数`f`，返回一个新的张量
    pub fn map<F>(&self, f: F) -> Tensor
    where
        F: Fn(f32) -> f32,
    {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    /// 以只读切片访问底层数据（按行优先顺序）
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_slice().unwrap()
    }
}
