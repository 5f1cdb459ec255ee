use crate::errors::TensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// 实现矩阵乘法。只接受2阶张量，否则会触发panic。
    /// 需要保证前一个张量的列数（col）等于后一个张量的行数（row），否则也会触发panic。
    /// 注：调用方（如`Linear`层）应在调用前完成形状校验，以便以`Result`形式上报错误。
    pub fn mat_mul(&self, other: &Tensor) -> Tensor {
        // 检查输入的张量阶数
        assert!(
            self.dimension() == 2,
            "{}",
            TensorError::MatMulNeeds2dTensor(self.dimension())
        );
        assert!(
            other.dimension() == 2,
            "{}",
            TensorError::MatMulNeeds2dTensor(other.dimension())
        );
        // 检查前一个张量的列数是否等于后一个张量的行数
        assert!(
            self.shape()[1] == other.shape()[0],
            "{}",
            TensorError::MatMulInnerDimMismatch(self.shape()[1], other.shape()[0])
        );
        // 将动态维度数组转换为常量维度数组后执行矩阵乘法
        let self_data = self
            .data
            .view()
            .into_dimensionality::<ndarray::Ix2>()
            .unwrap();
        let other_data = other
            .data
            .view()
            .into_dimensionality::<ndarray::Ix2>()
            .unwrap();
        let result_data = self_data.dot(&other_data);
        Tensor {
            data: result_data.into_dyn(),
        }
    }
}
