use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状无法广播，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },

    #[error("矩阵乘法只接受2阶张量，实际阶数为{0}")]
    MatMulNeeds2dTensor(usize),
    #[error("矩阵乘法要求前一个张量的列数等于后一个张量的行数：{0}≠{1}")]
    MatMulInnerDimMismatch(usize, usize),

    #[error("除数为零")]
    DivByZero,
}
