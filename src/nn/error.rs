/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : 模块（block）操作的错误类型
 */

use thiserror::Error;

/// 模块注册与前向计算的错误类型
///
/// 所有错误都立即上报给调用方：组合关系应当“构造即正确”，
/// 出错意味着编程错误而非瞬态故障，故无重试、无静默恢复。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModuleError {
    /// 前向计算中操作数形状不兼容
    #[error("形状不匹配：期望{expected:?}，实际{got:?}（{message}）")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },

    /// 注册表命名冲突（参数、常量、子模块共用一个命名空间）
    #[error("名称`{0}`已被注册")]
    DuplicateName(String),

    /// 按名查找子模块失败
    #[error("子模块`{0}`不存在")]
    ChildNotFound(String),

    /// 按名查找参数失败
    #[error("参数`{0}`不存在")]
    ParameterNotFound(String),

    /// 反向传播所需的依赖记录丢失。
    /// 本库自身不做自动微分，该错误由外部的微分协作方在梯度回传时上报；
    /// 在此定义是为了让各协作方共用同一套错误词汇。
    #[error("值`{0}`缺少梯度所需的依赖记录")]
    MissingGradient(String),

    /// 其他非法操作
    #[error("非法操作：{0}")]
    InvalidOperation(String),
}
