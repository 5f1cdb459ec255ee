/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : Module trait 定义
 */

use super::{ModuleBase, ModuleDescriptor, ModuleError, Parameter};
use crate::tensor::Tensor;
use std::rc::Rc;

/// 模块（block）trait：组合树中的一个节点
///
/// # 设计原则
/// - `forward()`接受一个首维为batch的张量，返回一个张量；对固定的参数值，
///   它是(输入, 参数值, 常量值)的确定性纯函数——自定义模块内部允许任意
///   宿主语言控制流（比如对输出的标量摘要做while循环、在一次调用里复用
///   同一个子模块），但分支只能依赖输入与参数，不得依赖其他外部状态；
/// - `forward()`不得改动注册表，也不得改动参数值；参数值只由外部优化器
///   在两次前向计算之间原地更新；
/// - 公共簿记（参数/常量/子模块注册表）放在内嵌的[`ModuleBase`]里，
///   通过`base()`暴露，由trait的默认方法统一实现遍历；
/// - 前向与更新都是同步单线程调用，由调用方（训练循环）保证两者不重叠。
///
/// # 使用示例
///
/// ```ignore
/// use only_block::nn::{Linear, Module, ModuleBase, ModuleError, SharedModule};
/// use only_block::tensor::Tensor;
///
/// struct TinyMlp {
///     base: ModuleBase,
///     hidden: SharedModule,
///     output: SharedModule,
/// }
///
/// impl TinyMlp {
///     fn new(in_dim: usize, hidden_dim: usize, out_dim: usize) -> Result<Self, ModuleError> {
///         let mut base = ModuleBase::new();
///         let hidden = base.add_child("hidden", Linear::new(in_dim, hidden_dim, true)?)?;
///         let output = base.add_child("output", Linear::new(hidden_dim, out_dim, true)?)?;
///         Ok(Self { base, hidden, output })
///     }
/// }
///
/// impl Module for TinyMlp {
///     fn forward(&self, input: &Tensor) -> Result<Tensor, ModuleError> {
///         let h = self.hidden.borrow().forward(input)?.map(|v| v.max(0.0));
///         self.output.borrow().forward(&h)
///     }
///     fn base(&self) -> &ModuleBase {
///         &self.base
///     }
///     fn base_mut(&mut self) -> &mut ModuleBase {
///         &mut self.base
///     }
/// }
/// ```
pub trait Module {
    /// 前向计算：对(输入, 当前参数/常量值)的确定性纯函数。
    ///
    /// # 错误
    /// 操作数形状不兼容时返回[`ModuleError::ShapeMismatch`]。
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModuleError>;

    /// 本模块内嵌的注册表（遍历的唯一依据）
    fn base(&self) -> &ModuleBase;

    /// 注册表的可变引用（仅应在构造阶段使用）
    fn base_mut(&mut self) -> &mut ModuleBase;

    /// 模块类型标签（用于描述符与打印）
    fn kind(&self) -> &'static str {
        "Module"
    }

    /// 收集全部可训练参数：先是自身参数，再按注册顺序深度优先收集各子模块，
    /// 路径为点分拼接的子模块键（如`"hidden.weight"`）。
    ///
    /// - 确定性：对未变动的模块树，两次调用返回完全相同的有序结果；
    /// - 常量永不出现在结果中；
    /// - 同一个子模块实例经由多条路径可达时只收集一次，
    ///   以首个遇到的路径为准（canonical-first-path）。
    fn parameters(&self) -> Vec<(String, Parameter)> {
        let mut collected = Vec::new();
        let mut visited: Vec<*const ()> = Vec::new();
        collect_parameters(self.base(), "", &mut collected, &mut visited);
        collected
    }

    /// 可训练参数（张量）的个数，含所有子模块
    fn num_params(&self) -> usize {
        self.parameters().len()
    }

    /// 可训练标量元素的总数，含所有子模块
    fn num_elements(&self) -> usize {
        self.parameters().iter().map(|(_, p)| p.size()).sum()
    }

    /// 生成本模块树的结构描述（不含参数值）
    fn describe(&self) -> ModuleDescriptor {
        ModuleDescriptor::from_parts(self.kind(), self.base())
    }
}

impl std::fmt::Debug for dyn Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(self.kind()).finish_non_exhaustive()
    }
}

/// 深度优先收集参数。`visited`按底层指针去重，保证别名子模块只收集一次。
fn collect_parameters(
    base: &ModuleBase,
    prefix: &str,
    collected: &mut Vec<(String, Parameter)>,
    visited: &mut Vec<*const ()>,
) {
    for (name, param) in base.own_parameters() {
        collected.push((join_path(prefix, name), param.clone()));
    }
    for (key, child) in base.children() {
        let ptr = Rc::as_ptr(child) as *const ();
        if visited.contains(&ptr) {
            continue;
        }
        visited.push(ptr);
        let child_ref = child.borrow();
        collect_parameters(child_ref.base(), &join_path(prefix, key), collected, visited);
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
