/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : Sequential - 链式容器模块
 */

use super::{Module, ModuleBase, ModuleError, SharedModule};
use crate::tensor::Tensor;

/// 链式容器：前向计算时按注册顺序依次调用子模块，
/// 把每个子模块的输出作为下一个子模块的输入，返回最后一个输出。
///
/// 空容器等价于恒等变换（原样返回输入）。
///
/// # 使用示例
/// ```ignore
/// let mut net = Sequential::new();
/// net.push(Linear::new(2, 4, true)?)?;
/// net.push(Activation::relu())?;
/// net.push(Linear::new(4, 1, true)?)?;
/// let y = net.forward(&x)?;
/// ```
#[derive(Default)]
pub struct Sequential {
    base: ModuleBase,
}

impl Sequential {
    pub fn new() -> Self {
        Self {
            base: ModuleBase::new(),
        }
    }

    /// 按调用顺序追加子模块，键为位置下标（"0"、"1"...）
    pub fn push<M>(&mut self, module: M) -> Result<SharedModule, ModuleError>
    where
        M: Module + 'static,
    {
        self.base.push_child(module)
    }

    /// 以指定名称追加子模块。名称已被占用时返回`DuplicateName`，
    /// 且容器保持原状。
    pub fn add<M>(&mut self, name: &str, module: M) -> Result<SharedModule, ModuleError>
    where
        M: Module + 'static,
    {
        self.base.add_child(name, module)
    }

    /// 以指定名称追加一个已共享的子模块句柄（别名挂载）
    pub fn add_shared(
        &mut self,
        name: &str,
        module: SharedModule,
    ) -> Result<SharedModule, ModuleError> {
        self.base.add_child_shared(name, module)
    }

    /// 子模块数量
    pub fn len(&self) -> usize {
        self.base.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.children().is_empty()
    }
}

impl Module for Sequential {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModuleError> {
        let mut output = input.clone();
        for (_, child) in self.base.children() {
            output = child.borrow().forward(&output)?;
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
        "Sequential"
    }
}
