/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : 负责模块（block）抽象的构建：注册表、遍历、容器与内置层
 */

mod base;
mod block;
mod descriptor;
mod error;
pub mod layer;
mod module;
mod parameter;
mod sequential;

pub use base::{ModuleBase, SharedModule};
pub use block::{FixedHidden, Mlp};
pub use descriptor::{ChildDescriptor, ModuleDescriptor, SlotDescriptor};
pub use error::ModuleError;
pub use layer::{Activation, ActivationFn, ActivationOp, Linear, ReLU, Sigmoid, Softplus, Tanh};
pub use module::Module;
pub use parameter::{Init, Parameter};
pub use sequential::Sequential;

#[cfg(test)]
mod tests;
