//! # Only Block
//!
//! `only_block`项目旨在用纯rust实现一套[pytorch](https://pytorch.org)
//! `nn.Module`风格的积木（block）式模块组合抽象：神经元组成层，层组成块，
//! 块再层层嵌套成完整模型。
//!
//! 模块（[`nn::Module`]）负责三件事：
//! - 持有可训练参数（[`nn::Parameter`]）、固定常量与子模块的有序注册表；
//! - 以确定性的前向计算（`forward`）组合自身状态与子模块的计算；
//! - 提供带点分路径的深度优先参数遍历（`parameters()`），供外部的
//!   优化器、初始化器与自动微分等协作方使用。
//!
//! 自动微分与优化器本身不在本库范围内，它们只通过`parameters()`返回的
//! 参数句柄与本库交互。

pub mod errors;
pub mod nn;
pub mod tensor;
