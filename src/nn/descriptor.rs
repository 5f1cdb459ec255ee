/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : 模块树描述符（Module Descriptor）
 *                 统一的结构化中间表示，用于调试输出与JSON导出。
 *                 只描述结构（类型、名称、形状），不携带参数值。
 */

use super::ModuleBase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 参数/常量槽位的描述：名称 + 形状
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotDescriptor {
    pub name: String,
    pub shape: Vec<usize>,
}

/// 具名子模块的描述
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChildDescriptor {
    pub name: String,
    pub module: ModuleDescriptor,
}

/// 模块树的可序列化描述
///
/// 子模块按注册顺序排列。被别名挂载的子模块会在每个挂载点各出现一次
/// （描述的是注册结构，不是去重后的参数集合）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// 模块类型标签
    pub kind: String,
    /// 自身的可训练参数槽位
    pub parameters: Vec<SlotDescriptor>,
    /// 自身的常量槽位
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub constants: Vec<SlotDescriptor>,
    /// 具名子模块（注册顺序）
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<ChildDescriptor>,
}

impl ModuleDescriptor {
    /// 从模块的类型标签与注册表递归构建描述
    pub(in crate::nn) fn from_parts(kind: &str, base: &ModuleBase) -> Self {
        let parameters = base
            .own_parameters()
            .iter()
            .map(|(name, param)| SlotDescriptor {
                name: name.clone(),
                shape: param.shape(),
            })
            .collect();
        let constants = base
            .constants()
            .iter()
            .map(|(name, tensor)| SlotDescriptor {
                name: name.clone(),
                shape: tensor.shape().to_vec(),
            })
            .collect();
        let children = base
            .children()
            .iter()
            .map(|(name, child)| ChildDescriptor {
                name: name.clone(),
                module: child.borrow().describe(),
            })
            .collect();
        Self {
            kind: kind.to_string(),
            parameters,
            constants,
            children,
        }
    }

    /// 导出为格式化JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn fmt_with_indent(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        let slot_line = |slots: &[SlotDescriptor]| {
            slots
                .iter()
                .map(|s| format!("{}{:?}", s.name, s.shape))
                .collect::<Vec<_>>()
                .join(", ")
        };
        if !self.parameters.is_empty() {
            write!(f, "({})", slot_line(&self.parameters))?;
        }
        if !self.constants.is_empty() {
            write!(f, " [常量: {}]", slot_line(&self.constants))?;
        }
        for child in &self.children {
            writeln!(f)?;
            write!(f, "{}({}): ", "  ".repeat(indent + 1), child.name)?;
            child.module.fmt_with_indent(f, indent + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ModuleDescriptor {
    /// 以缩进树的形式打印模块结构，类似PyTorch的模型打印
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_indent(f, 0)
    }
}
