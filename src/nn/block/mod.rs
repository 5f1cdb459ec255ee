/*
 * @Author       : 老董
 * @Date         : 2026-06-15
 * @Description  : Block 模块 - 由层组合成的常用块
 */

mod fixed_hidden;
mod mlp;

pub use fixed_hidden::FixedHidden;
pub use mlp::Mlp;
