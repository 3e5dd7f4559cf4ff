//! # Renderer 模块
//!
//! 渲染侧的公共件：文本绘制与单值动画。
//!
//! ## 绘制层顺序
//!
//! 1. 页面内容（随滚动偏移）
//! 2. 页脚
//! 3. 导航栏（固定在顶部）
//! 4. 调试信息

pub mod animation;
pub mod text;

pub use animation::{Animation, EasingFunction};
pub use text::TextRenderer;
