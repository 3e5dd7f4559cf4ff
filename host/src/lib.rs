//! # Host 层
//!
//! 站点的宿主层实现，使用 macroquad 作为渲染和 IO 引擎。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 窗口与绘制
//! - 输入采集（每帧收进 [`ui::UiContext`] 快照）
//! - 页面布局与滚动
//! - 把 site-core 发回的 `NavCommand` 落到滚动与页面挂载上
//!
//! 页面是什么、何时揭示、表单如何流转由 site-core 决定，
//! Host 层只执行。除 `main.rs` 与 `app::update` 的入口外，
//! 所有模块都不直接读 macroquad 输入，纯逻辑可以无窗口测试。

pub mod app;
pub mod config;
pub mod renderer;
pub mod screens;
pub mod ui;

pub use app::AppState;
pub use config::{AppConfig, ConfigError, DebugConfig, WindowConfig};
pub use renderer::TextRenderer;
pub use ui::{Theme, UiContext};
