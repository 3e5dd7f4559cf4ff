//! # Animation 模块
//!
//! 通用动画系统，站点里所有随时间变化的数值都从这里取值。
//!
//! ## 核心设计理念
//!
//! 动画只负责 **时间轴管理**：
//! - 知道某个属性从 A 到 B 需要在 duration 内变化
//! - 维护当前值，调用方每帧喂入 dt 后读取
//! - **不假设对象类型**，对象自己决定如何使用这些值
//!
//! 页面把透明度和位移都编码成 0 到 1 的单值动画：
//! 入场标题、区块揭示各持有一个实例，播完即停。

mod animation;
mod easing;

pub use animation::Animation;
pub use easing::EasingFunction;
