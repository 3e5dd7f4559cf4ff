//! # 缓动曲线
//!
//! 把线性时间进度变换成带节奏的进度。揭示与入场动画默认用
//! 三次缓出，其余曲线供各处挑选。

use std::f32::consts::PI;

/// 缓动曲线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// 匀速
    Linear,
    /// 二次：慢起
    EaseInQuad,
    /// 二次：缓停
    EaseOutQuad,
    /// 二次：两头慢
    EaseInOutQuad,
    /// 三次：慢起
    EaseInCubic,
    /// 三次：缓停，站点动画的默认曲线
    #[default]
    EaseOutCubic,
    /// 三次：两头慢
    EaseInOutCubic,
    /// 正弦：慢起
    EaseInSine,
    /// 正弦：缓停
    EaseOutSine,
    /// 正弦：两头慢
    EaseInOutSine,
}

impl EasingFunction {
    /// 把 `t`（先夹到 0..=1）映射成缓动后的进度
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;

        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * u * u
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => 1.0 - u * u * u,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - 4.0 * u * u * u
                }
            }
            Self::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
            Self::EaseOutSine => (t * PI / 2.0).sin(),
            Self::EaseInOutSine => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}
