//! # 动画实例
//!
//! 单值时间轴：一个 f32 在 `duration` 秒内从起点走到终点，可带启动
//! 延迟。页面入场和区块揭示都是一次性播放，播完停在终值。
//!
//! 内部只累计一只时钟，进度按需推导；走完之后再喂时间是无操作。

use super::EasingFunction;

/// 单值动画
#[derive(Debug, Clone)]
pub struct Animation {
    from: f32,
    to: f32,
    duration: f32,
    delay: f32,
    easing: EasingFunction,
    /// 从创建起累计的时间，封顶在 `delay + duration`
    clock: f32,
}

impl Animation {
    /// 创建动画。`duration <= 0` 的动画生来即在终值。
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            easing: EasingFunction::default(),
            clock: 0.0,
        }
    }

    /// 换一条缓动曲线
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// 延迟若干秒再起步
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// 喂入一帧时间，返回动画是否还在走
    pub fn update(&mut self, dt: f32) -> bool {
        self.clock = (self.clock + dt.max(0.0)).min(self.total());
        !self.is_finished()
    }

    /// 当前值。延迟期停在起点，走完后停在终点。
    pub fn current_value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.raw_progress());
        self.from + (self.to - self.from) * eased
    }

    /// 是否已走完
    pub fn is_finished(&self) -> bool {
        self.clock >= self.total()
    }

    fn total(&self) -> f32 {
        self.delay + self.duration
    }

    fn raw_progress(&self) -> f32 {
        if self.clock <= self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((self.clock - self.delay) / self.duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_animation_sits_at_start() {
        let anim = Animation::new(10.0, 20.0, 1.0);
        assert!(!anim.is_finished());
        assert_eq!(anim.current_value(), 10.0);
    }

    #[test]
    fn test_linear_midpoint() {
        let mut anim = Animation::new(0.0, 10.0, 2.0).with_easing(EasingFunction::Linear);
        assert!(anim.update(1.0));
        assert_eq!(anim.current_value(), 5.0);
    }

    #[test]
    fn test_completion_clamps_and_stops() {
        let mut anim = Animation::new(0.0, 1.0, 1.0);
        assert!(!anim.update(5.0));
        assert!(anim.is_finished());
        assert_eq!(anim.current_value(), 1.0);
        // 走完后继续喂时间不再变化
        assert!(!anim.update(1.0));
        assert_eq!(anim.current_value(), 1.0);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut anim = Animation::new(0.0, 1.0, 1.0).with_delay(0.5);
        assert!(anim.update(0.3));
        assert_eq!(anim.current_value(), 0.0);
        // 跨过延迟后才开始移动
        assert!(anim.update(0.4));
        assert!(anim.current_value() > 0.0);
    }

    #[test]
    fn test_zero_duration_is_born_finished() {
        let mut anim = Animation::new(3.0, 7.0, 0.0);
        assert!(anim.is_finished());
        assert_eq!(anim.current_value(), 7.0);
        assert!(!anim.update(0.1));
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut anim = Animation::new(0.0, 1.0, 1.0).with_easing(EasingFunction::Linear);
        anim.update(0.5);
        let halfway = anim.current_value();
        anim.update(-3.0);
        assert_eq!(anim.current_value(), halfway);
    }
}
