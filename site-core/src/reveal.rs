//! # 滚动揭示模块
//!
//! 页面区块初始隐藏，随滚动进入视口达到可见阈值后**一次性**揭示，
//! 之后不再观察。揭示是单向闩锁：只要页面实例还活着，已揭示的
//! 区块永远不会回到隐藏状态，即使它再次滚出视口。
//!
//! ## 设计说明
//!
//! - 区块横向铺满页面，所以可见性只需一维竖直模型（[`Band`]）
//! - 有效视口底部内缩一段距离，区块要"明显进入"才算可见
//! - 触发即释放：闩锁闭合的同时丢弃观察器，后续滚动零开销
//! - 页面卸载时 [`RevealTracker::release_all`] 释放所有剩余观察器，
//!   从未揭示的区块保持隐藏，不触发任何回调

use serde::{Deserialize, Serialize};

/// 可见性阈值：区块高度的这个比例进入有效视口即判定可见
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// 有效视口底部内缩量（像素）
pub const REVEAL_BOTTOM_INSET: f32 = 50.0;

/// 竖直区间：一个区块或视口在页面坐标系中占据的范围
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// 顶边的页面纵坐标
    pub top: f32,
    /// 高度（>= 0）
    pub height: f32,
}

impl Band {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// 底边的页面纵坐标
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// 与另一区间的重叠长度（无重叠时为 0）
    pub fn overlap(&self, other: &Band) -> f32 {
        let lo = self.top.max(other.top);
        let hi = self.bottom().min(other.bottom());
        (hi - lo).max(0.0)
    }

    /// 某个纵坐标是否落在区间内（含边界）
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// 揭示阶段（单向）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPhase {
    /// 初始状态，区块不可见
    Hidden,
    /// 已揭示，永不回退
    Revealed,
}

/// 单个区块的揭示闩锁
///
/// [`RevealGate::observe`] 在可见比例首次达到阈值的那次求值返回 `true`，
/// 之后永远返回 `false`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealGate {
    threshold: f32,
    bottom_inset: f32,
    phase: RevealPhase,
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealGate {
    pub fn new() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_inset: REVEAL_BOTTOM_INSET,
            phase: RevealPhase::Hidden,
        }
    }

    /// 自定义可见阈值（0.0 - 1.0）
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// 自定义底部内缩量
    pub fn with_bottom_inset(mut self, inset: f32) -> Self {
        self.bottom_inset = inset.max(0.0);
        self
    }

    /// 当前阶段
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// 是否已揭示
    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// 区块在有效视口内的可见比例（0.0 - 1.0）
    ///
    /// 零高区块退化为一个点：点在有效视口内记 1.0，否则记 0.0。
    pub fn visible_fraction(&self, section: &Band, viewport: &Band) -> f32 {
        let effective = Band::new(viewport.top, (viewport.height - self.bottom_inset).max(0.0));
        if section.height <= 0.0 {
            if effective.height > 0.0 && effective.contains(section.top) {
                1.0
            } else {
                0.0
            }
        } else {
            section.overlap(&effective) / section.height
        }
    }

    /// 求值一次可见性
    ///
    /// 首次达到阈值时闩锁闭合并返回 `true`；闩锁已闭合或未达到
    /// 阈值时返回 `false`。从未达标不是错误，区块保持隐藏即可。
    pub fn observe(&mut self, section: &Band, viewport: &Band) -> bool {
        if self.phase == RevealPhase::Revealed {
            return false;
        }
        if self.visible_fraction(section, viewport) >= self.threshold {
            self.phase = RevealPhase::Revealed;
            true
        } else {
            false
        }
    }
}

/// 跟踪槽：揭示标志 + 可选的活动闩锁
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RevealSlot {
    revealed: bool,
    gate: Option<RevealGate>,
}

/// 页面级揭示跟踪器
///
/// 页面挂载时为每个区块建一个槽（全部隐藏、全部持有活动闩锁）；
/// 区块揭示后对应闩锁立即释放，只留下已揭示标志。各槽完全独立。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealTracker {
    slots: Vec<RevealSlot>,
}

impl RevealTracker {
    /// 挂载 `section_count` 个区块，全部处于隐藏状态
    pub fn new(section_count: usize) -> Self {
        Self {
            slots: (0..section_count)
                .map(|_| RevealSlot {
                    revealed: false,
                    gate: Some(RevealGate::new()),
                })
                .collect(),
        }
    }

    /// 区块数量
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 仍持有活动闩锁（仍在被观察）的区块数量
    pub fn watched(&self) -> usize {
        self.slots.iter().filter(|s| s.gate.is_some()).count()
    }

    /// 指定区块是否已揭示；越界一律视为未揭示
    pub fn is_revealed(&self, index: usize) -> bool {
        self.slots.get(index).map(|s| s.revealed).unwrap_or(false)
    }

    /// 对指定区块求值一次可见性
    ///
    /// 返回 `true` 当且仅当该区块在这次求值中刚刚揭示。
    /// 揭示的同时释放闩锁。越界或闩锁已释放时是安静的空操作。
    pub fn observe(&mut self, index: usize, section: &Band, viewport: &Band) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        let Some(gate) = slot.gate.as_mut() else {
            return false;
        };
        if gate.observe(section, viewport) {
            slot.revealed = true;
            slot.gate = None;
            true
        } else {
            false
        }
    }

    /// 卸载：释放所有剩余闩锁，揭示标志保持原样
    ///
    /// 对从未揭示的跟踪器调用同样安全，调用后 `watched() == 0`。
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.gate = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 600 高的视口，顶对齐页面原点
    fn viewport() -> Band {
        Band::new(0.0, 600.0)
    }

    #[test]
    fn test_fresh_tracker_all_hidden() {
        let tracker = RevealTracker::new(4);
        assert_eq!(tracker.len(), 4);
        assert_eq!(tracker.watched(), 4);
        for i in 0..4 {
            assert!(!tracker.is_revealed(i));
        }
    }

    #[test]
    fn test_gate_latches_once() {
        let mut gate = RevealGate::new();
        let section = Band::new(100.0, 200.0);

        // 第一次达标：返回 true
        assert!(gate.observe(&section, &viewport()));
        assert!(gate.is_revealed());
        // 之后永远 false
        assert!(!gate.observe(&section, &viewport()));
    }

    #[test]
    fn test_revealed_survives_leaving_viewport() {
        let mut tracker = RevealTracker::new(1);
        let section = Band::new(100.0, 200.0);
        assert!(tracker.observe(0, &section, &viewport()));

        // 区块滚出视口后再求值：仍是已揭示
        let far_away = Band::new(10_000.0, 200.0);
        assert!(!tracker.observe(0, &far_away, &viewport()));
        assert!(tracker.is_revealed(0));
    }

    #[test]
    fn test_threshold_boundary() {
        let mut gate = RevealGate::new().with_bottom_inset(0.0);
        let vp = viewport();

        // 高 1000 的区块顶在视口底边上方 100 处：可见比例恰为 0.1
        let at_threshold = Band::new(500.0, 1000.0);
        let fraction = gate.visible_fraction(&at_threshold, &vp);
        assert!((fraction - 0.1).abs() < 1e-6);
        assert!(gate.observe(&at_threshold, &vp));

        // 略低于阈值：不触发
        let mut gate = RevealGate::new().with_bottom_inset(0.0);
        let below = Band::new(501.0, 1000.0);
        assert!(!gate.observe(&below, &vp));
    }

    #[test]
    fn test_bottom_inset_shrinks_viewport() {
        // 区块贴着视口底边，只有底部内缩区域内的部分
        let mut gate = RevealGate::new();
        let section = Band::new(560.0, 200.0);
        // 有效视口只到 550，区块完全在内缩区内：不可见
        assert_eq!(gate.visible_fraction(&section, &viewport()), 0.0);
        assert!(!gate.observe(&section, &viewport()));

        // 同一区块在无内缩的门下是可见的
        let mut plain = RevealGate::new().with_bottom_inset(0.0);
        assert!(plain.observe(&section, &viewport()));
    }

    #[test]
    fn test_zero_height_section() {
        let mut gate = RevealGate::new();
        // 点在有效视口内：立即揭示
        let point = Band::new(300.0, 0.0);
        assert!(gate.observe(&point, &viewport()));

        // 点在有效视口外：保持隐藏
        let mut gate = RevealGate::new();
        let outside = Band::new(580.0, 0.0);
        assert!(!gate.observe(&outside, &viewport()));
    }

    #[test]
    fn test_viewport_shorter_than_inset() {
        // 视口比内缩量还矮：有效视口高度为 0，什么都不可见
        let mut gate = RevealGate::new();
        let tiny = Band::new(0.0, 40.0);
        let section = Band::new(0.0, 100.0);
        assert!(!gate.observe(&section, &tiny));
        let point = Band::new(0.0, 0.0);
        let mut gate2 = RevealGate::new();
        assert!(!gate2.observe(&point, &tiny));
    }

    #[test]
    fn test_offscreen_section_stays_hidden() {
        let mut tracker = RevealTracker::new(1);
        let below_fold = Band::new(5_000.0, 300.0);

        // 反复求值都不达标：保持隐藏，不是错误
        for _ in 0..10 {
            assert!(!tracker.observe(0, &below_fold, &viewport()));
        }
        assert!(!tracker.is_revealed(0));
        assert_eq!(tracker.watched(), 1);
    }

    #[test]
    fn test_observe_releases_gate() {
        let mut tracker = RevealTracker::new(3);
        let section = Band::new(0.0, 100.0);

        assert!(tracker.observe(1, &section, &viewport()));
        assert_eq!(tracker.watched(), 2);
        assert!(tracker.is_revealed(1));

        // 已释放的槽再求值：安静空操作
        assert!(!tracker.observe(1, &section, &viewport()));
        assert_eq!(tracker.watched(), 2);
    }

    #[test]
    fn test_slots_independent() {
        let mut tracker = RevealTracker::new(2);
        let visible = Band::new(100.0, 200.0);
        let hidden = Band::new(9_000.0, 200.0);

        assert!(tracker.observe(0, &visible, &viewport()));
        assert!(!tracker.observe(1, &hidden, &viewport()));
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
    }

    #[test]
    fn test_release_all_without_reveal() {
        // 从未揭示就卸载：不 panic，观察器清零
        let mut tracker = RevealTracker::new(3);
        tracker.release_all();
        assert_eq!(tracker.watched(), 0);
        for i in 0..3 {
            assert!(!tracker.is_revealed(i));
        }

        // 卸载后求值：空操作
        let section = Band::new(0.0, 100.0);
        assert!(!tracker.observe(0, &section, &viewport()));
    }

    #[test]
    fn test_release_all_keeps_revealed_flags() {
        let mut tracker = RevealTracker::new(2);
        let section = Band::new(0.0, 100.0);
        tracker.observe(0, &section, &viewport());

        tracker.release_all();
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
        assert_eq!(tracker.watched(), 0);
    }

    #[test]
    fn test_out_of_range_observe_is_noop() {
        let mut tracker = RevealTracker::new(1);
        let section = Band::new(0.0, 100.0);
        assert!(!tracker.observe(99, &section, &viewport()));
    }

    #[test]
    fn test_remount_resets_everything() {
        let mut tracker = RevealTracker::new(2);
        let section = Band::new(0.0, 100.0);
        tracker.observe(0, &section, &viewport());
        tracker.release_all();

        // 重挂载 = 新建跟踪器：全部回到隐藏、全部重新观察
        tracker = RevealTracker::new(2);
        assert_eq!(tracker.watched(), 2);
        assert!(!tracker.is_revealed(0));
    }
}
