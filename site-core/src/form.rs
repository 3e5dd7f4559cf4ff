//! # 加入表单模块
//!
//! "加入我们"页面的表单状态机：邮箱、兴趣多选、提交标志与
//! 提交后的自动复位倒计时。
//!
//! ## 设计说明
//!
//! - 时间由宿主驱动：表单自己不读时钟，宿主每帧把流逝时长
//!   喂给 [`JoinForm::tick`]
//! - 邮箱原样存储，**不做格式校验**；唯一的提交门槛是非空。
//!   空邮箱提交是安静的空操作，不排任何倒计时
//! - 倒计时到期时整个表单一次性复位，不存在部分复位的中间态
//! - 页面卸载调用 [`JoinForm::reset`]，同时取消未到期的倒计时

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 提交成功后到自动复位的延迟
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// 加入表单状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinForm {
    email: String,
    interests: BTreeSet<String>,
    submitted: bool,
    /// 提交后剩余的复位倒计时；`None` 表示没有排队的复位
    reset_countdown: Option<Duration>,
}

impl JoinForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前邮箱内容
    pub fn email(&self) -> &str {
        &self.email
    }

    /// 原样写入邮箱（受控输入：以最后一次写入为准）
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// 已勾选的兴趣集合
    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    /// 某个兴趣是否已勾选
    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.contains(tag)
    }

    /// 勾选/取消某个兴趣（对合：连按两次回到原状态）
    pub fn toggle_interest(&mut self, tag: &str) {
        if !self.interests.remove(tag) {
            self.interests.insert(tag.to_string());
        }
    }

    /// 是否处于"已提交"展示状态
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// 是否有排队中的复位倒计时
    pub fn reset_pending(&self) -> bool {
        self.reset_countdown.is_some()
    }

    /// 提交
    ///
    /// 邮箱非空才生效：立即进入已提交状态并排一个
    /// [`RESET_DELAY`] 的复位倒计时，返回 `true`。
    /// 邮箱为空时什么都不发生，返回 `false`。
    pub fn submit(&mut self) -> bool {
        if self.email.is_empty() {
            return false;
        }
        self.submitted = true;
        self.reset_countdown = Some(RESET_DELAY);
        true
    }

    /// 推进倒计时
    ///
    /// 倒计时归零的那次调用把整个表单一次性清空
    /// （邮箱、兴趣、提交标志全部复位）并返回 `true`。
    /// 没有排队的倒计时时是空操作。
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.reset_countdown else {
            return false;
        };
        let remaining = remaining.saturating_sub(dt);
        if remaining.is_zero() {
            self.clear();
            true
        } else {
            self.reset_countdown = Some(remaining);
            false
        }
    }

    /// 卸载复位：清空全部状态并取消未到期的倒计时
    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.email.clear();
        self.interests.clear();
        self.submitted = false;
        self.reset_countdown = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_email_verbatim() {
        let mut form = JoinForm::new();
        // 不做格式校验，畸形内容原样保留
        form.set_email("not an email @@");
        assert_eq!(form.email(), "not an email @@");

        form.set_email("s.chen@university.edu");
        assert_eq!(form.email(), "s.chen@university.edu");
    }

    #[test]
    fn test_toggle_interest_involution() {
        let mut form = JoinForm::new();
        form.toggle_interest("Technical Research");
        assert!(form.has_interest("Technical Research"));

        // 对合：再按一次回到空集
        form.toggle_interest("Technical Research");
        assert!(!form.has_interest("Technical Research"));
        assert!(form.interests().is_empty());
    }

    #[test]
    fn test_toggle_multiple_interests_no_limit() {
        let mut form = JoinForm::new();
        for tag in ["A", "B", "C", "D", "E"] {
            form.toggle_interest(tag);
        }
        assert_eq!(form.interests().len(), 5);
    }

    #[test]
    fn test_submit_empty_email_is_noop() {
        let mut form = JoinForm::new();
        form.toggle_interest("Reading Groups");

        assert!(!form.submit());
        assert!(!form.submitted());
        assert!(!form.reset_pending());
        // 其他字段不受影响
        assert!(form.has_interest("Reading Groups"));
    }

    #[test]
    fn test_submit_nonempty_email() {
        let mut form = JoinForm::new();
        form.set_email("a@b.c");

        assert!(form.submit());
        assert!(form.submitted());
        assert!(form.reset_pending());
    }

    #[test]
    fn test_whitespace_email_passes_gate() {
        // 门槛只有非空，空白串也能过（与展示层行为一致）
        let mut form = JoinForm::new();
        form.set_email("   ");
        assert!(form.submit());
    }

    #[test]
    fn test_no_partial_reset_before_deadline() {
        let mut form = JoinForm::new();
        form.set_email("a@b.c");
        form.toggle_interest("Events & Workshops");
        form.submit();

        // 2999ms：一切如旧
        form.tick(Duration::from_millis(2999));
        assert!(form.submitted());
        assert_eq!(form.email(), "a@b.c");
        assert!(form.has_interest("Events & Workshops"));
    }

    #[test]
    fn test_reset_fires_all_at_once() {
        let mut form = JoinForm::new();
        form.set_email("a@b.c");
        form.toggle_interest("Policy & Governance");
        form.submit();

        // 分多帧累计到 3000ms
        form.tick(Duration::from_millis(1000));
        form.tick(Duration::from_millis(1000));
        assert!(form.submitted());
        assert!(form.tick(Duration::from_millis(1000)));

        // 邮箱、兴趣、提交标志同时清空
        assert!(!form.submitted());
        assert_eq!(form.email(), "");
        assert!(form.interests().is_empty());
        assert!(!form.reset_pending());
    }

    #[test]
    fn test_overshoot_tick_still_resets_once() {
        let mut form = JoinForm::new();
        form.set_email("a@b.c");
        form.submit();

        // 一帧就冲过截止点
        assert!(form.tick(Duration::from_secs(10)));
        // 之后的 tick 是空操作
        assert!(!form.tick(Duration::from_secs(10)));
    }

    #[test]
    fn test_tick_without_pending_is_noop() {
        let mut form = JoinForm::new();
        form.set_email("a@b.c");
        assert!(!form.tick(Duration::from_secs(5)));
        // 未提交的内容不因时间流逝而变化
        assert_eq!(form.email(), "a@b.c");
    }

    #[test]
    fn test_unmount_reset_cancels_countdown() {
        let mut form = JoinForm::new();
        form.set_email("a@b.c");
        form.submit();

        // 卸载：立即清空并取消倒计时
        form.reset();
        assert!(!form.submitted());
        assert!(!form.reset_pending());
        assert!(!form.tick(Duration::from_secs(5)));
    }

    #[test]
    fn test_edit_during_countdown_then_reset() {
        let mut form = JoinForm::new();
        form.set_email("a@b.c");
        form.submit();

        // 倒计时期间的编辑在到期时同样被清空
        form.set_email("changed@mid.way");
        form.tick(Duration::from_millis(3000));
        assert_eq!(form.email(), "");
    }
}
