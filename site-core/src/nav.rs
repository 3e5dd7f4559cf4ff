//! # 导航模块
//!
//! 管理当前页面与移动端菜单，并以命令的形式把副作用交给宿主执行。
//! NavCommand 是导航器与宿主之间的**唯一通信方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：NavCommand 描述"做什么"（回到顶部、重挂载页面），
//!   不描述"怎么做"
//! - **无副作用**：Navigator 本身不滚动、不绘制，只改自己的状态
//! - **引擎无关**：不包含任何渲染层类型

use serde::{Deserialize, Serialize};

use crate::page::PageId;

/// 导航器向宿主发出的指令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    /// 把页面视口滚动回顶部（每次切换都会发出，包括原地切换）
    ResetScroll,
    /// 重新挂载目标页面（只在页面真正变化时发出；
    /// 挂载意味着该页所有揭示区块回到未揭示状态）
    MountPage(PageId),
}

/// 页面导航器
///
/// 持有"当前页面"这一唯一事实与移动端菜单的开合标志。
/// 任意时刻恰好有一个页面是当前页面。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigator {
    current: PageId,
    menu_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(PageId::default())
    }
}

impl Navigator {
    pub fn new(start: PageId) -> Self {
        Self {
            current: start,
            menu_open: false,
        }
    }

    /// 获取当前页面
    pub fn current(&self) -> PageId {
        self.current
    }

    /// 切换到目标页面
    ///
    /// 无条件执行三件事：当前页面改为 target、关闭移动端菜单、
    /// 发出 [`NavCommand::ResetScroll`]。只有页面真正变化时才追加
    /// [`NavCommand::MountPage`]：选中当前页面等于重新渲染而非重挂载，
    /// 已揭示的区块保持已揭示。
    pub fn transition(&mut self, target: PageId) -> Vec<NavCommand> {
        let changed = self.current != target;
        self.current = target;
        self.menu_open = false;

        let mut commands = vec![NavCommand::ResetScroll];
        if changed {
            commands.push(NavCommand::MountPage(target));
        }
        commands
    }

    /// 移动端菜单是否展开
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// 开合移动端菜单
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// 关闭移动端菜单（窗口变宽回到桌面布局时调用）
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_changes_current() {
        let mut nav = Navigator::default();
        assert_eq!(nav.current(), PageId::Home);

        nav.transition(PageId::About);
        assert_eq!(nav.current(), PageId::About);
    }

    #[test]
    fn test_transition_emits_reset_and_mount() {
        let mut nav = Navigator::default();
        let commands = nav.transition(PageId::Programs);
        assert_eq!(
            commands,
            vec![
                NavCommand::ResetScroll,
                NavCommand::MountPage(PageId::Programs)
            ]
        );
    }

    #[test]
    fn test_same_page_transition_skips_mount() {
        let mut nav = Navigator::default();
        // 原地切换：重置滚动但不重挂载
        let commands = nav.transition(PageId::Home);
        assert_eq!(commands, vec![NavCommand::ResetScroll]);
        assert_eq!(nav.current(), PageId::Home);
    }

    #[test]
    fn test_last_write_wins() {
        let mut nav = Navigator::default();
        nav.transition(PageId::About);
        nav.transition(PageId::Events);
        nav.transition(PageId::Join);
        assert_eq!(nav.current(), PageId::Join);
    }

    #[test]
    fn test_transition_closes_menu() {
        let mut nav = Navigator::default();
        nav.toggle_menu();
        assert!(nav.menu_open());

        // 单次调用同时完成切换与关闭菜单
        nav.transition(PageId::About);
        assert!(!nav.menu_open());
        assert_eq!(nav.current(), PageId::About);
    }

    #[test]
    fn test_same_page_transition_still_closes_menu() {
        let mut nav = Navigator::default();
        nav.toggle_menu();
        nav.transition(PageId::Home);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_toggle_menu_involution() {
        let mut nav = Navigator::default();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }
}
