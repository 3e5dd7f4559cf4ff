//! # Site Core
//!
//! 社团官网的核心逻辑库。
//!
//! ## 架构概述
//!
//! `site-core` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 页面切换通过 **命令驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                          Core
//!   │                              │
//!   │──── transition(page) ──────►│
//!   │                              │
//!   │◄─── Vec<NavCommand> ────────│
//!   │  （回到顶部 / 重挂载页面）     │
//! ```
//!
//! 时间同样由宿主驱动：滚动揭示的可见性求值、表单复位倒计时
//! 都由宿主把窗口几何和帧间隔喂进来，核心自己不读时钟。
//!
//! ## 核心类型
//!
//! - [`PageId`]：封闭的页面集合
//! - [`Navigator`]：当前页面 + 移动端菜单，发出 [`NavCommand`]
//! - [`RevealTracker`]：每页区块的一次性揭示闩锁
//! - [`JoinForm`]：加入表单状态机（提交后 3 秒自动复位）
//! - [`Catalog`]：编译进二进制的全站文案
//!
//! ## 模块结构
//!
//! - [`page`]：页面枚举
//! - [`nav`]：导航器与 NavCommand
//! - [`reveal`]：滚动揭示闩锁
//! - [`form`]：加入表单状态机
//! - [`content`]：内容数据模型
//! - [`catalog`]：内置内容目录
//! - [`diagnostic`]：内容巡检
//! - [`error`]：错误类型定义

pub mod catalog;
pub mod content;
pub mod diagnostic;
pub mod error;
pub mod form;
pub mod nav;
pub mod page;
pub mod reveal;

// 重导出核心类型
pub use catalog::Catalog;
pub use content::{
    BRAND_GRADIENT, ContactLink, EngagementPath, EventEntry, FeaturedEvent, Gradient, Icon,
    InfoCard, Level, PageHero, Program, ResourceEntry, SectionHeading, Tone,
};
pub use diagnostic::{Diagnostic, DiagnosticLevel, DiagnosticResult, audit_catalog};
pub use error::{SiteError, SiteResult};
pub use form::{JoinForm, RESET_DELAY};
pub use nav::{NavCommand, Navigator};
pub use page::PageId;
pub use reveal::{Band, REVEAL_BOTTOM_INSET, RevealGate, RevealPhase, RevealTracker};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // 验证所有公共类型都可以正常使用
        let mut nav = Navigator::default();
        let _commands = nav.transition(PageId::About);

        let _tracker = RevealTracker::new(4);

        let _form = JoinForm::new();

        let _catalog = Catalog::builtin();
    }
}
