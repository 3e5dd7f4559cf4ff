//! # 页面枚举
//!
//! 站点的六个页面构成一个封闭集合。页面切换只在枚举值之间进行，
//! 不存在"未知页面"的运行时状态；字符串形式只出现在配置文件和
//! CLI 参数这两个边界上，由 [`PageId::from_str`] 负责校验。

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// 页面标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// 首页（落地页）
    Home,
    /// 关于我们
    About,
    /// 项目介绍
    Programs,
    /// 活动日历
    Events,
    /// 学习资源
    Resources,
    /// 加入我们
    Join,
}

impl Default for PageId {
    fn default() -> Self {
        PageId::Home
    }
}

impl PageId {
    /// 全部页面，按导航栏顺序排列
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::About,
        PageId::Programs,
        PageId::Events,
        PageId::Resources,
        PageId::Join,
    ];

    /// 配置/序列化使用的小写标识
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Programs => "programs",
            PageId::Events => "events",
            PageId::Resources => "resources",
            PageId::Join => "join",
        }
    }

    /// 导航栏显示的标题
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Programs => "Programs",
            PageId::Events => "Events",
            PageId::Resources => "Resources",
            PageId::Join => "Join Us",
        }
    }

    /// 是否在导航栏以普通链接展示（Join 单独作为 CTA 按钮）
    pub fn is_nav_link(&self) -> bool {
        !matches!(self, PageId::Join)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PageId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(PageId::Home),
            "about" => Ok(PageId::About),
            "programs" => Ok(PageId::Programs),
            "events" => Ok(PageId::Events),
            "resources" => Ok(PageId::Resources),
            "join" => Ok(PageId::Join),
            other => Err(SiteError::UnknownPage {
                name: other.to_string(),
            }),
        }
    }
}
