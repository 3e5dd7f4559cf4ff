//! # 内容数据模型
//!
//! 站点文案的类型定义。所有记录都是只读的 `&'static str` 静态数据，
//! 由 [`crate::catalog`] 提供唯一实例，渲染层原样展示，不做二次加工。
//!
//! ## 设计原则
//!
//! - **引擎无关**：图标、色调只是标签，具体绘制由宿主解释
//! - **只序列化不反序列化**：内容编译进二进制，导出（`Serialize`）
//!   用于内容巡检和调试，不存在从外部加载的路径

use serde::Serialize;

/// 图标标签
///
/// 宿主用矢量图元绘制，内容层只声明"用哪个"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Shield,
    Brain,
    Users,
    Mail,
    Calendar,
    BookOpen,
    Clock,
    MapPin,
    ArrowRight,
    ChevronDown,
    Menu,
    Close,
    Check,
    ExternalLink,
    Github,
    Linkedin,
}

/// 色调标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Cyan,
    Purple,
    Pink,
    Green,
    Teal,
    Orange,
    Red,
    Yellow,
}

/// 渐变色：从一个色调过渡到另一个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: Tone,
    pub to: Tone,
}

impl Gradient {
    pub const fn new(from: Tone, to: Tone) -> Self {
        Self { from, to }
    }
}

/// 站点主渐变（品牌色）
pub const BRAND_GRADIENT: Gradient = Gradient::new(Tone::Blue, Tone::Cyan);

/// 资源难度分级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

impl Level {
    /// 徽章文字
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::AllLevels => "All Levels",
        }
    }

    /// 徽章底色的色调
    pub fn badge_tone(&self) -> Tone {
        match self {
            Level::Beginner => Tone::Green,
            Level::Intermediate => Tone::Yellow,
            Level::Advanced => Tone::Red,
            Level::AllLevels => Tone::Blue,
        }
    }
}

/// 区块标题：大标题加一句副标题
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// 图标卡片：首页亮点与关于页价值观共用同一形状
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InfoCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// 参与路径卡片（首页）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EngagementPath {
    pub icon: Icon,
    pub title: &'static str,
    /// 时间投入，如 "2 hrs/month"
    pub time: &'static str,
    pub gradient: Gradient,
}

/// 首页精选活动（只有时间地点，详情在活动页）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeaturedEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
}

/// 活动页完整条目
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventEntry {
    pub title: &'static str,
    /// 活动类别徽章，如 "Workshop"
    pub kind: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

/// 项目条目
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Program {
    pub title: &'static str,
    /// 项目周期，如 "8 weeks"
    pub duration: &'static str,
    /// 每周投入，如 "5 hours/week"
    pub commitment: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
    pub gradient: Gradient,
}

/// 学习资源条目
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceEntry {
    pub title: &'static str,
    /// 资源类别，如 "Course"
    pub kind: &'static str,
    pub icon: Icon,
    pub level: Level,
}

/// 联系方式条目（加入页底部）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactLink {
    pub icon: Icon,
    pub label: &'static str,
}

/// 内页顶部的标题横幅
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageHero {
    pub title: &'static str,
    pub lede: &'static str,
    /// 横幅背景渐变（淡色或饱和由宿主按页面决定）
    pub gradient: Gradient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(Level::Beginner.label(), "Beginner");
        assert_eq!(Level::AllLevels.label(), "All Levels");
    }

    #[test]
    fn test_level_badge_tone_mapping() {
        // 每个等级都有自己的徽章色
        assert_eq!(Level::Beginner.badge_tone(), Tone::Green);
        assert_eq!(Level::Intermediate.badge_tone(), Tone::Yellow);
        assert_eq!(Level::Advanced.badge_tone(), Tone::Red);
        assert_eq!(Level::AllLevels.badge_tone(), Tone::Blue);
    }

    #[test]
    fn test_icon_serializes_kebab_case() {
        let json = serde_json::to_string(&Icon::ChevronDown).unwrap();
        assert_eq!(json, "\"chevron-down\"");
    }
}
