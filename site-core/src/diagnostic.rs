//! # 诊断模块
//!
//! 提供内容目录的静态巡检 API，不依赖 IO 或渲染层。
//!
//! ## 设计原则
//!
//! - 纯函数 API，可在无 IO 环境下运行
//! - 诊断分级：Error（必须修复）、Warn（建议修复）、Info（信息提示）
//! - 巡检对象是编译进二进制的目录本身，改文案后跑一遍即可兜底

use std::collections::HashSet;

use crate::catalog::Catalog;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    /// 信息提示
    Info,
    /// 警告（建议修复）
    Warn,
    /// 错误（必须修复）
    Error,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// 诊断条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 所属内容区（"home"、"join"、"footer" 等）
    pub section: String,
    /// 诊断消息
    pub message: String,
    /// 诊断详情（可选，如出问题的原文）
    pub detail: Option<String>,
}

impl Diagnostic {
    /// 创建错误诊断
    pub fn error(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            section: section.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// 创建警告诊断
    pub fn warn(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warn,
            section: section.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// 创建信息诊断
    pub fn info(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            section: section.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// 设置详情
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.section, self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  | {}", detail)?;
        }
        Ok(())
    }
}

/// 诊断结果
#[derive(Debug, Clone, Default)]
pub struct DiagnosticResult {
    /// 诊断条目列表
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticResult {
    /// 创建空结果
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加诊断
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Error)
            .count()
    }

    /// 获取警告数量
    pub fn warn_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warn)
            .count()
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// 按级别过滤
    pub fn filter_by_level(&self, min_level: DiagnosticLevel) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level >= min_level)
            .collect()
    }
}

//=============================================================================
// 目录巡检 API
//=============================================================================

/// 巡检内容目录，返回诊断结果
///
/// 执行以下检查：
/// - 品牌名与各页横幅标题非空
/// - 卡片类条目（亮点、路径、活动、项目、资源）标题非空
/// - 兴趣标签唯一（重复标签会让勾选状态互相干扰）
/// - 活动标题、字段选项的重复检查
/// - 项目主题列表非空
pub fn audit_catalog(catalog: &Catalog) -> DiagnosticResult {
    let mut result = DiagnosticResult::new();

    if catalog.brand_short.is_empty() {
        result.push(Diagnostic::error("brand", "品牌短名为空"));
    }
    if catalog.brand_full.is_empty() {
        result.push(Diagnostic::error("brand", "品牌全名为空"));
    }

    audit_home(catalog, &mut result);
    audit_inner_pages(catalog, &mut result);
    audit_join(catalog, &mut result);
    audit_footer(catalog, &mut result);

    result
}

fn audit_home(catalog: &Catalog, result: &mut DiagnosticResult) {
    let home = &catalog.home;
    if home.hero_title.is_empty() {
        result.push(Diagnostic::error("home", "首页主标题为空"));
    }
    if home.highlights.is_empty() {
        result.push(Diagnostic::error("home", "亮点卡片列表为空"));
    }
    for card in home.highlights {
        if card.title.is_empty() || card.description.is_empty() {
            result.push(
                Diagnostic::error("home", "亮点卡片缺少标题或描述")
                    .with_detail(format!("title='{}'", card.title)),
            );
        }
    }
    for path in home.paths {
        if path.title.is_empty() || path.time.is_empty() {
            result.push(
                Diagnostic::error("home", "参与路径卡片缺少标题或时间投入")
                    .with_detail(format!("title='{}'", path.title)),
            );
        }
    }
    for event in home.featured {
        if event.title.is_empty() {
            result.push(Diagnostic::error("home", "精选活动缺少标题"));
        }
    }
}

fn audit_inner_pages(catalog: &Catalog, result: &mut DiagnosticResult) {
    for (section, hero) in [
        ("about", &catalog.about.hero),
        ("programs", &catalog.programs.hero),
        ("events", &catalog.events.hero),
        ("resources", &catalog.resources.hero),
        ("join", &catalog.join.hero),
    ] {
        if hero.title.is_empty() {
            result.push(Diagnostic::error(section, "横幅标题为空"));
        }
        if hero.lede.is_empty() {
            result.push(Diagnostic::warn(section, "横幅导语为空"));
        }
    }

    for program in catalog.programs.programs {
        if program.title.is_empty() {
            result.push(Diagnostic::error("programs", "项目缺少标题"));
        }
        if program.topics.is_empty() {
            result.push(
                Diagnostic::warn("programs", "项目没有主题标签")
                    .with_detail(format!("title='{}'", program.title)),
            );
        }
    }

    let mut seen_events = HashSet::new();
    for event in catalog.events.events {
        if event.title.is_empty() {
            result.push(Diagnostic::error("events", "活动缺少标题"));
        } else if !seen_events.insert(event.title) {
            result.push(
                Diagnostic::warn("events", "活动标题重复")
                    .with_detail(format!("title='{}'", event.title)),
            );
        }
    }

    for resource in catalog.resources.resources {
        if resource.title.is_empty() {
            result.push(Diagnostic::error("resources", "资源缺少标题"));
        }
    }
}

fn audit_join(catalog: &Catalog, result: &mut DiagnosticResult) {
    let join = &catalog.join;
    if join.interests.is_empty() {
        result.push(Diagnostic::error("join", "兴趣标签列表为空"));
    }
    let mut seen = HashSet::new();
    for tag in join.interests {
        if tag.is_empty() {
            result.push(Diagnostic::error("join", "存在空的兴趣标签"));
        } else if !seen.insert(tag) {
            result.push(
                Diagnostic::error("join", "兴趣标签重复，勾选状态会互相干扰")
                    .with_detail(format!("tag='{}'", tag)),
            );
        }
    }

    if join.background_options.is_empty() {
        result.push(Diagnostic::warn("join", "字段选项列表为空"));
    }
    let mut seen_options = HashSet::new();
    for option in join.background_options {
        if !seen_options.insert(option) {
            result.push(
                Diagnostic::warn("join", "字段选项重复")
                    .with_detail(format!("option='{}'", option)),
            );
        }
    }

    if join.submit_label.is_empty() {
        result.push(Diagnostic::error("join", "提交按钮文字为空"));
    }
    if join.success_message.is_empty() {
        result.push(Diagnostic::warn("join", "提交成功提示为空"));
    }
}

fn audit_footer(catalog: &Catalog, result: &mut DiagnosticResult) {
    let footer = &catalog.footer;
    if footer.copyright.is_empty() {
        result.push(Diagnostic::warn("footer", "版权行为空"));
    }
    let mut seen = HashSet::new();
    for page in footer.quick_links {
        if !seen.insert(page) {
            result.push(
                Diagnostic::warn("footer", "快捷链接重复")
                    .with_detail(format!("page='{}'", page)),
            );
        }
    }
}
