//! # Error 模块
//!
//! 定义 site-core 中使用的错误类型。

use thiserror::Error;

/// site-core 统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// 页面名称不在封闭集合内
    ///
    /// 只可能出现在字符串边界（配置文件、CLI 参数）。
    /// 枚举内部的导航永远不会产生此错误。
    #[error("未知页面 '{name}'，有效值: home, about, programs, events, resources, join")]
    UnknownPage { name: String },

    /// 内容导出失败
    #[error("内容导出失败: {0}")]
    ExportFailed(String),
}

/// Result 类型别名
pub type SiteResult<T> = Result<T, SiteError>;
