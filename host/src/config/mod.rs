//! # Config 模块
//!
//! 运行时配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use site_core::PageId;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 窗口配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 启动页面（六个页面标识之一）
    ///
    /// 无法识别的值不报错，回退到首页并打印警告。
    #[serde(default = "default_start_page")]
    pub start_page: String,

    /// 自定义字体路径，留空使用 macroquad 内置字体
    ///
    /// 站点文案全部是 ASCII，内置字体即可覆盖；
    /// 加载失败同样回退内置字体。
    #[serde(default)]
    pub default_font: String,

    /// 调试配置
    #[serde(default)]
    pub debug: DebugConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 窗口宽度
    #[serde(default = "default_window_width")]
    pub width: u32,

    /// 窗口高度
    #[serde(default = "default_window_height")]
    pub height: u32,

    /// 窗口标题
    #[serde(default = "default_window_title")]
    pub title: String,

    /// 是否全屏
    #[serde(default)]
    pub fullscreen: bool,
}

/// 调试配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// 是否显示帧率与页面状态覆盖层
    #[serde(default)]
    pub show_fps: bool,

    /// 是否描出区块的揭示判定区间
    #[serde(default)]
    pub show_bounds: bool,

    /// 启动时是否运行内容巡检
    ///
    /// - debug build（`cargo run`）默认开启（见 `default_audit_on_start()`）
    /// - release build 默认关闭，可在 `config.json` 显式设置打开/关闭
    /// - 巡检结果只输出诊断，不阻塞启动
    #[serde(default = "default_audit_on_start")]
    pub audit_on_start: bool,
}

// 默认值函数
fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    800
}

fn default_window_title() -> String {
    "Nottingham AI Safety Initiative".to_string()
}

fn default_start_page() -> String {
    "home".to_string()
}

fn default_audit_on_start() -> bool {
    // 在 debug build 时默认开启内容巡检
    cfg!(debug_assertions)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            start_page: default_start_page(),
            default_font: String::new(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
            fullscreen: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_fps: false,
            show_bounds: false,
            audit_on_start: default_audit_on_start(),
        }
    }
}

impl AppConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并打印警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            println!("⚠️ 配置文件不存在: {:?}，使用默认配置", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    println!("✅ 配置文件加载成功: {:?}", path);
                    config
                }
                Err(e) => {
                    eprintln!("⚠️ 配置文件解析失败: {}，使用默认配置", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("⚠️ 配置文件读取失败: {}，使用默认配置", e);
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        fs::write(path, json).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// 验证配置有效性
    ///
    /// 只检查硬性条件；`start_page` 走软回退，不在这里报错。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::ValidationFailed(
                "窗口尺寸必须大于 0".to_string(),
            ));
        }

        Ok(())
    }

    /// 解析启动页面，识别失败回退到首页
    pub fn resolve_start_page(&self) -> PageId {
        match self.start_page.trim().parse::<PageId>() {
            Ok(page) => page,
            Err(e) => {
                eprintln!("⚠️ {}，回退到首页", e);
                PageId::Home
            }
        }
    }
}

/// 配置错误
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    SerializationFailed(String),
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    IoError(String),
    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.window.title, "Nottingham AI Safety Initiative");
        assert_eq!(config.start_page, "home");
        assert!(config.default_font.is_empty());
        assert!(!config.debug.show_fps);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();

        // 反序列化
        let loaded: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.window.width, config.window.width);
        assert_eq!(loaded.start_page, config.start_page);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // 只给 start_page，其余字段落默认值
        let loaded: AppConfig = serde_json::from_str(r#"{ "start_page": "events" }"#).unwrap();
        assert_eq!(loaded.start_page, "events");
        assert_eq!(loaded.window.width, 1280);
        assert_eq!(loaded.debug.audit_on_start, cfg!(debug_assertions));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("no_such_config.json"));
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not valid json").unwrap();

        let config = AppConfig::load(&path);
        assert_eq!(config.start_page, "home");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.start_page = "resources".to_string();
        config.window.width = 1600;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path);
        assert_eq!(loaded.start_page, "resources");
        assert_eq!(loaded.window.width, 1600);
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.window.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_start_page() {
        let mut config = AppConfig::default();
        assert_eq!(config.resolve_start_page(), PageId::Home);

        config.start_page = "events".to_string();
        assert_eq!(config.resolve_start_page(), PageId::Events);

        // 带空白也能识别
        config.start_page = "  join  ".to_string();
        assert_eq!(config.resolve_start_page(), PageId::Join);

        // 识别失败回退首页
        config.start_page = "homepage".to_string();
        assert_eq!(config.resolve_start_page(), PageId::Home);
    }
}
