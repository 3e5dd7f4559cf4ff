//! # 站点宿主入口
//!
//! ## 用法
//!
//! ```bash
//! # 默认配置启动
//! cargo run -p host
//!
//! # 指定配置文件与启动页面
//! cargo run -p host -- --config my-config.json --page events
//!
//! # 无窗口模式：内容巡检 / 导出内容 JSON
//! cargo run -p host -- --audit
//! cargo run -p host -- --dump-content > catalog.json
//! ```

use std::process;

use clap::Parser;
use macroquad::prelude::*;
use site_core::{Catalog, PageId, audit_catalog};
use tracing::{error, info, warn};

use host::app::{self, AppState};
use host::config::AppConfig;

#[derive(Parser)]
#[command(name = "naisi-site")]
#[command(about = "Nottingham AI Safety Initiative 官网宿主")]
#[command(version)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// 启动页面，覆盖配置文件（home/about/programs/events/resources/join）
    #[arg(short, long)]
    page: Option<String>,

    /// 巡检内置内容目录后退出（有错误时退出码为 1）
    #[arg(long)]
    audit: bool,

    /// 导出内置内容目录为 JSON 后退出
    #[arg(long)]
    dump_content: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cli = Cli::parse();

    // 无窗口模式先于窗口创建处理
    if cli.audit {
        process::exit(run_audit());
    }
    if cli.dump_content {
        process::exit(run_dump());
    }

    let mut config = AppConfig::load(&cli.config);
    if let Err(e) = config.validate() {
        error!(error = %e, "配置无效");
        process::exit(1);
    }

    // CLI 指定的页面是显式输入，识别失败直接报错而不回退
    if let Some(page) = cli.page {
        match page.parse::<PageId>() {
            Ok(page) => config.start_page = page.as_str().to_string(),
            Err(e) => {
                error!(error = %e, "启动页面参数无效");
                process::exit(2);
            }
        }
    }

    let conf = window_conf(&config);
    macroquad::Window::from_config(conf, run(config));
}

fn window_conf(config: &AppConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        fullscreen: config.window.fullscreen,
        high_dpi: true,
        ..Default::default()
    }
}

/// 主循环
async fn run(config: AppConfig) {
    let mut app_state = AppState::new(config);

    // 启动巡检只输出诊断，不阻塞
    if app_state.config.debug.audit_on_start {
        let result = audit_catalog(app_state.catalog);
        for diag in &result.diagnostics {
            warn!("{}", diag);
        }
        if result.is_empty() {
            info!("内容巡检通过");
        }
    }

    app::load_resources(&mut app_state).await;

    loop {
        app::update(&mut app_state);
        app::draw(&mut app_state);
        next_frame().await;
    }
}

/// `--audit`：巡检内容目录，打印全部诊断
fn run_audit() -> i32 {
    let result = audit_catalog(Catalog::builtin());

    if result.is_empty() {
        println!("内容巡检通过，无诊断");
        return 0;
    }
    for diag in &result.diagnostics {
        println!("{}", diag);
    }
    println!(
        "共 {} 条诊断（{} 错误 / {} 警告）",
        result.diagnostics.len(),
        result.error_count(),
        result.warn_count()
    );

    if result.has_errors() { 1 } else { 0 }
}

/// `--dump-content`：导出内容目录 JSON
fn run_dump() -> i32 {
    match Catalog::builtin().to_json() {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            error!(error = %e, "导出内容失败");
            1
        }
    }
}
