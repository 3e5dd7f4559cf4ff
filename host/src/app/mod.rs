//! # App 模块
//!
//! 应用状态与主循环逻辑。
//!
//! ## 帧内顺序
//!
//! 每帧先读输入推进状态（`update`），再整帧绘制（`draw`）。
//! 更新内部的顺序即指针优先级：导航栏最先处理并占用栏内指针，
//! 然后是滚动与当前页面，页脚最后。三处产生的跳转请求同帧
//! 合并，导航栏的请求优先生效。

mod draw;
mod update;

pub use draw::{draw, draw_debug_overlay};
pub use update::{advance, request_page, update};

use site_core::{Catalog, Navigator, PageId};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::renderer::TextRenderer;
use crate::screens::{
    AboutScreen, EventsScreen, Footer, HomeScreen, JoinScreen, NavBar, ProgramsScreen,
    ResourcesScreen,
};
use crate::ui::{ScrollView, Theme, UiContext};

/// 应用状态
pub struct AppState {
    /// 应用配置
    pub config: AppConfig,
    /// 全站内容目录
    pub catalog: &'static Catalog,
    /// 导航器：当前页面与移动端菜单
    pub navigator: Navigator,
    /// UI 上下文（每帧输入快照）
    pub ui_context: UiContext,
    /// 文本渲染
    pub text_renderer: TextRenderer,
    /// 页面滚动视口
    pub scroll: ScrollView,
    /// 顶部导航栏
    pub navbar: NavBar,
    /// 页脚
    pub footer: Footer,

    // ===== 六个页面 =====
    pub home: HomeScreen,
    pub about: AboutScreen,
    pub programs: ProgramsScreen,
    pub events: EventsScreen,
    pub resources: ResourcesScreen,
    pub join: JoinScreen,

    /// 调试覆盖层（帧率、页面状态）
    pub show_debug: bool,
    /// 是否描出揭示判定区间
    pub show_bounds: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let catalog = Catalog::builtin();
        let start = config.resolve_start_page();
        info!(page = %start, "应用启动");

        let show_debug = config.debug.show_fps;
        let show_bounds = config.debug.show_bounds;

        Self {
            config,
            catalog,
            navigator: Navigator::new(start),
            ui_context: UiContext::new(Theme::light()),
            text_renderer: TextRenderer::new(),
            scroll: ScrollView::new(),
            navbar: NavBar::new(),
            footer: Footer::new(catalog),

            home: HomeScreen::new(catalog),
            about: AboutScreen::new(catalog),
            programs: ProgramsScreen::new(catalog),
            events: EventsScreen::new(catalog),
            resources: ResourcesScreen::new(catalog),
            join: JoinScreen::new(catalog),

            show_debug,
            show_bounds,
        }
    }

    /// 当前页面内容高度（页脚之上）
    pub fn page_content_height(&self) -> f32 {
        match self.navigator.current() {
            PageId::Home => self.home.content_height(&self.ui_context),
            PageId::About => self.about.content_height(&self.ui_context),
            PageId::Programs => self.programs.content_height(&self.ui_context),
            PageId::Events => self.events.content_height(&self.ui_context),
            PageId::Resources => self.resources.content_height(&self.ui_context),
            PageId::Join => self.join.content_height(&self.ui_context),
        }
    }

    /// 当前页面的揭示进度（已揭示数，总数）
    pub fn page_reveal_stats(&self) -> (usize, usize) {
        match self.navigator.current() {
            PageId::Home => self.home.reveal_stats(),
            PageId::About => self.about.reveal_stats(),
            PageId::Programs => self.programs.reveal_stats(),
            PageId::Events => self.events.reveal_stats(),
            PageId::Resources => self.resources.reveal_stats(),
            PageId::Join => self.join.reveal_stats(),
        }
    }
}

/// 加载启动资源
///
/// 站点内容全部内建，唯一的外部资源是可选的自定义字体；
/// 加载失败回退 macroquad 内置字体（文案全是 ASCII，够用）。
pub async fn load_resources(app_state: &mut AppState) {
    if app_state.config.default_font.is_empty() {
        return;
    }
    let path = app_state.config.default_font.clone();
    if let Err(e) = app_state.text_renderer.load_font(&path).await {
        warn!(error = %e, "字体加载失败，回退内置字体");
    }
}
