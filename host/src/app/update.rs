//! 更新逻辑
//!
//! `update` 每帧从 macroquad 读一次输入快照，余下全部推进
//! 收在 `advance` 里。`advance` 不碰任何窗口 API，集成测试
//! 用手工构造的输入快照直接驱动它。

use macroquad::prelude::*;
use site_core::{NavCommand, PageId};
use tracing::debug;

use super::AppState;

/// 更新入口（每帧调用）
pub fn update(app_state: &mut AppState) {
    app_state.ui_context.update();
    advance(app_state, get_frame_time());
}

/// 按本帧输入快照推进一帧应用状态
pub fn advance(app_state: &mut AppState, dt: f32) {
    // 调试覆盖层开关（全局可用）
    if app_state.ui_context.debug_toggle_pressed {
        app_state.show_debug = !app_state.show_debug;
        debug!(enabled = app_state.show_debug, "切换调试覆盖层");
    }

    // 窗口拉回桌面宽度时移动端菜单没有载体，直接收起
    if app_state.ui_context.is_desktop() && app_state.navigator.menu_open() {
        app_state.navigator.close_menu();
    }

    // 导航栏最先更新，占用栏内与展开菜单上的指针
    let nav_target = app_state.navbar.update(
        &mut app_state.ui_context,
        &mut app_state.navigator,
        app_state.scroll.offset(),
    );

    // 滚轮
    app_state.scroll.update(&app_state.ui_context);

    // 当前页面
    let page_target = match app_state.navigator.current() {
        PageId::Home => app_state
            .home
            .update(&app_state.ui_context, &app_state.scroll, dt),
        PageId::About => app_state
            .about
            .update(&app_state.ui_context, &app_state.scroll, dt),
        PageId::Programs => app_state
            .programs
            .update(&app_state.ui_context, &app_state.scroll, dt),
        PageId::Events => app_state
            .events
            .update(&app_state.ui_context, &app_state.scroll, dt),
        PageId::Resources => app_state
            .resources
            .update(&app_state.ui_context, &app_state.scroll, dt),
        PageId::Join => app_state
            .join
            .update(&mut app_state.ui_context, &app_state.scroll, dt),
    };

    // 布局高度回写滚动边界（页脚接在页面内容之后）
    let content_height = app_state.page_content_height();
    app_state.scroll.set_content_height(
        content_height + app_state.footer.height(&app_state.ui_context),
        app_state.ui_context.screen_height,
    );

    // 页脚快捷链接
    let footer_target =
        app_state
            .footer
            .update(&app_state.ui_context, &app_state.scroll, content_height);

    // 同帧多处请求跳转时导航栏优先
    if let Some(target) = nav_target.or(page_target).or(footer_target) {
        request_page(app_state, target);
    }
}

/// 处理一次页面跳转请求：驱动导航器并执行它发回的命令
pub fn request_page(app_state: &mut AppState, target: PageId) {
    let previous = app_state.navigator.current();
    debug!(from = %previous, to = %target, "页面跳转");

    let commands = app_state.navigator.transition(target);
    for command in commands {
        match command {
            NavCommand::ResetScroll => app_state.scroll.scroll_to_top(),
            NavCommand::MountPage(page) => mount_page(app_state, previous, page),
        }
    }
}

/// 重挂载：前一页卸载（释放揭示观察、清空表单），目标页回到
/// 待初始化状态，下一帧从头开始入场
fn mount_page(app_state: &mut AppState, previous: PageId, page: PageId) {
    match previous {
        PageId::Home => app_state.home.unmount(),
        PageId::About => app_state.about.unmount(),
        PageId::Programs => app_state.programs.unmount(),
        PageId::Events => app_state.events.unmount(),
        PageId::Resources => app_state.resources.unmount(),
        PageId::Join => app_state.join.unmount(),
    }

    match page {
        PageId::Home => app_state.home.mark_needs_init(),
        PageId::About => app_state.about.mark_needs_init(),
        PageId::Programs => app_state.programs.mark_needs_init(),
        PageId::Events => app_state.events.mark_needs_init(),
        PageId::Resources => app_state.resources.mark_needs_init(),
        PageId::Join => app_state.join.mark_needs_init(),
    }
}
