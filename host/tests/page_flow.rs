//! # 页面流转集成测试
//!
//! 测试 输入快照 → advance → Navigator/NavCommand → 页面挂载 的执行链路。
//! 不创建窗口：输入快照手工构造，`advance` 不读任何 macroquad 状态。

use host::app::{AppState, advance, request_page};
use host::config::AppConfig;
use site_core::PageId;

/// 创建桌面尺寸的测试应用
fn test_app(start_page: &str) -> AppState {
    let mut config = AppConfig::default();
    config.start_page = start_page.to_string();
    // 启动巡检走 tracing 输出，这里直接关掉
    config.debug.audit_on_start = false;

    let mut app = AppState::new(config);
    app.ui_context.screen_width = 1280.0;
    app.ui_context.screen_height = 800.0;
    app
}

/// 重置每帧的输入边沿（模拟 `UiContext::update` 的无窗口版本）
fn clear_input(app: &mut AppState) {
    let ctx = &mut app.ui_context;
    ctx.mouse_just_pressed = false;
    ctx.mouse_just_released = false;
    ctx.mouse_pressed = false;
    ctx.wheel_y = 0.0;
    ctx.typed.clear();
    ctx.backspace_pressed = false;
    ctx.enter_pressed = false;
    ctx.escape_pressed = false;
    ctx.debug_toggle_pressed = false;
    ctx.pointer_consumed = false;
}

/// 跑一帧无输入的更新
fn quiet_frame(app: &mut AppState, dt: f32) {
    clear_input(app);
    advance(app, dt);
}

#[test]
fn test_start_page_comes_from_config() {
    let mut app = test_app("events");
    assert_eq!(app.navigator.current(), PageId::Events);

    // 首帧后滚动边界已经建立：页面高度 + 页脚
    quiet_frame(&mut app, 0.016);
    let content = app.page_content_height();
    assert!(content > 800.0);
    assert!(app.scroll.content_height() > content);
}

#[test]
fn test_transition_resets_scroll_and_remounts() {
    let mut app = test_app("home");
    quiet_frame(&mut app, 0.016);

    // 1. 往下滚几格
    clear_input(&mut app);
    app.ui_context.wheel_y = -10.0;
    advance(&mut app, 0.016);
    assert!(app.scroll.offset() > 0.0);

    // 2. 跳转到 About：滚动回顶
    request_page(&mut app, PageId::About);
    assert_eq!(app.navigator.current(), PageId::About);
    assert_eq!(app.scroll.offset(), 0.0);

    // 3. 新页面从零开始揭示，首帧后首屏区块亮起
    assert_eq!(app.about.reveal_stats(), (0, 2));
    quiet_frame(&mut app, 0.016);
    assert_eq!(app.about.reveal_stats().0, 1);
}

#[test]
fn test_revisit_remounts_from_scratch() {
    let mut app = test_app("home");
    quiet_frame(&mut app, 0.016);

    // 1. 去 About 滚到底，两块区块全部揭示
    request_page(&mut app, PageId::About);
    quiet_frame(&mut app, 0.016);
    for _ in 0..50 {
        clear_input(&mut app);
        app.ui_context.wheel_y = -50.0;
        advance(&mut app, 0.016);
    }
    assert_eq!(app.about.reveal_stats(), (2, 2));

    // 2. 离开再回来：重挂载待命，首帧只亮回首屏一块
    request_page(&mut app, PageId::Home);
    request_page(&mut app, PageId::About);
    assert!(app.about.needs_init());
    quiet_frame(&mut app, 0.016);
    assert_eq!(app.about.reveal_stats(), (1, 2));
}

#[test]
fn test_same_page_transition_keeps_reveals() {
    let mut app = test_app("home");
    quiet_frame(&mut app, 0.016);

    // 滚到页面深处揭示更多区块
    for _ in 0..10 {
        clear_input(&mut app);
        app.ui_context.wheel_y = -20.0;
        advance(&mut app, 0.1);
    }
    let (revealed, total) = app.home.reveal_stats();
    assert!(revealed > 0);

    // 原地切换（导航栏点当前页）：回顶但不重挂载
    request_page(&mut app, PageId::Home);
    assert_eq!(app.scroll.offset(), 0.0);
    assert_eq!(app.home.reveal_stats(), (revealed, total));
    assert!(!app.home.needs_init());
}

#[test]
fn test_transition_closes_mobile_menu() {
    let mut app = test_app("home");
    app.ui_context.screen_width = 480.0;
    quiet_frame(&mut app, 0.016);

    app.navigator.toggle_menu();
    assert!(app.navigator.menu_open());

    // 菜单里点任何页面，切换同时收起菜单
    request_page(&mut app, PageId::Programs);
    assert!(!app.navigator.menu_open());
    assert_eq!(app.navigator.current(), PageId::Programs);
}

#[test]
fn test_widening_window_closes_menu() {
    let mut app = test_app("home");
    app.ui_context.screen_width = 480.0;
    quiet_frame(&mut app, 0.016);

    app.navigator.toggle_menu();
    assert!(app.navigator.menu_open());

    // 拉回桌面宽度后菜单没有载体，下一帧收起
    app.ui_context.screen_width = 1280.0;
    quiet_frame(&mut app, 0.016);
    assert!(!app.navigator.menu_open());
}

#[test]
fn test_leaving_join_resets_form() {
    let mut app = test_app("join");
    quiet_frame(&mut app, 0.016);

    // 1. 填好表单并提交
    app.join.form.set_email("student@nottingham.ac.uk");
    app.join.form.toggle_interest("Reading Groups");
    assert!(app.join.form.submit());
    assert!(app.join.form.submitted());

    // 2. 离开加入页：表单整体清空，倒计时一并取消
    request_page(&mut app, PageId::Home);
    assert_eq!(app.join.form.email(), "");
    assert!(app.join.form.interests().is_empty());
    assert!(!app.join.form.submitted());
    assert!(!app.join.form.reset_pending());
}

#[test]
fn test_join_countdown_runs_on_frame_time() {
    let mut app = test_app("join");
    quiet_frame(&mut app, 0.016);

    app.join.form.set_email("student@nottingham.ac.uk");
    assert!(app.join.form.submit());

    // 3 秒内逐帧推进，提交态保持
    for _ in 0..29 {
        quiet_frame(&mut app, 0.1);
    }
    assert!(app.join.form.submitted());

    // 跨过 3 秒整点后整体复位
    quiet_frame(&mut app, 0.2);
    assert!(!app.join.form.submitted());
    assert_eq!(app.join.form.email(), "");
}

#[test]
fn test_debug_toggle_flips_overlay() {
    let mut app = test_app("home");
    let initial = app.show_debug;

    clear_input(&mut app);
    app.ui_context.debug_toggle_pressed = true;
    advance(&mut app, 0.016);
    assert_eq!(app.show_debug, !initial);

    // 同一帧只翻转一次，下一帧无输入保持
    quiet_frame(&mut app, 0.016);
    assert_eq!(app.show_debug, !initial);
}

#[test]
fn test_scroll_clamps_to_footer_bottom() {
    let mut app = test_app("about");
    quiet_frame(&mut app, 0.016);

    // 大步滚动停在内容底部
    for _ in 0..50 {
        clear_input(&mut app);
        app.ui_context.wheel_y = -50.0;
        advance(&mut app, 0.016);
    }
    let max = app.scroll.content_height() - app.ui_context.screen_height;
    assert_eq!(app.scroll.offset(), max);
}
