//! 渲染逻辑
//!
//! 一帧的绘制顺序决定层叠：页面内容在最底，页脚接在内容
//! 末尾，滚动条和导航栏压在上面，调试覆盖层最后。

use macroquad::prelude::*;
use site_core::{Band, PageId, REVEAL_BOTTOM_INSET};

use super::AppState;

/// 渲染函数（每帧调用，跟在 `update` 之后）
pub fn draw(app_state: &mut AppState) {
    let ctx = &app_state.ui_context;
    clear_background(ctx.theme.bg_primary);

    // 当前页面
    match app_state.navigator.current() {
        PageId::Home => app_state
            .home
            .draw(ctx, &app_state.text_renderer, &app_state.scroll),
        PageId::About => app_state
            .about
            .draw(ctx, &app_state.text_renderer, &app_state.scroll),
        PageId::Programs => app_state
            .programs
            .draw(ctx, &app_state.text_renderer, &app_state.scroll),
        PageId::Events => app_state
            .events
            .draw(ctx, &app_state.text_renderer, &app_state.scroll),
        PageId::Resources => app_state
            .resources
            .draw(ctx, &app_state.text_renderer, &app_state.scroll),
        PageId::Join => app_state
            .join
            .draw(ctx, &app_state.text_renderer, &app_state.scroll),
    }

    // 页脚接在页面内容末尾
    let content_height = app_state.page_content_height();
    app_state.footer.draw(
        ctx,
        &app_state.text_renderer,
        &app_state.scroll,
        content_height,
    );

    app_state.scroll.draw_scrollbar(ctx);

    // 导航栏压住滚动上来的内容
    app_state
        .navbar
        .draw(ctx, &app_state.text_renderer, &app_state.navigator);

    if app_state.show_bounds {
        draw_reveal_bounds(app_state);
    }
    if app_state.show_debug {
        draw_debug_overlay(app_state);
    }
}

/// 描出当前页各揭示区块的判定区间与触发线
fn draw_reveal_bounds(app_state: &AppState) {
    let ctx = &app_state.ui_context;
    let bands: Vec<Band> = match app_state.navigator.current() {
        PageId::Home => app_state.home.reveal_bands(ctx),
        PageId::About => app_state.about.reveal_bands(ctx),
        PageId::Programs => app_state.programs.reveal_bands(ctx),
        PageId::Events => app_state.events.reveal_bands(ctx),
        PageId::Resources => app_state.resources.reveal_bands(ctx),
        PageId::Join => app_state.join.reveal_bands(ctx),
    };

    for (i, band) in bands.iter().enumerate() {
        let top = band.top - app_state.scroll.offset();
        draw_rectangle_lines(
            4.0,
            top,
            ctx.screen_width - 8.0,
            band.height,
            2.0,
            Color::new(1.0, 0.3, 0.3, 0.8),
        );
        app_state.text_renderer.draw_ui_text(
            &format!("#{}", i),
            10.0,
            top + 18.0,
            16.0,
            Color::new(1.0, 0.3, 0.3, 1.0),
        );
    }

    // 底部内缩后的触发线
    let trigger_y = ctx.screen_height - REVEAL_BOTTOM_INSET;
    draw_line(
        0.0,
        trigger_y,
        ctx.screen_width,
        trigger_y,
        1.0,
        Color::new(1.0, 0.3, 0.3, 0.6),
    );
}

/// 调试覆盖层：帧率、当前页、滚动与揭示状态
pub fn draw_debug_overlay(app_state: &AppState) {
    let fps = get_fps();
    let page = app_state.navigator.current();
    let (revealed, total) = app_state.page_reveal_stats();
    let scroll = &app_state.scroll;

    let lines: Vec<(String, Color)> = vec![
        (format!("FPS: {}", fps), GREEN),
        (format!("页面: {} ({})", page.title(), page), GREEN),
        (
            format!(
                "滚动: {:.0} / {:.0}",
                scroll.offset(),
                scroll.content_height()
            ),
            WHITE,
        ),
        (
            format!("揭示: {}/{}", revealed, total),
            if revealed == total { GREEN } else { YELLOW },
        ),
        (
            format!(
                "菜单: {} | 指针占用: {}",
                app_state.navigator.menu_open(),
                app_state.ui_context.pointer_consumed
            ),
            WHITE,
        ),
    ];

    draw_rectangle(
        5.0,
        5.0,
        300.0,
        lines.len() as f32 * 22.0 + 20.0,
        Color::new(0.0, 0.0, 0.0, 0.85),
    );

    for (i, (line, color)) in lines.iter().enumerate() {
        let y = 25.0 + i as f32 * 22.0;
        app_state
            .text_renderer
            .draw_ui_text(line, 10.0, y, 16.0, *color);
    }
}
