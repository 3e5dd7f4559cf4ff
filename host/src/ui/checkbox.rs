//! # 复选行
//!
//! 兴趣清单用的整行点击复选框。勾选状态存在表单里，
//! 这里只做命中检测和绘制。

use macroquad::prelude::*;

use super::{draw_rounded_rect, draw_rounded_rect_lines, UiContext};
use crate::renderer::TextRenderer;

/// 复选行是否在本帧被点击（整行可点）
pub fn checkbox_row_clicked(ctx: &UiContext, rect: Rect) -> bool {
    ctx.mouse_just_released && ctx.mouse_in_rect(rect)
}

/// 绘制复选行：方框 + 标签，悬停时整行淡底
pub fn draw_checkbox_row(
    ctx: &UiContext,
    text_renderer: &TextRenderer,
    rect: Rect,
    label: &str,
    checked: bool,
) {
    let theme = &ctx.theme;

    if ctx.mouse_in_rect(rect) {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, theme.corner_radius, theme.bg_secondary);
    }

    let box_size = 20.0;
    let box_x = rect.x + 10.0;
    let box_y = rect.y + (rect.h - box_size) / 2.0;

    if checked {
        draw_rounded_rect(box_x, box_y, box_size, box_size, 4.0, theme.accent);
        super::icon::draw_icon(
            site_core::Icon::Check,
            box_x + 3.0,
            box_y + 3.0,
            box_size - 6.0,
            theme.text_inverse,
        );
    } else {
        draw_rounded_rect(box_x, box_y, box_size, box_size, 4.0, theme.bg_primary);
        draw_rounded_rect_lines(box_x, box_y, box_size, box_size, 4.0, 1.5, theme.outline);
    }

    let font_size = theme.font_size_small + 2.0;
    text_renderer.draw_ui_text(
        label,
        box_x + box_size + 12.0,
        rect.y + (rect.h + font_size * 0.7) / 2.0,
        font_size,
        theme.text_secondary,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    #[test]
    fn test_whole_row_is_clickable() {
        let mut ctx = UiContext::new(Theme::light());
        ctx.screen_width = 1280.0;
        ctx.screen_height = 800.0;
        let rect = Rect::new(100.0, 200.0, 400.0, 40.0);

        // 行尾远离方框的位置也算点中
        ctx.mouse_pos = Vec2::new(480.0, 220.0);
        ctx.mouse_just_released = true;
        assert!(checkbox_row_clicked(&ctx, rect));

        ctx.mouse_pos = Vec2::new(480.0, 260.0);
        assert!(!checkbox_row_clicked(&ctx, rect));
    }
}
