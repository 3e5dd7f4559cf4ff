//! # 卡片绘制
//!
//! 内容卡片的公共造型：白底圆角、柔和投影、悬停抬升，
//! 以及徽章、图标底座、图片占位横幅几个随处复用的小件。

use macroquad::prelude::*;
use site_core::{Gradient, Icon, Tone};

use super::{draw_rounded_gradient, draw_rounded_rect, mix, with_alpha, UiContext};
use crate::renderer::text::estimate_text_width;
use crate::renderer::TextRenderer;

/// 绘制卡片底板。悬停时上抬并加深投影。
pub fn draw_card(ctx: &UiContext, rect: Rect, hovered: bool, alpha: f32) {
    let theme = &ctx.theme;
    let lift = if hovered { 4.0 } else { 0.0 };
    let shadow_alpha = if hovered { 0.14 } else { 0.07 };
    let radius = theme.corner_radius_large;

    draw_rounded_rect(
        rect.x,
        rect.y + 4.0 - lift,
        rect.w,
        rect.h,
        radius,
        with_alpha(Color::new(0.0, 0.0, 0.0, shadow_alpha), alpha),
    );
    draw_rounded_rect(
        rect.x,
        rect.y - lift,
        rect.w,
        rect.h,
        radius,
        with_alpha(theme.bg_card, alpha),
    );
}

/// 徽章宽度（布局用，与绘制保持一致）
pub fn badge_width(text: &str, theme: &super::Theme) -> f32 {
    estimate_text_width(text, theme.font_size_small) + 20.0
}

/// 绘制徽章：淡色胶囊底 + 深色小字
pub fn draw_badge(
    ctx: &UiContext,
    text_renderer: &TextRenderer,
    text: &str,
    tone: Tone,
    x: f32,
    y: f32,
    alpha: f32,
) {
    let theme = &ctx.theme;
    let (bg, fg) = theme.badge_colors(tone);
    let h = theme.font_size_small + 10.0;
    let w = badge_width(text, theme);

    draw_rounded_rect(x, y, w, h, h / 2.0, with_alpha(bg, alpha));
    text_renderer.draw_ui_text(
        text,
        x + 10.0,
        y + h / 2.0 + theme.font_size_small * 0.35,
        theme.font_size_small,
        with_alpha(fg, alpha),
    );
}

/// 绘制图标底座：渐变圆角方块，图标居中反白
pub fn draw_icon_chip(
    ctx: &UiContext,
    icon: Icon,
    gradient: Gradient,
    x: f32,
    y: f32,
    size: f32,
    alpha: f32,
) {
    let theme = &ctx.theme;
    let (from, to) = theme.gradient_colors(gradient);
    draw_rounded_gradient(
        x,
        y,
        size,
        size,
        size * 0.25,
        with_alpha(from, alpha),
        with_alpha(to, alpha),
    );
    let inset = size * 0.25;
    super::icon::draw_icon(
        icon,
        x + inset,
        y + inset,
        size - inset * 2.0,
        with_alpha(theme.text_inverse, alpha),
    );
}

/// 绘制图片占位横幅：渐变底 + 居中大图标。
/// 站点不内嵌照片，活动与头图统一用这种占位。
pub fn draw_image_placeholder(
    ctx: &UiContext,
    rect: Rect,
    gradient: Gradient,
    icon: Icon,
    alpha: f32,
) {
    let theme = &ctx.theme;
    let (from, to) = theme.gradient_colors(gradient);
    draw_rounded_gradient(
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        theme.corner_radius,
        with_alpha(mix(from, theme.bg_primary, 0.15), alpha),
        with_alpha(mix(to, theme.bg_primary, 0.15), alpha),
    );
    let size = (rect.h * 0.45).min(rect.w * 0.3);
    super::icon::draw_icon(
        icon,
        rect.x + (rect.w - size) / 2.0,
        rect.y + (rect.h - size) / 2.0,
        size,
        with_alpha(Color::new(1.0, 1.0, 1.0, 0.85), alpha),
    );
}
