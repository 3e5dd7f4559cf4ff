//! # 按钮组件

use macroquad::prelude::*;
use site_core::{Icon, BRAND_GRADIENT};

use super::{draw_rounded_gradient, draw_rounded_rect, draw_rounded_rect_lines, mix, with_alpha, UiContext};
use crate::renderer::text::estimate_text_width;

/// 按钮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// 按钮样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// 主要按钮（品牌渐变底，白字）
    Primary,
    /// 亮色按钮（白底深字，用在渐变横幅上）
    Light,
    /// 描边按钮（透明底白描边，用在渐变横幅上）
    Outline,
}

/// 按钮组件。位置由所属页面每帧布局时写入 `rect`。
pub struct Button {
    /// 按钮文本
    pub text: String,
    /// 按钮矩形区域（屏幕坐标）
    pub rect: Rect,
    /// 按钮样式
    pub style: ButtonStyle,
    /// 文本右侧的装饰图标
    pub icon: Option<Icon>,
    /// 胶囊造型；关闭后用主题圆角
    pub pill: bool,
    /// 当前状态
    state: ButtonState,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            style: ButtonStyle::Primary,
            icon: None,
            pill: true,
            state: ButtonState::Normal,
        }
    }

    /// 设置样式
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// 设置文本右侧图标
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// 改用主题圆角而不是胶囊
    pub fn with_square_corners(mut self) -> Self {
        self.pill = false;
        self
    }

    /// 按文本估宽：左右内边距之外再给图标留位
    pub fn preferred_width(&self, font_size: f32, padding_x: f32) -> f32 {
        let mut width = estimate_text_width(&self.text, font_size) + padding_x * 2.0;
        if self.icon.is_some() {
            width += font_size * 1.4;
        }
        width
    }

    /// 更新按钮状态并返回是否被点击
    pub fn update(&mut self, ctx: &UiContext) -> bool {
        let hovered = ctx.mouse_in_rect(self.rect);

        if hovered {
            if ctx.mouse_pressed {
                self.state = ButtonState::Pressed;
            } else {
                self.state = ButtonState::Hovered;
            }

            // 点击在鼠标释放时触发
            if ctx.mouse_just_released {
                return true;
            }
        } else {
            self.state = ButtonState::Normal;
        }

        false
    }

    /// 绘制按钮
    pub fn draw(&self, ctx: &UiContext, text_renderer: &crate::renderer::TextRenderer) {
        self.draw_alpha(ctx, text_renderer, 1.0);
    }

    /// 带整体透明度绘制（入场、揭示动画期间用）
    pub fn draw_alpha(&self, ctx: &UiContext, text_renderer: &crate::renderer::TextRenderer, alpha: f32) {
        let theme = &ctx.theme;
        let radius = if self.pill {
            self.rect.h / 2.0
        } else {
            theme.corner_radius
        };

        // 悬停和按下把底色向深处压一档
        let dim = match self.state {
            ButtonState::Normal => 0.0,
            ButtonState::Hovered => 0.12,
            ButtonState::Pressed => 0.24,
        };

        let text_color = match self.style {
            ButtonStyle::Primary => theme.text_inverse,
            ButtonStyle::Light => theme.accent_deep,
            ButtonStyle::Outline => theme.text_inverse,
        };
        let text_color = with_alpha(text_color, alpha);

        match self.style {
            ButtonStyle::Primary => {
                let (from, to) = theme.gradient_colors(BRAND_GRADIENT);
                let black = Color::new(0.0, 0.0, 0.0, 1.0);
                draw_rounded_gradient(
                    self.rect.x, self.rect.y, self.rect.w, self.rect.h, radius,
                    with_alpha(mix(from, black, dim), alpha),
                    with_alpha(mix(to, black, dim), alpha),
                );
            }
            ButtonStyle::Light => {
                let bg = mix(theme.bg_primary, theme.accent, dim * 0.5);
                draw_rounded_rect(
                    self.rect.x, self.rect.y, self.rect.w, self.rect.h, radius,
                    with_alpha(bg, alpha),
                );
            }
            ButtonStyle::Outline => {
                if self.state != ButtonState::Normal {
                    draw_rounded_rect(
                        self.rect.x, self.rect.y, self.rect.w, self.rect.h, radius,
                        with_alpha(Color::new(1.0, 1.0, 1.0, 0.15), alpha),
                    );
                }
                draw_rounded_rect_lines(
                    self.rect.x, self.rect.y, self.rect.w, self.rect.h, radius,
                    2.0,
                    with_alpha(theme.text_inverse, alpha),
                );
            }
        }

        // 字号跟随按钮高度，小胶囊配小字
        let font_size = (self.rect.h * 0.36).clamp(theme.font_size_small, theme.font_size_normal);
        let text_width = estimate_text_width(&self.text, font_size);
        let icon_extent = if self.icon.is_some() { font_size * 1.2 } else { 0.0 };
        let text_x = self.rect.x + (self.rect.w - text_width - icon_extent) / 2.0;
        let text_y = self.rect.y + (self.rect.h + font_size * 0.7) / 2.0;

        text_renderer.draw_ui_text(&self.text, text_x, text_y, font_size, text_color);

        if let Some(icon) = self.icon {
            super::icon::draw_icon(
                icon,
                text_x + text_width + font_size * 0.4,
                self.rect.y + (self.rect.h - font_size * 0.9) / 2.0,
                font_size * 0.9,
                text_color,
            );
        }
    }

    /// 获取当前状态
    pub fn state(&self) -> ButtonState {
        self.state
    }
}
