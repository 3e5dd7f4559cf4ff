//! # 单行文本输入
//!
//! 输入框不持有文本，值由表单状态机保管；这里只负责焦点、
//! 编辑事件和绘制。每帧把当前值传进来，编辑结果用事件带出去。

use macroquad::prelude::*;

use super::{draw_rounded_rect, draw_rounded_rect_lines, UiContext};
use crate::renderer::text::estimate_text_width;
use crate::renderer::TextRenderer;

/// 输入框本帧产生的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// 无变化
    None,
    /// 文本被编辑成新值
    Edited(String),
    /// 焦点内按下回车
    Submitted,
}

/// 单行文本输入框
pub struct TextInput {
    /// 占位提示
    pub placeholder: &'static str,
    focused: bool,
}

impl TextInput {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            focused: false,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// 处理焦点与键入。`current` 是表单里的当前值。
    pub fn update(&mut self, ctx: &UiContext, rect: Rect, current: &str) -> TextInputEvent {
        // 按下鼠标决定焦点归属
        if ctx.mouse_just_pressed {
            self.focused = ctx.mouse_in_rect(rect);
        }
        if ctx.escape_pressed {
            self.focused = false;
        }

        if !self.focused {
            return TextInputEvent::None;
        }

        if ctx.enter_pressed {
            return TextInputEvent::Submitted;
        }

        let mut value = current.to_string();
        let mut changed = false;
        for c in &ctx.typed {
            value.push(*c);
            changed = true;
        }
        if ctx.backspace_pressed && value.pop().is_some() {
            changed = true;
        }

        if changed {
            TextInputEvent::Edited(value)
        } else {
            TextInputEvent::None
        }
    }

    /// 绘制输入框与当前值
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, rect: Rect, value: &str) {
        let theme = &ctx.theme;

        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, theme.corner_radius, theme.bg_primary);
        let (border, thickness) = if self.focused {
            (theme.accent, 2.0)
        } else {
            (theme.outline, 1.0)
        };
        draw_rounded_rect_lines(rect.x, rect.y, rect.w, rect.h, theme.corner_radius, thickness, border);

        let font_size = theme.font_size_small + 2.0;
        let text_x = rect.x + 14.0;
        let text_y = rect.y + (rect.h + font_size * 0.7) / 2.0;

        if value.is_empty() {
            text_renderer.draw_ui_text(self.placeholder, text_x, text_y, font_size, theme.text_muted);
        } else {
            text_renderer.draw_ui_text(value, text_x, text_y, font_size, theme.text_primary);
        }

        // 光标闪烁
        if self.focused && (ctx.time * 2.0).fract() < 0.5 {
            let caret_x = text_x + estimate_text_width(value, font_size);
            draw_line(
                caret_x,
                rect.y + rect.h * 0.25,
                caret_x,
                rect.y + rect.h * 0.75,
                1.5,
                theme.text_primary,
            );
        }
    }
}
