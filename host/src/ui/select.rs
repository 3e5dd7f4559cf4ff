//! # 下拉选择框
//!
//! 背景身份选择用的下拉框。它是非受控组件：选中项只存在
//! 组件自身，表单提交与重置都不会碰它，页面卸载时随组件
//! 一起消失。

use macroquad::prelude::*;

use super::{draw_rounded_rect, draw_rounded_rect_lines, UiContext};
use crate::renderer::TextRenderer;

/// 下拉选项行高
pub const OPTION_ROW_HEIGHT: f32 = 40.0;

/// 下拉选择框
pub struct SelectBox {
    /// 未选择时显示的占位文案
    pub placeholder: &'static str,
    options: &'static [&'static str],
    selected: Option<usize>,
    open: bool,
}

impl SelectBox {
    pub fn new(placeholder: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            placeholder,
            options,
            selected: None,
            open: false,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 当前显示文案：选中项或占位
    pub fn label(&self) -> &'static str {
        match self.selected {
            Some(index) => self.options[index],
            None => self.placeholder,
        }
    }

    /// 展开列表的屏幕区域
    pub fn dropdown_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x,
            rect.y + rect.h + 4.0,
            rect.w,
            self.options.len() as f32 * OPTION_ROW_HEIGHT,
        )
    }

    /// 处理展开、选择与收起，返回选中项是否变化。
    /// 展开期间独占列表区域的指针，挡住下方组件。
    pub fn update(&mut self, ctx: &mut UiContext, rect: Rect) -> bool {
        let mut changed = false;

        if self.open {
            let dropdown = self.dropdown_rect(rect);

            if ctx.escape_pressed {
                self.open = false;
            } else if ctx.mouse_just_released {
                if ctx.mouse_in_rect(dropdown) {
                    let index = ((ctx.mouse_pos.y - dropdown.y) / OPTION_ROW_HEIGHT) as usize;
                    if index < self.options.len() && self.selected != Some(index) {
                        self.selected = Some(index);
                        changed = true;
                    }
                }
                // 任何一次释放都会收起：选中、点回框上或点到别处
                self.open = false;
            }

            if ctx.point_in_rect(ctx.mouse_pos, dropdown) {
                ctx.consume_pointer();
            }
        } else if ctx.mouse_just_released && ctx.mouse_in_rect(rect) {
            self.open = true;
        }

        changed
    }

    /// 绘制选择框本体
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, rect: Rect) {
        let theme = &ctx.theme;

        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, theme.corner_radius, theme.bg_primary);
        let (border, thickness) = if self.open {
            (theme.accent, 2.0)
        } else {
            (theme.outline, 1.0)
        };
        draw_rounded_rect_lines(rect.x, rect.y, rect.w, rect.h, theme.corner_radius, thickness, border);

        let font_size = theme.font_size_small + 2.0;
        let color = if self.selected.is_some() {
            theme.text_primary
        } else {
            theme.text_muted
        };
        text_renderer.draw_ui_text(
            self.label(),
            rect.x + 14.0,
            rect.y + (rect.h + font_size * 0.7) / 2.0,
            font_size,
            color,
        );

        let icon_size = 16.0;
        super::icon::draw_icon(
            site_core::Icon::ChevronDown,
            rect.x + rect.w - icon_size - 14.0,
            rect.y + (rect.h - icon_size) / 2.0,
            icon_size,
            theme.text_muted,
        );
    }

    /// 绘制展开列表。列表覆盖在其他组件之上，
    /// 调用方应把它放在本页绘制顺序的最后。
    pub fn draw_dropdown(&self, ctx: &UiContext, text_renderer: &TextRenderer, rect: Rect) {
        if !self.open {
            return;
        }
        let theme = &ctx.theme;
        let dropdown = self.dropdown_rect(rect);

        draw_rounded_rect(
            dropdown.x,
            dropdown.y + 3.0,
            dropdown.w,
            dropdown.h,
            theme.corner_radius,
            Color::new(0.0, 0.0, 0.0, 0.1),
        );
        draw_rounded_rect(dropdown.x, dropdown.y, dropdown.w, dropdown.h, theme.corner_radius, theme.bg_primary);
        draw_rounded_rect_lines(dropdown.x, dropdown.y, dropdown.w, dropdown.h, theme.corner_radius, 1.0, theme.divider);

        let font_size = theme.font_size_small + 2.0;
        for (i, option) in self.options.iter().enumerate() {
            let row = Rect::new(dropdown.x, dropdown.y + i as f32 * OPTION_ROW_HEIGHT, dropdown.w, OPTION_ROW_HEIGHT);
            if ctx.point_in_rect(ctx.mouse_pos, row) {
                draw_rectangle(row.x + 2.0, row.y, row.w - 4.0, row.h, theme.bg_secondary);
            }
            let color = if self.selected == Some(i) {
                theme.accent
            } else {
                theme.text_secondary
            };
            text_renderer.draw_ui_text(
                option,
                row.x + 14.0,
                row.y + (OPTION_ROW_HEIGHT + font_size * 0.7) / 2.0,
                font_size,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    const OPTIONS: [&str; 3] = ["Student", "Researcher", "Other"];

    fn ctx_release_at(x: f32, y: f32) -> UiContext {
        let mut ctx = UiContext::new(Theme::light());
        ctx.screen_width = 1280.0;
        ctx.screen_height = 800.0;
        ctx.mouse_pos = Vec2::new(x, y);
        ctx.mouse_just_released = true;
        ctx
    }

    #[test]
    fn test_open_select_close_cycle() {
        let mut select = SelectBox::new("Select your background", &OPTIONS);
        let rect = Rect::new(100.0, 100.0, 300.0, 48.0);
        assert_eq!(select.label(), "Select your background");

        // 点击框体展开
        let mut ctx = ctx_release_at(150.0, 120.0);
        assert!(!select.update(&mut ctx, rect));
        assert!(select.is_open());

        // 点击第二行选中并收起
        let dropdown = select.dropdown_rect(rect);
        let mut ctx = ctx_release_at(150.0, dropdown.y + OPTION_ROW_HEIGHT * 1.5);
        assert!(select.update(&mut ctx, rect));
        assert!(!select.is_open());
        assert_eq!(select.selected(), Some(1));
        assert_eq!(select.label(), "Researcher");
    }

    #[test]
    fn test_click_away_closes_without_selecting() {
        let mut select = SelectBox::new("Select your background", &OPTIONS);
        let rect = Rect::new(100.0, 100.0, 300.0, 48.0);

        let mut ctx = ctx_release_at(150.0, 120.0);
        select.update(&mut ctx, rect);
        assert!(select.is_open());

        let mut ctx = ctx_release_at(900.0, 700.0);
        assert!(!select.update(&mut ctx, rect));
        assert!(!select.is_open());
        assert_eq!(select.selected(), None);
    }

    #[test]
    fn test_escape_closes_dropdown() {
        let mut select = SelectBox::new("Select your background", &OPTIONS);
        let rect = Rect::new(100.0, 100.0, 300.0, 48.0);

        let mut ctx = ctx_release_at(150.0, 120.0);
        select.update(&mut ctx, rect);
        assert!(select.is_open());

        let mut ctx = UiContext::new(Theme::light());
        ctx.escape_pressed = true;
        select.update(&mut ctx, rect);
        assert!(!select.is_open());
    }

    #[test]
    fn test_open_dropdown_consumes_pointer_over_list() {
        let mut select = SelectBox::new("Select your background", &OPTIONS);
        let rect = Rect::new(100.0, 100.0, 300.0, 48.0);

        let mut ctx = ctx_release_at(150.0, 120.0);
        select.update(&mut ctx, rect);

        // 悬停在展开列表上，指针被占用
        let dropdown = select.dropdown_rect(rect);
        let mut ctx = UiContext::new(Theme::light());
        ctx.mouse_pos = Vec2::new(150.0, dropdown.y + 10.0);
        select.update(&mut ctx, rect);
        assert!(ctx.pointer_consumed);
    }
}
