//! # 导航栏
//!
//! 固定在窗口顶部的站点导航：品牌区、页面链接、Join Us 按钮。
//! 窄屏折叠成汉堡菜单，菜单展开状态由 site-core 的 `Navigator`
//! 持有，页面切换时随切换命令一起收起。
//!
//! 导航栏先于页面更新。指针落在栏内或展开的菜单上时标记占用，
//! 挡住对半透明栏下方首屏内容的穿透点击。

use macroquad::prelude::*;
use site_core::{Icon, Navigator, PageId, BRAND_GRADIENT};
use tracing::debug;

use crate::renderer::text::estimate_text_width;
use crate::renderer::TextRenderer;
use crate::ui::card::draw_icon_chip;
use crate::ui::{with_alpha, Button, UiContext};

/// 滚动超过该距离后导航栏加深底色并带出投影
pub const NAVBAR_RESTYLE_THRESHOLD: f32 = 50.0;

/// 移动端菜单行高
const MENU_ROW_HEIGHT: f32 = 44.0;
/// 桌面链接间距
const LINK_GAP: f32 = 32.0;

/// 顶部导航栏
pub struct NavBar {
    join_button: Button,
    scrolled: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            join_button: Button::new(PageId::Join.title()),
            scrolled: false,
        }
    }

    /// 是否已进入滚动后的加深样式
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    fn bar_rect(ctx: &UiContext) -> Rect {
        Rect::new(0.0, 0.0, ctx.screen_width, ctx.theme.navbar_height)
    }

    fn overlay_rect(ctx: &UiContext) -> Rect {
        Rect::new(
            0.0,
            ctx.theme.navbar_height,
            ctx.screen_width,
            PageId::ALL.len() as f32 * MENU_ROW_HEIGHT + 16.0,
        )
    }

    fn brand_rect(ctx: &UiContext) -> Rect {
        let area = ctx.content_area();
        let text_w = estimate_text_width("NAISI", ctx.theme.font_size_normal);
        Rect::new(area.x, 0.0, 40.0 + 12.0 + text_w, ctx.theme.navbar_height)
    }

    fn hamburger_rect(ctx: &UiContext) -> Rect {
        let area = ctx.content_area();
        Rect::new(
            area.x + area.w - 44.0,
            (ctx.theme.navbar_height - 44.0) / 2.0,
            44.0,
            44.0,
        )
    }

    fn link_font_size(ctx: &UiContext) -> f32 {
        ctx.theme.font_size_small + 2.0
    }

    fn join_pill_width(ctx: &UiContext) -> f32 {
        estimate_text_width(PageId::Join.title(), Self::link_font_size(ctx)) + 44.0
    }

    /// 桌面链接的命中矩形，右对齐排在 Join 按钮左侧
    fn desktop_link_rects(ctx: &UiContext) -> Vec<(PageId, Rect)> {
        let area = ctx.content_area();
        let font_size = Self::link_font_size(ctx);

        let widths: Vec<(PageId, f32)> = PageId::ALL
            .iter()
            .copied()
            .filter(PageId::is_nav_link)
            .map(|page| (page, estimate_text_width(page.title(), font_size)))
            .collect();
        let total: f32 = widths.iter().map(|(_, w)| w + LINK_GAP).sum();

        let mut x = area.x + area.w - Self::join_pill_width(ctx) - total;
        widths
            .into_iter()
            .map(|(page, w)| {
                let rect = Rect::new(x, 0.0, w, ctx.theme.navbar_height);
                x += w + LINK_GAP;
                (page, rect)
            })
            .collect()
    }

    /// 处理本帧输入，返回用户请求跳转的页面
    pub fn update(
        &mut self,
        ctx: &mut UiContext,
        navigator: &mut Navigator,
        scroll_offset: f32,
    ) -> Option<PageId> {
        self.scrolled = scroll_offset > NAVBAR_RESTYLE_THRESHOLD;

        let mut target = None;

        // 品牌区点击回首页
        if ctx.mouse_just_released && ctx.mouse_in_rect(Self::brand_rect(ctx)) {
            target = Some(PageId::Home);
        }

        if ctx.is_desktop() {
            for (page, rect) in Self::desktop_link_rects(ctx) {
                if ctx.mouse_just_released && ctx.mouse_in_rect(rect) {
                    target = Some(page);
                }
            }

            let area = ctx.content_area();
            let pill_w = Self::join_pill_width(ctx);
            self.join_button.rect = Rect::new(
                area.x + area.w - pill_w,
                (ctx.theme.navbar_height - 40.0) / 2.0,
                pill_w,
                40.0,
            );
            if self.join_button.update(ctx) {
                target = Some(PageId::Join);
            }
        } else {
            if ctx.mouse_just_released && ctx.mouse_in_rect(Self::hamburger_rect(ctx)) {
                navigator.toggle_menu();
                debug!(open = navigator.menu_open(), "切换移动端菜单");
            } else if navigator.menu_open() {
                let overlay = Self::overlay_rect(ctx);
                if ctx.mouse_just_released && ctx.mouse_in_rect(overlay) {
                    let rel = ctx.mouse_pos.y - overlay.y - 8.0;
                    if rel >= 0.0 {
                        if let Some(page) = PageId::ALL.get((rel / MENU_ROW_HEIGHT) as usize) {
                            target = Some(*page);
                        }
                    }
                }
            }
        }

        // 栏体与展开的菜单独占指针
        let over_bar = ctx.point_in_rect(ctx.mouse_pos, Self::bar_rect(ctx));
        let over_menu = !ctx.is_desktop()
            && navigator.menu_open()
            && ctx.point_in_rect(ctx.mouse_pos, Self::overlay_rect(ctx));
        if over_bar || over_menu {
            ctx.consume_pointer();
        }

        target
    }

    /// 绘制导航栏。放在页面内容之后调用，压住滚动上来的区块。
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, navigator: &Navigator) {
        let theme = &ctx.theme;
        let bar = Self::bar_rect(ctx);

        // 顶部微透明，滚动后加深并带投影
        let bg_alpha = if self.scrolled { 0.97 } else { 0.88 };
        draw_rectangle(bar.x, bar.y, bar.w, bar.h, with_alpha(theme.bg_primary, bg_alpha));
        if self.scrolled {
            draw_rectangle(0.0, bar.h, bar.w, 3.0, Color::new(0.0, 0.0, 0.0, 0.07));
            draw_line(0.0, bar.h, bar.w, bar.h, 1.0, theme.divider);
        }

        // 品牌区
        let area = ctx.content_area();
        draw_icon_chip(ctx, Icon::Shield, BRAND_GRADIENT, area.x, (bar.h - 40.0) / 2.0, 40.0, 1.0);
        text_renderer.draw_ui_text(
            "NAISI",
            area.x + 52.0,
            (bar.h + theme.font_size_normal * 0.7) / 2.0,
            theme.font_size_normal,
            theme.text_primary,
        );

        if ctx.is_desktop() {
            let font_size = Self::link_font_size(ctx);
            for (page, rect) in Self::desktop_link_rects(ctx) {
                let color = if navigator.current() == page {
                    theme.accent
                } else if ctx.point_in_rect(ctx.mouse_pos, rect) {
                    theme.accent_hover
                } else {
                    theme.text_secondary
                };
                text_renderer.draw_ui_text(
                    page.title(),
                    rect.x,
                    (bar.h + font_size * 0.7) / 2.0,
                    font_size,
                    color,
                );
            }
            self.join_button.draw(ctx, text_renderer);
        } else {
            let rect = Self::hamburger_rect(ctx);
            let icon = if navigator.menu_open() { Icon::Close } else { Icon::Menu };
            crate::ui::draw_icon(icon, rect.x + 10.0, rect.y + 10.0, 24.0, theme.text_primary);

            if navigator.menu_open() {
                self.draw_overlay(ctx, text_renderer, navigator);
            }
        }
    }

    /// 移动端展开菜单
    fn draw_overlay(&self, ctx: &UiContext, text_renderer: &TextRenderer, navigator: &Navigator) {
        let theme = &ctx.theme;
        let overlay = Self::overlay_rect(ctx);
        let area = ctx.content_area();

        draw_rectangle(overlay.x, overlay.y, overlay.w, overlay.h, theme.bg_primary);
        draw_line(
            overlay.x,
            overlay.y + overlay.h,
            overlay.x + overlay.w,
            overlay.y + overlay.h,
            1.0,
            theme.divider,
        );

        let font_size = Self::link_font_size(ctx);
        for (i, page) in PageId::ALL.iter().enumerate() {
            let row = Rect::new(
                overlay.x,
                overlay.y + 8.0 + i as f32 * MENU_ROW_HEIGHT,
                overlay.w,
                MENU_ROW_HEIGHT,
            );
            let is_current = navigator.current() == *page;
            if is_current || ctx.point_in_rect(ctx.mouse_pos, row) {
                draw_rectangle(row.x, row.y, row.w, row.h, theme.bg_secondary);
            }
            // Join 行与当前页共用强调色
            let color = if is_current || *page == PageId::Join {
                theme.accent
            } else {
                theme.text_secondary
            };
            text_renderer.draw_ui_text(
                page.title(),
                area.x + 8.0,
                row.y + (MENU_ROW_HEIGHT + font_size * 0.7) / 2.0,
                font_size,
                color,
            );
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn desktop_ctx() -> UiContext {
        let mut ctx = UiContext::new(Theme::light());
        ctx.screen_width = 1280.0;
        ctx.screen_height = 800.0;
        ctx
    }

    fn mobile_ctx() -> UiContext {
        let mut ctx = UiContext::new(Theme::light());
        ctx.screen_width = 480.0;
        ctx.screen_height = 800.0;
        ctx
    }

    fn release_at(ctx: &mut UiContext, rect: Rect) {
        ctx.mouse_pos = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
        ctx.mouse_just_released = true;
    }

    #[test]
    fn test_restyle_threshold() {
        let mut navbar = NavBar::new();
        let mut navigator = Navigator::new(PageId::Home);
        let mut ctx = desktop_ctx();

        navbar.update(&mut ctx, &mut navigator, 0.0);
        assert!(!navbar.is_scrolled());

        // 恰好在阈值上仍是顶部样式
        let mut ctx = desktop_ctx();
        navbar.update(&mut ctx, &mut navigator, NAVBAR_RESTYLE_THRESHOLD);
        assert!(!navbar.is_scrolled());

        let mut ctx = desktop_ctx();
        navbar.update(&mut ctx, &mut navigator, NAVBAR_RESTYLE_THRESHOLD + 1.0);
        assert!(navbar.is_scrolled());
    }

    #[test]
    fn test_brand_click_goes_home() {
        let mut navbar = NavBar::new();
        let mut navigator = Navigator::new(PageId::Events);
        let mut ctx = desktop_ctx();

        let rect = NavBar::brand_rect(&ctx);
        release_at(&mut ctx, rect);
        assert_eq!(navbar.update(&mut ctx, &mut navigator, 0.0), Some(PageId::Home));
    }

    #[test]
    fn test_desktop_link_click() {
        let mut navbar = NavBar::new();
        let mut navigator = Navigator::new(PageId::Home);
        let mut ctx = desktop_ctx();

        let rects = NavBar::desktop_link_rects(&ctx);
        let (page, rect) = rects
            .iter()
            .find(|(page, _)| *page == PageId::Programs)
            .copied()
            .unwrap();
        release_at(&mut ctx, rect);
        assert_eq!(navbar.update(&mut ctx, &mut navigator, 0.0), Some(page));
    }

    #[test]
    fn test_join_pill_click() {
        let mut navbar = NavBar::new();
        let mut navigator = Navigator::new(PageId::Home);

        // 先空跑一帧填好按钮位置
        let mut ctx = desktop_ctx();
        navbar.update(&mut ctx, &mut navigator, 0.0);

        let mut ctx = desktop_ctx();
        release_at(&mut ctx, navbar.join_button.rect);
        assert_eq!(navbar.update(&mut ctx, &mut navigator, 0.0), Some(PageId::Join));
    }

    #[test]
    fn test_hamburger_toggles_menu() {
        let mut navbar = NavBar::new();
        let mut navigator = Navigator::new(PageId::Home);

        let mut ctx = mobile_ctx();
        let rect = NavBar::hamburger_rect(&ctx);
        release_at(&mut ctx, rect);
        assert_eq!(navbar.update(&mut ctx, &mut navigator, 0.0), None);
        assert!(navigator.menu_open());

        let mut ctx = mobile_ctx();
        let rect = NavBar::hamburger_rect(&ctx);
        release_at(&mut ctx, rect);
        navbar.update(&mut ctx, &mut navigator, 0.0);
        assert!(!navigator.menu_open());
    }

    #[test]
    fn test_overlay_row_click_requests_page() {
        let mut navbar = NavBar::new();
        let mut navigator = Navigator::new(PageId::Home);
        navigator.toggle_menu();

        let mut ctx = mobile_ctx();
        let overlay = NavBar::overlay_rect(&ctx);
        // 第三行是 Programs
        ctx.mouse_pos = Vec2::new(100.0, overlay.y + 8.0 + 2.0 * MENU_ROW_HEIGHT + 10.0);
        ctx.mouse_just_released = true;
        assert_eq!(navbar.update(&mut ctx, &mut navigator, 0.0), Some(PageId::Programs));
    }

    #[test]
    fn test_pointer_consumed_over_bar_and_menu() {
        let mut navbar = NavBar::new();
        let mut navigator = Navigator::new(PageId::Home);

        let mut ctx = desktop_ctx();
        ctx.mouse_pos = Vec2::new(600.0, 30.0);
        navbar.update(&mut ctx, &mut navigator, 0.0);
        assert!(ctx.pointer_consumed);

        // 菜单展开时覆盖区域同样占用
        navigator.toggle_menu();
        let mut ctx = mobile_ctx();
        ctx.mouse_pos = Vec2::new(200.0, NavBar::overlay_rect(&ctx).y + 20.0);
        navbar.update(&mut ctx, &mut navigator, 0.0);
        assert!(ctx.pointer_consumed);

        // 页面腹地不占用
        let mut ctx = desktop_ctx();
        ctx.mouse_pos = Vec2::new(600.0, 500.0);
        navbar.update(&mut ctx, &mut navigator, 0.0);
        assert!(!ctx.pointer_consumed);
    }
}
