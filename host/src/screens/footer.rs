//! # 页脚
//!
//! 深底四栏页脚：品牌简介、快捷链接、联络方式、合作伙伴。
//! 快捷链接走和导航栏相同的页面切换路径，其余两栏是纯展示。
//! 页脚画在每个页面内容的末尾，文档坐标的起点由当前页高度决定。

use macroquad::prelude::*;
use site_core::{Catalog, Icon, PageId, BRAND_GRADIENT};

use crate::renderer::text::{wrap_text, wrapped_height};
use crate::renderer::TextRenderer;
use crate::ui::card::draw_icon_chip;
use crate::ui::{ScrollView, UiContext};

/// 页脚上下留白
const PAD_V: f32 = 48.0;
/// 链接行高
const ROW_H: f32 = 26.0;

/// 站点页脚
pub struct Footer {
    catalog: &'static Catalog,
}

impl Footer {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// 四个栏目各自的内容高度
    fn group_heights(&self, ctx: &UiContext, col_w: f32) -> [f32; 4] {
        let theme = &ctx.theme;
        let small = theme.font_size_small;
        let footer = &self.catalog.footer;

        let blurb_lines = wrap_text(footer.blurb, small, col_w).len();
        let brand_h = 40.0 + theme.spacing + wrapped_height(blurb_lines, small);
        let links_h = |n: usize| small + 4.0 + theme.spacing + n as f32 * ROW_H;

        [
            brand_h,
            links_h(footer.quick_links.len()),
            links_h(footer.connect.len()),
            links_h(footer.partners.len()),
        ]
    }

    /// 栏体高度：桌面并排取最高，窄屏纵向堆叠
    fn body_height(&self, ctx: &UiContext) -> f32 {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        if ctx.is_desktop() {
            let col_w = (area.w - 3.0 * theme.spacing_large) / 4.0;
            self.group_heights(ctx, col_w)
                .into_iter()
                .fold(0.0, f32::max)
        } else {
            let heights = self.group_heights(ctx, area.w);
            heights.iter().sum::<f32>() + theme.spacing_large * 3.0
        }
    }

    /// 页脚总高（滚动边界用）
    pub fn height(&self, ctx: &UiContext) -> f32 {
        // 栏体 + 分隔线上下距 + 版权行
        PAD_V + self.body_height(ctx) + 32.0 + 32.0 + 24.0 + PAD_V
    }

    /// 快捷链接的文档坐标命中矩形
    fn quick_link_rects(&self, ctx: &UiContext, origin_y: f32) -> Vec<(PageId, Rect)> {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        let small = theme.font_size_small;

        let (x, w, top) = if ctx.is_desktop() {
            let col_w = (area.w - 3.0 * theme.spacing_large) / 4.0;
            (area.x + col_w + theme.spacing_large, col_w, origin_y + PAD_V)
        } else {
            let heights = self.group_heights(ctx, area.w);
            (
                area.x,
                area.w,
                origin_y + PAD_V + heights[0] + theme.spacing_large,
            )
        };

        let links_top = top + small + 4.0 + theme.spacing;
        self.catalog
            .footer
            .quick_links
            .iter()
            .enumerate()
            .map(|(i, page)| {
                (
                    *page,
                    Rect::new(x, links_top + i as f32 * ROW_H, w.min(200.0), ROW_H),
                )
            })
            .collect()
    }

    /// 快捷链接点击检测
    pub fn update(&self, ctx: &UiContext, scroll: &ScrollView, origin_y: f32) -> Option<PageId> {
        if !ctx.mouse_just_released {
            return None;
        }
        for (page, rect) in self.quick_link_rects(ctx, origin_y) {
            if ctx.mouse_in_rect(scroll.to_screen(rect)) {
                return Some(page);
            }
        }
        None
    }

    /// 绘制页脚
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, scroll: &ScrollView, origin_y: f32) {
        let theme = &ctx.theme;
        let top = origin_y - scroll.offset();
        if top > ctx.screen_height {
            return;
        }

        let height = self.height(ctx);
        draw_rectangle(0.0, top, ctx.screen_width, height, theme.bg_footer);

        let area = ctx.content_area();
        let footer = &self.catalog.footer;
        let small = theme.font_size_small;

        // 四个栏目
        if ctx.is_desktop() {
            let col_w = (area.w - 3.0 * theme.spacing_large) / 4.0;
            let step = col_w + theme.spacing_large;
            self.draw_brand_group(ctx, text_renderer, area.x, top + PAD_V, col_w);
            self.draw_link_group(ctx, text_renderer, footer.quick_title, area.x + step, top + PAD_V, origin_y, scroll);
            self.draw_text_group(ctx, text_renderer, footer.connect_title, footer.connect, area.x + 2.0 * step, top + PAD_V, true);
            self.draw_text_group(ctx, text_renderer, footer.partners_title, footer.partners, area.x + 3.0 * step, top + PAD_V, false);
        } else {
            let heights = self.group_heights(ctx, area.w);
            let mut y = top + PAD_V;
            self.draw_brand_group(ctx, text_renderer, area.x, y, area.w);
            y += heights[0] + theme.spacing_large;
            self.draw_link_group(ctx, text_renderer, footer.quick_title, area.x, y, origin_y, scroll);
            y += heights[1] + theme.spacing_large;
            self.draw_text_group(ctx, text_renderer, footer.connect_title, footer.connect, area.x, y, true);
            y += heights[2] + theme.spacing_large;
            self.draw_text_group(ctx, text_renderer, footer.partners_title, footer.partners, area.x, y, false);
        }

        // 分隔线与版权
        let divider_y = top + PAD_V + self.body_height(ctx) + 32.0;
        draw_line(area.x, divider_y, area.x + area.w, divider_y, 1.0, Color::new(1.0, 1.0, 1.0, 0.12));
        text_renderer.draw_text_centered(
            footer.copyright,
            ctx.screen_width / 2.0,
            divider_y + 32.0 + small,
            small,
            theme.footer_text_dim,
        );
    }

    fn draw_brand_group(&self, ctx: &UiContext, text_renderer: &TextRenderer, x: f32, top: f32, col_w: f32) {
        let theme = &ctx.theme;
        draw_icon_chip(ctx, Icon::Shield, BRAND_GRADIENT, x, top, 40.0, 1.0);
        text_renderer.draw_ui_text(
            self.catalog.brand_short,
            x + 52.0,
            top + 20.0 + theme.font_size_normal * 0.35,
            theme.font_size_normal,
            theme.footer_text,
        );

        let small = theme.font_size_small;
        let lines = wrap_text(self.catalog.footer.blurb, small, col_w);
        text_renderer.draw_lines(
            &lines,
            x,
            top + 40.0 + theme.spacing + small,
            small,
            theme.footer_text_dim,
        );
    }

    /// 快捷链接栏：行悬停提亮，点击在 `update` 里处理
    fn draw_link_group(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        title: &str,
        x: f32,
        top: f32,
        origin_y: f32,
        scroll: &ScrollView,
    ) {
        let theme = &ctx.theme;
        let small = theme.font_size_small;
        text_renderer.draw_ui_text(title, x, top + small, small + 2.0, theme.footer_text);

        for (page, rect) in self.quick_link_rects(ctx, origin_y) {
            let screen = scroll.to_screen(rect);
            let color = if ctx.point_in_rect(ctx.mouse_pos, screen) {
                theme.footer_text
            } else {
                theme.footer_text_dim
            };
            text_renderer.draw_ui_text(
                page.title(),
                screen.x,
                screen.y + small + 2.0,
                small,
                color,
            );
        }
    }

    /// 纯文字栏（联络方式、合作伙伴）
    fn draw_text_group(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        title: &str,
        items: &[&str],
        x: f32,
        top: f32,
        hoverable: bool,
    ) {
        let theme = &ctx.theme;
        let small = theme.font_size_small;
        text_renderer.draw_ui_text(title, x, top + small, small + 2.0, theme.footer_text);

        let links_top = top + small + 4.0 + theme.spacing;
        for (i, item) in items.iter().enumerate() {
            let y = links_top + i as f32 * ROW_H;
            let row = Rect::new(x, y, 200.0, ROW_H);
            let color = if hoverable && ctx.point_in_rect(ctx.mouse_pos, row) {
                theme.footer_text
            } else {
                theme.footer_text_dim
            };
            text_renderer.draw_ui_text(item, x, y + small + 2.0, small, color);
        }
    }
}
