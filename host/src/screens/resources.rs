//! # 资源页
//!
//! 单个揭示区块：资源卡三列栅格（中屏两列）。每张卡带图标底座、
//! 类型、标题和难度徽章。"Access Resource" 是纯展示的行内链接。

use macroquad::prelude::*;
use site_core::{Band, Catalog, Icon, PageId, ResourceEntry, BRAND_GRADIENT};

use crate::renderer::text::{estimate_text_width, wrap_text, wrapped_height};
use crate::renderer::TextRenderer;
use crate::ui::card::{badge_width, draw_badge, draw_card, draw_icon_chip};
use crate::ui::{draw_icon, with_alpha, ScrollView, UiContext};

use super::{
    card_width, draw_page_hero, grid_columns, grid_height, grid_layout, SectionReveals, CARD_PAD,
    CHIP_SIZE, PAGE_HERO_HEIGHT,
};

/// 资源页
pub struct ResourcesScreen {
    catalog: &'static Catalog,
    reveals: SectionReveals,
    needs_init: bool,
}

/// 资源页一帧的布局（文档坐标）
struct ResourcesLayout {
    section_top: f32,
    cards: Vec<Rect>,
    section_bottom: f32,
    total_height: f32,
}

impl ResourcesLayout {
    fn section_band(&self) -> Band {
        Band::new(self.section_top, self.section_bottom - self.section_top)
    }
}

impl ResourcesScreen {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            reveals: SectionReveals::new(1),
            needs_init: true,
        }
    }

    /// 更新界面。资源页没有导航动作，只推进揭示。
    pub fn update(&mut self, ctx: &UiContext, scroll: &ScrollView, dt: f32) -> Option<PageId> {
        if self.needs_init {
            // 重挂载从零开始揭示
            self.reveals = SectionReveals::new(1);
            self.needs_init = false;
        }
        let layout = self.layout(ctx);
        self.reveals
            .advance(&[layout.section_band()], &scroll.viewport(ctx), dt);
        None
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, scroll: &ScrollView) {
        let layout = self.layout(ctx);
        draw_page_hero(ctx, text_renderer, &self.catalog.resources.hero, scroll.offset());

        if !scroll.band_on_screen(ctx, &layout.section_band()) {
            return;
        }
        let Some((alpha, rise)) = self.reveals.presentation(0) else {
            return;
        };

        for (resource, rect) in self.catalog.resources.resources.iter().zip(&layout.cards) {
            let mut screen = scroll.to_screen(*rect);
            screen.y += rise;
            self.draw_resource_card(ctx, text_renderer, resource, screen, alpha);
        }
    }

    /// 页面总高（不含页脚）
    pub fn content_height(&self, ctx: &UiContext) -> f32 {
        self.layout(ctx).total_height
    }

    pub fn reveal_stats(&self) -> (usize, usize) {
        (self.reveals.revealed_count(), self.reveals.len())
    }

    pub fn reveal_bands(&self, ctx: &UiContext) -> Vec<Band> {
        vec![self.layout(ctx).section_band()]
    }

    pub fn unmount(&mut self) {
        self.reveals.release_all();
    }

    pub fn mark_needs_init(&mut self) {
        self.needs_init = true;
    }

    pub fn needs_init(&self) -> bool {
        self.needs_init
    }

    fn layout(&self, ctx: &UiContext) -> ResourcesLayout {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        let resources = self.catalog.resources.resources;
        let pad = theme.section_padding;

        let section_top = theme.navbar_height + PAGE_HERO_HEIGHT;
        let grid_top = section_top + pad;
        let columns = grid_columns(ctx, 2, 3);
        let gap = theme.spacing_large;
        let col_w = card_width(area.w, columns, gap);

        let card_h = resources
            .iter()
            .map(|r| self.card_height(ctx, r, col_w))
            .fold(0.0_f32, f32::max);
        let cards = grid_layout(area.x, area.w, grid_top, resources.len(), columns, card_h, gap);
        let section_bottom = grid_top + grid_height(resources.len(), columns, card_h, gap) + pad;

        ResourcesLayout {
            section_top,
            cards,
            section_bottom,
            total_height: section_bottom,
        }
    }

    /// 单张资源卡的内容高度
    fn card_height(&self, ctx: &UiContext, resource: &ResourceEntry, col_w: f32) -> f32 {
        let theme = &ctx.theme;
        let inner_w = col_w - CARD_PAD * 2.0;
        let title_size = theme.font_size_normal;
        let title_lines = wrap_text(resource.title, title_size, inner_w).len();

        CARD_PAD
            + CHIP_SIZE
            + 16.0
            + theme.font_size_small * 1.2
            + 6.0
            + wrapped_height(title_lines, title_size)
            + 18.0
            + theme.font_size_small * 1.5
            + CARD_PAD
    }

    /// 绘制一张资源卡
    fn draw_resource_card(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        resource: &ResourceEntry,
        rect: Rect,
        alpha: f32,
    ) {
        let theme = &ctx.theme;
        let hovered = ctx.point_in_rect(ctx.mouse_pos, rect);
        draw_card(ctx, rect, hovered, alpha);

        let x = rect.x + CARD_PAD;
        draw_icon_chip(
            ctx,
            resource.icon,
            BRAND_GRADIENT,
            x,
            rect.y + CARD_PAD,
            CHIP_SIZE,
            alpha,
        );

        // 难度徽章靠右，与图标底座同排
        let label = resource.level.label();
        let badge_w = badge_width(label, theme);
        draw_badge(
            ctx,
            text_renderer,
            label,
            resource.level.badge_tone(),
            rect.x + rect.w - CARD_PAD - badge_w,
            rect.y + CARD_PAD,
            alpha,
        );

        let kind_y = rect.y + CARD_PAD + CHIP_SIZE + 16.0 + theme.font_size_small * 0.8;
        text_renderer.draw_ui_text(
            resource.kind,
            x,
            kind_y,
            theme.font_size_small,
            with_alpha(theme.text_muted, alpha),
        );

        let title_size = theme.font_size_normal;
        let title_lines = wrap_text(resource.title, title_size, rect.w - CARD_PAD * 2.0);
        text_renderer.draw_lines(
            &title_lines,
            x,
            kind_y + theme.font_size_small * 0.4 + 6.0 + title_size * 0.8,
            title_size,
            with_alpha(theme.text_primary, alpha),
        );

        let link_baseline = rect.y + rect.h - CARD_PAD;
        let link_color = if hovered { theme.accent_hover } else { theme.accent };
        text_renderer.draw_ui_text(
            self.catalog.resources.card_link,
            x,
            link_baseline,
            theme.font_size_small,
            with_alpha(link_color, alpha),
        );
        draw_icon(
            Icon::ExternalLink,
            x + estimate_text_width(self.catalog.resources.card_link, theme.font_size_small) + 6.0,
            link_baseline - theme.font_size_small * 0.8,
            theme.font_size_small,
            with_alpha(link_color, alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_width(width: f32) -> UiContext {
        let mut ctx = UiContext::new(crate::ui::Theme::light());
        ctx.screen_width = width;
        ctx.screen_height = 800.0;
        ctx
    }

    #[test]
    fn test_column_count_follows_breakpoints() {
        let screen = ResourcesScreen::new(Catalog::builtin());

        // 宽屏三列：前三张同一行
        let wide = screen.layout(&ctx_with_width(1280.0));
        assert_eq!(wide.cards[0].y, wide.cards[2].y);
        assert!(wide.cards[3].y > wide.cards[0].y);

        // 中屏两列
        let mid = screen.layout(&ctx_with_width(1000.0));
        assert_eq!(mid.cards[0].y, mid.cards[1].y);
        assert!(mid.cards[2].y > mid.cards[1].y);

        // 窄屏一列
        let narrow = screen.layout(&ctx_with_width(600.0));
        assert!(narrow.cards[1].y > narrow.cards[0].y);
    }

    #[test]
    fn test_reveal_fires_on_first_frame() {
        let mut screen = ResourcesScreen::new(Catalog::builtin());
        let ctx = ctx_with_width(1280.0);
        let scroll = ScrollView::new();

        assert_eq!(screen.reveal_stats(), (0, 1));
        screen.update(&ctx, &scroll, 0.016);
        assert_eq!(screen.reveal_stats(), (1, 1));
    }
}
