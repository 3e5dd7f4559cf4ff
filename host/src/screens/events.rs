//! # 活动页
//!
//! 单个揭示区块：活动卡两列栅格。每张卡带占位图、类型徽章、
//! 日期时间地点三行信息。"Add to Calendar" 是纯展示的行内链接。

use macroquad::prelude::*;
use site_core::{Band, Catalog, EventEntry, Gradient, Icon, PageId, Tone};

use crate::renderer::text::{estimate_text_width, wrap_text, wrapped_height};
use crate::renderer::TextRenderer;
use crate::ui::card::{draw_badge, draw_card, draw_image_placeholder};
use crate::ui::{draw_icon, with_alpha, ScrollView, UiContext};

use super::{
    card_width, draw_meta_row, draw_page_hero, grid_columns, grid_height, grid_layout,
    SectionReveals, CARD_PAD, META_ROW_H, PAGE_HERO_HEIGHT,
};

/// 活动卡占位图高度
const IMAGE_H: f32 = 140.0;

/// 活动页
pub struct EventsScreen {
    catalog: &'static Catalog,
    reveals: SectionReveals,
    needs_init: bool,
}

/// 活动页一帧的布局（文档坐标）
struct EventsLayout {
    section_top: f32,
    cards: Vec<Rect>,
    section_bottom: f32,
    total_height: f32,
}

impl EventsLayout {
    fn section_band(&self) -> Band {
        Band::new(self.section_top, self.section_bottom - self.section_top)
    }
}

impl EventsScreen {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            reveals: SectionReveals::new(1),
            needs_init: true,
        }
    }

    /// 更新界面。活动页没有导航动作，只推进揭示。
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
        draw_page_hero(ctx, text_renderer, &self.catalog.events.hero, scroll.offset());

        if !scroll.band_on_screen(ctx, &layout.section_band()) {
            return;
        }
        let Some((alpha, rise)) = self.reveals.presentation(0) else {
            return;
        };

        for (event, rect) in self.catalog.events.events.iter().zip(&layout.cards) {
            let mut screen = scroll.to_screen(*rect);
            screen.y += rise;
            self.draw_event_card(ctx, text_renderer, event, screen, alpha);
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

    fn layout(&self, ctx: &UiContext) -> EventsLayout {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        let events = self.catalog.events.events;
        let pad = theme.section_padding;

        let section_top = theme.navbar_height + PAGE_HERO_HEIGHT;
        let grid_top = section_top + pad;
        let columns = grid_columns(ctx, 2, 2);
        let gap = theme.spacing_large;
        let col_w = card_width(area.w, columns, gap);

        let card_h = events
            .iter()
            .map(|e| self.card_height(ctx, e, col_w))
            .fold(0.0_f32, f32::max);
        let cards = grid_layout(area.x, area.w, grid_top, events.len(), columns, card_h, gap);
        let section_bottom = grid_top + grid_height(events.len(), columns, card_h, gap) + pad;

        EventsLayout {
            section_top,
            cards,
            section_bottom,
            total_height: section_bottom,
        }
    }

    /// 单张活动卡的内容高度
    fn card_height(&self, ctx: &UiContext, event: &EventEntry, col_w: f32) -> f32 {
        let theme = &ctx.theme;
        let inner_w = col_w - CARD_PAD * 2.0;
        let title_size = theme.font_size_normal;
        let body_size = theme.font_size_small + 2.0;

        let title_lines = wrap_text(event.title, title_size, inner_w).len();
        let desc_lines = wrap_text(event.description, body_size, inner_w).len();

        IMAGE_H
            + 16.0
            + theme.font_size_small + 10.0
            + 12.0
            + wrapped_height(title_lines, title_size)
            + 10.0
            + wrapped_height(desc_lines, body_size)
            + 12.0
            + 3.0 * META_ROW_H
            + 14.0
            + theme.font_size_small * 1.5
            + CARD_PAD
    }

    /// 绘制一张活动卡
    fn draw_event_card(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        event: &EventEntry,
        rect: Rect,
        alpha: f32,
    ) {
        let theme = &ctx.theme;
        let hovered = ctx.point_in_rect(ctx.mouse_pos, rect);
        draw_card(ctx, rect, hovered, alpha);

        draw_image_placeholder(
            ctx,
            Rect::new(rect.x + 8.0, rect.y + 8.0, rect.w - 16.0, IMAGE_H),
            kind_gradient(event.kind),
            Icon::Calendar,
            alpha,
        );

        let x = rect.x + CARD_PAD;
        let inner_w = rect.w - CARD_PAD * 2.0;
        let mut y = rect.y + IMAGE_H + 16.0;

        draw_badge(
            ctx,
            text_renderer,
            event.kind,
            kind_tone(event.kind),
            x,
            y,
            alpha,
        );
        y += theme.font_size_small + 10.0 + 12.0;

        let title_size = theme.font_size_normal;
        let title_lines = wrap_text(event.title, title_size, inner_w);
        y = text_renderer.draw_lines(
            &title_lines,
            x,
            y + title_size * 0.8,
            title_size,
            with_alpha(theme.text_primary, alpha),
        );
        y += 10.0 - title_size * 0.6;

        let body_size = theme.font_size_small + 2.0;
        let desc_lines = wrap_text(event.description, body_size, inner_w);
        y = text_renderer.draw_lines(
            &desc_lines,
            x,
            y,
            body_size,
            with_alpha(theme.text_secondary, alpha),
        );
        y += 12.0 - body_size * 0.4;

        y = draw_meta_row(ctx, text_renderer, Icon::Calendar, event.date, x, y, alpha);
        y = draw_meta_row(ctx, text_renderer, Icon::Clock, event.time, x, y, alpha);
        draw_meta_row(ctx, text_renderer, Icon::MapPin, event.location, x, y, alpha);

        // 行内链接钉在卡片底部，纯展示
        let link_baseline = rect.y + rect.h - CARD_PAD;
        let link_color = if hovered { theme.accent_hover } else { theme.accent };
        text_renderer.draw_ui_text(
            self.catalog.events.card_link,
            x,
            link_baseline,
            theme.font_size_small,
            with_alpha(link_color, alpha),
        );
        draw_icon(
            Icon::ExternalLink,
            x + estimate_text_width(self.catalog.events.card_link, theme.font_size_small) + 6.0,
            link_baseline - theme.font_size_small * 0.8,
            theme.font_size_small,
            with_alpha(link_color, alpha),
        );
    }
}

/// 活动类型对应的徽章色调
fn kind_tone(kind: &str) -> Tone {
    match kind {
        "Regular Meeting" => Tone::Blue,
        "Special Event" => Tone::Purple,
        "Workshop" => Tone::Green,
        "Social Event" => Tone::Orange,
        _ => Tone::Teal,
    }
}

/// 占位图渐变沿用徽章色调
fn kind_gradient(kind: &str) -> Gradient {
    let from = kind_tone(kind);
    let to = match from {
        Tone::Purple => Tone::Pink,
        Tone::Green => Tone::Teal,
        Tone::Orange => Tone::Red,
        _ => Tone::Cyan,
    };
    Gradient::new(from, to)
}
