//! # 项目页
//!
//! 单个揭示区块：四张项目卡，两列栅格。卡片带顶部渐变条、
//! 时长信息、主题词标签和指向加入页的链接。

use macroquad::prelude::*;
use site_core::{Band, Catalog, Icon, PageId, Program};

use crate::renderer::text::{estimate_text_width, wrap_text, wrapped_height};
use crate::renderer::TextRenderer;
use crate::ui::card::draw_card;
use crate::ui::{
    draw_horizontal_gradient, draw_icon, draw_rounded_rect, with_alpha, ScrollView, UiContext,
};

use super::{
    card_width, draw_page_hero, grid_columns, grid_height, grid_layout, text_link_rect,
    SectionReveals, CARD_PAD, PAGE_HERO_HEIGHT,
};

/// 卡片顶部渐变条高度
const STRIP_H: f32 = 8.0;
/// 主题词标签之间的间距
const CHIP_GAP: f32 = 8.0;

/// 项目页
pub struct ProgramsScreen {
    catalog: &'static Catalog,
    reveals: SectionReveals,
    needs_init: bool,
}

/// 项目页一帧的布局（文档坐标）
struct ProgramsLayout {
    section_top: f32,
    cards: Vec<Rect>,
    /// 每张卡里 "Learn More" 链接的命中矩形
    links: Vec<Rect>,
    section_bottom: f32,
    total_height: f32,
}

impl ProgramsLayout {
    fn section_band(&self) -> Band {
        Band::new(self.section_top, self.section_bottom - self.section_top)
    }
}

impl ProgramsScreen {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            reveals: SectionReveals::new(1),
            needs_init: true,
        }
    }

    /// 更新界面，点击卡片链接跳加入页
    pub fn update(&mut self, ctx: &UiContext, scroll: &ScrollView, dt: f32) -> Option<PageId> {
        if self.needs_init {
            // 重挂载从零开始揭示
            self.reveals = SectionReveals::new(1);
            self.needs_init = false;
        }
        let layout = self.layout(ctx);
        self.reveals
            .advance(&[layout.section_band()], &scroll.viewport(ctx), dt);

        if self.reveals.presentation(0).is_some() {
            for link in &layout.links {
                if ctx.mouse_just_released && ctx.mouse_in_rect(scroll.to_screen(*link)) {
                    return Some(PageId::Join);
                }
            }
        }
        None
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, scroll: &ScrollView) {
        let layout = self.layout(ctx);
        draw_page_hero(ctx, text_renderer, &self.catalog.programs.hero, scroll.offset());

        if !scroll.band_on_screen(ctx, &layout.section_band()) {
            return;
        }
        let Some((alpha, rise)) = self.reveals.presentation(0) else {
            return;
        };

        for ((program, rect), link) in self
            .catalog
            .programs
            .programs
            .iter()
            .zip(&layout.cards)
            .zip(&layout.links)
        {
            let mut screen = scroll.to_screen(*rect);
            screen.y += rise;
            let mut link_screen = scroll.to_screen(*link);
            link_screen.y += rise;
            self.draw_program_card(ctx, text_renderer, program, screen, link_screen, alpha);
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

    fn layout(&self, ctx: &UiContext) -> ProgramsLayout {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        let programs = self.catalog.programs.programs;
        let pad = theme.section_padding;

        let section_top = theme.navbar_height + PAGE_HERO_HEIGHT;
        let grid_top = section_top + pad;
        let columns = grid_columns(ctx, 2, 2);
        let gap = theme.spacing_large;
        let col_w = card_width(area.w, columns, gap);

        // 等高卡片：取内容最高的一张
        let card_h = programs
            .iter()
            .map(|p| self.card_height(ctx, p, col_w))
            .fold(0.0_f32, f32::max);
        let cards = grid_layout(area.x, area.w, grid_top, programs.len(), columns, card_h, gap);

        // 链接钉在卡片底部，与内容高度无关
        let links = cards
            .iter()
            .map(|card| {
                let baseline = card.y + card.h - CARD_PAD;
                text_link_rect(
                    card.x + CARD_PAD,
                    baseline,
                    self.catalog.programs.card_link,
                    theme.font_size_small,
                )
            })
            .collect();

        let section_bottom = grid_top + grid_height(programs.len(), columns, card_h, gap) + pad;

        ProgramsLayout {
            section_top,
            cards,
            links,
            section_bottom,
            total_height: section_bottom,
        }
    }

    /// 单张项目卡的内容高度
    fn card_height(&self, ctx: &UiContext, program: &Program, col_w: f32) -> f32 {
        let theme = &ctx.theme;
        let inner_w = col_w - CARD_PAD * 2.0;
        let title_size = theme.font_size_normal;
        let body_size = theme.font_size_small + 2.0;

        let title_lines = wrap_text(program.title, title_size, inner_w).len();
        let desc_lines = wrap_text(program.description, body_size, inner_w).len();
        let (_, chips_h) = chip_flow(program.topics, theme.font_size_small, inner_w);

        STRIP_H
            + CARD_PAD
            + wrapped_height(title_lines, title_size)
            + 12.0
            + 24.0
            + 14.0
            + wrapped_height(desc_lines, body_size)
            + 16.0
            + chips_h
            + 18.0
            + theme.font_size_small * 1.5
            + CARD_PAD
    }

    /// 绘制一张项目卡
    fn draw_program_card(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        program: &Program,
        rect: Rect,
        link: Rect,
        alpha: f32,
    ) {
        let theme = &ctx.theme;
        let hovered = ctx.point_in_rect(ctx.mouse_pos, rect);
        draw_card(ctx, rect, hovered, alpha);

        // 顶部渐变条，避开圆角
        let lift = if hovered { 4.0 } else { 0.0 };
        let r = theme.corner_radius_large;
        let (from, to) = theme.gradient_colors(program.gradient);
        draw_horizontal_gradient(
            rect.x + r,
            rect.y - lift,
            rect.w - r * 2.0,
            STRIP_H,
            with_alpha(from, alpha),
            with_alpha(to, alpha),
        );

        let x = rect.x + CARD_PAD;
        let inner_w = rect.w - CARD_PAD * 2.0;
        let title_size = theme.font_size_normal;
        let body_size = theme.font_size_small + 2.0;

        let title_lines = wrap_text(program.title, title_size, inner_w);
        let mut y = rect.y + STRIP_H + CARD_PAD + title_size * 0.8;
        y = text_renderer.draw_lines(
            &title_lines,
            x,
            y,
            title_size,
            with_alpha(theme.text_primary, alpha),
        );
        y += 12.0 - title_size * 0.6;

        // 时长与投入并排一行
        let meta_size = theme.font_size_small;
        let meta_color = with_alpha(theme.text_muted, alpha);
        draw_icon(Icon::Clock, x, y - meta_size * 0.8, meta_size, meta_color);
        text_renderer.draw_ui_text(program.duration, x + meta_size + 8.0, y, meta_size, meta_color);
        let second_x =
            x + meta_size + 8.0 + estimate_text_width(program.duration, meta_size) + 24.0;
        draw_icon(
            Icon::Calendar,
            second_x,
            y - meta_size * 0.8,
            meta_size,
            meta_color,
        );
        text_renderer.draw_ui_text(
            program.commitment,
            second_x + meta_size + 8.0,
            y,
            meta_size,
            meta_color,
        );
        y += 24.0 + 14.0;

        let desc_lines = wrap_text(program.description, body_size, inner_w);
        y = text_renderer.draw_lines(
            &desc_lines,
            x,
            y,
            body_size,
            with_alpha(theme.text_secondary, alpha),
        );
        y += 16.0 - body_size * 0.4;

        // 主题词标签流式排布
        let (chips, _) = chip_flow(program.topics, theme.font_size_small, inner_w);
        for (topic, chip) in program.topics.iter().zip(&chips) {
            let chip_rect = Rect::new(x + chip.x, y + chip.y, chip.w, chip.h);
            draw_rounded_rect(
                chip_rect.x,
                chip_rect.y,
                chip_rect.w,
                chip_rect.h,
                chip_rect.h / 2.0,
                with_alpha(theme.bg_secondary, alpha),
            );
            text_renderer.draw_ui_text(
                topic,
                chip_rect.x + 10.0,
                chip_rect.y + chip_rect.h / 2.0 + theme.font_size_small * 0.35,
                theme.font_size_small,
                with_alpha(theme.text_secondary, alpha),
            );
        }

        // 链接固定在卡片底部
        let link_hovered = ctx.point_in_rect(ctx.mouse_pos, link);
        let link_color = if link_hovered {
            theme.accent_hover
        } else {
            theme.accent
        };
        text_renderer.draw_ui_text(
            self.catalog.programs.card_link,
            link.x,
            link.y + theme.font_size_small,
            theme.font_size_small,
            with_alpha(link_color, alpha),
        );
        draw_icon(
            Icon::ArrowRight,
            link.x + estimate_text_width(self.catalog.programs.card_link, theme.font_size_small)
                + 6.0,
            link.y + theme.font_size_small * 0.2,
            theme.font_size_small,
            with_alpha(link_color, alpha),
        );
    }
}

/// 把主题词标签排进给定宽度，返回相对矩形与总高
fn chip_flow(topics: &[&str], font_size: f32, max_w: f32) -> (Vec<Rect>, f32) {
    let chip_h = font_size + 10.0;
    let mut rects = Vec::with_capacity(topics.len());
    let mut x = 0.0;
    let mut y = 0.0;
    for topic in topics {
        let w = estimate_text_width(topic, font_size) + 20.0;
        if x > 0.0 && x + w > max_w {
            x = 0.0;
            y += chip_h + CHIP_GAP;
        }
        rects.push(Rect::new(x, y, w, chip_h));
        x += w + CHIP_GAP;
    }
    (rects, y + chip_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_ctx() -> UiContext {
        let mut ctx = UiContext::new(crate::ui::Theme::light());
        ctx.screen_width = 1280.0;
        ctx.screen_height = 800.0;
        ctx
    }

    #[test]
    fn test_cards_share_height() {
        let screen = ProgramsScreen::new(Catalog::builtin());
        let ctx = desktop_ctx();
        let layout = screen.layout(&ctx);

        assert_eq!(layout.cards.len(), 4);
        let h = layout.cards[0].h;
        assert!(layout.cards.iter().all(|c| c.h == h));
        // 链接都落在各自卡片内
        for (card, link) in layout.cards.iter().zip(&layout.links) {
            assert!(link.y > card.y);
            assert!(link.y + link.h <= card.y + card.h);
        }
    }

    #[test]
    fn test_link_click_navigates_to_join() {
        let mut screen = ProgramsScreen::new(Catalog::builtin());
        let ctx = desktop_ctx();
        let scroll = ScrollView::new();

        // 第一帧触发揭示
        screen.update(&ctx, &scroll, 2.0);
        assert_eq!(screen.reveal_stats(), (1, 1));

        let layout = screen.layout(&ctx);
        let link = scroll.to_screen(layout.links[0]);
        let mut click = desktop_ctx();
        click.mouse_pos = Vec2::new(link.x + 4.0, link.y + 4.0);
        click.mouse_just_released = true;
        assert_eq!(screen.update(&click, &scroll, 0.016), Some(PageId::Join));
    }

    #[test]
    fn test_chip_flow_wraps() {
        let topics = ["Machine Learning", "Alignment Theory", "Research Methods"];
        let (chips, total_h) = chip_flow(&topics, 16.0, 200.0);
        assert_eq!(chips.len(), 3);
        // 第一行放不下全部标签，总高超过一行
        assert!(total_h > 16.0 + 10.0);
        assert!(chips.iter().any(|c| c.y > 0.0));
    }
}
