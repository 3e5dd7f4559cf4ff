//! # 关于页
//!
//! 使命（两栏：正文 + 配图占位）与价值观（三张图标卡）两个揭示区块。

use macroquad::prelude::*;
use site_core::{Band, Catalog, Icon, PageId, BRAND_GRADIENT};

use crate::renderer::text::{wrap_text, wrapped_height};
use crate::renderer::TextRenderer;
use crate::ui::card::draw_image_placeholder;
use crate::ui::{with_alpha, ScrollView, UiContext};

use super::{
    card_width, draw_info_card, draw_page_hero, grid_columns, grid_height, grid_layout,
    info_card_height, SectionReveals, PAGE_HERO_HEIGHT,
};

const SECTION_MISSION: usize = 0;
const SECTION_VALUES: usize = 1;
const SECTION_COUNT: usize = 2;

/// 两栏之间的间距
const COLUMN_GAP: f32 = 48.0;
/// 段落间距
const PARAGRAPH_GAP: f32 = 16.0;

/// 关于页
pub struct AboutScreen {
    catalog: &'static Catalog,
    reveals: SectionReveals,
    needs_init: bool,
}

/// 关于页一帧的布局（文档坐标）
struct AboutLayout {
    mission_top: f32,
    mission_content_top: f32,
    text_col_w: f32,
    placeholder: Rect,
    mission_bottom: f32,
    values_top: f32,
    values_heading_top: f32,
    value_cards: Vec<Rect>,
    values_bottom: f32,
    total_height: f32,
}

impl AboutLayout {
    fn section_bands(&self) -> [Band; SECTION_COUNT] {
        [
            Band::new(self.mission_top, self.mission_bottom - self.mission_top),
            Band::new(self.values_top, self.values_bottom - self.values_top),
        ]
    }
}

impl AboutScreen {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            reveals: SectionReveals::new(SECTION_COUNT),
            needs_init: true,
        }
    }

    /// 更新界面。关于页没有可点元素，只推进揭示。
    pub fn update(&mut self, ctx: &UiContext, scroll: &ScrollView, dt: f32) -> Option<PageId> {
        if self.needs_init {
            // 重挂载从零开始揭示
            self.reveals = SectionReveals::new(SECTION_COUNT);
            self.needs_init = false;
        }
        let layout = self.layout(ctx);
        self.reveals
            .advance(&layout.section_bands(), &scroll.viewport(ctx), dt);
        None
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, scroll: &ScrollView) {
        let layout = self.layout(ctx);
        draw_page_hero(ctx, text_renderer, &self.catalog.about.hero, scroll.offset());

        if scroll.band_on_screen(ctx, &layout.section_bands()[SECTION_MISSION]) {
            if let Some((alpha, rise)) = self.reveals.presentation(SECTION_MISSION) {
                self.draw_mission(ctx, text_renderer, scroll, &layout, alpha, rise);
            }
        }
        if scroll.band_on_screen(ctx, &layout.section_bands()[SECTION_VALUES]) {
            if let Some((alpha, rise)) = self.reveals.presentation(SECTION_VALUES) {
                self.draw_values(ctx, text_renderer, scroll, &layout, alpha, rise);
            }
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
        self.layout(ctx).section_bands().to_vec()
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

    fn layout(&self, ctx: &UiContext) -> AboutLayout {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        let about = &self.catalog.about;
        let pad = theme.section_padding;

        let mission_top = theme.navbar_height + PAGE_HERO_HEIGHT;
        let mission_content_top = mission_top + pad;

        // 宽屏两栏并排，窄屏正文在上配图在下
        let two_column = ctx.is_desktop();
        let text_col_w = if two_column {
            (area.w - COLUMN_GAP) / 2.0
        } else {
            area.w
        };
        let text_h = self.mission_text_height(ctx, text_col_w);
        let (placeholder, mission_content_h) = if two_column {
            let h = text_h.max(320.0);
            (
                Rect::new(area.x + text_col_w + COLUMN_GAP, mission_content_top, text_col_w, h),
                h,
            )
        } else {
            (
                Rect::new(area.x, mission_content_top + text_h + theme.spacing_large, area.w, 220.0),
                text_h + theme.spacing_large + 220.0,
            )
        };
        let mission_bottom = mission_content_top + mission_content_h + pad;

        // 价值观：居中标题 + 三张图标卡
        let values_top = mission_bottom;
        let values_heading_top = values_top + pad;
        let grid_top = values_heading_top + theme.font_size_large * 1.2 + 48.0;
        let columns = grid_columns(ctx, 3, 3);
        let gap = theme.spacing_large;
        let col_w = card_width(area.w, columns, gap);
        let card_h = info_card_height(ctx, about.values, col_w);
        let value_cards = grid_layout(
            area.x,
            area.w,
            grid_top,
            about.values.len(),
            columns,
            card_h,
            gap,
        );
        let values_bottom = grid_top + grid_height(about.values.len(), columns, card_h, gap) + pad;

        AboutLayout {
            mission_top,
            mission_content_top,
            text_col_w,
            placeholder,
            mission_bottom,
            values_top,
            values_heading_top,
            value_cards,
            values_bottom,
            total_height: values_bottom,
        }
    }

    /// 使命正文高度：标题加三段文字
    fn mission_text_height(&self, ctx: &UiContext, col_w: f32) -> f32 {
        let theme = &ctx.theme;
        let body_size = theme.font_size_small + 2.0;
        let mut h = theme.font_size_large * 1.2 + 24.0;
        for (i, paragraph) in self.catalog.about.mission.iter().enumerate() {
            if i > 0 {
                h += PARAGRAPH_GAP;
            }
            h += wrapped_height(wrap_text(paragraph, body_size, col_w).len(), body_size);
        }
        h
    }

    /// 使命区块：左侧标题与段落，右侧渐变配图占位
    fn draw_mission(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        scroll: &ScrollView,
        layout: &AboutLayout,
        alpha: f32,
        rise: f32,
    ) {
        let theme = &ctx.theme;
        let about = &self.catalog.about;
        let area = ctx.content_area();
        let x = area.x;
        let top = layout.mission_content_top - scroll.offset() + rise;

        let title_size = theme.font_size_large;
        text_renderer.draw_ui_text(
            about.mission_title,
            x,
            top + title_size * 0.8,
            title_size,
            with_alpha(theme.text_primary, alpha),
        );

        let body_size = theme.font_size_small + 2.0;
        let mut y = top + title_size * 1.2 + 24.0 + body_size;
        for paragraph in about.mission {
            let lines = wrap_text(paragraph, body_size, layout.text_col_w);
            y = text_renderer.draw_lines(
                &lines,
                x,
                y,
                body_size,
                with_alpha(theme.text_secondary, alpha),
            );
            y += PARAGRAPH_GAP;
        }

        let mut placeholder = scroll.to_screen(layout.placeholder);
        placeholder.y += rise;
        draw_image_placeholder(ctx, placeholder, BRAND_GRADIENT, Icon::Users, alpha);
    }

    /// 价值观区块：浅灰底，居中标题加三张图标卡
    fn draw_values(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        scroll: &ScrollView,
        layout: &AboutLayout,
        alpha: f32,
        rise: f32,
    ) {
        let theme = &ctx.theme;
        let about = &self.catalog.about;

        draw_rectangle(
            0.0,
            layout.values_top - scroll.offset() + rise,
            ctx.screen_width,
            layout.values_bottom - layout.values_top,
            with_alpha(theme.bg_secondary, alpha),
        );

        let heading_y = layout.values_heading_top - scroll.offset() + rise;
        text_renderer.draw_text_centered(
            about.values_title,
            ctx.screen_width / 2.0,
            heading_y + theme.font_size_large * 0.8,
            theme.font_size_large,
            with_alpha(theme.text_primary, alpha),
        );

        for (card, rect) in about.values.iter().zip(&layout.value_cards) {
            let mut screen = scroll.to_screen(*rect);
            screen.y += rise;
            draw_info_card(ctx, text_renderer, card, screen, alpha);
        }
    }
}
