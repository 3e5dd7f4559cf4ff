//! # 首页
//!
//! 全屏英雄区加四个揭示区块：亮点、参与路径、近期活动、行动号召。
//! 英雄区在页面挂载时播放一次入场动画；四个区块由 [`SectionReveals`]
//! 驱动，首次进入视口时各自渐入一次。

use macroquad::prelude::*;
use site_core::catalog::CtaBand;
use site_core::{Band, Catalog, FeaturedEvent, Icon, PageId, BRAND_GRADIENT};

use crate::renderer::text::{wrap_text, wrapped_height};
use crate::renderer::{Animation, EasingFunction, TextRenderer};
use crate::ui::card::{draw_card, draw_icon_chip, draw_image_placeholder};
use crate::ui::{
    draw_icon, draw_rounded_gradient, draw_vertical_gradient, mix, with_alpha, Button,
    ButtonStyle, ScrollView, Theme, UiContext,
};

use super::{
    band_of, card_width, draw_info_card, draw_meta_row, draw_section_heading, grid_columns,
    grid_height, grid_layout, info_card_height, section_heading_height, SectionReveals, CARD_PAD,
    CHIP_SIZE, META_ROW_H, REVEAL_DURATION,
};

/// 揭示区块下标，与 [`HomeLayout::section_bands`] 的顺序一致
const SECTION_WHY: usize = 0;
const SECTION_PATHS: usize = 1;
const SECTION_EVENTS: usize = 2;
const SECTION_CTA: usize = 3;
const SECTION_COUNT: usize = 4;

/// 活动卡图片占位高度
const FEATURED_IMAGE_H: f32 = 120.0;
/// 行动号召横幅最大宽度
const CTA_MAX_WIDTH: f32 = 896.0;

/// 首页
pub struct HomeScreen {
    catalog: &'static Catalog,
    /// 英雄区入场动画
    entrance: Animation,
    /// 四个区块的揭示状态
    reveals: SectionReveals,
    hero_primary: Button,
    hero_secondary: Button,
    cta_primary: Button,
    cta_secondary: Button,
    /// 是否需要重新初始化
    needs_init: bool,
}

/// 首页一帧的布局（文档坐标）
struct HomeLayout {
    hero: Rect,
    hero_primary: Rect,
    hero_secondary: Rect,
    why_top: f32,
    why_heading_top: f32,
    why_cards: Vec<Rect>,
    why_bottom: f32,
    paths_top: f32,
    paths_heading_top: f32,
    path_cards: Vec<Rect>,
    paths_bottom: f32,
    events_top: f32,
    events_heading_top: f32,
    event_cards: Vec<Rect>,
    events_bottom: f32,
    cta_top: f32,
    cta_band: Rect,
    cta_primary: Rect,
    cta_secondary: Rect,
    cta_bottom: f32,
    total_height: f32,
}

impl HomeLayout {
    /// 四个揭示区块的竖向区间
    fn section_bands(&self) -> [Band; SECTION_COUNT] {
        [
            Band::new(self.why_top, self.why_bottom - self.why_top),
            Band::new(self.paths_top, self.paths_bottom - self.paths_top),
            Band::new(self.events_top, self.events_bottom - self.events_top),
            Band::new(self.cta_top, self.cta_bottom - self.cta_top),
        ]
    }
}

impl HomeScreen {
    pub fn new(catalog: &'static Catalog) -> Self {
        let home = &catalog.home;
        Self {
            catalog,
            entrance: entrance_animation(),
            reveals: SectionReveals::new(SECTION_COUNT),
            hero_primary: Button::new(home.hero_primary)
                .with_style(ButtonStyle::Light)
                .with_icon(Icon::ArrowRight),
            hero_secondary: Button::new(home.hero_secondary).with_style(ButtonStyle::Outline),
            cta_primary: Button::new(home.cta.primary).with_style(ButtonStyle::Light),
            cta_secondary: Button::new(home.cta.secondary).with_style(ButtonStyle::Outline),
            needs_init: true,
        }
    }

    /// 初始化界面（重播英雄区入场动画）
    fn init(&mut self) {
        self.entrance = entrance_animation();
        // 重挂载从零开始揭示
        self.reveals = SectionReveals::new(SECTION_COUNT);
        self.needs_init = false;
    }

    /// 更新界面，返回要跳转的页面
    pub fn update(&mut self, ctx: &UiContext, scroll: &ScrollView, dt: f32) -> Option<PageId> {
        if self.needs_init {
            self.init();
        }
        self.entrance.update(dt);

        let layout = self.layout(ctx);
        self.reveals
            .advance(&layout.section_bands(), &scroll.viewport(ctx), dt);

        // 英雄区按钮
        self.hero_primary.rect = scroll.to_screen(layout.hero_primary);
        self.hero_secondary.rect = scroll.to_screen(layout.hero_secondary);
        if self.hero_primary.update(ctx) {
            return Some(PageId::Join);
        }
        if self.hero_secondary.update(ctx) {
            return Some(PageId::About);
        }

        // 路径卡整卡可点，区块未揭示时不响应
        if self.reveals.presentation(SECTION_PATHS).is_some() {
            for rect in &layout.path_cards {
                if ctx.mouse_just_released && ctx.mouse_in_rect(scroll.to_screen(*rect)) {
                    return Some(PageId::Programs);
                }
            }
        }

        // 活动卡同理
        if self.reveals.presentation(SECTION_EVENTS).is_some() {
            for rect in &layout.event_cards {
                if ctx.mouse_just_released && ctx.mouse_in_rect(scroll.to_screen(*rect)) {
                    return Some(PageId::Events);
                }
            }
        }

        // 行动号召的两个按钮都指向加入页
        if self.reveals.presentation(SECTION_CTA).is_some() {
            self.cta_primary.rect = scroll.to_screen(layout.cta_primary);
            self.cta_secondary.rect = scroll.to_screen(layout.cta_secondary);
            let primary = self.cta_primary.update(ctx);
            let secondary = self.cta_secondary.update(ctx);
            if primary || secondary {
                return Some(PageId::Join);
            }
        }

        None
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, scroll: &ScrollView) {
        let layout = self.layout(ctx);
        let bands = layout.section_bands();

        if scroll.band_on_screen(ctx, &band_of(&layout.hero)) {
            self.draw_hero(ctx, text_renderer, scroll, &layout);
        }

        if scroll.band_on_screen(ctx, &bands[SECTION_WHY]) {
            if let Some((alpha, rise)) = self.reveals.presentation(SECTION_WHY) {
                self.draw_why(ctx, text_renderer, scroll, &layout, alpha, rise);
            }
        }
        if scroll.band_on_screen(ctx, &bands[SECTION_PATHS]) {
            if let Some((alpha, rise)) = self.reveals.presentation(SECTION_PATHS) {
                self.draw_paths(ctx, text_renderer, scroll, &layout, alpha, rise);
            }
        }
        if scroll.band_on_screen(ctx, &bands[SECTION_EVENTS]) {
            if let Some((alpha, rise)) = self.reveals.presentation(SECTION_EVENTS) {
                self.draw_events(ctx, text_renderer, scroll, &layout, alpha, rise);
            }
        }
        if scroll.band_on_screen(ctx, &bands[SECTION_CTA]) {
            if let Some((alpha, rise)) = self.reveals.presentation(SECTION_CTA) {
                self.draw_cta(ctx, text_renderer, scroll, &layout, alpha, rise);
            }
        }
    }

    /// 页面总高（不含页脚）
    pub fn content_height(&self, ctx: &UiContext) -> f32 {
        self.layout(ctx).total_height
    }

    /// （已揭示区块数，区块总数），调试覆盖层用
    pub fn reveal_stats(&self) -> (usize, usize) {
        (self.reveals.revealed_count(), self.reveals.len())
    }

    /// 各揭示区块的文档坐标区间，调试覆盖层用
    pub fn reveal_bands(&self, ctx: &UiContext) -> Vec<Band> {
        self.layout(ctx).section_bands().to_vec()
    }

    /// 卸载：释放全部观察，下次挂载重新揭示
    pub fn unmount(&mut self) {
        self.reveals.release_all();
    }

    /// 标记需要重新初始化
    pub fn mark_needs_init(&mut self) {
        self.needs_init = true;
    }

    /// 是否需要初始化
    pub fn needs_init(&self) -> bool {
        self.needs_init
    }

    /// 计算整页布局。更新与绘制共用，保证命中区域和画面一致。
    fn layout(&self, ctx: &UiContext) -> HomeLayout {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        let home = &self.catalog.home;
        let pad = theme.section_padding;
        let heading_gap = 48.0;
        let heading_w = area.w.min(760.0);

        // 英雄区占满一屏
        let hero = Rect::new(0.0, 0.0, ctx.screen_width, ctx.screen_height.max(480.0));
        let (hero_primary, hero_secondary) = self.hero_button_rects(ctx, &hero);

        // 亮点
        let why_top = hero.h;
        let why_heading_top = why_top + pad;
        let why_grid_top =
            why_heading_top + section_heading_height(ctx, &home.why_heading, heading_w) + heading_gap;
        let why_columns = grid_columns(ctx, 3, 3);
        let gap = theme.spacing_large;
        let why_card_w = card_width(area.w, why_columns, gap);
        let why_card_h = info_card_height(ctx, home.highlights, why_card_w);
        let why_cards = grid_layout(
            area.x,
            area.w,
            why_grid_top,
            home.highlights.len(),
            why_columns,
            why_card_h,
            gap,
        );
        let why_bottom = why_grid_top
            + grid_height(home.highlights.len(), why_columns, why_card_h, gap)
            + pad;

        // 参与路径
        let paths_top = why_bottom;
        let paths_heading_top = paths_top + pad;
        let paths_grid_top = paths_heading_top
            + section_heading_height(ctx, &home.paths_heading, heading_w)
            + heading_gap;
        let path_columns = grid_columns(ctx, 2, 4);
        let path_card_h = path_card_height(theme);
        let path_cards = grid_layout(
            area.x,
            area.w,
            paths_grid_top,
            home.paths.len(),
            path_columns,
            path_card_h,
            gap,
        );
        let paths_bottom =
            paths_grid_top + grid_height(home.paths.len(), path_columns, path_card_h, gap) + pad;

        // 近期活动
        let events_top = paths_bottom;
        let events_heading_top = events_top + pad;
        let events_grid_top = events_heading_top
            + section_heading_height(ctx, &home.events_heading, heading_w)
            + heading_gap;
        let event_columns = grid_columns(ctx, 3, 3);
        let event_card_w = card_width(area.w, event_columns, gap);
        let event_card_h = featured_card_height(ctx, home.featured, event_card_w);
        let event_cards = grid_layout(
            area.x,
            area.w,
            events_grid_top,
            home.featured.len(),
            event_columns,
            event_card_h,
            gap,
        );
        let events_bottom = events_grid_top
            + grid_height(home.featured.len(), event_columns, event_card_h, gap)
            + pad;

        // 行动号召横幅
        let cta_top = events_bottom;
        let cta_w = area.w.min(CTA_MAX_WIDTH);
        let cta_h = cta_band_height(ctx, &home.cta, cta_w);
        let cta_band = Rect::new(
            ctx.screen_width / 2.0 - cta_w / 2.0,
            cta_top + pad,
            cta_w,
            cta_h,
        );
        let (cta_primary, cta_secondary) = self.cta_button_rects(ctx, &cta_band);
        let cta_bottom = cta_band.y + cta_band.h + pad;

        HomeLayout {
            hero,
            hero_primary,
            hero_secondary,
            why_top,
            why_heading_top,
            why_cards,
            why_bottom,
            paths_top,
            paths_heading_top,
            path_cards,
            paths_bottom,
            events_top,
            events_heading_top,
            event_cards,
            events_bottom,
            cta_top,
            cta_band,
            cta_primary,
            cta_secondary,
            cta_bottom,
            total_height: cta_bottom,
        }
    }

    /// 英雄区文案块高度与按钮矩形
    fn hero_button_rects(&self, ctx: &UiContext, hero: &Rect) -> (Rect, Rect) {
        let theme = &ctx.theme;
        let block_h = self.hero_block_height(ctx);
        let buttons_top = hero.y + (hero.h - block_h) / 2.0 + block_h - theme.button_height;

        let font = button_font_size(theme);
        let primary_w = self
            .hero_primary
            .preferred_width(font, theme.spacing_large)
            .max(theme.button_min_width);
        let secondary_w = self
            .hero_secondary
            .preferred_width(font, theme.spacing_large)
            .max(theme.button_min_width);
        side_by_side(
            ctx.screen_width / 2.0,
            buttons_top,
            primary_w,
            secondary_w,
            theme.button_height,
            theme.spacing,
        )
    }

    /// 英雄区文案块总高：标题 + 标语 + 导语 + 按钮
    fn hero_block_height(&self, ctx: &UiContext) -> f32 {
        let theme = &ctx.theme;
        let home = &self.catalog.home;
        let title_size = hero_title_size(ctx);
        let title_lines = wrap_text(home.hero_title, title_size, ctx.content_area().w);
        let lede_size = theme.font_size_small + 2.0;
        let lede_lines = wrap_text(home.hero_lede, lede_size, hero_lede_width(ctx));

        wrapped_height(title_lines.len(), title_size)
            + 20.0
            + theme.font_size_large * 1.2
            + 18.0
            + wrapped_height(lede_lines.len(), lede_size)
            + 36.0
            + theme.button_height
    }

    /// 行动号召横幅内的按钮矩形
    fn cta_button_rects(&self, ctx: &UiContext, band: &Rect) -> (Rect, Rect) {
        let theme = &ctx.theme;
        let font = button_font_size(theme);
        let primary_w = self
            .cta_primary
            .preferred_width(font, theme.spacing_large)
            .max(theme.button_min_width);
        let secondary_w = self
            .cta_secondary
            .preferred_width(font, theme.spacing_large)
            .max(theme.button_min_width);
        let top = band.y + band.h - 48.0 - theme.button_height;
        side_by_side(
            band.x + band.w / 2.0,
            top,
            primary_w,
            secondary_w,
            theme.button_height,
            theme.spacing,
        )
    }

    /// 英雄区：全屏深色渐变 + 居中文案块 + 底部下滚提示
    fn draw_hero(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        scroll: &ScrollView,
        layout: &HomeLayout,
    ) {
        let theme = &ctx.theme;
        let home = &self.catalog.home;
        let hero = scroll.to_screen(layout.hero);

        let (from, to) = theme.gradient_colors(BRAND_GRADIENT);
        let black = Color::new(0.0, 0.0, 0.0, 1.0);
        draw_vertical_gradient(
            hero.x,
            hero.y,
            hero.w,
            hero.h,
            mix(from, black, 0.55),
            mix(to, black, 0.25),
        );

        // 入场动画：整块上浮渐显
        let progress = self.entrance.current_value();
        let alpha = progress;
        let fall = (1.0 - progress) * 20.0;

        let center_x = ctx.screen_width / 2.0;
        let title_size = hero_title_size(ctx);
        let title_lines = wrap_text(home.hero_title, title_size, ctx.content_area().w);
        let block_h = self.hero_block_height(ctx);
        let mut y = hero.y + (hero.h - block_h) / 2.0 + fall + title_size * 0.8;

        text_renderer.draw_lines_centered(
            &title_lines,
            center_x,
            y,
            title_size,
            with_alpha(theme.text_inverse, alpha),
        );
        y += wrapped_height(title_lines.len(), title_size) + 20.0;

        text_renderer.draw_text_centered(
            home.hero_tagline,
            center_x,
            y + theme.font_size_large * 0.8,
            theme.font_size_large,
            with_alpha(Color::new(1.0, 1.0, 1.0, 0.92), alpha),
        );
        y += theme.font_size_large * 1.2 + 18.0;

        let lede_size = theme.font_size_small + 2.0;
        let lede_lines = wrap_text(home.hero_lede, lede_size, hero_lede_width(ctx));
        text_renderer.draw_lines_centered(
            &lede_lines,
            center_x,
            y + lede_size,
            lede_size,
            with_alpha(Color::new(1.0, 1.0, 1.0, 0.85), alpha),
        );

        self.hero_primary.draw_alpha(ctx, text_renderer, alpha);
        self.hero_secondary.draw_alpha(ctx, text_renderer, alpha);

        // 底部的下滚提示上下浮动
        let bob = (ctx.time as f32 * 2.0).sin() * 6.0;
        draw_icon(
            Icon::ChevronDown,
            center_x - 14.0,
            hero.y + hero.h - 56.0 + bob,
            28.0,
            with_alpha(Color::new(1.0, 1.0, 1.0, 0.7), alpha),
        );
    }

    /// 亮点区块：三张居中排版的图标卡
    fn draw_why(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        scroll: &ScrollView,
        layout: &HomeLayout,
        alpha: f32,
        rise: f32,
    ) {
        let home = &self.catalog.home;
        let heading_w = ctx.content_area().w.min(760.0);

        draw_section_heading(
            ctx,
            text_renderer,
            &home.why_heading,
            ctx.screen_width / 2.0,
            layout.why_heading_top - scroll.offset() + rise,
            heading_w,
            alpha,
        );

        for (card, rect) in home.highlights.iter().zip(&layout.why_cards) {
            let mut screen = scroll.to_screen(*rect);
            screen.y += rise;
            draw_info_card(ctx, text_renderer, card, screen, alpha);
        }
    }

    /// 参与路径区块：浅灰底，四张可点的路径卡
    fn draw_paths(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        scroll: &ScrollView,
        layout: &HomeLayout,
        alpha: f32,
        rise: f32,
    ) {
        let theme = &ctx.theme;
        let home = &self.catalog.home;
        let heading_w = ctx.content_area().w.min(760.0);

        // 区块底色区分前后两个白底区块
        draw_rectangle(
            0.0,
            layout.paths_top - scroll.offset() + rise,
            ctx.screen_width,
            layout.paths_bottom - layout.paths_top,
            with_alpha(theme.bg_secondary, alpha),
        );

        draw_section_heading(
            ctx,
            text_renderer,
            &home.paths_heading,
            ctx.screen_width / 2.0,
            layout.paths_heading_top - scroll.offset() + rise,
            heading_w,
            alpha,
        );

        for (path, rect) in home.paths.iter().zip(&layout.path_cards) {
            let mut screen = scroll.to_screen(*rect);
            screen.y += rise;
            let hovered = ctx.point_in_rect(ctx.mouse_pos, screen);
            draw_card(ctx, screen, hovered, alpha);

            let center_x = screen.x + screen.w / 2.0;
            draw_icon_chip(
                ctx,
                path.icon,
                path.gradient,
                center_x - CHIP_SIZE / 2.0,
                screen.y + CARD_PAD,
                CHIP_SIZE,
                alpha,
            );

            let title_y = screen.y + CARD_PAD + CHIP_SIZE + 18.0 + theme.font_size_normal * 0.8;
            text_renderer.draw_text_centered(
                path.title,
                center_x,
                title_y,
                theme.font_size_normal,
                with_alpha(theme.text_primary, alpha),
            );

            let time_y = title_y + theme.font_size_normal * 0.4 + 8.0 + theme.font_size_small;
            text_renderer.draw_text_centered(
                path.time,
                center_x,
                time_y,
                theme.font_size_small,
                with_alpha(theme.text_muted, alpha),
            );

            let link_color = if hovered {
                theme.accent_hover
            } else {
                theme.accent
            };
            text_renderer.draw_text_centered(
                home.path_link,
                center_x,
                time_y + 14.0 + theme.font_size_small,
                theme.font_size_small,
                with_alpha(link_color, alpha),
            );
        }
    }

    /// 近期活动区块：三张带图片占位的活动卡
    fn draw_events(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        scroll: &ScrollView,
        layout: &HomeLayout,
        alpha: f32,
        rise: f32,
    ) {
        let theme = &ctx.theme;
        let home = &self.catalog.home;
        let heading_w = ctx.content_area().w.min(760.0);

        draw_section_heading(
            ctx,
            text_renderer,
            &home.events_heading,
            ctx.screen_width / 2.0,
            layout.events_heading_top - scroll.offset() + rise,
            heading_w,
            alpha,
        );

        for (event, rect) in home.featured.iter().zip(&layout.event_cards) {
            let mut screen = scroll.to_screen(*rect);
            screen.y += rise;
            let hovered = ctx.point_in_rect(ctx.mouse_pos, screen);
            draw_card(ctx, screen, hovered, alpha);

            draw_image_placeholder(
                ctx,
                Rect::new(
                    screen.x + 8.0,
                    screen.y + 8.0,
                    screen.w - 16.0,
                    FEATURED_IMAGE_H,
                ),
                BRAND_GRADIENT,
                Icon::Calendar,
                alpha,
            );

            let title_size = theme.font_size_normal;
            let x = screen.x + CARD_PAD;
            let title_lines = wrap_text(event.title, title_size, screen.w - CARD_PAD * 2.0);
            let mut y = screen.y + FEATURED_IMAGE_H + 18.0 + title_size * 0.8;
            y = text_renderer.draw_lines(
                &title_lines,
                x,
                y,
                title_size,
                with_alpha(theme.text_primary, alpha),
            );
            y += 10.0 - title_size * 0.6;

            y = draw_meta_row(ctx, text_renderer, Icon::Calendar, event.date, x, y, alpha);
            y = draw_meta_row(ctx, text_renderer, Icon::Clock, event.time, x, y, alpha);
            y = draw_meta_row(ctx, text_renderer, Icon::MapPin, event.location, x, y, alpha);

            let link_color = if hovered {
                theme.accent_hover
            } else {
                theme.accent
            };
            text_renderer.draw_ui_text(
                home.featured_link,
                x,
                y + 12.0 + theme.font_size_small * 0.8,
                theme.font_size_small,
                with_alpha(link_color, alpha),
            );
        }
    }

    /// 行动号召横幅：品牌渐变底，白字加一亮一描边两个按钮
    fn draw_cta(
        &self,
        ctx: &UiContext,
        text_renderer: &TextRenderer,
        scroll: &ScrollView,
        layout: &HomeLayout,
        alpha: f32,
        rise: f32,
    ) {
        let theme = &ctx.theme;
        let cta = &self.catalog.home.cta;
        let mut band = scroll.to_screen(layout.cta_band);
        band.y += rise;

        let (from, to) = theme.gradient_colors(BRAND_GRADIENT);
        draw_rounded_gradient(
            band.x,
            band.y,
            band.w,
            band.h,
            theme.corner_radius_large,
            with_alpha(from, alpha),
            with_alpha(to, alpha),
        );

        let center_x = band.x + band.w / 2.0;
        let title_y = band.y + 48.0 + theme.font_size_large * 0.8;
        text_renderer.draw_text_centered(
            cta.title,
            center_x,
            title_y,
            theme.font_size_large,
            with_alpha(theme.text_inverse, alpha),
        );

        let lede_size = theme.font_size_small + 2.0;
        let lines = wrap_text(cta.lede, lede_size, band.w - 96.0);
        text_renderer.draw_lines_centered(
            &lines,
            center_x,
            title_y + theme.font_size_large * 0.4 + 16.0 + lede_size,
            lede_size,
            with_alpha(Color::new(1.0, 1.0, 1.0, 0.9), alpha),
        );

        self.cta_primary.draw_alpha(ctx, text_renderer, alpha);
        self.cta_secondary.draw_alpha(ctx, text_renderer, alpha);
    }
}

/// 入场动画：从下方 20px 处渐显
fn entrance_animation() -> Animation {
    Animation::new(0.0, 1.0, REVEAL_DURATION).with_easing(EasingFunction::EaseOutCubic)
}

/// 英雄区标题字号随断点缩放
fn hero_title_size(ctx: &UiContext) -> f32 {
    if ctx.is_desktop() {
        ctx.theme.font_size_hero
    } else {
        ctx.theme.font_size_title
    }
}

/// 英雄区导语的折行宽度
fn hero_lede_width(ctx: &UiContext) -> f32 {
    (ctx.content_area().w * 0.75).min(720.0)
}

/// 按钮文字字号，与 [`Button::draw_alpha`] 的取法一致
fn button_font_size(theme: &Theme) -> f32 {
    (theme.button_height * 0.36).clamp(theme.font_size_small, theme.font_size_normal)
}

/// 两个按钮绕 `center_x` 并排
fn side_by_side(
    center_x: f32,
    top: f32,
    left_w: f32,
    right_w: f32,
    height: f32,
    gap: f32,
) -> (Rect, Rect) {
    let total = left_w + gap + right_w;
    let left = Rect::new(center_x - total / 2.0, top, left_w, height);
    let right = Rect::new(left.x + left_w + gap, top, right_w, height);
    (left, right)
}

/// 路径卡高度：图标底座、标题、时长、链接各一行
fn path_card_height(theme: &Theme) -> f32 {
    CARD_PAD
        + CHIP_SIZE
        + 18.0
        + theme.font_size_normal * 1.2
        + 8.0
        + theme.font_size_small * 1.2
        + 14.0
        + theme.font_size_small * 1.2
        + CARD_PAD
}

/// 活动卡高度：图片占位、标题、三行信息、链接
fn featured_card_height(ctx: &UiContext, cards: &[FeaturedEvent], card_w: f32) -> f32 {
    let theme = &ctx.theme;
    let title_size = theme.font_size_normal;
    let max_title_lines = cards
        .iter()
        .map(|event| wrap_text(event.title, title_size, card_w - CARD_PAD * 2.0).len())
        .max()
        .unwrap_or(1);
    FEATURED_IMAGE_H
        + 18.0
        + wrapped_height(max_title_lines, title_size)
        + 10.0
        + 3.0 * META_ROW_H
        + 12.0
        + theme.font_size_small * 1.2
        + CARD_PAD
}

/// 行动号召横幅高度
fn cta_band_height(ctx: &UiContext, cta: &CtaBand, band_w: f32) -> f32 {
    let theme = &ctx.theme;
    let lede_size = theme.font_size_small + 2.0;
    let lines = wrap_text(cta.lede, lede_size, band_w - 96.0);
    48.0 + theme.font_size_large * 1.2
        + 16.0
        + wrapped_height(lines.len(), lede_size)
        + 28.0
        + theme.button_height
        + 48.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_ctx() -> UiContext {
        let mut ctx = UiContext::new(Theme::light());
        ctx.screen_width = 1280.0;
        ctx.screen_height = 800.0;
        ctx
    }

    #[test]
    fn test_layout_sections_are_ordered() {
        let screen = HomeScreen::new(Catalog::builtin());
        let ctx = desktop_ctx();
        let layout = screen.layout(&ctx);

        assert_eq!(layout.hero.h, 800.0);
        assert!(layout.why_top >= layout.hero.h);
        assert!(layout.paths_top > layout.why_top);
        assert!(layout.events_top > layout.paths_top);
        assert!(layout.cta_top > layout.events_top);
        assert!(layout.total_height > layout.cta_top);

        // 区块区间首尾相接，中间不留观察不到的缝隙
        let bands = layout.section_bands();
        assert_eq!(bands[0].bottom(), bands[1].top);
        assert_eq!(bands[1].bottom(), bands[2].top);
        assert_eq!(bands[2].bottom(), bands[3].top);
    }

    #[test]
    fn test_grid_narrows_to_single_column() {
        let screen = HomeScreen::new(Catalog::builtin());
        let mut ctx = desktop_ctx();
        ctx.screen_width = 600.0;
        let layout = screen.layout(&ctx);

        // 窄屏下所有路径卡同一 x，竖着排
        let xs: Vec<f32> = layout.path_cards.iter().map(|r| r.x).collect();
        assert!(xs.windows(2).all(|w| w[0] == w[1]));
        let ys: Vec<f32> = layout.path_cards.iter().map(|r| r.y).collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hero_buttons_only_before_reveal() {
        let mut screen = HomeScreen::new(Catalog::builtin());
        let ctx = desktop_ctx();
        let scroll = ScrollView::new();

        // 第一帧：英雄区可点，但四个区块都尚未推进动画前不可点
        let layout = screen.layout(&ctx);
        assert!(screen.reveals.presentation(SECTION_PATHS).is_none());

        // 点击英雄区主按钮跳加入页
        let mut click = desktop_ctx();
        click.mouse_pos = Vec2::new(
            layout.hero_primary.x + 10.0,
            layout.hero_primary.y + 10.0,
        );
        click.mouse_just_released = true;
        assert_eq!(
            screen.update(&click, &scroll, 0.016),
            Some(PageId::Join)
        );
    }

    #[test]
    fn test_path_card_click_after_reveal() {
        let mut screen = HomeScreen::new(Catalog::builtin());
        let ctx = desktop_ctx();
        let total = screen.content_height(&ctx);
        let layout = screen.layout(&ctx);
        let target = layout.path_cards[0];

        // 用滚轮把路径区块滚进视口
        let mut scrolled = ScrollView::new();
        scrolled.set_content_height(total, ctx.screen_height);
        let mut wheel_ctx = desktop_ctx();
        wheel_ctx.wheel_y = -(target.y - 200.0) / crate::ui::scroll::WHEEL_SCROLL_SPEED;
        scrolled.update(&wheel_ctx);
        assert!(scrolled.offset() > 0.0);

        screen.update(&ctx, &scrolled, 2.0);
        assert!(screen.reveals.presentation(SECTION_PATHS).is_some());

        // 点击第一张路径卡
        let screen_rect = scrolled.to_screen(target);
        let mut click = desktop_ctx();
        click.mouse_pos = Vec2::new(screen_rect.x + 10.0, screen_rect.y + 10.0);
        click.mouse_just_released = true;
        assert_eq!(
            screen.update(&click, &scrolled, 0.016),
            Some(PageId::Programs)
        );
    }

    #[test]
    fn test_unmount_releases_reveals() {
        let mut screen = HomeScreen::new(Catalog::builtin());
        let ctx = desktop_ctx();
        let scroll = ScrollView::new();
        screen.update(&ctx, &scroll, 0.1);

        screen.unmount();
        screen.mark_needs_init();
        assert_eq!(screen.reveal_stats().0, 0);
        assert!(screen.needs_init());
    }
}
