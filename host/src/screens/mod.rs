//! # 界面模块
//!
//! 导航栏、页脚和六个页面的实现。
//!
//! ## 设计说明
//!
//! 每个页面在文档坐标里做布局：给定窗口宽度算出各区块的
//! 竖向区间与总高，更新和绘制共用同一份布局结果。区块的
//! 一次性揭示由 `SectionReveals` 驱动，它把 site-core 的
//! 观察语义和宿主侧的渐入动画拼在一起。

pub mod about;
pub mod events;
pub mod footer;
pub mod home;
pub mod join;
pub mod navbar;
pub mod programs;
pub mod resources;

pub use about::AboutScreen;
pub use events::EventsScreen;
pub use footer::Footer;
pub use home::HomeScreen;
pub use join::JoinScreen;
pub use navbar::NavBar;
pub use programs::ProgramsScreen;
pub use resources::ResourcesScreen;

use macroquad::prelude::Rect;
use site_core::{Band, Icon, InfoCard, PageHero, RevealTracker, SectionHeading, BRAND_GRADIENT};
use tracing::debug;

use crate::renderer::animation::{Animation, EasingFunction};
use crate::renderer::text::{estimate_text_width, wrap_text, wrapped_height};
use crate::renderer::TextRenderer;
use crate::ui::card::{draw_card, draw_icon_chip};
use crate::ui::{draw_icon, draw_vertical_gradient, with_alpha, UiContext};

/// 卡片内边距
pub(crate) const CARD_PAD: f32 = 24.0;
/// 图标底座边长
pub(crate) const CHIP_SIZE: f32 = 56.0;
/// 带图标的信息行行高
pub(crate) const META_ROW_H: f32 = 24.0;

/// 区块揭示动画时长（秒）
pub const REVEAL_DURATION: f32 = 1.0;
/// 揭示时内容从下方上浮的距离
pub const REVEAL_RISE: f32 = 24.0;
/// 内页标题横幅高度（不含导航栏）
pub const PAGE_HERO_HEIGHT: f32 = 260.0;

/// 区块揭示状态：观察语义在 site-core，这里补上渐入动画。
///
/// 每个区块第一次与视口相交时触发一次动画，之后停在终值；
/// 页面卸载时释放全部观察。
pub struct SectionReveals {
    tracker: RevealTracker,
    anims: Vec<Option<Animation>>,
}

impl SectionReveals {
    pub fn new(count: usize) -> Self {
        Self {
            tracker: RevealTracker::new(count),
            anims: vec![None; count],
        }
    }

    /// 观察所有区块并推进已触发的动画
    pub fn advance(&mut self, bands: &[Band], viewport: &Band, dt: f32) {
        for (index, band) in bands.iter().enumerate() {
            if self.tracker.observe(index, band, viewport) {
                debug!(section = index, "区块进入视口，触发揭示");
                self.anims[index] = Some(
                    Animation::new(0.0, 1.0, REVEAL_DURATION)
                        .with_easing(EasingFunction::EaseOutCubic),
                );
            }
        }
        for anim in self.anims.iter_mut().flatten() {
            anim.update(dt);
        }
    }

    /// 区块当前的呈现参数：`None` 表示还未揭示（整块不画），
    /// 否则给出透明度与残余上浮距离。
    pub fn presentation(&self, index: usize) -> Option<(f32, f32)> {
        let anim = self.anims.get(index)?.as_ref()?;
        let progress = anim.current_value();
        Some((progress, (1.0 - progress) * REVEAL_RISE))
    }

    /// 已揭示的区块数（调试覆盖层用）
    pub fn revealed_count(&self) -> usize {
        self.anims.iter().flatten().count()
    }

    /// 仍在观察中的区块数
    pub fn watched(&self) -> usize {
        self.tracker.watched()
    }

    pub fn len(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracker.is_empty()
    }

    /// 页面卸载时释放全部观察
    pub fn release_all(&mut self) {
        self.tracker.release_all();
        for anim in &mut self.anims {
            *anim = None;
        }
    }
}

/// 文档坐标矩形对应的竖向区间
pub(crate) fn band_of(rect: &Rect) -> Band {
    Band::new(rect.y, rect.h)
}

/// 按断点决定栅格列数：窄屏一列，中屏 `md` 列，宽屏 `lg` 列
pub(crate) fn grid_columns(ctx: &UiContext, md: usize, lg: usize) -> usize {
    if ctx.is_wide() {
        lg
    } else if ctx.is_desktop() {
        md
    } else {
        1
    }
}

/// 把 `count` 个等宽卡片排进 `columns` 列的栅格，返回文档坐标矩形
pub(crate) fn grid_layout(
    area_x: f32,
    area_w: f32,
    top: f32,
    count: usize,
    columns: usize,
    card_h: f32,
    gap: f32,
) -> Vec<Rect> {
    let columns = columns.max(1);
    let card_w = (area_w - gap * (columns as f32 - 1.0)) / columns as f32;
    (0..count)
        .map(|i| {
            let col = i % columns;
            let row = i / columns;
            Rect::new(
                area_x + col as f32 * (card_w + gap),
                top + row as f32 * (card_h + gap),
                card_w,
                card_h,
            )
        })
        .collect()
}

/// 栅格总高
pub(crate) fn grid_height(count: usize, columns: usize, card_h: f32, gap: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let rows = count.div_ceil(columns.max(1));
    rows as f32 * card_h + (rows as f32 - 1.0) * gap
}

/// 等分栅格里的单卡宽度
pub(crate) fn card_width(area_w: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1);
    (area_w - gap * (columns as f32 - 1.0)) / columns as f32
}

/// 图标卡（图标底座、标题、描述，居中排版）的高度，按最长描述对齐整行
pub(crate) fn info_card_height(ctx: &UiContext, cards: &[InfoCard], card_w: f32) -> f32 {
    let theme = &ctx.theme;
    let desc_size = theme.font_size_small + 2.0;
    let max_lines = cards
        .iter()
        .map(|card| wrap_text(card.description, desc_size, card_w - CARD_PAD * 2.0).len())
        .max()
        .unwrap_or(1);
    CARD_PAD
        + CHIP_SIZE
        + 20.0
        + theme.font_size_normal * 1.2
        + 10.0
        + wrapped_height(max_lines, desc_size)
        + CARD_PAD
}

/// 绘制一张图标卡（首页亮点与关于页价值观共用）
pub(crate) fn draw_info_card(
    ctx: &UiContext,
    text_renderer: &TextRenderer,
    card: &InfoCard,
    rect: Rect,
    alpha: f32,
) {
    let theme = &ctx.theme;
    let hovered = ctx.point_in_rect(ctx.mouse_pos, rect);
    draw_card(ctx, rect, hovered, alpha);

    let center_x = rect.x + rect.w / 2.0;
    draw_icon_chip(
        ctx,
        card.icon,
        BRAND_GRADIENT,
        center_x - CHIP_SIZE / 2.0,
        rect.y + CARD_PAD,
        CHIP_SIZE,
        alpha,
    );

    let title_y = rect.y + CARD_PAD + CHIP_SIZE + 20.0 + theme.font_size_normal * 0.8;
    text_renderer.draw_text_centered(
        card.title,
        center_x,
        title_y,
        theme.font_size_normal,
        with_alpha(theme.text_primary, alpha),
    );

    let desc_size = theme.font_size_small + 2.0;
    let lines = wrap_text(card.description, desc_size, rect.w - CARD_PAD * 2.0);
    text_renderer.draw_lines_centered(
        &lines,
        center_x,
        title_y + theme.font_size_normal * 0.4 + 10.0 + desc_size,
        desc_size,
        with_alpha(theme.text_secondary, alpha),
    );
}

/// 区块标题（标题 + 副文案，居中）的布局高度
pub(crate) fn section_heading_height(ctx: &UiContext, heading: &SectionHeading, max_w: f32) -> f32 {
    let theme = &ctx.theme;
    let subtitle_lines = wrap_text(heading.subtitle, theme.font_size_small + 2.0, max_w);
    theme.font_size_large * 1.2
        + 12.0
        + wrapped_height(subtitle_lines.len(), theme.font_size_small + 2.0)
}

/// 居中绘制区块标题，返回标题块底部的 y
pub(crate) fn draw_section_heading(
    ctx: &UiContext,
    text_renderer: &TextRenderer,
    heading: &SectionHeading,
    center_x: f32,
    top: f32,
    max_w: f32,
    alpha: f32,
) -> f32 {
    let theme = &ctx.theme;
    let title_size = theme.font_size_large;
    text_renderer.draw_text_centered(
        heading.title,
        center_x,
        top + title_size,
        title_size,
        with_alpha(theme.text_primary, alpha),
    );

    let subtitle_size = theme.font_size_small + 2.0;
    let lines = wrap_text(heading.subtitle, subtitle_size, max_w);
    text_renderer.draw_lines_centered(
        &lines,
        center_x,
        top + title_size * 1.2 + 12.0 + subtitle_size,
        subtitle_size,
        with_alpha(theme.text_secondary, alpha),
    );

    top + section_heading_height(ctx, heading, max_w)
}

/// 内页标题横幅：淡色渐变底，居中标题与副文案。
/// 返回横幅底部在文档坐标中的位置。
pub(crate) fn draw_page_hero(
    ctx: &UiContext,
    text_renderer: &TextRenderer,
    hero: &PageHero,
    scroll_offset: f32,
) -> f32 {
    let theme = &ctx.theme;
    let top = theme.navbar_height;
    let screen_top = top - scroll_offset;
    // 滚出屏幕后不再绘制
    if screen_top + PAGE_HERO_HEIGHT <= 0.0 {
        return top + PAGE_HERO_HEIGHT;
    }
    let (from, to) = theme.gradient_tint(hero.gradient);

    draw_vertical_gradient(0.0, screen_top, ctx.screen_width, PAGE_HERO_HEIGHT, from, to);

    let center_x = ctx.screen_width / 2.0;
    let title_size = if ctx.is_desktop() {
        theme.font_size_title
    } else {
        theme.font_size_large + 6.0
    };
    text_renderer.draw_text_centered(
        hero.title,
        center_x,
        screen_top + PAGE_HERO_HEIGHT * 0.45,
        title_size,
        theme.text_primary,
    );

    let lede_size = theme.font_size_small + 2.0;
    let max_w = (ctx.content_area().w * 0.7).min(760.0);
    let lines = wrap_text(hero.lede, lede_size, max_w);
    text_renderer.draw_lines_centered(
        &lines,
        center_x,
        screen_top + PAGE_HERO_HEIGHT * 0.45 + title_size * 0.6 + lede_size * 1.4,
        lede_size,
        theme.text_secondary,
    );

    top + PAGE_HERO_HEIGHT
}

/// 画一行带图标的信息（日期、时间、地点），返回下一行基线
pub(crate) fn draw_meta_row(
    ctx: &UiContext,
    text_renderer: &TextRenderer,
    icon: Icon,
    text: &str,
    x: f32,
    baseline: f32,
    alpha: f32,
) -> f32 {
    let theme = &ctx.theme;
    let size = theme.font_size_small;
    draw_icon(
        icon,
        x,
        baseline - size * 0.8,
        size,
        with_alpha(theme.text_muted, alpha),
    );
    text_renderer.draw_ui_text(
        text,
        x + size + 8.0,
        baseline,
        size,
        with_alpha(theme.text_muted, alpha),
    );
    baseline + META_ROW_H
}

/// 行内文字链接的命中矩形
pub(crate) fn text_link_rect(x: f32, baseline: f32, text: &str, font_size: f32) -> Rect {
    Rect::new(
        x,
        baseline - font_size,
        estimate_text_width(text, font_size) + font_size * 1.2,
        font_size * 1.5,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_reveals_one_shot() {
        let mut reveals = SectionReveals::new(2);
        assert_eq!(reveals.len(), 2);
        assert_eq!(reveals.revealed_count(), 0);

        let bands = [Band::new(0.0, 300.0), Band::new(2000.0, 300.0)];
        let viewport = Band::new(0.0, 800.0);

        // 第一区块在视口内，触发并开始播放
        reveals.advance(&bands, &viewport, 0.1);
        assert_eq!(reveals.revealed_count(), 1);
        assert_eq!(reveals.watched(), 1);
        let (alpha, rise) = reveals.presentation(0).unwrap();
        assert!(alpha > 0.0 && alpha < 1.0);
        assert!(rise > 0.0 && rise < REVEAL_RISE);

        // 第二区块未入视口，整块隐藏
        assert!(reveals.presentation(1).is_none());

        // 播完后停在终值
        reveals.advance(&bands, &viewport, 2.0);
        assert_eq!(reveals.presentation(0), Some((1.0, 0.0)));
    }

    #[test]
    fn test_release_all_clears_animations() {
        let mut reveals = SectionReveals::new(1);
        let bands = [Band::new(0.0, 300.0)];
        reveals.advance(&bands, &Band::new(0.0, 800.0), 0.5);
        assert_eq!(reveals.revealed_count(), 1);

        reveals.release_all();
        assert_eq!(reveals.revealed_count(), 0);
        assert_eq!(reveals.watched(), 0);
        assert!(reveals.presentation(0).is_none());
    }

    #[test]
    fn test_grid_layout_rows_and_columns() {
        let rects = grid_layout(100.0, 940.0, 50.0, 4, 2, 200.0, 20.0);
        assert_eq!(rects.len(), 4);
        // 两列两行
        assert_eq!(rects[0].x, 100.0);
        assert_eq!(rects[1].x, 100.0 + 480.0 + 20.0);
        assert_eq!(rects[0].y, rects[1].y);
        assert_eq!(rects[2].y, 50.0 + 200.0 + 20.0);
        // 卡片等宽
        assert_eq!(rects[0].w, 480.0);

        assert_eq!(grid_height(4, 2, 200.0, 20.0), 420.0);
        assert_eq!(grid_height(0, 3, 200.0, 20.0), 0.0);
    }

    #[test]
    fn test_grid_columns_follow_breakpoints() {
        let mut ctx = UiContext::new(crate::ui::Theme::light());
        ctx.screen_width = 500.0;
        assert_eq!(grid_columns(&ctx, 2, 4), 1);
        ctx.screen_width = 900.0;
        assert_eq!(grid_columns(&ctx, 2, 4), 2);
        ctx.screen_width = 1300.0;
        assert_eq!(grid_columns(&ctx, 2, 4), 4);
    }
}
