//! # 页面滚动视图
//!
//! 整页内容在文档坐标里排版，滚动视图负责文档坐标与屏幕
//! 坐标之间的换算、滚轮输入和边界钳制。页面切换时的"回到
//! 顶部"命令也落在这里执行。

use macroquad::prelude::*;
use site_core::Band;

use super::{draw_rounded_rect, UiContext};

/// 一格滚轮对应的像素距离
pub const WHEEL_SCROLL_SPEED: f32 = 60.0;

/// 单页内容的滚动状态
pub struct ScrollView {
    offset: f32,
    content_height: f32,
}

impl ScrollView {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            content_height: 0.0,
        }
    }

    /// 当前滚动偏移（文档顶部到视口顶部的距离）
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// 当前记录的内容总高
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// 最大可滚动距离
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.content_height - viewport_height).max(0.0)
    }

    /// 应用本帧滚轮输入
    pub fn update(&mut self, ctx: &UiContext) {
        if ctx.wheel_y != 0.0 {
            self.offset = (self.offset - ctx.wheel_y * WHEEL_SCROLL_SPEED)
                .clamp(0.0, self.max_scroll(ctx.screen_height));
        }
    }

    /// 每帧由当前页面布局写入内容高度，顺带把偏移钳回边界
    /// （窗口拉大或内容变短时不留悬空）。
    pub fn set_content_height(&mut self, height: f32, viewport_height: f32) {
        self.content_height = height.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_scroll(viewport_height));
    }

    /// 回到顶部
    pub fn scroll_to_top(&mut self) {
        self.offset = 0.0;
    }

    /// 当前视口在文档坐标里的竖向区间
    pub fn viewport(&self, ctx: &UiContext) -> Band {
        Band::new(self.offset, ctx.screen_height)
    }

    /// 文档坐标矩形换算到屏幕坐标
    pub fn to_screen(&self, rect: Rect) -> Rect {
        Rect::new(rect.x, rect.y - self.offset, rect.w, rect.h)
    }

    /// 区间是否与视口相交（绘制剔除用）
    pub fn band_on_screen(&self, ctx: &UiContext, band: &Band) -> bool {
        band.overlap(&self.viewport(ctx)) > 0.0
    }

    /// 右侧滚动条。内容装得下时不画。
    pub fn draw_scrollbar(&self, ctx: &UiContext) {
        let viewport_h = ctx.screen_height;
        let max = self.max_scroll(viewport_h);
        if max <= 0.0 {
            return;
        }

        let track_x = ctx.screen_width - 8.0;
        let track_w = 5.0;
        let thumb_h = (viewport_h / self.content_height * viewport_h).max(32.0);
        let thumb_y = self.offset / max * (viewport_h - thumb_h);

        draw_rounded_rect(
            track_x,
            thumb_y,
            track_w,
            thumb_h,
            track_w / 2.0,
            Color::new(0.0, 0.0, 0.0, 0.25),
        );
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}
