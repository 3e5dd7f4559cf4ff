//! # 加入页
//!
//! 报名表单卡片：邮箱输入、兴趣多选、背景下拉、提交按钮。
//! 表单状态由 site-core 的 [`JoinForm`] 状态机保管，这里只负责
//! 把输入事件翻译成状态机调用，并把每帧时长喂给复位倒计时。
//! 背景下拉是非受控组件，提交与自动复位都不会碰它。

use std::time::Duration;

use macroquad::prelude::*;
use site_core::{Catalog, Icon, JoinForm, PageId};
use tracing::debug;

use crate::renderer::text::estimate_text_width;
use crate::renderer::TextRenderer;
use crate::ui::card::draw_card;
use crate::ui::checkbox::{checkbox_row_clicked, draw_checkbox_row};
use crate::ui::{
    draw_icon, draw_rounded_rect, mix, Button, ScrollView, SelectBox, TextInput, TextInputEvent,
    UiContext,
};

use super::{draw_page_hero, PAGE_HERO_HEIGHT};

/// 表单卡片内边距
const FORM_PAD: f32 = 32.0;
/// 表单卡片最大宽度
const FORM_MAX_WIDTH: f32 = 768.0;
/// 输入框与下拉框高度
const INPUT_H: f32 = 48.0;
/// 复选行高度
const ROW_H: f32 = 40.0;
/// 复选行间距
const ROW_GAP: f32 = 2.0;
/// 成功横幅高度
const BANNER_H: f32 = 56.0;
/// 联系方式行高
const CONTACT_ROW_H: f32 = 32.0;

/// 加入页
pub struct JoinScreen {
    catalog: &'static Catalog,
    /// 表单状态机
    pub form: JoinForm,
    email_input: TextInput,
    background: SelectBox,
    submit: Button,
    needs_init: bool,
}

/// 加入页一帧的布局（文档坐标）
struct JoinLayout {
    card: Rect,
    email_input: Rect,
    checkbox_rows: Vec<Rect>,
    select_rect: Rect,
    submit: Rect,
    /// 提交成功后插入的横幅；未提交时不占位
    banner: Option<Rect>,
    connect_top: f32,
    contact_rows: Vec<Rect>,
    total_height: f32,
}

impl JoinScreen {
    pub fn new(catalog: &'static Catalog) -> Self {
        let join = &catalog.join;
        Self {
            catalog,
            form: JoinForm::new(),
            email_input: TextInput::new(join.email_placeholder),
            background: SelectBox::new(join.background_placeholder, join.background_options),
            submit: Button::new(join.submit_label).with_square_corners(),
            needs_init: true,
        }
    }

    /// 初始化界面：重建输入组件，丢掉焦点与下拉的残留状态
    fn init(&mut self) {
        let join = &self.catalog.join;
        self.email_input = TextInput::new(join.email_placeholder);
        self.background = SelectBox::new(join.background_placeholder, join.background_options);
        self.needs_init = false;
    }

    /// 更新界面。返回值恒为 `None`：加入页没有导航出口。
    pub fn update(&mut self, ctx: &mut UiContext, scroll: &ScrollView, dt: f32) -> Option<PageId> {
        if self.needs_init {
            self.init();
        }

        // 提交后的自动复位由宿主时间驱动
        if self.form.tick(Duration::from_secs_f32(dt)) {
            debug!("表单复位倒计时到期，自动清空");
        }

        let layout = self.layout(ctx);

        // 下拉框先于下方组件处理，展开时独占列表区域的指针
        let select_rect = scroll.to_screen(layout.select_rect);
        if self.background.update(ctx, select_rect) {
            debug!(selected = ?self.background.selected(), "背景选择变化");
        }

        match self
            .email_input
            .update(ctx, scroll.to_screen(layout.email_input), self.form.email())
        {
            TextInputEvent::Edited(value) => self.form.set_email(value),
            TextInputEvent::Submitted => {
                if self.form.submit() {
                    debug!("回车提交表单");
                }
            }
            TextInputEvent::None => {}
        }

        for (tag, rect) in self
            .catalog
            .join
            .interests
            .iter()
            .zip(&layout.checkbox_rows)
        {
            if checkbox_row_clicked(ctx, scroll.to_screen(*rect)) {
                self.form.toggle_interest(tag);
                debug!(interest = tag, "切换兴趣勾选");
            }
        }

        self.submit.rect = scroll.to_screen(layout.submit);
        if self.submit.update(ctx) && !self.form.submit() {
            // 空邮箱提交是安静的空操作
            debug!("空邮箱提交被忽略");
        }

        None
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext, text_renderer: &TextRenderer, scroll: &ScrollView) {
        let theme = &ctx.theme;
        let join = &self.catalog.join;
        let layout = self.layout(ctx);

        draw_page_hero(ctx, text_renderer, &join.hero, scroll.offset());

        let card = scroll.to_screen(layout.card);
        draw_card(ctx, card, false, 1.0);

        let inner_x = card.x + FORM_PAD;
        let label_size = theme.font_size_small + 2.0;

        text_renderer.draw_ui_text(
            join.form_title,
            inner_x,
            card.y + FORM_PAD + theme.font_size_large * 0.8,
            theme.font_size_large,
            theme.text_primary,
        );

        let email_rect = scroll.to_screen(layout.email_input);
        text_renderer.draw_ui_text(
            join.email_label,
            inner_x,
            email_rect.y - 10.0,
            label_size,
            theme.text_secondary,
        );
        self.email_input
            .draw(ctx, text_renderer, email_rect, self.form.email());

        if let Some(first) = layout.checkbox_rows.first() {
            let first = scroll.to_screen(*first);
            text_renderer.draw_ui_text(
                join.interests_label,
                inner_x,
                first.y - 10.0,
                label_size,
                theme.text_secondary,
            );
        }
        for (tag, rect) in join.interests.iter().zip(&layout.checkbox_rows) {
            draw_checkbox_row(
                ctx,
                text_renderer,
                scroll.to_screen(*rect),
                tag,
                self.form.has_interest(tag),
            );
        }

        let select_rect = scroll.to_screen(layout.select_rect);
        text_renderer.draw_ui_text(
            join.background_label,
            inner_x,
            select_rect.y - 10.0,
            label_size,
            theme.text_secondary,
        );
        self.background.draw(ctx, text_renderer, select_rect);

        self.submit.draw(ctx, text_renderer);

        // 成功横幅插在提交按钮下方，表单保持原值展示
        if let Some(banner) = layout.banner {
            let banner = scroll.to_screen(banner);
            draw_rounded_rect(
                banner.x,
                banner.y,
                banner.w,
                banner.h,
                theme.corner_radius,
                mix(theme.success, theme.bg_primary, 0.88),
            );
            let text_color = mix(theme.success, Color::new(0.0, 0.0, 0.0, 1.0), 0.3);
            draw_icon(
                Icon::Check,
                banner.x + 16.0,
                banner.y + (banner.h - 20.0) / 2.0,
                20.0,
                text_color,
            );
            text_renderer.draw_ui_text(
                join.success_message,
                banner.x + 16.0 + 20.0 + 12.0,
                banner.y + (banner.h + label_size * 0.7) / 2.0,
                label_size,
                text_color,
            );
        }

        // 其他联系方式
        let connect_y = layout.connect_top - scroll.offset();
        text_renderer.draw_text_centered(
            join.connect_title,
            ctx.screen_width / 2.0,
            connect_y + theme.font_size_normal * 0.8,
            theme.font_size_normal,
            theme.text_primary,
        );
        for (contact, rect) in join.contacts.iter().zip(&layout.contact_rows) {
            let row = scroll.to_screen(*rect);
            let icon_size = 18.0;
            draw_icon(
                contact.icon,
                row.x,
                row.y + (row.h - icon_size) / 2.0,
                icon_size,
                theme.accent,
            );
            text_renderer.draw_ui_text(
                contact.label,
                row.x + icon_size + 10.0,
                row.y + (row.h + label_size * 0.7) / 2.0,
                label_size,
                theme.text_secondary,
            );
        }

        // 展开列表盖在页内其他组件之上，最后画
        self.background.draw_dropdown(ctx, text_renderer, select_rect);
    }

    /// 页面总高（不含页脚）。提交成功后横幅会把页面撑高。
    pub fn content_height(&self, ctx: &UiContext) -> f32 {
        self.layout(ctx).total_height
    }

    /// 加入页没有揭示区块
    pub fn reveal_stats(&self) -> (usize, usize) {
        (0, 0)
    }

    pub fn reveal_bands(&self, _ctx: &UiContext) -> Vec<site_core::Band> {
        Vec::new()
    }

    /// 卸载：清空表单并取消未到期的复位倒计时
    pub fn unmount(&mut self) {
        self.form.reset();
    }

    /// 标记需要重新初始化
    pub fn mark_needs_init(&mut self) {
        self.needs_init = true;
    }

    /// 是否需要初始化
    pub fn needs_init(&self) -> bool {
        self.needs_init
    }

    fn layout(&self, ctx: &UiContext) -> JoinLayout {
        let theme = &ctx.theme;
        let area = ctx.content_area();
        let join = &self.catalog.join;
        let label_size = theme.font_size_small + 2.0;
        let label_h = label_size * 1.2 + 8.0;

        let card_w = area.w.min(FORM_MAX_WIDTH);
        let card_x = ctx.screen_width / 2.0 - card_w / 2.0;
        let inner_x = card_x + FORM_PAD;
        let inner_w = card_w - FORM_PAD * 2.0;
        let card_top = theme.navbar_height + PAGE_HERO_HEIGHT + theme.section_padding;

        let mut y = card_top + FORM_PAD + theme.font_size_large * 1.2 + 24.0;

        y += label_h;
        let email_input = Rect::new(inner_x, y, inner_w, INPUT_H);
        y += INPUT_H + 20.0;

        y += label_h;
        let checkbox_rows: Vec<Rect> = (0..join.interests.len())
            .map(|i| Rect::new(inner_x, y + i as f32 * (ROW_H + ROW_GAP), inner_w, ROW_H))
            .collect();
        y += join.interests.len() as f32 * (ROW_H + ROW_GAP) - ROW_GAP + 20.0;

        y += label_h;
        let select_rect = Rect::new(inner_x, y, inner_w, INPUT_H);
        y += INPUT_H + 28.0;

        let submit = Rect::new(inner_x, y, inner_w, theme.button_height);
        y += theme.button_height;

        let banner = if self.form.submitted() {
            y += 16.0;
            let rect = Rect::new(inner_x, y, inner_w, BANNER_H);
            y += BANNER_H;
            Some(rect)
        } else {
            None
        };

        y += FORM_PAD;
        let card = Rect::new(card_x, card_top, card_w, y - card_top);

        // 联系方式居中排在卡片下方
        let connect_top = y + 48.0;
        let mut row_y = connect_top + theme.font_size_normal * 1.2 + 20.0;
        let contact_rows: Vec<Rect> = join
            .contacts
            .iter()
            .map(|contact| {
                let row_w = 18.0 + 10.0 + estimate_text_width(contact.label, label_size);
                let rect = Rect::new(
                    ctx.screen_width / 2.0 - row_w / 2.0,
                    row_y,
                    row_w,
                    CONTACT_ROW_H,
                );
                row_y += CONTACT_ROW_H + 4.0;
                rect
            })
            .collect();

        JoinLayout {
            card,
            email_input,
            checkbox_rows,
            select_rect,
            submit,
            banner,
            connect_top,
            contact_rows,
            total_height: row_y + theme.section_padding,
        }
    }
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

    fn screen_with_layout() -> (JoinScreen, UiContext, ScrollView, JoinLayout) {
        let mut screen = JoinScreen::new(Catalog::builtin());
        let mut ctx = desktop_ctx();
        let scroll = ScrollView::new();
        // 第一帧完成初始化
        screen.update(&mut ctx, &scroll, 0.016);
        let layout = screen.layout(&ctx);
        (screen, ctx, scroll, layout)
    }

    #[test]
    fn test_typing_lands_in_form() {
        let (mut screen, _, scroll, layout) = screen_with_layout();

        // 点击输入框获得焦点
        let input_rect = scroll.to_screen(layout.email_input);
        let mut press = desktop_ctx();
        press.mouse_pos = Vec2::new(input_rect.x + 5.0, input_rect.y + 5.0);
        press.mouse_just_pressed = true;
        screen.update(&mut press, &scroll, 0.016);

        // 键入三个字符
        let mut typing = desktop_ctx();
        typing.mouse_pos = Vec2::new(input_rect.x + 5.0, input_rect.y + 5.0);
        typing.typed = vec!['a', '@', 'b'];
        screen.update(&mut typing, &scroll, 0.016);
        assert_eq!(screen.form.email(), "a@b");
    }

    #[test]
    fn test_checkbox_click_toggles_interest() {
        let (mut screen, _, scroll, layout) = screen_with_layout();
        let tag = Catalog::builtin().join.interests[2];
        let row = scroll.to_screen(layout.checkbox_rows[2]);

        let mut click = desktop_ctx();
        click.mouse_pos = Vec2::new(row.x + row.w - 10.0, row.y + row.h / 2.0);
        click.mouse_just_released = true;
        screen.update(&mut click, &scroll, 0.016);
        assert!(screen.form.has_interest(tag));

        // 再点一次取消勾选
        let mut again = desktop_ctx();
        again.mouse_pos = Vec2::new(row.x + row.w - 10.0, row.y + row.h / 2.0);
        again.mouse_just_released = true;
        screen.update(&mut again, &scroll, 0.016);
        assert!(!screen.form.has_interest(tag));
    }

    #[test]
    fn test_submit_with_empty_email_does_nothing() {
        let (mut screen, _, scroll, layout) = screen_with_layout();
        let submit = scroll.to_screen(layout.submit);

        let mut click = desktop_ctx();
        click.mouse_pos = Vec2::new(submit.x + 10.0, submit.y + 10.0);
        click.mouse_just_released = true;
        screen.update(&mut click, &scroll, 0.016);
        assert!(!screen.form.submitted());
    }

    #[test]
    fn test_submit_banner_grows_page() {
        let (mut screen, ctx, scroll, layout) = screen_with_layout();
        let before = screen.content_height(&ctx);

        screen.form.set_email("a@b.c");
        let submit = scroll.to_screen(layout.submit);
        let mut click = desktop_ctx();
        click.mouse_pos = Vec2::new(submit.x + 10.0, submit.y + 10.0);
        click.mouse_just_released = true;
        screen.update(&mut click, &scroll, 0.016);

        assert!(screen.form.submitted());
        // 成功横幅把页面撑高
        assert!(screen.content_height(&ctx) > before);
    }

    #[test]
    fn test_open_dropdown_blocks_submit_underneath() {
        let (mut screen, _, scroll, layout) = screen_with_layout();
        screen.form.set_email("a@b.c");

        // 打开下拉
        let select = scroll.to_screen(layout.select_rect);
        let mut open = desktop_ctx();
        open.mouse_pos = Vec2::new(select.x + 10.0, select.y + 10.0);
        open.mouse_just_released = true;
        screen.update(&mut open, &scroll, 0.016);
        assert!(screen.background.is_open());

        // 在盖住提交按钮的列表区域释放：选中选项，不触发提交
        let submit = scroll.to_screen(layout.submit);
        let mut pick = desktop_ctx();
        pick.mouse_pos = Vec2::new(submit.x + 10.0, submit.y + 10.0);
        pick.mouse_just_released = true;
        screen.update(&mut pick, &scroll, 0.016);
        assert!(!screen.background.is_open());
        assert!(screen.background.selected().is_some());
        assert!(!screen.form.submitted());
    }

    #[test]
    fn test_countdown_resets_over_frames() {
        let (mut screen, _, scroll, _) = screen_with_layout();
        screen.form.set_email("a@b.c");
        screen.form.submit();

        // 2.9 秒内保持已提交
        let mut ctx = desktop_ctx();
        for _ in 0..29 {
            screen.update(&mut ctx, &scroll, 0.1);
        }
        assert!(screen.form.submitted());

        // 跨过 3 秒整点后自动清空
        screen.update(&mut ctx, &scroll, 0.2);
        assert!(!screen.form.submitted());
        assert_eq!(screen.form.email(), "");
    }

    #[test]
    fn test_unmount_resets_form_and_remount_rebuilds_widgets() {
        let (mut screen, _, scroll, layout) = screen_with_layout();
        screen.form.set_email("a@b.c");

        // 选中一个背景选项
        let select = scroll.to_screen(layout.select_rect);
        let mut open = desktop_ctx();
        open.mouse_pos = Vec2::new(select.x + 10.0, select.y + 10.0);
        open.mouse_just_released = true;
        screen.update(&mut open, &scroll, 0.016);
        let dropdown = screen.background.dropdown_rect(select);
        let mut pick = desktop_ctx();
        pick.mouse_pos = Vec2::new(dropdown.x + 10.0, dropdown.y + 10.0);
        pick.mouse_just_released = true;
        screen.update(&mut pick, &scroll, 0.016);
        assert!(screen.background.selected().is_some());

        // 卸载清空表单，重新挂载后下拉选择也回到初始
        screen.unmount();
        screen.mark_needs_init();
        assert_eq!(screen.form.email(), "");
        let mut ctx = desktop_ctx();
        screen.update(&mut ctx, &scroll, 0.016);
        assert_eq!(screen.background.selected(), None);
    }
}
