//! # UI 组件模块
//!
//! 提供统一的 UI 组件库，用于导航栏、内容卡片、加入表单等。
//!
//! ## 设计说明
//!
//! `UiContext` 是整个宿主层唯一直接读取 macroquad 输入的地方：
//! 组件和页面只消费快照字段，测试时可以直接构造上下文驱动逻辑，
//! 不需要真实窗口。

pub mod button;
pub mod card;
pub mod checkbox;
pub mod icon;
pub mod scroll;
pub mod select;
pub mod text_input;
pub mod theme;

pub use button::{Button, ButtonState, ButtonStyle};
pub use icon::draw_icon;
pub use scroll::ScrollView;
pub use select::SelectBox;
pub use text_input::{TextInput, TextInputEvent};
pub use theme::{mix, with_alpha, Theme};

use macroquad::prelude::*;

/// UI 上下文，存储 UI 渲染所需的共享状态
pub struct UiContext {
    /// 当前主题
    pub theme: Theme,
    /// 屏幕宽度
    pub screen_width: f32,
    /// 屏幕高度
    pub screen_height: f32,
    /// 鼠标位置
    pub mouse_pos: Vec2,
    /// 鼠标是否按下
    pub mouse_pressed: bool,
    /// 鼠标是否刚按下（本帧）
    pub mouse_just_pressed: bool,
    /// 鼠标是否刚释放（本帧）
    pub mouse_just_released: bool,
    /// 本帧滚轮竖向增量
    pub wheel_y: f32,
    /// 本帧输入的可见字符
    pub typed: Vec<char>,
    /// 退格键是否刚按下
    pub backspace_pressed: bool,
    /// 回车键是否刚按下
    pub enter_pressed: bool,
    /// Esc 键是否刚按下
    pub escape_pressed: bool,
    /// 调试开关键（F1）是否刚按下
    pub debug_toggle_pressed: bool,
    /// 启动以来的秒数（循环动画用）
    pub time: f64,
    /// 指针是否已被上层组件占用（导航栏、展开的菜单）
    pub pointer_consumed: bool,
}

impl UiContext {
    /// 创建上下文。窗口尺寸留空，由首帧 `update` 填充，
    /// 这样无窗口环境（测试）也能直接构造。
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            screen_width: 0.0,
            screen_height: 0.0,
            mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            mouse_just_pressed: false,
            mouse_just_released: false,
            wheel_y: 0.0,
            typed: Vec::new(),
            backspace_pressed: false,
            enter_pressed: false,
            escape_pressed: false,
            debug_toggle_pressed: false,
            time: 0.0,
            pointer_consumed: false,
        }
    }

    /// 每帧更新输入快照
    pub fn update(&mut self) {
        self.screen_width = screen_width();
        self.screen_height = screen_height();
        self.mouse_pos = Vec2::new(mouse_position().0, mouse_position().1);
        self.mouse_just_pressed = is_mouse_button_pressed(MouseButton::Left);
        self.mouse_just_released = is_mouse_button_released(MouseButton::Left);
        self.mouse_pressed = is_mouse_button_down(MouseButton::Left);
        self.wheel_y = mouse_wheel().1;
        self.typed.clear();
        while let Some(c) = get_char_pressed() {
            if !c.is_control() {
                self.typed.push(c);
            }
        }
        self.backspace_pressed = is_key_pressed(KeyCode::Backspace);
        self.enter_pressed = is_key_pressed(KeyCode::Enter);
        self.escape_pressed = is_key_pressed(KeyCode::Escape);
        self.debug_toggle_pressed = is_key_pressed(KeyCode::F1);
        self.time = get_time();
        self.pointer_consumed = false;
    }

    /// 标记指针已被占用，之后的 `mouse_in_rect` 全部落空。
    /// 导航栏先于页面更新，借此挡住穿透点击。
    pub fn consume_pointer(&mut self) {
        self.pointer_consumed = true;
    }

    /// 检查点是否在矩形内
    pub fn point_in_rect(&self, point: Vec2, rect: Rect) -> bool {
        point.x >= rect.x && point.x <= rect.x + rect.w &&
        point.y >= rect.y && point.y <= rect.y + rect.h
    }

    /// 检查鼠标是否在矩形内（尊重指针占用标记）
    pub fn mouse_in_rect(&self, rect: Rect) -> bool {
        !self.pointer_consumed && self.point_in_rect(self.mouse_pos, rect)
    }

    /// 居中内容栏：宽度不超过 `content_max_width`，两侧留白
    pub fn content_area(&self) -> Rect {
        let margin = self.theme.padding;
        let width = (self.screen_width - 2.0 * margin).min(self.theme.content_max_width);
        Rect::new((self.screen_width - width) / 2.0, 0.0, width, self.screen_height)
    }

    /// 是否达到中等断点（桌面导航）
    pub fn is_desktop(&self) -> bool {
        self.screen_width >= self.theme.breakpoint_md
    }

    /// 是否达到宽屏断点（栅格最多列数）
    pub fn is_wide(&self) -> bool {
        self.screen_width >= self.theme.breakpoint_lg
    }
}

/// 绘制圆角矩形（简化版，用四个圆角近似）
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
    let r = radius.min(w / 2.0).min(h / 2.0);

    // 中心矩形
    draw_rectangle(x + r, y, w - 2.0 * r, h, color);
    // 左右矩形
    draw_rectangle(x, y + r, r, h - 2.0 * r, color);
    draw_rectangle(x + w - r, y + r, r, h - 2.0 * r, color);

    // 四个角（用圆形近似）
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// 绘制圆角矩形边框
pub fn draw_rounded_rect_lines(x: f32, y: f32, w: f32, h: f32, radius: f32, thickness: f32, color: Color) {
    let r = radius.min(w / 2.0).min(h / 2.0);

    // 上下边
    draw_line(x + r, y, x + w - r, y, thickness, color);
    draw_line(x + r, y + h, x + w - r, y + h, thickness, color);
    // 左右边
    draw_line(x, y + r, x, y + h - r, thickness, color);
    draw_line(x + w, y + r, x + w, y + h - r, thickness, color);

    // 四个角用短线段近似圆弧，macroquad 没有 arc 函数
    let steps = 8;
    let corners = [
        (x + r, y + r, std::f32::consts::PI),            // 左上
        (x + w - r, y + r, std::f32::consts::PI * 1.5),  // 右上
        (x + w - r, y + h - r, 0.0),                     // 右下
        (x + r, y + h - r, std::f32::consts::FRAC_PI_2), // 左下
    ];
    for (cx, cy, start) in corners {
        for i in 0..steps {
            let a1 = start + (i as f32 / steps as f32) * std::f32::consts::FRAC_PI_2;
            let a2 = start + ((i + 1) as f32 / steps as f32) * std::f32::consts::FRAC_PI_2;
            draw_line(
                cx + r * a1.cos(), cy + r * a1.sin(),
                cx + r * a2.cos(), cy + r * a2.sin(),
                thickness, color,
            );
        }
    }
}

/// 横向渐变，用细条带近似
pub fn draw_horizontal_gradient(x: f32, y: f32, w: f32, h: f32, left: Color, right: Color) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let steps = (w / 4.0).ceil().max(1.0) as usize;
    let step_w = w / steps as f32;
    for i in 0..steps {
        let t = (i as f32 + 0.5) / steps as f32;
        // 条带加半像素重叠，避免缝隙
        draw_rectangle(x + i as f32 * step_w, y, step_w + 0.5, h, mix(left, right, t));
    }
}

/// 竖向渐变，用细条带近似
pub fn draw_vertical_gradient(x: f32, y: f32, w: f32, h: f32, top: Color, bottom: Color) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let steps = (h / 4.0).ceil().max(1.0) as usize;
    let step_h = h / steps as f32;
    for i in 0..steps {
        let t = (i as f32 + 0.5) / steps as f32;
        draw_rectangle(x, y + i as f32 * step_h, w, step_h + 0.5, mix(top, bottom, t));
    }
}

/// 圆角横向渐变：中段条带渐变，两端用端点色圆角收口
pub fn draw_rounded_gradient(x: f32, y: f32, w: f32, h: f32, radius: f32, left: Color, right: Color) {
    let r = radius.min(w / 2.0).min(h / 2.0);

    draw_circle(x + r, y + r, r, left);
    draw_circle(x + r, y + h - r, r, left);
    draw_circle(x + w - r, y + r, r, right);
    draw_circle(x + w - r, y + h - r, r, right);
    draw_rectangle(x, y + r, r, h - 2.0 * r, left);
    draw_rectangle(x + w - r, y + r, r, h - 2.0 * r, right);
    draw_horizontal_gradient(x + r, y, w - 2.0 * r, h, left, right);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_rect() {
        let ctx = UiContext::new(Theme::light());
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(ctx.point_in_rect(Vec2::new(10.0, 10.0), rect));
        assert!(ctx.point_in_rect(Vec2::new(110.0, 60.0), rect));
        assert!(!ctx.point_in_rect(Vec2::new(9.0, 10.0), rect));
        assert!(!ctx.point_in_rect(Vec2::new(50.0, 61.0), rect));
    }

    #[test]
    fn test_consumed_pointer_blocks_mouse_in_rect() {
        let mut ctx = UiContext::new(Theme::light());
        ctx.mouse_pos = Vec2::new(50.0, 30.0);
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(ctx.mouse_in_rect(rect));

        ctx.consume_pointer();
        assert!(!ctx.mouse_in_rect(rect));
        // 原始命中检测不受影响
        assert!(ctx.point_in_rect(ctx.mouse_pos, rect));
    }

    #[test]
    fn test_content_area_centers_and_caps_width() {
        let mut ctx = UiContext::new(Theme::light());
        ctx.screen_width = 2000.0;
        ctx.screen_height = 900.0;
        let area = ctx.content_area();
        assert_eq!(area.w, ctx.theme.content_max_width);
        assert_eq!(area.x, (2000.0 - area.w) / 2.0);

        // 窄屏时只留两侧边距
        ctx.screen_width = 400.0;
        let narrow = ctx.content_area();
        assert_eq!(narrow.w, 400.0 - 2.0 * ctx.theme.padding);
        assert_eq!(narrow.x, ctx.theme.padding);
    }

    #[test]
    fn test_breakpoints() {
        let mut ctx = UiContext::new(Theme::light());
        ctx.screen_width = 500.0;
        assert!(!ctx.is_desktop());
        ctx.screen_width = 768.0;
        assert!(ctx.is_desktop());
        assert!(!ctx.is_wide());
        ctx.screen_width = 1280.0;
        assert!(ctx.is_wide());
    }
}
