//! # UI 主题
//!
//! 站点的颜色、字号、间距与断点。取色对照原站的浅色设计稿，
//! `Tone` 到具体颜色的映射也集中在这里，内容层只持有色调标签。

use macroquad::prelude::Color;
use site_core::{Gradient, Tone};

/// UI 主题配置
#[derive(Debug, Clone)]
pub struct Theme {
    // ===== 颜色 =====
    /// 页面底色（白）
    pub bg_primary: Color,
    /// 次要底色（浅灰，隔行区块用）
    pub bg_secondary: Color,
    /// 卡片底色
    pub bg_card: Color,
    /// 覆盖层底色（半透明黑）
    pub bg_overlay: Color,
    /// 页脚底色（深灰）
    pub bg_footer: Color,

    /// 主文字色
    pub text_primary: Color,
    /// 次要文字色
    pub text_secondary: Color,
    /// 弱化文字色（卡片元信息）
    pub text_muted: Color,
    /// 反白文字色（深色或渐变底上用）
    pub text_inverse: Color,
    /// 页脚文字色
    pub footer_text: Color,
    /// 页脚弱化文字色
    pub footer_text_dim: Color,

    /// 强调色（品牌蓝）
    pub accent: Color,
    /// 强调色悬停
    pub accent_hover: Color,
    /// 强调色按下
    pub accent_pressed: Color,
    /// 强调色的深底变体（渐变底上的按钮文字）
    pub accent_deep: Color,

    /// 输入框与卡片描边
    pub outline: Color,
    /// 分隔线
    pub divider: Color,

    /// 危险色
    pub danger: Color,
    /// 成功色
    pub success: Color,
    /// 警告色
    pub warning: Color,

    // ===== 字号 =====
    /// 首屏大标题字号
    pub font_size_hero: f32,
    /// 页面标题字号
    pub font_size_title: f32,
    /// 区块标题字号
    pub font_size_large: f32,
    /// 正文字号
    pub font_size_normal: f32,
    /// 辅助文字字号
    pub font_size_small: f32,

    // ===== 尺寸 =====
    /// 导航栏高度
    pub navbar_height: f32,
    /// 内容栏最大宽度
    pub content_max_width: f32,
    /// 窄屏断点（低于此宽度导航收起为汉堡菜单）
    pub breakpoint_md: f32,
    /// 宽屏断点（卡片栅格升到最多列数）
    pub breakpoint_lg: f32,
    /// 区块竖向留白
    pub section_padding: f32,
    /// 按钮高度
    pub button_height: f32,
    /// 按钮最小宽度
    pub button_min_width: f32,
    /// 圆角半径
    pub corner_radius: f32,
    /// 大圆角半径（卡片）
    pub corner_radius_large: f32,
    /// 标准间距
    pub spacing: f32,
    /// 大间距
    pub spacing_large: f32,
    /// 小间距
    pub spacing_small: f32,
    /// 内边距
    pub padding: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// 浅色主题（站点唯一主题）
    pub fn light() -> Self {
        Self {
            // 背景
            bg_primary: Color::new(1.0, 1.0, 1.0, 1.0),
            bg_secondary: Color::new(0.976, 0.98, 0.984, 1.0), // gray-50
            bg_card: Color::new(1.0, 1.0, 1.0, 1.0),
            bg_overlay: Color::new(0.0, 0.0, 0.0, 0.5),
            bg_footer: Color::new(0.067, 0.094, 0.153, 1.0), // gray-900

            // 文字
            text_primary: Color::new(0.067, 0.094, 0.153, 1.0),
            text_secondary: Color::new(0.294, 0.333, 0.388, 1.0), // gray-600
            text_muted: Color::new(0.42, 0.447, 0.502, 1.0),      // gray-500
            text_inverse: Color::new(1.0, 1.0, 1.0, 1.0),
            footer_text: Color::new(0.95, 0.95, 0.97, 1.0),
            footer_text_dim: Color::new(0.612, 0.639, 0.686, 1.0), // gray-400

            // 强调色（蓝色调）
            accent: Color::new(0.146, 0.388, 0.922, 1.0), // blue-600
            accent_hover: Color::new(0.114, 0.306, 0.847, 1.0),
            accent_pressed: Color::new(0.118, 0.251, 0.686, 1.0),
            accent_deep: Color::new(0.118, 0.227, 0.541, 1.0), // blue-900

            // 描边
            outline: Color::new(0.82, 0.835, 0.859, 1.0), // gray-300
            divider: Color::new(0.898, 0.906, 0.922, 1.0),

            // 状态色
            danger: Color::new(0.937, 0.267, 0.267, 1.0),
            success: Color::new(0.133, 0.773, 0.369, 1.0),
            warning: Color::new(0.918, 0.702, 0.031, 1.0),

            // 字号
            font_size_hero: 64.0,
            font_size_title: 48.0,
            font_size_large: 28.0,
            font_size_normal: 22.0,
            font_size_small: 16.0,

            // 尺寸
            navbar_height: 64.0,
            content_max_width: 1280.0,
            breakpoint_md: 768.0,
            breakpoint_lg: 1024.0,
            section_padding: 80.0,
            button_height: 50.0,
            button_min_width: 200.0,
            corner_radius: 8.0,
            corner_radius_large: 16.0,
            spacing: 16.0,
            spacing_large: 32.0,
            spacing_small: 8.0,
            padding: 20.0,
        }
    }

    /// 色调标签到具体颜色的映射
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Blue => Color::new(0.231, 0.51, 0.965, 1.0),
            Tone::Cyan => Color::new(0.024, 0.714, 0.831, 1.0),
            Tone::Purple => Color::new(0.659, 0.333, 0.969, 1.0),
            Tone::Pink => Color::new(0.925, 0.282, 0.6, 1.0),
            Tone::Green => Color::new(0.133, 0.773, 0.369, 1.0),
            Tone::Teal => Color::new(0.078, 0.722, 0.651, 1.0),
            Tone::Orange => Color::new(0.976, 0.451, 0.086, 1.0),
            Tone::Red => Color::new(0.937, 0.267, 0.267, 1.0),
            Tone::Yellow => Color::new(0.918, 0.702, 0.031, 1.0),
        }
    }

    /// 渐变标签到两端颜色
    pub fn gradient_colors(&self, gradient: Gradient) -> (Color, Color) {
        (self.tone_color(gradient.from), self.tone_color(gradient.to))
    }

    /// 渐变标签的淡色变体（内页横幅底色）
    pub fn gradient_tint(&self, gradient: Gradient) -> (Color, Color) {
        let (from, to) = self.gradient_colors(gradient);
        (mix(from, self.bg_primary, 0.92), mix(to, self.bg_primary, 0.92))
    }

    /// 徽章配色：淡底 + 深字
    pub fn badge_colors(&self, tone: Tone) -> (Color, Color) {
        let base = self.tone_color(tone);
        (mix(base, self.bg_primary, 0.85), mix(base, self.text_primary, 0.35))
    }
}

/// 两色线性插值，t 取 0 得 a、取 1 得 b
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// 为颜色套用透明系数
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha)
}
