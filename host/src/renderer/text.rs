//! # 文本渲染模块
//!
//! 文本渲染器负责标题、正文、按钮文案的绘制；换行和估宽是
//! 独立的纯函数，页面布局直接调用。
//!
//! ## 设计说明
//!
//! 估宽统一走每字符 `font_size * 0.55` 的近似公式，不查真实
//! 字体度量。这让布局结果与是否加载到自定义字体无关，排版
//! 在无窗口测试里也完全可复现。

use macroquad::prelude::*;

/// 行高相对字号的系数
pub const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// 估算单行文本宽度（布局用，与字体无关）
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.55
}

/// 字号对应的行高
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

/// 按词折行。超宽的单词独占一行，空文本返回空列表。
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if estimate_text_width(&candidate, font_size) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// 折行后的总高度（首行基线到末行底部）
pub fn wrapped_height(line_count: usize, font_size: f32) -> f32 {
    line_count as f32 * line_height(font_size)
}

/// 文本渲染器
#[derive(Debug)]
pub struct TextRenderer {
    /// 自定义字体
    font: Option<Font>,
    /// 是否已初始化
    initialized: bool,
    /// 是否使用自定义字体
    use_custom_font: bool,
}

impl TextRenderer {
    /// 创建新的文本渲染器
    pub fn new() -> Self {
        Self {
            font: None,
            initialized: false,
            use_custom_font: false,
        }
    }

    /// 加载字体
    pub async fn load_font(&mut self, path: &str) -> Result<(), String> {
        // 使用 macroquad 的异步加载方法
        match load_ttf_font(path).await {
            Ok(font) => {
                self.font = Some(font);
                self.initialized = true;
                self.use_custom_font = true;
                println!("✅ 成功加载字体: {}", path);
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 加载字体失败: {} - {}", path, e);
                self.initialized = true;
                self.use_custom_font = false;
                Err(format!("加载字体失败: {}", e))
            }
        }
    }

    /// 检查是否已初始化
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// 检查是否使用自定义字体
    pub fn has_custom_font(&self) -> bool {
        self.use_custom_font && self.font.is_some()
    }

    /// 绘制 UI 文本，`y` 是基线位置
    pub fn draw_ui_text(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.draw_text(text, x, y, font_size, color);
    }

    /// 按估算宽度水平居中绘制
    pub fn draw_text_centered(&self, text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
        let width = estimate_text_width(text, font_size);
        self.draw_text(text, center_x - width / 2.0, y, font_size, color);
    }

    /// 绘制已折行的多行文本，返回末行之后的 y
    pub fn draw_lines(&self, lines: &[String], x: f32, first_baseline: f32, font_size: f32, color: Color) -> f32 {
        let step = line_height(font_size);
        let mut y = first_baseline;
        for line in lines {
            self.draw_text(line, x, y, font_size, color);
            y += step;
        }
        y
    }

    /// 居中绘制已折行的多行文本
    pub fn draw_lines_centered(&self, lines: &[String], center_x: f32, first_baseline: f32, font_size: f32, color: Color) {
        let step = line_height(font_size);
        let mut y = first_baseline;
        for line in lines {
            self.draw_text_centered(line, center_x, y, font_size, color);
            y += step;
        }
    }

    /// 绘制文本（使用自定义字体或默认字体）
    fn draw_text(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        if self.use_custom_font && self.font.is_some() {
            let params = TextParams {
                font: self.font.as_ref(),
                font_size: font_size as u16,
                font_scale: 1.0,
                font_scale_aspect: 1.0,
                color,
                ..Default::default()
            };
            draw_text_ex(text, x, y, params);
        } else {
            // 默认字体（仅支持 ASCII，站点文案全部是 ASCII）
            macroquad::prelude::draw_text(text, x, y, font_size, color);
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_scales_with_length_and_size() {
        assert_eq!(estimate_text_width("", 20.0), 0.0);
        let short = estimate_text_width("AI", 20.0);
        let long = estimate_text_width("AI Safety", 20.0);
        assert!(long > short);
        assert_eq!(estimate_text_width("abcd", 20.0), 4.0 * 20.0 * 0.55);
    }

    #[test]
    fn test_wrap_respects_max_width() {
        let lines = wrap_text(
            "Building a community dedicated to ensuring artificial intelligence benefits humanity",
            16.0,
            300.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(estimate_text_width(line, 16.0) <= 300.0);
        }
    }

    #[test]
    fn test_wrap_preserves_all_words() {
        let text = "Regular reading groups and workshops on AI alignment";
        let lines = wrap_text(text, 18.0, 200.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_single_short_line() {
        let lines = wrap_text("Join Us", 16.0, 500.0);
        assert_eq!(lines, vec!["Join Us".to_string()]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_text("", 16.0, 300.0).is_empty());
        assert!(wrap_text("   ", 16.0, 300.0).is_empty());
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let lines = wrap_text("a interpretability b", 16.0, 60.0);
        // 超宽单词不拆分，独占一行
        assert!(lines.contains(&"interpretability".to_string()));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height(0, 20.0), 0.0);
        assert_eq!(wrapped_height(3, 20.0), 3.0 * 20.0 * LINE_HEIGHT_FACTOR);
    }
}
