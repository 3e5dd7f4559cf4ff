//! # 图标绘制
//!
//! 内容目录里的图标标签在这里落成矢量笔画。图标集是封闭枚举，
//! match 不留通配分支，新增标签时编译器会点名所有遗漏的绘制处。

use macroquad::prelude::*;
use site_core::Icon;

/// 在 `(x, y)` 为左上角、边长 `size` 的方框内绘制图标
pub fn draw_icon(icon: Icon, x: f32, y: f32, size: f32, color: Color) {
    let t = (size * 0.09).max(1.5);
    // 归一化坐标到屏幕坐标
    let px = |u: f32| x + u * size;
    let py = |v: f32| y + v * size;
    let line = |x1: f32, y1: f32, x2: f32, y2: f32| {
        draw_line(px(x1), py(y1), px(x2), py(y2), t, color);
    };
    let ring = |cx: f32, cy: f32, r: f32| {
        draw_circle_lines(px(cx), py(cy), r * size, t, color);
    };

    match icon {
        Icon::Shield => {
            line(0.5, 0.06, 0.88, 0.2);
            line(0.88, 0.2, 0.88, 0.55);
            line(0.88, 0.55, 0.5, 0.94);
            line(0.5, 0.94, 0.12, 0.55);
            line(0.12, 0.55, 0.12, 0.2);
            line(0.12, 0.2, 0.5, 0.06);
        }
        Icon::Brain => {
            ring(0.36, 0.5, 0.26);
            ring(0.64, 0.5, 0.26);
            line(0.5, 0.28, 0.5, 0.72);
        }
        Icon::Users => {
            ring(0.36, 0.32, 0.15);
            line(0.14, 0.8, 0.2, 0.6);
            line(0.2, 0.6, 0.52, 0.6);
            line(0.52, 0.6, 0.58, 0.8);
            line(0.14, 0.8, 0.58, 0.8);
            ring(0.72, 0.38, 0.11);
            line(0.66, 0.74, 0.88, 0.74);
            line(0.88, 0.74, 0.84, 0.58);
        }
        Icon::Mail => {
            line(0.1, 0.22, 0.9, 0.22);
            line(0.9, 0.22, 0.9, 0.78);
            line(0.9, 0.78, 0.1, 0.78);
            line(0.1, 0.78, 0.1, 0.22);
            line(0.1, 0.24, 0.5, 0.55);
            line(0.5, 0.55, 0.9, 0.24);
        }
        Icon::Calendar => {
            line(0.12, 0.2, 0.88, 0.2);
            line(0.88, 0.2, 0.88, 0.88);
            line(0.88, 0.88, 0.12, 0.88);
            line(0.12, 0.88, 0.12, 0.2);
            line(0.12, 0.38, 0.88, 0.38);
            // 挂环
            line(0.32, 0.08, 0.32, 0.26);
            line(0.68, 0.08, 0.68, 0.26);
        }
        Icon::BookOpen => {
            line(0.5, 0.2, 0.5, 0.85);
            line(0.5, 0.2, 0.14, 0.12);
            line(0.14, 0.12, 0.14, 0.76);
            line(0.14, 0.76, 0.5, 0.85);
            line(0.5, 0.2, 0.86, 0.12);
            line(0.86, 0.12, 0.86, 0.76);
            line(0.86, 0.76, 0.5, 0.85);
        }
        Icon::Clock => {
            ring(0.5, 0.5, 0.4);
            line(0.5, 0.5, 0.5, 0.24);
            line(0.5, 0.5, 0.68, 0.6);
        }
        Icon::MapPin => {
            ring(0.5, 0.38, 0.24);
            line(0.3, 0.52, 0.5, 0.92);
            line(0.7, 0.52, 0.5, 0.92);
            draw_circle(px(0.5), py(0.38), size * 0.07, color);
        }
        Icon::ArrowRight => {
            line(0.1, 0.5, 0.85, 0.5);
            line(0.85, 0.5, 0.55, 0.22);
            line(0.85, 0.5, 0.55, 0.78);
        }
        Icon::ChevronDown => {
            line(0.2, 0.35, 0.5, 0.68);
            line(0.5, 0.68, 0.8, 0.35);
        }
        Icon::Menu => {
            line(0.12, 0.26, 0.88, 0.26);
            line(0.12, 0.5, 0.88, 0.5);
            line(0.12, 0.74, 0.88, 0.74);
        }
        Icon::Close => {
            line(0.2, 0.2, 0.8, 0.8);
            line(0.8, 0.2, 0.2, 0.8);
        }
        Icon::Check => {
            line(0.16, 0.55, 0.42, 0.78);
            line(0.42, 0.78, 0.84, 0.26);
        }
        Icon::ExternalLink => {
            line(0.14, 0.3, 0.14, 0.86);
            line(0.14, 0.86, 0.7, 0.86);
            line(0.7, 0.86, 0.7, 0.55);
            line(0.5, 0.5, 0.88, 0.12);
            line(0.88, 0.12, 0.6, 0.12);
            line(0.88, 0.12, 0.88, 0.4);
        }
        Icon::Github => {
            ring(0.5, 0.52, 0.36);
            // 猫耳
            line(0.3, 0.24, 0.34, 0.08);
            line(0.34, 0.08, 0.44, 0.18);
            line(0.7, 0.24, 0.66, 0.08);
            line(0.66, 0.08, 0.56, 0.18);
        }
        Icon::Linkedin => {
            line(0.12, 0.12, 0.88, 0.12);
            line(0.88, 0.12, 0.88, 0.88);
            line(0.88, 0.88, 0.12, 0.88);
            line(0.12, 0.88, 0.12, 0.12);
            // "in" 字形
            draw_circle(px(0.32), py(0.32), size * 0.05, color);
            line(0.32, 0.45, 0.32, 0.72);
            line(0.5, 0.45, 0.5, 0.72);
            line(0.5, 0.52, 0.62, 0.45);
            line(0.62, 0.45, 0.68, 0.52);
            line(0.68, 0.52, 0.68, 0.72);
        }
    }
}
