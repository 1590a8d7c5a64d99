use ratatui::prelude::*;
use ratatui::style::Modifier;
use ratatui::widgets::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Theme;

/// 界面配色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub highlight_bg: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Default => Palette {
                text: Color::White,
                muted: Color::Gray,
                title: Color::Cyan,
                highlight_bg: Color::DarkGray,
                border: Color::Reset,
            },
            Theme::Light => Palette {
                text: Color::Black,
                muted: Color::DarkGray,
                title: Color::Blue,
                highlight_bg: Color::Gray,
                border: Color::DarkGray,
            },
            Theme::Dark => Palette {
                text: Color::Gray,
                muted: Color::DarkGray,
                title: Color::LightMagenta,
                highlight_bg: Color::Black,
                border: Color::DarkGray,
            },
        }
    }
}

pub fn render_help_info(f: &mut Frame, help_text: &str, area: Rect) {
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let help_area = Rect {
        x: area.x,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    f.render_widget(help, help_area);
}

pub fn render_error_message(f: &mut Frame, error_msg: &str, area: Rect) {
    let error = Paragraph::new(format!("⚠ {}", error_msg))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    let error_area = Rect {
        x: area.x,
        y: area.height.saturating_sub(2),
        width: area.width,
        height: area.height.min(1),
    };

    f.render_widget(error, error_area);
}

/// 页面顶部的标题
pub fn render_title(f: &mut Frame, title: &str, color: Color, area: Rect) {
    let title = Paragraph::new(title)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    let title_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.min(2),
    };

    f.render_widget(title, title_area);
}

/// 标题下方、帮助栏上方的主体区域
pub fn body_area(area: Rect) -> Rect {
    Rect {
        x: area.x + area.width.min(2),
        y: area.y + area.height.min(2),
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(3),
    }
}

/// 列表项前缀
pub fn selection_prefix(selected: bool) -> &'static str {
    if selected { ">> " } else { "   " }
}

/// 按显示宽度截断字符串，超出部分用 `…` 表示
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// 在 `area` 中居中放置指定大小的矩形
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
