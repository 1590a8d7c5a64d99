use ratatui::prelude::*;
use ratatui::widgets::*;
use std::path::{Path, PathBuf};

use super::utils::{Palette, render_help_info, truncate_to_width};
use crate::app::{App, ReaderState};
use crate::page::{PageLayout, PageSlot, ReadingMode};

fn page_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 一张图片占一个面板，显示文件名
fn render_page(f: &mut Frame, page: Option<&PathBuf>, title: &str, palette: Palette, area: Rect) {
    let (text, style) = match page {
        Some(path) => (
            page_name(path),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        None => ("(空白)".to_string(), Style::default().fg(palette.muted)),
    };
    let inner_width = area.width.saturating_sub(2) as usize;
    let top_padding = area.height.saturating_sub(3) / 2;

    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(truncate_to_width(&text, inner_width)).style(style));

    let pane = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(title.to_string()),
    );
    f.render_widget(pane, area);
}

fn render_slot(f: &mut Frame, reader: &ReaderState, slot: &PageSlot<PathBuf>, palette: Palette, area: Rect) {
    if reader.mode == ReadingMode::SinglePage {
        let width = (area.width / 2).max(area.width.min(30));
        let pane_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: area.height,
        };
        render_page(f, slot.left.as_ref(), "", palette, pane_area);
        return;
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // 日漫模式先读右页
    let (left_title, right_title) = if reader.mode.is_right_to_left() {
        ("后", "先")
    } else {
        ("先", "后")
    };
    render_page(f, slot.left.as_ref(), left_title, palette, panes[0]);
    render_page(f, slot.right.as_ref(), right_title, palette, panes[1]);
}

/// 条漫模式：从当前图片开始向下列出
fn render_scroll(f: &mut Frame, reader: &ReaderState, pages: &[PathBuf], palette: Palette, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = pages
        .iter()
        .enumerate()
        .skip(reader.position)
        .take(area.height as usize)
        .map(|(index, path)| {
            let text = format!("{:>4}  {}", index + 1, page_name(path));
            let style = if index == reader.position {
                Style::default().fg(palette.text).bg(palette.highlight_bg)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(truncate_to_width(&text, width)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(list, area);
}

pub fn render_reader(f: &mut Frame, app: &App) {
    let Some(reader) = &app.reader else {
        return;
    };
    let area = f.area();
    let palette = Palette::for_theme(app.settings.theme);

    let header = Paragraph::new(format!(
        "{} · {}  [{}]",
        reader.series_title,
        reader.chapter_title,
        reader.mode.label()
    ))
    .style(Style::default().fg(palette.title))
    .alignment(Alignment::Center);
    f.render_widget(
        header,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.min(1),
        },
    );

    let content_area = Rect {
        x: area.x + area.width.min(1),
        y: area.y + area.height.min(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(3),
    };

    if reader.layout.is_empty() {
        let empty = Paragraph::new("本章没有图片")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("状态"));
        f.render_widget(empty, content_area);
    } else {
        match &reader.layout {
            PageLayout::Paged(_) => {
                if let Some(slot) = reader.current_slot() {
                    render_slot(f, reader, slot, palette, content_area);
                }
            }
            PageLayout::Scroll { pages, .. } => {
                render_scroll(f, reader, pages, palette, content_area);
            }
        }
    }

    // 页码放在标题行右侧，倒数第二行留给错误提示
    let indicator = Paragraph::new(reader.page_indicator())
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Right);
    f.render_widget(
        indicator,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width.saturating_sub(1),
            height: area.height.min(1),
        },
    );

    // 根据终端宽度自适应帮助信息
    let width = area.width as usize;
    let help_text = match (reader.mode, width >= 70) {
        (ReadingMode::Webtoon, true) => "↑↓/jk/Space: 滚动  [/]: 上/下一话  Esc: 返回  q: 退出",
        (ReadingMode::Webtoon, false) => "jk:滚动 []:换话 Esc:返回",
        (ReadingMode::Manga, true) => "←/h: 下一页  →/l: 上一页  Space: 下一页  [/]: 上/下一话  Esc: 返回",
        (ReadingMode::Manga, false) => "h:下页 l:上页 []:换话 Esc:返回",
        (_, true) => "←/h: 上一页  →/l: 下一页  Space: 下一页  [/]: 上/下一话  Esc: 返回",
        (_, false) => "h:上页 l:下页 []:换话 Esc:返回",
    };
    render_help_info(f, help_text, area);
}
