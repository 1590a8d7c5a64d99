use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{Palette, body_area, render_help_info, render_title, selection_prefix};
use crate::app::App;

pub fn render_detail(f: &mut Frame, app: &App) {
    let Some(series) = app.current_series.and_then(|i| app.library.series.get(i)) else {
        return;
    };
    let area = f.area();
    let palette = Palette::for_theme(app.settings.theme);

    render_title(f, &series.title, palette.title, area);

    let body = body_area(area);
    let info_height = body.height.min(5);
    let info_area = Rect { height: info_height, ..body };
    let list_area = Rect {
        y: body.y + info_height,
        height: body.height.saturating_sub(info_height),
        ..body
    };

    // 基本信息
    let author = if series.author.is_empty() { "未知" } else { series.author.as_str() };
    let cover = series
        .cover_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "无".to_string());
    let info = Paragraph::new(vec![
        Line::from(format!("作者: {}", author)),
        Line::from(format!("阅读模式: {}", series.mode.label())),
        Line::from(format!(
            "封面: {}  添加于 {}",
            cover,
            series.added_at.format("%Y-%m-%d")
        )),
    ])
    .style(Style::default().fg(palette.text))
    .block(Block::default().borders(Borders::ALL).title("信息"));
    f.render_widget(info, info_area);

    if series.chapters.is_empty() {
        let empty = Paragraph::new("还没有章节，按 a 添加")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("章节"));
        f.render_widget(empty, list_area);
    } else {
        let last_read = series.last_read_chapter();
        let items: Vec<ListItem> = series
            .chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| {
                let prefix = selection_prefix(Some(index) == app.selected_chapter_index);
                let marker = if Some(index) == last_read { "  ← 上次读到" } else { "" };
                ListItem::new(format!("{}{}{}", prefix, chapter.display_title(), marker))
                    .style(Style::default().fg(palette.text))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("章节 (共{}话)", series.chapters.len())),
            )
            .highlight_style(Style::default().bg(palette.highlight_bg))
            .highlight_symbol("");

        let mut state = ListState::default();
        state.select(app.selected_chapter_index);

        f.render_stateful_widget(list, list_area, &mut state);
    }

    let help_text = "↑/↓: 选择章节 | Enter: 阅读 | a: 添加章节 | m: 切换阅读模式 | Esc: 返回书架";
    render_help_info(f, help_text, area);
}
