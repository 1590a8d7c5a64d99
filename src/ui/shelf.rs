use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{Palette, body_area, render_help_info, render_title, selection_prefix, truncate_to_width};
use crate::app::App;
use crate::config::CONFIG;

pub fn render_shelf(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = Palette::for_theme(app.settings.theme);

    let title = if app.current_category == CONFIG.all_category {
        "书架".to_string()
    } else {
        format!("书架 · {}", app.current_category)
    };
    render_title(f, &title, palette.title, area);

    let list_area = body_area(area);
    let shelf = app.shelf_series();

    if shelf.is_empty() {
        let empty = Paragraph::new("这里还没有漫画，按 a 添加")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("状态"));
        f.render_widget(empty, list_area);
    } else {
        let width = list_area.width.saturating_sub(5) as usize;
        let items: Vec<ListItem> = shelf
            .iter()
            .enumerate()
            .filter_map(|(pos, &index)| {
                let series = app.library.series.get(index)?;
                let mut text = series.title.clone();
                if !series.author.is_empty() {
                    text.push_str(&format!(" - {}", series.author));
                }
                text.push_str(&format!("  ({}话, {})", series.chapters.len(), series.mode.label()));
                let text = truncate_to_width(&text, width);
                let prefix = selection_prefix(Some(pos) == app.selected_series_index);
                Some(ListItem::new(format!("{}{}", prefix, text)).style(Style::default().fg(palette.text)))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .title(format!("漫画 (共{}部)", shelf.len())),
            )
            .highlight_style(Style::default().bg(palette.highlight_bg))
            .highlight_symbol("");

        let mut state = ListState::default();
        state.select(app.selected_series_index);

        f.render_stateful_widget(list, list_area, &mut state);
    }

    let help_text = if area.width >= 90 {
        "↑/k ↓/j: 选择  Enter: 详情  a: 添加  e: 修改  t: 分类勾选  c: 分类  s: 设置  q: 退出"
    } else {
        "jk:选择 Enter:详情 a:添加 e:改 t:勾选 c:分类 s:设置 q:退"
    };
    render_help_info(f, help_text, area);
}
