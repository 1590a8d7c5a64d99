use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{Palette, body_area, render_help_info, render_title, selection_prefix};
use crate::app::App;

pub fn render_categories(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = Palette::for_theme(app.settings.theme);

    render_title(f, "分类", palette.title, area);

    let items: Vec<ListItem> = app
        .library
        .categories
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let prefix = selection_prefix(Some(index) == app.selected_category_index);
            let count = app.library.series_in_category(name).len();
            let current = if *name == app.current_category { " *" } else { "" };
            ListItem::new(format!("{}{} ({}){}", prefix, name, count, current))
                .style(Style::default().fg(palette.text))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("选择要显示的分类"))
        .highlight_style(Style::default().bg(palette.highlight_bg))
        .highlight_symbol("");

    let mut state = ListState::default();
    state.select(app.selected_category_index);

    f.render_stateful_widget(list, body_area(area), &mut state);

    let help_text = "↑/↓: 选择 | Enter: 显示 | a: 新建 | d: 删除 | Esc: 返回书架";
    render_help_info(f, help_text, area);
}

/// 为书架选中的漫画勾选分类
pub fn render_category_assign(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = Palette::for_theme(app.settings.theme);
    let series = app.assign_target.and_then(|i| app.library.series.get(i));

    let title = match series {
        Some(s) => format!("分类 · {}", s.title),
        None => "分类".to_string(),
    };
    render_title(f, &title, palette.title, area);

    let items: Vec<ListItem> = app
        .user_categories()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let prefix = selection_prefix(Some(index) == app.selected_assign_index);
            let checked = series.is_some_and(|s| s.in_category(name));
            let mark = if checked { "[x]" } else { "[ ]" };
            ListItem::new(format!("{}{} {}", prefix, mark, name))
                .style(Style::default().fg(palette.text))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("所属分类"))
        .highlight_style(Style::default().bg(palette.highlight_bg))
        .highlight_symbol("");

    let mut state = ListState::default();
    state.select(app.selected_assign_index);

    f.render_stateful_widget(list, body_area(area), &mut state);

    let help_text = "↑/↓: 选择 | Enter/Space: 勾选 | Esc: 返回书架";
    render_help_info(f, help_text, area);
}
