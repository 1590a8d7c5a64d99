use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{Palette, body_area, render_help_info, render_title, selection_prefix};
use crate::app::App;

pub fn render_settings(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = Palette::for_theme(app.settings.theme);

    render_title(f, "设置", palette.title, area);

    let options = [
        ("界面配色", app.settings.theme.label()),
        ("新漫画默认阅读模式", app.settings.default_mode.label()),
    ];
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(index, (name, value))| {
            let prefix = selection_prefix(Some(index) == app.selected_setting);
            ListItem::new(format!("{}{}: {}", prefix, name, value))
                .style(Style::default().fg(palette.text))
        })
        .collect();

    let menu_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("选择选项"))
        .highlight_style(Style::default().bg(palette.highlight_bg))
        .highlight_symbol("");

    let mut state = ListState::default();
    state.select(app.selected_setting);

    f.render_stateful_widget(menu_list, body_area(area), &mut state);

    let help_text = "↑/↓: 选择选项 | Enter: 切换 | Esc: 返回书架";
    render_help_info(f, help_text, area);
}
