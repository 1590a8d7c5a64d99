use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{Palette, centered_rect, render_help_info, truncate_to_width};
use crate::app::App;

/// 在当前界面上方弹出输入对话框
pub fn render_dialog(f: &mut Frame, app: &App) {
    let Some(dialog) = &app.dialog else {
        return;
    };
    let area = f.area();
    let palette = Palette::for_theme(app.settings.theme);

    let height = dialog.fields.len() as u16 * 3 + 2;
    let popup = centered_rect(area.width.saturating_sub(8).min(72), height, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(dialog.title());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let field_width = inner.width.saturating_sub(3) as usize;
    for (index, field) in dialog.fields.iter().enumerate() {
        let y = inner.y + index as u16 * 3;
        if y >= inner.y + inner.height {
            break;
        }
        let selected = index == dialog.selected_field;
        let (text, style) = if field.value.is_empty() && !selected {
            (field.placeholder.to_string(), Style::default().fg(palette.muted))
        } else if selected {
            (format!("{}▏", field.value), Style::default().fg(palette.text))
        } else {
            (field.value.clone(), Style::default().fg(palette.text))
        };
        let border = if selected { Color::Yellow } else { palette.border };

        let input = Paragraph::new(truncate_to_width(&text, field_width))
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(field.label),
            );
        let field_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: (inner.y + inner.height - y).min(3),
        };
        f.render_widget(input, field_area);
    }

    render_help_info(f, "Tab/↑↓: 切换输入框 | Enter: 确认 | Esc: 取消", area);
}
