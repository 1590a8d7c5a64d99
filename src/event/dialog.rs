use crate::app::App;
use crossterm::event::KeyCode;

/// 处理输入对话框的键盘事件
///
/// # Behavior
///
/// - 字符键: 输入到当前字段
/// - `Backspace`: 删除最后一个字符
/// - `Tab`/`Down`: 下一个字段
/// - `BackTab`/`Up`: 上一个字段
/// - `Enter`: 提交，失败时保留对话框并显示错误
pub(super) fn handle_dialog_key(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        if let Err(e) = app.submit_dialog() {
            app.set_error(e.to_string());
        }
        return;
    }

    let Some(dialog) = &mut app.dialog else {
        return;
    };
    match key {
        KeyCode::Char(c) => dialog.push_char(c),
        KeyCode::Backspace => dialog.pop_char(),
        KeyCode::Tab | KeyCode::Down => dialog.next_field(),
        KeyCode::BackTab | KeyCode::Up => dialog.prev_field(),
        _ => {}
    }
}
