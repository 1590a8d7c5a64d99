use crate::app::App;
use crate::state::AppState;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};

mod categories;
mod detail;
mod dialog;
mod reader;
mod settings;
mod shelf;

fn is_text_input_mode(app: &App) -> bool {
    app.state == AppState::Dialog
}

fn handle_back(app: &mut App) {
    match app.state {
        AppState::Shelf => {
            app.should_quit = true;
        }
        AppState::Detail => {
            app.current_series = None;
            app.state = AppState::Shelf;
        }
        AppState::Reading => {
            app.close_reader();
        }
        AppState::Categories | AppState::Settings => {
            app.state = AppState::Shelf;
        }
        AppState::CategoryAssign => {
            app.close_category_assign();
        }
        AppState::Dialog => {
            app.close_dialog();
        }
    }
}

/// 通用列表导航函数
///
/// 根据移动方向计算新的选中索引，支持循环导航。
///
/// # Arguments
///
/// * `current` - 当前选中索引
/// * `len` - 列表长度
/// * `move_up` - 是否向上移动（`true` 为向上，`false` 为向下）
///
/// # Returns
///
/// 新的选中索引。如果列表为空则返回 `None`。
pub(super) fn navigate_list(current: Option<usize>, len: usize, move_up: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let new_idx = if move_up {
        current
            .map(|idx| if idx == 0 { len - 1 } else { idx - 1 })
            .unwrap_or(len - 1)
    } else {
        current.map(|idx| (idx + 1) % len).unwrap_or(0)
    };

    Some(new_idx)
}

/// 处理键盘事件
///
/// 根据当前应用状态将键盘事件分发到对应的处理函数。
pub fn handle_key(app: &mut App, key: KeyCode) {
    app.error_message = None;

    if matches!(key, KeyCode::Esc) {
        handle_back(app);
        return;
    }

    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) && !is_text_input_mode(app) {
        app.save_current_progress();
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Shelf => shelf::handle_shelf_key(app, key),
        AppState::Detail => detail::handle_detail_key(app, key),
        AppState::Reading => reader::handle_reader_key(app, key),
        AppState::Categories => categories::handle_categories_key(app, key),
        AppState::CategoryAssign => categories::handle_assign_key(app, key),
        AppState::Settings => settings::handle_settings_key(app, key),
        AppState::Dialog => dialog::handle_dialog_key(app, key),
    }
}

/// 处理鼠标事件
///
/// 将鼠标滚动事件转换为对应的键盘事件并分发。
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let key = match mouse.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    if app.state != AppState::Dialog {
        handle_key(app, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{create_chapter_dir, create_test_app};
    use crate::page::ReadingMode;
    use crossterm::event::KeyModifiers;

    fn press_all(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            handle_key(app, *key);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_navigate_list_wrap_and_empty() {
        assert_eq!(navigate_list(None, 3, false), Some(0));
        assert_eq!(navigate_list(Some(0), 3, true), Some(2));
        assert_eq!(navigate_list(Some(2), 3, false), Some(0));
        assert_eq!(navigate_list(Some(0), 0, false), None);
    }

    #[test]
    fn test_handle_key_shelf_quit() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_on_shelf_quits() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_in_dialog_is_text_input_not_quit() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state, AppState::Dialog);

        handle_key(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.dialog.as_ref().unwrap().value(0), "q");
    }

    #[test]
    fn test_full_flow_add_series_chapter_and_read_manga() {
        let (mut app, dir) = create_test_app();
        let folder = create_chapter_dir(dir.path(), "vol1", 3);

        // 添加漫画
        handle_key(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "浪客剑心");
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Shelf);
        assert_eq!(app.library.series.len(), 1);

        // 进入详情，切换到日漫模式
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Detail);
        press_all(&mut app, &[KeyCode::Char('m'), KeyCode::Char('m')]);
        assert_eq!(app.library.series[0].mode, ReadingMode::Manga);

        // 添加章节
        handle_key(&mut app, KeyCode::Char('a'));
        assert_eq!(app.dialog.as_ref().unwrap().value(0), "1");
        handle_key(&mut app, KeyCode::Tab);
        type_text(&mut app, folder.to_str().unwrap());
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Detail);
        assert_eq!(app.library.series[0].chapters.len(), 1);

        // 阅读：日漫模式左键是下一页
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Reading);
        handle_key(&mut app, KeyCode::Left);
        assert_eq!(app.reader.as_ref().unwrap().position, 1);
        handle_key(&mut app, KeyCode::Right);
        assert_eq!(app.reader.as_ref().unwrap().position, 0);
        handle_key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.reader.as_ref().unwrap().position, 1);

        handle_key(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Detail);
        assert_eq!(app.library.series[0].progress.as_ref().unwrap().page, 2);

        handle_key(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Shelf);
    }

    #[test]
    fn test_dialog_error_is_shown_and_dialog_stays_open() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, KeyCode::Char('a'));
        handle_key(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Dialog);
        assert_eq!(app.error_message.as_deref(), Some("漫画标题不能为空"));

        handle_key(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Shelf);
        assert!(app.library.series.is_empty());
    }

    #[test]
    fn test_handle_mouse_scroll_down_shelf_changes_selection() {
        let (mut app, _dir) = create_test_app();
        app.add_series("a", "", "").unwrap();
        app.add_series("b", "", "").unwrap();
        app.selected_series_index = None;

        let mouse_down = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, mouse_down);
        handle_mouse(&mut app, mouse_down);

        assert_eq!(app.selected_series_index, Some(1));
    }

    #[test]
    fn test_handle_mouse_ignored_in_dialog() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, KeyCode::Char('a'));

        let mouse_up = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, mouse_up);

        assert_eq!(app.state, AppState::Dialog);
        assert_eq!(app.dialog.as_ref().unwrap().selected_field, 0);
    }
}
