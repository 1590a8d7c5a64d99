use crate::app::App;
use crate::state::DialogKind;
use crossterm::event::KeyCode;

use super::navigate_list;

/// 处理分类列表的键盘事件
///
/// # Behavior
///
/// - `Up`/`k`: 向上选择
/// - `Down`/`j`: 向下选择
/// - `Enter`: 书架切换到选中分类
/// - `a`: 新建分类
/// - `d`: 删除选中分类（"All" 不可删除）
pub(super) fn handle_categories_key(app: &mut App, key: KeyCode) {
    let len = app.library.categories.len();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_category_index = navigate_list(app.selected_category_index, len, true);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.selected_category_index = navigate_list(app.selected_category_index, len, false);
        }
        KeyCode::Enter => {
            if let Some(name) = app
                .selected_category_index
                .and_then(|i| app.library.categories.get(i))
                .cloned()
            {
                app.select_category(&name);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_dialog(DialogKind::AddCategory);
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if let Err(e) = app.delete_selected_category() {
                app.set_error(e.to_string());
            }
        }
        _ => {}
    }
}

/// 处理分类勾选界面的键盘事件
///
/// # Behavior
///
/// - `Up`/`k`: 向上选择
/// - `Down`/`j`: 向下选择
/// - `Enter`/`Space`: 切换进入界面时选中的漫画是否属于该分类
pub(super) fn handle_assign_key(app: &mut App, key: KeyCode) {
    let categories = app.user_categories();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_assign_index =
                navigate_list(app.selected_assign_index, categories.len(), true);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.selected_assign_index =
                navigate_list(app.selected_assign_index, categories.len(), false);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let Some(series_index) = app.assign_target else {
                return;
            };
            let Some(category) = app.selected_assign_index.and_then(|i| categories.get(i)) else {
                return;
            };
            if let Err(e) = app.toggle_category(series_index, category) {
                app.set_error(e.to_string());
            }
        }
        _ => {}
    }
}
