use crate::app::App;
use crate::config::CONFIG;
use crossterm::event::KeyCode;

use super::navigate_list;

/// 处理设置页面的键盘事件
///
/// # Behavior
///
/// - `Up`/`k`: 向上选择
/// - `Down`/`j`: 向下选择
/// - `Enter`: 切换选中项的值
pub(super) fn handle_settings_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_setting =
                navigate_list(app.selected_setting, CONFIG.settings_menu_count, true);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.selected_setting =
                navigate_list(app.selected_setting, CONFIG.settings_menu_count, false);
        }
        KeyCode::Enter => {
            if let Some(index) = app.selected_setting {
                app.cycle_setting(index);
            }
        }
        _ => {}
    }
}
