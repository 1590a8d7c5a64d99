use crate::app::App;
use crate::state::{AppState, DialogKind};
use crossterm::event::KeyCode;

use super::navigate_list;

/// 处理书架模式下的键盘事件
///
/// # Behavior
///
/// - `Enter`: 打开选中漫画的详情页
/// - `Up`/`k`: 向上选择
/// - `Down`/`j`: 向下选择
/// - `a`: 添加漫画
/// - `e`: 修改选中漫画的信息
/// - `t`: 为选中漫画勾选分类
/// - `c`: 进入分类列表
/// - `s`: 进入设置页面
pub(super) fn handle_shelf_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_series_index =
                navigate_list(app.selected_series_index, app.shelf_series().len(), true);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.selected_series_index =
                navigate_list(app.selected_series_index, app.shelf_series().len(), false);
        }
        KeyCode::Enter => {
            if let Some(index) = app.selected_series() {
                app.open_detail(index);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_dialog(DialogKind::AddSeries);
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            if let Some(index) = app.selected_series() {
                app.open_dialog(DialogKind::EditSeries(index));
            }
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if app.selected_series().is_none() {
                return;
            }
            if app.user_categories().is_empty() {
                app.set_error("还没有分类，按 c 进入分类列表新建");
                return;
            }
            app.open_category_assign();
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            let current = app
                .library
                .categories
                .iter()
                .position(|c| *c == app.current_category);
            app.selected_category_index = current.or(Some(0));
            app.state = AppState::Categories;
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.selected_setting = Some(0);
            app.state = AppState::Settings;
        }
        _ => {}
    }
}
