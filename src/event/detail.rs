use crate::app::App;
use crate::state::DialogKind;
use crossterm::event::KeyCode;
use log::warn;

use super::navigate_list;

/// 处理漫画详情页的键盘事件
///
/// # Behavior
///
/// - `Up`/`k`: 向上选择章节
/// - `Down`/`j`: 向下选择章节
/// - `Enter`: 阅读选中章节
/// - `a`: 添加章节
/// - `m`: 切换阅读模式
pub(super) fn handle_detail_key(app: &mut App, key: KeyCode) {
    let Some(series_index) = app.current_series else {
        return;
    };
    let chapter_count = app
        .library
        .series
        .get(series_index)
        .map(|s| s.chapters.len())
        .unwrap_or(0);

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_chapter_index =
                navigate_list(app.selected_chapter_index, chapter_count, true);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.selected_chapter_index =
                navigate_list(app.selected_chapter_index, chapter_count, false);
        }
        KeyCode::Enter => {
            let Some(chapter_index) = app.selected_chapter_index else {
                return;
            };
            if let Err(e) = app.open_chapter(series_index, chapter_index) {
                warn!("Failed to open chapter: {}", e);
                app.set_error(format!("无法打开章节: {}", e));
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_dialog(DialogKind::AddChapter);
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.cycle_reading_mode(series_index);
        }
        _ => {}
    }
}
