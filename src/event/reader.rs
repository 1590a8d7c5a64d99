use crate::app::App;
use crate::page::ReadingMode;
use crossterm::event::KeyCode;
use log::warn;

/// 处理阅读器模式下的键盘事件
///
/// # Behavior
///
/// - `Left`/`h`: 向左翻页（日漫模式为下一页）
/// - `Right`/`l`: 向右翻页（日漫模式为上一页）
/// - `Up`/`k`: 条漫模式向上滚动一张，其他模式为上一页
/// - `Down`/`j`/`Space`: 条漫模式向下滚动一张，其他模式为下一页
/// - `[`: 跳转到上一话
/// - `]`: 跳转到下一话
pub(super) fn handle_reader_key(app: &mut App, key: KeyCode) {
    let Some(reader) = &mut app.reader else {
        return;
    };

    match key {
        KeyCode::Left | KeyCode::Char('h') => {
            if reader.mode != ReadingMode::Webtoon {
                reader.turn_visual(true);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if reader.mode != ReadingMode::Webtoon {
                reader.turn_visual(false);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            reader.retreat();
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char(' ') => {
            reader.advance();
        }
        KeyCode::Char('[') => jump(app, false),
        KeyCode::Char(']') => jump(app, true),
        _ => {}
    }
}

fn jump(app: &mut App, forward: bool) {
    match app.jump_chapter(forward) {
        Ok(true) => {}
        Ok(false) => {
            let msg = if forward { "已经是最后一话" } else { "已经是第一话" };
            app.set_error(msg);
        }
        Err(e) => {
            warn!("Failed to open chapter: {}", e);
            app.set_error(format!("无法打开章节: {}", e));
        }
    }
}
