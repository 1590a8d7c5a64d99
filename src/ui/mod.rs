pub mod categories;
pub mod detail;
pub mod dialog;
pub mod reader;
pub mod settings;
pub mod shelf;
pub mod utils;

use ratatui::prelude::*;

use crate::app::App;
use crate::state::AppState;

fn render_state(f: &mut Frame, app: &App, state: &AppState) {
    match state {
        AppState::Shelf => shelf::render_shelf(f, app),
        AppState::Detail => detail::render_detail(f, app),
        AppState::Reading => reader::render_reader(f, app),
        AppState::Categories => categories::render_categories(f, app),
        AppState::CategoryAssign => categories::render_category_assign(f, app),
        AppState::Settings => settings::render_settings(f, app),
        AppState::Dialog => {}
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if app.state == AppState::Dialog {
        // 对话框浮在打开它的界面上
        render_state(f, app, &app.previous_state);
        dialog::render_dialog(f, app);
    } else {
        render_state(f, app, &app.state);
    }

    if let Some(ref error_msg) = app.error_message {
        utils::render_error_message(f, error_msg, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{create_chapter_dir, create_test_app};
    use crate::page::ReadingMode;
    use crate::state::DialogKind;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_state_renders() {
        let (mut app, dir) = create_test_app();
        app.add_category("热血").unwrap();
        let index = app.add_series("海贼王", "尾田荣一郎", "").unwrap();
        let folder = create_chapter_dir(dir.path(), "c1", 3);
        app.open_detail(index);
        app.add_chapter(index, "1", folder.to_str().unwrap()).unwrap();

        for mode in ReadingMode::ALL {
            app.library.series[index].mode = mode;
            app.open_chapter(index, 0).unwrap();
            draw(&app, 80, 24);
        }
        app.close_reader();

        for state in [
            AppState::Shelf,
            AppState::Detail,
            AppState::Categories,
            AppState::CategoryAssign,
            AppState::Settings,
        ] {
            app.state = state;
            draw(&app, 80, 24);
            // 极小终端不应 panic
            draw(&app, 3, 2);
        }

        app.state = AppState::Shelf;
        app.open_dialog(DialogKind::AddSeries);
        app.set_error("出错了");
        draw(&app, 80, 24);
        draw(&app, 3, 2);
    }

    #[test]
    fn test_reader_error_keeps_page_indicator() {
        let (mut app, dir) = create_test_app();
        let index = app.add_series("t", "", "").unwrap();
        let folder = create_chapter_dir(dir.path(), "c1", 3);
        app.add_chapter(index, "1", folder.to_str().unwrap()).unwrap();
        app.open_chapter(index, 0).unwrap();
        app.set_error("已经是最后一话");

        // 宽字符后面跟着占位格，比较前去掉空格
        let screen = draw(&app, 80, 24).replace(' ', "");
        assert!(screen.contains("共3页"));
        assert!(screen.contains("已经是最后一话"));
    }

    #[test]
    fn test_manga_spread_shows_both_pages() {
        let (mut app, dir) = create_test_app();
        let index = app.add_series("t", "", "").unwrap();
        app.library.series[index].mode = ReadingMode::Manga;
        let folder = create_chapter_dir(dir.path(), "c1", 2);
        app.add_chapter(index, "1", folder.to_str().unwrap()).unwrap();
        app.open_chapter(index, 0).unwrap();

        let screen = draw(&app, 80, 24);
        assert!(screen.contains("1.jpg"));
        assert!(screen.contains("2.jpg"));
        assert!(screen.find("2.jpg") < screen.find("1.jpg"));
    }
}
