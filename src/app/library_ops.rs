use log::{error, info};
use std::path::PathBuf;

use super::App;
use crate::config::CONFIG;
use crate::error::InputError;
use crate::model::{ComicChapter, ComicSeries};
use crate::page::scan::is_supported_image;
use crate::state::DialogKind;

/// 解析章节序号，必须是有限的数字
pub(crate) fn parse_chapter_number(text: &str) -> Result<f64, InputError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(InputError::InvalidChapterNumber(text.to_string())),
    }
}

/// 展开路径开头的 `~/`
pub(crate) fn expand_path(text: &str) -> PathBuf {
    let text = text.trim();
    if text == "~" {
        return home::home_dir().unwrap_or_else(|| PathBuf::from(text));
    }
    if let Some(rest) = text.strip_prefix("~/")
        && let Some(home) = home::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(text)
}

/// 校验封面路径，空输入表示没有封面
fn parse_cover(text: &str) -> Result<Option<PathBuf>, InputError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let path = expand_path(text);
    if path.is_file() && is_supported_image(&path) {
        Ok(Some(path))
    } else {
        Err(InputError::InvalidCover(path))
    }
}

impl App {
    /// 保存漫画库，失败时在状态栏提示
    pub fn save_library(&mut self) {
        if let Err(e) = self.library.save(&self.library_path) {
            error!("Failed to save library: {}", e);
            self.set_error(format!("保存漫画库失败: {}", e));
        }
    }

    /// 添加漫画，返回库内索引
    ///
    /// 当前书架不是 "All" 时，新漫画同时加入当前分类。
    pub fn add_series(&mut self, title: &str, author: &str, cover: &str) -> Result<usize, InputError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InputError::EmptyTitle);
        }
        let cover_path = parse_cover(cover)?;

        let mut series = ComicSeries::new(title, author.trim(), self.settings.default_mode);
        series.cover_path = cover_path;
        let category = self.current_category.clone();
        let index = self.library.add_series(series, &category);
        info!("added series {:?}", title);

        if let Some(pos) = self.shelf_series().iter().position(|&i| i == index) {
            self.selected_series_index = Some(pos);
        }
        self.save_library();
        Ok(index)
    }

    /// 修改漫画的标题、作者和封面
    pub fn edit_series(
        &mut self,
        index: usize,
        title: &str,
        author: &str,
        cover: &str,
    ) -> Result<(), InputError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InputError::EmptyTitle);
        }
        let cover_path = parse_cover(cover)?;

        if let Some(series) = self.library.series.get_mut(index) {
            series.title = title.to_string();
            series.author = author.trim().to_string();
            series.cover_path = cover_path;
            self.save_library();
        }
        Ok(())
    }

    /// 为漫画添加章节
    ///
    /// # Errors
    ///
    /// 序号不是数字、文件夹为空或不存在时返回错误。
    pub fn add_chapter(&mut self, series_index: usize, number: &str, folder: &str) -> Result<(), InputError> {
        let number = parse_chapter_number(number)?;
        if folder.trim().is_empty() {
            return Err(InputError::MissingFolder);
        }
        let folder = expand_path(folder);
        if !folder.is_dir() {
            return Err(InputError::FolderNotFound(folder));
        }

        if let Some(series) = self.library.series.get_mut(series_index) {
            let chapter = ComicChapter::new(number, folder);
            let id = chapter.id.clone();
            series.add_chapter(chapter);
            self.selected_chapter_index = series.chapter_index(&id);
            info!("added chapter {} to {:?}", number, series.title);
            self.save_library();
        }
        Ok(())
    }

    /// 切换漫画的阅读模式
    pub fn cycle_reading_mode(&mut self, series_index: usize) {
        if let Some(series) = self.library.series.get_mut(series_index) {
            series.mode = series.mode.next();
            self.save_library();
        }
    }

    pub fn add_category(&mut self, name: &str) -> Result<(), InputError> {
        self.library.add_category(name)?;
        self.selected_category_index = Some(self.library.categories.len() - 1);
        self.save_library();
        Ok(())
    }

    /// 删除分类列表中选中的分类
    pub fn delete_selected_category(&mut self) -> Result<(), InputError> {
        let Some(index) = self.selected_category_index else {
            return Ok(());
        };
        let Some(name) = self.library.categories.get(index).cloned() else {
            return Ok(());
        };
        self.library.remove_category(&name)?;
        self.selected_category_index = Some(index.min(self.library.categories.len() - 1));
        if self.current_category == name {
            self.current_category = CONFIG.all_category.to_string();
            self.reset_shelf_selection();
        }
        self.save_library();
        Ok(())
    }

    /// 用户分类（不含 "All"），用于勾选界面
    pub fn user_categories(&self) -> Vec<String> {
        self.library
            .categories
            .iter()
            .filter(|c| c.as_str() != CONFIG.all_category)
            .cloned()
            .collect()
    }

    /// 切换漫画是否属于某个分类
    pub fn toggle_category(&mut self, series_index: usize, category: &str) -> Result<(), InputError> {
        let member = self
            .library
            .series
            .get(series_index)
            .is_some_and(|s| s.in_category(category));
        if member {
            self.library.unassign_category(series_index, category)?;
        } else {
            self.library.assign_category(series_index, category)?;
        }
        self.save_library();
        Ok(())
    }

    /// 提交对话框内容
    ///
    /// 成功时关闭对话框；失败时保持对话框打开，由调用方显示错误。
    pub fn submit_dialog(&mut self) -> Result<(), InputError> {
        let Some(dialog) = self.dialog.clone() else {
            return Ok(());
        };

        match dialog.kind {
            DialogKind::AddSeries => {
                self.add_series(dialog.value(0), dialog.value(1), dialog.value(2))?;
            }
            DialogKind::EditSeries(index) => {
                self.edit_series(index, dialog.value(0), dialog.value(1), dialog.value(2))?;
            }
            DialogKind::AddChapter => {
                if let Some(series_index) = self.current_series {
                    self.add_chapter(series_index, dialog.value(0), dialog.value(1))?;
                }
            }
            DialogKind::AddCategory => {
                self.add_category(dialog.value(0))?;
            }
        }

        self.close_dialog();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{create_chapter_dir, create_test_app};
    use crate::page::ReadingMode;
    use crate::state::AppState;
    use std::fs;

    #[test]
    fn test_parse_chapter_number() {
        assert_eq!(parse_chapter_number("1"), Ok(1.0));
        assert_eq!(parse_chapter_number(" 1.5 "), Ok(1.5));
        assert_eq!(parse_chapter_number("-2"), Ok(-2.0));
        assert!(parse_chapter_number("abc").is_err());
        assert!(parse_chapter_number("").is_err());
        assert!(parse_chapter_number("NaN").is_err());
        assert!(parse_chapter_number("inf").is_err());
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path(" /a/b "), PathBuf::from("/a/b"));
        assert_eq!(expand_path("rel/dir"), PathBuf::from("rel/dir"));
        if let Some(home) = home::home_dir() {
            assert_eq!(expand_path("~/comics"), home.join("comics"));
            assert_eq!(expand_path("~"), home);
        }
    }

    #[test]
    fn test_add_series_validates_and_saves() {
        let (mut app, dir) = create_test_app();

        assert_eq!(app.add_series("  ", "", ""), Err(InputError::EmptyTitle));
        let missing_cover = dir.path().join("none.png");
        assert_eq!(
            app.add_series("t", "", missing_cover.to_str().unwrap()),
            Err(InputError::InvalidCover(missing_cover))
        );

        let cover = dir.path().join("cover.PNG");
        fs::write(&cover, b"x").unwrap();
        let index = app.add_series(" 灌篮高手 ", " 井上雄彦 ", cover.to_str().unwrap()).unwrap();

        let series = &app.library.series[index];
        assert_eq!(series.title, "灌篮高手");
        assert_eq!(series.author, "井上雄彦");
        assert_eq!(series.cover_path, Some(cover));
        assert_eq!(app.selected_series_index, Some(0));
        assert!(app.library_path.exists());
    }

    #[test]
    fn test_add_series_uses_default_mode_and_current_category() {
        let (mut app, _dir) = create_test_app();
        app.settings.default_mode = ReadingMode::Webtoon;
        app.library.add_category("条漫").unwrap();
        app.select_category("条漫");

        let index = app.add_series("t", "", "").unwrap();
        assert_eq!(app.library.series[index].mode, ReadingMode::Webtoon);
        assert!(app.library.series[index].in_category("条漫"));
        assert_eq!(app.selected_series(), Some(index));
    }

    #[test]
    fn test_edit_series() {
        let (mut app, _dir) = create_test_app();
        let index = app.add_series("old", "a", "").unwrap();

        assert_eq!(app.edit_series(index, "", "", ""), Err(InputError::EmptyTitle));
        app.edit_series(index, "new", "b", "").unwrap();
        assert_eq!(app.library.series[index].title, "new");
        assert_eq!(app.library.series[index].author, "b");
    }

    #[test]
    fn test_add_chapter_validates_and_sorts() {
        let (mut app, dir) = create_test_app();
        let index = app.add_series("t", "", "").unwrap();
        let ch2 = create_chapter_dir(dir.path(), "ch2", 1);
        let ch1 = create_chapter_dir(dir.path(), "ch1", 1);

        assert_eq!(
            app.add_chapter(index, "x", ch1.to_str().unwrap()),
            Err(InputError::InvalidChapterNumber("x".into()))
        );
        assert_eq!(app.add_chapter(index, "1", " "), Err(InputError::MissingFolder));
        let missing = dir.path().join("missing");
        assert_eq!(
            app.add_chapter(index, "1", missing.to_str().unwrap()),
            Err(InputError::FolderNotFound(missing))
        );

        app.add_chapter(index, "2", ch2.to_str().unwrap()).unwrap();
        app.add_chapter(index, "1", ch1.to_str().unwrap()).unwrap();

        let chapters = &app.library.series[index].chapters;
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].folder, ch1);
        assert_eq!(chapters[1].folder, ch2);
        assert_eq!(app.selected_chapter_index, Some(0));
    }

    #[test]
    fn test_cycle_reading_mode() {
        let (mut app, _dir) = create_test_app();
        let index = app.add_series("t", "", "").unwrap();
        assert_eq!(app.library.series[index].mode, ReadingMode::SinglePage);
        app.cycle_reading_mode(index);
        assert_eq!(app.library.series[index].mode, ReadingMode::ChinaManga);
    }

    #[test]
    fn test_delete_selected_category_resets_shelf() {
        let (mut app, _dir) = create_test_app();
        app.add_category("热血").unwrap();
        assert_eq!(app.selected_category_index, Some(1));
        app.select_category("热血");

        app.delete_selected_category().unwrap();
        assert_eq!(app.library.categories, vec!["All"]);
        assert_eq!(app.current_category, "All");
        assert_eq!(app.selected_category_index, Some(0));

        assert_eq!(
            app.delete_selected_category(),
            Err(InputError::ReservedCategory("All".into()))
        );
    }

    #[test]
    fn test_toggle_category() {
        let (mut app, _dir) = create_test_app();
        app.add_category("收藏").unwrap();
        let index = app.add_series("t", "", "").unwrap();

        app.toggle_category(index, "收藏").unwrap();
        assert!(app.library.series[index].in_category("收藏"));
        assert_eq!(app.user_categories(), vec!["收藏".to_string()]);

        app.toggle_category(index, "收藏").unwrap();
        assert!(!app.library.series[index].in_category("收藏"));
        assert!(app.toggle_category(index, "All").is_err());
    }

    #[test]
    fn test_submit_dialog_keeps_dialog_open_on_error() {
        let (mut app, _dir) = create_test_app();
        app.open_dialog(DialogKind::AddSeries);

        assert_eq!(app.submit_dialog(), Err(InputError::EmptyTitle));
        assert_eq!(app.state, AppState::Dialog);

        for c in "进击的巨人".chars() {
            app.dialog.as_mut().unwrap().push_char(c);
        }
        app.submit_dialog().unwrap();
        assert_eq!(app.state, AppState::Shelf);
        assert!(app.dialog.is_none());
        assert_eq!(app.library.series[0].title, "进击的巨人");
    }
}
