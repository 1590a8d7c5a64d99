use log::info;
use std::path::PathBuf;

use super::App;
use crate::model::ReadingProgress;
use crate::page::scan::load_chapter_layout;
use crate::page::{PageLayout, PageSlot, ReadingMode};
use crate::state::AppState;

/// 阅读界面状态
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderState {
    /// 漫画在库中的索引
    pub series_index: usize,
    /// 章节在漫画中的索引
    pub chapter_index: usize,
    pub series_title: String,
    pub chapter_title: String,
    pub mode: ReadingMode,
    pub layout: PageLayout<PathBuf>,
    /// 翻页模式为当前屏序号，条漫模式为顶部图片序号
    pub position: usize,
}

impl ReaderState {
    /// 前进一屏（条漫为一张图），已到末尾返回 `false`
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.layout.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// 后退一屏（条漫为一张图），已在开头返回 `false`
    pub fn retreat(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// 按屏幕方向翻页：日漫模式下左键前进、右键后退
    pub fn turn_visual(&mut self, towards_left: bool) -> bool {
        if towards_left == self.mode.is_right_to_left() {
            self.advance()
        } else {
            self.retreat()
        }
    }

    pub fn current_slot(&self) -> Option<&PageSlot<PathBuf>> {
        match &self.layout {
            PageLayout::Paged(slots) => slots.get(self.position),
            PageLayout::Scroll { .. } => None,
        }
    }

    /// 右下角显示的页码
    pub fn page_indicator(&self) -> String {
        match &self.layout {
            PageLayout::Paged(slots) => slots
                .get(self.position)
                .map(|s| format!("{}  共{}页", s.label, self.layout.page_count()))
                .unwrap_or_default(),
            PageLayout::Scroll { label, .. } => label.clone(),
        }
    }

    fn progress(&self, chapter_id: String) -> ReadingProgress {
        ReadingProgress {
            chapter_id,
            page: self.layout.first_page_of(self.position),
        }
    }
}

impl App {
    /// 打开章节开始阅读
    ///
    /// 重新打开上次阅读的章节时恢复到包含上次那张图片的一屏，
    /// 中途切换过阅读模式也能对上。文件夹不存在或没有图片时
    /// 得到空章节，不视为错误。
    ///
    /// # Errors
    ///
    /// 章节文件夹存在但无法读取时返回错误。
    pub fn open_chapter(&mut self, series_index: usize, chapter_index: usize) -> std::io::Result<()> {
        let Some(series) = self.library.series.get(series_index) else {
            return Ok(());
        };
        let Some(chapter) = series.chapters.get(chapter_index) else {
            return Ok(());
        };

        let layout = load_chapter_layout(&chapter.folder, series.mode)?;
        let resume = series
            .progress
            .as_ref()
            .filter(|p| p.chapter_id == chapter.id)
            .map(|p| layout.position_of_page(p.page))
            .unwrap_or(0);

        info!(
            "open {:?} {} ({} pages, {:?})",
            series.title,
            chapter.display_title(),
            layout.page_count(),
            series.mode
        );

        self.reader = Some(ReaderState {
            series_index,
            chapter_index,
            series_title: series.title.clone(),
            chapter_title: chapter.display_title(),
            mode: series.mode,
            layout,
            position: resume,
        });
        self.selected_chapter_index = Some(chapter_index);
        self.state = AppState::Reading;
        Ok(())
    }

    /// 记录当前阅读进度并保存
    pub fn save_current_progress(&mut self) {
        let Some(reader) = &self.reader else {
            return;
        };
        let Some(series) = self.library.series.get(reader.series_index) else {
            return;
        };
        let Some(chapter) = series.chapters.get(reader.chapter_index) else {
            return;
        };

        let series_id = series.id.clone();
        let progress = reader.progress(chapter.id.clone());
        self.library.update_progress(&series_id, progress);
        self.save_library();
    }

    /// 关闭阅读界面，回到详情页
    pub fn close_reader(&mut self) {
        self.save_current_progress();
        self.reader = None;
        self.state = AppState::Detail;
    }

    /// 跳到相邻章节，`forward` 为 `true` 时为下一话
    ///
    /// 已是第一话或最后一话时返回 `false`。
    pub fn jump_chapter(&mut self, forward: bool) -> std::io::Result<bool> {
        let Some(reader) = &self.reader else {
            return Ok(false);
        };
        let (series_index, chapter_index) = (reader.series_index, reader.chapter_index);
        let chapter_count = self
            .library
            .series
            .get(series_index)
            .map(|s| s.chapters.len())
            .unwrap_or(0);

        let target = if forward {
            chapter_index + 1
        } else {
            match chapter_index.checked_sub(1) {
                Some(i) => i,
                None => return Ok(false),
            }
        };
        if target >= chapter_count {
            return Ok(false);
        }

        self.save_current_progress();
        self.open_chapter(series_index, target)?;
        Ok(true)
    }
}
