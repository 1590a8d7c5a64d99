use anyhow::{Context, Result};
use log::info;
use ratatui::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::{CONFIG, Settings};
use crate::model::Library;
use crate::state::{AppState, DialogKind};

mod dialog;
mod library_ops;
mod reading;
mod settings_ops;

pub use dialog::{DialogField, DialogState};
pub use reading::ReaderState;

pub struct App {
    /// 当前应用状态
    pub state: AppState,
    /// 上一个状态（用于从对话框等返回）
    pub previous_state: AppState,
    /// 漫画库
    pub library: Library,
    /// 漫画库文件路径
    pub library_path: PathBuf,
    /// 用户设置
    pub settings: Settings,
    /// 设置文件路径
    pub settings_path: PathBuf,
    /// 书架当前显示的分类
    pub current_category: String,
    /// 书架选中项（当前分类列表内的索引）
    pub selected_series_index: Option<usize>,
    /// 详情页正在查看的漫画（库内索引）
    pub current_series: Option<usize>,
    /// 详情页选中的章节索引
    pub selected_chapter_index: Option<usize>,
    /// 分类列表选中项
    pub selected_category_index: Option<usize>,
    /// 分类勾选界面选中项（不含 "All"）
    pub selected_assign_index: Option<usize>,
    /// 分类勾选界面正在编辑的漫画（库内索引），进入界面时固定
    pub assign_target: Option<usize>,
    /// 设置菜单选中项
    pub selected_setting: Option<usize>,
    /// 正在阅读的章节
    pub reader: Option<ReaderState>,
    /// 打开中的对话框
    pub dialog: Option<DialogState>,
    /// 错误消息（用于在状态栏显示错误提示）
    pub error_message: Option<String>,
    /// 退出标志位
    pub should_quit: bool,
    /// 终端尺寸缓存
    pub terminal_size: Rect,
}

impl App {
    /// 初始化应用程序
    ///
    /// 从数据目录加载漫画库和用户设置。
    ///
    /// # Errors
    ///
    /// 数据目录无法创建时返回错误。
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("无法创建数据目录 {}", data_dir.display()))?;

        let library_path = data_dir.join(CONFIG.library_filename);
        let settings_path = data_dir.join(CONFIG.settings_filename);
        let library = Library::load(&library_path);
        let settings = Settings::load(&settings_path);
        info!("data dir: {}", data_dir.display());

        let mut app = App {
            state: AppState::Shelf,
            previous_state: AppState::Shelf,
            library,
            library_path,
            settings,
            settings_path,
            current_category: CONFIG.all_category.to_string(),
            selected_series_index: None,
            current_series: None,
            selected_chapter_index: None,
            selected_category_index: None,
            selected_assign_index: None,
            assign_target: None,
            selected_setting: None,
            reader: None,
            dialog: None,
            error_message: None,
            should_quit: false,
            terminal_size: Rect::default(),
        };
        app.reset_shelf_selection();

        Ok(app)
    }

    /// 设置错误消息
    ///
    /// 错误消息将在下一帧渲染时显示给用户。
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// 书架当前分类下的漫画（库内索引）
    pub fn shelf_series(&self) -> Vec<usize> {
        self.library.series_in_category(&self.current_category)
    }

    /// 书架选中项对应的库内索引
    pub fn selected_series(&self) -> Option<usize> {
        let shelf = self.shelf_series();
        self.selected_series_index
            .and_then(|i| shelf.get(i).copied())
    }

    /// 切换书架分类
    pub fn select_category(&mut self, category: &str) {
        self.current_category = category.to_string();
        self.reset_shelf_selection();
        self.state = AppState::Shelf;
    }

    pub(crate) fn reset_shelf_selection(&mut self) {
        self.selected_series_index = if self.shelf_series().is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// 进入漫画详情页
    pub fn open_detail(&mut self, series_index: usize) {
        let Some(series) = self.library.series.get(series_index) else {
            return;
        };
        self.selected_chapter_index = series
            .last_read_chapter()
            .or(if series.chapters.is_empty() { None } else { Some(0) });
        self.current_series = Some(series_index);
        self.state = AppState::Detail;
    }

    /// 为书架选中的漫画打开分类勾选界面
    ///
    /// 勾选期间漫画可能离开当前书架，所以在这里记下库内索引。
    pub fn open_category_assign(&mut self) {
        let Some(index) = self.selected_series() else {
            return;
        };
        self.assign_target = Some(index);
        self.selected_assign_index = Some(0);
        self.state = AppState::CategoryAssign;
    }

    /// 离开分类勾选界面，修正书架选中项
    pub fn close_category_assign(&mut self) {
        let target = self.assign_target.take();
        let shelf = self.shelf_series();
        self.selected_series_index = target
            .and_then(|t| shelf.iter().position(|&i| i == t))
            .or_else(|| {
                self.selected_series_index
                    .map(|i| i.min(shelf.len().saturating_sub(1)))
                    .filter(|_| !shelf.is_empty())
            });
        self.state = AppState::Shelf;
    }

    /// 打开对话框，关闭后回到当前状态
    pub fn open_dialog(&mut self, kind: DialogKind) {
        let dialog = match &kind {
            DialogKind::AddSeries => DialogState::add_series(),
            DialogKind::EditSeries(index) => match self.library.series.get(*index) {
                Some(series) => DialogState::edit_series(*index, series),
                None => return,
            },
            DialogKind::AddChapter => {
                let next_number = self
                    .current_series
                    .and_then(|i| self.library.series.get(i))
                    .and_then(|s| s.chapters.last())
                    .map(|c| c.number.floor() + 1.0)
                    .unwrap_or(1.0);
                DialogState::add_chapter(next_number)
            }
            DialogKind::AddCategory => DialogState::add_category(),
        };
        self.dialog = Some(dialog);
        self.previous_state = self.state.clone();
        self.state = AppState::Dialog;
    }

    /// 关闭对话框并回到打开它之前的状态
    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.state = self.previous_state.clone();
    }
}
