use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::page::ReadingMode;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// 一话：章节序号加上图片所在的文件夹
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComicChapter {
    pub id: String,
    /// 章节序号，使用浮点数以便插入 1.5 这样的番外
    pub number: f64,
    /// 图片所在的文件夹路径
    pub folder: PathBuf,
}

impl ComicChapter {
    pub fn new(number: f64, folder: PathBuf) -> Self {
        ComicChapter {
            id: new_id(),
            number,
            folder,
        }
    }

    /// 显示的标题，比如 "第 1 话"、"第 1.5 话"
    pub fn display_title(&self) -> String {
        format!("第 {} 话", self.number)
    }
}

/// 阅读进度：上次阅读的章节和位置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReadingProgress {
    pub chapter_id: String,
    /// 当前屏第一张图片的序号，与阅读模式无关
    #[serde(alias = "position")]
    pub page: usize,
}

/// 一部漫画
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComicSeries {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_path: Option<PathBuf>,
    /// 所属分类，始终包含内置分类 "All"
    pub categories: Vec<String>,
    /// 按章节序号排好序的章节
    pub chapters: Vec<ComicChapter>,
    pub mode: ReadingMode,
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub progress: Option<ReadingProgress>,
}

impl ComicSeries {
    pub fn new(title: impl Into<String>, author: impl Into<String>, mode: ReadingMode) -> Self {
        ComicSeries {
            id: new_id(),
            title: title.into(),
            author: author.into(),
            cover_path: None,
            categories: vec![CONFIG.all_category.to_string()],
            chapters: Vec::new(),
            mode,
            added_at: Utc::now(),
            progress: None,
        }
    }

    /// 添加章节并重新排序
    ///
    /// 使用稳定排序，序号相同的章节保持添加顺序。
    pub fn add_chapter(&mut self, chapter: ComicChapter) {
        self.chapters.push(chapter);
        self.chapters.sort_by(|a, b| a.number.total_cmp(&b.number));
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn chapter_index(&self, chapter_id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == chapter_id)
    }

    /// 上次阅读的章节索引
    pub fn last_read_chapter(&self) -> Option<usize> {
        self.progress
            .as_ref()
            .and_then(|p| self.chapter_index(&p.chapter_id))
    }
}
