use std::path::PathBuf;

use thiserror::Error;

/// 用户输入校验错误，显示在状态栏
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("漫画标题不能为空")]
    EmptyTitle,
    #[error("章节序号无效: {0:?}（请输入数字，如 1 或 1.5）")]
    InvalidChapterNumber(String),
    #[error("必须选择一个文件夹")]
    MissingFolder,
    #[error("文件夹不存在: {}", .0.display())]
    FolderNotFound(PathBuf),
    #[error("封面不是支持的图片文件: {}", .0.display())]
    InvalidCover(PathBuf),
    #[error("分类名称不能为空")]
    EmptyCategory,
    #[error("分类已存在: {0}")]
    DuplicateCategory(String),
    #[error("内置分类不能修改: {0}")]
    ReservedCategory(String),
    #[error("分类不存在: {0}")]
    UnknownCategory(String),
}
