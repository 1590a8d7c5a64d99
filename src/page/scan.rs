use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::layout::{PageLayout, ReadingMode, build_page_layout};
use super::natural::compare_file_names;
use crate::config::CONFIG;

/// 判断文件扩展名是否为支持的图片格式（不区分大小写）
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            CONFIG.supported_extensions.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// 列出章节文件夹中的图片，按文件名自然排序
///
/// 只扫描一层目录。文件夹不存在或不是目录时视为没有页面，返回空列表。
///
/// # Errors
///
/// 文件夹存在但无法读取时返回错误。
pub fn list_page_files(folder: &Path) -> io::Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        warn!("chapter folder not found: {}", folder.display());
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            pages.push(path);
        }
    }

    pages.sort_by(|a, b| compare_file_names(a, b));
    debug!("{} pages in {}", pages.len(), folder.display());

    Ok(pages)
}

/// 扫描章节文件夹并按阅读模式排版
pub fn load_chapter_layout(folder: &Path, mode: ReadingMode) -> io::Result<PageLayout<PathBuf>> {
    let pages = list_page_files(folder)?;
    Ok(build_page_layout(&pages, mode))
}
