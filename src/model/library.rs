use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::series::{ComicSeries, ReadingProgress};
use crate::config::CONFIG;
use crate::error::InputError;

/// 漫画库：所有漫画以及用户创建的分类
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Library {
    /// 所有已添加的漫画
    pub series: Vec<ComicSeries>,
    /// 分类名称，第一个始终是 "All"
    pub categories: Vec<String>,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Library {
            series: Vec::new(),
            categories: vec![CONFIG.all_category.to_string()],
        }
    }

    /// 从文件加载漫画库
    ///
    /// 文件不存在或内容损坏时返回空库。
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }
        let mut library: Library = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(library) => library,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    return Self::new();
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Self::new();
            }
        };
        library.ensure_all_category();
        info!(
            "loaded {} series from {}",
            library.series.len(),
            path.display()
        );
        library
    }

    /// 持久化保存漫画库
    /// # 错误
    /// 返回IO操作或序列化错误
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 保证 "All" 存在且排在第一位
    fn ensure_all_category(&mut self) {
        let all = CONFIG.all_category;
        self.categories.retain(|c| c != all);
        self.categories.insert(0, all.to_string());
        for series in &mut self.series {
            if !series.in_category(all) {
                series.categories.insert(0, all.to_string());
            }
        }
    }

    pub fn add_category(&mut self, name: &str) -> Result<(), InputError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyCategory);
        }
        if self.categories.iter().any(|c| c == name) {
            return Err(InputError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(name.to_string());
        Ok(())
    }

    /// 删除分类，同时把它从所有漫画中移除
    pub fn remove_category(&mut self, name: &str) -> Result<(), InputError> {
        if name == CONFIG.all_category {
            return Err(InputError::ReservedCategory(name.to_string()));
        }
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        if self.categories.len() == before {
            return Err(InputError::UnknownCategory(name.to_string()));
        }
        for series in &mut self.series {
            series.categories.retain(|c| c != name);
        }
        Ok(())
    }

    /// 属于指定分类的漫画索引，保持添加顺序
    pub fn series_in_category(&self, category: &str) -> Vec<usize> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.in_category(category))
            .map(|(i, _)| i)
            .collect()
    }

    /// 添加新漫画；当前不在 "All" 分类下时，新漫画同时加入当前分类
    pub fn add_series(&mut self, mut series: ComicSeries, current_category: &str) -> usize {
        if current_category != CONFIG.all_category
            && self.categories.iter().any(|c| c == current_category)
            && !series.in_category(current_category)
        {
            series.categories.push(current_category.to_string());
        }
        self.series.push(series);
        self.series.len() - 1
    }

    pub fn assign_category(&mut self, series_index: usize, category: &str) -> Result<(), InputError> {
        self.check_user_category(category)?;
        if let Some(series) = self.series.get_mut(series_index)
            && !series.in_category(category)
        {
            series.categories.push(category.to_string());
        }
        Ok(())
    }

    pub fn unassign_category(&mut self, series_index: usize, category: &str) -> Result<(), InputError> {
        self.check_user_category(category)?;
        if let Some(series) = self.series.get_mut(series_index) {
            series.categories.retain(|c| c != category);
        }
        Ok(())
    }

    fn check_user_category(&self, category: &str) -> Result<(), InputError> {
        if category == CONFIG.all_category {
            return Err(InputError::ReservedCategory(category.to_string()));
        }
        if !self.categories.iter().any(|c| c == category) {
            return Err(InputError::UnknownCategory(category.to_string()));
        }
        Ok(())
    }

    pub fn update_progress(&mut self, series_id: &str, progress: ReadingProgress) {
        if let Some(series) = self.series.iter_mut().find(|s| s.id == series_id) {
            series.progress = Some(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ReadingMode;
    use std::fs;
    use tempfile::tempdir;

    fn series(title: &str) -> ComicSeries {
        ComicSeries::new(title, "", ReadingMode::SinglePage)
    }

    #[test]
    fn test_library_new() {
        let library = Library::new();
        assert!(library.series.is_empty());
        assert_eq!(library.categories, vec!["All".to_string()]);
    }

    #[test]
    fn test_add_and_remove_category() {
        let mut library = Library::new();
        library.add_category("  热血 ").unwrap();
        assert_eq!(library.categories, vec!["All", "热血"]);

        assert_eq!(library.add_category("热血"), Err(InputError::DuplicateCategory("热血".into())));
        assert_eq!(library.add_category("   "), Err(InputError::EmptyCategory));
        assert_eq!(library.remove_category("All"), Err(InputError::ReservedCategory("All".into())));
        assert_eq!(library.remove_category("悬疑"), Err(InputError::UnknownCategory("悬疑".into())));

        let idx = library.add_series(series("a"), "热血");
        assert!(library.series[idx].in_category("热血"));

        library.remove_category("热血").unwrap();
        assert_eq!(library.categories, vec!["All"]);
        assert_eq!(library.series[idx].categories, vec!["All"]);
    }

    #[test]
    fn test_add_series_joins_current_category() {
        let mut library = Library::new();
        library.add_category("悬疑").unwrap();

        let a = library.add_series(series("a"), "All");
        let b = library.add_series(series("b"), "悬疑");
        let c = library.add_series(series("c"), "不存在");

        assert_eq!(library.series[a].categories, vec!["All"]);
        assert_eq!(library.series[b].categories, vec!["All", "悬疑"]);
        assert_eq!(library.series[c].categories, vec!["All"]);
        assert_eq!(library.series_in_category("All"), vec![0, 1, 2]);
        assert_eq!(library.series_in_category("悬疑"), vec![1]);
    }

    #[test]
    fn test_assign_and_unassign() {
        let mut library = Library::new();
        library.add_category("收藏").unwrap();
        let idx = library.add_series(series("a"), "All");

        library.assign_category(idx, "收藏").unwrap();
        library.assign_category(idx, "收藏").unwrap();
        assert_eq!(library.series[idx].categories, vec!["All", "收藏"]);

        assert!(library.assign_category(idx, "All").is_err());
        assert!(library.unassign_category(idx, "All").is_err());
        assert!(library.assign_category(idx, "未知").is_err());

        library.unassign_category(idx, "收藏").unwrap();
        assert_eq!(library.series[idx].categories, vec!["All"]);
    }

    #[test]
    fn test_update_progress() {
        let mut library = Library::new();
        let idx = library.add_series(series("a"), "All");
        let id = library.series[idx].id.clone();
        let progress = ReadingProgress {
            chapter_id: "c1".to_string(),
            page: 4,
        };

        library.update_progress(&id, progress.clone());
        assert_eq!(library.series[idx].progress, Some(progress));

        library.update_progress("missing", ReadingProgress::default());
        assert_eq!(library.series.len(), 1);
    }

    #[test]
    fn test_library_save_and_load() -> std::io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data").join("library.json");

        let mut library = Library::new();
        library.add_category("热血").unwrap();
        library.add_series(series("火影忍者"), "热血");
        library.save(&path)?;

        let loaded = Library::load(&path);
        assert_eq!(loaded, library);
        Ok(())
    }

    #[test]
    fn test_library_load_missing_or_corrupted() -> std::io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("library.json");
        assert_eq!(Library::load(&path), Library::new());

        fs::write(&path, "{ invalid json content }")?;
        assert_eq!(Library::load(&path), Library::new());
        Ok(())
    }

    #[test]
    fn test_library_load_restores_all_category() -> std::io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("library.json");
        fs::write(&path, r#"{"series":[],"categories":["热血","All"]}"#)?;

        let loaded = Library::load(&path);
        assert_eq!(loaded.categories, vec!["All", "热血"]);
        Ok(())
    }
}
