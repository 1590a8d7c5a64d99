use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::page::ReadingMode;

/// 应用程序配置常量
pub struct AppConfig {
    /// 应用目录名称
    pub dir_name: &'static str,
    /// 支持的图片扩展名（小写）
    pub supported_extensions: &'static [&'static str],
    /// 漫画库文件名
    pub library_filename: &'static str,
    /// 用户设置文件名
    pub settings_filename: &'static str,
    /// 日志文件名
    pub log_filename: &'static str,
    /// 内置分类，所有漫画都属于它
    pub all_category: &'static str,
    /// 设置菜单项数量
    pub settings_menu_count: usize,
}

impl AppConfig {
    /// 创建默认配置
    pub const fn default() -> Self {
        Self {
            dir_name: ".comic_shelf",
            supported_extensions: &["jpg", "jpeg", "png", "bmp", "webp"],
            library_filename: "library.json",
            settings_filename: "settings.json",
            log_filename: "comic_shelf.log",
            all_category: "All",
            settings_menu_count: 2,
        }
    }
}

/// 全局配置实例
pub const CONFIG: AppConfig = AppConfig::default();

/// 默认数据目录：`~/.comic_shelf`
pub fn default_data_dir() -> PathBuf {
    let mut path = home::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(CONFIG.dir_name);
    path
}

/// 界面配色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// 跟随终端
    #[default]
    Default,
    Light,
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Default => "跟随终端",
            Theme::Light => "浅色",
            Theme::Dark => "深色",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Default => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Default,
        }
    }
}

/// 用户设置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    /// 新建漫画时使用的阅读模式
    #[serde(default)]
    pub default_mode: ReadingMode,
}

impl Settings {
    /// 读取设置文件，文件不存在或格式错误时使用默认值
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }
}
