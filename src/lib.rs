//! 终端漫画书架：管理本地漫画、按分类浏览，并以条漫、日漫、国漫或单页模式阅读。

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod page;
pub mod state;
pub mod ui;
