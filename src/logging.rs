use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// 日志输出位置
#[derive(Debug, Clone, PartialEq)]
pub enum LogSink {
    /// 追加写入文件，界面运行时使用，避免弄乱终端
    File(PathBuf),
    Stderr,
}

/// 初始化全局日志，默认级别为 info，可用 `RUST_LOG` 覆盖
///
/// # Errors
///
/// 日志文件无法打开时返回错误。
pub fn init(sink: LogSink) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
    }
    // 测试中可能重复初始化
    let _ = builder.try_init();
    Ok(())
}
