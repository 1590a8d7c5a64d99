use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::ExecutableCommand;
use crossterm::event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use comic_shelf::app::App;
use comic_shelf::config::{CONFIG, default_data_dir};
use comic_shelf::logging::{self, LogSink};
use comic_shelf::page::scan::load_chapter_layout;
use comic_shelf::page::{PageLayout, ReadingMode};
use comic_shelf::{event, ui};

#[derive(Parser)]
#[command(version, about = "A terminal comic shelf with manga, webtoon and single page reading modes")]
struct Cli {
    /// 数据目录，默认 ~/.comic_shelf
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 扫描章节文件夹并打印分页结果
    Pages {
        folder: PathBuf,
        #[arg(short, long, value_enum, default_value_t = ModeArg::SinglePage)]
        mode: ModeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Webtoon,
    Manga,
    ChinaManga,
    SinglePage,
}

impl From<ModeArg> for ReadingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Webtoon => ReadingMode::Webtoon,
            ModeArg::Manga => ReadingMode::Manga,
            ModeArg::ChinaManga => ReadingMode::ChinaManga,
            ModeArg::SinglePage => ReadingMode::SinglePage,
        }
    }
}

/// 终端守卫，确保程序退出时（包括 panic）正确恢复终端状态
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout()
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Some(Command::Pages { folder, mode }) => {
            logging::init(LogSink::Stderr).context("初始化日志失败")?;
            print_pages(&folder, mode.into())
        }
        None => {
            std::fs::create_dir_all(&data_dir)
                .with_context(|| format!("无法创建数据目录 {}", data_dir.display()))?;
            logging::init(LogSink::File(data_dir.join(CONFIG.log_filename)))
                .context("初始化日志失败")?;

            let mut app = App::new(&data_dir).context("创建应用失败")?;
            run(&mut app).context("运行应用失败")?;
            Ok(())
        }
    }
}

/// 不启动界面，直接输出章节的分页结果
fn print_pages(folder: &Path, mode: ReadingMode) -> Result<()> {
    let layout = load_chapter_layout(folder, mode)
        .with_context(|| format!("无法读取文件夹 {}", folder.display()))?;

    let name = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    match layout {
        PageLayout::Paged(slots) => {
            for slot in &slots {
                println!("{}\t{}\t{}", slot.label, name(&slot.left), name(&slot.right));
            }
        }
        PageLayout::Scroll { pages, label } => {
            for page in &pages {
                println!("{}", page.display());
            }
            println!("{}", label);
        }
    }
    Ok(())
}

fn run(app: &mut App) -> Result<()> {
    // 使用 RAII 模式管理终端状态，确保 panic 时也能正确恢复
    let mut guard = TerminalGuard::new()?;

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        let size = guard.terminal.size()?;
        app.terminal_size = Rect::new(0, 0, size.width, size.height);

        guard.terminal.draw(|f| ui::render(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm_event::poll(timeout)? {
            match crossterm_event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        event::handle_key(app, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    event::handle_mouse(app, mouse);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    // 阅读中直接退出时也保存进度
    app.save_current_progress();
    info!("bye");

    // guard 在此处 drop，自动恢复终端状态
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clap() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn test_parse_pages_command() {
        let cli = Cli::try_parse_from(["cshelf", "pages", "/tmp/ch1", "--mode", "china-manga"]).unwrap();
        match cli.command {
            Some(Command::Pages { folder, mode }) => {
                assert_eq!(folder, PathBuf::from("/tmp/ch1"));
                assert_eq!(ReadingMode::from(mode), ReadingMode::ChinaManga);
            }
            None => panic!("expected pages command"),
        }
    }

    #[test]
    fn test_parse_data_dir() {
        let cli = Cli::try_parse_from(["cshelf", "--data-dir", "/tmp/shelf"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shelf")));
        assert!(cli.command.is_none());
    }
}
