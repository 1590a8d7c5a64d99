pub mod library;
pub mod series;

pub use library::Library;
pub use series::{ComicChapter, ComicSeries, ReadingProgress};
