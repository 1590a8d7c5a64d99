pub mod layout;
pub mod natural;
pub mod scan;

pub use layout::{PageLayout, PageSlot, ReadingMode, build_page_layout};
pub use natural::compare_natural;
