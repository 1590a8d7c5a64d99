use serde::{Deserialize, Serialize};

/// 阅读模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadingMode {
    /// 条漫（上下滚动）
    Webtoon,
    /// 日漫（双页，从右至左）
    Manga,
    /// 国漫（双页，从左至右）
    ChinaManga,
    /// 单页
    #[default]
    SinglePage,
}

impl ReadingMode {
    pub const ALL: [ReadingMode; 4] = [
        ReadingMode::SinglePage,
        ReadingMode::ChinaManga,
        ReadingMode::Manga,
        ReadingMode::Webtoon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReadingMode::Webtoon => "条漫",
            ReadingMode::Manga => "日漫 (右→左)",
            ReadingMode::ChinaManga => "国漫 (左→右)",
            ReadingMode::SinglePage => "单页",
        }
    }

    /// 循环切换到下一个模式
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// 从右往左阅读时，视图需要把左右翻页方向对调
    pub fn is_right_to_left(&self) -> bool {
        matches!(self, ReadingMode::Manga)
    }
}

/// 一屏显示的内容：左右两个位置以及页码
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlot<T> {
    /// 屏幕左侧的图片
    pub left: Option<T>,
    /// 屏幕右侧的图片
    pub right: Option<T>,
    /// 页码文本，如 "3" 或 "1 / 2"
    pub label: String,
}

/// 一个章节的排版结果
#[derive(Debug, Clone, PartialEq)]
pub enum PageLayout<T> {
    /// 翻页模式：按顺序排列的若干屏
    Paged(Vec<PageSlot<T>>),
    /// 条漫模式：不分屏，整体滚动
    Scroll { pages: Vec<T>, label: String },
}

impl<T> PageLayout<T> {
    /// 可翻页的单元数（翻页模式为屏数，条漫为图片数）
    pub fn len(&self) -> usize {
        match self {
            PageLayout::Paged(slots) => slots.len(),
            PageLayout::Scroll { pages, .. } => pages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 参与排版的图片总数
    pub fn page_count(&self) -> usize {
        self.slot_sizes().iter().sum()
    }

    fn slot_sizes(&self) -> Vec<usize> {
        match self {
            PageLayout::Paged(slots) => slots
                .iter()
                .map(|s| usize::from(s.left.is_some()) + usize::from(s.right.is_some()))
                .collect(),
            PageLayout::Scroll { pages, .. } => vec![1; pages.len()],
        }
    }

    /// 第 `position` 屏的第一张图片在整章中的序号
    pub fn first_page_of(&self, position: usize) -> usize {
        self.slot_sizes().iter().take(position).sum()
    }

    /// 包含第 `page` 张图片的屏序号，超出范围时取最后一屏
    pub fn position_of_page(&self, page: usize) -> usize {
        let mut seen = 0;
        for (position, size) in self.slot_sizes().into_iter().enumerate() {
            seen += size;
            if page < seen {
                return position;
            }
        }
        self.len().saturating_sub(1)
    }
}

/// 根据阅读模式把已排好序的页面排成若干屏
///
/// 纯函数，相同输入总是得到相同结果。空输入在任何模式下都得到空结果。
///
/// 日漫模式中小页码放在右侧、大页码放在左侧；视图层需要配合
/// [`ReadingMode::is_right_to_left`] 把翻页方向反过来，才能还原正常阅读顺序。
pub fn build_page_layout<T: Clone>(sorted_pages: &[T], mode: ReadingMode) -> PageLayout<T> {
    match mode {
        ReadingMode::Webtoon => PageLayout::Scroll {
            pages: sorted_pages.to_vec(),
            label: format!("Total: {}", sorted_pages.len()),
        },
        ReadingMode::SinglePage => PageLayout::Paged(
            sorted_pages
                .iter()
                .enumerate()
                .map(|(i, page)| PageSlot {
                    left: Some(page.clone()),
                    right: None,
                    label: (i + 1).to_string(),
                })
                .collect(),
        ),
        ReadingMode::ChinaManga | ReadingMode::Manga => {
            let slots = sorted_pages
                .chunks(2)
                .enumerate()
                .map(|(n, pair)| {
                    let i = n * 2;
                    let first = pair[0].clone();
                    let second = pair.get(1).cloned();
                    let label = if second.is_some() {
                        format!("{} / {}", i + 1, i + 2)
                    } else {
                        (i + 1).to_string()
                    };

                    if mode == ReadingMode::Manga {
                        PageSlot {
                            left: second,
                            right: Some(first),
                            label,
                        }
                    } else {
                        PageSlot {
                            left: Some(first),
                            right: second,
                            label,
                        }
                    }
                })
                .collect();
            PageLayout::Paged(slots)
        }
    }
}
