use std::cmp::Ordering;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

/// 字符串中的一段连续片段：数字段或非数字段
#[derive(Debug, PartialEq)]
enum Run {
    /// 去掉前导零后的数字串
    Number(String),
    /// 非数字文本
    Text(String),
}

impl Run {
    fn cmp_run(&self, other: &Run) -> Ordering {
        match (self, other) {
            // 位数多的数字更大，位数相同时逐位比较，不会溢出
            (Run::Number(a), Run::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Run::Text(a), Run::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Run::Number(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Number(_)) => Ordering::Greater,
        }
    }
}

/// 依次切分出数字段/非数字段
struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Runs {
            chars: s.chars().peekable(),
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let first = *self.chars.peek()?;
        let is_digit = first.is_ascii_digit();

        let mut buf = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() != is_digit {
                break;
            }
            buf.push(ch);
            self.chars.next();
        }

        if is_digit {
            let trimmed = buf.trim_start_matches('0');
            Some(Run::Number(trimmed.to_string()))
        } else {
            Some(Run::Text(buf))
        }
    }
}

/// 自然顺序比较两个字符串
///
/// 数字段按数值大小比较（忽略前导零，长度不受限制），非数字段按字典序
/// 比较（不区分大小写）。所有片段都相等时，退回到对完整字符串的原始比较，
/// 因此结果始终是一个全序。
///
/// ```
/// use std::cmp::Ordering;
/// use comic_shelf::page::natural::compare_natural;
///
/// assert_eq!(compare_natural("page2.png", "page10.png"), Ordering::Less);
/// ```
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut left = Runs::new(a);
    let mut right = Runs::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = x.cmp_run(&y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// 按文件名（不含目录）进行自然顺序比较
pub fn compare_file_names(a: &Path, b: &Path) -> Ordering {
    let a_name = a
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let b_name = b
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    compare_natural(&a_name, &b_name).then_with(|| a.cmp(b))
}
