use crate::model::ComicSeries;
use crate::state::DialogKind;

/// 对话框中的一个输入框
#[derive(Debug, Clone, PartialEq)]
pub struct DialogField {
    pub label: &'static str,
    pub value: String,
    /// 输入为空时显示的提示
    pub placeholder: &'static str,
}

impl DialogField {
    fn new(label: &'static str, placeholder: &'static str) -> Self {
        DialogField {
            label,
            value: String::new(),
            placeholder,
        }
    }

    fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// 输入对话框状态
#[derive(Debug, Clone, PartialEq)]
pub struct DialogState {
    pub kind: DialogKind,
    pub fields: Vec<DialogField>,
    /// 当前正在输入的字段
    pub selected_field: usize,
}

impl DialogState {
    pub fn add_series() -> Self {
        DialogState {
            kind: DialogKind::AddSeries,
            fields: vec![
                DialogField::new("漫画标题", "必填"),
                DialogField::new("作者", "可选"),
                DialogField::new("封面图片", "图片路径，可选"),
            ],
            selected_field: 0,
        }
    }

    pub fn edit_series(index: usize, series: &ComicSeries) -> Self {
        let cover = series
            .cover_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        DialogState {
            kind: DialogKind::EditSeries(index),
            fields: vec![
                DialogField::new("漫画标题", "必填").with_value(series.title.clone()),
                DialogField::new("作者", "可选").with_value(series.author.clone()),
                DialogField::new("封面图片", "图片路径，可选").with_value(cover),
            ],
            selected_field: 0,
        }
    }

    pub fn add_chapter(suggested_number: f64) -> Self {
        DialogState {
            kind: DialogKind::AddChapter,
            fields: vec![
                DialogField::new("章节序号", "数字 (如 1, 1.5)")
                    .with_value(suggested_number.to_string()),
                DialogField::new("图片文件夹", "文件夹路径，支持 ~/"),
            ],
            selected_field: 0,
        }
    }

    pub fn add_category() -> Self {
        DialogState {
            kind: DialogKind::AddCategory,
            fields: vec![DialogField::new("分类名称", "例如: 悬疑类")],
            selected_field: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::AddSeries => "添加新漫画",
            DialogKind::EditSeries(_) => "修改漫画信息",
            DialogKind::AddChapter => "添加章节",
            DialogKind::AddCategory => "新建分类",
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len().max(1);
    }

    pub fn prev_field(&mut self) {
        let len = self.fields.len().max(1);
        self.selected_field = (self.selected_field + len - 1) % len;
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.selected_field) {
            field.value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.selected_field) {
            field.value.pop();
        }
    }
}
