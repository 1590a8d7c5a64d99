#[derive(Clone, Debug, PartialEq)]
pub enum AppState {
    /// 书架：当前分类下的漫画
    Shelf,
    /// 漫画详情与章节列表
    Detail,
    Reading,
    /// 分类列表
    Categories,
    /// 为选中的漫画勾选分类
    CategoryAssign,
    Settings,
    /// 输入对话框
    Dialog,
}

/// 对话框用途
#[derive(Clone, Debug, PartialEq)]
pub enum DialogKind {
    /// 添加新漫画
    AddSeries,
    /// 修改漫画信息（漫画索引）
    EditSeries(usize),
    /// 为当前漫画添加章节
    AddChapter,
    /// 新建分类
    AddCategory,
}
