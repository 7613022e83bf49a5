use serde::{Deserialize, Serialize};

/// 导出文档的排版样式
///
/// 字号单位为磅，长度单位为 twip（1/20 磅，1440 = 1 英寸）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// 正文字体
    pub body_font: String,

    /// 正文字号
    pub body_size: usize,

    /// 封面组织名称字号（斜体）
    pub organization_size: usize,

    /// 封面大标题字号
    pub title_size: usize,

    /// 六十秒题标题字号（加粗居中）
    pub round_title_size: usize,

    /// 六十秒题说明与表格字号
    pub round_body_size: usize,

    /// EXTRA 标记字号（加粗）
    pub extra_size: usize,

    /// 答案缩进（磅）
    pub answer_indent_pt: u32,

    /// 抢答题表格列宽（twip）
    pub question_columns: [usize; 2],

    /// 六十秒题表格列宽（twip）
    pub round_columns: [usize; 3],

    /// 页面宽高（twip），默认 US Letter
    pub page_size: (u32, u32),

    /// 页边距（twip，四边一致）
    pub margin: i32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            body_size: 10,
            organization_size: 16,
            title_size: 28,
            round_title_size: 12,
            round_body_size: 9,
            extra_size: 10,
            answer_indent_pt: 20,
            question_columns: [576, 9504],
            round_columns: [576, 4752, 4752],
            page_size: (12240, 15840),
            margin: 1440,
        }
    }
}
