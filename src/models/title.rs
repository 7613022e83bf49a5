use serde::{Deserialize, Serialize};

/// 封面参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleParams {
    /// 组织名称
    pub organization: String,
    /// 年级范围，例如 "5&6"
    pub grades: String,
    /// 比赛类型
    pub tournament_type: String,
    /// 文档类型标签
    pub document_label: String,
    /// 学年
    pub year: String,
    /// 场次编号
    pub game_number: String,
    /// 场次前是否留空
    pub spacer: bool,
}

impl Default for TitleParams {
    fn default() -> Self {
        Self {
            organization: "Saint John Nepomuk Academic Team".to_string(),
            grades: "5&6".to_string(),
            tournament_type: "Practice Questions".to_string(),
            document_label: "Questions".to_string(),
            year: "2025-2026".to_string(),
            game_number: "1".to_string(),
            spacer: true,
        }
    }
}
