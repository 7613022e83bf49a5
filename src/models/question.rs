use crate::utils::logging::truncate_text;
use serde::{Deserialize, Serialize};

/// 一道抢答题（tossup）
///
/// 字段顺序与题目文件的列顺序一致：题目、答案、分类、年级
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub grade_level: String,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        grade_level: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            grade_level: grade_level.into(),
        }
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题目内容以便显示（最多60个字符）
        write!(
            f,
            "{} [{} / {}]",
            truncate_text(&self.question, 60),
            self.category,
            self.grade_level
        )
    }
}
