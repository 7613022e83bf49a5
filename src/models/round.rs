use serde::{Deserialize, Serialize};

/// 六十秒题中的一小题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundItem {
    pub prompt: String,
    pub answer: String,
}

impl RoundItem {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// 六十秒主题题组
///
/// 小题按输入顺序排版，不参与抽题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixtySecondRound {
    pub title: String,
    #[serde(alias = "instruct")]
    pub instructions: String,
    #[serde(default)]
    pub items: Vec<RoundItem>,
}

/// 六十秒题文件的顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundFile {
    #[serde(default)]
    pub rounds: Vec<SixtySecondRound>,
}
