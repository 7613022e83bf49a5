//! 文档排版计划
//!
//! 组版层只产出这份有序的块列表，具体怎么画交给渲染器。
//! "不可拆分"和"强制分页"都以显式的块表达，而不依赖某个渲染库的 API。

use serde::{Deserialize, Serialize};

/// 封面行的样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStyle {
    /// 小号斜体（组织名称）
    SmallItalic,
    /// 大号标题
    Large,
}

/// 封面中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TitleLine {
    Text { text: String, style: TitleStyle },
    Spacer { height: u32 },
}

impl TitleLine {
    pub fn text(text: impl Into<String>, style: TitleStyle) -> Self {
        TitleLine::Text {
            text: text.into(),
            style,
        }
    }
}

/// 一道抢答题的两行块，整体不可跨页
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBlock {
    /// 从 1 开始的题号
    pub number: usize,
    pub question: String,
    pub answer: String,
}

/// 六十秒题表格中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundRow {
    Item {
        number: usize,
        prompt: String,
        answer: String,
    },
    /// "EXTRA:" 标记行，位于第 11 小题之前
    Extra,
}

/// 六十秒题块，表格整体不可跨页
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundBlock {
    pub title: String,
    pub instructions: String,
    pub rows: Vec<RoundRow>,
}

/// 排版块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title { lines: Vec<TitleLine> },
    Question(QuestionBlock),
    Round(RoundBlock),
    /// 固定高度留白（单位：磅）
    Spacer { height: u32 },
    PageBreak,
}

/// 完整的排版计划
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub blocks: Vec<Block>,
}

impl DocumentPlan {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn question_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Question(_)))
            .count()
    }

    pub fn round_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Round(_)))
            .count()
    }

    pub fn page_break_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }
}
