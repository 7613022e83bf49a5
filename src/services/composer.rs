//! 组版服务 - 业务能力层
//!
//! 把抽好的题目和六十秒题组排成 `DocumentPlan`。
//! 这里只决定"放什么、按什么顺序、怎么分组"，不接触任何渲染库。

use crate::models::plan::{
    Block, DocumentPlan, QuestionBlock, RoundBlock, RoundRow, TitleLine, TitleStyle,
};
use crate::models::question::QuestionRecord;
use crate::models::round::SixtySecondRound;
use crate::models::title::TitleParams;
use tracing::debug;

/// 每道抢答题之后的留白（磅）
pub const QUESTION_SPACING: u32 = 15;
/// 六十秒题组之间的留白（磅）
pub const ROUND_SPACING: u32 = 10;
/// 封面中场次编号之前的留白（磅）
pub const TITLE_SPACER: u32 = 80;
/// 第 11 小题（下标 10）之前插入 EXTRA 标记
pub const EXTRA_INDEX: usize = 10;

/// 组版器
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    title: TitleParams,
}

impl DocumentComposer {
    pub fn new(title: TitleParams) -> Self {
        Self { title }
    }

    /// 生成完整排版计划
    ///
    /// 顺序：封面 → 分页 → 抢答题（每题后留白）→ 分页 → 六十秒题组。
    /// 有六十秒题时，最后一组之后再补一个分页。
    pub fn compose(
        &self,
        questions: &[QuestionRecord],
        rounds: &[SixtySecondRound],
    ) -> DocumentPlan {
        let mut plan = DocumentPlan::default();

        plan.push(self.title_block());
        plan.push(Block::PageBreak);

        for (index, question) in questions.iter().enumerate() {
            let number = index + 1;
            debug!("排版第 {} 题: {}", number, question);
            plan.push(Block::Question(question_block(number, question)));
            plan.push(Block::Spacer {
                height: QUESTION_SPACING,
            });
        }

        plan.push(Block::PageBreak);

        if !rounds.is_empty() {
            for round in rounds {
                plan.push(Block::Round(round_block(round)));
                plan.push(Block::Spacer {
                    height: ROUND_SPACING,
                });
            }
            plan.push(Block::PageBreak);
        }

        plan
    }

    /// 封面块，行顺序固定
    pub fn title_block(&self) -> Block {
        let t = &self.title;
        let mut lines = vec![
            TitleLine::text(&t.organization, TitleStyle::SmallItalic),
            TitleLine::text(format!("Grades {}", t.grades), TitleStyle::Large),
            TitleLine::text(&t.tournament_type, TitleStyle::Large),
            TitleLine::text(&t.document_label, TitleStyle::Large),
            TitleLine::text(&t.year, TitleStyle::Large),
        ];
        if t.spacer {
            lines.push(TitleLine::Spacer {
                height: TITLE_SPACER,
            });
        }
        lines.push(TitleLine::text(
            format!("Game {}", t.game_number),
            TitleStyle::Large,
        ));

        Block::Title { lines }
    }
}

/// 单道抢答题块
pub fn question_block(number: usize, question: &QuestionRecord) -> QuestionBlock {
    QuestionBlock {
        number,
        question: question.question.clone(),
        answer: question.answer.clone(),
    }
}

/// 六十秒题块：按输入顺序编号，第 11 小题前插入 EXTRA
pub fn round_block(round: &SixtySecondRound) -> RoundBlock {
    let mut rows = Vec::with_capacity(round.items.len() + 1);
    for (index, item) in round.items.iter().enumerate() {
        if index == EXTRA_INDEX {
            rows.push(RoundRow::Extra);
        }
        rows.push(RoundRow::Item {
            number: index + 1,
            prompt: item.prompt.clone(),
            answer: item.answer.clone(),
        });
    }

    RoundBlock {
        title: round.title.clone(),
        instructions: round.instructions.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::round::RoundItem;

    fn presidents(count: usize) -> SixtySecondRound {
        SixtySecondRound {
            title: "U.S. Presidents by Century".to_string(),
            instructions: "During what century was each of the following U.S. Presidents in office?"
                .to_string(),
            items: (0..count)
                .map(|i| RoundItem::new(format!("President {}", i + 1), "20th"))
                .collect(),
        }
    }

    fn two_questions() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new("Name the four blood types.", "A, B, AB, O", "Science", "5"),
            QuestionRecord::new(
                "Name the state located immediately west of Alabama.",
                "Mississippi",
                "Geography",
                "6",
            ),
        ]
    }

    #[test]
    fn test_title_block_line_order() {
        let composer = DocumentComposer::default();
        let Block::Title { lines } = composer.title_block() else {
            panic!("expected title block");
        };

        let texts: Vec<_> = lines
            .iter()
            .map(|l| match l {
                TitleLine::Text { text, .. } => text.as_str(),
                TitleLine::Spacer { .. } => "<spacer>",
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                "Saint John Nepomuk Academic Team",
                "Grades 5&6",
                "Practice Questions",
                "Questions",
                "2025-2026",
                "<spacer>",
                "Game 1",
            ]
        );
        assert!(matches!(
            lines[0],
            TitleLine::Text {
                style: TitleStyle::SmallItalic,
                ..
            }
        ));
    }

    #[test]
    fn test_title_block_without_spacer() {
        let composer = DocumentComposer::new(TitleParams {
            spacer: false,
            game_number: "7".to_string(),
            ..Default::default()
        });
        let Block::Title { lines } = composer.title_block() else {
            panic!("expected title block");
        };
        assert_eq!(lines.len(), 6);
        assert!(!lines.iter().any(|l| matches!(l, TitleLine::Spacer { .. })));
        assert_eq!(lines[5], TitleLine::text("Game 7", TitleStyle::Large));
    }

    #[test]
    fn test_compose_questions_only() {
        let plan = DocumentComposer::default().compose(&two_questions(), &[]);

        assert!(matches!(plan.blocks[0], Block::Title { .. }));
        assert_eq!(plan.blocks[1], Block::PageBreak);
        assert_eq!(
            plan.blocks[2],
            Block::Question(QuestionBlock {
                number: 1,
                question: "Name the four blood types.".to_string(),
                answer: "A, B, AB, O".to_string(),
            })
        );
        assert_eq!(
            plan.blocks[3],
            Block::Spacer {
                height: QUESTION_SPACING
            }
        );
        assert!(matches!(&plan.blocks[4], Block::Question(q) if q.number == 2 && q.answer == "Mississippi"));
        assert_eq!(plan.blocks.last(), Some(&Block::PageBreak));
        assert_eq!(plan.blocks.len(), 7);
        assert_eq!(plan.question_count(), 2);
        assert_eq!(plan.round_count(), 0);
    }

    #[test]
    fn test_compose_no_questions_still_breaks_page() {
        let plan = DocumentComposer::default().compose(&[], &[]);
        assert_eq!(plan.blocks.len(), 3);
        assert_eq!(plan.page_break_count(), 2);
    }

    #[test]
    fn test_round_block_extra_before_eleventh() {
        let block = round_block(&presidents(11));

        assert_eq!(block.rows.len(), 12);
        assert_eq!(block.rows[EXTRA_INDEX], RoundRow::Extra);
        for (i, row) in block.rows[..EXTRA_INDEX].iter().enumerate() {
            assert!(matches!(row, RoundRow::Item { number, .. } if *number == i + 1));
        }
        assert!(matches!(
            &block.rows[11],
            RoundRow::Item { number: 11, prompt, .. } if prompt == "President 11"
        ));
    }

    #[test]
    fn test_round_block_without_extra() {
        let block = round_block(&presidents(10));
        assert_eq!(block.rows.len(), 10);
        assert!(!block.rows.contains(&RoundRow::Extra));

        let empty = round_block(&presidents(0));
        assert!(empty.rows.is_empty());
    }

    #[test]
    fn test_round_block_only_one_extra() {
        let block = round_block(&presidents(15));
        let extras = block.rows.iter().filter(|r| **r == RoundRow::Extra).count();
        assert_eq!(extras, 1);
        assert_eq!(block.rows.len(), 16);
    }

    #[test]
    fn test_compose_rounds_after_page_break() {
        let rounds = vec![presidents(11), presidents(3)];
        let plan = DocumentComposer::default().compose(&two_questions(), &rounds);

        // 封面, 分页, (题, 留白) x2, 分页, (题组, 留白) x2, 分页
        assert_eq!(plan.blocks.len(), 12);
        assert_eq!(plan.blocks[6], Block::PageBreak);
        assert!(matches!(plan.blocks[7], Block::Round(_)));
        assert_eq!(
            plan.blocks[8],
            Block::Spacer {
                height: ROUND_SPACING
            }
        );
        assert!(matches!(plan.blocks[9], Block::Round(_)));
        assert_eq!(plan.blocks[11], Block::PageBreak);
        assert_eq!(plan.round_count(), 2);
    }
}
