//! 渲染服务 - 业务能力层
//!
//! 把 `DocumentPlan` 转成最终文件字节。渲染结果先落在内存里，
//! 只有渲染成功后编排层才会创建输出文件。

use crate::error::RenderError;
use crate::models::plan::{Block, DocumentPlan, QuestionBlock, RoundBlock, RoundRow, TitleLine, TitleStyle};
use crate::services::styles::DocumentStyles;
use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, PageMargin, Paragraph, Run, RunFonts, Table,
    TableBorders, TableCell, TableRow, VAlignType, WidthType,
};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// 渲染器接口
pub trait DocumentRenderer {
    /// 输出文件扩展名（不含点）
    fn extension(&self) -> &'static str;

    /// 渲染成完整文件字节
    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, RenderError>;
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Docx,
    Text,
    Json,
}

impl OutputFormat {
    /// 根据格式创建渲染器
    pub fn renderer(self, styles: DocumentStyles) -> Box<dyn DocumentRenderer> {
        match self {
            OutputFormat::Docx => Box::new(DocxRenderer::new(styles)),
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }

    /// 从字符串解析（用于环境变量）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docx" | "word" => Some(OutputFormat::Docx),
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

// ========== DOCX ==========

/// Word 文档渲染器
#[derive(Debug, Clone, Default)]
pub struct DocxRenderer {
    styles: DocumentStyles,
}

impl DocxRenderer {
    pub fn new(styles: DocumentStyles) -> Self {
        Self { styles }
    }

    fn run(&self, text: &str, size: usize) -> Run {
        Run::new()
            .add_text(text)
            .size(size * 2) // OOXML 使用半磅
            .fonts(RunFonts::new().ascii(&self.styles.body_font))
    }

    fn title_paragraph(&self, text: &str, style: TitleStyle) -> Paragraph {
        let (run, spacing) = match style {
            TitleStyle::SmallItalic => (
                self.run(text, self.styles.organization_size).italic(),
                LineSpacing::new().before(80 * 20).after(40 * 20),
            ),
            TitleStyle::Large => (
                self.run(text, self.styles.title_size),
                LineSpacing::new().before(20 * 20).after(20 * 20),
            ),
        };
        Paragraph::new()
            .align(AlignmentType::Center)
            .line_spacing(spacing)
            .add_run(run)
    }

    fn cell(&self, paragraph: Paragraph, width: usize) -> TableCell {
        TableCell::new()
            .add_paragraph(paragraph)
            .width(width, WidthType::Dxa)
            .vertical_align(VAlignType::Top)
    }

    /// 两行无边框表格；行不可拆分，第一行段落设 keep_next，保证整题不跨页
    fn question_table(&self, block: &QuestionBlock) -> Table {
        let [num_w, text_w] = self.styles.question_columns;
        let size = self.styles.body_size;
        let number = block.number.to_string();

        let first = TableRow::new(vec![
            self.cell(kept(Paragraph::new(), true).add_run(self.run(&number, size)), num_w),
            self.cell(
                kept(Paragraph::new(), true).add_run(self.run(&block.question, size)),
                text_w,
            ),
        ])
        .cant_split();
        let second = TableRow::new(vec![
            self.cell(kept(Paragraph::new(), false), num_w),
            self.cell(
                kept(Paragraph::new(), false)
                    .indent(Some(self.styles.answer_indent_pt as i32 * 20), None, None, None)
                    .add_run(self.run(&block.answer, size)),
                text_w,
            ),
        ])
        .cant_split();

        Table::new(vec![first, second])
            .set_grid(self.styles.question_columns.to_vec())
            .set_borders(TableBorders::with_empty())
    }

    fn round_elements(&self, block: &RoundBlock) -> (Vec<Paragraph>, Table) {
        let title = Paragraph::new()
            .align(AlignmentType::Center)
            .keep_next(true)
            .add_run(self.run(&block.title, self.styles.round_title_size).bold());
        let instructions = kept(Paragraph::new(), true)
            .align(AlignmentType::Left)
            .line_spacing(LineSpacing::new().before(4 * 20).after(2 * 20))
            .add_run(self.run(&block.instructions, self.styles.round_body_size));

        let [num_w, prompt_w, answer_w] = self.styles.round_columns;
        let size = self.styles.round_body_size;
        let last = block.rows.len().saturating_sub(1);

        let rows = block
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let keep = i < last;
                let cells = match row {
                    RoundRow::Item {
                        number,
                        prompt,
                        answer,
                    } => vec![
                        self.cell(
                            kept(Paragraph::new(), keep).add_run(self.run(&number.to_string(), size)),
                            num_w,
                        ),
                        self.cell(kept(Paragraph::new(), keep).add_run(self.run(prompt, size)), prompt_w),
                        self.cell(kept(Paragraph::new(), keep).add_run(self.run(answer, size)), answer_w),
                    ],
                    RoundRow::Extra => vec![
                        self.cell(
                            kept(Paragraph::new(), keep)
                                .add_run(self.run("EXTRA:", self.styles.extra_size).bold()),
                            num_w + prompt_w,
                        )
                        .grid_span(2),
                        self.cell(kept(Paragraph::new(), keep), answer_w),
                    ],
                };
                TableRow::new(cells).cant_split()
            })
            .collect();

        let table = Table::new(rows)
            .set_grid(self.styles.round_columns.to_vec())
            .set_borders(TableBorders::with_empty());

        (vec![title, instructions], table)
    }

    /// 组装 Word 文档
    ///
    /// 分页符挂在前一个段落末尾，不单独占一段；文档末尾的分页符不输出
    pub fn build_docx(&self, plan: &DocumentPlan) -> Docx {
        let mut elements: Vec<Element> = Vec::new();

        for (index, block) in plan.blocks.iter().enumerate() {
            match block {
                Block::Title { lines } => {
                    for line in lines {
                        elements.push(Element::Paragraph(match line {
                            TitleLine::Text { text, style } => self.title_paragraph(text, *style),
                            TitleLine::Spacer { height } => spacer(*height),
                        }));
                    }
                }
                Block::Question(q) => elements.push(Element::Table(self.question_table(q))),
                Block::Round(r) => {
                    let (paragraphs, table) = self.round_elements(r);
                    elements.extend(paragraphs.into_iter().map(Element::Paragraph));
                    elements.push(Element::Table(table));
                }
                Block::Spacer { height } => elements.push(Element::Paragraph(spacer(*height))),
                Block::PageBreak => {
                    if index + 1 == plan.blocks.len() {
                        continue;
                    }
                    match elements.pop() {
                        Some(Element::Paragraph(p)) => {
                            elements.push(Element::Paragraph(p.add_run(page_break_run())));
                        }
                        other => {
                            elements.extend(other);
                            elements.push(Element::Paragraph(
                                Paragraph::new().add_run(page_break_run()),
                            ));
                        }
                    }
                }
            }
        }

        let (width, height) = self.styles.page_size;
        let margin = self.styles.margin;
        let docx = Docx::new().page_size(width, height).page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        );

        elements.into_iter().fold(docx, |docx, element| match element {
            Element::Paragraph(p) => docx.add_paragraph(p),
            Element::Table(t) => docx.add_table(t),
        })
    }
}

/// 文档主体中的顶层元素
enum Element {
    Paragraph(Paragraph),
    Table(Table),
}

/// 段内不断行；`keep_next` 让段落与下一段同页
fn kept(paragraph: Paragraph, keep_next: bool) -> Paragraph {
    let paragraph = paragraph.keep_lines(true);
    if keep_next {
        paragraph.keep_next(true)
    } else {
        paragraph
    }
}

fn spacer(height: u32) -> Paragraph {
    Paragraph::new().line_spacing(LineSpacing::new().before(height * 20).after(0))
}

fn page_break_run() -> Run {
    Run::new().add_break(BreakType::Page)
}

impl DocumentRenderer for DocxRenderer {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, RenderError> {
        let docx = self.build_docx(plan);

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| RenderError::Docx(e.to_string()))?;

        Ok(buf.into_inner())
    }
}

// ========== 纯文本 ==========

/// 纯文本预览渲染器，分页以换页符 `\x0c` 表示
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn render_string(&self, plan: &DocumentPlan) -> String {
        let mut out = String::new();
        for block in &plan.blocks {
            match block {
                Block::Title { lines } => {
                    for line in lines {
                        match line {
                            TitleLine::Text { text, .. } => {
                                out.push_str(text);
                                out.push('\n');
                            }
                            TitleLine::Spacer { .. } => out.push('\n'),
                        }
                    }
                }
                Block::Question(q) => {
                    out.push_str(&format!("{}\t{}\n", q.number, q.question));
                    out.push_str(&format!("\t    {}\n", q.answer));
                }
                Block::Round(r) => {
                    out.push_str(&r.title);
                    out.push('\n');
                    out.push_str(&r.instructions);
                    out.push('\n');
                    for row in &r.rows {
                        match row {
                            RoundRow::Item {
                                number,
                                prompt,
                                answer,
                            } => out.push_str(&format!("{number}\t{prompt}\t{answer}\n")),
                            RoundRow::Extra => out.push_str("EXTRA:\n"),
                        }
                    }
                }
                Block::Spacer { .. } => out.push('\n'),
                Block::PageBreak => out.push('\x0c'),
            }
        }
        out
    }
}

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, RenderError> {
        Ok(self.render_string(plan).into_bytes())
    }
}

// ========== JSON ==========

/// 直接输出排版计划
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, RenderError> {
        Ok(serde_json::to_vec_pretty(plan)?)
    }
}
