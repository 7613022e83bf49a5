use crate::error::{AppError, AppResult, SourceError};
use crate::models::question::QuestionRecord;
use std::fs;
use std::io::Read;
use std::path::Path;

/// 每行必须具备的字段数：题目、答案、分类、年级
const FIELD_COUNT: usize = 4;

/// 从制表符分隔的题目文件读取全部题目
///
/// 保持文件中的顺序；字段可以用双引号包裹以包含制表符或换行。
/// 多出的列会被忽略，不足 4 列的行返回 `MalformedRecord`。
/// 文件先整体读入内存，路径不存在、是目录或无权限都归为 `NotFound`。
pub fn read_questions(path: &Path) -> AppResult<Vec<QuestionRecord>> {
    let bytes = fs::read(path).map_err(|e| AppError::source_not_found(path.display().to_string(), e))?;

    let records = parse_questions(bytes.as_slice()).map_err(|e| match e {
        AppError::Source(SourceError::Parse { source, .. }) => AppError::Source(SourceError::Parse {
            path: path.display().to_string(),
            source,
        }),
        other => other,
    })?;

    tracing::debug!("从 {} 读取 {} 道题目", path.display(), records.len());
    Ok(records)
}

/// 从任意读取器解析题目
pub fn parse_questions<R: Read>(reader: R) -> AppResult<Vec<QuestionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quote(b'"')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SourceError::Parse {
            path: String::new(),
            source: e,
        })?;

        if row.len() < FIELD_COUNT {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            return Err(SourceError::MalformedRecord {
                line,
                found: row.len(),
            }
            .into());
        }

        records.push(QuestionRecord::new(&row[0], &row[1], &row[2], &row[3]));
    }

    Ok(records)
}
