use crate::error::{AppResult, ConfigError};
use crate::models::round::{RoundFile, SixtySecondRound};
use std::fs;
use std::path::Path;

/// 从 TOML 文件加载六十秒题组
pub fn load_rounds(toml_file_path: &Path) -> AppResult<Vec<SixtySecondRound>> {
    let content = fs::read_to_string(toml_file_path).map_err(|e| ConfigError::ReadFailed {
        path: toml_file_path.display().to_string(),
        source: e,
    })?;

    let file = parse_rounds(&content).map_err(|e| ConfigError::TomlParseFailed {
        path: toml_file_path.display().to_string(),
        source: e,
    })?;

    for round in &file.rounds {
        tracing::info!("正在加载六十秒题: {} ({} 小题)", round.title, round.items.len());
    }

    Ok(file.rounds)
}

/// 解析六十秒题 TOML 内容
pub fn parse_rounds(content: &str) -> Result<RoundFile, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    const SAMPLE: &str = r#"
[[rounds]]
title = "U.S. Presidents by Century"
instructions = "During what century was each of the following U.S. Presidents in office?"

[[rounds.items]]
prompt = "Theodore Roosevelt"
answer = "20th"

[[rounds.items]]
prompt = "James Buchanan"
answer = "19th"

[[rounds]]
title = "Empty"
instruct = "Nothing here yet."
"#;

    #[test]
    fn test_parse_rounds_in_order() {
        let file = parse_rounds(SAMPLE).unwrap();

        assert_eq!(file.rounds.len(), 2);
        assert_eq!(file.rounds[0].title, "U.S. Presidents by Century");
        assert_eq!(file.rounds[0].items.len(), 2);
        assert_eq!(file.rounds[0].items[1].prompt, "James Buchanan");
        assert_eq!(file.rounds[0].items[1].answer, "19th");
        // instruct 是 instructions 的别名；items 可省略
        assert_eq!(file.rounds[1].instructions, "Nothing here yet.");
        assert!(file.rounds[1].items.is_empty());
    }

    #[test]
    fn test_parse_rounds_missing_title_fails() {
        let bad = "[[rounds]]\ninstructions = \"x\"\n";
        assert!(parse_rounds(bad).is_err());
    }

    #[test]
    fn test_load_rounds_missing_file() {
        let err = load_rounds(Path::new("no/such/rounds.toml")).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::ReadFailed { .. })));
    }
}
