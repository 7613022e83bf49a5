use crate::error::{AppResult, ConfigError};
use crate::models::title::TitleParams;
use crate::services::renderer::OutputFormat;
use crate::services::sampler::DEFAULT_SEED;
use crate::services::styles::DocumentStyles;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 程序配置
///
/// 优先级：默认值 < TOML 配置文件 < 环境变量 < 命令行参数
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目文件路径（TSV）
    pub questions_path: String,
    /// 输出文件名前缀
    pub output_base: String,
    /// 输出目录
    pub output_dir: String,
    /// 抢答题数量
    pub num_tossup: usize,
    /// 抽题随机种子
    pub seed: u64,
    /// 输出格式
    pub format: OutputFormat,
    /// 六十秒题文件（TOML），为空则不生成六十秒题
    pub sixty_second_path: Option<String>,
    /// 是否显示详细日志
    pub verbose: bool,
    /// 封面参数
    pub title: TitleParams,
    /// 排版样式
    pub styles: DocumentStyles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_path: "sample_questions.txt".to_string(),
            output_base: "Questions".to_string(),
            output_dir: ".".to_string(),
            num_tossup: 80,
            seed: DEFAULT_SEED,
            format: OutputFormat::Docx,
            sixty_second_path: None,
            verbose: false,
            title: TitleParams::default(),
            styles: DocumentStyles::default(),
        }
    }
}

impl Config {
    /// 默认值 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_from(|key| std::env::var(key).ok())
    }

    /// 读取 TOML 配置文件（缺省字段使用默认值），再叠加环境变量
    pub fn load(config_path: Option<&Path>) -> AppResult<Self> {
        match config_path {
            Some(path) => Ok(Self::from_toml_file(path)?.with_env_from(|key| std::env::var(key).ok())),
            None => Ok(Self::from_env()),
        }
    }

    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(config)
    }

    /// 用给定的查找函数叠加环境变量
    ///
    /// 数值无法解析时保留原值
    pub fn with_env_from<F>(self, get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let title = self.title;

        Self {
            questions_path: get("QUESTIONS_PATH").unwrap_or(self.questions_path),
            output_base: get("OUTPUT_BASE").unwrap_or(self.output_base),
            output_dir: get("OUTPUT_DIR").unwrap_or(self.output_dir),
            num_tossup: get("NUM_TOSSUP").and_then(|v| v.trim().parse().ok()).unwrap_or(self.num_tossup),
            seed: get("QUESTION_SEED").and_then(|v| v.trim().parse().ok()).unwrap_or(self.seed),
            format: get("OUTPUT_FORMAT").and_then(|v| OutputFormat::parse(&v)).unwrap_or(self.format),
            sixty_second_path: get("SIXTY_SECOND_PATH").or(self.sixty_second_path),
            verbose: get("VERBOSE_LOGGING").and_then(|v| v.trim().parse().ok()).unwrap_or(self.verbose),
            title: TitleParams {
                organization: get("TITLE_ORGANIZATION").unwrap_or(title.organization),
                grades: get("TITLE_GRADES").unwrap_or(title.grades),
                tournament_type: get("TITLE_TOURNAMENT_TYPE").unwrap_or(title.tournament_type),
                year: get("TITLE_YEAR").unwrap_or(title.year),
                game_number: get("TITLE_GAME_NUMBER").unwrap_or(title.game_number),
                ..title
            },
            styles: self.styles,
        }
    }
}
