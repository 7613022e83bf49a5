use thiserror::Error;

/// 应用程序错误类型
///
/// 按流水线阶段划分，Display 文案会标明是哪个阶段失败
#[derive(Debug, Error)]
pub enum AppError {
    /// 题目读取阶段
    #[error("题目读取错误: {0}")]
    Source(#[from] SourceError),
    /// 抽题阶段
    #[error("抽题错误: {0}")]
    Sample(#[from] SampleError),
    /// 渲染/输出阶段
    #[error("文档渲染错误: {0}")]
    Render(#[from] RenderError),
    /// 配置阶段
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 题目文件读取错误
#[derive(Debug, Error)]
pub enum SourceError {
    /// 文件不存在或无法读取
    #[error("文件不存在或无法读取 ({path}): {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 某一行不足 4 个字段
    #[error("第 {line} 行格式错误: 需要 4 个字段, 实际 {found} 个")]
    MalformedRecord { line: u64, found: usize },
    /// TSV 解析失败（引号不闭合、非 UTF-8 等）
    #[error("TSV 解析失败 ({path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// 抽题错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// 题库数量不足
    #[error("题库数量不足: 需要 {requested} 道, 仅有 {available} 道")]
    InsufficientPool { requested: usize, available: usize },
}

/// 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// DOCX 生成失败
    #[error("DOCX 生成失败: {0}")]
    Docx(String),
    /// JSON 序列化失败
    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
    /// 写入输出文件失败
    #[error("写入输出文件失败 ({path}): {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件或六十秒题文件读取失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建题目文件不存在错误
    pub fn source_not_found(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Source(SourceError::NotFound {
            path: path.into(),
            source,
        })
    }

    /// 创建输出写入错误
    pub fn output_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Render(RenderError::Output {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
