//! 文档生成器 - 编排层
//!
//! ## 职责
//!
//! 串起整条流水线：读取题库 → 抽题 → 组版 → 渲染 → 写文件。
//!
//! ## 设计特点
//!
//! - **单线程顺序执行**：每次运行是 (题目文件, 数量, 种子, 封面参数) 的纯函数
//! - **不留半成品**：渲染成功后才创建输出文件，任何一步失败都不会产生文件
//! - **向下委托**：读取交给 loaders，抽题/组版/渲染交给 services

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::loaders::{load_rounds, read_questions};
use crate::models::plan::DocumentPlan;
use crate::services::composer::DocumentComposer;
use crate::services::sampler::Sampler;
use crate::utils::logging;
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 输出文件名中的时间戳格式（精确到秒）
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// 题目文档生成器
pub struct PacketGenerator {
    config: Config,
}

impl PacketGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行完整流水线，返回输出文件路径
    pub fn run(&self) -> AppResult<PathBuf> {
        logging::log_startup(&self.config);

        let plan = self.build_plan()?;

        let renderer = self.config.format.renderer(self.config.styles.clone());
        let bytes = renderer.render(&plan)?;
        debug!("渲染完成: {} 字节", bytes.len());

        let path = output_path(
            Path::new(&self.config.output_dir),
            &self.config.output_base,
            renderer.extension(),
            &Local::now(),
        );
        fs::write(&path, &bytes).map_err(|e| AppError::output_failed(path.display().to_string(), e))?;

        logging::log_document_saved(&path, plan.question_count(), plan.round_count());
        Ok(path)
    }

    /// 读取、抽题、组版，得到排版计划（不写任何文件）
    pub fn build_plan(&self) -> AppResult<DocumentPlan> {
        let pool = read_questions(Path::new(&self.config.questions_path))?;
        logging::log_pool_loaded(pool.len(), &self.config.questions_path);

        let sampler = Sampler::new(self.config.seed);
        let questions = sampler.sample(&pool, self.config.num_tossup)?;
        logging::log_sample_done(questions.len(), pool.len());

        let rounds = match &self.config.sixty_second_path {
            Some(path) => load_rounds(Path::new(path))?,
            None => Vec::new(),
        };
        if !rounds.is_empty() {
            info!("✓ 加载 {} 组六十秒题", rounds.len());
        }

        let composer = DocumentComposer::new(self.config.title.clone());
        Ok(composer.compose(&questions, &rounds))
    }
}

/// 生成输出文件路径：`{dir}/{base}_{YYYYMMDD_HHMMSS}.{ext}`
pub fn output_path<Tz: TimeZone>(dir: &Path, base: &str, extension: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!("{}_{}.{}", base, now.format(TIMESTAMP_FORMAT), extension))
}
