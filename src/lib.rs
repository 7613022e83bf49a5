//! # Academic Team Packet
//!
//! 把 TSV 题库排成可打印的学术竞赛题目文档（封面 + 抢答题 + 六十秒题）
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、六十秒题组、封面参数、排版计划
//! - `models::loaders` - TSV 题库读取、TOML 六十秒题读取
//!
//! ### ② 业务能力层（Services）
//! - `Sampler` - 按固定种子不放回抽题，结果可复现
//! - `DocumentComposer` - 生成 `DocumentPlan`（封面、题块、分页）
//! - `DocumentRenderer` - 把排版计划渲染成 DOCX / 纯文本 / JSON
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator::generator` - 读取 → 抽题 → 组版 → 渲染 → 写文件
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{DocumentPlan, QuestionRecord, SixtySecondRound, TitleParams};
pub use orchestrator::PacketGenerator;
pub use services::{DocumentComposer, DocumentRenderer, OutputFormat, Sampler};
