//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! generator (整条流水线)
//!     ↓
//! models::loaders (读取 TSV 题库 / TOML 六十秒题)
//!     ↓
//! services (能力层：sampler / composer / renderer)
//! ```
//!
//! 编排层只做调度和日志，不做具体的抽题或排版判断

pub mod generator;

pub use generator::{output_path, PacketGenerator};
