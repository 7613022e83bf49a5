//! 日志工具模块
//!
//! 提供日志初始化和各阶段输出的辅助函数

use crate::config::Config;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则默认 `academic_team_packet=info`（verbose 时为 debug）。
/// 重复调用不会报错，测试里可以放心使用。
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("academic_team_packet={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目文档生成");
    info!("📄 题目文件: {}", config.questions_path);
    info!("🎲 抢答题数量: {} | 随机种子: {}", config.num_tossup, config.seed);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
///
/// # 参数
/// - `total`: 题库总数
/// - `path`: 题目文件路径
pub fn log_pool_loaded(total: usize, path: &str) {
    info!("✓ 从 {} 读取 {} 道题目", path, total);
}

/// 记录抽题结果
///
/// # 参数
/// - `picked`: 抽中数量
/// - `total`: 题库总数
pub fn log_sample_done(picked: usize, total: usize) {
    info!("✓ 已抽取 {}/{} 道题目", picked, total);
}

/// 记录文档保存信息
///
/// # 参数
/// - `path`: 输出文件路径
/// - `questions`: 抢答题数量
/// - `rounds`: 六十秒题组数量
pub fn log_document_saved(path: &Path, questions: usize, rounds: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 生成完成");
    info!("📝 抢答题: {} | 六十秒题: {}", questions, rounds);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("文档已保存至: {}", path.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
