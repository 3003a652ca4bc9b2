/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use crate::config::Config;
use crate::models::report::Summary;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别 info，可通过 RUST_LOG 环境变量调整；
/// 重复调用（例如在测试中）不会报错
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 答题卡评分模式");
    info!("📄 答题卡: {}", config.response_sheet_file);
    info!("🔑 答案键: {}", config.answer_key_file);
    info!("📁 报告输出: {}", config.report_output_file);
    info!("{}", "=".repeat(60));
}

/// 输出评分汇总
///
/// # 参数
/// - `summary`: 汇总统计
/// - `total_questions`: 答案键题目总数
pub fn print_summary(summary: &Summary, total_questions: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 评分汇总 (共 {} 题)", total_questions);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 答对: {}", summary.correct);
    info!("❌ 答错: {}", summary.wrong);
    info!("⬜ 未作答: {}", summary.not_attempted);
    info!("🎯 总分: {}", summary.total_score);
    info!("{}", "=".repeat(60));
}
