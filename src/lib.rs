//! # Calc Response Score
//!
//! 一个用于 NTA 答题卡自动评分的 Rust 应用程序：
//! 从答题卡 PDF 中提取 (题号, 所选选项)，与官方答案键比对，
//! 生成详细报告、汇总统计和可下载的 xlsx 评分报告。
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层流水线架构，数据单向流动：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - PDF 逐页文本读取，只暴露"顺序取每页文本"能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，互不调用
//! - `ExtractService` - 标记扫描与按位置配对
//! - `ScoreService` - 左外连接、分类、赋分、汇总
//! - `ExportService` - 双工作表 xlsx 序列化
//!
//! ### ③ 编排层（App）
//! - `app` - 流水线编排（加载答案键 → 提取 → 评分 → 导出）
//! - 空提取结果在评分前中止并给出明确诊断
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::{Config, MarkScheme};
pub use error::{AppError, AppResult};
pub use models::{AnswerKeyEntry, AnswerResult, ExtractedAnswer, ReportRow, Summary};
pub use services::{ExportService, ExtractService, ScoreService};
