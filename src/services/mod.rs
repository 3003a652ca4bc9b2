//! 业务能力层（Services Layer）
//!
//! 每个服务描述"我能做什么"，服务之间不相互调用，
//! 提取 → 评分 → 导出的流水线顺序由编排层（`app`）负责

pub mod export_service;
pub mod extract_service;
pub mod score_service;

pub use export_service::ExportService;
pub use extract_service::ExtractService;
pub use score_service::ScoreService;
