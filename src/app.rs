//! 编排层（Orchestration Layer）
//!
//! 把提取 → 评分 → 导出串成一条流水线，数据严格单向流动，
//! 后面的环节不会回头调用前面的环节。
//!
//! 每次运行是一个独立、幂等、无副作用残留的工作单元：
//! 配置和 I/O 失败立即整体中止，不产生部分输出；
//! 提取结果为空时在评分前停下并给出明确的诊断信息。

use crate::config::Config;
use crate::error::{AppError, ExtractError};
use crate::models::answer::{AnswerKeyEntry, ExtractedAnswer};
use crate::models::loaders::load_answer_key;
use crate::services::{ExportService, ExtractService, ScoreService};
use crate::utils::logging::{log_startup, print_summary};
use anyhow::Result;
use std::fs;
use tracing::{info, warn};

/// 应用主结构
#[derive(Debug)]
pub struct App {
    config: Config,
    /// 答案键在初始化时加载一次，运行期间只读
    answer_key: Vec<AnswerKeyEntry>,
    extract_service: ExtractService,
    score_service: ScoreService,
    export_service: ExportService,
}

impl App {
    /// 初始化应用
    ///
    /// 答案键是致命前置条件，在这里加载并校验；
    /// 加载失败时应用不会进入运行阶段
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        // 解析评分规则（TOML 文件优先于环境变量）
        let scheme = config.resolve_mark_scheme()?;
        info!(
            "评分规则: 答对 {:+}, 答错 {:+}, 未作答 {:+}",
            scheme.correct, scheme.wrong, scheme.unattempted
        );

        // 加载答案键（失败则整体中止，不进入评分）
        let answer_key = load_answer_key(&config.answer_key_file)?;

        Ok(Self {
            answer_key,
            extract_service: ExtractService::new()?,
            score_service: ScoreService::new(scheme),
            export_service: ExportService::new(),
            config,
        })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> Result<()> {
        // 读取答题卡 PDF
        let pdf_bytes = fs::read(&self.config.response_sheet_file)
            .map_err(|e| AppError::file_read_failed(&self.config.response_sheet_file, e))?;

        // 提取作答
        info!("🔍 正在从答题卡中提取作答...");
        let extracted = self.extract_service.extract_from_pdf(&pdf_bytes)?;

        self.score_and_report(&extracted)
    }

    /// 对提取出的作答评分并写出报告
    ///
    /// 空作答列表不等于零分：在评分前停下并返回可操作的诊断错误，
    /// 此时不产生任何报告文件
    pub fn score_and_report(&self, extracted: &[ExtractedAnswer]) -> Result<()> {
        if extracted.is_empty() {
            warn!("⚠️ 文档中没有找到任何题号/所选选项标记");
            return Err(AppError::Extract(ExtractError::NoAnswersFound).into());
        }

        info!("✓ 提取完成，共 {} 个作答", extracted.len());
        if self.config.verbose_logging {
            for answer in extracted {
                info!("  题号 {} → 选项 {}", answer.question_id, answer.chosen_option);
            }
        }

        // 评分
        info!("📝 正在与答案键比对评分...");
        let (report, summary) = self.score_service.score(&self.answer_key, extracted);

        print_summary(&summary, self.answer_key.len());

        // 导出报告并写入文件
        let report_bytes = self.export_service.export(&report, &summary)?;
        fs::write(&self.config.report_output_file, report_bytes)
            .map_err(|e| AppError::file_write_failed(&self.config.report_output_file, e))?;

        info!("📥 报告已保存至: {}", self.config.report_output_file);

        Ok(())
    }
}
