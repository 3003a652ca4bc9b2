//! 答案提取服务
//!
//! 从答题卡的逐页文本中恢复 (题号, 所选选项) 对。
//! 识别的是 NTA 答题卡的固定文字版式：每道题附近各出现一次
//! `Question ID : <数字>` 和 `Chosen Option : <数字>` 标记。

use crate::error::AppResult;
use crate::infrastructure::pdf_reader;
use crate::models::answer::ExtractedAnswer;
use anyhow::Result;
use regex::Regex;
use tracing::{debug, warn};

/// 题号标记模式
const QID_PATTERN: &str = r"Question ID\s*:\s*(\d+)";
/// 所选选项标记模式
const CHOSEN_PATTERN: &str = r"Chosen Option\s*:\s*(\d+)";

/// 答案提取服务
///
/// 已知限制：每页内把第 i 个题号和第 i 个所选选项按位置配对，
/// 前提是两类标记在页内数量相等、顺序交替。版式不满足该前提时
/// 配对会静默错位——这是设计上接受的风险，不做猜测性修复
#[derive(Debug)]
pub struct ExtractService {
    qid_pattern: Regex,
    chosen_pattern: Regex,
}

impl ExtractService {
    /// 创建新的提取服务
    pub fn new() -> Result<Self> {
        Ok(Self {
            qid_pattern: Regex::new(QID_PATTERN)?,
            chosen_pattern: Regex::new(CHOSEN_PATTERN)?,
        })
    }

    /// 从 PDF 字节中提取作答
    ///
    /// # 参数
    /// - `bytes`: 答题卡 PDF 的原始字节
    ///
    /// # 返回
    /// 返回提取到的作答列表；整份文档没有任何标记时返回空列表，
    /// 这是正常结果而不是错误，由调用方判断是否继续评分
    pub fn extract_from_pdf(&self, bytes: &[u8]) -> AppResult<Vec<ExtractedAnswer>> {
        let pages = pdf_reader::extract_page_texts(bytes)?;
        Ok(self.extract_from_pages(&pages))
    }

    /// 从逐页文本中提取作答
    ///
    /// 每页独立扫描：先收集页内全部题号匹配和全部所选选项匹配
    /// （按出现顺序），再按位置逐对配对
    pub fn extract_from_pages(&self, pages: &[String]) -> Vec<ExtractedAnswer> {
        let mut answers = Vec::new();

        for (page_index, text) in pages.iter().enumerate() {
            let qids = self.find_numbers(&self.qid_pattern, text);
            let chosens = self.find_numbers(&self.chosen_pattern, text);

            debug!(
                "第 {} 页: 题号标记 {} 个, 所选选项标记 {} 个",
                page_index + 1,
                qids.len(),
                chosens.len()
            );

            // 数量不等时多出的标记会被丢弃，配对可能已经错位
            if qids.len() != chosens.len() {
                warn!(
                    "⚠️ 第 {} 页标记数量不一致 (题号 {} 个, 所选选项 {} 个)，配对结果可能错位",
                    page_index + 1,
                    qids.len(),
                    chosens.len()
                );
            }

            for (question_id, chosen_option) in qids.into_iter().zip(chosens) {
                answers.push(ExtractedAnswer {
                    question_id,
                    chosen_option,
                });
            }
        }

        answers
    }

    /// 收集文本中某个标记模式的全部数字捕获（按出现顺序）
    ///
    /// 捕获组只匹配数字，解析即完成整数归一化（"007" → 7）
    fn find_numbers(&self, pattern: &Regex, text: &str) -> Vec<i64> {
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps[1].parse::<i64>().ok())
            .collect()
    }
}
