//! 评分服务
//!
//! 把提取出的作答与答案键按题号做左外连接，逐行分类并赋分，
//! 最后汇总统计。答案键是题目全集的唯一权威：报告行数恒等于
//! 答案键条目数，考生没有作答的题目分类为未作答。

use crate::config::MarkScheme;
use crate::models::answer::{AnswerKeyEntry, ExtractedAnswer};
use crate::models::report::{AnswerResult, ReportRow, Summary};
use std::collections::HashMap;

/// 评分服务
///
/// 纯函数式：同样的 (答案键, 作答) 输入总是产生同样的报告和汇总，
/// 没有隐藏状态
#[derive(Debug)]
pub struct ScoreService {
    scheme: MarkScheme,
}

impl ScoreService {
    /// 使用指定评分规则创建评分服务
    pub fn new(scheme: MarkScheme) -> Self {
        Self { scheme }
    }

    /// 对一份作答评分
    ///
    /// # 参数
    /// - `answer_key`: 答案键条目列表（题号唯一由加载器保证，此处不再校验）
    /// - `extracted`: 提取出的作答列表
    ///
    /// # 返回
    /// 返回 (详细报告, 汇总统计)；报告每个答案键条目恰好一行，顺序与答案键一致
    pub fn score(
        &self,
        answer_key: &[AnswerKeyEntry],
        extracted: &[ExtractedAnswer],
    ) -> (Vec<ReportRow>, Summary) {
        // 按题号建立作答索引；重复题号时保留第一次出现的作答
        let mut chosen_by_id: HashMap<i64, i64> = HashMap::new();
        for answer in extracted {
            chosen_by_id
                .entry(answer.question_id)
                .or_insert(answer.chosen_option);
        }

        let mut report = Vec::with_capacity(answer_key.len());
        let mut summary = Summary::default();

        for entry in answer_key {
            let chosen_option = chosen_by_id.get(&entry.question_id).copied();
            let result = classify(entry.correct_option, chosen_option);
            let marks = self.marks_for(result);

            match result {
                AnswerResult::Correct => summary.correct += 1,
                AnswerResult::Wrong => summary.wrong += 1,
                AnswerResult::NotAttempted => summary.not_attempted += 1,
            }
            summary.total_score += marks;

            report.push(ReportRow {
                question_id: entry.question_id,
                correct_option: entry.correct_option,
                chosen_option,
                result,
                marks,
            });
        }

        (report, summary)
    }

    /// 按评分规则取单题分值
    fn marks_for(&self, result: AnswerResult) -> i64 {
        match result {
            AnswerResult::Correct => self.scheme.correct,
            AnswerResult::Wrong => self.scheme.wrong,
            AnswerResult::NotAttempted => self.scheme.unattempted,
        }
    }
}

/// 单题分类
///
/// 选项按整数比较，来源文本中的前导零等格式差异在提取阶段已经归一化
fn classify(correct_option: i64, chosen_option: Option<i64>) -> AnswerResult {
    match chosen_option {
        None => AnswerResult::NotAttempted,
        Some(chosen) if chosen == correct_option => AnswerResult::Correct,
        Some(_) => AnswerResult::Wrong,
    }
}
