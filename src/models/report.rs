use serde::{Deserialize, Serialize};

/// 单题评分结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerResult {
    /// 作答且与正确选项一致
    Correct,
    /// 作答但与正确选项不一致
    Wrong,
    /// 答案键中存在但考生未作答
    NotAttempted,
}

impl AnswerResult {
    /// 报告中使用的显示文本（与导出表格中的 Result 列一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerResult::Correct => "Correct",
            AnswerResult::Wrong => "Wrong",
            AnswerResult::NotAttempted => "Not Attempted",
        }
    }
}

impl std::fmt::Display for AnswerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 详细报告中的一行
///
/// 由答案键条目与提取作答按题号左外连接而来，每个答案键条目恰好一行；
/// 没有匹配作答的行 chosen_option 为 None，分类为 NotAttempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "QuestionID")]
    pub question_id: i64,

    #[serde(rename = "CorrectOption")]
    pub correct_option: i64,

    #[serde(rename = "ChosenOption")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_option: Option<i64>,

    #[serde(rename = "Result")]
    pub result: AnswerResult,

    #[serde(rename = "Marks")]
    pub marks: i64,
}

/// 汇总统计
///
/// 不变量：correct + wrong + not_attempted == 答案键条目数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub correct: i64,
    pub wrong: i64,
    pub not_attempted: i64,
    pub total_score: i64,
}

impl Summary {
    /// 按固定顺序返回 (指标名, 值) 列表，供汇总表导出和日志输出使用
    pub fn metrics(&self) -> [(&'static str, i64); 4] {
        [
            ("Correct", self.correct),
            ("Wrong", self.wrong),
            ("Not Attempted", self.not_attempted),
            ("Total Score", self.total_score),
        ]
    }
}
