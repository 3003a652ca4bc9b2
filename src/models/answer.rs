use serde::{Deserialize, Serialize};

/// 答案键条目
///
/// 来自外部答案键表格，题号在整个答案键中唯一（由加载器保证）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyEntry {
    #[serde(rename = "QuestionID")]
    pub question_id: i64,

    #[serde(rename = "CorrectOption")]
    pub correct_option: i64,
}

/// 从答题卡中提取出的单个作答
///
/// 题号不保证唯一，也不保证覆盖答案键中的全部题目——
/// 考生可能只作答了一部分，顺序以标记在文档中出现的顺序为准
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAnswer {
    #[serde(rename = "QuestionID")]
    pub question_id: i64,

    #[serde(rename = "ChosenOption")]
    pub chosen_option: i64,
}
