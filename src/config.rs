use crate::error::{AppError, AppResult};
use crate::services::export_service::REPORT_FILE_EXTENSION;
use serde::Deserialize;
use std::path::Path;

/// 评分规则
///
/// 三个分值常量是配置而不是算法结构，不同考试的赋分规则可以在
/// 不改动评分逻辑的情况下替换
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct MarkScheme {
    /// 答对得分
    pub correct: i64,
    /// 答错得分
    pub wrong: i64,
    /// 未作答得分
    pub unattempted: i64,
}

impl Default for MarkScheme {
    fn default() -> Self {
        // UGC NET 规则：答对 +2，答错和未作答不扣分
        Self {
            correct: 2,
            wrong: 0,
            unattempted: 0,
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 答案键文件路径
    pub answer_key_file: String,
    /// 答题卡 PDF 文件路径
    pub response_sheet_file: String,
    /// 报告输出文件路径
    pub report_output_file: String,
    /// 评分规则 TOML 文件路径（存在时优先于环境变量）
    pub mark_scheme_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 评分规则（可被 mark_scheme_file 覆盖） ---
    pub mark_scheme: MarkScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            answer_key_file: "answer_key.xlsx".to_string(),
            response_sheet_file: "response_sheet.pdf".to_string(),
            report_output_file: format!("score_report.{}", REPORT_FILE_EXTENSION),
            mark_scheme_file: "mark_scheme.toml".to_string(),
            verbose_logging: false,
            mark_scheme: MarkScheme::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            answer_key_file: std::env::var("ANSWER_KEY_FILE").unwrap_or(default.answer_key_file),
            response_sheet_file: std::env::var("RESPONSE_SHEET_FILE").unwrap_or(default.response_sheet_file),
            report_output_file: std::env::var("REPORT_OUTPUT_FILE").unwrap_or(default.report_output_file),
            mark_scheme_file: std::env::var("MARK_SCHEME_FILE").unwrap_or(default.mark_scheme_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            mark_scheme: MarkScheme {
                correct: std::env::var("MARKS_CORRECT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.mark_scheme.correct),
                wrong: std::env::var("MARKS_WRONG").ok().and_then(|v| v.parse().ok()).unwrap_or(default.mark_scheme.wrong),
                unattempted: std::env::var("MARKS_UNATTEMPTED").ok().and_then(|v| v.parse().ok()).unwrap_or(default.mark_scheme.unattempted),
            },
        }
    }

    /// 解析最终生效的评分规则
    ///
    /// 如果评分规则 TOML 文件存在则以文件为准，否则使用配置中的值
    /// （默认值或环境变量）
    pub fn resolve_mark_scheme(&self) -> AppResult<MarkScheme> {
        if !Path::new(&self.mark_scheme_file).exists() {
            return Ok(self.mark_scheme);
        }

        let content = std::fs::read_to_string(&self.mark_scheme_file)
            .map_err(|e| AppError::file_read_failed(&self.mark_scheme_file, e))?;

        let scheme: MarkScheme = toml::from_str(&content)
            .map_err(|e| AppError::toml_parse_failed(&self.mark_scheme_file, e))?;

        Ok(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;

    #[test]
    fn test_default_output_name_uses_report_extension() {
        let config = Config::default();

        assert!(config
            .report_output_file
            .ends_with(&format!(".{}", REPORT_FILE_EXTENSION)));
    }

    #[test]
    fn test_default_mark_scheme() {
        let scheme = MarkScheme::default();

        assert_eq!(scheme.correct, 2);
        assert_eq!(scheme.wrong, 0);
        assert_eq!(scheme.unattempted, 0);
    }

    #[test]
    fn test_mark_scheme_from_toml() {
        // 负分规则也应当能表达（有些考试答错扣分）
        let scheme: MarkScheme = toml::from_str(
            r#"
            correct = 4
            wrong = -1
            unattempted = 0
            "#,
        )
        .unwrap();

        assert_eq!(scheme.correct, 4);
        assert_eq!(scheme.wrong, -1);
        assert_eq!(scheme.unattempted, 0);
    }

    #[test]
    fn test_resolve_falls_back_without_file() {
        let config = Config {
            mark_scheme_file: "不存在的评分规则.toml".to_string(),
            mark_scheme: MarkScheme {
                correct: 3,
                wrong: -1,
                unattempted: 0,
            },
            ..Config::default()
        };

        let scheme = config.resolve_mark_scheme().unwrap();

        assert_eq!(scheme.correct, 3);
        assert_eq!(scheme.wrong, -1);
    }

    #[test]
    fn test_resolve_reports_toml_parse_failure_with_path() {
        // 规则文件存在但内容损坏时应当报 TOML 解析错误并带上文件路径
        let path = std::env::temp_dir().join(format!(
            "calc_response_score_bad_scheme_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "correct = \"二\"").unwrap();

        let config = Config {
            mark_scheme_file: path.to_string_lossy().to_string(),
            ..Config::default()
        };

        let err = config.resolve_mark_scheme().unwrap_err();
        std::fs::remove_file(&path).unwrap();

        match err {
            AppError::File(FileError::TomlParseFailed { path: p, .. }) => {
                assert!(p.ends_with(".toml"));
            }
            other => panic!("预期TOML解析错误，实际: {}", other),
        }
    }
}
