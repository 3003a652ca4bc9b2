//! 答案键加载器
//!
//! 从 xlsx 表格中加载 (题号, 正确选项) 对照表。
//! 答案键是评分的致命前置条件：文件缺失、无法读取或缺少必需的
//! `QuestionID` / `CorrectOption` 列都会在评分开始前直接中止。

use crate::error::{AppError, AppResult, ConfigError};
use crate::models::answer::AnswerKeyEntry;
use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;
use tracing::{info, warn};

/// 必需的列名
const COL_QUESTION_ID: &str = "QuestionID";
const COL_CORRECT_OPTION: &str = "CorrectOption";

/// 从 xlsx 文件加载答案键
///
/// # 参数
/// - `path`: 答案键文件路径
///
/// # 返回
/// 返回答案键条目列表（按表格行顺序）
pub fn load_answer_key(path: &str) -> AppResult<Vec<AnswerKeyEntry>> {
    if !Path::new(path).exists() {
        return Err(AppError::Config(ConfigError::KeyFileNotFound {
            path: path.to_string(),
        }));
    }

    info!("正在加载答案键: {}", path);

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| AppError::key_read_failed(path, e))?;

    let range = first_sheet_range(&mut workbook, path)?;
    let entries = parse_key_range(&range)?;

    info!("✓ 答案键加载完成，共 {} 题", entries.len());
    Ok(entries)
}

/// 从内存中的 xlsx 字节加载答案键
///
/// 供调用方直接传入上传内容时使用，语义与 [`load_answer_key`] 一致
pub fn load_answer_key_from_bytes(bytes: &[u8]) -> AppResult<Vec<AnswerKeyEntry>> {
    let label = "内存缓冲区";

    let mut workbook =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| AppError::key_read_failed(label, e))?;

    let range = first_sheet_range(&mut workbook, label)?;
    parse_key_range(&range)
}

/// 取工作簿的第一个工作表
fn first_sheet_range<RS>(workbook: &mut Xlsx<RS>, path: &str) -> AppResult<Range<Data>>
where
    RS: std::io::Read + std::io::Seek,
{
    match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => Ok(range),
        Some(Err(e)) => Err(AppError::key_read_failed(path, e)),
        None => Err(AppError::Config(ConfigError::KeySheetMissing {
            path: path.to_string(),
        })),
    }
}

/// 解析答案键表格区域
///
/// 第一行为表头，之后每行一个条目。完全为空的行会被跳过，
/// 非空但无法解析为整数的单元格视为致命错误
fn parse_key_range(range: &Range<Data>) -> AppResult<Vec<AnswerKeyEntry>> {
    let mut rows = range.rows();

    let header = rows.next().ok_or_else(|| {
        AppError::missing_columns(vec![
            COL_QUESTION_ID.to_string(),
            COL_CORRECT_OPTION.to_string(),
        ])
    })?;

    // 校验必需的列都存在
    let (qid_col, correct_col) = match (
        find_column(header, COL_QUESTION_ID),
        find_column(header, COL_CORRECT_OPTION),
    ) {
        (Some(qid_col), Some(correct_col)) => (qid_col, correct_col),
        (qid_col, correct_col) => {
            let mut missing = Vec::new();
            if qid_col.is_none() {
                missing.push(COL_QUESTION_ID.to_string());
            }
            if correct_col.is_none() {
                missing.push(COL_CORRECT_OPTION.to_string());
            }
            return Err(AppError::missing_columns(missing));
        }
    };

    let mut entries = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, row) in rows.enumerate() {
        // 表头占第 1 行，数据从第 2 行开始
        let row_number = i + 2;

        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let question_id = cell_as_i64(row, qid_col).ok_or_else(|| {
            AppError::Config(ConfigError::InvalidKeyCell {
                row: row_number,
                column: COL_QUESTION_ID.to_string(),
            })
        })?;

        let correct_option = cell_as_i64(row, correct_col).ok_or_else(|| {
            AppError::Config(ConfigError::InvalidKeyCell {
                row: row_number,
                column: COL_CORRECT_OPTION.to_string(),
            })
        })?;

        // 题号应当唯一；重复时保留两行，连接结果会随之重复
        if !seen_ids.insert(question_id) {
            warn!("⚠️ 答案键第 {} 行题号 {} 重复", row_number, question_id);
        }

        entries.push(AnswerKeyEntry {
            question_id,
            correct_option,
        });
    }

    Ok(entries)
}

/// 在表头行中查找列索引（忽略首尾空白）
fn find_column(header: &[Data], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| matches!(cell.as_string(), Some(s) if s.trim() == name))
}

/// 将单元格读取为整数
///
/// xlsx 中数字单元格通常是浮点数，字符串单元格（例如带前导零的 "007"）
/// 也按整数解析，保证后续比较都基于整数值
fn cell_as_i64(row: &[Data], col: usize) -> Option<i64> {
    row.get(col).and_then(|cell| cell.as_i64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    /// 构造一个只有单个工作表的答案键 xlsx 字节序列
    fn key_bytes(headers: &[&str], rows: &[&[i64]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, header) in headers.iter().enumerate() {
            sheet.write(0, col as u16, *header).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write((r + 1) as u32, c as u16, *value).unwrap();
            }
        }

        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_load_valid_key() {
        let bytes = key_bytes(
            &["QuestionID", "CorrectOption"],
            &[&[101, 2], &[102, 1], &[103, 4]],
        );

        let entries = load_answer_key_from_bytes(&bytes).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].question_id, 101);
        assert_eq!(entries[0].correct_option, 2);
        assert_eq!(entries[2].question_id, 103);
        assert_eq!(entries[2].correct_option, 4);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        // 列顺序颠倒也应当按表头正确识别
        let bytes = key_bytes(&["CorrectOption", "QuestionID"], &[&[3, 7]]);

        let entries = load_answer_key_from_bytes(&bytes).unwrap();

        assert_eq!(entries[0].question_id, 7);
        assert_eq!(entries[0].correct_option, 3);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let bytes = key_bytes(&["QuestionID", "Answer"], &[&[1, 2]]);

        let err = load_answer_key_from_bytes(&bytes).unwrap_err();

        match err {
            AppError::Config(ConfigError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["CorrectOption".to_string()]);
            }
            other => panic!("预期缺列错误，实际: {}", other),
        }
    }

    #[test]
    fn test_string_cell_with_leading_zeros() {
        // 字符串单元格 "007" 应当按整数 7 解析
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write(0, 0, "QuestionID").unwrap();
        sheet.write(0, 1, "CorrectOption").unwrap();
        sheet.write(1, 0, "007").unwrap();
        sheet.write(1, 1, "02").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let entries = load_answer_key_from_bytes(&bytes).unwrap();

        assert_eq!(entries[0].question_id, 7);
        assert_eq!(entries[0].correct_option, 2);
    }

    #[test]
    fn test_invalid_cell_is_fatal() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write(0, 0, "QuestionID").unwrap();
        sheet.write(0, 1, "CorrectOption").unwrap();
        sheet.write(1, 0, 1).unwrap();
        sheet.write(1, 1, "四").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let err = load_answer_key_from_bytes(&bytes).unwrap_err();

        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidKeyCell { row: 2, .. })
        ));
    }

    #[test]
    fn test_file_not_found() {
        let err = load_answer_key("不存在的答案键.xlsx").unwrap_err();

        assert!(matches!(
            err,
            AppError::Config(ConfigError::KeyFileNotFound { .. })
        ));
    }
}
