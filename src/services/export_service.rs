//! 报告导出服务
//!
//! 把详细报告和汇总统计序列化为内存中的 xlsx 工作簿，
//! 包含 "Detailed Report" 和 "Summary" 两个工作表。
//! 纯序列化：只反映传入的行和汇总，不重新计算任何分数。

use crate::error::AppResult;
use crate::models::report::{ReportRow, Summary};
use rust_xlsxwriter::Workbook;

/// 导出文件建议使用的扩展名
pub const REPORT_FILE_EXTENSION: &str = "xlsx";

/// 导出内容对应的 MIME 类型（供下载类调用方使用）
pub const REPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 详细报告表的列顺序（固定）
const REPORT_HEADERS: [&str; 5] = [
    "QuestionID",
    "CorrectOption",
    "ChosenOption",
    "Result",
    "Marks",
];

/// 报告导出服务
#[derive(Debug)]
pub struct ExportService;

impl ExportService {
    /// 创建新的导出服务
    pub fn new() -> Self {
        Self
    }

    /// 生成 xlsx 报告字节序列
    ///
    /// # 参数
    /// - `report`: 详细报告行
    /// - `summary`: 汇总统计
    ///
    /// # 返回
    /// 返回可直接写入文件或提供下载的字节序列，不产生临时文件
    pub fn export(&self, report: &[ReportRow], summary: &Summary) -> AppResult<Vec<u8>> {
        let mut workbook = Workbook::new();

        self.write_report_sheet(&mut workbook, report)?;
        self.write_summary_sheet(&mut workbook, summary)?;

        let bytes = workbook.save_to_buffer()?;
        Ok(bytes)
    }

    /// 写入详细报告表
    fn write_report_sheet(&self, workbook: &mut Workbook, report: &[ReportRow]) -> AppResult<()> {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Detailed Report")?;

        for (col, header) in REPORT_HEADERS.iter().enumerate() {
            sheet.write(0, col as u16, *header)?;
        }

        for (i, row) in report.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write(r, 0, row.question_id)?;
            sheet.write(r, 1, row.correct_option)?;
            // 未作答的行所选选项留空
            if let Some(chosen) = row.chosen_option {
                sheet.write(r, 2, chosen)?;
            }
            sheet.write(r, 3, row.result.as_str())?;
            sheet.write(r, 4, row.marks)?;
        }

        Ok(())
    }

    /// 写入汇总表（每个指标一行：指标名 + 值）
    fn write_summary_sheet(&self, workbook: &mut Workbook, summary: &Summary) -> AppResult<()> {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Summary")?;

        sheet.write(0, 0, "Metric")?;
        sheet.write(0, 1, "Value")?;

        for (i, (metric, value)) in summary.metrics().iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write(r, 0, *metric)?;
            sheet.write(r, 1, *value)?;
        }

        Ok(())
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::AnswerResult;
    use calamine::{Data, DataType, Reader, Xlsx};
    use std::io::Cursor;

    fn sample_report() -> (Vec<ReportRow>, Summary) {
        let report = vec![
            ReportRow {
                question_id: 1,
                correct_option: 2,
                chosen_option: Some(2),
                result: AnswerResult::Correct,
                marks: 2,
            },
            ReportRow {
                question_id: 2,
                correct_option: 1,
                chosen_option: Some(3),
                result: AnswerResult::Wrong,
                marks: 0,
            },
            ReportRow {
                question_id: 3,
                correct_option: 4,
                chosen_option: None,
                result: AnswerResult::NotAttempted,
                marks: 0,
            },
        ];
        let summary = Summary {
            correct: 1,
            wrong: 1,
            not_attempted: 1,
            total_score: 2,
        };
        (report, summary)
    }

    #[test]
    fn test_workbook_has_both_named_sheets() {
        let (report, summary) = sample_report();
        let bytes = ExportService::new().export(&report, &summary).unwrap();

        let workbook = Xlsx::new(Cursor::new(bytes)).unwrap();

        assert_eq!(
            workbook.sheet_names(),
            vec!["Detailed Report".to_string(), "Summary".to_string()]
        );
    }

    #[test]
    fn test_report_sheet_rows_and_columns() {
        let (report, summary) = sample_report();
        let bytes = ExportService::new().export(&report, &summary).unwrap();

        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Detailed Report").unwrap();

        // 表头 + 每个报告行一行
        assert_eq!(range.height(), report.len() + 1);

        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows[0][0].as_string().unwrap(), "QuestionID");
        assert_eq!(rows[0][4].as_string().unwrap(), "Marks");

        assert_eq!(rows[1][0].as_i64().unwrap(), 1);
        assert_eq!(rows[1][3].as_string().unwrap(), "Correct");
        assert_eq!(rows[1][4].as_i64().unwrap(), 2);

        // 未作答的行所选选项为空单元格
        assert!(rows[3][2].is_empty());
        assert_eq!(rows[3][3].as_string().unwrap(), "Not Attempted");
    }

    #[test]
    fn test_download_contract() {
        // 导出产物是 zip 容器（xlsx），与扩展名和 MIME 类型约定一致
        let (report, summary) = sample_report();
        let bytes = ExportService::new().export(&report, &summary).unwrap();

        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(REPORT_FILE_EXTENSION, "xlsx");
        assert!(REPORT_MIME_TYPE.ends_with("spreadsheetml.sheet"));
    }

    #[test]
    fn test_summary_sheet_metrics() {
        let (report, summary) = sample_report();
        let bytes = ExportService::new().export(&report, &summary).unwrap();

        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Summary").unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();

        assert_eq!(range.height(), 5);
        assert_eq!(rows[1][0].as_string().unwrap(), "Correct");
        assert_eq!(rows[1][1].as_i64().unwrap(), 1);
        assert_eq!(rows[4][0].as_string().unwrap(), "Total Score");
        assert_eq!(rows[4][1].as_i64().unwrap(), 2);
    }
}
