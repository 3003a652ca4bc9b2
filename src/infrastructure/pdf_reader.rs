//! PDF 逐页文本读取
//!
//! 提取器只依赖"顺序取每页文本"这一种能力，不做任何随机访问。
//! 扫描版（纯图片）PDF 取不到文字，对应页会得到空文本，
//! 由上层按"提取结果为空"处理，而不是在这里报错。

use crate::error::{AppError, AppResult};
use tracing::debug;

/// 从内存中的 PDF 字节提取逐页纯文本
///
/// # 参数
/// - `bytes`: PDF 文件的原始字节
///
/// # 返回
/// 返回每页一个文本块的列表（按页顺序）
pub fn extract_page_texts(bytes: &[u8]) -> AppResult<Vec<String>> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| AppError::pdf_parse_failed(e.to_string()))?;

    debug!("PDF 共 {} 页", pages.len());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let err = extract_page_texts("\x00\x01 这不是PDF".as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            AppError::Extract(ExtractError::PdfParseFailed { .. })
        ));
    }
}
