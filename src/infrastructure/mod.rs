//! 基础设施层（Infrastructure Layer）
//!
//! 只负责从原始文档字节中取出逐页纯文本，不理解答题卡的业务语义

pub mod pdf_reader;

pub use pdf_reader::extract_page_texts;
