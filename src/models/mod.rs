pub mod answer;
pub mod loaders;
pub mod report;

pub use answer::{AnswerKeyEntry, ExtractedAnswer};
pub use loaders::{load_answer_key, load_answer_key_from_bytes};
pub use report::{AnswerResult, ReportRow, Summary};
