pub mod key_loader;

pub use key_loader::{load_answer_key, load_answer_key_from_bytes};
