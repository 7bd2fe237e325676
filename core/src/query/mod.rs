//! Search query parsing

pub mod intent;
pub mod parser;

pub use intent::{CategoryPath, FilterIntent};
pub use parser::{QueryParser, DEFAULT_MIN_SEGMENT_LEN, HANDLER_SEPARATOR};
