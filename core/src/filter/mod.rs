//! Category selection and filter application

pub mod category;
pub mod engine;

pub use category::CategoryState;
pub use engine::{FilterEngine, FilterMode, TextMode};
