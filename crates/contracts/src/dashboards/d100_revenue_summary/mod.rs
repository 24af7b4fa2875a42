pub mod aggregation;
pub mod dto;

pub use aggregation::summarize;
pub use dto::*;
