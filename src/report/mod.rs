//! Balance report rendering

pub mod table;

pub use table::{format_balance, significant_tokens, ReportOptions, ReportTable};
