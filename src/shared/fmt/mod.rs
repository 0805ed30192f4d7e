//! Display formatting helpers for dashboard values.

pub mod num;

pub use num::{format_amount, format_dollar, format_percent, group_thousands};
