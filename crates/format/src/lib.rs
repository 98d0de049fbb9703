//! # kairos-format
//!
//! Calendar labels for timeline headers: month and weekday names served from
//! a process-wide write-once cache of compiled tables, plus ISO-8601 week
//! numbers. Label lookup is read-mostly; each table is built exactly once
//! per (component, style) key and retained for the life of the process.

mod cache;
mod names;
mod week;

pub use names::{month_label, weekday_label, TextStyle};
pub use week::iso_week_number;
