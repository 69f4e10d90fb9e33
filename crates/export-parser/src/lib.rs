//! Activity export parsing.
//!
//! Reads the CSV produced by Garmin Connect's "Export CSV" action into typed
//! [`ActivityRecord`](activity_common::ActivityRecord) values. Columns are
//! located by header name through a fixed alias table, so both the Czech and
//! the English export parse, in any column order.

pub mod columns;
pub mod reader;
pub mod values;

pub use columns::{ColumnMap, Field};
pub use reader::RecordReader;
