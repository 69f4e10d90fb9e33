//! Error types for the activity summary pipeline.

use thiserror::Error;

/// Result type alias using SummaryError.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Primary error type for the summary pipeline.
///
/// Every variant is fatal for a run.
#[derive(Debug, Error)]
pub enum SummaryError {
    // === Parse Errors ===
    #[error("parse: missing required column for {field} (expected one of: {accepted})")]
    MalformedRecord { field: String, accepted: String },

    #[error("parse: row {row}, column '{column}': cannot parse {value:?}: {reason}")]
    FieldParse {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("parse: failed to read input: {0}")]
    InputRead(String),

    // === Rendering Errors ===
    #[error("render: {0}")]
    Render(String),
}

impl SummaryError {
    /// Name of the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            SummaryError::MalformedRecord { .. }
            | SummaryError::FieldParse { .. }
            | SummaryError::InputRead(_) => "parse",
            SummaryError::Render(_) => "render",
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.stage() {
            "parse" => 2,
            _ => 3,
        }
    }

    pub fn field_parse(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SummaryError::FieldParse {
            row,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse_message_names_row_and_column() {
        let err = SummaryError::field_parse(7, "Distance", "abc", "not a number");
        let msg = err.to_string();
        assert!(msg.starts_with("parse:"));
        assert!(msg.contains("row 7"));
        assert!(msg.contains("'Distance'"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn test_exit_codes_by_stage() {
        let parse = SummaryError::MalformedRecord {
            field: "date".to_string(),
            accepted: "Datum, Date".to_string(),
        };
        let render = SummaryError::Render("font missing".to_string());
        assert_eq!(parse.stage(), "parse");
        assert_eq!(parse.exit_code(), 2);
        assert_eq!(render.stage(), "render");
        assert_eq!(render.exit_code(), 3);
        assert_eq!(SummaryError::InputRead("x".into()).exit_code(), 2);
    }
}
