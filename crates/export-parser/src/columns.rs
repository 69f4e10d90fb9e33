//! Header alias table and column resolution.

use activity_common::{SummaryError, SummaryResult};
use csv::StringRecord;
use tracing::debug;

/// Record fields read from the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    ActivityType,
    Duration,
    Distance,
    ElevationGain,
    Calories,
    Steps,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Date,
        Field::ActivityType,
        Field::Duration,
        Field::Distance,
        Field::ElevationGain,
        Field::Calories,
        Field::Steps,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::ActivityType => "activity type",
            Field::Duration => "duration",
            Field::Distance => "distance",
            Field::ElevationGain => "elevation gain",
            Field::Calories => "calories",
            Field::Steps => "steps",
        }
    }

    /// Header strings accepted for this field (Czech export first).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::Date => &["Datum", "Date"],
            Field::ActivityType => &["Typ aktivity", "Activity Type"],
            Field::Duration => &["Čas", "Time"],
            Field::Distance => &["Vzdálenost", "Distance"],
            Field::ElevationGain => &["Celkový výstup", "Total Ascent"],
            Field::Calories => &["Kalorie", "Kalorie (kcal)", "Calories"],
            Field::Steps => &["Kroky", "Steps"],
        }
    }

    /// Optional columns may be missing from the header; every row then reads 0.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::ElevationGain | Field::Steps)
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

/// Resolved position of every field in the export's header row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: [Option<usize>; 7],
    headers: Vec<String>,
}

impl ColumnMap {
    /// Resolve all fields against a header row.
    ///
    /// Matching ignores surrounding whitespace, a UTF-8 byte order mark and
    /// letter case. The first matching column wins.
    pub fn from_headers(headers: &StringRecord) -> SummaryResult<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut indices = [None; 7];

        for field in Field::ALL {
            let index = normalized.iter().position(|header| {
                field
                    .aliases()
                    .iter()
                    .any(|alias| alias.to_lowercase() == *header)
            });

            match index {
                Some(i) => {
                    debug!(field = field.name(), column = i, header = &headers[i], "Resolved column");
                }
                None if field.is_required() => {
                    return Err(SummaryError::MalformedRecord {
                        field: field.name().to_string(),
                        accepted: field.aliases().join(", "),
                    });
                }
                None => {
                    debug!(field = field.name(), "Optional column absent, defaulting to 0");
                }
            }

            indices[field.slot()] = index;
        }

        Ok(Self {
            indices,
            headers: headers
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
                .collect(),
        })
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        self.indices[field.slot()]
    }

    /// Header text as it appears in the export, for error messages.
    pub fn header(&self, field: Field) -> Option<&str> {
        self.index(field)
            .and_then(|i| self.headers.get(i))
            .map(String::as_str)
    }

    /// Number of columns in the header row.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Header text of the column at `index`.
    pub fn header_at(&self, index: usize) -> Option<&str> {
        self.headers.get(index).map(String::as_str)
    }

    /// Raw cell for a field; `None` when the column is absent or the row is short.
    pub fn get<'r>(&self, record: &'r StringRecord, field: Field) -> Option<&'r str> {
        self.index(field).and_then(|i| record.get(i))
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_resolves_czech_headers() {
        let map = ColumnMap::from_headers(&headers(&[
            "Typ aktivity",
            "Datum",
            "Vzdálenost",
            "Kalorie",
            "Čas",
            "Celkový výstup",
            "Kroky",
        ]))
        .unwrap();

        assert_eq!(map.index(Field::ActivityType), Some(0));
        assert_eq!(map.index(Field::Date), Some(1));
        assert_eq!(map.index(Field::Duration), Some(4));
        assert_eq!(map.index(Field::Steps), Some(6));
        assert_eq!(map.header(Field::Distance), Some("Vzdálenost"));
    }

    #[test]
    fn test_matching_ignores_case_whitespace_and_bom() {
        let map = ColumnMap::from_headers(&headers(&[
            "\u{feff}date",
            " ACTIVITY TYPE ",
            "time",
            "Distance",
            "calories",
        ]))
        .unwrap();

        assert_eq!(map.index(Field::Date), Some(0));
        assert_eq!(map.index(Field::ActivityType), Some(1));
        assert_eq!(map.index(Field::Calories), Some(4));
    }

    #[test]
    fn test_width_and_header_at_follow_header_row() {
        let map = ColumnMap::from_headers(&headers(&[
            "\u{feff}Date", "Activity Type", "Time", "Distance", "Calories",
        ]))
        .unwrap();

        assert_eq!(map.width(), 5);
        assert_eq!(map.header_at(0), Some("Date"));
        assert_eq!(map.header_at(4), Some("Calories"));
        assert_eq!(map.header_at(5), None);
    }

    #[test]
    fn test_optional_columns_may_be_missing() {
        let map = ColumnMap::from_headers(&headers(&[
            "Date",
            "Activity Type",
            "Time",
            "Distance",
            "Calories",
        ]))
        .unwrap();

        assert_eq!(map.index(Field::ElevationGain), None);
        assert_eq!(map.index(Field::Steps), None);
    }

    #[test]
    fn test_missing_required_column_is_malformed() {
        let err = ColumnMap::from_headers(&headers(&["Date", "Activity Type", "Time", "Calories"]))
            .unwrap_err();

        match err {
            SummaryError::MalformedRecord { field, accepted } => {
                assert_eq!(field, "distance");
                assert_eq!(accepted, "Vzdálenost, Distance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
