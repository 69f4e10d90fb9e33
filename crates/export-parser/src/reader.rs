//! Lazy record reader over an activity export.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use activity_common::{ActivityRecord, SummaryError, SummaryResult};
use csv::{ErrorKind, ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use tracing::{debug, info};

use crate::columns::{ColumnMap, Field};
use crate::values;

/// Reads [`ActivityRecord`]s from a CSV export, one per data row, in file order.
///
/// The header row is validated when the reader is created. Rows are parsed on
/// demand; the first failing row ends the iteration. The underlying file is
/// closed when the reader is dropped.
pub struct RecordReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    columns: ColumnMap,
    row: usize,
    failed: bool,
}

impl RecordReader<File> {
    /// Open an export file for reading.
    pub fn from_path(path: impl AsRef<Path>) -> SummaryResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| SummaryError::InputRead(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), "Reading activity export");
        Self::from_reader(file)
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader producing CSV text with a header row.
    pub fn from_reader(reader: R) -> SummaryResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| SummaryError::InputRead(format!("header row: {}", e)))?
            .clone();
        let columns = ColumnMap::from_headers(&headers)?;

        Ok(Self {
            records: csv_reader.into_records(),
            columns,
            row: 0,
            failed: false,
        })
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Number of data rows consumed so far.
    pub fn rows_read(&self) -> usize {
        self.row
    }

    fn parse_row(&self, record: &StringRecord) -> SummaryResult<ActivityRecord> {
        let width = self.columns.width();
        if record.len() < width {
            let column = self.columns.header_at(record.len()).unwrap_or_default();
            return Err(SummaryError::field_parse(
                self.row,
                column,
                "",
                format!("row has {} fields, header has {}", record.len(), width),
            ));
        }

        let raw_date = self.cell(record, Field::Date);
        let date = values::parse_date(raw_date)
            .map_err(|reason| self.field_error(Field::Date, raw_date, reason))?;

        let raw_type = self.cell(record, Field::ActivityType);
        if values::is_absent(raw_type) {
            return Err(self.field_error(
                Field::ActivityType,
                raw_type,
                "activity type is empty".to_string(),
            ));
        }
        let activity_type = raw_type.trim().trim_matches('"').trim().to_string();

        let duration = self
            .parse_field(record, Field::Duration, values::parse_duration)?
            .unwrap_or_default();

        let mut distance_km = self
            .parse_field(record, Field::Distance, values::parse_amount)?
            .unwrap_or(0.0);
        if values::is_swimming(&activity_type) {
            distance_km /= 1000.0;
        }

        let elevation_gain_m = self
            .parse_field(record, Field::ElevationGain, values::parse_amount)?
            .unwrap_or(0.0);
        let calories = self
            .parse_field(record, Field::Calories, values::parse_count)?
            .unwrap_or(0);
        let steps = self
            .parse_field(record, Field::Steps, values::parse_count)?
            .unwrap_or(0);

        Ok(ActivityRecord {
            date,
            activity_type,
            duration,
            distance_km,
            elevation_gain_m,
            calories,
            steps,
        })
    }

    fn cell<'r>(&self, record: &'r StringRecord, field: Field) -> &'r str {
        self.columns.get(record, field).unwrap_or("")
    }

    fn parse_field<T>(
        &self,
        record: &StringRecord,
        field: Field,
        parse: fn(&str) -> Result<Option<T>, String>,
    ) -> SummaryResult<Option<T>> {
        let raw = self.cell(record, field);
        parse(raw).map_err(|reason| self.field_error(field, raw, reason))
    }

    /// Undecodable fields are attributed to their column; anything else is an I/O failure.
    fn csv_error(&self, err: csv::Error) -> SummaryError {
        match err.kind() {
            ErrorKind::Utf8 { err: utf8, .. } => {
                let column = self.columns.header_at(utf8.field()).unwrap_or_default();
                SummaryError::field_parse(self.row, column, "", "field is not valid UTF-8")
            }
            _ => SummaryError::InputRead(format!("row {}: {}", self.row, err)),
        }
    }

    fn field_error(&self, field: Field, raw: &str, reason: String) -> SummaryError {
        let column = self.columns.header(field).unwrap_or(field.name());
        SummaryError::field_parse(self.row, column, raw, reason)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = SummaryResult<ActivityRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let next = match self.records.next() {
            Some(next) => next,
            None => {
                debug!(rows = self.row, "Reached end of activity export");
                return None;
            }
        };
        self.row += 1;

        let parsed = next
            .map_err(|e| self.csv_error(e))
            .and_then(|record| self.parse_row(&record));

        if parsed.is_err() {
            self.failed = true;
        }
        Some(parsed)
    }
}
