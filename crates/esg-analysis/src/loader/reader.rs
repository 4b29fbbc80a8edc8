//! CSV news table reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use esg_core::errors::LoadError;
use esg_core::types::NewsRecord;

use super::dates::parse_date;
use super::schema::ColumnMap;
use crate::text::TextNormalizer;

/// Output of a load: validated records plus bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<NewsRecord>,
    /// Data rows read from the input, header excluded.
    pub rows_read: usize,
    /// Rows dropped because company or cleaned text was empty.
    pub rows_dropped: usize,
    /// Rows whose date cell was present but did not parse.
    pub invalid_dates: usize,
    /// Column names after normalization and synonym mapping.
    pub columns: Vec<String>,
}

/// Maps heterogeneous news tables onto [`NewsRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordLoader {
    normalizer: TextNormalizer,
}

impl RecordLoader {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    /// Load a CSV file.
    pub fn load_path(&self, path: &Path) -> Result<LoadedRecords, LoadError> {
        let label = path.display().to_string();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound { path: label.clone() },
            _ => LoadError::Io {
                path: label.clone(),
                message: e.to_string(),
            },
        })?;
        self.load_reader(file, &label)
    }

    /// Load CSV from any reader. `label` names the source in errors.
    pub fn load_reader<R: Read>(&self, input: R, label: &str) -> Result<LoadedRecords, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(input);

        let headers = reader.headers().map_err(|e| csv_error(label, &e))?.clone();
        let columns = ColumnMap::from_headers(headers.iter())?;

        let mut loaded = LoadedRecords {
            columns: columns.observed.clone(),
            ..Default::default()
        };

        for result in reader.records() {
            let row = result.map_err(|e| csv_error(label, &e))?;
            loaded.rows_read += 1;

            let (record, bad_date) = self.build_record(&row, &columns);
            if bad_date {
                loaded.invalid_dates += 1;
            }
            match record {
                Some(record) => loaded.records.push(record),
                None => loaded.rows_dropped += 1,
            }
        }

        tracing::info!(
            source = label,
            rows = loaded.rows_read,
            kept = loaded.records.len(),
            dropped = loaded.rows_dropped,
            invalid_dates = loaded.invalid_dates,
            "loaded news table"
        );

        Ok(loaded)
    }

    /// Build one record. Returns `None` for rows with an empty company or
    /// empty cleaned text, and whether a present date failed to parse.
    fn build_record(&self, row: &StringRecord, columns: &ColumnMap) -> (Option<NewsRecord>, bool) {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");

        let raw_date = cell(columns.date);
        let date = parse_date(raw_date);
        let bad_date = date.is_none() && !raw_date.trim().is_empty();
        if bad_date {
            tracing::debug!(value = raw_date, "unparseable date, treating as missing");
        }

        let company = cell(Some(columns.company)).trim();
        let title = cell(columns.title);
        let content = cell(Some(columns.content));
        let cleaned_text = self.normalizer.clean(&format!("{title} {content}"));

        if company.is_empty() || cleaned_text.is_empty() {
            return (None, bad_date);
        }

        let record = NewsRecord {
            company: company.to_string(),
            date,
            title: title.to_string(),
            content: content.to_string(),
            source: cell(columns.source).to_string(),
            cleaned_text,
            market_cap: parse_number(cell(columns.market_cap)),
            debt: parse_number(cell(columns.debt)),
        };
        (Some(record), bad_date)
    }
}

/// Parse a numeric cell, tolerating thousands separators.
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn csv_error(label: &str, e: &csv::Error) -> LoadError {
    LoadError::Csv {
        path: label.to_string(),
        line: e.position().map(|p| p.line()),
        message: e.to_string(),
    }
}
