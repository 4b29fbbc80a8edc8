//! CSV and JSON writers for the per-company table.
//!
//! Files are written to a temporary sibling first and renamed into place, so
//! a failed run never leaves a truncated table behind.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use esg_core::config::OutputFormat;
use esg_core::errors::OutputError;
use esg_core::types::CompanyAggregate;

pub const BASE_COLUMNS: [&str; 5] = ["company", "esg_avg", "esg_last", "n_docs", "greenwash_flag"];

pub const EXTENDED_COLUMNS: [&str; 7] = [
    "esg_env",
    "esg_soc",
    "esg_gov",
    "sentiment_pos",
    "sentiment_neg",
    "market_cap",
    "debt",
];

/// Flat row as it appears in JSON output. The flag is 0/1 to match CSV.
#[derive(Serialize)]
struct JsonRow<'a> {
    company: &'a str,
    esg_avg: f64,
    esg_last: f64,
    n_docs: usize,
    greenwash_flag: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    esg_env: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    esg_soc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    esg_gov: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment_pos: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment_neg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    market_cap: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debt: Option<Option<f64>>,
}

impl<'a> JsonRow<'a> {
    fn new(row: &'a CompanyAggregate, extended: bool) -> Self {
        let ext = &row.extended;
        let pick = |v: f64| extended.then_some(v);
        Self {
            company: &row.company,
            esg_avg: row.esg_avg,
            esg_last: row.esg_last,
            n_docs: row.n_docs,
            greenwash_flag: u8::from(row.greenwash_flag),
            esg_env: pick(ext.esg_env),
            esg_soc: pick(ext.esg_soc),
            esg_gov: pick(ext.esg_gov),
            sentiment_pos: pick(ext.sentiment_pos),
            sentiment_neg: pick(ext.sentiment_neg),
            market_cap: extended.then_some(ext.market_cap),
            debt: extended.then_some(ext.debt),
        }
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the table as CSV.
pub fn write_csv<W: Write>(out: W, rows: &[CompanyAggregate], extended: bool) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_writer(out);
    let csv_err = |e: csv::Error| OutputError::Csv(e.to_string());

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    if extended {
        header.extend(EXTENDED_COLUMNS);
    }
    writer.write_record(&header).map_err(csv_err)?;

    for row in rows {
        let mut record = vec![
            row.company.clone(),
            row.esg_avg.to_string(),
            row.esg_last.to_string(),
            row.n_docs.to_string(),
            u8::from(row.greenwash_flag).to_string(),
        ];
        if extended {
            let ext = &row.extended;
            record.extend([
                ext.esg_env.to_string(),
                ext.esg_soc.to_string(),
                ext.esg_gov.to_string(),
                ext.sentiment_pos.to_string(),
                ext.sentiment_neg.to_string(),
                optional(ext.market_cap),
                optional(ext.debt),
            ]);
        }
        writer.write_record(&record).map_err(csv_err)?;
    }

    writer
        .flush()
        .map_err(|e| OutputError::Csv(e.to_string()))
}

/// Write the table as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut out: W, rows: &[CompanyAggregate], extended: bool) -> Result<(), OutputError> {
    let json_rows: Vec<JsonRow<'_>> = rows.iter().map(|r| JsonRow::new(r, extended)).collect();
    serde_json::to_writer_pretty(&mut out, &json_rows).map_err(|e| OutputError::Json(e.to_string()))?;
    out.write_all(b"\n")
        .and_then(|_| out.flush())
        .map_err(|e| OutputError::Json(e.to_string()))
}

/// Write the table to `path` atomically.
pub fn write_table(
    path: &Path,
    rows: &[CompanyAggregate],
    format: OutputFormat,
    extended: bool,
) -> Result<(), OutputError> {
    let label = path.display().to_string();
    let io_err = |e: std::io::Error| OutputError::Io {
        path: label.clone(),
        message: e.to_string(),
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;

    match format {
        OutputFormat::Csv => write_csv(tmp.as_file_mut(), rows, extended)?,
        OutputFormat::Json => write_json(tmp.as_file_mut(), rows, extended)?,
    }

    tmp.persist(path).map_err(|e| io_err(e.error))?;
    tracing::info!(path = %label, rows = rows.len(), ?format, extended, "result table written");
    Ok(())
}
