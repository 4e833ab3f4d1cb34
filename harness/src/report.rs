//! Run reports: a CSV table for humans and a canonical JSON document with a
//! content digest for machines.
//!
//! # Canonical JSON
//!
//! 1. Object keys sorted lexicographically (byte order).
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers; floats are rejected so the bytes do not
//!    depend on float formatting.
//!
//! # Digest
//!
//! `sha256:<hex>` over [`DOMAIN_RUN_REPORT`] followed by the canonical bytes
//! of the runs with their timings removed. Two processes that run the same
//! strategies on the same problems produce the same digest.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::runner::RunRecordV1;

/// Schema identifier written into every JSON report.
pub const REPORT_SCHEMA_VERSION: &str = "waypoint.run_report.v1";

/// Domain prefix for report digests (null-terminated).
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYPOINT::RUN_REPORT::V1\0";

/// CSV column names.
pub const CSV_HEADER: [&str; 7] = [
    "Run",
    "Strategy",
    "Nodes",
    "Frontier High Water",
    "Time",
    "Path Length",
    "Path",
];

/// Error writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Write `records` as CSV, one row per run.
///
/// `Time` is in seconds with microsecond precision; `Path` joins the action
/// labels with single spaces.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if writing fails.
pub fn write_csv<W: Write>(writer: W, records: &[RunRecordV1]) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for record in records {
        csv.write_record([
            record.run.clone(),
            record.strategy.name().to_string(),
            record.stats.nodes_allocated.to_string(),
            record.stats.frontier_high_water.to_string(),
            format!("{:.6}", record.elapsed.as_secs_f64()),
            record.path_length.to_string(),
            record.path.join(" "),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// [`write_csv`] to a file, creating or truncating it.
///
/// # Errors
///
/// Returns [`ReportError`] on IO or CSV failure.
pub fn write_csv_file(path: &Path, records: &[RunRecordV1]) -> Result<(), ReportError> {
    write_csv(BufWriter::new(File::create(path)?), records)
}

fn record_json(record: &RunRecordV1) -> Value {
    json!({
        "run": record.run,
        "strategy": record.strategy,
        "path": record.path,
        "path_length": record.path_length,
        "path_cost": record.path_cost,
        "termination": record.termination,
        "stats": record.stats,
    })
}

/// Canonical bytes of the timing-free run list.
fn deterministic_bytes(records: &[RunRecordV1]) -> Result<Vec<u8>, ReportError> {
    let runs: Vec<Value> = records.iter().map(record_json).collect();
    canonical_json_bytes(&Value::Array(runs))
}

/// Content digest of `records`, timings excluded.
///
/// # Errors
///
/// Returns [`ReportError::NonIntegerNumber`] if a record serializes a float.
pub fn report_digest(records: &[RunRecordV1]) -> Result<String, ReportError> {
    let bytes = deterministic_bytes(records)?;
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_RUN_REPORT);
    hasher.update(&bytes);
    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}

/// The full JSON report: schema version, digest, and every run with its
/// elapsed time in microseconds.
///
/// # Errors
///
/// As [`report_digest`].
pub fn report_json(records: &[RunRecordV1]) -> Result<Value, ReportError> {
    let runs: Vec<Value> = records
        .iter()
        .map(|record| {
            let mut value = record_json(record);
            if let Value::Object(map) = &mut value {
                let micros = u64::try_from(record.elapsed.as_micros()).unwrap_or(u64::MAX);
                map.insert("elapsed_us".into(), json!(micros));
            }
            value
        })
        .collect();
    Ok(json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "digest": report_digest(records)?,
        "runs": runs,
    }))
}

/// Write the canonical JSON report.
///
/// # Errors
///
/// Returns [`ReportError`] on serialization or IO failure.
pub fn write_json<W: Write>(mut writer: W, records: &[RunRecordV1]) -> Result<(), ReportError> {
    let bytes = canonical_json_bytes(&report_json(records)?)?;
    writer.write_all(&bytes)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// [`write_json`] to a file, creating or truncating it.
///
/// # Errors
///
/// Returns [`ReportError`] on serialization or IO failure.
pub fn write_json_file(path: &Path, records: &[RunRecordV1]) -> Result<(), ReportError> {
    write_json(BufWriter::new(File::create(path)?), records)
}

/// Canonical JSON bytes of `value`.
///
/// # Errors
///
/// Returns [`ReportError::NonIntegerNumber`] for any float.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, ReportError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &Value) -> Result<(), ReportError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => {
            serde_json::to_writer(&mut *buf, value)?;
        }
        Value::Number(n) => {
            if n.is_f64() {
                return Err(ReportError::NonIntegerNumber { raw: n.to_string() });
            }
            serde_json::to_writer(&mut *buf, n)?;
        }
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            buf.push(b'{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                serde_json::to_writer(&mut *buf, key)?;
                buf.push(b':');
                write_value(buf, &map[key])?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}
