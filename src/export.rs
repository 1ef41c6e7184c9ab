// src/export.rs
// =============================================================================
// Writes scan results to disk as CSV and JSON.
//
// Both files come from the same slice of CheckResult records:
// - <base>.csv : header row + one row per result, fixed column order,
//                text fields quoted
// - <base>.json: a pretty-printed array of objects (UTF-8, not escaped)
//
// The default base name is results_<YYYYmmddTHHMMSS>.
// =============================================================================

use csv::{QuoteStyle, WriterBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::checker::{timestamp_now, CheckResult};
use crate::error::Result;

/// CSV column order. Matches the field order of CheckResult.
pub const CSV_COLUMNS: [&str; 8] = [
    "timestamp",
    "username",
    "platform",
    "check_url",
    "final_url",
    "http_status",
    "exists",
    "reason",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

pub fn default_base_name() -> String {
    format!("results_{}", timestamp_now())
}

pub fn write_csv<W: Write>(writer: W, results: &[CheckResult]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(writer);

    // Header written by hand so an empty run still gets one
    wtr.write_record(CSV_COLUMNS)?;
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, results: &[CheckResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes `<dir>/<base_name>.csv` and `<dir>/<base_name>.json`.
pub fn save_results(results: &[CheckResult], dir: &Path, base_name: &str) -> Result<ExportPaths> {
    fs::create_dir_all(dir)?;

    let paths = ExportPaths {
        csv: dir.join(format!("{}.csv", base_name)),
        json: dir.join(format!("{}.json", base_name)),
    };

    write_csv(BufWriter::new(File::create(&paths.csv)?), results)?;
    write_json(BufWriter::new(File::create(&paths.json)?), results)?;

    info!(csv = %paths.csv.display(), json = %paths.json.display(), rows = results.len(), "Saved results");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<CheckResult> {
        vec![
            CheckResult {
                timestamp: "20240101T120000".to_string(),
                username: "alice".to_string(),
                platform: "github".to_string(),
                check_url: "https://github.com/alice".to_string(),
                final_url: "https://github.com/alice".to_string(),
                http_status: 200,
                exists: true,
                reason: "status_200".to_string(),
            },
            CheckResult {
                timestamp: "20240101T120001".to_string(),
                username: "alice".to_string(),
                platform: "bitcointalk".to_string(),
                check_url: "https://bitcointalk.org/index.php?action=profile;u=alice".to_string(),
                final_url: "https://bitcointalk.org/index.php?action=profile;u=alice".to_string(),
                http_status: 0,
                exists: false,
                reason: "notfound".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        write_csv(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            r#""timestamp","username","platform","check_url","final_url","http_status","exists","reason""#
        );
        assert_eq!(
            lines[1],
            r#""20240101T120000","alice","github","https://github.com/alice","https://github.com/alice",200,"true","status_200""#
        );
        assert!(lines[2].contains(",0,\"false\",\"notfound\""));
    }

    #[test]
    fn test_csv_header_for_empty_run() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("\"timestamp\""));
    }

    #[test]
    fn test_json_is_array_of_flat_objects() {
        let mut out = Vec::new();
        write_json(&mut out, &sample()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["platform"], "github");
        assert_eq!(rows[0]["exists"], true);
        assert_eq!(rows[1]["http_status"], 0);

        let parsed: Vec<CheckResult> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_save_results_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested");

        let paths = save_results(&sample(), &target, "results_test").unwrap();

        assert_eq!(paths.csv, target.join("results_test.csv"));
        assert_eq!(paths.json, target.join("results_test.json"));
        assert!(fs::read_to_string(&paths.csv).unwrap().contains("bitcointalk"));
        assert!(fs::read_to_string(&paths.json).unwrap().contains("bitcointalk"));
    }

    #[test]
    fn test_default_base_name() {
        let name = default_base_name();
        assert!(name.starts_with("results_"));
        assert_eq!(name.len(), "results_".len() + 15);
    }
}
