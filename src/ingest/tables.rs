// CSV loading for the submissions and comments exports.
//
// The exports were written by a dataframe library, so the first column is
// usually an unnamed row index (header "" or "Unnamed: 0"). It carries no
// data and is dropped. Columns beyond the ones the join needs are ignored.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::IngestError;

/// A posted screenshot: its Reddit id and the URL of the image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub id: String,
    pub url: String,
}

/// A transcription comment. `link_id` is the parent submission's fullname
/// (`t3_<id>`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    pub link_id: String,
    pub body: String,
}

/// Columns the submissions table must provide.
pub const SUBMISSION_COLUMNS: &[&str] = &["id", "url"];

/// Columns the comments table must provide.
pub const COMMENT_COLUMNS: &[&str] = &["link_id", "body"];

/// Load every row of the submissions table, in file order.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>, IngestError> {
    load_table(path, "submissions table", SUBMISSION_COLUMNS)
}

/// Load every row of the comments table, in file order.
pub fn load_comments(path: &Path) -> Result<Vec<Comment>, IngestError> {
    load_table(path, "comments table", COMMENT_COLUMNS)
}

/// Whether a header cell is the synthetic row index a dataframe export adds.
pub fn is_index_column(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed: ")
}

fn load_table<T: DeserializeOwned>(
    path: &Path,
    kind: &'static str,
    required: &[&str],
) -> Result<Vec<T>, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::from_io(kind, path, e))?;
    let mut reader = csv::ReaderBuilder::new().from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| IngestError::MalformedRow {
            path: path.to_path_buf(),
            row: 0,
            source,
        })?
        .clone();

    if headers.get(0).is_some_and(is_index_column) {
        debug!(path = %path.display(), "Dropping leading index column");
    }

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i as u64 + 1;
        let record = result.map_err(|source| IngestError::MalformedRow {
            path: path.to_path_buf(),
            row,
            source,
        })?;
        let parsed: T =
            record
                .deserialize(Some(&headers))
                .map_err(|source| IngestError::MalformedRow {
                    path: path.to_path_buf(),
                    row,
                    source,
                })?;
        rows.push(parsed);
    }

    info!(path = %path.display(), rows = rows.len(), "Loaded {kind}");
    Ok(rows)
}
