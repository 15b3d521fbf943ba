// Error taxonomy for reading the manual-download inputs.
//
// Every variant is fatal for the run: this is a one-shot batch transform,
// so nothing here is retried or recovered per row.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// An input file or directory does not exist.
    #[error("{kind} not found: {}", .path.display())]
    ResourceNotFound { kind: &'static str, path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table is missing one of the columns the join needs.
    #[error("{}: missing required column `{column}`", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// A row could not be parsed (bad quoting, wrong field count, ...).
    #[error("{}: malformed row {row}: {source}", .path.display())]
    MalformedRow {
        path: PathBuf,
        row: u64,
        #[source]
        source: csv::Error,
    },

    /// Two output records resolved to the same key.
    #[error("duplicate record key `{0}`")]
    DuplicateKey(String),
}

impl IngestError {
    /// Map an I/O error on `path` to `ResourceNotFound` when the path is
    /// missing, or a generic `Io` error otherwise.
    pub fn from_io(kind: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::ResourceNotFound { kind, path }
        } else {
            IngestError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_resource_error() {
        let err = IngestError::from_io(
            "comments table",
            "/nope/tor_comments.csv",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IngestError::ResourceNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "comments table not found: /nope/tor_comments.csv"
        );
    }

    #[test]
    fn other_io_errors_stay_io() {
        let err = IngestError::from_io(
            "image directory",
            "/root/images",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
