// Join pipeline — images + submissions + comments → labeled records.

pub mod derive;
pub mod join;

use std::path::PathBuf;

use serde::Serialize;

use crate::classify::TranscriptionCategory;

pub use join::{generate_records, join, Join, JoinReport, JoinedRow, Records};

/// One dataset example. Keyed externally by the image filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Path to the screenshot inside the image directory.
    pub image: PathBuf,
    pub transcription_category: TranscriptionCategory,
    /// The volunteer's transcription, verbatim.
    pub transcription: String,
}
