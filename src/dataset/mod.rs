// Dataset builder — metadata, manual-download layout and split generation.
//
// The scrape and the image archive are produced upstream and dropped into a
// manual directory. This module knows where the pieces live inside it and
// wires them into the join pipeline.

pub mod writer;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classify::TranscriptionCategory;
use crate::error::IngestError;
use crate::pipeline::{generate_records, Records};

pub const DATASET_NAME: &str = "transcribers_of_reddit";
pub const VERSION: &str = "1.0.0";

pub const DESCRIPTION: &str = "Screenshots and transcriptions from r/transcribersofreddit \
volunteers. Each example pairs a posted image with the volunteer's markdown transcription \
and a content category read from the transcription header.";

pub const CITATION: &str = "";

/// Release notes keyed by version.
pub const RELEASE_NOTES: &[(&str, &str)] = &[("1.0.0", "Initial release.")];

pub const MANUAL_DOWNLOAD_INSTRUCTIONS: &str = "\
Scrape r/TranscribersOfReddit into the manual directory:
  tor_submissions.csv  submissions export (needs `id` and `url` columns)
  tor_comments.csv     transcription comments export (needs `link_id` and `body`)
  tor_images.zip       downloaded images, extracted to an `images/` directory";

pub const IMAGES_DIR_NAME: &str = "images";
pub const COMMENTS_FILE_NAME: &str = "tor_comments.csv";
pub const SUBMISSIONS_FILE_NAME: &str = "tor_submissions.csv";

/// The only split this dataset produces.
pub const TRAIN_SPLIT: &str = "train";

/// Where the three inputs live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualLayout {
    pub images_dir: PathBuf,
    pub comments_csv: PathBuf,
    pub submissions_csv: PathBuf,
}

impl ManualLayout {
    /// Standard layout under a manual-download directory.
    pub fn from_manual_dir(manual_dir: &Path) -> Self {
        Self {
            images_dir: manual_dir.join(IMAGES_DIR_NAME),
            comments_csv: manual_dir.join(COMMENTS_FILE_NAME),
            submissions_csv: manual_dir.join(SUBMISSIONS_FILE_NAME),
        }
    }

    /// Inputs that do not exist yet, as (label, path) pairs.
    pub fn missing(&self) -> Vec<(&'static str, &Path)> {
        self.entries()
            .into_iter()
            .filter(|(_, path)| !path.exists())
            .collect()
    }

    /// All inputs as (label, path) pairs.
    pub fn entries(&self) -> Vec<(&'static str, &Path)> {
        vec![
            ("images", self.images_dir.as_path()),
            ("comments", self.comments_csv.as_path()),
            ("submissions", self.submissions_csv.as_path()),
        ]
    }
}

/// One feature column and its type.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feature {
    Image,
    ClassLabel { names: Vec<&'static str> },
    Text,
}

/// Dataset metadata written next to the generated split.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub release_notes: BTreeMap<&'static str, &'static str>,
    pub features: BTreeMap<&'static str, Feature>,
    /// Always `None`: examples are not (input, target) pairs.
    pub supervised_keys: Option<(String, String)>,
    /// Example count per split, filled in after generation.
    pub splits: BTreeMap<String, usize>,
}

impl DatasetInfo {
    pub fn new() -> Self {
        let features = BTreeMap::from([
            ("image", Feature::Image),
            (
                "transcription_category",
                Feature::ClassLabel {
                    names: TranscriptionCategory::names(),
                },
            ),
            ("transcription", Feature::Text),
        ]);

        Self {
            name: DATASET_NAME,
            version: VERSION,
            description: DESCRIPTION,
            citation: CITATION,
            release_notes: RELEASE_NOTES.iter().copied().collect(),
            features,
            supervised_keys: None,
            splits: BTreeMap::new(),
        }
    }
}

impl Default for DatasetInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Named record streams, one per split.
pub fn split_generators(
    layout: &ManualLayout,
) -> Result<Vec<(&'static str, Records)>, IngestError> {
    let train = generate_records(
        &layout.images_dir,
        &layout.comments_csv,
        &layout.submissions_csv,
    )?;
    Ok(vec![(TRAIN_SPLIT, train)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_paths() {
        let layout = ManualLayout::from_manual_dir(Path::new("/data/manual"));
        assert_eq!(layout.images_dir, PathBuf::from("/data/manual/images"));
        assert_eq!(
            layout.comments_csv,
            PathBuf::from("/data/manual/tor_comments.csv")
        );
        assert_eq!(
            layout.submissions_csv,
            PathBuf::from("/data/manual/tor_submissions.csv")
        );
    }

    #[test]
    fn info_lists_class_names_in_label_order() {
        let info = DatasetInfo::new();
        let json = serde_json::to_value(&info).unwrap();
        let names = &json["features"]["transcription_category"]["names"];
        assert_eq!(names[0], "ART_AND_IMAGES_WITHOUT_TEXT");
        assert_eq!(names[14], "OTHER");
        assert_eq!(json["features"]["image"]["type"], "image");
        assert_eq!(json["release_notes"]["1.0.0"], "Initial release.");
        assert!(json["supervised_keys"].is_null());
    }

    #[test]
    fn missing_reports_absent_inputs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(COMMENTS_FILE_NAME), "link_id,body\n").unwrap();
        let layout = ManualLayout::from_manual_dir(dir.path());
        let missing: Vec<&str> = layout.missing().into_iter().map(|(label, _)| label).collect();
        assert_eq!(missing, vec!["images", "submissions"]);
    }
}
