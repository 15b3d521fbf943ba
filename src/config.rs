use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::dataset::{ManualLayout, MANUAL_DOWNLOAD_INSTRUCTIONS};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the scrape and image archive were dropped into.
    pub manual_dir: PathBuf,
    /// Input locations. Default to the standard layout under `manual_dir`,
    /// each overridable on its own.
    pub layout: ManualLayout,
    /// Where split files and dataset_info.json are written.
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required at load time. Call `require_inputs` before
    /// running the pipeline.
    pub fn load() -> Result<Self> {
        let manual_dir = env::var("TOR_MANUAL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./manual"));

        let mut layout = ManualLayout::from_manual_dir(&manual_dir);
        if let Ok(dir) = env::var("TOR_IMAGES_DIR") {
            layout.images_dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("TOR_COMMENTS_CSV") {
            layout.comments_csv = PathBuf::from(path);
        }
        if let Ok(path) = env::var("TOR_SUBMISSIONS_CSV") {
            layout.submissions_csv = PathBuf::from(path);
        }

        Ok(Self {
            manual_dir,
            layout,
            output_dir: env::var("TOR_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./output")),
        })
    }

    /// Point every input at the standard layout under a new manual directory.
    pub fn with_manual_dir(mut self, manual_dir: PathBuf) -> Self {
        self.layout = ManualLayout::from_manual_dir(&manual_dir);
        self.manual_dir = manual_dir;
        self
    }

    /// Check that all three inputs exist.
    /// Call this before any operation that reads the manual download.
    pub fn require_inputs(&self) -> Result<()> {
        let missing = self.layout.missing();
        if missing.is_empty() {
            return Ok(());
        }

        let listed: Vec<String> = missing
            .iter()
            .map(|(label, path)| format!("  {label}: {}", path.display()))
            .collect();
        anyhow::bail!(
            "Manual download incomplete. Missing:\n{}\n\n{}\n\n\
             Set TOR_MANUAL_DIR (or pass --manual-dir) to point at it.",
            listed.join("\n"),
            MANUAL_DOWNLOAD_INSTRUCTIONS
        );
    }
}
