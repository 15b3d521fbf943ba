// Split writer — JSON lines per split plus dataset_info.json.
//
// Records are written in the order the pipeline yields them, so identical
// inputs produce byte-identical files. Each file is written to a temporary
// file in the output directory and renamed into place only once complete, so
// a failed run leaves the previous output untouched.

use std::collections::HashSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use super::DatasetInfo;
use crate::classify::TranscriptionCategory;
use crate::error::IngestError;
use crate::pipeline::Record;

pub const INFO_FILE_NAME: &str = "dataset_info.json";

/// One line of a split file.
#[derive(Serialize)]
struct ExampleLine<'a> {
    key: &'a str,
    image: &'a Path,
    transcription_category: TranscriptionCategory,
    transcription: &'a str,
}

/// What was written for one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub path: PathBuf,
    pub examples: usize,
    /// Example count per category, indexed by `TranscriptionCategory::index`.
    pub category_counts: [usize; 15],
}

impl SplitSummary {
    /// Non-zero category counts, largest first (ties keep label order).
    pub fn ranked_categories(&self) -> Vec<(TranscriptionCategory, usize)> {
        let mut ranked: Vec<_> = TranscriptionCategory::ALL
            .iter()
            .map(|c| (*c, self.category_counts[c.index()]))
            .filter(|(_, n)| *n > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Path of the JSON-lines file for `split` under `output_dir`.
pub fn split_path(output_dir: &Path, split: &str) -> PathBuf {
    output_dir.join(format!("{split}.jsonl"))
}

/// Write every record of a split, one JSON object per line.
///
/// A repeated key aborts the write: keys must be unique within a split.
pub fn write_split<I>(
    output_dir: &Path,
    split: &str,
    records: I,
    show_progress: bool,
) -> Result<SplitSummary>
where
    I: ExactSizeIterator<Item = (String, Record)>,
{
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let path = split_path(output_dir, split);
    let tmp = NamedTempFile::new_in(output_dir)
        .with_context(|| format!("creating temporary file in {}", output_dir.display()))?;
    let mut out = BufWriter::new(tmp);

    let pb = if show_progress {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar().template("  Writing [{bar:30}] {pos}/{len} ({eta})")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut category_counts = [0usize; 15];
    let mut examples = 0;

    for (key, record) in records {
        if !seen.insert(key.clone()) {
            pb.abandon();
            return Err(IngestError::DuplicateKey(key).into());
        }

        let line = ExampleLine {
            key: &key,
            image: &record.image,
            transcription_category: record.transcription_category,
            transcription: &record.transcription,
        };
        serde_json::to_writer(&mut out, &line)
            .with_context(|| format!("serializing record {key}"))?;
        out.write_all(b"\n")?;

        category_counts[record.transcription_category.index()] += 1;
        examples += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let tmp = out
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("flushing split file {}", path.display()))?;
    persist(tmp, &path)?;

    info!(split, examples, path = %path.display(), "Wrote split");

    Ok(SplitSummary {
        path,
        examples,
        category_counts,
    })
}

/// Write `dataset_info.json` (pretty-printed) under `output_dir`.
pub fn write_info(output_dir: &Path, info: &DatasetInfo) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;
    let path = output_dir.join(INFO_FILE_NAME);
    let mut json = serde_json::to_string_pretty(info)?;
    json.push('\n');

    let mut tmp = NamedTempFile::new_in(output_dir)
        .with_context(|| format!("creating temporary file in {}", output_dir.display()))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    persist(tmp, &path)?;
    Ok(path)
}

/// Rename a finished temporary file over `path`.
fn persist(tmp: NamedTempFile, path: &Path) -> Result<()> {
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("moving finished file to {}", path.display()))?;
    Ok(())
}
