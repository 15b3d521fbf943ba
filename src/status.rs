// Input status display — which manual-download pieces are present and how big.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::dataset::writer::{split_path, INFO_FILE_NAME};
use crate::dataset::{ManualLayout, MANUAL_DOWNLOAD_INSTRUCTIONS, TRAIN_SPLIT};

/// Display input and output status to the terminal.
pub fn show(layout: &ManualLayout, output_dir: &Path) -> Result<()> {
    println!("{}", "Inputs:".bold());
    for (label, path) in layout.entries() {
        println!("  {:<12} {}", label, describe_path(path)?);
    }

    if !layout.missing().is_empty() {
        println!("\n{}", MANUAL_DOWNLOAD_INSTRUCTIONS.dimmed());
    }

    println!("\n{}", "Output:".bold());
    let split = split_path(output_dir, TRAIN_SPLIT);
    println!("  {:<12} {}", TRAIN_SPLIT, describe_path(&split)?);
    let info = output_dir.join(INFO_FILE_NAME);
    println!("  {:<12} {}", "info", describe_path(&info)?);

    Ok(())
}

fn describe_path(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok(format!("{} ({})", path.display(), "missing".red()));
    }

    let detail = if path.is_dir() {
        let entries = std::fs::read_dir(path)?.count();
        format!("{entries} files")
    } else {
        std::fs::metadata(path)
            .map(|m| format_bytes(m.len()))
            .unwrap_or_else(|_| "unknown".to_string())
    };
    Ok(format!("{} ({})", path.display(), detail.green()))
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
