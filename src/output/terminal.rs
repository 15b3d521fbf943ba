// Colored terminal output for pipeline runs.
//
// main.rs delegates all formatting here: the join report, the per-category
// bar chart, record previews and dataset metadata.

use colored::Colorize;

use crate::classify::TranscriptionCategory;
use crate::dataset::writer::SplitSummary;
use crate::dataset::DatasetInfo;
use crate::pipeline::{JoinReport, Record};

/// Display how many rows survived each join step.
pub fn display_join_report(report: &JoinReport) {
    println!("\n{}", "=== Join Report ===".bold());
    println!();

    let row = |label: &str, value: usize| println!("  {:<36} {:>8}", label, value);

    row("Submissions loaded", report.submissions_loaded);
    row("  with usable extension (jpg, png)", report.downloadable);
    row("  colliding filenames", report.colliding_filenames);
    row("  dropped: shared filename", report.dropped_collision);
    row("  dropped: image not downloaded", report.dropped_missing_image);
    row("  usable", report.usable_submissions);
    row("Comments loaded", report.comments_loaded);
    row("  one per submission", report.unique_comments);

    println!("  {}", "-".repeat(45).dimmed());
    println!(
        "  {:<36} {:>8}",
        "Records".bold(),
        report.joined.to_string().bright_green()
    );

    if report.dropped_collision > 0 {
        println!(
            "\n  {} {} submissions share a filename with another and were excluded",
            "~".yellow(),
            report.dropped_collision
        );
    }
}

/// Display the category distribution of a written split as a bar chart.
pub fn display_category_breakdown(split: &str, summary: &SplitSummary) {
    println!(
        "\n{}",
        format!(
            "=== Categories in '{split}' ({} records) ===",
            summary.examples
        )
        .bold()
    );
    println!();

    if summary.examples == 0 {
        println!("  No records.");
        return;
    }

    let bar_width: usize = 20;

    for (category, count) in summary.ranked_categories() {
        let share = count as f64 / summary.examples as f64;
        let filled = (share * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if category == TranscriptionCategory::Other {
            bar.dimmed()
        } else if share >= 0.25 {
            bar.bright_green()
        } else if share >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:<28} {} {:>7} ({:>5.1}%)",
            category.as_str(),
            colored_bar,
            count,
            share * 100.0
        );
    }

    println!("\n  Written to {}", summary.path.display().to_string().dimmed());
}

/// Display the first records of a stream, one per line.
pub fn display_record_preview(records: &[(String, Record)]) {
    if records.is_empty() {
        println!("No records produced. Check the join report above.");
        return;
    }

    println!(
        "\n{}",
        format!("=== First {} records ===", records.len()).bold()
    );
    println!();

    for (i, (key, record)) in records.iter().enumerate() {
        let preview = super::truncate_chars(&super::single_line(&record.transcription), 100);
        println!(
            "  {:>3}. {:<24} {}",
            i + 1,
            key,
            colorize_category(record.transcription_category)
        );
        println!("       {}", preview.dimmed());
    }
    println!();
}

/// Display dataset metadata and the class-label table.
pub fn display_dataset_info(info: &DatasetInfo) {
    println!("{} {}", info.name.bold(), format!("v{}", info.version).dimmed());
    println!("\n{}", info.description);

    println!("\n{}", "Release notes:".bold());
    for (version, notes) in &info.release_notes {
        println!("  {version}: {notes}");
    }

    println!("\n{}", "Features:".bold());
    for name in info.features.keys() {
        println!("  {name}");
    }

    println!("\n{}", "Transcription categories:".bold());
    for category in TranscriptionCategory::ALL {
        println!("  {:>2}  {}", category.index(), category.as_str());
    }
}

/// Colorize a category name: specific formats stand out, fallbacks are muted.
pub fn colorize_category(category: TranscriptionCategory) -> colored::ColoredString {
    match category {
        TranscriptionCategory::Other => category.as_str().dimmed(),
        TranscriptionCategory::ImagesWithText | TranscriptionCategory::ArtAndImagesWithoutText => {
            category.as_str().yellow()
        }
        _ => category.as_str().green(),
    }
}
