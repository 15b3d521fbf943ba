use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use tor_dataset::config::Config;
use tor_dataset::dataset::{self, writer, DatasetInfo};
use tor_dataset::output::terminal;

/// Build the Transcribers of Reddit dataset.
///
/// Joins scraped r/TranscribersOfReddit submissions with their volunteer
/// transcriptions and downloaded screenshots, and labels each transcription
/// with its content category.
#[derive(Parser)]
#[command(name = "tor-dataset", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input locations. Each flag overrides the matching TOR_* variable.
#[derive(Args)]
struct InputArgs {
    /// Manual download directory (images/, tor_comments.csv, tor_submissions.csv)
    #[arg(long)]
    manual_dir: Option<PathBuf>,

    /// Extracted image directory
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Comments CSV export
    #[arg(long)]
    comments: Option<PathBuf>,

    /// Submissions CSV export
    #[arg(long)]
    submissions: Option<PathBuf>,

    /// Directory for split files and dataset_info.json
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the join pipeline and write the train split
    Build {
        #[command(flatten)]
        inputs: InputArgs,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Print the category of a transcription ("-" reads stdin)
    Classify {
        /// Transcription text
        text: String,
    },

    /// Run the join pipeline and show the first records without writing
    Preview {
        #[command(flatten)]
        inputs: InputArgs,

        /// Number of records to show (default: 10)
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Show which inputs and outputs exist
    Status {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Show dataset metadata and category labels
    Info,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tor_dataset=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            inputs,
            no_progress,
        } => {
            let config = resolve_config(inputs)?;
            config.require_inputs()?;

            println!("Building dataset from {}...", config.manual_dir.display());

            let mut info = DatasetInfo::new();
            for (split, records) in dataset::split_generators(&config.layout)? {
                terminal::display_join_report(records.report());

                let summary =
                    writer::write_split(&config.output_dir, split, records, !no_progress)?;
                terminal::display_category_breakdown(split, &summary);
                info.splits.insert(split.to_string(), summary.examples);
            }

            let info_path = writer::write_info(&config.output_dir, &info)?;
            info!(path = %info_path.display(), "Wrote dataset info");

            println!("\n{}", "Dataset build complete.".bold());
            println!("  Metadata: {}", info_path.display());
        }

        Commands::Classify { text } => {
            let text = if text == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading transcription from stdin")?;
                buf
            } else {
                text
            };
            let category = tor_dataset::classify::classify(&text);
            println!("{}", terminal::colorize_category(category));
        }

        Commands::Preview { inputs, limit } => {
            let config = resolve_config(inputs)?;
            config.require_inputs()?;

            for (split, records) in dataset::split_generators(&config.layout)? {
                println!("Split: {}", split.bold());
                terminal::display_join_report(records.report());
                let head: Vec<_> = records.take(limit).collect();
                terminal::display_record_preview(&head);
            }
        }

        Commands::Status { inputs } => {
            let config = resolve_config(inputs)?;
            tor_dataset::status::show(&config.layout, &config.output_dir)?;
        }

        Commands::Info => {
            terminal::display_dataset_info(&DatasetInfo::new());
        }
    }

    Ok(())
}

/// Environment config with CLI flags applied on top.
fn resolve_config(inputs: InputArgs) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(dir) = inputs.manual_dir {
        config = config.with_manual_dir(dir);
    }
    if let Some(dir) = inputs.images_dir {
        config.layout.images_dir = dir;
    }
    if let Some(path) = inputs.comments {
        config.layout.comments_csv = path;
    }
    if let Some(path) = inputs.submissions {
        config.layout.submissions_csv = path;
    }
    if let Some(dir) = inputs.output_dir {
        config.output_dir = dir;
    }

    Ok(config)
}
