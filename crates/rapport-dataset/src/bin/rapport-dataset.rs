use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use rapport_dataset::transcript::{extract_directory, write_dataset};

/// Build a labeled dialogue dataset from a directory of transcripts.
#[derive(Debug, Parser)]
#[command(name = "rapport-dataset", version)]
struct Args {
    /// Directory containing `*.txt` transcripts.
    #[arg(long)]
    input: PathBuf,

    /// Where to write the JSON dataset.
    #[arg(long, default_value = "medical_dialogue_dataset.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let records = extract_directory(&args.input)?;
    write_dataset(&records, &args.output)?;

    tracing::info!(
        records = records.len(),
        output = %args.output.display(),
        "dataset written"
    );
    Ok(())
}
