//! Command-line interface.
//!
//! ```text
//! papercheck original.txt copied.txt result.txt
//! ```
//!
//! Both inputs are read as UTF-8, normalized, bounded to the configured
//! maximum length and compared. The score is written to the output file
//! with two decimals and echoed to stdout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use papercheck::preprocess::{Prepared, Preprocessor};
use papercheck::{SimilarityConfig, SimilarityEngine};

#[derive(Parser)]
#[command(name = "papercheck")]
#[command(version)]
#[command(about = "Report how much of an original text survives in a suspected copy")]
pub struct Cli {
    /// The original document
    pub original: PathBuf,

    /// The document suspected of copying the original
    pub copied: PathBuf,

    /// Where to write the similarity score
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Read both inputs, compare them, write the score.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = SimilarityConfig::default();
    let preprocessor = Preprocessor::new(config.max_text_length, config.min_sentence_length);

    let original = load(&cli.original, &preprocessor)?;
    let copied = load(&cli.copied, &preprocessor)?;

    let engine = SimilarityEngine::new(config)?;
    let score = engine.compute_similarity(&original.text, &copied.text);
    info!(score = score.value(), "comparison finished");

    fs::write(&cli.output, score.to_string())
        .with_context(|| format!("failed to write result to {}", cli.output.display()))?;
    println!("{score}");

    Ok(())
}

fn load(path: &Path, preprocessor: &Preprocessor) -> anyhow::Result<Prepared> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let prepared = preprocessor.prepare(&raw);

    if prepared.truncated {
        warn!(
            path = %path.display(),
            length = prepared.original_length,
            kept = prepared.text.chars().count(),
            "text too long, truncated"
        );
    }
    if prepared.too_short {
        warn!(
            path = %path.display(),
            length = prepared.original_length,
            "text very short, similarity may be unreliable"
        );
    }

    Ok(prepared)
}
