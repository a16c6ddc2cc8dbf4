//! anaphones CLI — group dictionary words whose pronunciations are anagrams.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use anaphones_core::pipeline::{default_input_path, run, PipelineConfig, DEFAULT_LANGUAGE};

#[derive(Parser, Debug)]
#[command(
    name = "anaphones",
    about = "Find words whose IPA pronunciations are anagrams of each other",
    version,
)]
struct Cli {
    /// Language key in the dictionary file
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// ipa-dict JSON file [default: ipa-dict-<language>.json]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory for the report files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let start = Instant::now();
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run_anaphones(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }

    println!("finished in {:.2}s", start.elapsed().as_secs_f64());
}

fn run_anaphones(cli: Cli) -> Result<()> {
    let config = PipelineConfig {
        input_path: cli.input.unwrap_or_else(|| default_input_path(&cli.language)),
        language: cli.language,
        output_dir: cli.output_dir,
    };

    let summary = run(&config)?;
    for path in &summary.written {
        println!("Wrote {}", path.display());
    }
    println!(
        "{} pronounced words, {} with nontrivial anaphones",
        summary.words, summary.nontrivial_words
    );
    Ok(())
}
