//! Load, index, report and write: one run over one language.

use std::path::PathBuf;

use anyhow::{Context, Result};
use crate::dictionary::{IpaDict, PhoneticAnagramDict};
use crate::output::write_report;
use crate::report::generate;

pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Inputs that vary between runs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Language key inside the dictionary document, e.g. `en_US`.
    pub language: String,
    pub input_path: PathBuf,
    /// Directory receiving the three report files.
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    /// `ipa-dict-<language>.json` in the working directory, reports beside it.
    pub fn for_language(language: &str) -> Self {
        PipelineConfig {
            language: language.to_string(),
            input_path: default_input_path(language),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_language(DEFAULT_LANGUAGE)
    }
}

pub fn default_input_path(language: &str) -> PathBuf {
    PathBuf::from(format!("ipa-dict-{}.json", language))
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub spellings: usize,
    pub words: usize,
    pub anagram_groups: usize,
    pub nontrivial_words: usize,
    pub written: Vec<PathBuf>,
}

pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    log::info!(
        "Loading {} ({})",
        config.input_path.display(),
        config.language
    );
    let dict = IpaDict::from_file(&config.input_path, &config.language)
        .with_context(|| format!("Failed to load dictionary {}", config.input_path.display()))?;
    log::info!(
        "Dictionary: {} spellings, {} pronounced words",
        dict.len(),
        dict.word_count()
    );

    let index = PhoneticAnagramDict::from_ipa_dict(&dict);
    log::info!("Phonetic index: {} anagram groups", index.len());

    let reports = generate(&dict, &index)?;

    let mut written = Vec::new();
    for (filename, report) in reports.files() {
        let path = config.output_dir.join(filename);
        write_report(&path, report)?;
        written.push(path);
    }

    Ok(RunSummary {
        spellings: dict.len(),
        words: dict.word_count(),
        anagram_groups: index.len(),
        nontrivial_words: reports.nontrivial_unique_pronunciation.len(),
        written,
    })
}
