use std::collections::BTreeMap;
use std::path::Path;

use anaphones_core::pipeline::{run, PipelineConfig};
use anaphones_core::report::{
    ALL_FILENAME, NONTRIVIAL_UNIQUE_PRONUNCIATION_FILENAME, UNIQUE_PRONUNCIATION_FILENAME,
};
use anaphones_core::AnaphoneError;

fn read_report(path: &Path) -> BTreeMap<String, String> {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn run_on(doc: &str) -> (tempfile::TempDir, PipelineConfig) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ipa-dict-en_US.json");
    std::fs::write(&input, doc).unwrap();
    let config = PipelineConfig {
        language: "en_US".into(),
        input_path: input,
        output_dir: dir.path().join("out"),
    };
    (dir, config)
}

#[test]
fn test_race_and_acre_stand_alone() {
    let (_dir, config) = run_on(r#"{"en_US": [{"race": "/reɪs/", "acre": "/ˈeɪkər/, /eɪkər/"}]}"#);
    let summary = run(&config).unwrap();
    assert_eq!(summary.spellings, 2);
    assert_eq!(summary.words, 2);
    assert_eq!(summary.written.len(), 3);

    let all = read_report(&config.output_dir.join(ALL_FILENAME));
    assert_eq!(all.len(), 2);
    assert_eq!(all["acre:eɪkər"], "acre:eɪkər");
    assert_eq!(all["race:reɪs"], "race:reɪs");

    let nontrivial = read_report(&config.output_dir.join(NONTRIVIAL_UNIQUE_PRONUNCIATION_FILENAME));
    assert!(nontrivial.is_empty());
}

#[test]
fn test_anaphones_and_homophones() {
    let doc = r#"{"en_US": [{
        "cat": "/ˈkæt/",
        "act": "/ækt/",
        "their": "/ðɛr/",
        "there": "/ðɛr/",
        "'": "/ˈ/"
    }]}"#;
    let (_dir, config) = run_on(doc);
    let summary = run(&config).unwrap();
    assert_eq!(summary.nontrivial_words, 2);

    let all = read_report(&config.output_dir.join(ALL_FILENAME));
    assert_eq!(all["cat:kæt"], "act:ækt, cat:kæt");
    assert_eq!(all["their:ðɛr"], "their:ðɛr, there:ðɛr");
    assert_eq!(all[":"], ":");

    let unique = read_report(&config.output_dir.join(UNIQUE_PRONUNCIATION_FILENAME));
    assert_eq!(unique["there:ðɛr"], "their:ðɛr");
    assert_eq!(unique.len(), all.len());

    let nontrivial = read_report(&config.output_dir.join(NONTRIVIAL_UNIQUE_PRONUNCIATION_FILENAME));
    let keys: Vec<&str> = nontrivial.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["act:ækt", "cat:kæt"]);
}

#[test]
fn test_output_layout() {
    let (_dir, config) = run_on(r#"{"en_US": [{"cat": "/kæt/", "act": "/ækt/"}]}"#);
    run(&config).unwrap();
    let text = std::fs::read_to_string(config.output_dir.join(ALL_FILENAME)).unwrap();
    assert_eq!(
        text,
        "{\n\t\"act:ækt\": \"act:ækt, cat:kæt\",\n\t\"cat:kæt\": \"act:ækt, cat:kæt\"\n}"
    );
}

#[test]
fn test_missing_language_aborts() {
    let (_dir, config) = run_on(r#"{"fr_FR": [{"chat": "/ʃa/"}]}"#);
    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnaphoneError>(),
        Some(AnaphoneError::LanguageNotFound(_))
    ));
    assert!(!config.output_dir.join(ALL_FILENAME).exists());
}

#[test]
fn test_malformed_language_section_aborts() {
    let (_dir, config) = run_on(r#"{"en_US": [{"cat": "/kæt/"}, {"dog": "/dɔɡ/"}]}"#);
    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnaphoneError>(),
        Some(AnaphoneError::Format { .. })
    ));
}
