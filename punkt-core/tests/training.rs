//! Trainer behavior on small corpora

use punkt_core::{OrthoFlag, SentenceTokenizer, Storage, Trainer, TrainerConfig, NUMBER_TYPE};
use std::fs;
use tempfile::TempDir;

const MEETING: &str =
    "The council met on the 5. February and approved everything. Then everybody celebrated together.";

fn sorted<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut items: Vec<_> = items.collect();
    items.sort_unstable();
    items
}

#[test]
fn test_learns_multi_dot_abbreviation() {
    let mut trainer = Trainer::new();
    trainer.train("The F.B.I. agents came. The F.B.I. agents left.", true);
    let storage = trainer.into_storage();

    assert!(storage.is_abbreviation("f.b.i"));
    assert!(!storage.is_abbreviation("came"));
    assert!(!storage.is_abbreviation("left"));

    let tokenizer = SentenceTokenizer::new(storage);
    let sentences: Vec<_> = tokenizer
        .tokenize("I met the F.B.I. agents today. They left.")
        .into_iter()
        .map(|s| s.text)
        .collect();
    assert_eq!(sentences, vec!["I met the F.B.I. agents today.", " They left."]);
}

#[test]
fn test_rare_abbreviation_before_internal_punctuation() {
    let mut trainer = Trainer::new();
    trainer.train("We saw cats etc., dogs too.", true);
    assert!(trainer.storage().is_abbreviation("etc"));
    assert!(!trainer.storage().is_abbreviation("too"));
}

#[test]
fn test_known_abbreviation_removed_on_counter_evidence() {
    let mut trainer = Trainer::new().with_storage(Storage::with_abbreviations(["cat"]));
    trainer.train("The cat sat on the mat. The cat ran.", true);
    assert!(!trainer.storage().is_abbreviation("cat"));
}

#[test]
fn test_abbreviations_persist_across_finalize_cycles() {
    let mut trainer = Trainer::new();
    trainer.train("We saw cats etc., dogs too.", true);
    trainer.train("Nothing else to see here.", true);
    assert!(trainer.storage().is_abbreviation("etc"));
}

#[test]
fn test_ortho_context_collection() {
    let mut trainer = Trainer::new();
    trainer.train("Hello world. Hello again.", true);
    let storage = trainer.into_storage();

    let hello = storage.ortho_context("hello");
    assert_eq!(hello.bits(), (1 << 3) | (1 << 1));
    assert!(hello.contains(OrthoFlag::UnkUc));
    assert!(hello.contains(OrthoFlag::BegUc));
    assert!(storage.ortho_context("world").contains(OrthoFlag::MidLc));
    assert!(storage.ortho_context("again").contains(OrthoFlag::MidLc));
    assert!(storage.ortho_context("unseen").is_empty());
}

#[test]
fn test_chunk_order_does_not_change_finalized_model() {
    let long_chunk = [MEETING; 20].join(" ");
    let short_chunk = [MEETING; 10].join(" ");

    let mut forward = Trainer::new();
    forward.train(&long_chunk, false);
    forward.train(&short_chunk, false);
    forward.finalize_training();

    let mut backward = Trainer::new();
    backward.train(&short_chunk, false);
    backward.train(&long_chunk, false);
    backward.finalize_training();

    let (forward, backward) = (forward.storage(), backward.storage());
    assert!(forward.is_sentence_starter("then"));
    assert!(forward.is_collocation(NUMBER_TYPE, "february"));
    assert_eq!(forward.abbreviations().count(), 0);

    assert_eq!(
        sorted(forward.sentence_starters()),
        sorted(backward.sentence_starters())
    );
    assert_eq!(
        sorted(forward.collocations()),
        sorted(backward.collocations())
    );
    assert_eq!(forward, backward);
}

#[test]
fn test_empty_corpus_trains_empty_model() {
    let mut trainer = Trainer::new();
    trainer.train("", true);
    trainer.train("   \n\n  ", true);
    assert_eq!(trainer.into_storage(), Storage::new());
}

#[test]
fn test_config_thresholds_are_respected() {
    let config = TrainerConfig {
        abbrev_backoff: 0,
        ..TrainerConfig::default()
    };
    let mut trainer = Trainer::new().with_config(config);
    trainer.train("We saw cats etc., dogs too.", true);
    assert!(!trainer.storage().is_abbreviation("etc"));
}

#[test]
fn test_trained_model_round_trips_through_file() {
    let mut trainer = Trainer::new();
    trainer.train("The F.B.I. agents came. The F.B.I. agents left.", true);
    let storage = trainer.into_storage();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, storage.to_json_pretty().unwrap()).unwrap();

    let loaded = Storage::from_json(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(loaded, storage);
}

#[test]
fn test_training_continues_from_loaded_model() {
    let mut first = Trainer::new();
    first.train("We saw cats etc., dogs too.", true);
    let bytes = first.into_storage().to_json().unwrap();

    let mut second = Trainer::new().with_storage(Storage::from_json(&bytes).unwrap());
    second.train("Hello world. Hello again.", true);
    let storage = second.into_storage();

    assert!(storage.is_abbreviation("etc"));
    assert!(storage.ortho_context("hello").contains(OrthoFlag::BegUc));
}
