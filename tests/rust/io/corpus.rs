//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Cix.
//! The Cix project belongs to the Dunimd Team.

use std::fs;
use std::path::PathBuf;

use cix::{build, sanitize_text, CiClass, CiCorpusLoader, CiCorpusOptions, CiError, CiMode};
use tempfile::TempDir;

const METADATA: &str = "song_id\tsong_name\texplicit\n\
1\tRough Night\ttrue\n\
2\tSunny Day\tfalse\n\
3\tLost Tape\tfalse\n\
4\tBroken Row\tperhaps\n\
5\tSunny Day\t0\n";

const LYRICS: &str = "song_id\tlyrics\n\
1\t['[Verse 1]\\nDamn this is good\\n[Chorus]\\nDamn']\n\
2\t['This is good\\nOh darn']\n\
4\t['Never loaded']\n\
5\t['Another day']\n";

fn fixture(dir: &TempDir) -> (PathBuf, PathBuf) {
    let metadata = dir.path().join("songs.tsv");
    let lyrics = dir.path().join("lyrics.tsv");
    fs::write(&metadata, METADATA).unwrap();
    fs::write(&lyrics, LYRICS).unwrap();
    (metadata, lyrics)
}

#[test]
fn test_loader_joins_and_filters_rows() {
    let dir = TempDir::new().expect("tmp dir");
    let (metadata, lyrics) = fixture(&dir);
    let corpus = CiCorpusLoader::new().load(&metadata, &lyrics).unwrap();

    // song 3 has no lyrics and song 4 has an unreadable flag
    let ids: Vec<&str> = corpus.songs().iter().map(|s| s.song_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "5"]);
    assert_eq!(corpus.songs()[0].song_name, "rough night");
}

#[test]
fn test_lyrics_are_preprocessed() {
    let dir = TempDir::new().expect("tmp dir");
    let (metadata, lyrics) = fixture(&dir);
    let corpus = CiCorpusLoader::new().load(&metadata, &lyrics).unwrap();
    assert_eq!(
        corpus.find_lyrics("Rough Night").unwrap(),
        "'\nDamn this is good\nDamn'"
    );
    let (text, explicit) = &corpus.pairs()[0];
    assert!(text.contains("Damn this is good"));
    assert!(*explicit);
}

#[test]
fn test_find_lyrics_requires_a_unique_title() {
    let dir = TempDir::new().expect("tmp dir");
    let (metadata, lyrics) = fixture(&dir);
    let corpus = CiCorpusLoader::new().load(&metadata, &lyrics).unwrap();
    assert!(matches!(
        corpus.find_lyrics("sunny day"),
        Err(CiError::Validation { .. })
    ));
    assert!(matches!(
        corpus.find_lyrics("Lost Tape"),
        Err(CiError::Validation { .. })
    ));
}

#[test]
fn test_corpus_builds_lexicon() {
    let dir = TempDir::new().expect("tmp dir");
    let (metadata, lyrics) = fixture(&dir);
    let corpus = CiCorpusLoader::new().load(&metadata, &lyrics).unwrap();
    let lexicon = build(&corpus.documents(), 1.0, 0.6).unwrap();

    assert_eq!(lexicon.classify("damn"), CiClass::Explicit);
    assert_eq!(lexicon.classify("good"), CiClass::Appropriate);
    assert_eq!(
        sanitize_text("Damn it", &lexicon, CiMode::Replace),
        "Darn it"
    );
}

#[test]
fn test_custom_columns_and_delimiter() {
    let options = CiCorpusOptions {
        delimiter: b',',
        id_column: "id".to_string(),
        name_column: "title".to_string(),
        explicit_column: "nsfw".to_string(),
        lyrics_column: "text".to_string(),
    };
    let corpus = CiCorpusLoader::with_options(options)
        .load_readers(
            "id,title,nsfw\n7,Quiet,1\n".as_bytes(),
            "id,text\n7,hush now\n".as_bytes(),
        )
        .unwrap();
    assert_eq!(corpus.len(), 1);
    assert!(corpus.songs()[0].is_explicit);
    assert_eq!(corpus.find_lyrics("quiet").unwrap(), "hush now");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().expect("tmp dir");
    let err = CiCorpusLoader::new()
        .load(dir.path().join("none.tsv"), dir.path().join("none.tsv"))
        .unwrap_err();
    assert!(matches!(err, CiError::Io(_)));
}
