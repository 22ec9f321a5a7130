use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use typefall::core::{Dictionary, DictionaryError};

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("typefall-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_normalizes_and_keeps_order() {
    let path = temp_file("words.txt", b"Apple\n\n  dog \nApple\nMiXeD\n\n");
    let dict = Dictionary::load(&path, 12).unwrap();
    let words: Vec<&str> = dict.words().iter().map(|w| w.as_str()).collect();
    assert_eq!(words, ["apple", "dog", "apple", "mixed"]);

    let again = Dictionary::load(&path, 12).unwrap();
    assert_eq!(dict, again);
    fs::remove_file(path).unwrap();
}

#[test]
fn test_short_word_variant_filters_by_length() {
    let dict = Dictionary::from_reader(Cursor::new("a\nox\ncat\nfish\nzebra\n"), 3).unwrap();
    assert_eq!(dict.len(), 3);
    assert!(dict.words().iter().all(|w| w.len() <= 3));
}

#[test]
fn test_rejects_punctuation_and_invalid_utf8() {
    let dict = Dictionary::from_reader(Cursor::new(&b"don't\ncaf\xc3\xa9\n\xff\xfe\nok\n"[..]), 12)
        .unwrap();
    let words: Vec<&str> = dict.words().iter().map(|w| w.as_str()).collect();
    assert_eq!(words, ["ok"]);
}

#[test]
fn test_missing_file_is_an_open_error() {
    let path = std::env::temp_dir().join("typefall-definitely-missing.txt");
    let err = Dictionary::load(&path, 12).unwrap_err();
    assert!(matches!(err, DictionaryError::Open { .. }));
    assert!(err.to_string().contains("typefall-definitely-missing.txt"));
}

#[test]
fn test_only_blank_lines_is_empty_error() {
    let path = temp_file("blank.txt", b"\n   \n\t\n");
    let err = Dictionary::load(&path, 12).unwrap_err();
    assert!(matches!(err, DictionaryError::Empty { max_len: 12 }));
    fs::remove_file(path).unwrap();
}
