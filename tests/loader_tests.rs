use goodness::codes::{hash_words, read_codes_file, WordList};
use goodness::error::GoodnessError;
use goodness::hashing::{primary_hash, PrimaryHash};
use std::io::Write;
use tempfile::NamedTempFile;

// --- WORD LIST TESTS ---

#[test]
fn test_loader_accepts_latin1_word_list() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"apple caf\xe9 zebra\n").unwrap();

    let list = WordList::load_from_file(file.path()).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(
        list.codes(PrimaryHash::Polynomial),
        vec![
            primary_hash("apple"),
            primary_hash(b"caf\xe9"),
            primary_hash("zebra"),
        ]
    );
}

#[test]
fn test_loader_matches_in_memory_hashing() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "the quick\tbrown").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  fox").unwrap();

    let list = WordList::load_from_file(file.path()).unwrap();

    for primary in [PrimaryHash::Polynomial, PrimaryHash::ByteSum] {
        assert_eq!(
            list.codes(primary),
            hash_words("the quick brown fox", primary)
        );
    }
}

#[test]
fn test_loader_missing_file_is_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("words");

    assert!(matches!(
        WordList::load_from_file(&missing),
        Err(GoodnessError::DataUnavailable { path, .. }) if path == missing
    ));
}

// --- CODE FILE TESTS ---

#[test]
fn test_code_file_rejects_words() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "12").unwrap();
    writeln!(file, "apple").unwrap();

    assert!(matches!(
        read_codes_file(file.path()),
        Err(GoodnessError::InvalidCode { line: 2, .. })
    ));
}
