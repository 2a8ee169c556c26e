use predictrie::{Trie, TrieError};
use std::io::Write;

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("predictrie-test-{name}-{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn loads_weighted_dictionary() {
    let path = write_temp("weighted", "3\nalpha 5\nbeta 10\ngamma 1.5\n");
    let mut trie = Trie::new();
    let inserted = trie.insert_from_file(&path, true, &[' ', '\t']).unwrap();
    assert_eq!(3, inserted);
    assert_eq!(Some(5.0), trie.weight_of("alpha"));
    assert_eq!(Some(10.0), trie.weight_of("beta"));
    assert_eq!(Some(1.5), trie.weight_of("gamma"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn loads_unweighted_dictionary_with_zero_weight() {
    let path = write_temp("unweighted", "2\nalpha\nbeta\n");
    let mut trie = Trie::new();
    trie.insert_from_file(&path, false, &[' ', '\t']).unwrap();
    assert_eq!(Some(0.0), trie.weight_of("alpha"));
    assert_eq!(Some(0.0), trie.weight_of("beta"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn mismatched_declared_count_does_not_fail_the_load() {
    let path = write_temp("mismatch", "99\nalpha 1\n");
    let mut trie = Trie::new();
    let inserted = trie.insert_from_file(&path, true, &[' ', '\t']).unwrap();
    assert_eq!(1, inserted);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn invalid_weight_token_is_a_parse_error() {
    let path = write_temp("badweight", "1\nalpha notanumber\n");
    let mut trie = Trie::new();
    let result = trie.insert_from_file(&path, true, &[' ', '\t']);
    assert!(matches!(result, Err(TrieError::Parse { .. })));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let mut trie = Trie::new();
    let result = trie.insert_from_file("/nonexistent/path/to/dictionary.txt", true, &[' ']);
    assert!(matches!(result, Err(TrieError::Io { .. })));
}

#[test]
fn custom_delimiters_split_entries() {
    let path = write_temp("delims", "1\nalpha,5\n");
    let mut trie = Trie::new();
    trie.insert_from_file(&path, true, &[',']).unwrap();
    assert_eq!(Some(5.0), trie.weight_of("alpha"));
    std::fs::remove_file(path).unwrap();
}
