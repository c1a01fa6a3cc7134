use std::sync::Arc;

use wordle_assist::{load_cached, Corpus, CorpusError, LetterMask, WordEntry, WordleSolver};

fn data_path(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_load_sample() {
    let corpus = Corpus::load(data_path("sample.txt")).unwrap();
    let words: Vec<&str> = corpus.iter().map(|e| e.word()).collect();
    assert_eq!(words, ["apple", "baker", "crane", "drape", "earth", "react"]);
    assert_eq!(corpus.get("earth").map(|e| e.frequency()), Some(120));
}

#[test]
fn test_malformed_lines_are_skipped() {
    let corpus = Corpus::load(data_path("malformed.txt")).unwrap();
    let entries: Vec<(&str, u64)> = corpus.iter().map(|e| (e.word(), e.frequency())).collect();
    assert_eq!(
        entries,
        [("apple", 100), ("baker", 90), ("slate", 75), ("zonal", 0)]
    );
}

#[test]
fn test_missing_file_is_unavailable() {
    let err = Corpus::load(data_path("no-such-corpus.txt")).unwrap_err();
    match err {
        CorpusError::Unavailable { path, .. } => {
            assert!(path.ends_with("no-such-corpus.txt"));
        }
    }
    assert!(WordleSolver::open(data_path("no-such-corpus.txt")).is_err());
}

#[test]
fn test_masks_count_distinct_letters() {
    let corpus = Corpus::load(data_path("sample.txt")).unwrap();
    for entry in &corpus {
        let mut distinct: Vec<u8> = entry.word().bytes().collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(entry.mask().count() as usize, distinct.len(), "{}", entry.word());
        assert!(distinct.iter().all(|&c| entry.mask().contains(c)));
    }
}

#[test]
fn test_entries_fold_case() {
    let entry = WordEntry::new("CrAnE", 7).unwrap();
    assert_eq!(entry.word(), "crane");
    assert_eq!(entry.mask(), LetterMask::from_letters("acenr"));
    assert!(WordEntry::new("", 1).is_none());
    assert!(WordEntry::new("can't", 1).is_none());
}

#[test]
fn test_invalid_utf8_line_is_skipped() {
    let bytes: &[u8] = b"crane,110\n\xff\xfe,5\nslate,3\n";
    let corpus = Corpus::from_reader(bytes).unwrap();
    let words: Vec<&str> = corpus.iter().map(|e| e.word()).collect();
    assert_eq!(words, ["crane", "slate"]);
}

#[test]
fn test_crlf_lines() {
    let bytes: &[u8] = b"crane,110\r\nslate,3\r\n";
    let corpus = Corpus::from_reader(bytes).unwrap();
    assert_eq!(corpus.get("slate").map(|e| e.frequency()), Some(3));
}

#[test]
fn test_parse_in_memory() {
    let corpus = Corpus::parse("alpha,3\nbeta,x\ngamma,1\n");
    assert_eq!(corpus.len(), 2);
    assert!(Corpus::parse("").is_empty());
}

#[test]
fn test_cached_load_is_shared() {
    let first = load_cached(data_path("sample.txt")).unwrap();
    let second = load_cached(data_path("sample.txt")).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let solver = WordleSolver::open(data_path("sample.txt")).unwrap();
    assert_eq!(solver.corpus().len(), first.len());
}

#[test]
fn test_cached_load_from_many_threads() {
    let path = data_path("malformed.txt");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let path = path.clone();
            std::thread::spawn(move || load_cached(path).unwrap())
        })
        .collect();
    let corpora: Vec<Arc<Corpus>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for corpus in &corpora[1..] {
        assert!(Arc::ptr_eq(&corpora[0], corpus));
    }
}
