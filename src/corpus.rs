//! Loading the frequency-weighted word corpus.
//!
//! The source is a flat text file with one `word,frequency` entry per line.
//! Lines that do not have that shape are skipped. Every accepted word gets
//! its letter mask computed once here so the filter never has to rescan it
//! for set membership.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use log::{debug, trace};
use thiserror::Error;

use crate::mask::LetterMask;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus unavailable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A corpus word with its frequency and precomputed letter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    frequency: u64,
    mask: LetterMask,
}

impl WordEntry {
    /// Build an entry, folding the word to lowercase.
    ///
    /// Returns `None` for an empty word or one containing anything other
    /// than ASCII letters.
    pub fn new(word: &str, frequency: u64) -> Option<Self> {
        if word.is_empty() || !word.bytes().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let word = word.to_ascii_lowercase();
        let mask = LetterMask::from_letters(&word);
        Some(Self {
            word,
            frequency,
            mask,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn mask(&self) -> LetterMask {
        self.mask
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

fn parse_line(line: &str) -> Option<WordEntry> {
    let mut fields = line.trim().split(',');
    let word = fields.next()?.trim();
    let frequency = fields.next()?.trim().parse::<u64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    WordEntry::new(word, frequency)
}

/// An ordered, read-only word list.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<WordEntry>,
}

impl Corpus {
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Parse an in-memory corpus, skipping malformed lines.
    pub fn parse(text: &str) -> Self {
        Self::collect_lines(text.lines().map(Ok::<_, io::Error>)).unwrap_or_default()
    }

    /// Read a corpus from `reader`. A line that is not valid UTF-8 counts as
    /// malformed; only a failing read is an error.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader
            .split(b'\n')
            .map(|line| line.map(|bytes| String::from_utf8(bytes).unwrap_or_default()));
        Self::collect_lines(lines)
    }

    /// Read a corpus file from disk. Every call reads the file; use
    /// [`load_cached`] to share one copy per path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let unavailable = |source| CorpusError::Unavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        let corpus = Self::from_reader(BufReader::new(file)).map_err(unavailable)?;
        debug!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    fn collect_lines<S, I>(lines: I) -> io::Result<Self>
    where
        S: AsRef<str>,
        I: Iterator<Item = io::Result<S>>,
    {
        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for line in lines {
            match parse_line(line?.as_ref()) {
                Some(entry) => entries.push(entry),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!("skipped {} malformed corpus lines", skipped);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.word == word)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

type CorpusCache = Mutex<HashMap<PathBuf, Arc<Corpus>>>;

static CACHE: OnceLock<CorpusCache> = OnceLock::new();

/// Load the corpus at `path` once per process and hand out shared handles.
///
/// The cache lock is held while the file is read, so concurrent first
/// requests for the same path read it once. A failed load is not cached.
pub fn load_cached(path: impl AsRef<Path>) -> Result<Arc<Corpus>, CorpusError> {
    let path = path.as_ref();
    let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    let mut cache = CACHE
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(corpus) = cache.get(&key) {
        trace!("corpus cache hit for {}", key.display());
        return Ok(Arc::clone(corpus));
    }

    let corpus = Arc::new(Corpus::load(path)?);
    cache.insert(key, Arc::clone(&corpus));
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_accepts_trimmed_fields() {
        let entry = parse_line("  Crane , 110 ").unwrap();
        assert_eq!(entry.word(), "crane");
        assert_eq!(entry.frequency(), 110);
    }

    #[test]
    fn parse_line_rejects_bad_shapes() {
        assert!(parse_line("crane").is_none());
        assert!(parse_line("crane,1,2").is_none());
        assert!(parse_line("crane,many").is_none());
        assert!(parse_line("crane,-4").is_none());
        assert!(parse_line(",4").is_none());
        assert!(parse_line("cr4ne,4").is_none());
        assert!(parse_line("").is_none());
    }
}
