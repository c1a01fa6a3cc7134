//! Plain-text dump of a filtered result set, one `word,frequency` per line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::filter::Candidate;

pub fn write_results<W: Write>(mut writer: W, results: &[Candidate<'_>]) -> io::Result<()> {
    for candidate in results {
        writeln!(writer, "{},{}", candidate.word, candidate.frequency)?;
    }
    writer.flush()
}

/// Write `results` to `path`, replacing any existing file.
pub fn save_results(path: impl AsRef<Path>, results: &[Candidate<'_>]) -> io::Result<()> {
    let file = File::create(path)?;
    write_results(BufWriter::new(file), results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_candidate() {
        let results = [Candidate::new("react", 130), Candidate::new("crane", 110)];
        let mut out = Vec::new();
        write_results(&mut out, &results).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "react,130\ncrane,110\n");
    }

    #[test]
    fn empty_results_write_nothing() {
        let mut out = Vec::new();
        write_results(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
