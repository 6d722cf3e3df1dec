//! Word list loading utilities
//!
//! Custom dictionaries are plain text: one word per line, blank lines and
//! `#` comments ignored.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns uppercased words, skipping comments and entries that are not
/// purely alphabetic.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spellcast_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_lines(content.lines()))
}

/// Normalise a slice of words the same way [`load_from_file`] does
///
/// # Examples
/// ```
/// use spellcast_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "  dog ", "c4t", "", "# note"]);
/// assert_eq!(words, ["CAT", "DOG"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize_lines(slice.iter().copied())
}

fn normalize_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_uppercases() {
        let words = words_from_slice(&["crane", "Slate", "IRATE"]);
        assert_eq!(words, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "don't", "two words", "4x4", "dog"]);
        assert_eq!(words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "spellcast_loader_test_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# custom list").unwrap();
            writeln!(file, "zap").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  quiz  ").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["ZAP", "QUIZ"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/spellcast/words.txt").is_err());
    }
}
