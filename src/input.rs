//! Raw input loading.
//!
//! Reads a file (or stdin) and decides whether it is FASTA. FASTA is
//! detected from the file extension or a leading `>`.
//!
//! Detection priority:
//! 1. File extension
//! 2. Leading header marker

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::sanitize::{extract_fasta_body, sanitize, NucleotideSequence, FASTA_HEADER_MARKER};

/// Errors that can occur while loading input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] io::Error),

    #[error("Empty input")]
    EmptyInput,
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Raw text as supplied by the user, before sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    /// The text exactly as read
    pub text: String,
    /// Whether header lines must be dropped before sanitizing
    pub is_fasta: bool,
}

impl RawInput {
    /// Wraps text, detecting FASTA from a leading header marker.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_fasta = text.starts_with(FASTA_HEADER_MARKER);
        Self { text, is_fasta }
    }

    /// Returns the sequence text without FASTA header lines, unsanitized.
    pub fn body(&self) -> Cow<'_, str> {
        if self.is_fasta {
            Cow::Owned(extract_fasta_body(&self.text))
        } else {
            Cow::Borrowed(&self.text)
        }
    }

    /// Returns the canonical nucleotide sequence of this input.
    pub fn sequence(&self) -> NucleotideSequence {
        sanitize(&self.body())
    }
}

/// Returns true if the extension names a FASTA file.
pub fn has_fasta_extension<P: AsRef<Path>>(path: P) -> bool {
    let Some(ext) = path.as_ref().extension().and_then(OsStr::to_str) else {
        return false;
    };
    matches!(
        ext.to_lowercase().as_str(),
        "fa" | "fas" | "fasta" | "fna" | "ffn"
    )
}

/// Reads all of `reader` into a [`RawInput`].
pub fn read_input<R: Read>(mut reader: R) -> InputResult<RawInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(RawInput::from_text(text))
}

/// Loads input from a path; `-` reads stdin.
pub fn load_path<P: AsRef<Path>>(path: P) -> InputResult<RawInput> {
    let path = path.as_ref();
    if path == Path::new("-") {
        debug!("reading sequence from stdin");
        return read_input(io::stdin().lock());
    }

    let file = File::open(path)?;
    let mut input = read_input(BufReader::new(file))?;
    input.is_fasta = input.is_fasta || has_fasta_extension(path);
    info!(
        path = %path.display(),
        bytes = input.text.len(),
        fasta = input.is_fasta,
        "loaded input"
    );
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_extension() {
        assert!(has_fasta_extension("test.fa"));
        assert!(has_fasta_extension("test.FASTA"));
        assert!(has_fasta_extension("dir/test.fna"));
        assert!(!has_fasta_extension("test.txt"));
        assert!(!has_fasta_extension("test"));
    }

    #[test]
    fn test_detect_from_header() {
        assert!(RawInput::from_text(">seq1\nATG").is_fasta);
        assert!(!RawInput::from_text("ATG\n>seq1").is_fasta);
    }

    #[test]
    fn test_sequence_from_fasta() {
        let input = RawInput::from_text(">pdb|1T15| ACGT in header\natg aaa\nTAG\n");
        assert_eq!(input.sequence().as_str(), "ATGAAATAG");
    }

    #[test]
    fn test_body_drops_headers_only() {
        let input = RawInput::from_text(">pdb|1T15|Chain A\natg aaa\nTAG\n");
        assert_eq!(input.body(), "atg aaaTAG");
        let plain = RawInput::from_text("atg aaa\n");
        assert_eq!(plain.body(), "atg aaa\n");
    }

    #[test]
    fn test_sequence_from_plain_text() {
        let input = RawInput::from_text("atg-aaa tag");
        assert_eq!(input.sequence().as_str(), "ATGAAATAG");
    }

    #[test]
    fn test_read_empty_input() {
        let result = read_input("  \n".as_bytes());
        assert!(matches!(result, Err(InputError::EmptyInput)));
    }

    #[test]
    fn test_read_input() {
        let input = read_input(">s\nATG\n".as_bytes()).unwrap();
        assert!(input.is_fasta);
        assert_eq!(input.text, ">s\nATG\n");
    }
}
