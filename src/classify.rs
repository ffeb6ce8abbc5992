//! Heuristics over raw input.
//!
//! Both functions here are advisory. A wrong sequence-type guess or a
//! missed identifier is an accepted outcome; callers warn, they never
//! reject input on these results.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::{is_canonical_base, FASTA_HEADER_MARKER};

/// Minimum share of A/T/G/C characters for a nucleotide guess.
pub const NUCLEOTIDE_FRACTION_THRESHOLD: f64 = 0.90;

/// Header patterns carrying an explicit `pdb` tag, tried in order.
static PDB_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)pdb\|([0-9][a-z0-9]{3})\|",
        r"(?i)pdb[:\s]+([0-9][a-z0-9]{3})",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Guessed kind of a raw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceType {
    Nucleotide,
    AminoAcid,
    /// Nothing to judge (empty after removing whitespace)
    Indeterminate,
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceType::Nucleotide => write!(f, "nucleotide"),
            SequenceType::AminoAcid => write!(f, "amino acid"),
            SequenceType::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Guesses whether `text` is a nucleotide or a protein sequence.
///
/// Whitespace is ignored and case folded. At least 90% A/T/G/C is a
/// nucleotide sequence, anything else an amino-acid one.
pub fn classify_sequence_type(text: &str) -> SequenceType {
    let mut total = 0usize;
    let mut nucleotides = 0usize;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii() && is_canonical_base(upper as u8) {
            nucleotides += 1;
        }
    }

    if total == 0 {
        return SequenceType::Indeterminate;
    }

    if nucleotides as f64 / total as f64 >= NUCLEOTIDE_FRACTION_THRESHOLD {
        SequenceType::Nucleotide
    } else {
        SequenceType::AminoAcid
    }
}

/// Extracts a PDB identifier from the FASTA header on the first line.
///
/// Only explicit tags are trusted: `pdb|1ABC|`, `pdb:1ABC` or `pdb 1ABC`
/// (case-insensitive). The identifier is returned uppercased.
pub fn extract_header_identifier(text: &str) -> Option<String> {
    let header = text.split('\n').next().unwrap_or("").trim();
    if !header.starts_with(FASTA_HEADER_MARKER) {
        return None;
    }

    PDB_PATTERNS
        .iter()
        .find_map(|re| re.captures(header))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
}
