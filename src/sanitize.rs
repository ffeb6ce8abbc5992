//! Input sanitization.
//!
//! Turns arbitrary pasted text or FASTA content into a canonical
//! nucleotide sequence: uppercase, drawn only from `{A, T, G, C}`.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ATGAAATAG...
//! ```
//!
//! [`extract_fasta_body`] only drops header lines. It does not sanitize,
//! so callers chain it with [`sanitize`].

use std::fmt;

/// The header marker that starts a FASTA record.
pub const FASTA_HEADER_MARKER: char = '>';

/// A canonical nucleotide sequence.
///
/// Every character is one of `A`, `T`, `G`, `C`. The only way to obtain one
/// from arbitrary text is [`sanitize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NucleotideSequence(String);

impl NucleotideSequence {
    /// Wraps a string already known to be canonical.
    pub(crate) fn from_canonical(data: String) -> Self {
        debug_assert!(data.bytes().all(is_canonical_base));
        Self(data)
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the sequence as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the number of bases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no bases.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the sequence, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NucleotideSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true for the four canonical (uppercase) bases.
pub fn is_canonical_base(b: u8) -> bool {
    matches!(b, b'A' | b'T' | b'G' | b'C')
}

/// Uppercases `text` and drops every character that is not A, T, G or C.
///
/// Never fails and is idempotent.
pub fn sanitize(text: &str) -> NucleotideSequence {
    let data: String = text
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| c.is_ascii() && is_canonical_base(c as u8))
        .collect();
    NucleotideSequence::from_canonical(data)
}

/// Discards every line starting with `>` and concatenates the rest.
///
/// Surrounding whitespace of the result is trimmed; nothing else is
/// filtered.
pub fn extract_fasta_body(text: &str) -> String {
    let body: String = text
        .split('\n')
        .filter(|line| !line.starts_with(FASTA_HEADER_MARKER))
        .collect();
    body.trim().to_string()
}
