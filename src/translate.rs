//! Translation of nucleotide sequences into proteins.
//!
//! Two entry points share one walk over a codon stream:
//! - [`translate`] finds the first `ATG` by character search over the
//!   forward sequence and tokenizes from that index, whatever its phase.
//! - [`translate_framed`] tokenizes for a frame and strand first, then
//!   looks for the first `ATG` codon in the codon stream.
//!
//! The two can disagree when a sequence holds start codons in different
//! phases. Both translations stop before the first in-frame stop codon and
//! never emit the stop symbol.

use crate::codon::{to_codons, tokenize, Codon, Frame, Strand};
use crate::genetic_code::{three_letter, START_CODON, STOP};
use crate::sanitize::NucleotideSequence;

/// Separator between three-letter residue names.
pub const THREE_LETTER_SEPARATOR: &str = "-";

/// A translated protein in one-letter and three-letter renderings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Protein {
    /// One-letter symbols, e.g. `MK`
    pub one_letter: String,
    /// Hyphen-joined three-letter names, e.g. `Met-Lys`
    pub three_letter: String,
}

impl Protein {
    /// Builds a protein from one-letter symbols.
    pub fn from_one_letter(one_letter: impl Into<String>) -> Self {
        let one_letter = one_letter.into();
        let three_letter = one_letter
            .chars()
            .map(three_letter)
            .collect::<Vec<_>>()
            .join(THREE_LETTER_SEPARATOR);
        Self {
            one_letter,
            three_letter,
        }
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.one_letter.chars().count()
    }

    /// Returns true when translation produced nothing.
    pub fn is_empty(&self) -> bool {
        self.one_letter.is_empty()
    }
}

/// Coding span of a codon list, in codon indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orf {
    /// Index of the start codon.
    pub start: usize,
    /// Exclusive end of the coding codons.
    pub end: usize,
    /// Index of the terminating stop codon, if one was reached.
    pub stop: Option<usize>,
}

impl Orf {
    /// Number of coding codons (start codon included, stop excluded).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// ORFs from [`find_orf`] hold at least their start codon.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `index` is a coding codon of this ORF.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Finds the first ORF of a codon list.
///
/// Starts at the first `ATG` codon and ends before the first stop codon
/// after it, or at the last codon if none is found.
pub fn find_orf(codons: &[Codon]) -> Option<Orf> {
    let start = codons.iter().position(Codon::is_start)?;
    let stop = codons[start..]
        .iter()
        .position(Codon::is_stop)
        .map(|offset| start + offset);

    Some(Orf {
        start,
        end: stop.unwrap_or(codons.len()),
        stop,
    })
}

/// Walks `codons` from the first one, stopping before a stop codon.
fn translate_codons(codons: &[Codon]) -> Protein {
    let one_letter: String = codons
        .iter()
        .map(Codon::amino_acid)
        .take_while(|&aa| aa != STOP)
        .collect();
    Protein::from_one_letter(one_letter)
}

/// Translates from the first `ATG` anywhere in the forward sequence.
///
/// The start codon is located by character index, then codons are read
/// from that index. No start codon yields an empty protein.
pub fn translate(seq: &NucleotideSequence) -> Protein {
    match seq.as_str().find(START_CODON) {
        Some(start) => translate_codons(&to_codons(&seq.as_str()[start..])),
        None => Protein::default(),
    }
}

/// Translates the first ORF of the codon stream for `frame` and `strand`.
pub fn translate_framed(seq: &NucleotideSequence, frame: Frame, strand: Strand) -> Protein {
    let codons = tokenize(seq, frame, strand);
    translate_orf(&codons, find_orf(&codons))
}

/// Translates the coding codons of `orf`.
///
/// `None`, or a span that does not fit `codons`, yields an empty protein.
pub fn translate_orf(codons: &[Codon], orf: Option<Orf>) -> Protein {
    match orf {
        Some(orf) => translate_codons(codons.get(orf.start..orf.end).unwrap_or_default()),
        None => Protein::default(),
    }
}
