//! Codon tokenization.
//!
//! Splits a canonical sequence into frame-aligned, strand-aware triplets.
//! A trailing fragment of one or two bases is never a codon.

use std::borrow::Cow;
use std::fmt;

use crate::genetic_code;
use crate::sanitize::NucleotideSequence;

/// Which strand is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strand {
    #[default]
    Forward,
    /// The reverse complement of the input.
    Reverse,
}

impl Strand {
    /// Returns the other strand.
    pub fn toggled(self) -> Self {
        match self {
            Strand::Forward => Strand::Reverse,
            Strand::Reverse => Strand::Forward,
        }
    }

    /// Conventional one-character symbol (`+` or `-`).
    pub fn symbol(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Reading frame: the number of leading bases skipped before tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Frame {
    #[default]
    Zero,
    One,
    Two,
}

impl Frame {
    /// All frames, in offset order.
    pub const ALL: [Frame; 3] = [Frame::Zero, Frame::One, Frame::Two];

    /// Builds a frame from an offset in `0..=2`.
    pub fn new(offset: u8) -> Option<Self> {
        match offset {
            0 => Some(Frame::Zero),
            1 => Some(Frame::One),
            2 => Some(Frame::Two),
            _ => None,
        }
    }

    /// Number of bases skipped.
    pub fn offset(self) -> usize {
        match self {
            Frame::Zero => 0,
            Frame::One => 1,
            Frame::Two => 2,
        }
    }

    /// Next frame, wrapping from 2 back to 0.
    pub fn next(self) -> Self {
        match self {
            Frame::Zero => Frame::One,
            Frame::One => Frame::Two,
            Frame::Two => Frame::Zero,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset())
    }
}

/// A nucleotide triplet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; 3]);

impl Codon {
    /// Returns the codon as text. Non-UTF-8 content renders as an empty string.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("")
    }

    /// Translates this codon with the standard genetic code.
    pub fn amino_acid(&self) -> char {
        genetic_code::translate_codon(self.as_str())
    }

    /// Returns true for `ATG`.
    pub fn is_start(&self) -> bool {
        genetic_code::is_start_codon(self.as_str())
    }

    /// Returns true for `TAA`, `TAG` and `TGA`.
    pub fn is_stop(&self) -> bool {
        genetic_code::is_stop_codon(self.as_str())
    }
}

impl fmt::Debug for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codon({})", self.as_str())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Codon {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Watson-Crick partner of a canonical base.
fn complement(b: u8) -> Option<u8> {
    match b {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'G' => Some(b'C'),
        b'C' => Some(b'G'),
        _ => None,
    }
}

/// Reverses the sequence and complements each base (A<->T, G<->C).
pub fn reverse_complement(seq: &NucleotideSequence) -> NucleotideSequence {
    let data: String = seq
        .as_bytes()
        .iter()
        .rev()
        .filter_map(|&b| complement(b))
        .map(char::from)
        .collect();
    NucleotideSequence::from_canonical(data)
}

/// Partitions `seq` into consecutive triplets from position 0.
///
/// A final partial triplet is discarded.
pub fn to_codons(seq: &str) -> Vec<Codon> {
    seq.as_bytes()
        .chunks_exact(3)
        .map(|c| Codon([c[0], c[1], c[2]]))
        .collect()
}

/// Orients `seq` for `strand` and drops the first `frame` bases.
pub fn oriented(seq: &NucleotideSequence, frame: Frame, strand: Strand) -> Cow<'_, str> {
    let oriented = match strand {
        Strand::Forward => Cow::Borrowed(seq.as_str()),
        Strand::Reverse => Cow::Owned(reverse_complement(seq).into_string()),
    };
    match oriented {
        Cow::Borrowed(s) => Cow::Borrowed(s.get(frame.offset()..).unwrap_or("")),
        Cow::Owned(s) => Cow::Owned(s.get(frame.offset()..).unwrap_or("").to_string()),
    }
}

/// Tokenizes `seq` into codons for the given frame and strand.
///
/// Reverse strand sequences are reverse-complemented first, then `frame`
/// bases are skipped.
pub fn tokenize(seq: &NucleotideSequence, frame: Frame, strand: Strand) -> Vec<Codon> {
    to_codons(&oriented(seq, frame, strand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::sanitize;

    #[test]
    fn test_to_codons_discards_tail() {
        let codons = to_codons("ATGAAATAGCC");
        assert_eq!(codons, vec!["ATG", "AAA", "TAG"]);
        assert!(to_codons("AT").is_empty());
        assert!(to_codons("").is_empty());
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(&sanitize("ATGC")).as_str(), "GCAT");
        assert_eq!(reverse_complement(&sanitize("AAACCC")).as_str(), "GGGTTT");
        assert!(reverse_complement(&sanitize("")).is_empty());
    }

    #[test]
    fn test_reverse_complement_involution() {
        for input in ["ATGC", "ATGAAATAGCC", "GATTACA", "T"] {
            let seq = sanitize(input);
            assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
        }
    }

    #[test]
    fn test_tokenize_frames() {
        let seq = sanitize("AATGTTTTAG"); // 10 characters
        // Frame 0: AAT GTT TTA G
        assert_eq!(tokenize(&seq, Frame::Zero, Strand::Forward), vec!["AAT", "GTT", "TTA"]);
        // Frame 1: ATG TTT TAG
        assert_eq!(tokenize(&seq, Frame::One, Strand::Forward), vec!["ATG", "TTT", "TAG"]);
        // Frame 2: TGT TTT AG
        assert_eq!(tokenize(&seq, Frame::Two, Strand::Forward), vec!["TGT", "TTT"]);
    }

    #[test]
    fn test_tokenize_reverse() {
        // Reverse complement of CTATTTCAT is ATGAAATAG
        let seq = sanitize("CTATTTCAT");
        assert_eq!(tokenize(&seq, Frame::Zero, Strand::Reverse), vec!["ATG", "AAA", "TAG"]);
        assert_eq!(tokenize(&seq, Frame::One, Strand::Reverse), vec!["TGA", "AAT"]);
    }

    #[test]
    fn test_tokenize_length() {
        let seq = sanitize("ATGCATGCATGCATG"); // 15 bases
        for frame in Frame::ALL {
            for strand in [Strand::Forward, Strand::Reverse] {
                let codons = tokenize(&seq, frame, strand);
                assert_eq!(codons.len(), (seq.len() - frame.offset()) / 3);
            }
        }
    }

    #[test]
    fn test_tokenize_short_sequence() {
        let seq = sanitize("A");
        assert!(tokenize(&seq, Frame::Two, Strand::Forward).is_empty());
        assert!(tokenize(&seq, Frame::Two, Strand::Reverse).is_empty());
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let seq = sanitize("ATGAAACCCGGGTTTTAG");
        assert_eq!(
            tokenize(&seq, Frame::One, Strand::Reverse),
            tokenize(&seq, Frame::One, Strand::Reverse)
        );
    }

    #[test]
    fn test_frame_cycle() {
        assert_eq!(Frame::Zero.next(), Frame::One);
        assert_eq!(Frame::Two.next(), Frame::Zero);
        assert_eq!(Frame::new(2), Some(Frame::Two));
        assert_eq!(Frame::new(3), None);
    }

    #[test]
    fn test_strand_toggle() {
        assert_eq!(Strand::Forward.toggled(), Strand::Reverse);
        assert_eq!(Strand::Reverse.toggled().symbol(), '+');
    }

    #[test]
    fn test_codon_predicates() {
        let codons = to_codons("ATGTGAAAA");
        assert!(codons[0].is_start());
        assert!(codons[1].is_stop());
        assert_eq!(codons[2].amino_acid(), 'K');
        assert_eq!(codons[2].to_string(), "AAA");
    }
}
