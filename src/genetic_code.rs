//! The standard genetic code.
//!
//! This module provides:
//! - Codon to one-letter amino acid translation
//! - One-letter to three-letter amino acid names
//! - Start/stop codon predicates
//!
//! The table is a constant, so lookups need no initialisation and there is
//! no way to mutate it.

/// One-letter symbol of the stop signal.
pub const STOP: char = '*';

/// One-letter symbol returned for malformed or incomplete codons.
pub const UNKNOWN: char = '?';

/// Three-letter placeholder for symbols without a name.
pub const UNKNOWN_THREE_LETTER: &str = "???";

/// The start codon (methionine).
pub const START_CODON: &str = "ATG";

/// The three stop codons of the standard code.
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Standard code (NCBI table 1) in NCBI order: TTT, TTC, TTA, TTG, TCT, ...
/// with bases enumerated as T, C, A, G.
const STANDARD_NCBIEAA: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// The 20 standard amino acids, in one-letter form.
pub const AMINO_ACIDS: [char; 20] = [
    'A', 'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W',
    'Y', 'V',
];

/// Position of a base in NCBI order.
fn base_index(b: u8) -> Option<usize> {
    match b {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Translates a single codon to a one-letter amino acid.
///
/// # Rules:
/// - The 64 codons over `A`, `C`, `G`, `T` follow the standard code
/// - `TAA`, `TAG`, `TGA` return [`STOP`]
/// - Anything else (wrong length, lowercase, ambiguity codes, `U`)
///   returns [`UNKNOWN`]
pub fn translate_codon(codon: &str) -> char {
    let bytes = codon.as_bytes();
    if bytes.len() != 3 {
        return UNKNOWN;
    }

    let mut idx = 0;
    for &b in bytes {
        match base_index(b) {
            Some(i) => idx = idx * 4 + i,
            None => return UNKNOWN,
        }
    }

    STANDARD_NCBIEAA[idx] as char
}

/// Returns the three-letter name of a one-letter amino acid symbol.
///
/// The stop symbol maps to `Stop`; everything unrecognised maps to
/// [`UNKNOWN_THREE_LETTER`].
pub fn three_letter(aa: char) -> &'static str {
    match aa {
        'A' => "Ala",
        'R' => "Arg",
        'N' => "Asn",
        'D' => "Asp",
        'C' => "Cys",
        'Q' => "Gln",
        'E' => "Glu",
        'G' => "Gly",
        'H' => "His",
        'I' => "Ile",
        'L' => "Leu",
        'K' => "Lys",
        'M' => "Met",
        'F' => "Phe",
        'P' => "Pro",
        'S' => "Ser",
        'T' => "Thr",
        'W' => "Trp",
        'Y' => "Tyr",
        'V' => "Val",
        STOP => "Stop",
        _ => UNKNOWN_THREE_LETTER,
    }
}

/// Returns true if `codon` is the start codon.
pub fn is_start_codon(codon: &str) -> bool {
    codon == START_CODON
}

/// Returns true if `codon` is one of the stop codons.
pub fn is_stop_codon(codon: &str) -> bool {
    translate_codon(codon) == STOP
}
