//! Sequence statistics.
//!
//! Codon usage and amino-acid composition histograms, an approximate
//! molecular weight, and base composition with GC content.
//!
//! Histograms are `BTreeMap`s so keys come out sorted and only observed
//! symbols are present.

use std::collections::BTreeMap;

use crate::codon::{tokenize, Codon, Frame, Strand};
use crate::sanitize::NucleotideSequence;

/// Average mass of water, in daltons.
pub const WATER_MASS_DA: f64 = 18.015;

/// Counts each distinct codon across the whole tokenized stream.
pub fn codon_usage(
    seq: &NucleotideSequence,
    frame: Frame,
    strand: Strand,
) -> BTreeMap<Codon, usize> {
    let mut usage = BTreeMap::new();
    for codon in tokenize(seq, frame, strand) {
        *usage.entry(codon).or_insert(0) += 1;
    }
    usage
}

/// Counts each amino-acid symbol of a one-letter protein.
pub fn amino_acid_composition(protein: &str) -> BTreeMap<char, usize> {
    let mut composition = BTreeMap::new();
    for aa in protein.chars() {
        *composition.entry(aa).or_insert(0) += 1;
    }
    composition
}

/// Average mass of a free amino acid, in daltons.
pub fn residue_mass_da(aa: char) -> Option<f64> {
    let mass = match aa {
        'A' => 89.09,
        'R' => 174.20,
        'N' => 132.12,
        'D' => 133.10,
        'C' => 121.16,
        'Q' => 146.15,
        'E' => 147.13,
        'G' => 75.07,
        'H' => 155.16,
        'I' => 131.18,
        'L' => 131.18,
        'K' => 146.19,
        'M' => 149.21,
        'F' => 165.19,
        'P' => 115.13,
        'S' => 105.09,
        'T' => 119.12,
        'W' => 204.23,
        'Y' => 181.19,
        'V' => 117.15,
        _ => return None,
    };
    Some(mass)
}

/// Approximate molecular weight of a one-letter protein, in daltons.
///
/// Each recognised residue contributes its mass minus one water (peptide
/// bond condensation); one water is added back for the termini.
/// Unrecognised symbols contribute nothing. A protein with no recognised
/// residue weighs 0, not one water mass, so an empty translation reports
/// zero like every other statistic.
pub fn estimate_molecular_weight_da(protein: &str) -> f64 {
    let residues: Vec<f64> = protein.chars().filter_map(residue_mass_da).collect();
    if residues.is_empty() {
        return 0.0;
    }
    residues.iter().map(|mass| mass - WATER_MASS_DA).sum::<f64>() + WATER_MASS_DA
}

/// Base counts of a canonical sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseComposition {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
    /// Total length of the sequence
    pub length: usize,
}

impl BaseComposition {
    /// Counts bases in a single pass.
    pub fn of(seq: &NucleotideSequence) -> Self {
        let mut counts = Self {
            length: seq.len(),
            ..Self::default()
        };
        for &b in seq.as_bytes() {
            match b {
                b'A' => counts.a += 1,
                b'T' => counts.t += 1,
                b'G' => counts.g += 1,
                b'C' => counts.c += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn gc_count(&self) -> usize {
        self.g + self.c
    }

    pub fn at_count(&self) -> usize {
        self.a + self.t
    }

    /// GC content as a rounded percentage; 0 for an empty sequence.
    pub fn gc_percent(&self) -> u32 {
        if self.length == 0 {
            return 0;
        }
        (100.0 * self.gc_count() as f64 / self.length as f64).round() as u32
    }

    /// Count of a base by letter; 0 for anything else.
    pub fn count(&self, base: char) -> usize {
        match base {
            'A' => self.a,
            'T' => self.t,
            'G' => self.g,
            'C' => self.c,
            _ => 0,
        }
    }

    /// Share of `base` in the sequence, in `0.0..=1.0`.
    pub fn fraction(&self, base: char) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.count(base) as f64 / self.length as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::sanitize;

    #[test]
    fn test_codon_usage_whole_stream() {
        // Counts codons after the stop too.
        let usage = codon_usage(&sanitize("ATGAAATAGAAA"), Frame::Zero, Strand::Forward);
        let as_text: Vec<(String, usize)> =
            usage.iter().map(|(c, n)| (c.to_string(), *n)).collect();
        assert_eq!(
            as_text,
            vec![
                ("AAA".to_string(), 2),
                ("ATG".to_string(), 1),
                ("TAG".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_codon_usage_empty() {
        assert!(codon_usage(&sanitize(""), Frame::One, Strand::Reverse).is_empty());
    }

    #[test]
    fn test_amino_acid_composition() {
        let composition = amino_acid_composition("MKKL");
        assert_eq!(composition.get(&'K'), Some(&2));
        assert_eq!(composition.get(&'M'), Some(&1));
        assert_eq!(composition.get(&'A'), None);
        assert_eq!(composition.len(), 3);
        assert!(amino_acid_composition("").is_empty());
    }

    #[test]
    fn test_molecular_weight_single_residue() {
        assert!((estimate_molecular_weight_da("A") - 89.09).abs() < 1e-9);
    }

    #[test]
    fn test_molecular_weight_dipeptide() {
        // Gly-Gly: 2 * 75.07 - 18.015
        assert!((estimate_molecular_weight_da("GG") - 132.125).abs() < 1e-9);
    }

    #[test]
    fn test_molecular_weight_ignores_unknown() {
        assert_eq!(
            estimate_molecular_weight_da("M?K"),
            estimate_molecular_weight_da("MK")
        );
        assert_eq!(estimate_molecular_weight_da(""), 0.0);
        assert_eq!(estimate_molecular_weight_da("??"), 0.0);
    }

    #[test]
    fn test_molecular_weight_monotonic() {
        let protein = "MKVLATGWYCDEFHINPQRS";
        let mut previous = 0.0;
        for end in 0..=protein.len() {
            let weight = estimate_molecular_weight_da(&protein[..end]);
            assert!(weight >= previous);
            previous = weight;
        }
    }

    #[test]
    fn test_base_composition() {
        let bases = BaseComposition::of(&sanitize("ATGC"));
        assert_eq!(bases.a, 1);
        assert_eq!(bases.gc_count(), 2);
        assert_eq!(bases.at_count(), 2);
        assert_eq!(bases.gc_percent(), 50);
        assert!((bases.fraction('G') - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_gc_percent_rounding_and_empty() {
        assert_eq!(BaseComposition::of(&sanitize("GGA")).gc_percent(), 67);
        assert_eq!(BaseComposition::of(&sanitize("")).gc_percent(), 0);
        assert_eq!(BaseComposition::of(&sanitize("")).fraction('A'), 0.0);
    }
}
