//! Plain-text translation report (CLI mode).

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::analytics::{
    amino_acid_composition, codon_usage, estimate_molecular_weight_da, BaseComposition,
};
use crate::classify::{classify_sequence_type, extract_header_identifier, SequenceType};
use crate::codon::{tokenize, Codon, Frame, Strand};
use crate::input::RawInput;
use crate::structure::{PlaceholderPredictor, StructurePredictor, StructureRequest, StructureResult};
use crate::translate::{find_orf, translate, translate_orf, Orf, Protein};

/// Everything computed for one input.
#[derive(Debug)]
pub struct Report {
    pub frame: Frame,
    pub strand: Strand,
    pub bases: BaseComposition,
    /// Guess made on the unsanitized body, headers excluded
    pub sequence_type: SequenceType,
    pub identifier: Option<String>,
    /// Translation from the first ATG of the forward sequence
    pub whole: Protein,
    /// Translation of the first ORF in the selected frame and strand
    pub framed: Protein,
    pub codon_count: usize,
    pub orf: Option<Orf>,
    pub usage: BTreeMap<Codon, usize>,
    pub composition: BTreeMap<char, usize>,
    pub molecular_weight_da: f64,
    /// PDB payload from the structure predictor, or why none was requested
    pub structure: StructureResult<String>,
}

impl Report {
    /// Runs the whole pipeline on `raw` with the offline structure predictor.
    pub fn build(raw: &RawInput, frame: Frame, strand: Strand) -> Self {
        Self::build_with(raw, frame, strand, &PlaceholderPredictor)
    }

    /// Runs the whole pipeline on `raw`, asking `predictor` for a structure
    /// when the framed protein is long enough.
    pub fn build_with<P: StructurePredictor>(
        raw: &RawInput,
        frame: Frame,
        strand: Strand,
        predictor: &P,
    ) -> Self {
        let sequence_type = classify_sequence_type(&raw.body());
        let identifier = extract_header_identifier(&raw.text);
        let seq = raw.sequence();

        let codons = tokenize(&seq, frame, strand);
        let orf = find_orf(&codons);
        let framed = translate_orf(&codons, orf);

        Self {
            frame,
            strand,
            bases: BaseComposition::of(&seq),
            sequence_type,
            identifier,
            whole: translate(&seq),
            codon_count: codons.len(),
            orf,
            usage: codon_usage(&seq, frame, strand),
            composition: amino_acid_composition(&framed.one_letter),
            molecular_weight_da: estimate_molecular_weight_da(&framed.one_letter),
            structure: StructureRequest::new(framed.one_letter.clone())
                .and_then(|request| predictor.predict(&request)),
            framed,
        }
    }

    /// Renders the report, wrapping protein lines to `width` columns.
    pub fn render(&self, three_letter: bool, width: usize) -> String {
        let mut out = String::new();
        let protein_text = |protein: &Protein| -> String {
            if protein.is_empty() {
                return "(no start codon)".to_string();
            }
            let text = if three_letter {
                &protein.three_letter
            } else {
                &protein.one_letter
            };
            textwrap::fill(text, width.max(20))
        };

        let b = &self.bases;
        let _ = writeln!(
            out,
            "Sequence: {} nt | GC {}% | A {} T {} G {} C {}",
            b.length,
            b.gc_percent(),
            b.a,
            b.t,
            b.g,
            b.c
        );
        let _ = writeln!(out, "Type: {}", self.sequence_type);
        if self.sequence_type == SequenceType::AminoAcid {
            let _ = writeln!(
                out,
                "Warning: input looks like a protein sequence, not DNA"
            );
        }
        if let Some(id) = &self.identifier {
            let _ = writeln!(out, "PDB identifier: {}", id);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Translation (first ATG, forward strand):");
        let _ = writeln!(out, "{}", protein_text(&self.whole));
        let _ = writeln!(
            out,
            "Translation (frame {}, strand {}):",
            self.frame, self.strand
        );
        let _ = writeln!(out, "{}", protein_text(&self.framed));

        match self.orf {
            Some(orf) => {
                let stop = match orf.stop {
                    Some(stop) => format!("stop at codon {}", stop + 1),
                    None => "no stop codon".to_string(),
                };
                let _ = writeln!(
                    out,
                    "ORF: codons {}-{} of {} ({})",
                    orf.start + 1,
                    orf.end,
                    self.codon_count,
                    stop
                );
            }
            None => {
                let _ = writeln!(out, "ORF: none ({} codons)", self.codon_count);
            }
        }
        let _ = writeln!(
            out,
            "Length: {} aa | MW ~ {:.2} kDa",
            self.framed.len(),
            self.molecular_weight_da / 1000.0
        );
        match &self.structure {
            Ok(pdb) => {
                let atoms = pdb.lines().filter(|l| l.starts_with("ATOM")).count();
                let _ = writeln!(out, "Structure prediction: {} atoms", atoms);
            }
            Err(e) => {
                let _ = writeln!(out, "Structure prediction: {}", e);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Codon usage (frame {}, strand {}):",
            self.frame, self.strand
        );
        for (codon, count) in &self.usage {
            let _ = writeln!(out, "  {} {:>5}", codon, count);
        }
        let _ = writeln!(out, "Amino-acid composition:");
        for (aa, count) in &self.composition {
            let _ = writeln!(out, "  {} {:>5}", aa, count);
        }

        out
    }
}
