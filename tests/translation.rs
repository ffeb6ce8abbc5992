//! End-to-end checks of the translation core.

use codonscope::analytics::{codon_usage, estimate_molecular_weight_da, BaseComposition};
use codonscope::classify::{classify_sequence_type, extract_header_identifier, SequenceType};
use codonscope::codon::{reverse_complement, to_codons, tokenize, Frame, Strand};
use codonscope::genetic_code::STOP;
use codonscope::sanitize::{extract_fasta_body, sanitize};
use codonscope::translate::{translate, translate_framed};

const SAMPLES: &[&str] = &[
    "",
    "ATG",
    "ATGAAATAG",
    "atgGCCaaaTGAccc",
    "CCATGGTGCATCTGACTCCTGAGGAGAAGTCTGCCGTTACTGCCCTGTGGGGCAAGGTGAACGTGGATTAA",
    "NNNNRYKM--ATG\nCCC\r\nTAA",
    "MKVLATGWYCDE",
];

#[test]
fn test_sanitize_properties() {
    for sample in SAMPLES {
        let seq = sanitize(sample);
        assert_eq!(sanitize(seq.as_str()), seq);
        assert!(seq.as_str().chars().all(|c| "ATGC".contains(c)));
    }
}

#[test]
fn test_tokenize_length_property() {
    for sample in SAMPLES {
        let seq = sanitize(sample);
        for frame in Frame::ALL {
            let expected = seq.len().saturating_sub(frame.offset()) / 3;
            assert_eq!(tokenize(&seq, frame, Strand::Forward).len(), expected);
            assert_eq!(tokenize(&seq, frame, Strand::Reverse).len(), expected);
        }
    }
}

#[test]
fn test_reverse_complement_property() {
    for sample in SAMPLES {
        let seq = sanitize(sample);
        assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
    }
    assert_eq!(reverse_complement(&sanitize("ATGC")).as_str(), "GCAT");
}

#[test]
fn test_translation_never_emits_stop() {
    for sample in SAMPLES {
        let seq = sanitize(sample);
        assert!(!translate(&seq).one_letter.contains(STOP));
        for frame in Frame::ALL {
            for strand in [Strand::Forward, Strand::Reverse] {
                assert!(!translate_framed(&seq, frame, strand).one_letter.contains(STOP));
            }
        }
    }
}

#[test]
fn test_concrete_cases() {
    assert_eq!(translate(&sanitize("ATGAAATAG")).one_letter, "MK");
    assert_eq!(to_codons("ATGAAATAGCC"), vec!["ATG", "AAA", "TAG"]);
    assert_eq!(BaseComposition::of(&sanitize("ATGC")).gc_percent(), 50);
    assert!((estimate_molecular_weight_da("A") - 89.09).abs() < 0.01);
    assert_eq!(classify_sequence_type("ATGCATGCATGC"), SequenceType::Nucleotide);
    assert_eq!(classify_sequence_type("MKVLAT"), SequenceType::AminoAcid);
    assert_eq!(classify_sequence_type(""), SequenceType::Indeterminate);
    assert_eq!(
        extract_header_identifier(">pdb|1T15|Chain A\nATG"),
        Some("1T15".to_string())
    );
    assert_eq!(extract_header_identifier(">sp|P69905|HBA_HUMAN"), None);
}

#[test]
fn test_no_start_codon() {
    let protein = translate(&sanitize("CCCGGGTTTAAA"));
    assert_eq!(protein.one_letter, "");
    assert_eq!(protein.three_letter, "");
}

#[test]
fn test_hemoglobin_fragment() {
    // Human beta-globin start: MVHLTPEEKSAVTALWGKVNVD
    let seq = sanitize(SAMPLES[4]);
    let protein = translate(&seq);
    assert_eq!(protein.one_letter, "MVHLTPEEKSAVTALWGKVNVD");
    assert!(protein.three_letter.starts_with("Met-Val-His-Leu"));
    assert_eq!(translate_framed(&seq, Frame::Two, Strand::Forward), protein);
}

#[test]
fn test_fasta_pipeline() {
    let text = ">pdb|1T15|Chain A\nATGAAA\nTAGCC\n";
    let seq = sanitize(&extract_fasta_body(text));
    assert_eq!(seq.as_str(), "ATGAAATAGCC");
    let usage = codon_usage(&seq, Frame::Zero, Strand::Forward);
    assert_eq!(usage.values().sum::<usize>(), 3);
    assert_eq!(extract_header_identifier(text).as_deref(), Some("1T15"));
}
