//! # codonscope - DNA to protein in the terminal
//!
//! Translates nucleotide sequences into proteins and shows codon-level
//! detail: reading frames, strands, ORFs, codon usage and composition.
//!
//! ## Architecture
//!
//! The translation core is made of pure functions over immutable values:
//! - `sanitize`: canonical A/T/G/C sequences and FASTA bodies
//! - `genetic_code`: the standard code and three-letter names
//! - `codon`: frames, strands, reverse complement and tokenization
//! - `translate`: whole-sequence and framed translation, ORF spans
//! - `analytics`: histograms, molecular weight, base composition
//! - `classify`: sequence-type guess and PDB identifiers in headers
//!
//! Around it sit the collaborators:
//! - `input`: reading files or stdin
//! - `structure`: the structure-prediction boundary
//! - `report`: plain-text output for CLI mode
//! - `model`, `event`, `ui`, `controller`: the interactive viewer
//! - `logging`: file logging
//!
//! ```
//! use codonscope::sanitize::sanitize;
//! use codonscope::translate::translate;
//!
//! let protein = translate(&sanitize("atg aaa tag"));
//! assert_eq!(protein.one_letter, "MK");
//! assert_eq!(protein.three_letter, "Met-Lys");
//! ```

pub mod analytics;
pub mod classify;
pub mod codon;
pub mod controller;
pub mod event;
pub mod genetic_code;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;
pub mod sanitize;
pub mod structure;
pub mod translate;
pub mod ui;
