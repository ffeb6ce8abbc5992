//! Boundary to structure-prediction services.
//!
//! The translator never talks to a network service itself. It builds a
//! [`StructureRequest`], which refuses proteins too short to submit, and
//! hands it to a [`StructurePredictor`]. Predictors return a PDB-format
//! payload.

use thiserror::Error;
use tracing::{debug, warn};

/// Shortest protein accepted for structure prediction.
pub const MIN_STRUCTURE_RESIDUES: usize = 10;

/// Errors raised at the structure-prediction boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StructureError {
    #[error("Protein too short for structure prediction ({length} residues, minimum {minimum})")]
    SequenceTooShort { length: usize, minimum: usize },

    #[error("Structure service unavailable: {0}")]
    Unavailable(String),
}

/// Result type for structure operations.
pub type StructureResult<T> = Result<T, StructureError>;

/// A protein that passed the submission precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureRequest {
    protein: String,
}

impl StructureRequest {
    /// Validates a one-letter protein for submission.
    pub fn new(protein: impl Into<String>) -> StructureResult<Self> {
        let protein = protein.into();
        let length = protein.chars().count();
        if length < MIN_STRUCTURE_RESIDUES {
            warn!(length, "structure request rejected");
            return Err(StructureError::SequenceTooShort {
                length,
                minimum: MIN_STRUCTURE_RESIDUES,
            });
        }
        Ok(Self { protein })
    }

    /// The one-letter protein to submit.
    pub fn protein(&self) -> &str {
        &self.protein
    }
}

/// A service turning a protein sequence into coordinates.
pub trait StructurePredictor {
    /// Returns a PDB-format structure for the request.
    fn predict(&self, request: &StructureRequest) -> StructureResult<String>;
}

/// Alanine dipeptide used when no prediction service is configured.
const PLACEHOLDER_PDB: &str = "\
HEADER    ALA-ALA
ATOM      1  N   ALA A   1       0.000   1.204   0.000  1.00  0.00           N
ATOM      2  CA  ALA A   1       1.458   1.204   0.000  1.00  0.00           C
ATOM      3  C   ALA A   1       2.000  -0.200   0.000  1.00  0.00           C
ATOM      4  O   ALA A   1       1.200  -1.100   0.000  1.00  0.00           O
TER
END
";

/// Offline predictor returning a fixed small peptide.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPredictor;

impl StructurePredictor for PlaceholderPredictor {
    fn predict(&self, request: &StructureRequest) -> StructureResult<String> {
        debug!(residues = request.protein().len(), "returning placeholder structure");
        Ok(PLACEHOLDER_PDB.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_protein_rejected() {
        let result = StructureRequest::new("MKV");
        assert_eq!(
            result,
            Err(StructureError::SequenceTooShort {
                length: 3,
                minimum: MIN_STRUCTURE_RESIDUES
            })
        );
        assert!(StructureRequest::new("").is_err());
    }

    #[test]
    fn test_minimum_length_accepted() {
        let request = StructureRequest::new("MKVLATGWYC").unwrap();
        assert_eq!(request.protein(), "MKVLATGWYC");
    }

    #[test]
    fn test_placeholder_predictor() {
        let request = StructureRequest::new("MKVLATGWYCDE").unwrap();
        let pdb = PlaceholderPredictor.predict(&request).unwrap();
        assert!(pdb.starts_with("HEADER"));
        assert!(pdb.trim_end().ends_with("END"));
        assert_eq!(pdb.lines().filter(|l| l.starts_with("ATOM")).count(), 4);
    }

    #[test]
    fn test_unavailable_message() {
        let err = StructureError::Unavailable("timeout".to_string());
        assert_eq!(err.to_string(), "Structure service unavailable: timeout");
    }

    #[test]
    fn test_error_message() {
        let err = StructureRequest::new("MK").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Protein too short for structure prediction (2 residues, minimum 10)"
        );
    }
}
