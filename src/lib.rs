//! # Idempotent-Rig: the free idempotent rig on two generators
//!
//! This library enumerates the elements of the idempotent rig generated by
//! two non-commuting generators `a` and `b`. Every formal sum over the seven
//! monomials `1, a, b, ab, ba, aba, bab` reduces to one of 4^7 = 16384
//! coefficient tuples; the rig itself is the coarsest quotient of those
//! tuples in which every element equals its own square and both operations
//! stay well defined.
//!
//! ## Features
//!
//! - **Algebra**: monomial table, coefficient collapse, tuple arithmetic
//! - **Tables**: dense product and sum tables built in parallel
//! - **Partition**: seeding by squares and congruence closure
//! - **Reporting**: deterministic text artifact rewritten after every merge

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Monomials, coefficient tuples and canonical elements
pub mod algebra;

/// Product and sum lookup tables
pub mod tables;

/// Equivalence classes and the congruence closure engine
pub mod partition;

/// Text rendering and checkpoint persistence
pub mod report;

/// Run configuration, diagnostics and the end-to-end driver
pub mod core;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use algebra::{Element, Monomial, Tuple, ELEMENT_COUNT};
pub use tables::{Operations, OperationTables, DirectAlgebra};
pub use partition::{Partition, PartitionEngine, Defect, ClosureSummary};
pub use report::{render_partition, Checkpoint};
pub use crate::core::{RunConfig, RunStats, TableMode, run};

use std::path::PathBuf;

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    /// A partition or table invariant failed; this is a logic defect
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The checkpoint artifact could not be written
    #[error("Checkpoint error for {}: {source}", path.display())]
    Checkpoint {
        /// Target path of the artifact
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration rejected before the run starts
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dense table shape mismatch
    #[error("Table shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RigError {
    /// Whether the error must abort the run
    ///
    /// Checkpoint failures are recovered by writing to the console instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RigError::Checkpoint { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, RigError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        algebra::{Element, Monomial, Tuple, ELEMENT_COUNT},
        tables::{Operations, OperationTables, DirectAlgebra},
        partition::{Partition, PartitionEngine, Defect, DefectKind, ClosureSummary, MergeEvent},
        report::{render_partition, Checkpoint, CheckpointOutcome},
        core::{RunConfig, RunStats, TableMode},
        Result, RigError,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let invariant = RigError::InvariantViolation("eqc mismatch".to_string());
        assert!(invariant.is_fatal());
        assert_eq!(invariant.to_string(), "Invariant violation: eqc mismatch");

        let sink = RigError::Checkpoint {
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!sink.is_fatal());
        assert!(sink.to_string().starts_with("Checkpoint error for /nope/out.txt"));
    }
}
