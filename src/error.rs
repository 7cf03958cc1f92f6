//! Error types for catalog construction and k-point generation.
//!
//! Build-time errors (`Parse`, `Shape`, `Specification`, `InvalidEntry`, `DuplicateType`)
//! mean the catalog itself is malformed. Call-time errors (`MissingBasis`, `UnknownType`,
//! `DimensionMismatch`, `SpaceMismatch`, `InvalidBasis`, `UnboundParameter`) are
//! recoverable by the caller.

use thiserror::Error;

use crate::interfaces::{Dimension, Space};

/// Failures of the parameter derivation planner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("unknown lattice parameter `{0}`")]
    UnknownSymbol(String),

    #[error("lattice parameter `{symbol}` is not available in {dimension}")]
    OutOfDimension { symbol: String, dimension: Dimension },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KPathError {
    #[error("failed to parse formula `{formula}`: {reason}")]
    Parse { formula: String, reason: String },

    #[error("ill-shaped formula: {0}")]
    Shape(String),

    #[error("malformed catalog entry for `{type_id}`: {source}")]
    Specification {
        type_id: String,
        #[source]
        source: PlanError,
    },

    #[error("malformed catalog entry for `{type_id}`: {reason}")]
    InvalidEntry { type_id: String, reason: String },

    #[error("extended Bravais type `{type_id}` appears twice in the {dimension} catalog")]
    DuplicateType { type_id: String, dimension: Dimension },

    #[error("a lattice basis is required to construct the k-path of extended Bravais type `{type_id}`")]
    MissingBasis { type_id: String },

    #[error("unrecognized {dimension} extended Bravais type `{type_id}`")]
    UnknownType { type_id: String, dimension: Dimension },

    #[error("expected a {expected} basis, got a {found} basis")]
    DimensionMismatch { expected: Dimension, found: Dimension },

    #[error("expected a basis in {expected:?} space, got {found:?} space")]
    SpaceMismatch { expected: Space, found: Space },

    #[error("invalid lattice basis: {0}")]
    InvalidBasis(String),

    #[error("parameter `{0}` has no value")]
    UnboundParameter(String),
}

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, KPathError>;
