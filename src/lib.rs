//! High-symmetry k-points for extended Bravais lattice types
//!
//! This library turns symbolic per-type k-point formulas into generators that are
//! built once and evaluated against a lattice basis on demand.

pub mod config;
pub mod error;
pub mod formula;
pub mod interfaces;
pub mod kpath;
pub mod lattice;

pub use error::{KPathError, PlanError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
