//! Lattice module: validated direct and reciprocal lattice bases.
//!
//! Quick reference
//! - Types: [`LatticeBasis`]
//! - Construction: [`LatticeBasis::direct_2d`], [`LatticeBasis::direct_3d`], [`LatticeBasis::from_base_vectors`]
//! - Transforms: [`LatticeBasis::reciprocal`]

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_basis;

// Test modules
mod _tests_lattice_basis;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use lattice_basis::LatticeBasis;
