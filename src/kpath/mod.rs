//! k-path module: high-symmetry k-points of extended Bravais types.
//!
//! Quick reference
//! - Results: [`KPoint`], [`KPointTable`]
//! - Static data: [`Catalog`], [`BravaisEntry`], [`Catalog::standard_2d`], [`Catalog::standard_3d`]
//! - Parameter planning: [`LatticeParameter`], [`DerivationPlan`], [`DerivationStep`]
//! - Generators: [`KPointGenerator`] (one per type), [`KPointDispatch`] (one per dimension)
//! - Entry point: [`KPointRegistry::get_points`]

// ======================== MODULE DECLARATIONS ========================
pub mod catalog;
mod catalog_2d;
mod catalog_3d;
pub mod dispatch;
pub mod generator;
pub mod high_symmetry_points;
pub mod parameter_planner;
pub mod registry;

mod _tests_dispatch;
mod _tests_parameter_planner;

// ======================== K-POINT TABLES ========================
pub use high_symmetry_points::{
    KPoint,      // struct - labelled position in fractional reciprocal coordinates
    KPointTable, // struct - k-points of one type, declaration order, unique labels
};
// KPointTable impl methods:
//   get(&self, label: &str) -> Option<&DVector<f64>>               - coordinates of a label
//   labels(&self) -> impl Iterator<Item = &str>                     - labels in declaration order
//   cartesianize(&self, reciprocal: &LatticeBasis) -> Result<Vec<KPoint>> - fractional → cartesian

// ======================== CATALOG ========================
pub use catalog::{
    BravaisEntry, // struct - coordinate and derived-parameter formulas of one type
    Catalog,      // struct - all types of one dimension
    EntrySource,  // struct - static text form of an entry
};

// ======================== PARAMETER PLANNING ========================
pub use parameter_planner::{
    DerivationPlan,   // struct - ordered steps computing lattice parameters from a basis
    DerivationStep,   // enum - Norm, Cosine, Sine
    LatticeParameter, // enum - a, b, c, cosβ, sinβ
};

// ======================== GENERATORS & DISPATCH ========================
pub use dispatch::KPointDispatch; // struct - type identifier → generator, per dimension
pub use generator::KPointGenerator; // struct - constant or parameterized k-point generator
pub use registry::KPointRegistry; // struct - 2D and 3D dispatch, get_points entry point
