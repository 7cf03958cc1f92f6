// Constants

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // For validation of lattice bases
pub const UNIT_CIRCLE_TOLERANCE: f64 = 1e-9; // sin²β + cos²β = 1 checks
