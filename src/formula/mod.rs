//! Formula module: symbolic k-point and lattice-parameter formulas.
//!
//! Quick reference
//! - AST: [`Formula`], [`UnaryOp`], [`BinaryOp`], evaluated to a [`Value`] against [`Bindings`]
//! - Text form: [`parse_formula`]
//! - Dependency analysis: [`free_parameters`], [`free_parameters_of`]

// ======================== MODULE DECLARATIONS ========================
pub mod dependencies;
pub mod expression;
pub mod parser;


// ======================== RE-EXPORTED PUBLIC API ========================
pub use expression::{
    BinaryOp, // enum - Add, Sub, Mul, Div, Pow
    Bindings, // type - HashMap<String, f64> of parameter values
    Formula,  // enum - Constant, Parameter, Vector, Unary, Binary
    Shape,    // enum - static shape (Scalar or Vector(n))
    UnaryOp,  // enum - Neg, Sqrt
    Value,    // enum - evaluated Scalar or Vector
};

pub use parser::parse_formula; // fn(source: &str) -> Result<Formula>

pub use dependencies::{
    free_parameters,    // fn(formula: &Formula) -> BTreeSet<String>
    free_parameters_of, // fn(formulas) -> BTreeSet<String> - union over several formulas
};
