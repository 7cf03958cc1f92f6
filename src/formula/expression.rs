use std::collections::HashMap;
use std::fmt;

use crate::error::{KPathError, Result};

/// Named parameter values used when evaluating a [`Formula`].
pub type Bindings = HashMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Sqrt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

/// Symbolic expression over lattice parameters and numeric literals.
///
/// Coordinate formulas evaluate to a vector, parameter formulas to a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    Constant(f64),
    Parameter(String),
    Vector(Vec<Formula>),
    Unary(UnaryOp, Box<Formula>),
    Binary(BinaryOp, Box<Formula>, Box<Formula>),
}

/// Result of evaluating a [`Formula`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// Static shape of a formula, known without any bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Vector(usize),
}

impl Formula {
    pub fn constant(value: f64) -> Self {
        Formula::Constant(value)
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Formula::Parameter(name.into())
    }

    pub fn vector(components: Vec<Formula>) -> Self {
        Formula::Vector(components)
    }

    pub fn unary(op: UnaryOp, operand: Formula) -> Self {
        Formula::Unary(op, Box::new(operand))
    }

    pub fn binary(op: BinaryOp, lhs: Formula, rhs: Formula) -> Self {
        Formula::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Infer the shape of the formula, rejecting ill-typed vector arithmetic.
    pub fn shape(&self) -> Result<Shape> {
        match self {
            Formula::Constant(_) | Formula::Parameter(_) => Ok(Shape::Scalar),
            Formula::Vector(components) => {
                for component in components {
                    if component.shape()? != Shape::Scalar {
                        return Err(KPathError::Shape(format!(
                            "nested vector in vector literal `{self}`"
                        )));
                    }
                }
                Ok(Shape::Vector(components.len()))
            }
            Formula::Unary(UnaryOp::Neg, operand) => operand.shape(),
            Formula::Unary(UnaryOp::Sqrt, operand) => match operand.shape()? {
                Shape::Scalar => Ok(Shape::Scalar),
                Shape::Vector(_) => Err(KPathError::Shape(format!(
                    "square root of a vector in `{self}`"
                ))),
            },
            Formula::Binary(op, lhs, rhs) => combine_shapes(*op, lhs.shape()?, rhs.shape()?)
                .ok_or_else(|| {
                    KPathError::Shape(format!("operands of `{}` do not combine in `{self}`", op.symbol()))
                }),
        }
    }

    /// Evaluate the formula with the given parameter values.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<Value> {
        match self {
            Formula::Constant(value) => Ok(Value::Scalar(*value)),
            Formula::Parameter(name) => bindings
                .get(name)
                .copied()
                .map(Value::Scalar)
                .ok_or_else(|| KPathError::UnboundParameter(name.clone())),
            Formula::Vector(components) => components
                .iter()
                .map(|component| component.evaluate_scalar(bindings))
                .collect::<Result<Vec<_>>>()
                .map(Value::Vector),
            Formula::Unary(op, operand) => {
                let value = operand.evaluate(bindings)?;
                match (op, value) {
                    (UnaryOp::Neg, Value::Scalar(x)) => Ok(Value::Scalar(-x)),
                    (UnaryOp::Neg, Value::Vector(v)) => {
                        Ok(Value::Vector(v.into_iter().map(|x| -x).collect()))
                    }
                    (UnaryOp::Sqrt, Value::Scalar(x)) => Ok(Value::Scalar(x.sqrt())),
                    (UnaryOp::Sqrt, Value::Vector(_)) => Err(KPathError::Shape(format!(
                        "square root of a vector in `{self}`"
                    ))),
                }
            }
            Formula::Binary(op, lhs, rhs) => {
                apply_binary(*op, lhs.evaluate(bindings)?, rhs.evaluate(bindings)?).ok_or_else(
                    || {
                        KPathError::Shape(format!(
                            "operands of `{}` do not combine in `{self}`",
                            op.symbol()
                        ))
                    },
                )
            }
        }
    }

    pub fn evaluate_scalar(&self, bindings: &Bindings) -> Result<f64> {
        match self.evaluate(bindings)? {
            Value::Scalar(x) => Ok(x),
            Value::Vector(_) => Err(KPathError::Shape(format!(
                "expected a scalar, `{self}` is a vector"
            ))),
        }
    }

    pub fn evaluate_vector(&self, bindings: &Bindings) -> Result<Vec<f64>> {
        match self.evaluate(bindings)? {
            Value::Vector(v) => Ok(v),
            Value::Scalar(_) => Err(KPathError::Shape(format!(
                "expected a vector, `{self}` is a scalar"
            ))),
        }
    }
}

fn combine_shapes(op: BinaryOp, lhs: Shape, rhs: Shape) -> Option<Shape> {
    use Shape::*;
    match (op, lhs, rhs) {
        (_, Scalar, Scalar) => Some(Scalar),
        (BinaryOp::Add | BinaryOp::Sub, Vector(n), Vector(m)) if n == m => Some(Vector(n)),
        (BinaryOp::Mul, Scalar, Vector(n)) | (BinaryOp::Mul, Vector(n), Scalar) => Some(Vector(n)),
        (BinaryOp::Div, Vector(n), Scalar) => Some(Vector(n)),
        _ => None,
    }
}

fn apply_scalar(op: BinaryOp, x: f64, y: f64) -> f64 {
    match op {
        BinaryOp::Add => x + y,
        BinaryOp::Sub => x - y,
        BinaryOp::Mul => x * y,
        BinaryOp::Div => x / y,
        BinaryOp::Pow => {
            // powi keeps a^2, sinβ^2 exact
            if y.fract() == 0.0 && y.abs() <= i32::MAX as f64 {
                x.powi(y as i32)
            } else {
                x.powf(y)
            }
        }
    }
}

fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Option<Value> {
    match (lhs, rhs) {
        (Value::Scalar(x), Value::Scalar(y)) => Some(Value::Scalar(apply_scalar(op, x, y))),
        (Value::Vector(u), Value::Vector(v)) => match op {
            BinaryOp::Add | BinaryOp::Sub if u.len() == v.len() => Some(Value::Vector(
                u.iter().zip(&v).map(|(x, y)| apply_scalar(op, *x, *y)).collect(),
            )),
            _ => None,
        },
        (Value::Scalar(s), Value::Vector(v)) => match op {
            BinaryOp::Mul => Some(Value::Vector(v.into_iter().map(|x| s * x).collect())),
            _ => None,
        },
        (Value::Vector(v), Value::Scalar(s)) => match op {
            BinaryOp::Mul | BinaryOp::Div => Some(Value::Vector(
                v.into_iter().map(|x| apply_scalar(op, x, s)).collect(),
            )),
            _ => None,
        },
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Constant(value) => write!(f, "{value}"),
            Formula::Parameter(name) => write!(f, "{name}"),
            Formula::Vector(components) => {
                write!(f, "[")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{component}")?;
                }
                write!(f, "]")
            }
            Formula::Unary(UnaryOp::Neg, operand) => write!(f, "-({operand})"),
            Formula::Unary(UnaryOp::Sqrt, operand) => write!(f, "sqrt({operand})"),
            Formula::Binary(op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}
