//! Derivation of lattice shape parameters from a direct basis.
//!
//! The closed vocabulary is {a, b, c, cosβ, sinβ}; 2D lattices only know {a, b}.
//! a, b, c are the norms of R₁, R₂, R₃ and β is the angle between R₃ and R₁, taken in [0, π].

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{KPathError, PlanError, Result};
use crate::formula::Bindings;
use crate::interfaces::Dimension;
use crate::lattice::LatticeBasis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LatticeParameter {
    A,
    B,
    C,
    CosBeta,
    SinBeta,
}

impl LatticeParameter {
    pub const ALL: [LatticeParameter; 5] = [
        LatticeParameter::A,
        LatticeParameter::B,
        LatticeParameter::C,
        LatticeParameter::CosBeta,
        LatticeParameter::SinBeta,
    ];

    /// Symbol used for the parameter in catalog formulas
    pub fn symbol(&self) -> &'static str {
        match self {
            LatticeParameter::A => "a",
            LatticeParameter::B => "b",
            LatticeParameter::C => "c",
            LatticeParameter::CosBeta => "cosβ",
            LatticeParameter::SinBeta => "sinβ",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.symbol() == symbol)
    }

    pub fn is_available_in(&self, dimension: Dimension) -> bool {
        match self {
            LatticeParameter::A | LatticeParameter::B => true,
            LatticeParameter::C | LatticeParameter::CosBeta | LatticeParameter::SinBeta => {
                dimension == Dimension::_3D
            }
        }
    }
}

impl fmt::Display for LatticeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One step of a [`DerivationPlan`]; later steps may read the results of earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationStep {
    /// `target = |R_axis|` (zero-based axis)
    Norm {
        target: LatticeParameter,
        axis: usize,
    },
    /// `target = (R_first · R_second) / (lengths.0 · lengths.1)`, clamped to [-1, 1]
    Cosine {
        target: LatticeParameter,
        axes: (usize, usize),
        lengths: (LatticeParameter, LatticeParameter),
    },
    /// `target = sqrt(1 - cosine²)`, non-negative since the angle lies in [0, π]
    Sine {
        target: LatticeParameter,
        cosine: LatticeParameter,
    },
}

impl DerivationStep {
    pub fn target(&self) -> LatticeParameter {
        match self {
            DerivationStep::Norm { target, .. }
            | DerivationStep::Cosine { target, .. }
            | DerivationStep::Sine { target, .. } => *target,
        }
    }
}

/// Ordered list of steps computing the lattice parameters a catalog entry needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPlan {
    dimension: Dimension,
    steps: Vec<DerivationStep>,
}

impl DerivationPlan {
    /// Plan the derivation of `required` symbols for a basis of the given dimension.
    ///
    /// `cosβ` and `sinβ` are always derived together, and pull in `a` and `c`.
    pub fn new<'a>(
        required: impl IntoIterator<Item = &'a str>,
        dimension: Dimension,
    ) -> std::result::Result<Self, PlanError> {
        let mut wanted = BTreeSet::new();
        for symbol in required {
            let parameter = LatticeParameter::from_symbol(symbol)
                .ok_or_else(|| PlanError::UnknownSymbol(symbol.to_string()))?;
            if !parameter.is_available_in(dimension) {
                return Err(PlanError::OutOfDimension {
                    symbol: symbol.to_string(),
                    dimension,
                });
            }
            wanted.insert(parameter);
        }

        let needs_beta = wanted.contains(&LatticeParameter::CosBeta)
            || wanted.contains(&LatticeParameter::SinBeta);
        if needs_beta {
            wanted.insert(LatticeParameter::A);
            wanted.insert(LatticeParameter::C);
        }

        let mut steps = Vec::with_capacity(wanted.len());
        for (target, axis) in [
            (LatticeParameter::A, 0),
            (LatticeParameter::B, 1),
            (LatticeParameter::C, 2),
        ] {
            if wanted.contains(&target) {
                steps.push(DerivationStep::Norm { target, axis });
            }
        }
        if needs_beta {
            steps.push(DerivationStep::Cosine {
                target: LatticeParameter::CosBeta,
                axes: (2, 0),
                lengths: (LatticeParameter::A, LatticeParameter::C),
            });
            steps.push(DerivationStep::Sine {
                target: LatticeParameter::SinBeta,
                cosine: LatticeParameter::CosBeta,
            });
        }

        Ok(Self { dimension, steps })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn steps(&self) -> &[DerivationStep] {
        &self.steps
    }

    /// Parameters this plan computes, in evaluation order
    pub fn parameters(&self) -> impl Iterator<Item = LatticeParameter> + '_ {
        self.steps.iter().map(DerivationStep::target)
    }

    /// True when the entry needs nothing from the basis.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step against `basis`, returning the computed values keyed by symbol.
    pub fn execute(&self, basis: &LatticeBasis) -> Result<Bindings> {
        if basis.dimension() != self.dimension {
            return Err(KPathError::DimensionMismatch {
                expected: self.dimension,
                found: basis.dimension(),
            });
        }

        let mut values = Bindings::with_capacity(self.steps.len());
        let lookup = |values: &Bindings, parameter: LatticeParameter| {
            values
                .get(parameter.symbol())
                .copied()
                .ok_or_else(|| KPathError::UnboundParameter(parameter.symbol().to_string()))
        };

        for step in &self.steps {
            let value = match *step {
                DerivationStep::Norm { axis, .. } => basis.norm(axis),
                DerivationStep::Cosine { axes, lengths, .. } => {
                    let denominator = lookup(&values, lengths.0)? * lookup(&values, lengths.1)?;
                    (basis.dot(axes.0, axes.1) / denominator).clamp(-1.0, 1.0)
                }
                DerivationStep::Sine { cosine, .. } => {
                    let cosine = lookup(&values, cosine)?;
                    (1.0 - cosine * cosine).max(0.0).sqrt()
                }
            };
            values.insert(step.target().symbol().to_string(), value);
        }

        Ok(values)
    }
}
