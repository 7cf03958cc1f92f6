use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;
use nalgebra::DVector;

use super::catalog::BravaisEntry;
use super::high_symmetry_points::{KPoint, KPointTable};
use super::parameter_planner::{DerivationPlan, LatticeParameter};
use crate::error::{KPathError, Result};
use crate::formula::{free_parameters_of, Bindings, Formula};
use crate::interfaces::Dimension;
use crate::lattice::LatticeBasis;

/// Compiled k-point generator of one extended Bravais type.
///
/// Built once from a catalog entry and immutable afterwards.
#[derive(Debug, Clone)]
pub struct KPointGenerator {
    type_id: String,
    dimension: Dimension,
    kind: GeneratorKind,
}

#[derive(Debug, Clone)]
enum GeneratorKind {
    /// Evaluated once at build time; the basis is ignored.
    Constant(Arc<KPointTable>),
    /// Evaluated on every call against the caller's basis.
    Parameterized {
        plan: DerivationPlan,
        parameters: Vec<(String, Formula)>,
        points: Vec<(String, Formula)>,
    },
}

impl KPointGenerator {
    /// Validate `entry`, plan its lattice parameters and pick the constant or
    /// parameterized evaluation strategy.
    pub fn synthesize(type_id: &str, dimension: Dimension, entry: &BravaisEntry) -> Result<Self> {
        entry.validate(type_id, dimension)?;

        let derived: BTreeSet<&str> = entry.parameters().iter().map(|(name, _)| name.as_str()).collect();
        let referenced = free_parameters_of(
            entry
                .points()
                .iter()
                .chain(entry.parameters())
                .map(|(_, formula)| formula),
        );
        let plan = DerivationPlan::new(
            referenced
                .iter()
                .map(String::as_str)
                .filter(|name| !derived.contains(name)),
            dimension,
        )
        .map_err(|source| KPathError::Specification {
            type_id: type_id.to_string(),
            source,
        })?;

        let kind = if plan.is_empty() {
            let table = evaluate_table(dimension, Bindings::new(), entry.parameters(), entry.points())?;
            GeneratorKind::Constant(Arc::new(table))
        } else {
            GeneratorKind::Parameterized {
                plan,
                parameters: entry.parameters().to_vec(),
                points: entry.points().to_vec(),
            }
        };

        let generator = Self {
            type_id: type_id.to_string(),
            dimension,
            kind,
        };
        debug!(
            "synthesized {} generator for {} type `{}` ({} k-points, lattice parameters: [{}])",
            if generator.is_constant() { "constant" } else { "parameterized" },
            dimension,
            type_id,
            entry.points().len(),
            generator
                .lattice_parameters()
                .map(|p| p.symbol())
                .collect::<Vec<_>>()
                .join(", "),
        );
        Ok(generator)
    }

    /// Produce the k-point table, evaluating against `basis` when the type depends on it.
    pub fn generate(&self, basis: Option<&LatticeBasis>) -> Result<Arc<KPointTable>> {
        match &self.kind {
            GeneratorKind::Constant(table) => Ok(Arc::clone(table)),
            GeneratorKind::Parameterized {
                plan,
                parameters,
                points,
            } => {
                let basis = basis.ok_or_else(|| KPathError::MissingBasis {
                    type_id: self.type_id.clone(),
                })?;
                let bindings = plan.execute(basis)?;
                evaluate_table(self.dimension, bindings, parameters, points).map(Arc::new)
            }
        }
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.kind, GeneratorKind::Constant(_))
    }

    /// Lattice parameters read from the basis on each call; empty for constant generators.
    pub fn lattice_parameters(&self) -> impl Iterator<Item = LatticeParameter> + '_ {
        let plan = match &self.kind {
            GeneratorKind::Constant(_) => None,
            GeneratorKind::Parameterized { plan, .. } => Some(plan),
        };
        plan.into_iter().flat_map(|plan| plan.parameters())
    }

    /// k-point labels, fixed by the catalog regardless of the basis.
    pub fn labels(&self) -> Vec<&str> {
        match &self.kind {
            GeneratorKind::Constant(table) => table.labels().collect(),
            GeneratorKind::Parameterized { points, .. } => {
                points.iter().map(|(label, _)| label.as_str()).collect()
            }
        }
    }
}

/// Bind derived parameters in declaration order, then evaluate every coordinate formula.
fn evaluate_table(
    dimension: Dimension,
    mut bindings: Bindings,
    parameters: &[(String, Formula)],
    points: &[(String, Formula)],
) -> Result<KPointTable> {
    for (name, formula) in parameters {
        let value = formula.evaluate_scalar(&bindings)?;
        bindings.insert(name.clone(), value);
    }

    let mut table = KPointTable::with_capacity(dimension, points.len());
    for (label, formula) in points {
        let position = DVector::from_vec(formula.evaluate_vector(&bindings)?);
        table.push(KPoint::new(label.clone(), position));
    }
    Ok(table)
}
