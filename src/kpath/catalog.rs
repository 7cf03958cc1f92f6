//! Catalog of symbolic k-point formulas per extended Bravais type.

use std::collections::HashSet;

use crate::error::{KPathError, Result};
use crate::formula::{free_parameters, parse_formula, Formula, Shape};
use crate::interfaces::Dimension;

use super::parameter_planner::LatticeParameter;
use super::{catalog_2d, catalog_3d};

/// Static text form of one catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct EntrySource {
    pub type_id: &'static str,
    /// `(label, coordinate formula)` pairs
    pub points: &'static [(&'static str, &'static str)],
    /// `(name, parameter formula)` pairs, in evaluation order
    pub parameters: &'static [(&'static str, &'static str)],
}

/// Symbolic k-point coordinates and derived parameters of one extended Bravais type.
#[derive(Debug, Clone, PartialEq)]
pub struct BravaisEntry {
    points: Vec<(String, Formula)>,
    parameters: Vec<(String, Formula)>,
}

impl BravaisEntry {
    pub fn new(points: Vec<(String, Formula)>, parameters: Vec<(String, Formula)>) -> Self {
        Self { points, parameters }
    }

    /// Build an entry from the text form of its formulas.
    pub fn parse(points: &[(&str, &str)], parameters: &[(&str, &str)]) -> Result<Self> {
        Ok(Self::new(parse_pairs(points)?, parse_pairs(parameters)?))
    }

    pub fn points(&self) -> &[(String, Formula)] {
        &self.points
    }

    pub fn parameters(&self) -> &[(String, Formula)] {
        &self.parameters
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|(label, _)| label.as_str())
    }

    /// Structural checks on labels, names, shapes and parameter ordering.
    pub fn validate(&self, type_id: &str, dimension: Dimension) -> Result<()> {
        let invalid = |reason: String| KPathError::InvalidEntry {
            type_id: type_id.to_string(),
            reason,
        };

        if self.points.is_empty() {
            return Err(invalid("no k-points declared".to_string()));
        }

        let mut labels = HashSet::new();
        for (label, formula) in &self.points {
            if !labels.insert(label.as_str()) {
                return Err(invalid(format!("k-point `{label}` declared twice")));
            }
            match formula.shape().map_err(|e| invalid(e.to_string()))? {
                Shape::Vector(n) if n == dimension.rank() => {}
                shape => {
                    return Err(invalid(format!(
                        "k-point `{label}` must be a {}-vector, found {shape:?}",
                        dimension.rank()
                    )))
                }
            }
        }

        let mut names = HashSet::new();
        for (index, (name, formula)) in self.parameters.iter().enumerate() {
            if !names.insert(name.as_str()) {
                return Err(invalid(format!("parameter `{name}` declared twice")));
            }
            if LatticeParameter::from_symbol(name).is_some() {
                return Err(invalid(format!(
                    "parameter `{name}` shadows a lattice parameter read from the basis"
                )));
            }
            if formula.shape().map_err(|e| invalid(e.to_string()))? != Shape::Scalar {
                return Err(invalid(format!("parameter `{name}` must be a scalar")));
            }
            // Parameters are evaluated in declaration order
            let referenced = free_parameters(formula);
            if let Some((later, _)) = self.parameters[index..]
                .iter()
                .find(|(other, _)| referenced.contains(other))
            {
                return Err(invalid(format!(
                    "parameter `{name}` refers to `{later}`, which is not yet defined"
                )));
            }
        }

        Ok(())
    }
}

fn parse_pairs(pairs: &[(&str, &str)]) -> Result<Vec<(String, Formula)>> {
    pairs
        .iter()
        .map(|(name, source)| Ok((name.to_string(), parse_formula(source)?)))
        .collect()
}

/// All extended Bravais types of one dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    dimension: Dimension,
    entries: Vec<(String, BravaisEntry)>,
}

impl Catalog {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, type_id: impl Into<String>, entry: BravaisEntry) -> Result<()> {
        let type_id = type_id.into();
        if self.get(&type_id).is_some() {
            return Err(KPathError::DuplicateType {
                type_id,
                dimension: self.dimension,
            });
        }
        self.entries.push((type_id, entry));
        Ok(())
    }

    pub fn from_sources(dimension: Dimension, sources: &[EntrySource]) -> Result<Self> {
        let mut catalog = Self::new(dimension);
        for source in sources {
            let entry = BravaisEntry::parse(source.points, source.parameters)?;
            catalog.insert(source.type_id, entry)?;
        }
        Ok(catalog)
    }

    /// Extended Bravais types of the five 2D lattices.
    pub fn standard_2d() -> Result<Self> {
        Self::from_sources(Dimension::_2D, catalog_2d::ENTRIES)
    }

    /// Extended Bravais types of the fourteen 3D lattices (HPKOT convention).
    pub fn standard_3d() -> Result<Self> {
        Self::from_sources(Dimension::_3D, catalog_3d::ENTRIES)
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn get(&self, type_id: &str) -> Option<&BravaisEntry> {
        self.entries
            .iter()
            .find(|(id, _)| id == type_id)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BravaisEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
