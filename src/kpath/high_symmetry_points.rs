use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{KPathError, Result};
use crate::interfaces::{Dimension, Space};
use crate::lattice::LatticeBasis;

/// A high symmetry point in the Brillouin zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KPoint {
    /// Label for the point (Γ, X, Σ₀, ...)
    pub label: String,
    /// Position in reciprocal space (fractional coordinates of the reciprocal lattice)
    pub position: DVector<f64>,
}

impl KPoint {
    pub fn new(label: impl Into<String>, position: DVector<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// Labelled k-points of one extended Bravais type, in catalog declaration order.
///
/// Each label occurs at most once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KPointTable {
    dimension: Dimension,
    points: Vec<KPoint>,
}

impl KPointTable {
    pub(crate) fn with_capacity(dimension: Dimension, capacity: usize) -> Self {
        Self {
            dimension,
            points: Vec::with_capacity(capacity),
        }
    }

    /// Labels are unique per catalog entry, so pushing never needs to replace.
    pub(crate) fn push(&mut self, point: KPoint) {
        debug_assert!(self.get(&point.label).is_none());
        self.points.push(point);
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Get a point's coordinates by label
    pub fn get(&self, label: &str) -> Option<&DVector<f64>> {
        self.points
            .iter()
            .find(|point| point.label == label)
            .map(|point| &point.position)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|point| point.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Convert the fractional coordinates to Cartesian ones, k = Σᵢ kᵢ·Gᵢ.
    pub fn cartesianize(&self, reciprocal: &LatticeBasis) -> Result<Vec<KPoint>> {
        if reciprocal.space() != Space::Reciprocal {
            return Err(KPathError::SpaceMismatch {
                expected: Space::Reciprocal,
                found: reciprocal.space(),
            });
        }
        if reciprocal.dimension() != self.dimension {
            return Err(KPathError::DimensionMismatch {
                expected: self.dimension,
                found: reciprocal.dimension(),
            });
        }
        Ok(self
            .points
            .iter()
            .map(|point| {
                KPoint::new(
                    point.label.clone(),
                    reciprocal.base_matrix() * &point.position,
                )
            })
            .collect())
    }
}

impl<'a> IntoIterator for &'a KPointTable {
    type Item = &'a KPoint;
    type IntoIter = std::slice::Iter<'a, KPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
