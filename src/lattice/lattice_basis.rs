use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::error::{KPathError, Result};
use crate::interfaces::{Dimension, Space};

/// An ordered basis (R₁, …, R_D) of D vectors with D components each.
///
/// Basis vectors are stored as the columns of a D×D matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBasis")]
pub struct LatticeBasis {
    base_matrix: DMatrix<f64>,
    space: Space,
    dimension: Dimension,
}

/// Unchecked wire form; deserialization goes through `from_base_vectors`.
#[derive(Deserialize)]
struct RawBasis {
    base_matrix: DMatrix<f64>,
    space: Space,
    dimension: Dimension,
}

impl TryFrom<RawBasis> for LatticeBasis {
    type Error = KPathError;

    fn try_from(raw: RawBasis) -> Result<Self> {
        let vectors: Vec<DVector<f64>> = raw
            .base_matrix
            .column_iter()
            .map(|column| column.into_owned())
            .collect();
        LatticeBasis::from_base_vectors(raw.dimension, &vectors, raw.space)
    }
}

impl LatticeBasis {
    pub fn from_base_vectors(
        dimension: Dimension,
        vectors: &[DVector<f64>],
        space: Space,
    ) -> Result<Self> {
        let rank = dimension.rank();
        if vectors.len() != rank {
            return Err(KPathError::InvalidBasis(format!(
                "a {dimension} basis needs {rank} vectors, got {}",
                vectors.len()
            )));
        }
        if let Some(v) = vectors.iter().find(|v| v.len() != rank) {
            return Err(KPathError::InvalidBasis(format!(
                "basis vectors of a {dimension} lattice need {rank} components, got {}",
                v.len()
            )));
        }
        if vectors.iter().flat_map(|v| v.iter()).any(|x| !x.is_finite()) {
            return Err(KPathError::InvalidBasis(
                "basis vectors contain non-finite components".to_string(),
            ));
        }

        let base_matrix = DMatrix::from_columns(vectors);

        // Linearly non-dependent (also catches zero vectors)
        if base_matrix.determinant().abs() < BASE_VECTOR_TOLERANCE {
            return Err(KPathError::InvalidBasis(
                "determinant too small, vectors are either too small or linearly dependent"
                    .to_string(),
            ));
        }

        Ok(LatticeBasis {
            base_matrix,
            space,
            dimension,
        })
    }

    /// Direct-space 2D basis from R₁, R₂.
    pub fn direct_2d(r1: [f64; 2], r2: [f64; 2]) -> Result<Self> {
        Self::from_base_vectors(
            Dimension::_2D,
            &[DVector::from_row_slice(&r1), DVector::from_row_slice(&r2)],
            Space::Real,
        )
    }

    /// Direct-space 3D basis from R₁, R₂, R₃.
    pub fn direct_3d(r1: [f64; 3], r2: [f64; 3], r3: [f64; 3]) -> Result<Self> {
        Self::from_base_vectors(
            Dimension::_3D,
            &[
                DVector::from_row_slice(&r1),
                DVector::from_row_slice(&r2),
                DVector::from_row_slice(&r3),
            ],
            Space::Real,
        )
    }

    /// Converts to the other space (direct ↔ reciprocal) with the 2π convention, B = 2π·A⁻ᵀ.
    pub fn reciprocal(&self) -> Result<LatticeBasis> {
        let inverse = self.base_matrix.clone().try_inverse().ok_or_else(|| {
            KPathError::InvalidBasis("basis matrix is not invertible".to_string())
        })?;
        let converted = (2.0 * PI) * inverse.transpose();
        let columns: Vec<DVector<f64>> = converted
            .column_iter()
            .map(|column| column.into_owned())
            .collect();

        // Run through the constructor so the converted basis is validated as well
        Self::from_base_vectors(
            self.dimension,
            &columns,
            match self.space {
                Space::Real => Space::Reciprocal,
                Space::Reciprocal => Space::Real,
            },
        )
    }

    pub fn base_matrix(&self) -> &DMatrix<f64> {
        &self.base_matrix
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn space(&self) -> Space {
        self.space
    }

    /// Basis vector Rᵢ, zero-based.
    pub fn vector(&self, index: usize) -> DVector<f64> {
        self.base_matrix.column(index).into_owned()
    }

    pub fn norm(&self, index: usize) -> f64 {
        self.base_matrix.column(index).norm()
    }

    pub fn dot(&self, i: usize, j: usize) -> f64 {
        self.base_matrix.column(i).dot(&self.base_matrix.column(j))
    }

    pub fn metric(&self) -> DMatrix<f64> {
        self.base_matrix.transpose() * &self.base_matrix
    }

    pub fn determinant(&self) -> f64 {
        self.base_matrix.determinant()
    }
}
