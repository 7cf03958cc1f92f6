use std::sync::Arc;

use super::catalog::Catalog;
use super::dispatch::KPointDispatch;
use super::high_symmetry_points::KPointTable;
use crate::error::{KPathError, Result};
use crate::interfaces::Dimension;
use crate::lattice::LatticeBasis;

/// One [`KPointDispatch`] per dimension. Immutable once built.
#[derive(Debug, Clone)]
pub struct KPointRegistry {
    dispatch_2d: KPointDispatch,
    dispatch_3d: KPointDispatch,
}

impl KPointRegistry {
    pub fn new(catalog_2d: &Catalog, catalog_3d: &Catalog) -> Result<Self> {
        for (catalog, expected) in [(catalog_2d, Dimension::_2D), (catalog_3d, Dimension::_3D)] {
            if catalog.dimension() != expected {
                return Err(KPathError::DimensionMismatch {
                    expected,
                    found: catalog.dimension(),
                });
            }
        }
        Ok(Self {
            dispatch_2d: KPointDispatch::build(catalog_2d)?,
            dispatch_3d: KPointDispatch::build(catalog_3d)?,
        })
    }

    /// Registry over the built-in 2D and 3D catalogs.
    pub fn standard() -> Result<Self> {
        Self::new(&Catalog::standard_2d()?, &Catalog::standard_3d()?)
    }

    pub fn dispatch(&self, dimension: Dimension) -> &KPointDispatch {
        match dimension {
            Dimension::_2D => &self.dispatch_2d,
            Dimension::_3D => &self.dispatch_3d,
        }
    }

    /// k-points of the extended Bravais type `type_id` in the given dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use bravais_kpoints::interfaces::Dimension;
    /// use bravais_kpoints::kpath::KPointRegistry;
    ///
    /// let registry = KPointRegistry::standard().unwrap();
    /// let points = registry.get_points(Dimension::_3D, "cP1", None).unwrap();
    /// assert!(points.contains("Γ"));
    /// ```
    pub fn get_points(
        &self,
        dimension: Dimension,
        type_id: &str,
        basis: Option<&LatticeBasis>,
    ) -> Result<Arc<KPointTable>> {
        self.dispatch(dimension).get_points(type_id, basis)
    }
}
