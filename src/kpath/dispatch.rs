use std::collections::HashMap;
use std::sync::Arc;

use log::{info, trace};

use super::catalog::Catalog;
use super::generator::KPointGenerator;
use super::high_symmetry_points::KPointTable;
use crate::error::{KPathError, Result};
use crate::interfaces::Dimension;
use crate::lattice::LatticeBasis;

/// Lookup from extended Bravais type identifier to its generator, for one dimension.
#[derive(Debug, Clone)]
pub struct KPointDispatch {
    dimension: Dimension,
    generators: HashMap<String, KPointGenerator>,
}

impl KPointDispatch {
    /// Synthesize a generator for every catalog entry. Fails on the first malformed entry.
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let dimension = catalog.dimension();
        let mut generators = HashMap::with_capacity(catalog.len());
        for (type_id, entry) in catalog.iter() {
            let generator = KPointGenerator::synthesize(type_id, dimension, entry)?;
            if generators.insert(type_id.to_string(), generator).is_some() {
                return Err(KPathError::DuplicateType {
                    type_id: type_id.to_string(),
                    dimension,
                });
            }
        }

        let dispatch = Self {
            dimension,
            generators,
        };
        info!(
            "built {} k-point dispatch: {} extended Bravais types, {} constant",
            dimension,
            dispatch.len(),
            dispatch.generators.values().filter(|g| g.is_constant()).count()
        );
        Ok(dispatch)
    }

    /// k-points of `type_id`; `basis` may be absent only for constant types.
    pub fn get_points(
        &self,
        type_id: &str,
        basis: Option<&LatticeBasis>,
    ) -> Result<Arc<KPointTable>> {
        trace!("k-points requested for {} type `{}`", self.dimension, type_id);
        self.generator(type_id)?.generate(basis)
    }

    pub fn generator(&self, type_id: &str) -> Result<&KPointGenerator> {
        self.generators
            .get(type_id)
            .ok_or_else(|| KPathError::UnknownType {
                type_id: type_id.to_string(),
                dimension: self.dimension,
            })
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.generators.contains_key(type_id)
    }

    /// Labels `get_points` will return for `type_id`, without needing a basis.
    pub fn labels(&self, type_id: &str) -> Result<Vec<&str>> {
        Ok(self.generator(type_id)?.labels())
    }

    pub fn is_constant(&self, type_id: &str) -> Result<bool> {
        Ok(self.generator(type_id)?.is_constant())
    }

    /// Identifiers of every type, sorted.
    pub fn type_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
