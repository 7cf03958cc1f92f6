#[cfg(test)]
mod _tests_dispatch {
    use super::super::catalog::{BravaisEntry, Catalog};
    use super::super::dispatch::KPointDispatch;
    use super::super::registry::KPointRegistry;
    use crate::config::UNIT_CIRCLE_TOLERANCE;
    use crate::error::KPathError;
    use crate::interfaces::Dimension;
    use crate::lattice::LatticeBasis;
    use std::f64::consts::PI;
    use std::sync::Arc;

    const TOL: f64 = 1e-10;

    fn generic_basis(dimension: Dimension) -> LatticeBasis {
        match dimension {
            Dimension::_2D => LatticeBasis::direct_2d([1.0, 0.0], [0.2, 1.5]).unwrap(),
            Dimension::_3D => {
                LatticeBasis::direct_3d([2.0, 0.0, 0.0], [0.3, 3.0, 0.0], [-0.8, 0.2, 4.0]).unwrap()
            }
        }
    }

    // Helper: monoclinic basis with unique axis b and angle β between R₃ and R₁
    fn monoclinic(a: f64, b: f64, c: f64, beta: f64) -> LatticeBasis {
        LatticeBasis::direct_3d(
            [a, 0.0, 0.0],
            [0.0, b, 0.0],
            [c * beta.cos(), 0.0, c * beta.sin()],
        )
        .unwrap()
    }

    #[test]
    fn test_label_sets_match_catalog() {
        let registry = KPointRegistry::standard().unwrap();
        for catalog in [Catalog::standard_2d().unwrap(), Catalog::standard_3d().unwrap()] {
            let dimension = catalog.dimension();
            let basis = generic_basis(dimension);
            for (type_id, entry) in catalog.iter() {
                let table = registry.get_points(dimension, type_id, Some(&basis)).unwrap();
                let expected: Vec<&str> = entry.labels().collect();
                assert_eq!(table.labels().collect::<Vec<_>>(), expected, "{type_id}");
                assert_eq!(registry.dispatch(dimension).labels(type_id).unwrap(), expected);
                assert!(table.iter().all(|p| p.position.len() == dimension.rank()));
            }
        }
    }

    #[test]
    fn test_every_catalog_entry_is_dispatched() {
        let registry = KPointRegistry::standard().unwrap();
        for catalog in [Catalog::standard_2d().unwrap(), Catalog::standard_3d().unwrap()] {
            let dispatch = registry.dispatch(catalog.dimension());
            assert_eq!(dispatch.len(), catalog.len());
            for (type_id, _) in catalog.iter() {
                assert!(dispatch.contains(type_id));
            }
        }
    }

    #[test]
    fn test_constant_types_independent_of_basis() {
        let registry = KPointRegistry::standard().unwrap();
        for dimension in [Dimension::_2D, Dimension::_3D] {
            let dispatch = registry.dispatch(dimension);
            for type_id in dispatch.type_ids() {
                if !dispatch.is_constant(type_id).unwrap() {
                    continue;
                }
                let without = dispatch.get_points(type_id, None).unwrap();
                let with = dispatch.get_points(type_id, Some(&generic_basis(dimension))).unwrap();
                assert!(Arc::ptr_eq(&without, &with), "{type_id}");
            }
        }
    }

    #[test]
    fn test_parameterized_types_require_basis() {
        let registry = KPointRegistry::standard().unwrap();
        let mut parameterized = 0;
        for dimension in [Dimension::_2D, Dimension::_3D] {
            let dispatch = registry.dispatch(dimension);
            for type_id in dispatch.type_ids() {
                if dispatch.is_constant(type_id).unwrap() {
                    continue;
                }
                parameterized += 1;
                assert_eq!(
                    dispatch.get_points(type_id, None).unwrap_err(),
                    KPathError::MissingBasis { type_id: type_id.to_string() }
                );
            }
        }
        assert!(parameterized > 0);
        assert!(registry.dispatch(Dimension::_3D).is_constant("mC1").is_ok_and(|c| !c));
    }

    #[test]
    fn test_unknown_type_fails_in_both_dimensions() {
        let registry = KPointRegistry::standard().unwrap();
        for dimension in [Dimension::_2D, Dimension::_3D] {
            assert_eq!(
                registry.get_points(dimension, "", None).unwrap_err(),
                KPathError::UnknownType { type_id: String::new(), dimension }
            );
        }
        // 3D identifiers are not valid in 2D and vice versa
        assert!(registry.get_points(Dimension::_2D, "cP1", None).is_err());
        assert!(registry.get_points(Dimension::_3D, "tp", None).is_err());

        let message = registry.get_points(Dimension::_3D, "zz9", None).unwrap_err().to_string();
        assert!(message.contains("zz9"));
    }

    #[test]
    fn test_repeated_calls_identical() {
        let registry = KPointRegistry::standard().unwrap();
        let basis = monoclinic(3.0, 5.0, 4.0, 105.0_f64.to_radians());
        for type_id in ["mC1", "mC2", "mC3", "oF3", "hR1"] {
            let first = registry.get_points(Dimension::_3D, type_id, Some(&basis)).unwrap();
            let second = registry.get_points(Dimension::_3D, type_id, Some(&basis)).unwrap();
            for (p, q) in first.iter().zip(second.iter()) {
                assert_eq!(p.label, q.label);
                for (x, y) in p.position.iter().zip(q.position.iter()) {
                    assert_eq!(x.to_bits(), y.to_bits(), "{type_id}/{}", p.label);
                }
            }
        }
    }

    #[test]
    fn test_tetragonal_body_centred_values() {
        let registry = KPointRegistry::standard().unwrap();
        // a = 1, c = 2: η = (1 + 1/4)/4, ζ = 1/8
        let basis = LatticeBasis::direct_3d([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]).unwrap();
        let table = registry.get_points(Dimension::_3D, "tI2", Some(&basis)).unwrap();
        let eta = 0.3125;
        let s0 = table.get("S₀").unwrap();
        assert!((s0[0] + eta).abs() < TOL);
        assert!((s0[1] - eta).abs() < TOL);
        assert!((s0[2] - eta).abs() < TOL);
        let r = table.get("R").unwrap();
        assert!((r[0] + 0.125).abs() < TOL);
        assert!((r[2] - 0.5).abs() < TOL);
    }

    #[test]
    fn test_monoclinic_values_follow_beta() {
        let registry = KPointRegistry::standard().unwrap();
        let (a, b, c) = (4.0, 2.0, 5.0);
        let beta = 100.0_f64.to_radians();
        let (cos, sin) = (beta.cos(), beta.sin());
        assert!((sin * sin + cos * cos - 1.0).abs() < UNIT_CIRCLE_TOLERANCE);

        let table = registry
            .get_points(Dimension::_3D, "mC1", Some(&monoclinic(a, b, c, beta)))
            .unwrap();
        let zeta = (2.0 + a / c * cos) / (4.0 * sin * sin);
        let eta = 0.5 + 2.0 * zeta * c * cos / a;
        let e2 = table.get("E₂").unwrap();
        assert!((e2[0] + zeta).abs() < TOL);
        assert!((e2[1] - zeta).abs() < TOL);
        assert!((e2[2] - eta).abs() < TOL);
    }

    #[test]
    fn test_centered_rectangular_2d() {
        let registry = KPointRegistry::standard().unwrap();
        let basis = LatticeBasis::direct_2d([1.0, 0.0], [0.0, 2.0]).unwrap();
        let table = registry.get_points(Dimension::_2D, "oc1", Some(&basis)).unwrap();
        // ζ = (1 + 1/4)/4
        let sigma = table.get("Σ₀").unwrap();
        assert!((sigma[0] - 0.3125).abs() < TOL);
        assert!((sigma[1] - 0.3125).abs() < TOL);
    }

    #[test]
    fn test_cartesianize_cubic() {
        let registry = KPointRegistry::standard().unwrap();
        let basis = LatticeBasis::direct_3d([2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]).unwrap();
        let table = registry.get_points(Dimension::_3D, "cP1", None).unwrap();

        let cartesian = table.cartesianize(&basis.reciprocal().unwrap()).unwrap();
        let x = &cartesian.iter().find(|p| p.label == "X").unwrap().position;
        assert!(x[0].abs() < TOL);
        assert!((x[1] - PI / 2.0).abs() < TOL);
        assert!(x[2].abs() < TOL);

        // a direct basis is not a reciprocal one
        assert!(matches!(
            table.cartesianize(&basis),
            Err(KPathError::SpaceMismatch { .. })
        ));
    }

    #[test]
    fn test_malformed_catalog_fails_dispatch_build() {
        let mut catalog = Catalog::new(Dimension::_3D);
        catalog
            .insert("ok", BravaisEntry::parse(&[("Γ", "[0, 0, 0]")], &[]).unwrap())
            .unwrap();
        catalog
            .insert("bad", BravaisEntry::parse(&[("X", "[γ, 0, 0]")], &[]).unwrap())
            .unwrap();
        assert!(matches!(
            KPointDispatch::build(&catalog),
            Err(KPathError::Specification { ref type_id, .. }) if type_id == "bad"
        ));
    }

    #[test]
    fn test_registry_rejects_swapped_catalogs() {
        let catalog_2d = Catalog::standard_2d().unwrap();
        let catalog_3d = Catalog::standard_3d().unwrap();
        assert!(matches!(
            KPointRegistry::new(&catalog_3d, &catalog_2d),
            Err(KPathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_concurrent_reads() {
        let registry = KPointRegistry::standard().unwrap();
        let basis = monoclinic(3.0, 5.0, 4.0, 105.0_f64.to_radians());
        let reference = registry.get_points(Dimension::_3D, "mC2", Some(&basis)).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| registry.get_points(Dimension::_3D, "mC2", Some(&basis)).unwrap())
                })
                .collect();
            for handle in handles {
                assert_eq!(*handle.join().unwrap(), *reference);
            }
        });
    }
}
