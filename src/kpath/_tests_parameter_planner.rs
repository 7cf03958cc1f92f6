#[cfg(test)]
mod _tests_parameter_planner {
    use super::super::parameter_planner::{DerivationPlan, DerivationStep, LatticeParameter};
    use crate::config::UNIT_CIRCLE_TOLERANCE;
    use crate::error::{KPathError, PlanError};
    use crate::interfaces::Dimension;
    use crate::lattice::LatticeBasis;

    const TOL: f64 = 1e-12;

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
    fn test_symbols_round_trip() {
        for parameter in LatticeParameter::ALL {
            assert_eq!(LatticeParameter::from_symbol(parameter.symbol()), Some(parameter));
        }
        assert_eq!(LatticeParameter::from_symbol("β"), None);
        assert_eq!(LatticeParameter::CosBeta.to_string(), "cosβ");
    }

    #[test]
    fn test_plan_lengths_only() {
        let plan = DerivationPlan::new(["b", "a"], Dimension::_3D).unwrap();
        assert_eq!(
            plan.steps(),
            &[
                DerivationStep::Norm { target: LatticeParameter::A, axis: 0 },
                DerivationStep::Norm { target: LatticeParameter::B, axis: 1 },
            ]
        );
    }

    #[test]
    fn test_plan_cos_beta_pulls_in_a_and_c() {
        let plan = DerivationPlan::new(["cosβ"], Dimension::_3D).unwrap();
        let order: Vec<_> = plan.parameters().collect();
        assert_eq!(
            order,
            vec![
                LatticeParameter::A,
                LatticeParameter::C,
                LatticeParameter::CosBeta,
                LatticeParameter::SinBeta,
            ]
        );
    }

    #[test]
    fn test_plan_sin_beta_alone_derives_the_pair() {
        let plan = DerivationPlan::new(["sinβ", "b"], Dimension::_3D).unwrap();
        let order: Vec<_> = plan.parameters().collect();
        assert_eq!(
            order,
            vec![
                LatticeParameter::A,
                LatticeParameter::B,
                LatticeParameter::C,
                LatticeParameter::CosBeta,
                LatticeParameter::SinBeta,
            ]
        );
    }

    #[test]
    fn test_plan_empty() {
        let plan = DerivationPlan::new(std::iter::empty(), Dimension::_2D).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_rejects_unknown_symbols() {
        assert_eq!(
            DerivationPlan::new(["a", "ζ"], Dimension::_3D),
            Err(PlanError::UnknownSymbol("ζ".to_string()))
        );
        assert_eq!(
            DerivationPlan::new(["c"], Dimension::_2D),
            Err(PlanError::OutOfDimension {
                symbol: "c".to_string(),
                dimension: Dimension::_2D
            })
        );
        assert!(DerivationPlan::new(["cosβ"], Dimension::_2D).is_err());
    }

    #[test]
    fn test_execute_lengths() {
        let basis = LatticeBasis::direct_3d([2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 1.0]).unwrap();
        let values = DerivationPlan::new(["a", "b", "c"], Dimension::_3D)
            .unwrap()
            .execute(&basis)
            .unwrap();
        assert!((values["a"] - 2.0).abs() < TOL);
        assert!((values["b"] - 3.0).abs() < TOL);
        assert!((values["c"] - 1.0).abs() < TOL);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_execute_orthogonal_beta() {
        // R₁ ⟂ R₃, β = 90°
        let basis = LatticeBasis::direct_3d([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]).unwrap();
        let values = DerivationPlan::new(["cosβ"], Dimension::_3D)
            .unwrap()
            .execute(&basis)
            .unwrap();
        assert!(values["cosβ"].abs() < TOL);
        assert!((values["sinβ"] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_execute_unit_circle_and_sign() {
        let plan = DerivationPlan::new(["cosβ", "sinβ"], Dimension::_3D).unwrap();
        for degrees in [10.0_f64, 60.0, 89.9, 95.0, 110.0, 135.0, 170.0] {
            let beta = degrees.to_radians();
            let values = plan.execute(&monoclinic(1.3, 2.1, 3.7, beta)).unwrap();
            let (cos, sin) = (values["cosβ"], values["sinβ"]);
            assert!((cos - beta.cos()).abs() < 1e-9, "β = {degrees}°");
            assert!((sin - beta.sin()).abs() < 1e-9, "β = {degrees}°");
            assert!((sin * sin + cos * cos - 1.0).abs() < UNIT_CIRCLE_TOLERANCE);
            assert!(sin >= 0.0);
        }
    }

    #[test]
    fn test_execute_rejects_other_dimension() {
        let plan = DerivationPlan::new(["a"], Dimension::_3D).unwrap();
        let basis = LatticeBasis::direct_2d([1.0, 0.0], [0.0, 1.0]).unwrap();
        assert_eq!(
            plan.execute(&basis),
            Err(KPathError::DimensionMismatch {
                expected: Dimension::_3D,
                found: Dimension::_2D
            })
        );
    }
}
