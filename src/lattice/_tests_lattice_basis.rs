#[cfg(test)]
mod _tests_lattice_basis {
    use super::super::lattice_basis::LatticeBasis;
    use crate::error::KPathError;
    use crate::interfaces::{Dimension, Space};
    use nalgebra::DVector;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_direct_3d_accessors() {
        let basis = LatticeBasis::direct_3d([2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 1.0]).unwrap();
        assert_eq!(basis.dimension(), Dimension::_3D);
        assert_eq!(basis.space(), Space::Real);
        assert!((basis.norm(0) - 2.0).abs() < TOL);
        assert!((basis.norm(1) - 3.0).abs() < TOL);
        assert!((basis.norm(2) - 1.0).abs() < TOL);
        assert!((basis.determinant() - 6.0).abs() < TOL);
        assert!(basis.dot(0, 2).abs() < TOL);
        assert_eq!(basis.vector(1), DVector::from_row_slice(&[0.0, 3.0, 0.0]));

        let metric = basis.metric();
        assert!((metric[(0, 0)] - 4.0).abs() < TOL);
        assert!((metric[(1, 1)] - 9.0).abs() < TOL);
    }

    #[test]
    fn test_rejects_linearly_dependent_vectors() {
        let result = LatticeBasis::direct_3d([1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        assert!(matches!(result, Err(KPathError::InvalidBasis(_))));

        let result = LatticeBasis::direct_2d([1.0, 0.0], [0.0, 0.0]);
        assert!(matches!(result, Err(KPathError::InvalidBasis(_))));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let vectors = vec![DVector::from_row_slice(&[1.0, 0.0, 0.0]), DVector::from_row_slice(&[0.0, 1.0, 0.0])];
        let result = LatticeBasis::from_base_vectors(Dimension::_3D, &vectors, Space::Real);
        assert!(matches!(result, Err(KPathError::InvalidBasis(_))));

        // right count, wrong component length
        let result = LatticeBasis::from_base_vectors(Dimension::_2D, &vectors, Space::Real);
        assert!(matches!(result, Err(KPathError::InvalidBasis(_))));
    }

    #[test]
    fn test_rejects_non_finite_components() {
        let result = LatticeBasis::direct_2d([f64::NAN, 0.0], [0.0, 1.0]);
        assert!(matches!(result, Err(KPathError::InvalidBasis(_))));
    }

    #[test]
    fn test_reciprocal_of_cubic() {
        let a = 2.0;
        let basis = LatticeBasis::direct_3d([a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]).unwrap();
        let reciprocal = basis.reciprocal().unwrap();
        assert_eq!(reciprocal.space(), Space::Reciprocal);
        for i in 0..3 {
            assert!((reciprocal.norm(i) - 2.0 * PI / a).abs() < TOL);
        }
        // aᵢ·bⱼ = 2π δᵢⱼ
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.0 * PI } else { 0.0 };
                assert!((basis.vector(i).dot(&reciprocal.vector(j)) - expected).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_reciprocal_round_trip() {
        let basis = LatticeBasis::direct_2d([1.0, 0.0], [-0.5, 3.0_f64.sqrt() / 2.0]).unwrap();
        let back = basis.reciprocal().unwrap().reciprocal().unwrap();
        assert_eq!(back.space(), Space::Real);
        assert!((back.base_matrix() - basis.base_matrix()).norm() < TOL);
    }

    #[test]
    fn test_deserialized_basis_is_validated() {
        // 2x2 matrix tagged as a 3D basis
        let json = r#"{"base_matrix":[[1,0,0,1],2,2],"space":"Real","dimension":"_3D"}"#;
        assert!(serde_json::from_str::<LatticeBasis>(json).is_err());

        let json = r#"{"base_matrix":[[1,0,2,0],2,2],"space":"Real","dimension":"_2D"}"#;
        assert!(serde_json::from_str::<LatticeBasis>(json).is_err());
    }

    #[test]
    fn test_serialized_basis_reads_back() {
        let basis = LatticeBasis::direct_3d([2.0, 0.0, 0.0], [0.5, 3.0, 0.0], [0.0, 0.0, 1.0]).unwrap();
        let json = serde_json::to_string(&basis).unwrap();
        let back: LatticeBasis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, basis);
    }
}
