//! k-point formulas of the 3D extended Bravais types.
//!
//! Type identifiers and point labels follow Hinuma et al., Comp. Mat. Sci. 128, 140 (2017).
//! Fractional coordinates refer to the reciprocal basis of the primitive cell.

use super::catalog::EntrySource;

pub(crate) const ENTRIES: &[EntrySource] = &[
    // ---------------------------------------------------------------- cubic
    EntrySource {
        type_id: "cP1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("R", "[1/2, 1/2, 1/2]"),
            ("M", "[1/2, 1/2, 0]"),
            ("X", "[0, 1/2, 0]"),
            ("X₁", "[1/2, 0, 0]"),
        ],
        parameters: &[],
    },
    EntrySource {
        type_id: "cP2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("R", "[1/2, 1/2, 1/2]"),
            ("M", "[1/2, 1/2, 0]"),
            ("X", "[0, 1/2, 0]"),
        ],
        parameters: &[],
    },
    EntrySource {
        type_id: "cF1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("X", "[1/2, 0, 1/2]"),
            ("L", "[1/2, 1/2, 1/2]"),
            ("W", "[1/2, 1/4, 3/4]"),
            ("W₂", "[3/4, 1/4, 1/2]"),
            ("K", "[3/8, 3/8, 3/4]"),
            ("U", "[5/8, 1/4, 5/8]"),
        ],
        parameters: &[],
    },
    EntrySource {
        type_id: "cF2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("X", "[1/2, 0, 1/2]"),
            ("L", "[1/2, 1/2, 1/2]"),
            ("W", "[1/2, 1/4, 3/4]"),
            ("K", "[3/8, 3/8, 3/4]"),
            ("U", "[5/8, 1/4, 5/8]"),
        ],
        parameters: &[],
    },
    EntrySource {
        type_id: "cI1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("H", "[1/2, -1/2, 1/2]"),
            ("P", "[1/4, 1/4, 1/4]"),
            ("N", "[0, 0, 1/2]"),
        ],
        parameters: &[],
    },
    // ----------------------------------------------------------- tetragonal
    EntrySource {
        type_id: "tP1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Z", "[0, 0, 1/2]"),
            ("M", "[1/2, 1/2, 0]"),
            ("A", "[1/2, 1/2, 1/2]"),
            ("R", "[0, 1/2, 1/2]"),
            ("X", "[0, 1/2, 0]"),
        ],
        parameters: &[],
    },
    // c < a
    EntrySource {
        type_id: "tI1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("M", "[-1/2, 1/2, 1/2]"),
            ("X", "[0, 0, 1/2]"),
            ("P", "[1/4, 1/4, 1/4]"),
            ("Z", "[η, η, -η]"),
            ("Z₀", "[-η, 1 - η, η]"),
            ("N", "[0, 1/2, 0]"),
        ],
        parameters: &[("η", "(1 + c^2/a^2)/4")],
    },
    // c > a
    EntrySource {
        type_id: "tI2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("M", "[1/2, 1/2, -1/2]"),
            ("X", "[0, 0, 1/2]"),
            ("P", "[1/4, 1/4, 1/4]"),
            ("N", "[0, 1/2, 0]"),
            ("S₀", "[-η, η, η]"),
            ("S", "[η, 1 - η, -η]"),
            ("R", "[-ζ, ζ, 1/2]"),
            ("G", "[1/2, 1/2, -ζ]"),
        ],
        parameters: &[("η", "(1 + a^2/c^2)/4"), ("ζ", "a^2/(2*c^2)")],
    },
    // ---------------------------------------------------------- orthorhombic
    EntrySource {
        type_id: "oP1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("X", "[1/2, 0, 0]"),
            ("Z", "[0, 0, 1/2]"),
            ("U", "[1/2, 0, 1/2]"),
            ("Y", "[0, 1/2, 0]"),
            ("S", "[1/2, 1/2, 0]"),
            ("T", "[0, 1/2, 1/2]"),
            ("R", "[1/2, 1/2, 1/2]"),
        ],
        parameters: &[],
    },
    // 1/a² > 1/b² + 1/c²
    EntrySource {
        type_id: "oF1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("T", "[1, 1/2, 1/2]"),
            ("Z", "[1/2, 1/2, 0]"),
            ("Y", "[1/2, 0, 1/2]"),
            ("Σ₀", "[0, η, η]"),
            ("U₀", "[1, 1 - η, 1 - η]"),
            ("A₀", "[1/2, 1/2 + ζ, ζ]"),
            ("C₀", "[1/2, 1/2 - ζ, 1 - ζ]"),
            ("L", "[1/2, 1/2, 1/2]"),
        ],
        parameters: &[
            ("ζ", "(1 + a^2/b^2 - a^2/c^2)/4"),
            ("η", "(1 + a^2/b^2 + a^2/c^2)/4"),
        ],
    },
    // 1/c² > 1/a² + 1/b²
    EntrySource {
        type_id: "oF2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("T", "[0, 1/2, 1/2]"),
            ("Z", "[1/2, 1/2, 1]"),
            ("Y", "[1/2, 0, 1/2]"),
            ("Λ₀", "[η, η, 0]"),
            ("Q₀", "[1 - η, 1 - η, 1]"),
            ("G₀", "[1/2 - ζ, 1/2, 1 - ζ]"),
            ("H₀", "[1/2 + ζ, 1/2, ζ]"),
            ("L", "[1/2, 1/2, 1/2]"),
        ],
        parameters: &[
            ("ζ", "(1 + c^2/a^2 - c^2/b^2)/4"),
            ("η", "(1 + c^2/a^2 + c^2/b^2)/4"),
        ],
    },
    // otherwise
    EntrySource {
        type_id: "oF3",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("T", "[0, 1/2, 1/2]"),
            ("Z", "[1/2, 1/2, 0]"),
            ("Y", "[1/2, 0, 1/2]"),
            ("A₀", "[1/2, 1/2 + ζ, ζ]"),
            ("C₀", "[1/2, 1/2 - ζ, 1 - ζ]"),
            ("B₀", "[1/2 + δ, 1/2, δ]"),
            ("D₀", "[1/2 - δ, 1/2, 1 - δ]"),
            ("G₀", "[φ, 1/2 + φ, 1/2]"),
            ("H₀", "[1 - φ, 1/2 - φ, 1/2]"),
            ("L", "[1/2, 1/2, 1/2]"),
        ],
        parameters: &[
            ("ζ", "(1 + a^2/b^2 - a^2/c^2)/4"),
            ("δ", "(1 + b^2/a^2 - b^2/c^2)/4"),
            ("φ", "(1 + c^2/b^2 - c^2/a^2)/4"),
        ],
    },
    // c largest
    EntrySource {
        type_id: "oI1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("X", "[1/2, 1/2, -1/2]"),
            ("S", "[1/2, 0, 0]"),
            ("R", "[0, 1/2, 0]"),
            ("T", "[0, 0, 1/2]"),
            ("W", "[1/4, 1/4, 1/4]"),
            ("Σ₀", "[-ζ, ζ, ζ]"),
            ("F₂", "[ζ, 1 - ζ, -ζ]"),
            ("Y₀", "[η, -η, η]"),
            ("U₀", "[1 - η, η, -η]"),
            ("L₀", "[-μ, μ, 1/2 - δ]"),
            ("M₀", "[μ, -μ, 1/2 + δ]"),
            ("J₀", "[1/2 - δ, 1/2 + δ, -μ]"),
        ],
        parameters: &[
            ("ζ", "(1 + a^2/c^2)/4"),
            ("η", "(1 + b^2/c^2)/4"),
            ("δ", "(b^2 - a^2)/(4*c^2)"),
            ("μ", "(a^2 + b^2)/(4*c^2)"),
        ],
    },
    // a largest
    EntrySource {
        type_id: "oI2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("X", "[-1/2, 1/2, 1/2]"),
            ("S", "[1/2, 0, 0]"),
            ("R", "[0, 1/2, 0]"),
            ("T", "[0, 0, 1/2]"),
            ("W", "[1/4, 1/4, 1/4]"),
            ("Y₀", "[ζ, -ζ, ζ]"),
            ("U₂", "[-ζ, ζ, 1 - ζ]"),
            ("Λ₀", "[η, η, -η]"),
            ("G₂", "[-η, 1 - η, η]"),
            ("K", "[1/2 - δ, -μ, 1/2 + δ]"),
            ("K₂", "[1/2 + δ, μ, 1/2 - δ]"),
            ("K₄", "[-μ, 1/2 - δ, 1/2 + δ]"),
        ],
        parameters: &[
            ("ζ", "(1 + b^2/a^2)/4"),
            ("η", "(1 + c^2/a^2)/4"),
            ("δ", "(c^2 - b^2)/(4*a^2)"),
            ("μ", "(b^2 + c^2)/(4*a^2)"),
        ],
    },
    // b largest
    EntrySource {
        type_id: "oI3",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("X", "[1/2, -1/2, 1/2]"),
            ("S", "[1/2, 0, 0]"),
            ("R", "[0, 1/2, 0]"),
            ("T", "[0, 0, 1/2]"),
            ("W", "[1/4, 1/4, 1/4]"),
            ("Σ₀", "[-η, η, η]"),
            ("F₀", "[η, -η, 1 - η]"),
            ("Λ₀", "[ζ, ζ, -ζ]"),
            ("G₀", "[1 - ζ, -ζ, ζ]"),
            ("V₀", "[μ, 1/2 - δ, -μ]"),
            ("H₀", "[-μ, 1/2 + δ, μ]"),
            ("H₂", "[1/2 + δ, -μ, 1/2 - δ]"),
        ],
        parameters: &[
            ("ζ", "(1 + c^2/b^2)/4"),
            ("η", "(1 + a^2/b^2)/4"),
            ("δ", "(a^2 - c^2)/(4*b^2)"),
            ("μ", "(c^2 + a^2)/(4*b^2)"),
        ],
    },
    // C-centred, a < b
    EntrySource {
        type_id: "oC1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Y", "[-1/2, 1/2, 0]"),
            ("T", "[-1/2, 1/2, 1/2]"),
            ("Z", "[0, 0, 1/2]"),
            ("S", "[0, 1/2, 0]"),
            ("R", "[0, 1/2, 1/2]"),
            ("Σ₀", "[ζ, ζ, 0]"),
            ("C₀", "[-ζ, 1 - ζ, 0]"),
            ("A₀", "[ζ, ζ, 1/2]"),
            ("E₀", "[-ζ, 1 - ζ, 1/2]"),
        ],
        parameters: &[("ζ", "(1 + a^2/b^2)/4")],
    },
    // C-centred, a > b
    EntrySource {
        type_id: "oC2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Y", "[1/2, 1/2, 0]"),
            ("T", "[1/2, 1/2, 1/2]"),
            ("T₂", "[1/2, 1/2, -1/2]"),
            ("Z", "[0, 0, 1/2]"),
            ("Z₂", "[0, 0, -1/2]"),
            ("S", "[0, 1/2, 0]"),
            ("R", "[0, 1/2, 1/2]"),
            ("R₂", "[0, 1/2, -1/2]"),
            ("Δ₀", "[-ζ, ζ, 0]"),
            ("F₀", "[ζ, 1 - ζ, 0]"),
            ("B₀", "[-ζ, ζ, 1/2]"),
            ("B₂", "[-ζ, ζ, -1/2]"),
            ("G₀", "[ζ, 1 - ζ, 1/2]"),
            ("G₂", "[ζ, 1 - ζ, -1/2]"),
        ],
        parameters: &[("ζ", "(1 + b^2/a^2)/4")],
    },
    // A-centred, b < c
    EntrySource {
        type_id: "oA1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Y", "[-1/2, 1/2, 0]"),
            ("T", "[-1/2, 1/2, 1/2]"),
            ("Z", "[0, 0, 1/2]"),
            ("S", "[0, 1/2, 0]"),
            ("R", "[0, 1/2, 1/2]"),
            ("Σ₀", "[ζ, ζ, 0]"),
            ("C₀", "[-ζ, 1 - ζ, 0]"),
            ("A₀", "[ζ, ζ, 1/2]"),
            ("E₀", "[-ζ, 1 - ζ, 1/2]"),
        ],
        parameters: &[("ζ", "(1 + b^2/c^2)/4")],
    },
    // A-centred, b > c
    EntrySource {
        type_id: "oA2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Y", "[1/2, 1/2, 0]"),
            ("T", "[1/2, 1/2, 1/2]"),
            ("T₂", "[1/2, 1/2, -1/2]"),
            ("Z", "[0, 0, 1/2]"),
            ("Z₂", "[0, 0, -1/2]"),
            ("S", "[0, 1/2, 0]"),
            ("R", "[0, 1/2, 1/2]"),
            ("R₂", "[0, 1/2, -1/2]"),
            ("Δ₀", "[-ζ, ζ, 0]"),
            ("F₀", "[ζ, 1 - ζ, 0]"),
            ("B₀", "[-ζ, ζ, 1/2]"),
            ("B₂", "[-ζ, ζ, -1/2]"),
            ("G₀", "[ζ, 1 - ζ, 1/2]"),
            ("G₂", "[ζ, 1 - ζ, -1/2]"),
        ],
        parameters: &[("ζ", "(1 + c^2/b^2)/4")],
    },
    // ---------------------------------------------------- hexagonal/trigonal
    EntrySource {
        type_id: "hP1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("A", "[0, 0, 1/2]"),
            ("K", "[1/3, 1/3, 0]"),
            ("H", "[1/3, 1/3, 1/2]"),
            ("H₂", "[1/3, 1/3, -1/2]"),
            ("M", "[1/2, 0, 0]"),
            ("L", "[1/2, 0, 1/2]"),
        ],
        parameters: &[],
    },
    EntrySource {
        type_id: "hP2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("A", "[0, 0, 1/2]"),
            ("K", "[1/3, 1/3, 0]"),
            ("H", "[1/3, 1/3, 1/2]"),
            ("M", "[1/2, 0, 0]"),
            ("L", "[1/2, 0, 1/2]"),
        ],
        parameters: &[],
    },
    // √3a < √2c
    EntrySource {
        type_id: "hR1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("T", "[1/2, 1/2, 1/2]"),
            ("L", "[1/2, 0, 0]"),
            ("L₂", "[0, -1/2, 0]"),
            ("L₄", "[0, 0, -1/2]"),
            ("F", "[1/2, 0, 1/2]"),
            ("F₂", "[1/2, 1/2, 0]"),
            ("S₀", "[ν, -ν, 0]"),
            ("S₂", "[1 - ν, 0, ν]"),
            ("S₄", "[ν, 0, -ν]"),
            ("S₆", "[1 - ν, ν, 0]"),
            ("H₀", "[1/2, -1 + η, 1 - η]"),
            ("H₂", "[η, 1 - η, 1/2]"),
            ("H₄", "[η, 1/2, 1 - η]"),
            ("H₆", "[1/2, 1 - η, -1 + η]"),
            ("M₀", "[ν, -1 + η, ν]"),
            ("M₂", "[1 - ν, 1 - η, 1 - ν]"),
            ("M₄", "[η, ν, ν]"),
            ("M₆", "[1 - ν, 1 - ν, 1 - η]"),
            ("M₈", "[ν, ν, -1 + η]"),
        ],
        parameters: &[
            ("δ", "a^2/(4*c^2)"),
            ("η", "5/6 - 2*δ"),
            ("ν", "1/3 + δ"),
        ],
    },
    // √3a > √2c
    EntrySource {
        type_id: "hR2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("L", "[1/2, 0, 0]"),
            ("T", "[1/2, -1/2, 1/2]"),
            ("P₀", "[η, -1 + η, η]"),
            ("P₂", "[ν, ν, ν]"),
            ("R₀", "[1 - ν, -ν, 1 - ν]"),
            ("F", "[1/2, -1/2, 0]"),
        ],
        parameters: &[
            ("ζ", "1/6 - c^2/(9*a^2)"),
            ("η", "1/2 - 2*ζ"),
            ("ν", "1/2 + ζ"),
        ],
    },
    // ------------------------------------------------------------ monoclinic
    EntrySource {
        type_id: "mP1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Z", "[0, 1/2, 0]"),
            ("B", "[0, 0, 1/2]"),
            ("B₂", "[0, 0, -1/2]"),
            ("Y", "[1/2, 0, 0]"),
            ("Y₂", "[-1/2, 0, 0]"),
            ("C", "[1/2, 1/2, 0]"),
            ("C₂", "[-1/2, 1/2, 0]"),
            ("D", "[0, 1/2, 1/2]"),
            ("D₂", "[0, 1/2, -1/2]"),
            ("A", "[-1/2, 0, 1/2]"),
            ("E", "[-1/2, 1/2, 1/2]"),
        ],
        parameters: &[],
    },
    // b < a sinβ
    EntrySource {
        type_id: "mC1",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Y₂", "[-1/2, 1/2, 0]"),
            ("Y₄", "[1/2, -1/2, 0]"),
            ("A", "[0, 0, 1/2]"),
            ("M₂", "[-1/2, 1/2, 1/2]"),
            ("V", "[1/2, 0, 0]"),
            ("V₂", "[0, 1/2, 0]"),
            ("L₂", "[0, 1/2, 1/2]"),
            ("C", "[1 - ψ, 1 - ψ, 0]"),
            ("C₂", "[-1 + ψ, ψ, 0]"),
            ("C₄", "[ψ, -1 + ψ, 0]"),
            ("D", "[-1 + φ, φ, 1/2]"),
            ("D₂", "[1 - φ, 1 - φ, 1/2]"),
            ("E", "[-1 + ζ, 1 - ζ, 1 - η]"),
            ("E₂", "[-ζ, ζ, η]"),
            ("E₄", "[ζ, -ζ, 1 - η]"),
        ],
        parameters: &[
            ("ζ", "(2 + a/c*cosβ)/(4*sinβ^2)"),
            ("η", "1/2 + 2*ζ*c*cosβ/a"),
            ("ψ", "3/4 - b^2/(4*a^2*sinβ^2)"),
            ("φ", "ψ - (3/4 - ψ)*a*cosβ/c"),
        ],
    },
    // b > a sinβ, -a cosβ/c + a² sin²β/b² < 1
    EntrySource {
        type_id: "mC2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Y", "[1/2, 1/2, 0]"),
            ("A", "[0, 0, 1/2]"),
            ("M", "[1/2, 1/2, 1/2]"),
            ("V₂", "[0, 1/2, 0]"),
            ("L₂", "[0, 1/2, 1/2]"),
            ("F", "[-1 + φ, 1 - φ, 1 - ψ]"),
            ("F₂", "[1 - φ, φ, ψ]"),
            ("F₄", "[φ, 1 - φ, 1 - ψ]"),
            ("H", "[-ζ, ζ, η]"),
            ("H₂", "[ζ, 1 - ζ, 1 - η]"),
            ("H₄", "[ζ, -ζ, 1 - η]"),
        ],
        parameters: &[
            ("μ", "(1 + a^2/b^2)/4"),
            ("δ", "-a*c*cosβ/(2*b^2)"),
            ("ζ", "(a^2/b^2 + (1 + a/c*cosβ)/sinβ^2)/4"),
            ("η", "1/2 + 2*ζ*c*cosβ/a"),
            ("φ", "1 + ζ - 2*μ"),
            ("ψ", "η - 2*δ"),
        ],
    },
    // b > a sinβ, -a cosβ/c + a² sin²β/b² > 1
    EntrySource {
        type_id: "mC3",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Y", "[1/2, 1/2, 0]"),
            ("A", "[0, 0, 1/2]"),
            ("M₂", "[-1/2, 1/2, 1/2]"),
            ("V", "[1/2, 0, 0]"),
            ("V₂", "[0, 1/2, 0]"),
            ("L₂", "[0, 1/2, 1/2]"),
            ("I", "[-1 + ρ, ρ, 1/2]"),
            ("I₂", "[1 - ρ, 1 - ρ, 1/2]"),
            ("K", "[-μ, μ, δ]"),
            ("K₂", "[μ, 1 - μ, -δ]"),
            ("K₄", "[1 - μ, μ, δ]"),
            ("H", "[-ζ, ζ, η]"),
            ("H₂", "[ζ, 1 - ζ, 1 - η]"),
            ("H₄", "[ζ, -ζ, 1 - η]"),
            ("N", "[-1 + φ, 1 - φ, 1 - ψ]"),
            ("N₂", "[1 - φ, φ, ψ]"),
            ("N₄", "[φ, 1 - φ, 1 - ψ]"),
        ],
        parameters: &[
            ("ζ", "(a^2/b^2 + (1 + a/c*cosβ)/sinβ^2)/4"),
            ("ρ", "1 - ζ*b^2/a^2"),
            ("η", "1/2 + 2*ζ*c*cosβ/a"),
            ("μ", "η/2 + a^2/(4*b^2) + a*c*cosβ/(2*b^2)"),
            ("ν", "2*μ - ζ"),
            ("ω", "c/(2*a*cosβ)*(1 - 4*ν + a^2*sinβ^2/b^2)"),
            ("δ", "-1/4 + ω/2 - ζ*c*cosβ/a"),
            ("φ", "1 + ζ - 2*μ"),
            ("ψ", "η - 2*δ"),
        ],
    },
    // ------------------------------------------------------------- triclinic
    EntrySource {
        type_id: "aP2",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Z", "[0, 0, 1/2]"),
            ("Y", "[0, 1/2, 0]"),
            ("X", "[1/2, 0, 0]"),
            ("V₂", "[1/2, -1/2, 0]"),
            ("U₂", "[-1/2, 0, 1/2]"),
            ("T₂", "[0, -1/2, 1/2]"),
            ("R₂", "[-1/2, -1/2, 1/2]"),
        ],
        parameters: &[],
    },
    EntrySource {
        type_id: "aP3",
        points: &[
            ("Γ", "[0, 0, 0]"),
            ("Z", "[0, 0, 1/2]"),
            ("Y", "[0, 1/2, 0]"),
            ("Y₂", "[0, -1/2, 0]"),
            ("X", "[1/2, 0, 0]"),
            ("V₂", "[1/2, -1/2, 0]"),
            ("U", "[1/2, 0, 1/2]"),
            ("T₂", "[0, -1/2, 1/2]"),
            ("R", "[1/2, 1/2, 1/2]"),
        ],
        parameters: &[],
    },
];
