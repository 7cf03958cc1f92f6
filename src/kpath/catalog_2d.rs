//! k-point formulas of the 2D extended Bravais types.
//!
//! Fractional coordinates refer to the reciprocal basis of the conventional cell.

use super::catalog::EntrySource;

pub(crate) const ENTRIES: &[EntrySource] = &[
    // square
    EntrySource {
        type_id: "tp",
        points: &[("Γ", "[0, 0]"), ("X", "[0, 1/2]"), ("M", "[1/2, 1/2]")],
        parameters: &[],
    },
    // hexagonal
    EntrySource {
        type_id: "hp",
        points: &[("Γ", "[0, 0]"), ("M", "[1/2, 0]"), ("K", "[1/3, 1/3]")],
        parameters: &[],
    },
    // rectangular
    EntrySource {
        type_id: "op",
        points: &[
            ("Γ", "[0, 0]"),
            ("X", "[1/2, 0]"),
            ("Y", "[0, 1/2]"),
            ("S", "[1/2, 1/2]"),
        ],
        parameters: &[],
    },
    // centered rectangular, a < b
    EntrySource {
        type_id: "oc1",
        points: &[
            ("Γ", "[0, 0]"),
            ("Y", "[1/2, 1/2]"),
            ("S", "[0, 1/2]"),
            ("C₀", "[-ζ, 1 - ζ]"),
            ("Σ₀", "[ζ, ζ]"),
        ],
        parameters: &[("ζ", "(1 + a^2/b^2)/4")],
    },
    // centered rectangular, a > b
    EntrySource {
        type_id: "oc2",
        points: &[
            ("Γ", "[0, 0]"),
            ("Y", "[1/2, 1/2]"),
            ("S", "[0, 1/2]"),
            ("Δ₀", "[-ζ, ζ]"),
            ("F₀", "[ζ, 1 - ζ]"),
        ],
        parameters: &[("ζ", "(1 + b^2/a^2)/4")],
    },
    // oblique
    EntrySource {
        type_id: "mp",
        points: &[
            ("Γ", "[0, 0]"),
            ("X", "[1/2, 0]"),
            ("Y", "[0, 1/2]"),
            ("C", "[1/2, 1/2]"),
        ],
        parameters: &[],
    },
];
