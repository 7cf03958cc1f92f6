use std::collections::BTreeSet;

use super::expression::Formula;

/// Collect the names of every parameter referenced anywhere in `formula`.
pub fn free_parameters(formula: &Formula) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    collect_parameters(formula, &mut names);
    names
}

/// Union of the free parameters of several formulas.
pub fn free_parameters_of<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for formula in formulas {
        collect_parameters(formula, &mut names);
    }
    names
}

fn collect_parameters(formula: &Formula, names: &mut BTreeSet<String>) {
    match formula {
        Formula::Constant(_) => {}
        Formula::Parameter(name) => {
            names.insert(name.clone());
        }
        Formula::Vector(components) => {
            for component in components {
                collect_parameters(component, names);
            }
        }
        Formula::Unary(_, operand) => collect_parameters(operand, names),
        Formula::Binary(_, lhs, rhs) => {
            collect_parameters(lhs, names);
            collect_parameters(rhs, names);
        }
    }
}
