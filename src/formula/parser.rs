//! Text form of catalog formulas.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := '-' unary | power
//! power      := atom ('^' unary)?
//! atom       := number | '[' expression (',' expression)* ']' | '(' expression ')'
//!             | 'sqrt' '(' expression ')' | identifier
//! ```
//!
//! Identifiers may contain any alphabetic character, so `cosβ`, `ζ` or `a` are all valid.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit0, digit1, multispace0},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::{fold_many0, separated_list1},
    sequence::{delimited, pair, preceded},
    IResult,
};

use super::expression::{BinaryOp, Formula, UnaryOp};
use crate::error::{KPathError, Result};

/// Parse a formula from its text form.
///
/// # Examples
///
/// ```
/// use bravais_kpoints::formula::{parse_formula, Formula};
///
/// let formula = parse_formula("[1/2, 0, 0]").unwrap();
/// assert!(matches!(formula, Formula::Vector(ref v) if v.len() == 3));
/// ```
pub fn parse_formula(source: &str) -> Result<Formula> {
    all_consuming(ws(expression))(source)
        .map(|(_, formula)| formula)
        .map_err(|e| KPathError::Parse {
            formula: source.to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// HELPER PARSERS
// =============================================================================

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn number(input: &str) -> IResult<&str, Formula> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        |digits: &str| digits.parse::<f64>().map(Formula::Constant),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, Formula> {
    map(
        recognize(pair(
            take_while1(|c: char| c.is_alphabetic() || c == '_'),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
        |name: &str| Formula::parameter(name),
    )(input)
}

fn parenthesized(input: &str) -> IResult<&str, Formula> {
    delimited(ws(char('(')), expression, ws(char(')')))(input)
}

fn vector_literal(input: &str) -> IResult<&str, Formula> {
    map(
        delimited(
            ws(char('[')),
            separated_list1(ws(char(',')), expression),
            ws(char(']')),
        ),
        Formula::Vector,
    )(input)
}

fn sqrt_call(input: &str) -> IResult<&str, Formula> {
    map(preceded(tag("sqrt"), parenthesized), |operand| {
        Formula::unary(UnaryOp::Sqrt, operand)
    })(input)
}

// =============================================================================
// PRECEDENCE LEVELS
// =============================================================================

fn atom(input: &str) -> IResult<&str, Formula> {
    // sqrt before identifier so that `sqrt(` is not read as a parameter name
    ws(alt((number, vector_literal, parenthesized, sqrt_call, identifier)))(input)
}

fn power(input: &str) -> IResult<&str, Formula> {
    let (input, base) = atom(input)?;
    let (input, exponent) = opt(preceded(ws(char('^')), unary))(input)?;
    let formula = match exponent {
        Some(exponent) => Formula::binary(BinaryOp::Pow, base, exponent),
        None => base,
    };
    Ok((input, formula))
}

fn unary(input: &str) -> IResult<&str, Formula> {
    alt((
        map(preceded(ws(char('-')), unary), |operand| {
            Formula::unary(UnaryOp::Neg, operand)
        }),
        power,
    ))(input)
}

fn term(input: &str) -> IResult<&str, Formula> {
    let (input, first) = unary(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), unary),
        move || first.clone(),
        |lhs, (op, rhs)| {
            let op = if op == '*' { BinaryOp::Mul } else { BinaryOp::Div };
            Formula::binary(op, lhs, rhs)
        },
    )(input)
}

fn expression(input: &str) -> IResult<&str, Formula> {
    let (input, first) = term(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), term),
        move || first.clone(),
        |lhs, (op, rhs)| {
            let op = if op == '+' { BinaryOp::Add } else { BinaryOp::Sub };
            Formula::binary(op, lhs, rhs)
        },
    )(input)
}
