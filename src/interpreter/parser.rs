/// Binary operator parsing.
///
/// Contains the left-associative precedence levels of the grammar: terms
/// (`+`, `-`) and factors (`*`, `/`), along with the token-to-operator
/// mapping.
pub mod binary;
/// Core parsing entry points.
///
/// Contains the assignment rule, which is the root of the expression grammar.
pub mod core;
/// Unary and primary expression parsing.
///
/// Contains the tightest-binding levels of the grammar: the sign prefixes and
/// the atoms (numbers, identifiers, parenthesized groupings).
pub mod unary;
