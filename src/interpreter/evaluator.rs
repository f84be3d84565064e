/// Binary operation evaluation.
///
/// Applies the four arithmetic operators to already-evaluated operands and
/// checks for division by zero.
pub mod binary;
/// Core evaluation.
///
/// Contains the `Interpreter` state (the variable binding store) and the
/// tree-walking dispatch over AST nodes.
pub mod core;
