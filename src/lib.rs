//! # mathline
//!
//! mathline is an interactive evaluator for one-line arithmetic expressions
//! written in Rust. Each input line is scanned, parsed by recursive descent
//! into an abstract syntax tree, and walked against a binding store that
//! persists variables across lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{evaluator::core::Interpreter, lexer, parser::core::parse_assignment},
};

/// Defines the structure of parsed input.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source columns to AST nodes for error reporting.
/// - Owns its children, so discarded trees are released structurally.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a line. Parsing and evaluation are independent error
/// domains; each is a single enum with a human-readable message and no
/// further taxonomy, and callers branch only on whether an error occurred.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte columns and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from one line of text to a numeric result. The lexer is
/// driven one token ahead of the parse position; the evaluator walks the
/// resulting tree exactly once.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses one line of input into an AST.
///
/// The line is scanned into tokens and parsed by recursive descent. A line
/// with no tokens at all (empty, or only spaces) yields `Ok(None)` without
/// error; whether that counts as a fault is the caller's concern. Parsing is
/// all-or-nothing: any fault aborts the parse and no AST is returned.
///
/// Note that parsing never runs to completion with tokens left over; extra
/// tokens after a complete expression are a parse error.
///
/// # Parameters
/// - `source`: The raw input line. Anything past the first newline or NUL is
///   ignored.
///
/// # Returns
/// The AST root, or `None` for a blank line.
///
/// # Errors
/// Returns a `ParseError` describing the first fault found in the line.
///
/// # Examples
/// ```
/// use mathline::parse_line;
///
/// assert!(parse_line("2 + 3 * 4").unwrap().is_some());
/// assert!(parse_line("   ").unwrap().is_none());
///
/// // Unclosed parenthesis: no AST is produced.
/// assert!(parse_line("(1 + 2").is_err());
/// ```
pub fn parse_line(source: &str) -> Result<Option<Expr>, ParseError> {
    let tokens = lexer::scan_line(source)?;

    let mut iter = tokens.iter().peekable();
    if iter.peek().is_none() {
        return Ok(None);
    }

    let expr = parse_assignment(&mut iter)?;

    if let Some((token, col)) = iter.peek() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                          col:   *col, });
    }

    Ok(Some(expr))
}

/// Parses and evaluates one line of input against an interpreter session.
///
/// This is the convenience entry point combining [`parse_line`] and
/// [`Interpreter::eval`]. Variables assigned on one line are visible on the
/// next, because the interpreter's binding store outlives any single call.
///
/// # Errors
/// Returns an error if parsing or evaluation fails. A blank line is reported
/// as an evaluation fault ("Unable to interpret this string."); callers that
/// want to skip blank lines should do so before calling.
///
/// # Examples
/// ```
/// use mathline::{eval_line, interpreter::evaluator::core::Interpreter};
///
/// let mut interpreter = Interpreter::new();
///
/// // Assignment is an expression and persists across lines.
/// assert_eq!(eval_line(&mut interpreter, "x = 5").unwrap(), 5.0);
/// assert_eq!(eval_line(&mut interpreter, "x + 1").unwrap(), 6.0);
///
/// // Example with an intentional error (unknown variable).
/// let res = eval_line(&mut interpreter, "y + 1"); // 'y' is not defined
/// assert!(res.is_err());
/// ```
pub fn eval_line(interpreter: &mut Interpreter,
                 source: &str)
                 -> Result<f32, Box<dyn std::error::Error>> {
    let ast = parse_line(source)?;
    let value = interpreter.eval(ast.as_ref())?;

    Ok(value)
}
