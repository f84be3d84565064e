/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unrecognized characters, unexpected
/// tokens, unclosed parentheses, and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include division by zero, references to undefined variables, and
/// evaluation of an empty parse result.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
