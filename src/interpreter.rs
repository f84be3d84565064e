/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, performs the arithmetic operations,
/// reads and writes the variable binding store, and produces a numeric
/// result. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Owns the binding store that persists variables across input lines.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw text of one line and produces a
/// sequence of tokens, each corresponding to a meaningful language element
/// such as a number, identifier, operator, or parenthesis. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Handles numeric literals, identifiers, and single-character operators.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the expression. This
/// enables the evaluator to execute user input.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and operator precedence, reporting errors with column
///   info.
/// - Supports assignment, grouping, unary sign, and the four binary
///   operators.
pub mod parser;
