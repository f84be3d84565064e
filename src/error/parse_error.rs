#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// A parse error always aborts the parse of the current line; the caller
/// receives no AST and must not attempt evaluation.
pub enum ParseError {
    /// The lexer found a character that does not start any token.
    UnrecognizedToken {
        /// The offending lexeme.
        lexeme: String,
        /// The byte column where the error occurred.
        col:    usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The byte column where the error occurred.
        col:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The byte column where the error occurred.
        col: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte column of the opening `(`.
        col: usize,
    },
    /// The left-hand side of an `=` was not a variable.
    ExpectedVariableName {
        /// The byte column of the offending target.
        col: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The byte column where the error occurred.
        col:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { lexeme, col } => {
                write!(f, "Error at column {}: Unrecognized token '{lexeme}'.", col + 1)
            },

            Self::UnexpectedToken { token, col } => {
                write!(f, "Error at column {}: Unexpected token: {token}.", col + 1)
            },

            Self::UnexpectedEndOfInput { col } => {
                write!(f, "Error at column {}: Unexpected end of input.", col + 1)
            },

            Self::ExpectedClosingParen { col } => write!(f,
                                                         "Error at column {}: Unclosed '('.",
                                                         col + 1),

            Self::ExpectedVariableName { col } => {
                write!(f, "Error at column {}: Expect variable name.", col + 1)
            },

            Self::UnexpectedTrailingTokens { token, col } => write!(f,
                                                                    "Error at column {}: Extra tokens after expression. Check your input: {token}",
                                                                    col + 1),
        }
    }
}

impl std::error::Error for ParseError {}
