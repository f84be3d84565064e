#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error aborts the evaluation of the current line; the binding
/// store is left exactly as it was when the error was raised, so the session
/// stays usable for the next line.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The byte column where the error occurred.
        col:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte column where the error occurred.
        col: usize,
    },
    /// The parser produced no AST for this line.
    NothingToInterpret,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, col } => write!(f,
                                                          "Error at column {}: '{name}' variable not defined.",
                                                          col + 1),

            Self::DivisionByZero { col } => write!(f,
                                                   "Error at column {}: Zero division error, unable to divide by 0.",
                                                   col + 1),

            Self::NothingToInterpret => write!(f, "Unable to interpret this string."),
        }
    }
}

impl std::error::Error for RuntimeError {}
