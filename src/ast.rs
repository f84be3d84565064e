/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every construct the grammar can produce: literals, variable
/// references, assignments, unary sign, the four binary operations, and
/// parenthesized groupings. Each composite variant owns its children, so a
/// tree is released structurally when the root goes out of scope — including
/// any partially built subtree discarded by an aborted parse.
///
/// Variable names are copied out of the input line eagerly; the tree never
/// borrows from the buffer it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The literal value.
        value: f32,
        /// Byte column in the input line.
        col:   usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Byte column in the input line.
        col:  usize,
    },
    /// An assignment binding a name to the value of an expression.
    ///
    /// Assignment is itself an expression; its value is the assigned value,
    /// which is what makes chains like `a = b = 3` work.
    Assign {
        /// Name of the target variable.
        name:  String,
        /// The expression whose value is assigned.
        value: Box<Self>,
        /// Byte column in the input line.
        col:   usize,
    },
    /// A unary sign operation (`+x` or `-x`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Byte column in the input line.
        col:  usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte column in the input line.
        col:   usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Byte column in the input line.
        col:  usize,
    },
}

impl Expr {
    /// Gets the byte column from `self`.
    /// ## Example
    /// ```
    /// use mathline::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             col:  4, };
    ///
    /// assert_eq!(expr.column(), 4);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { col, .. }
            | Self::Variable { col, .. }
            | Self::Assign { col, .. }
            | Self::Unary { col, .. }
            | Self::Binary { col, .. }
            | Self::Grouping { col, .. } => *col,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators cover the four arithmetic operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
///
/// Unary operators are the two sign prefixes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity sign (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}
