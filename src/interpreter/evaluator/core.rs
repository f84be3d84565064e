use std::collections::BTreeMap;

use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// This struct holds the binding store: the ordered mapping from variable
/// names to values that persists across input lines for the lifetime of the
/// session.
///
/// ## Usage
///
/// `Interpreter` is created once and reused for evaluating every line. Each
/// evaluation reads and writes the binding store; a failed evaluation leaves
/// it intact.
pub struct Interpreter {
    /// The binding store. Keys are owned copies of variable names, ordered
    /// lexicographically; assignment upserts by exact key equality.
    pub bindings: BTreeMap<String, f32>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a new interpreter with an empty binding store.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: BTreeMap::new(), }
    }

    /// Evaluates a parse result and returns the computed value.
    ///
    /// This is the main entry point for evaluation. A `None` AST (the parser
    /// produced nothing usable) is itself a runtime error.
    ///
    /// # Parameters
    /// - `ast`: The parse result for one input line.
    ///
    /// # Returns
    /// The numeric value of the expression.
    ///
    /// # Errors
    /// - `NothingToInterpret` if `ast` is `None`.
    /// - Any error raised while walking the tree.
    pub fn eval(&mut self, ast: Option<&Expr>) -> EvalResult<f32> {
        match ast {
            Some(expr) => self.eval_expr(expr),
            None => Err(RuntimeError::NothingToInterpret),
        }
    }

    /// Evaluates a single expression node.
    ///
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, unary sign, binary operations, groupings, and assignments.
    /// Binary operands are evaluated left to right, which is observable
    /// because subexpressions may contain assignments.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value of the expression.
    ///
    /// # Errors
    /// - `UnknownVariable` for a reference to an undefined variable.
    /// - `DivisionByZero` for a division with a zero right operand.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<f32> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, col } => self.eval_variable(name, *col),
            Expr::Unary { op, expr, .. } => {
                let value = self.eval_expr(expr)?;
                Ok(match op {
                       UnaryOperator::Plus => value,
                       UnaryOperator::Negate => -value,
                   })
            },
            Expr::Binary { left, op, right, col } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, left, right, *col)
            },
            Expr::Grouping { expr, .. } => self.eval_expr(expr),
            Expr::Assign { name, value, .. } => self.eval_assign(name, value),
        }
    }

    /// Resolves a variable reference against the binding store.
    ///
    /// Lookup is by exact name equality. A missing name cuts the walk short;
    /// no fallback value is produced.
    fn eval_variable(&self, name: &str, col: usize) -> EvalResult<f32> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           col })
    }

    /// Evaluates an assignment and upserts the result into the binding store.
    ///
    /// The right-hand side is evaluated first; the name is copied into the
    /// store on first insert and its value updated in place on reassignment.
    /// The assigned value is returned, making assignment usable as an
    /// expression.
    fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<f32> {
        let value = self.eval_expr(value)?;
        self.bindings.insert(name.to_string(), value);
        Ok(value)
    }
}
