use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Both operands have already been evaluated by the caller, in
    /// left-to-right order. Division by zero is checked explicitly; every
    /// other operation follows IEEE 754 single-precision arithmetic.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `col`: Byte column for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f32>` containing the computed value.
    ///
    /// # Errors
    /// - `DivisionByZero` when `op` is `Div` and `right` is zero.
    ///
    /// # Example
    /// ```
    /// use mathline::{ast::BinaryOperator, interpreter::evaluator::core::Interpreter};
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap();
    /// assert_eq!(result, 3.0);
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_binary(op: BinaryOperator, left: f32, right: f32, col: usize) -> EvalResult<f32> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { col });
                }
                Ok(left / right)
            },
        }
    }
}
