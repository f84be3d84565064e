use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_term},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Assignment is right-associative, so `a = b = 3` parses as `a = (b = 3)`.
/// It is only recognized when the left-hand operand parsed as a term turns
/// out to be exactly a variable; any other node followed by `=` is an error,
/// and the already-built left-hand tree is discarded.
///
/// Grammar: `assignment := term ( "=" assignment )?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `ExpectedVariableName` if `=` follows a non-variable operand.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_assignment<'s, 'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token<'s>, usize)>,
          's: 'a
{
    let expr = parse_term(tokens)?;

    if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();

        return match expr {
            Expr::Variable { name, col } => {
                let value = parse_assignment(tokens)?;
                Ok(Expr::Assign { name,
                                  value: Box::new(value),
                                  col })
            },
            other => Err(ParseError::ExpectedVariableName { col: other.column() }),
        };
    }

    Ok(expr)
}
