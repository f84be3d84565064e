use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_assignment},
    },
};

/// Parses a unary expression.
///
/// Supports the sign prefixes:
/// - `-` (numeric negation)
/// - `+` (identity)
///
/// Unary operators are right-associative, so an input like `- - 5` is parsed
/// as `-(-5)`.
///
/// If no sign prefix is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'s, 'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token<'s>, usize)>,
          's: 'a
{
    if let Some((Token::Minus, col)) = tokens.peek() {
        let col = *col;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Negate,
                         expr: Box::new(expr),
                         col })
    } else if let Some((Token::Plus, col)) = tokens.peek() {
        let col = *col;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Plus,
                         expr: Box::new(expr),
                         col })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - parenthesized expressions
///
/// A parenthesized expression restarts the grammar at the assignment rule,
/// which is what allows forms like `(x = 2) + 1`.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | "(" assignment ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `ExpectedClosingParen` if a `(` is not matched by a `)`.
/// - `UnexpectedToken` for any other token in primary position.
/// - `UnexpectedEndOfInput` if the token stream ends here.
pub(crate) fn parse_primary<'s, 'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token<'s>, usize)>,
          's: 'a
{
    match tokens.next() {
        Some((Token::Number(value), col)) => Ok(Expr::Literal { value: *value,
                                                                col:   *col, }),

        Some((Token::Identifier(name), col)) => Ok(Expr::Variable { name: (*name).to_string(),
                                                                    col:  *col, }),

        Some((Token::LParen, col)) => {
            let expr = parse_assignment(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(Expr::Grouping { expr: Box::new(expr),
                                                                col:  *col, }),
                _ => Err(ParseError::ExpectedClosingParen { col: *col }),
            }
        },

        Some((tok, col)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                              col:   *col, }),

        None => Err(ParseError::UnexpectedEndOfInput { col: 0 }),
    }
}
