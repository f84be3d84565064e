use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Identifier tokens borrow their lexeme from the input line; they are views
/// into the scanned buffer, not copies.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token<'s> {
    /// Numeric literal tokens, such as `42`, `3.14` or the lax `1.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f32),
    /// Identifier tokens; variable names such as `x` or `rate`.
    /// Letter runs only, no digits or underscores, case-sensitive.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice())]
    Identifier(&'s str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,

    /// Runs of spaces. Only the space character is whitespace here; a tab
    /// does not start any token and lexes as an error.
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// Scans one line of input into a sequence of `(token, column)` pairs.
///
/// The line is truncated at the first newline or NUL before scanning, so a
/// line is always a complete, self-terminated unit; end-of-input is simply
/// the end of the returned sequence.
///
/// # Parameters
/// - `source`: The raw input text.
///
/// # Returns
/// The scanned tokens, each paired with the byte column of its lexeme.
///
/// # Errors
/// Returns `ParseError::UnrecognizedToken` for any character that does not
/// start a recognized token.
///
/// # Example
/// ```
/// use mathline::interpreter::lexer::{Token, scan_line};
///
/// let tokens = scan_line("x = 5").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x"), 0),
///                 (Token::Equals, 2),
///                 (Token::Number(5.0), 4),]);
/// ```
pub fn scan_line(source: &str) -> Result<Vec<(Token<'_>, usize)>, ParseError> {
    let line = match source.find(['\n', '\0']) {
        Some(end) => &source[..end],
        None => source,
    };

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        let col = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, col)),
            Err(()) => {
                return Err(ParseError::UnrecognizedToken { lexeme: lexer.slice().to_string(),
                                                           col });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f32)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number<'s>(lex: &logos::Lexer<'s, Token<'s>>) -> Option<f32> {
    lex.slice().parse().ok()
}
