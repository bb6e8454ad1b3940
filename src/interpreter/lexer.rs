use std::fmt;

use logos::Logos;
use strum::Display;
use tracing::trace;

use crate::error::LexicalError;

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexicalError>;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the scanner.
/// Only [`Token::Integer`] carries a payload; every other token is identified
/// by its variant alone.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[^\S\n]+")]
#[logos(skip(r"\n", newline_callback))]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Produced by the [`Scanner`] once the source is exhausted.
    EndOfInput,
}

/// The kind of a [`Token`], without its payload.
///
/// Used wherever only the shape of a token matters, most notably in parse
/// errors that name what was expected and what was found.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[strum(to_string = "integer")]
    Integer,
    #[strum(to_string = "'+'")]
    Plus,
    #[strum(to_string = "'-'")]
    Minus,
    #[strum(to_string = "'*'")]
    Multiply,
    #[strum(to_string = "'/'")]
    Divide,
    #[strum(to_string = "'('")]
    LeftParen,
    #[strum(to_string = "')'")]
    RightParen,
    #[strum(to_string = "end of input")]
    EndOfInput,
}

impl TokenKind {
    /// Short upper-case tag used by token and tree dumps, e.g. `MUL`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MUL",
            Self::Divide => "DIV",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::EndOfInput => "EOF",
        }
    }

    /// The single source character this kind is spelled with, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
            Self::LeftParen => Some('('),
            Self::RightParen => Some(')'),
            Self::Integer | Self::EndOfInput => None,
        }
    }
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

/// Formats a token as `Token(KIND, payload)`.
///
/// ```
/// use reckon::interpreter::lexer::Token;
///
/// assert_eq!(Token::Integer(3).to_string(), "Token(INTEGER, 3)");
/// assert_eq!(Token::Plus.to_string(), "Token(PLUS, '+')");
/// assert_eq!(Token::EndOfInput.to_string(), "Token(EOF, None)");
/// ```
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match (self, kind.symbol()) {
            (Self::Integer(value), _) => write!(f, "Token({}, {value})", kind.tag()),
            (_, Some(symbol)) => write!(f, "Token({}, '{symbol}')", kind.tag()),
            (_, None) => write!(f, "Token({}, None)", kind.tag()),
        }
    }
}

/// A 1-based line and column in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    /// The token itself.
    pub token:    Token,
    /// Where the token starts in the source.
    pub position: Position,
}

/// Turns a source string into tokens, one per call.
///
/// The scanner is lazy: nothing is read until [`Scanner::next_token`] is
/// called. Once the input is exhausted it keeps returning
/// [`Token::EndOfInput`]. A [`LexicalError`] is returned for the first
/// character that cannot start a token; the scanner does not skip past it.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Scanner, Token};
///
/// let mut scanner = Scanner::new("12 + 3");
///
/// assert_eq!(scanner.next_token().unwrap().token, Token::Integer(12));
/// assert_eq!(scanner.next_token().unwrap().token, Token::Plus);
/// assert_eq!(scanner.next_token().unwrap().token, Token::Integer(3));
/// assert_eq!(scanner.next_token().unwrap().token, Token::EndOfInput);
/// assert_eq!(scanner.next_token().unwrap().token, Token::EndOfInput);
/// ```
pub struct Scanner<'src> {
    lexer:     logos::Lexer<'src, Token>,
    /// Byte offset and column of the last position handed out, so columns
    /// are counted incrementally along a line.
    mark:      (usize, usize),
    exhausted: bool,
    failed:    bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `source`. No input is consumed yet.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:     Token::lexer_with_extras(source, LexerExtras::default()),
               mark:      (0, 1),
               exhausted: false,
               failed:    false, }
    }

    /// Returns the next token, skipping any whitespace before it.
    ///
    /// # Errors
    /// - `UnknownCharacter` if the next non-whitespace character is not a
    ///   digit, an operator or a parenthesis.
    /// - `LiteralTooLarge` if a run of digits does not fit in an `i64`.
    pub fn next_token(&mut self) -> LexResult<Spanned> {
        if self.exhausted {
            return Ok(self.end_of_input());
        }

        match self.lexer.next() {
            Some(Ok(token)) => {
                let position = self.position_of(self.lexer.span().start);
                trace!(%token, %position, "scanned token");
                Ok(Spanned { token, position })
            },
            Some(Err(())) => {
                let position = self.position_of(self.lexer.span().start);
                Err(self.lexical_error(position))
            },
            None => {
                self.exhausted = true;
                Ok(self.end_of_input())
            },
        }
    }

    fn end_of_input(&mut self) -> Spanned {
        Spanned { token:    Token::EndOfInput,
                  position: self.position_of(self.lexer.source().len()), }
    }

    /// Builds the error for the slice logos could not match.
    fn lexical_error(&self, position: Position) -> LexicalError {
        let slice = self.lexer.slice();
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            return LexicalError::LiteralTooLarge { literal: slice.to_string(),
                                                   position };
        }
        let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        LexicalError::UnknownCharacter { character, position }
    }

    /// Converts a byte offset on the current line into a position.
    ///
    /// The line comes from the lexer extras. The column is counted in
    /// characters from the last mark when it lies on the same line, so a
    /// long line is walked once rather than once per token.
    fn position_of(&mut self, offset: usize) -> Position {
        let LexerExtras { line, line_start } = self.lexer.extras;
        let (from, column) = match self.mark {
            (mark, column) if mark >= line_start && mark <= offset => (mark, column),
            _ => (line_start, 1),
        };
        let column = column
                     + self.lexer
                           .source()
                           .get(from..offset)
                           .map_or(0, |s| s.chars().count());
        self.mark = (offset, column);
        Position::new(line, column)
    }
}

/// Yields every token before [`Token::EndOfInput`], then stops.
///
/// Iteration also stops right after the first lexical error has been yielded.
impl Iterator for Scanner<'_> {
    type Item = LexResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(Spanned { token: Token::EndOfInput,
                         .. }) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            },
            ok => Some(ok),
        }
    }
}

/// Scans a whole source string, including the final end-of-input token.
///
/// # Errors
/// Returns the first [`LexicalError`] encountered.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("(1)").unwrap().into_iter().map(|t| t.token).collect();
/// assert_eq!(tokens,
///            vec![Token::LeftParen, Token::Integer(1), Token::RightParen, Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Spanned>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let spanned = scanner.next_token()?;
        tokens.push(spanned);
        if spanned.token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line for error reporting. Updated by
/// [`newline_callback`] every time a line break is skipped.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset where the current line starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Bumps the line counter past a skipped `\n`.
fn newline_callback(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit in an `i64`, which logos turns
/// into a lexing error for the whole slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.token.kind()).collect()
    }

    #[test]
    fn scans_operators_parentheses_and_integers() {
        use TokenKind::*;

        assert_eq!(kinds("12 + (3*4) - 5 / 6"),
                   vec![Integer, Plus, LeftParen, Integer, Multiply, Integer, RightParen,
                        Minus, Integer, Divide, Integer, EndOfInput]);
    }

    #[test]
    fn integer_payload_is_the_whole_digit_run() {
        let tokens = tokenize("007 1234567890").unwrap();
        assert_eq!(tokens[0].token, Token::Integer(7));
        assert_eq!(tokens[1].token, Token::Integer(1_234_567_890));
    }

    #[test]
    fn whitespace_of_any_kind_is_skipped() {
        assert_eq!(kinds(" \t1\n+\r\n2 "),
                   vec![TokenKind::Integer, TokenKind::Plus, TokenKind::Integer,
                        TokenKind::EndOfInput]);
        assert_eq!(kinds("   "), vec![TokenKind::EndOfInput]);
        assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut scanner = Scanner::new("7");
        assert_eq!(scanner.next_token().unwrap().token, Token::Integer(7));
        for _ in 0..5 {
            let spanned = scanner.next_token().unwrap();
            assert_eq!(spanned.token, Token::EndOfInput);
            assert_eq!(spanned.position, Position::new(1, 2));
        }
    }

    #[test]
    fn unknown_character_is_reported_with_its_position() {
        let mut scanner = Scanner::new("2 + $");
        assert_eq!(scanner.next_token().unwrap().token, Token::Integer(2));
        assert_eq!(scanner.next_token().unwrap().token, Token::Plus);
        assert_eq!(scanner.next_token(),
                   Err(LexicalError::UnknownCharacter { character: '$',
                                                        position:  Position::new(1, 5), }));
    }

    #[test]
    fn decimal_point_is_not_part_of_a_literal() {
        let err = tokenize("1.5").unwrap_err();
        assert!(matches!(err, LexicalError::UnknownCharacter { character: '.', .. }));
    }

    #[test]
    fn literal_overflowing_i64_is_rejected() {
        let err = tokenize("1 + 99999999999999999999").unwrap_err();
        assert_eq!(err,
                   LexicalError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                                   position: Position::new(1, 5), });
    }

    #[test]
    fn positions_follow_lines_and_columns() {
        let positions: Vec<Position> =
            tokenize("1 +\n  (2)").unwrap().iter().map(|t| t.position).collect();
        assert_eq!(positions,
                   vec![Position::new(1, 1),
                        Position::new(1, 3),
                        Position::new(2, 3),
                        Position::new(2, 4),
                        Position::new(2, 5),
                        Position::new(2, 6)]);
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let tokens = tokenize("\u{a0}7\r\n\u{3000}+\n\n  8").unwrap();
        let positions: Vec<Position> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions,
                   vec![Position::new(1, 2),
                        Position::new(2, 2),
                        Position::new(4, 3),
                        Position::new(4, 4)]);
    }

    #[test]
    fn iterator_stops_before_end_of_input() {
        let tokens: Vec<Token> = Scanner::new("1 + 2").map(|t| t.unwrap().token)
                                                      .collect();
        assert_eq!(tokens, vec![Token::Integer(1), Token::Plus, Token::Integer(2)]);
    }

    #[test]
    fn iterator_stops_after_first_error() {
        let items: Vec<LexResult<Spanned>> = Scanner::new("1 # 2").collect();
        assert_eq!(items.len(), 2);
        assert!(items[1].is_err());
    }

    #[test]
    fn tokens_display_like_a_dump() {
        assert_eq!(Token::Integer(42).to_string(), "Token(INTEGER, 42)");
        assert_eq!(Token::Divide.to_string(), "Token(DIV, '/')");
        assert_eq!(Token::RightParen.to_string(), "Token(RPAREN, ')')");
        assert_eq!(Token::EndOfInput.to_string(), "Token(EOF, None)");
    }

    #[test]
    fn token_kinds_display_as_written() {
        assert_eq!(TokenKind::RightParen.to_string(), "')'");
        assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
        assert_eq!(TokenKind::Integer.to_string(), "integer");
    }
}
