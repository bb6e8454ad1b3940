use crate::{
    ast::Expr,
    error::{Error, ParsingError},
    interpreter::lexer::{Scanner, Spanned, TokenKind},
};

/// Result type used by the parser.
///
/// Parsing pulls tokens from the scanner on demand, so a parse can fail with
/// either a lexical or a parsing error.
pub type ParseResult<T> = Result<T, Error>;

/// A predictive parser for arithmetic expressions.
///
/// The parser owns its [`Scanner`] and keeps exactly one token of
/// lookahead. Tokens are pulled from the scanner only when the current one
/// is consumed by [`Parser::eat`]. Parenthesized groups are tracked on an
/// explicit stack, so neither nesting depth nor chain length is limited by
/// the call stack.
///
/// Grammar:
/// ```text
/// expr   := term (("+" | "-") term)*
/// term   := factor (("*" | "/") factor)*
/// factor := INTEGER | "(" expr ")"
/// ```
///
/// # Example
/// ```
/// use reckon::interpreter::parser::core::Parser;
///
/// let tree = Parser::new("(2 + 3) * 4").unwrap().parse().unwrap();
/// assert_eq!(tree.to_string(), "(* (+ 2 3) 4)");
/// ```
pub struct Parser<'src> {
    scanner:                                    Scanner<'src>,
    pub(in crate::interpreter::parser) current: Spanned,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token()?;
        Ok(Self { scanner, current })
    }

    /// Parses exactly one expression spanning the whole input.
    ///
    /// Grammar: `input := expr EOF`
    ///
    /// # Errors
    /// - Lexical errors from the scanner.
    /// - `UnexpectedToken` if tokens remain after the expression or a `)` is
    ///   missing.
    /// - `ExpectedOperand` if an operand is missing.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        self.eat(TokenKind::EndOfInput)?;
        Ok(expr)
    }

    /// Parses a full expression starting at the current lookahead.
    ///
    /// This is the entry point of the precedence hierarchy: it begins at the
    /// lowest-precedence level. Tokens following the expression are left
    /// unconsumed.
    ///
    /// Grammar: `expression := additive`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// Returns the current lookahead token.
    #[must_use]
    pub const fn lookahead(&self) -> Spanned {
        self.current
    }

    /// Consumes the lookahead if it has the `expected` kind.
    ///
    /// On a match the next token is pulled from the scanner and the consumed
    /// token is returned.
    ///
    /// # Errors
    /// - `UnexpectedToken` naming both kinds if the lookahead does not match.
    /// - A lexical error if the following token cannot be scanned.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<Spanned> {
        let found = self.current.token.kind();
        if found != expected {
            return Err(ParsingError::UnexpectedToken { expected,
                                                       found,
                                                       position: self.current.position }.into());
        }
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}
