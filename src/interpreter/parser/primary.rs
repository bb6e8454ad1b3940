use crate::{
    ast::Expr,
    error::ParsingError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// What [`Parser::parse_primary`] found at the start of an operand.
#[derive(Debug)]
pub(in crate::interpreter::parser) enum Primary {
    /// A complete operand: an integer literal.
    Operand(Expr),
    /// A `(` was consumed; a nested expression and its `)` follow.
    Group,
}

impl Parser<'_> {
    /// Parses the start of an operand: an integer literal or an opening
    /// parenthesis.
    ///
    /// The rule is: `primary := INTEGER | "(" expression ")"`. Only the `(`
    /// is consumed here; the caller parses the nested expression and the
    /// closing `)` on its own stack.
    ///
    /// # Errors
    /// `ExpectedOperand` if the lookahead is neither an integer nor `(`.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Primary> {
        let current = self.current;
        match current.token {
            Token::Integer(value) => {
                self.eat(TokenKind::Integer)?;
                Ok(Primary::Operand(Expr::Literal { value,
                                                    position: current.position }))
            },
            Token::LeftParen => {
                self.eat(TokenKind::LeftParen)?;
                Ok(Primary::Group)
            },
            token => Err(ParsingError::ExpectedOperand { found:    token.kind(),
                                                         position: current.position, }.into()),
        }
    }
}
