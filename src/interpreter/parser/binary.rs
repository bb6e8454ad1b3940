use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            primary::Primary,
        },
    },
};

/// A left operand waiting for the operand on the other side of its
/// operator.
struct Pending {
    left:     Expr,
    op:       BinaryOperator,
    position: Position,
}

impl Pending {
    /// Folds `right` onto the pending operand, if there is one.
    fn complete(pending: Option<Self>, right: Expr) -> Expr {
        match pending {
            Some(Self { left, op, position }) => Expr::BinaryOp { left: Box::new(left),
                                                                  op,
                                                                  right: Box::new(right),
                                                                  position },
            None => right,
        }
    }
}

/// The open precedence levels of one expression: the whole input, or the
/// inside of one pair of parentheses.
#[derive(Default)]
struct Frame {
    /// `additive` level: everything left of the last `+` or `-`.
    sum:     Option<Pending>,
    /// `multiplicative` level: everything left of the last `*` or `/`.
    product: Option<Pending>,
}

impl Parser<'_> {
    /// Parses addition, subtraction, multiplication and division.
    ///
    /// The rules are:
    /// ```text
    /// additive       := multiplicative (("+" | "-") multiplicative)*
    /// multiplicative := primary (("*" | "/") primary)*
    /// ```
    ///
    /// Each rule is a left fold: a new operand is combined with everything
    /// to its left as soon as the following token shows that its level is
    /// complete, so `a - b - c` becomes `(a - b) - c`. A parenthesized
    /// group opens a fresh [`Frame`] on an explicit stack instead of a
    /// recursive call, which keeps nesting depth bounded only by memory.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut frame = Frame::default();
        let mut enclosing: Vec<Frame> = Vec::new();

        loop {
            let mut operand = match self.parse_primary()? {
                Primary::Operand(expr) => expr,
                Primary::Group => {
                    enclosing.push(std::mem::take(&mut frame));
                    continue;
                },
            };

            loop {
                let term = Pending::complete(frame.product.take(), operand);
                if let Some(op) = self.operator(&[BinaryOperator::Mul, BinaryOperator::Div]) {
                    frame.product = Some(self.pending(term, op)?);
                    break;
                }

                let sum = Pending::complete(frame.sum.take(), term);
                if let Some(op) = self.operator(&[BinaryOperator::Add, BinaryOperator::Sub]) {
                    frame.sum = Some(self.pending(sum, op)?);
                    break;
                }

                let Some(outer) = enclosing.pop() else {
                    return Ok(sum);
                };
                self.eat(TokenKind::RightParen)?;
                frame = outer;
                operand = sum;
            }
        }
    }

    /// Returns the lookahead's operator if it is one of `accepted`.
    fn operator(&self, accepted: &[BinaryOperator]) -> Option<BinaryOperator> {
        token_to_binary_operator(&self.current.token).filter(|op| accepted.contains(op))
    }

    /// Consumes `op` and parks `left` until its right operand is parsed.
    fn pending(&mut self, left: Expr, op: BinaryOperator) -> ParseResult<Pending> {
        let position = self.eat(op.token_kind())?.position;
        Ok(Pending { left, op, position })
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not operators.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Divide), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LeftParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Multiply => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        Token::Integer(_) | Token::LeftParen | Token::RightParen | Token::EndOfInput => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_operator_tokens_map_to_operators() {
        assert_eq!(token_to_binary_operator(&Token::Plus), Some(BinaryOperator::Add));
        assert_eq!(token_to_binary_operator(&Token::Minus), Some(BinaryOperator::Sub));
        assert_eq!(token_to_binary_operator(&Token::Multiply), Some(BinaryOperator::Mul));
        assert_eq!(token_to_binary_operator(&Token::Integer(1)), None);
        assert_eq!(token_to_binary_operator(&Token::EndOfInput), None);
    }

    #[test]
    fn operator_round_trips_through_its_token_kind() {
        for token in [Token::Plus, Token::Minus, Token::Multiply, Token::Divide] {
            let op = token_to_binary_operator(&token).unwrap();
            assert_eq!(op.token_kind(), token.kind());
        }
    }
}
