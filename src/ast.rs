use std::fmt;

use strum::Display;

use crate::interpreter::lexer::{Position, TokenKind};

/// The four arithmetic operators a binary node can apply.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition: `+`
    #[strum(to_string = "+")]
    Add,
    /// Subtraction: `-`
    #[strum(to_string = "-")]
    Sub,
    /// Multiplication: `*`
    #[strum(to_string = "*")]
    Mul,
    /// Division: `/`
    #[strum(to_string = "/")]
    Div,
}

impl BinaryOperator {
    /// Returns the token kind this operator is written with.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Multiply,
            Self::Div => TokenKind::Divide,
        }
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is closed over exactly two shapes. Every `BinaryOp` owns both of
/// its children, so a tree has no shared nodes and no back references.
///
/// Displaying an `Expr` gives a compact S-expression; the alternate form
/// (`{:#}`) gives an indented dump of the tree.
///
/// # Example
/// ```
/// let tree = reckon::parse("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(+ 2 (* 3 4))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal value.
        value:    i64,
        /// Where the literal starts in the source.
        position: Position,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the source.
        position: Position,
    },
}

impl Expr {
    /// Returns the source position attached to this node.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Moves any binary children out of this node onto `stack`, leaving
    /// leaf placeholders behind.
    fn take_children(&mut self, stack: &mut Vec<Self>) {
        if let Self::BinaryOp { left, right, .. } = self {
            for child in [left, right] {
                if matches!(**child, Self::BinaryOp { .. }) {
                    let leaf = Self::Literal { value:    0,
                                               position: child.position(), };
                    stack.push(std::mem::replace(&mut **child, leaf));
                }
            }
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self, 0)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(&text)?,
                Piece::Node(Self::Literal { value, .. }, level) => {
                    write!(f, "{}Num({value})", "  ".repeat(level))?;
                },
                Piece::Node(Self::BinaryOp { left, op, right, .. }, level) => {
                    let indent = "  ".repeat(level);
                    write!(f, "{indent}BinOp:\n{indent}  left:\n")?;
                    pieces.push(Piece::Node(right, level + 2));
                    pieces.push(Piece::Text(format!("\n{indent}  op: {}\n{indent}  right:\n",
                                                    op.token_kind().tag())));
                    pieces.push(Piece::Node(left, level + 2));
                },
            }
        }
        Ok(())
    }

    fn write_s_expression(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self, 0)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(&text)?,
                Piece::Node(Self::Literal { value, .. }, _) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }, _) => {
                    write!(f, "({op} ")?;
                    pieces.push(Piece::Text(")".to_string()));
                    pieces.push(Piece::Node(right, 0));
                    pieces.push(Piece::Text(" ".to_string()));
                    pieces.push(Piece::Node(left, 0));
                },
            }
        }
        Ok(())
    }
}

/// Frees a tree without recursing once per level, so a long operator chain
/// cannot exhaust the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.take_children(&mut stack);
        }
    }
}

/// Pending output while rendering a tree with an explicit stack.
enum Piece<'a> {
    Node(&'a Expr, usize),
    Text(String),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_tree(f)
        } else {
            self.write_s_expression(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn lit(value: i64) -> Expr {
        Expr::Literal { value,
                        position: Position::default() }
    }

    fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position: Position::default() }
    }

    #[test]
    fn displays_as_s_expression() {
        let tree = bin(lit(1), BinaryOperator::Sub, bin(lit(2), BinaryOperator::Div, lit(3)));
        assert_snapshot!(tree.to_string(), @"(- 1 (/ 2 3))");
    }

    #[test]
    fn alternate_display_dumps_the_tree() {
        let tree = bin(lit(2), BinaryOperator::Add, bin(lit(3), BinaryOperator::Mul, lit(4)));
        assert_snapshot!(format!("{tree:#}"), @r"
        BinOp:
          left:
            Num(2)
          op: PLUS
          right:
            BinOp:
              left:
                Num(3)
              op: MUL
              right:
                Num(4)
        ");
    }

    #[test]
    fn literal_dump_is_a_single_line() {
        assert_eq!(format!("{:#}", lit(9)), "Num(9)");
    }

    #[test]
    fn long_chains_display_and_drop_without_recursion() {
        let tree = (0..200_000).fold(lit(1), |acc, _| bin(acc, BinaryOperator::Add, lit(1)));
        let rendered = tree.to_string();
        assert!(rendered.starts_with("(+ (+ (+ "));
        assert!(rendered.ends_with(" 1) 1) 1)"));
        assert_eq!(rendered.matches('+').count(), 200_000);
        drop(tree);
    }

    #[test]
    fn operators_map_back_to_their_tokens() {
        assert_eq!(BinaryOperator::Add.token_kind(), TokenKind::Plus);
        assert_eq!(BinaryOperator::Div.token_kind(), TokenKind::Divide);
        assert_eq!(BinaryOperator::Mul.to_string(), "*");
    }
}
