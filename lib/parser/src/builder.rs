use cursor::Col;
use log::trace;
use scanner::{Operator, Token, TokenData};

use crate::{Expr, ParserError, ParserErrorType, Result};

/// Input of the tree builder: either an operand ready to be pushed or an operator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Item {
    Operand { expr: Expr, col: Col },
    Operator { operator: Operator, col: Col },
}

impl From<&Token<'_>> for Item {
    fn from(token: &Token<'_>) -> Self {
        let col = token.col();
        match token.data {
            TokenData::Operator(operator) => Item::Operator { operator, col },
            TokenData::Number(n) => Item::Operand { expr: Expr::Literal(n), col },
            TokenData::Identifier => Item::Operand { expr: Expr::variable(token.lexeme()), col },
        }
    }
}

/// Shift/reduce scan over items whose operators all share one precedence class.
///
/// Operands are shifted onto the stack. An operator reduces the top of the stack
/// with the item right after it, so the result is left-associative. `end` is the
/// column reported when the input runs out where an operand was expected.
pub(crate) fn build(items: Vec<Item>, end: Col) -> Result<Expr> {
    let mut stack: Vec<(Expr, Col)> = Vec::new();
    let mut items = items.into_iter();

    while let Some(item) = items.next() {
        match item {
            Item::Operand { expr, col } => {
                trace!("shift {expr}");
                stack.push((expr, col));
            }
            Item::Operator { operator, col } => {
                let (left, left_col) = stack
                    .pop()
                    .ok_or(ParserError::new(ParserErrorType::ExpectedLeftOperand(operator), col))?;

                let right = match items.next() {
                    Some(Item::Operand { expr, .. }) => expr,
                    Some(Item::Operator { col, .. }) => {
                        return Err(ParserError::new(
                            ParserErrorType::ExpectedRightOperand(operator),
                            col,
                        )
                        .into())
                    }
                    None => {
                        return Err(ParserError::new(
                            ParserErrorType::ExpectedRightOperand(operator),
                            end,
                        )
                        .into())
                    }
                };

                let reduced = Expr::binary(left, operator, right);
                trace!("reduce {reduced}");
                stack.push((reduced, left_col));
            }
        }
    }

    let mut stack = stack.into_iter();
    match (stack.next(), stack.next()) {
        (Some((expr, _)), None) => Ok(expr),
        (Some(_), Some((_, col))) => Err(ParserError::new(ParserErrorType::ExpectedOperator, col).into()),
        (None, _) => Err(ParserError::new(ParserErrorType::EmptyExpression, end).into()),
    }
}
