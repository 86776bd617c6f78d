mod builder;
mod expr;
mod splitter;

use cursor::Col;
use errors::{SyntaxError, SyntaxErrors};
use log::debug;
use scanner::{Operator, Scanner, Token};

use builder::Item;
pub use expr::Expr;
use splitter::Piece;

pub(crate) use errors::Result;

#[derive(Debug)]
pub struct ParserError {
    error: ParserErrorType,
    col: Col,
}

impl From<ParserError> for SyntaxError {
    fn from(error: ParserError) -> Self {
        SyntaxError::new(error.col, error.error)
    }
}

impl ParserError {
    fn new(error: ParserErrorType, col: Col) -> Self {
        Self { error, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParserErrorType {
    ExpectedLeftOperand(Operator),
    ExpectedRightOperand(Operator),
    ExpectedOperator,
    EmptyExpression,
}

impl std::fmt::Display for ParserErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserErrorType::ExpectedLeftOperand(op) => write!(f, "Expected operand before '{op}'"),
            ParserErrorType::ExpectedRightOperand(op) => write!(f, "Expected operand after '{op}'"),
            ParserErrorType::ExpectedOperator => write!(f, "Expected operator between operands"),
            ParserErrorType::EmptyExpression => write!(f, "Empty expression"),
        }
    }
}

/// How an expression has to be taken apart before it can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// At most one precedence class is present, the tokens are built in one go.
    Direct,
    /// `+`/`-` and `*`/`/` are mixed: the `*`/`/` runs are built first and then
    /// combined by the `+`/`-` operators between them.
    Split,
}

impl Strategy {
    pub fn of(tokens: &[Token]) -> Self {
        let operators = || tokens.iter().filter_map(Token::operator);
        if operators().any(Operator::is_factor) && operators().any(Operator::is_term) {
            Strategy::Split
        } else {
            Strategy::Direct
        }
    }
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    end: Col,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> std::result::Result<Self, SyntaxErrors> {
        let tokens = Scanner::new(source).scan_tokens()?;
        Ok(Self { tokens, end: Col::end_of(source) })
    }

    pub fn strategy(&self) -> Strategy {
        Strategy::of(&self.tokens)
    }

    pub fn parse(self) -> std::result::Result<Expr, SyntaxErrors> {
        let strategy = self.strategy();
        debug!("Parsing {} tokens, strategy {:?}", self.tokens.len(), strategy);

        let items: Vec<Item> = self.tokens.iter().map(Item::from).collect();
        let expr = match strategy {
            Strategy::Direct => builder::build(items, self.end)?,
            Strategy::Split => self.build_split(items)?,
        };

        debug!("Parsed {expr}");
        Ok(expr)
    }

    fn build_split(&self, items: Vec<Item>) -> Result<Expr> {
        let mut terms = Vec::new();
        for piece in splitter::split_terms(items, self.end) {
            match piece {
                Piece::Segment { items, end } => {
                    let col = match items.first() {
                        Some(Item::Operand { col, .. } | Item::Operator { col, .. }) => *col,
                        None => end,
                    };
                    let expr = builder::build(items, end)?;
                    terms.push(Item::Operand { expr, col });
                }
                Piece::Term { operator, col } => terms.push(Item::Operator { operator, col }),
            }
        }
        builder::build(terms, self.end)
    }
}

/// Scans and parses `source` into a single expression tree.
pub fn parse(source: &str) -> std::result::Result<Expr, SyntaxErrors> {
    Parser::new(source)?.parse()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scanner::ScanError;

    use super::*;

    fn tree(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    fn strategy(source: &str) -> Strategy {
        Parser::new(source).unwrap().strategy()
    }

    #[test]
    fn precedence() {
        assert_eq!(tree("2 + 3 * 4"), "(+ 2 (* 3 4))");
        assert_eq!(tree("l + p - p * 0.1"), "(- (+ l p) (* p 0.1))");
        assert_eq!(tree("l - l * 0.2 + p - p * 0.2"), "(- (+ (- l (* l 0.2)) p) (* p 0.2))");
        assert_eq!(tree("8 / 4 / 2 - 1 * 3"), "(- (/ (/ 8 4) 2) (* 1 3))");
    }

    #[test]
    fn single_class_is_left_associative() {
        assert_eq!(tree("l + p - 10.00"), "(- (+ l p) 10)");
        assert_eq!(tree("p * l / 2"), "(/ (* p l) 2)");
        assert_eq!(tree("p"), "p");
    }

    #[test]
    fn strategies() {
        assert_eq!(strategy("l + p - 10.00"), Strategy::Direct);
        assert_eq!(strategy("p * l"), Strategy::Direct);
        assert_eq!(strategy("42"), Strategy::Direct);
        assert_eq!(strategy(""), Strategy::Direct);
        assert_eq!(strategy("l + p - p * 0.1"), Strategy::Split);
        assert_eq!(strategy("l - l * 0.2 + p - p * 0.2"), Strategy::Split);
        // A negative literal is an operand, not a `-`.
        assert_eq!(strategy("p * -1"), Strategy::Direct);
    }

    #[test]
    fn leading_operator() {
        assert_eq!(
            parse("* 3 4").unwrap_err(),
            SyntaxErrors(vec![SyntaxError::new(
                Col(1),
                ParserErrorType::ExpectedLeftOperand(Operator::Star)
            )])
        );
        assert_eq!(
            parse("+ 2 * 3").unwrap_err(),
            SyntaxErrors(vec![SyntaxError::new(
                Col(1),
                ParserErrorType::ExpectedLeftOperand(Operator::Plus)
            )])
        );
    }

    #[test]
    fn dangling_operator() {
        assert_eq!(
            parse("l + p -").unwrap_err(),
            SyntaxErrors(vec![SyntaxError::new(
                Col(8),
                ParserErrorType::ExpectedRightOperand(Operator::Minus)
            )])
        );
        assert_eq!(
            parse("2 * + 3").unwrap_err(),
            SyntaxErrors(vec![SyntaxError::new(
                Col(5),
                ParserErrorType::ExpectedRightOperand(Operator::Star)
            )])
        );
        assert_eq!(
            parse("2 * 3 + - 4").unwrap_err(),
            SyntaxErrors(vec![SyntaxError::new(
                Col(9),
                ParserErrorType::ExpectedRightOperand(Operator::Plus)
            )])
        );
    }

    #[test]
    fn missing_operator() {
        assert_eq!(
            parse("l p").unwrap_err(),
            SyntaxErrors(vec![SyntaxError::new(Col(3), ParserErrorType::ExpectedOperator)])
        );
    }

    #[test]
    fn empty_expression() {
        assert_eq!(
            parse("  ").unwrap_err(),
            SyntaxErrors(vec![SyntaxError::new(Col(3), ParserErrorType::EmptyExpression)])
        );
    }

    #[test]
    fn scan_errors_are_passed_through() {
        assert_eq!(
            parse("( l + p )").unwrap_err(),
            SyntaxErrors(vec![
                SyntaxError::new(Col(1), ScanError::InvalidToken("(".to_string())),
                SyntaxError::new(Col(9), ScanError::InvalidToken(")".to_string())),
            ])
        );
    }
}
