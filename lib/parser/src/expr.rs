use std::fmt::{self, Display, Formatter};

use scanner::Operator;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(f64),
    Variable(String),
    Binary { left: Box<Expr>, operator: Operator, right: Box<Expr> },
}

impl Expr {
    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Literal(n)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { left, operator, right } => {
                write!(f, "({} {} {})", operator, left, right)
            }
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
        }
    }
}
