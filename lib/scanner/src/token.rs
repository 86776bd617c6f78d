use cursor::{Col, SourceRange};

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData,
    pub range: SourceRange<'a>,
}

impl<'a> Token<'a> {
    pub fn new(data: TokenData, range: impl Into<SourceRange<'a>>) -> Token<'a> {
        Self { data, range: range.into() }
    }

    pub fn lexeme(&self) -> &'a str {
        self.range.lexeme()
    }

    pub fn col(&self) -> Col {
        self.range.col()
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.data {
            TokenData::Operator(operator) => Some(operator),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenData {
    Operator(Operator),
    Number(f64),
    Identifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum Operator {
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Star,
    #[strum(serialize = "/")]
    Slash,
}

impl Operator {
    /// `*` and `/` bind tighter than `+` and `-`.
    pub fn is_factor(self) -> bool {
        matches!(self, Operator::Star | Operator::Slash)
    }

    pub fn is_term(self) -> bool {
        matches!(self, Operator::Plus | Operator::Minus)
    }
}
