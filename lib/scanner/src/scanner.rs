use cursor::Cursor;
use errors::{SyntaxError, SyntaxErrors};

mod token;
pub use token::{Operator, Token, TokenData};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Invalid token '{0}'")]
    InvalidToken(String),
}

/// Splits an adjustment string into whitespace-separated tokens.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token<'a>>,
    errors: SyntaxErrors,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), tokens: Vec::new(), errors: SyntaxErrors(Vec::new()) }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>, SyntaxErrors> {
        loop {
            self.cursor.eat_while(char::is_whitespace);
            if self.cursor.is_at_end() {
                break;
            }

            let start = self.cursor.clone();
            self.cursor.eat_while(|c| !c.is_whitespace());
            let lexeme = start.slice_until(&self.cursor);

            match classify(lexeme) {
                Ok(data) => self.tokens.push(Token::new(data, (start, self.cursor.clone()))),
                Err(e) => {
                    log::trace!("Invalid token {:?} at {}", lexeme, start.col());
                    self.errors.push(SyntaxError::new(start.col(), e));
                }
            }
        }

        self.errors.is_empty().then_some(self.tokens).ok_or(self.errors)
    }
}

fn classify(lexeme: &str) -> Result<TokenData, ScanError> {
    if let Ok(operator) = lexeme.parse::<Operator>() {
        return Ok(TokenData::Operator(operator));
    }

    if looks_numeric(lexeme) {
        if let Ok(n) = lexeme.parse::<f64>() {
            return Ok(TokenData::Number(n));
        }
    }

    if is_identifier(lexeme) {
        return Ok(TokenData::Identifier);
    }

    Err(ScanError::InvalidToken(lexeme.to_string()))
}

// Keeps `inf`, `NaN` and friends out of the numbers, `str::parse` would accept them.
fn looks_numeric(lexeme: &str) -> bool {
    let unsigned = lexeme.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(lexeme);
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
