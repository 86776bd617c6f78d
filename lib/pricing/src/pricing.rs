use interpreter::{Environment, Error, Interpreter};

/// Variable bound to the parts price in adjustment strings.
pub const PARTS: &str = "p";
/// Variable bound to the labor price in adjustment strings.
pub const LABOR: &str = "l";

/// A repair quote whose total can be overridden by an adjustment formula such as
/// `l + p - p * 0.1` (labor plus parts with 10% off the parts).
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    parts_price: f64,
    labor_price: f64,
    adjustments: Option<String>,
}

impl Quote {
    pub fn new(parts_price: f64, labor_price: f64) -> Self {
        Self { parts_price, labor_price, adjustments: None }
    }

    pub fn with_adjustments(mut self, adjustments: impl Into<String>) -> Self {
        self.adjustments = Some(adjustments.into());
        self
    }

    pub fn set_adjustments(&mut self, adjustments: Option<String>) {
        self.adjustments = adjustments;
    }

    pub fn adjustments(&self) -> Option<&str> {
        self.adjustments.as_deref()
    }

    pub fn parts_price(&self) -> f64 {
        self.parts_price
    }

    pub fn labor_price(&self) -> f64 {
        self.labor_price
    }

    pub fn environment(&self) -> Environment {
        Environment::from([(LABOR, self.labor_price), (PARTS, self.parts_price)])
    }

    pub fn total_price(&self) -> Result<f64, Error> {
        self.total_price_with(&Interpreter::default())
    }

    /// Total after applying the adjustments, or parts plus labor when there are none.
    pub fn total_price_with(&self, interpreter: &Interpreter) -> Result<f64, Error> {
        let total = match &self.adjustments {
            Some(adjustments) => interpreter.interpret(adjustments, &self.environment())?,
            None => self.parts_price + self.labor_price,
        };
        log::debug!("Total for {:?}: {}", self.adjustments, total);
        Ok(total)
    }
}
