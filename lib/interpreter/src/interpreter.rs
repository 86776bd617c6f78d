use errors::SyntaxErrors;
use log::trace;
pub use parser::Expr;
use scanner::Operator;

mod environment;
pub use environment::Environment;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxErrors),
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Variable is defined in terms of itself: {0}")]
    CyclicVariable(String),
    #[error("Tried to divide by zero")]
    DivisionByZero,
}

/// What a variable without a binding evaluates to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UndefinedVariables {
    /// Fail with [`Error::UndefinedVariable`].
    #[default]
    Reject,
    /// Treat the variable as `0`.
    Zero,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    undefined_variables: UndefinedVariables,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_undefined_variables(mut self, policy: UndefinedVariables) -> Self {
        self.undefined_variables = policy;
        self
    }

    /// Parses `source` and evaluates it against `env`.
    pub fn interpret(&self, source: &str, env: &Environment) -> Result<f64, Error> {
        let expr = parser::parse(source)?;
        self.evaluate(&expr, env)
    }

    pub fn evaluate(&self, expr: &Expr, env: &Environment) -> Result<f64, Error> {
        self.evaluate_in(expr, env, &mut Vec::new())
    }

    // `resolving` holds the variables currently being expanded, innermost last.
    fn evaluate_in<'e>(
        &self,
        expr: &'e Expr,
        env: &'e Environment,
        resolving: &mut Vec<&'e str>,
    ) -> Result<f64, Error> {
        use Expr::*;
        let value = match expr {
            Literal(n) => *n,

            Variable(name) => {
                if resolving.contains(&name.as_str()) {
                    return Err(Error::CyclicVariable(name.clone()));
                }
                match (env.get(name), self.undefined_variables) {
                    (Some(bound), _) => {
                        resolving.push(name);
                        let value = self.evaluate_in(bound, env, resolving);
                        resolving.pop();
                        value?
                    }
                    (None, UndefinedVariables::Zero) => 0.0,
                    (None, UndefinedVariables::Reject) => {
                        return Err(Error::UndefinedVariable(name.clone()))
                    }
                }
            }

            Binary { left, operator, right } => {
                let l = self.evaluate_in(left, env, resolving)?;
                let r = self.evaluate_in(right, env, resolving)?;
                match operator {
                    Operator::Plus => l + r,
                    Operator::Minus => l - r,
                    Operator::Star => l * r,
                    Operator::Slash => {
                        if r != 0.0 {
                            l / r
                        } else {
                            return Err(Error::DivisionByZero);
                        }
                    }
                }
            }
        };

        trace!("{expr} = {value}");
        Ok(value)
    }
}

/// Evaluates `source` with the default [`Interpreter`].
pub fn interpret(source: &str, env: &Environment) -> Result<f64, Error> {
    Interpreter::default().interpret(source, env)
}
