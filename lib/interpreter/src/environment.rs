use std::collections::HashMap;

use parser::Expr;

/// Variable bindings supplied by the caller. The interpreter only ever reads them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    values: HashMap<String, Expr>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Expr>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Expr>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (name, value) in iter {
            env.define(name, value);
        }
        env
    }
}

impl<K: Into<String>, V: Into<Expr>, const N: usize> From<[(K, V); N]> for Environment {
    fn from(bindings: [(K, V); N]) -> Self {
        bindings.into_iter().collect()
    }
}
