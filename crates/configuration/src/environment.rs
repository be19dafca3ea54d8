//! An abstraction over environment variable lookup.
//!
//! Settings files may leave the engine executable or catalog path to the
//! environment. Threading a lookup function through instead of calling
//! `std::env::var` directly keeps configuration parsing pure and lets tests
//! supply a fixed set of variables.

use std::collections::HashMap;

/// Look up environment variables by name.
pub trait Environment {
    fn read(&self, variable: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &str) -> Option<String> {
        std::env::var(variable).ok()
    }
}

/// A fixed, immutable set of variables, for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(HashMap<String, String>);

impl Environment for FixedEnvironment {
    fn read(&self, variable: &str) -> Option<String> {
        self.0.get(variable).cloned()
    }
}

impl<const N: usize> From<[(String, String); N]> for FixedEnvironment {
    fn from(variables: [(String, String); N]) -> Self {
        Self(HashMap::from(variables))
    }
}

impl From<HashMap<String, String>> for FixedEnvironment {
    fn from(variables: HashMap<String, String>) -> Self {
        Self(variables)
    }
}
