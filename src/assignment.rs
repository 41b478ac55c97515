use std::fmt::{self, Display};

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{LogicError, LogicResult};
use crate::truth_table::TruthValue;

/// Binding of variable names to truth values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: FxHashMap<String, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, returning the previous value if it was already bound.
    pub fn insert(&mut self, name: impl Into<String>, value: bool) -> Option<bool> {
        self.values.insert(name.into(), value)
    }

    /// Rebinds `name`, only allocating when it was not bound before.
    pub fn set(&mut self, name: &str, value: bool) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_string(), value);
            }
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Like [`Assignment::get`], but an absent name is an error.
    pub fn lookup(&self, name: &str) -> LogicResult<bool> {
        self.get(name)
            .ok_or_else(|| LogicError::UnboundVariable(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bindings ordered by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|(name, value)| format!("{name}: {}", TruthValue(value)))
                .join(", ")
        )
    }
}
