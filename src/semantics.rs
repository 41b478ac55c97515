//! Semantic properties decided by exhaustive truth tables.

use std::fmt::{self, Display};
use std::rc::Rc;

use itertools::Itertools;
use tracing::debug;

use crate::config::TableConfig;
use crate::error::{LogicError, LogicResult};
use crate::expr::{self, Expression};
use crate::parser;
use crate::truth_table;

impl Expression {
    /// True under every assignment.
    pub fn is_tautology(&self) -> LogicResult<bool> {
        self.is_tautology_with(&TableConfig::default())
    }

    pub fn is_tautology_with(&self, config: &TableConfig) -> LogicResult<bool> {
        Ok(!truth_table::scan(self, config, |result| !result)?)
    }

    /// False under every assignment.
    pub fn is_contradiction(&self) -> LogicResult<bool> {
        self.is_contradiction_with(&TableConfig::default())
    }

    pub fn is_contradiction_with(&self, config: &TableConfig) -> LogicResult<bool> {
        Ok(!self.is_satisfiable_with(config)?)
    }

    pub fn is_satisfiable(&self) -> LogicResult<bool> {
        self.is_satisfiable_with(&TableConfig::default())
    }

    pub fn is_satisfiable_with(&self, config: &TableConfig) -> LogicResult<bool> {
        truth_table::scan(self, config, |result| result)
    }

    /// Both expressions agree under every assignment of their joint variables.
    pub fn is_equivalent(&self, other: &Self) -> LogicResult<bool> {
        self.is_equivalent_with(other, &TableConfig::default())
    }

    pub fn is_equivalent_with(&self, other: &Self, config: &TableConfig) -> LogicResult<bool> {
        expr::iff(Rc::new(self.clone()), Rc::new(other.clone())).is_tautology_with(config)
    }
}

/// Premises and a conclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub premises: Vec<Rc<Expression>>,
    pub conclusion: Rc<Expression>,
}

impl Argument {
    pub fn new(premises: Vec<Rc<Expression>>, conclusion: Rc<Expression>) -> Self {
        Self {
            premises,
            conclusion,
        }
    }

    /// Parses every premise and the conclusion with [`parser::parse`].
    pub fn parse(premises: &[&str], conclusion: &str) -> LogicResult<Self> {
        Ok(Self::new(
            premises
                .iter()
                .map(|premise| parser::parse(premise))
                .collect::<LogicResult<_>>()?,
            parser::parse(conclusion)?,
        ))
    }

    /// `p1 ^ (p2 ^ (... ^ pn))`; a single premise is returned as-is.
    pub fn conjunction(&self) -> LogicResult<Rc<Expression>> {
        self.premises
            .iter()
            .cloned()
            .rev()
            .reduce(|right, left| expr::and(left, right))
            .ok_or(LogicError::EmptyArgument)
    }

    /// Valid iff the conjunction of the premises implies the conclusion under
    /// every assignment.
    pub fn is_valid(&self) -> LogicResult<bool> {
        self.is_valid_with(&TableConfig::default())
    }

    pub fn is_valid_with(&self, config: &TableConfig) -> LogicResult<bool> {
        let claim = expr::implies(self.conjunction()?, Rc::clone(&self.conclusion));
        let valid = claim.is_tautology_with(config)?;

        debug!(valid, "checked argument {}", self);

        Ok(valid)
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} |= {}", self.premises.iter().join(", "), self.conclusion)
    }
}
