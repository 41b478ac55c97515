use std::env;

use crate::error::{LogicError, LogicResult};

/// Environment variable overriding [`TableConfig::max_variables`].
pub const MAX_VARIABLES_ENV: &str = "RSTRUTH_MAX_VARIABLES";

/// Ceiling used when no configuration is given: 2^20 rows.
pub const DEFAULT_MAX_VARIABLES: usize = 20;

// enumeration indexes rows with a usize
const HARD_MAX_VARIABLES: usize = usize::BITS as usize - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Limits applied before a truth table is enumerated.
pub struct TableConfig {
    /// Largest number of free variables a table may be built for
    pub max_variables: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VARIABLES)
    }
}

impl TableConfig {
    pub const fn new(max_variables: usize) -> Self {
        Self { max_variables }
    }

    /// Reads the ceiling from `RSTRUTH_MAX_VARIABLES`, falling back to the
    /// default when the variable is unset.
    pub fn from_env() -> LogicResult<Self> {
        match env::var(MAX_VARIABLES_ENV) {
            Ok(value) => Self::from_value(&value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(value)) => Err(LogicError::InvalidConfig {
                key: MAX_VARIABLES_ENV.to_string(),
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    fn from_value(value: &str) -> LogicResult<Self> {
        value
            .trim()
            .parse()
            .map(Self::new)
            .map_err(|_| LogicError::InvalidConfig {
                key: MAX_VARIABLES_ENV.to_string(),
                value: value.to_string(),
            })
    }

    /// The ceiling actually enforced, never above what a row index can hold.
    pub fn limit(&self) -> usize {
        self.max_variables.min(HARD_MAX_VARIABLES)
    }

    pub fn check(&self, count: usize) -> LogicResult<()> {
        let limit = self.limit();

        if count > limit {
            return Err(LogicError::TooManyVariables { count, limit });
        }

        Ok(())
    }
}
