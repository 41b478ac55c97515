#![warn(clippy::disallowed_types)]

pub use assignment::Assignment;
pub use config::{TableConfig, DEFAULT_MAX_VARIABLES, MAX_VARIABLES_ENV};
pub use error::{LogicError, LogicResult};
pub use expr::Expression;
pub use semantics::Argument;
pub use symbols::*;
pub use truth_table::{enumerate_assignments, TruthTable, TruthTableRow, TruthValue};

pub mod expr;
pub mod expr_io;
pub mod parser;
pub mod semantics;
pub mod truth_table;

mod assignment;
mod config;
mod error;

mod symbols;
