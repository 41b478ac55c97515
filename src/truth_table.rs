use std::{
    fmt::{self, Display},
    io,
    rc::Rc,
};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::assignment::Assignment;
use crate::config::TableConfig;
use crate::error::LogicResult;
use crate::expr::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A single truth value as it appears in a rendered table: `T` or `F`.
pub struct TruthValue(pub bool);

impl TruthValue {
    pub const fn is_true(self) -> bool {
        self.0
    }

    pub const fn is_false(self) -> bool {
        !self.0
    }

    pub const fn symbol(self) -> &'static str {
        if self.0 {
            "T"
        } else {
            "F"
        }
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// Every assignment over `names`, in descending binary order.
///
/// The first name alternates slowest and `true` precedes `false`, so the
/// first assignment binds everything to `true` and the last everything to
/// `false`. No names yield exactly one, empty, assignment.
///
/// Fails with [`TooManyVariables`] when the row count would not fit a
/// `usize`; ordinary ceilings are applied through [`TableConfig`].
///
/// [`TooManyVariables`]: crate::LogicError::TooManyVariables
pub fn enumerate_assignments(
    names: &[String],
) -> LogicResult<impl Iterator<Item = Assignment> + '_> {
    TableConfig::new(usize::MAX).check(names.len())?;

    Ok(enumerate_values(names.len()).map(move |values| {
        names
            .iter()
            .zip(values)
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }))
}

// n has passed a TableConfig check, so the shift cannot overflow
fn enumerate_values(n: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1usize << n).map(move |row| {
        (0..n)
            .map(|column| (row >> (n - 1 - column)) & 1 == 0)
            .collect()
    })
}

/// Evaluates `expression` in table order without storing rows, stopping at
/// the first result for which `stop` holds. Returns whether it stopped.
pub(crate) fn scan(
    expression: &Expression,
    config: &TableConfig,
    stop: impl Fn(bool) -> bool,
) -> LogicResult<bool> {
    let variables = expression.free_variables();
    config.check(variables.len())?;

    let mut assignment: Assignment = variables
        .iter()
        .map(|name| (name.as_str(), true))
        .collect();

    for (row, values) in enumerate_values(variables.len()).enumerate() {
        for (name, value) in variables.iter().zip(values) {
            assignment.set(name, value);
        }

        if stop(expression.evaluate(&assignment)?) {
            trace!(row, "scan of {} stopped early", expression);
            return Ok(true);
        }
    }

    Ok(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    pub assignment: Assignment,
    /// Variable values in the column order of the table
    pub values: Vec<bool>,
    pub result: bool,
}

/// The evaluation of an expression under every assignment of its free
/// variables.
#[derive(Debug, Clone)]
pub struct TruthTable {
    expression: Rc<Expression>,
    variables: Vec<String>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    pub fn new(expression: &Rc<Expression>) -> LogicResult<Self> {
        Self::with_config(expression, &TableConfig::default())
    }

    /// Builds the table, refusing expressions with more free variables than
    /// `config` allows.
    pub fn with_config(expression: &Rc<Expression>, config: &TableConfig) -> LogicResult<Self> {
        let variables = expression.free_variables();
        config.check(variables.len())?;

        let rows = enumerate_values(variables.len())
            .map(|values| {
                let assignment: Assignment = variables
                    .iter()
                    .zip(&values)
                    .map(|(name, value)| (name.as_str(), *value))
                    .collect();
                let result = expression.evaluate(&assignment)?;

                Ok(TruthTableRow {
                    assignment,
                    values,
                    result,
                })
            })
            .collect::<LogicResult<Vec<_>>>()?;

        debug!(
            variables = variables.len(),
            rows = rows.len(),
            "built truth table for {}",
            expression
        );

        Ok(Self {
            expression: Rc::clone(expression),
            variables,
            rows,
        })
    }

    pub fn expression(&self) -> &Rc<Expression> {
        &self.expression
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    fn header(&self) -> Vec<String> {
        self.variables
            .iter()
            .cloned()
            .chain(std::iter::once(self.expression.to_string()))
            .collect()
    }

    fn cells(row: &TruthTableRow) -> impl Iterator<Item = TruthValue> + '_ {
        row.values
            .iter()
            .chain(std::iter::once(&row.result))
            .map(|&value| TruthValue(value))
    }

    /// Writes the header and every row as CSV records.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> LogicResult<()> {
        let mut writer = csv::Writer::from_writer(writer);

        writer.write_record(self.header())?;

        for row in &self.rows {
            writer.write_record(Self::cells(row).map(|value| value.symbol()))?;
        }

        writer.flush()?;

        Ok(())
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header().iter().join(" | "))?;

        for row in &self.rows {
            writeln!(f, "{}", Self::cells(row).join(" | "))?;
        }

        Ok(())
    }
}
