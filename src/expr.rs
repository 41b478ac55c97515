use std::fmt::{self, Display};
use std::rc::Rc;

use itertools::Itertools;

use crate::assignment::Assignment;
use crate::error::LogicResult;
use crate::symbols::{BinaryOperator, UnaryOperator};

/// A propositional formula.
///
/// Children are reference counted, so a sub-expression may be shared by
/// several parents. Expressions are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Constant(bool),
    Variable(String),
    Unary(UnaryOperator, Rc<Expression>),
    Binary(BinaryOperator, Rc<Expression>, Rc<Expression>),
}

impl Expression {
    /// Evaluates the formula under `assignment`.
    ///
    /// Both operands of a binary connective are always evaluated, left first.
    /// Fails with [`UnboundVariable`] when a variable is missing from the
    /// assignment.
    ///
    /// [`UnboundVariable`]: crate::LogicError::UnboundVariable
    pub fn evaluate(&self, assignment: &Assignment) -> LogicResult<bool> {
        match self {
            Self::Constant(value) => Ok(*value),
            Self::Variable(name) => assignment.lookup(name),
            Self::Unary(op, operand) => Ok(op.apply(operand.evaluate(assignment)?)),
            Self::Binary(op, left, right) => {
                let p = left.evaluate(assignment)?;
                let q = right.evaluate(assignment)?;
                Ok(op.apply(p, q))
            }
        }
    }

    /// Sorted, duplicate-free names of all variables in the tree.
    pub fn free_variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_names(&mut names);

        names
            .into_iter()
            .sorted()
            .dedup()
            .map(str::to_string)
            .collect()
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Constant(_) => {}
            Self::Variable(name) => names.push(name),
            Self::Unary(_, operand) => operand.collect_names(names),
            Self::Binary(_, left, right) => {
                left.collect_names(names);
                right.collect_names(names);
            }
        }
    }

    /// Constants and variables.
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    // atoms and negations never need brackets as an operand
    const fn is_bare_operand(&self) -> bool {
        matches!(
            self,
            Self::Constant(_) | Self::Variable(_) | Self::Unary(UnaryOperator::Not, _)
        )
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

struct Operand<'a>(&'a Expression);

impl Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_bare_operand() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(true) => write!(f, "T"),
            Self::Constant(false) => write!(f, "F"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Unary(op, operand) => write!(f, "{op}{}", Operand(operand)),
            Self::Binary(op, left, right) => {
                write!(f, "{} {op} {}", Operand(left), Operand(right))
            }
        }
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Self::Constant(value)
    }
}

pub fn constant(value: bool) -> Rc<Expression> {
    Rc::new(Expression::Constant(value))
}

pub fn var(name: impl Into<String>) -> Rc<Expression> {
    Rc::new(Expression::Variable(name.into()))
}

pub fn unary(op: UnaryOperator, operand: Rc<Expression>) -> Rc<Expression> {
    Rc::new(Expression::Unary(op, operand))
}

pub fn binary(op: BinaryOperator, left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    Rc::new(Expression::Binary(op, left, right))
}

pub fn not(operand: Rc<Expression>) -> Rc<Expression> {
    unary(UnaryOperator::Not, operand)
}

pub fn and(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::And, left, right)
}

pub fn or(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::Or, left, right)
}

pub fn xor(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::Xor, left, right)
}

pub fn nand(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::Nand, left, right)
}

pub fn nor(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::Nor, left, right)
}

pub fn xnor(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::Xnor, left, right)
}

/// `left -> right`
pub fn implies(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::Conditional, left, right)
}

/// `left <-> right`
pub fn iff(left: Rc<Expression>, right: Rc<Expression>) -> Rc<Expression> {
    binary(BinaryOperator::Biconditional, left, right)
}
