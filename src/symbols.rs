use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Prefix operators; negation is the only one.
pub enum UnaryOperator {
    Not,
}

impl UnaryOperator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "~",
        }
    }

    pub const fn apply(self, p: bool) -> bool {
        match self {
            Self::Not => !p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Two-place connectives.
///
/// Every connective is a total function of two fully evaluated operands;
/// see [`BinaryOperator::apply`].
pub enum BinaryOperator {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
    /// Material implication, `p -> q`
    Conditional,
    /// Material equivalence, `p <-> q`
    Biconditional,
}

impl BinaryOperator {
    pub const fn variants<'a>() -> &'a [Self] {
        &[
            Self::And,
            Self::Or,
            Self::Xor,
            Self::Nand,
            Self::Nor,
            Self::Xnor,
            Self::Conditional,
            Self::Biconditional,
        ]
    }

    /// Canonical rendering of the connective.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "^",
            Self::Or => "v",
            Self::Xor => "xor",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xnor => "XNOR",
            Self::Conditional => "->",
            Self::Biconditional => "<->",
        }
    }

    fn matches(self, s: &str) -> bool {
        match self {
            Self::Xor => matches!(s, "xor" | "XOR"),
            other => other.symbol() == s,
        }
    }

    /// Looks up the connective spelled `s`, accepting `XOR` as an alias.
    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .copied()
    }

    pub const fn apply(self, p: bool, q: bool) -> bool {
        match self {
            Self::And => p && q,
            Self::Or => p || q,
            Self::Xor => p != q,
            Self::Nand => !(p && q),
            Self::Nor => !(p || q),
            Self::Xnor => p == q,
            Self::Conditional => !p || q,
            Self::Biconditional => p == q,
        }
    }

    /// Binding strength, 0 binds loosest.
    pub const fn precedence(self) -> usize {
        match self {
            Self::Biconditional => 0,
            Self::Conditional => 1,
            Self::Xor | Self::Xnor => 2,
            Self::Or | Self::Nor => 3,
            Self::And | Self::Nand => 4,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}
