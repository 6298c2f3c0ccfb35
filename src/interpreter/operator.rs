use std::fmt;

/// Number of operands an operator consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    /// One operand, written to the right of the operator.
    Unary,
    /// Two operands, one on each side.
    Binary,
}

impl Arity {
    /// The operand count as a number.
    #[must_use]
    pub const fn operands(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Tie-break direction for chains of operators sharing a precedence level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// A prefix operator applies to the whole operand on its right.
    Right,
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`), the identity.
    Plus,
    /// Arithmetic negation (`-x`).
    Neg,
}

/// Represents a binary (infix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
}

/// Any operator that can appear in a token sequence.
///
/// The same source character (`+` or `-`) maps to a unary or a binary
/// operator depending on what precedes it; the lexer decides which once the
/// whole input has been scanned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// A prefix operator taking one operand.
    Unary(UnaryOperator),
    /// An infix operator taking two operands.
    Binary(BinaryOperator),
}

impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl Operator {
    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Unary(_) => Arity::Unary,
            Self::Binary(_) => Arity::Binary,
        }
    }

    /// Precedence level. Lower levels bind tighter.
    ///
    /// | level | operators            |
    /// |-------|----------------------|
    /// | 0     | unary `+`, unary `-` |
    /// | 1     | `*`                  |
    /// | 2     | binary `+`, `-`      |
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Unary(_) => 0,
            Self::Binary(BinaryOperator::Mul) => 1,
            Self::Binary(BinaryOperator::Add | BinaryOperator::Sub) => 2,
        }
    }

    /// Binary operators are left-associative, unary operators bind to the
    /// expression on their right.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Unary(_) => Associativity::Right,
            Self::Binary(_) => Associativity::Left,
        }
    }

    /// Returns `true` if `self` binds strictly tighter than `other`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::operator::{BinaryOperator, Operator, UnaryOperator};
    ///
    /// let mul = Operator::Binary(BinaryOperator::Mul);
    /// let add = Operator::Binary(BinaryOperator::Add);
    /// let neg = Operator::Unary(UnaryOperator::Neg);
    ///
    /// assert!(mul.binds_tighter(add));
    /// assert!(neg.binds_tighter(mul));
    /// assert!(!add.binds_tighter(add));
    /// ```
    #[must_use]
    pub const fn binds_tighter(self, other: Self) -> bool {
        self.precedence() < other.precedence()
    }

    /// The source character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unary(UnaryOperator::Plus) | Self::Binary(BinaryOperator::Add) => '+',
            Self::Unary(UnaryOperator::Neg) | Self::Binary(BinaryOperator::Sub) => '-',
            Self::Binary(BinaryOperator::Mul) => '*',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
