/// Represents the closed set of operator symbols understood by the calculator.
///
/// Every symbol is a single character. Arity is fixed per symbol: `+ - * /`
/// are binary, `√` and `!` consume a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Square root (`√`), written before or after its operand.
    Sqrt,
    /// Factorial (`!`), written after its operand.
    Factorial,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Sqrt, Self::Factorial];

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Sqrt => '√',
            Self::Factorial => '!',
        }
    }

    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use stackcalc::symbol::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Binding strength used by the postfix converter.
    ///
    /// `+ -` bind weakest, `* /` bind tighter and the single-operand
    /// operators bind tightest. Operators of equal precedence associate to
    /// the left.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Sqrt | Self::Factorial => 3,
        }
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        if self.is_binary() { 2 } else { 1 }
    }

    /// Returns `true` for `+ - * /`.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_lookup() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('('), None);
    }

    #[test]
    fn precedence_orders_additive_below_multiplicative() {
        assert!(Operator::Add.precedence() < Operator::Mul.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
        assert!(Operator::Div.precedence() < Operator::Factorial.precedence());
        assert_eq!(Operator::Sqrt.precedence(), 3);
    }

    #[test]
    fn arity_follows_symbol() {
        assert_eq!(Operator::Div.arity(), 2);
        assert_eq!(Operator::Sqrt.arity(), 1);
        assert_eq!(Operator::Factorial.arity(), 1);
    }
}
