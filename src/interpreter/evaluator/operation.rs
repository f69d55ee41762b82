use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        utils::{factorial, square_root},
    },
};

/// An arithmetic operation applied to the operand stack.
///
/// Operations are stateless; each is a pure function of the values on top of
/// the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    SquareRoot,
    Factorial,
}

impl Operation {
    /// Returns the operator symbol this operation is registered under.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Addition => '+',
            Self::Subtraction => '-',
            Self::Multiplication => '*',
            Self::Division => '/',
            Self::SquareRoot => '√',
            Self::Factorial => '!',
        }
    }

    /// Number of operands consumed from the stack.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Addition | Self::Subtraction | Self::Multiplication | Self::Division => 2,
            Self::SquareRoot | Self::Factorial => 1,
        }
    }

    /// Consumes the operands from the top of `stack` and pushes the result.
    ///
    /// Binary operations take the deeper value as the left operand and the
    /// top value as the right operand, so `a b -` computes `a - b`. The stack
    /// depth is checked before anything is popped.
    ///
    /// # Parameters
    /// - `stack`: The operand stack.
    /// - `column`: Source column of the operator, for error reporting.
    ///
    /// # Errors
    /// - `InsufficientOperands` if the stack holds fewer values than the
    ///   operation's arity.
    /// - `DivisionByZero` if the divisor is zero.
    /// - `InvalidInput` for a negative square root argument, or a factorial
    ///   argument that is not a non-negative integer.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::evaluator::operation::Operation;
    ///
    /// let mut stack = vec![6.0, 3.0];
    /// Operation::Subtraction.execute(&mut stack, 1).unwrap();
    /// assert_eq!(stack, [3.0]);
    /// ```
    pub fn execute(self, stack: &mut Vec<f64>, column: usize) -> EvalResult<()> {
        let required = self.arity();
        if stack.len() < required {
            return Err(RuntimeError::InsufficientOperands { symbol: self.symbol(),
                                                            required,
                                                            found: stack.len(),
                                                            column });
        }

        let operands = stack.split_off(stack.len() - required);
        let result = match (self, operands.as_slice()) {
            (Self::Addition, &[a, b]) => a + b,
            (Self::Subtraction, &[a, b]) => a - b,
            (Self::Multiplication, &[a, b]) => a * b,
            (Self::Division, &[_, b]) if b == 0.0 => {
                return Err(RuntimeError::DivisionByZero { column });
            },
            (Self::Division, &[a, b]) => a / b,
            (Self::SquareRoot, &[a]) => square_root(a, column)?,
            (Self::Factorial, &[a]) => factorial(a, column)?,
            _ => unreachable!("operand count is checked against arity"),
        };

        tracing::trace!(operation = ?self, ?operands, result, "applied operation");
        stack.push(result);
        Ok(())
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(operation: Operation, mut stack: Vec<f64>) -> EvalResult<Vec<f64>> {
        operation.execute(&mut stack, 1)?;
        Ok(stack)
    }

    #[test]
    fn binary_operations_use_deeper_value_as_left_operand() {
        assert_eq!(run(Operation::Addition, vec![2.0, 3.0]).unwrap(), [5.0]);
        assert_eq!(run(Operation::Subtraction, vec![2.0, 3.0]).unwrap(), [-1.0]);
        assert_eq!(run(Operation::Multiplication, vec![2.0, 3.0]).unwrap(), [6.0]);
        assert_eq!(run(Operation::Division, vec![3.0, 2.0]).unwrap(), [1.5]);
    }

    #[test]
    fn operations_leave_deeper_values_untouched() {
        assert_eq!(run(Operation::Addition, vec![9.0, 1.0, 2.0]).unwrap(), [9.0, 3.0]);
        assert_eq!(run(Operation::Factorial, vec![7.0, 3.0]).unwrap(), [7.0, 6.0]);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(run(Operation::Division, vec![4.0, 0.0]),
                   Err(RuntimeError::DivisionByZero { column: 1 }));
        assert_eq!(run(Operation::Division, vec![4.0, -0.0]),
                   Err(RuntimeError::DivisionByZero { column: 1 }));
        assert_eq!(run(Operation::Division, vec![0.0, 4.0]).unwrap(), [0.0]);
    }

    #[test]
    fn insufficient_operands() {
        assert_eq!(run(Operation::Addition, vec![1.0]),
                   Err(RuntimeError::InsufficientOperands { symbol:   '+',
                                                            required: 2,
                                                            found:    1,
                                                            column:   1, }));
        assert!(matches!(run(Operation::SquareRoot, vec![]),
                         Err(RuntimeError::InsufficientOperands { found: 0, .. })));
        assert!(matches!(run(Operation::Factorial, vec![]),
                         Err(RuntimeError::InsufficientOperands { .. })));
    }

    #[test]
    fn square_root() {
        assert_eq!(run(Operation::SquareRoot, vec![16.0]).unwrap(), [4.0]);
        assert!(matches!(run(Operation::SquareRoot, vec![-1.0]),
                         Err(RuntimeError::InvalidInput { .. })));
    }

    #[test]
    fn factorial_domain() {
        assert_eq!(run(Operation::Factorial, vec![5.0]).unwrap(), [120.0]);
        assert_eq!(run(Operation::Factorial, vec![0.0]).unwrap(), [1.0]);
        assert!(matches!(run(Operation::Factorial, vec![3.5]),
                         Err(RuntimeError::InvalidInput { .. })));
        assert!(matches!(run(Operation::Factorial, vec![-2.0]),
                         Err(RuntimeError::InvalidInput { .. })));
    }
}
