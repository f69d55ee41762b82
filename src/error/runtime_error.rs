use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator needed more operands than the stack holds.
    #[error("Error at column {column}: Not enough operands for '{symbol}': expected {required}, found {found}.")]
    InsufficientOperands {
        /// The operator symbol.
        symbol:   char,
        /// How many operands the operator consumes.
        required: usize,
        /// How many operands were on the stack.
        found:    usize,
        /// The source column of the operator.
        column:   usize,
    },
    /// Attempted division by zero.
    #[error("Error at column {column}: Division by zero.")]
    DivisionByZero {
        /// The source column of the `/` operator.
        column: usize,
    },
    /// An operand lies outside the domain of the operation.
    #[error("Error at column {column}: Invalid input: {details}.")]
    InvalidInput {
        /// Why the operand was rejected.
        details: String,
        /// The source column of the operator.
        column:  usize,
    },
    /// No operation is registered for the symbol.
    #[error("Error at column {column}: Unknown operation '{symbol}'.")]
    InvalidOperation {
        /// The unrecognized symbol.
        symbol: String,
        /// The source column of the symbol.
        column: usize,
    },
    /// Evaluation did not leave exactly one value on the stack.
    #[error("Error: Malformed expression, expected a single result but {operands} values remain.")]
    MalformedExpression {
        /// The number of values left on the stack.
        operands: usize,
    },
}

impl RuntimeError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
        }
    }

    /// Returns the source column the error points at, if it has one.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::InsufficientOperands { column, .. }
            | Self::DivisionByZero { column }
            | Self::InvalidInput { column, .. }
            | Self::InvalidOperation { column, .. } => Some(*column),
            Self::MalformedExpression { .. } => None,
        }
    }
}
