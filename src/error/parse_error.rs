use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while tokenizing an expression or
/// converting it to postfix order.
pub enum ParseError {
    /// Found text that is neither a number, an operator nor a parenthesis.
    #[error("Error at column {column}: Invalid token '{token}'.")]
    InvalidToken {
        /// The offending source text.
        token:  String,
        /// The source column where the token starts.
        column: usize,
    },
    /// A parenthesis has no matching partner.
    #[error("Error at column {column}: Unbalanced parenthesis.")]
    UnbalancedParenthesis {
        /// The source column of the unmatched parenthesis.
        column: usize,
    },
}

impl ParseError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } => ErrorKind::InvalidToken,
            Self::UnbalancedParenthesis { .. } => ErrorKind::UnbalancedParenthesis,
        }
    }

    /// Returns the source column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::InvalidToken { column, .. } | Self::UnbalancedParenthesis { column } => *column,
        }
    }
}
