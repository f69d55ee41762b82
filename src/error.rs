/// Parsing errors.
///
/// Defines the errors raised while tokenizing an expression and converting it
/// to postfix order: unrecognized text and mismatched parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a postfix sequence, such as
/// division by zero, domain violations and a malformed operand stack.
pub mod runtime_error;

use std::str::FromStr;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression could not be tokenized or converted.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the classification of this error.
    ///
    /// # Example
    /// ```
    /// use stackcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("4/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the source column the error points at, if it has one.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.column()),
            Self::Runtime(e) => e.column(),
        }
    }
}

/// Field-less classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidToken,
    UnbalancedParenthesis,
    InsufficientOperands,
    DivisionByZero,
    InvalidInput,
    InvalidOperation,
    MalformedExpression,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [Self::InvalidToken,
                                Self::UnbalancedParenthesis,
                                Self::InsufficientOperands,
                                Self::DivisionByZero,
                                Self::InvalidInput,
                                Self::InvalidOperation,
                                Self::MalformedExpression];

    /// Returns the name of the kind as written in source code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidToken => "InvalidToken",
            Self::UnbalancedParenthesis => "UnbalancedParenthesis",
            Self::InsufficientOperands => "InsufficientOperands",
            Self::DivisionByZero => "DivisionByZero",
            Self::InvalidInput => "InvalidInput",
            Self::InvalidOperation => "InvalidOperation",
            Self::MalformedExpression => "MalformedExpression",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|kind| kind.name() == s)
                 .ok_or_else(|| format!("unknown error kind '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_column() {
        let err = Error::from(RuntimeError::DivisionByZero { column: 2 });
        assert_eq!(err.to_string(), "Error at column 2: Division by zero.");

        let err = Error::from(ParseError::InvalidToken { token:  "x".to_string(),
                                                         column: 5, });
        assert_eq!(err.to_string(), "Error at column 5: Invalid token 'x'.");
    }

    #[test]
    fn malformed_expression_has_no_column() {
        let err = Error::from(RuntimeError::MalformedExpression { operands: 2 });
        assert_eq!(err.column(), None);
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
        assert!(err.to_string().starts_with("Error: Malformed expression"));
    }

    #[test]
    fn kinds_parse_from_their_names() {
        for kind in ErrorKind::ALL {
            assert_eq!(kind.name().parse::<ErrorKind>(), Ok(kind));
        }
        assert!("Overflow".parse::<ErrorKind>().is_err());
    }
}
