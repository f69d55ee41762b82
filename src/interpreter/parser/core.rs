use crate::{error::ParseError, symbol::Operator};

/// Result type used by the parser.
///
/// All conversion functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the converter's operator stack.
///
/// Both variants remember the source column so that errors and the emitted
/// postfix tokens can point back into the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An operator waiting for its right-hand side to be emitted.
    Operator(Operator, usize),
    /// An opening parenthesis waiting for its partner.
    LParen(usize),
}
