/// Shared parser types.
///
/// Holds the result alias used by the converter and the entries of its
/// operator stack.
pub mod core;

/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm that reorders infix tokens into
/// postfix (reverse Polish) order according to operator precedence and
/// parentheses.
pub mod shunting_yard;
