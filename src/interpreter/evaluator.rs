/// Core evaluation logic.
///
/// Contains the postfix evaluator that drives the operand stack and the
/// result type shared by all evaluation routines.
pub mod core;

/// The operations behind each operator symbol.
///
/// Each operation consumes its operands from the top of the stack and pushes
/// a single result, or fails without pushing anything.
pub mod operation;

/// Lookup from operator symbol to operation.
pub mod registry;

/// Numeric helpers for the single-operand operations.
pub mod utils;
