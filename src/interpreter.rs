/// The evaluator module executes postfix sequences.
///
/// The evaluator walks a postfix sequence with an operand stack, dispatching
/// every operator to its registered operation. It is the last stage of the
/// pipeline and reports domain errors such as division by zero.
///
/// # Responsibilities
/// - Maps operator symbols to operations.
/// - Applies operations to the operand stack.
/// - Checks that exactly one result remains.
pub mod evaluator;
/// The lexer module tokenizes expressions for further processing.
///
/// The lexer reads the raw expression and produces numbers, operators and
/// parentheses tagged with their source column. This is the first stage of
/// evaluation.
pub mod lexer;
/// The parser module reorders tokens into postfix order.
///
/// The parser runs the shunting-yard algorithm over the token stream,
/// resolving precedence, associativity and parentheses.
///
/// # Responsibilities
/// - Converts infix tokens into a postfix sequence.
/// - Reports unbalanced parentheses and unrecognized tokens with their
///   column.
pub mod parser;
