use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::registry,
        lexer::{Spanned, Token},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix sequence on a fresh operand stack.
///
/// Numbers are pushed. Each operator is resolved through the
/// [registry](crate::interpreter::evaluator::registry) and executed against
/// the stack; the first failure aborts evaluation. Afterwards the stack must
/// hold exactly one value, which is the result.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by the converter.
///
/// # Errors
/// - Any error raised by an operation.
/// - `InvalidOperation` if the sequence contains a parenthesis or an invalid
///   token.
/// - `MalformedExpression` if the final stack does not hold exactly one value.
///
/// # Example
/// ```
/// use stackcalc::{
///     interpreter::{evaluator::core::evaluate_postfix, lexer::Token},
///     symbol::Operator,
/// };
///
/// let postfix = [(Token::Number(6.0), 1),
///                (Token::Number(3.0), 3),
///                (Token::Operator(Operator::Sub), 2)];
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 3.0);
/// ```
pub fn evaluate_postfix(postfix: &[Spanned]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for (token, column) in postfix {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Operator(op) => registry::lookup(op.symbol(), *column)?.execute(&mut stack, *column)?,
            other => {
                return Err(RuntimeError::InvalidOperation { symbol: other.to_string(),
                                                            column: *column, });
            },
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => {
            tracing::debug!(?stack, "evaluation left a malformed stack");
            Err(RuntimeError::MalformedExpression { operands: stack.len() })
        },
    }
}
