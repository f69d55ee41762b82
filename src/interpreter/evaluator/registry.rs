use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, operation::Operation},
};

/// Every registered operation, keyed by its symbol.
pub const OPERATIONS: [(char, Operation); 6] = [('+', Operation::Addition),
                                                ('-', Operation::Subtraction),
                                                ('*', Operation::Multiplication),
                                                ('/', Operation::Division),
                                                ('√', Operation::SquareRoot),
                                                ('!', Operation::Factorial)];

/// Returns the operation registered for `symbol`.
///
/// # Errors
/// Returns `InvalidOperation` if no operation is registered for the symbol.
///
/// # Example
/// ```
/// use stackcalc::interpreter::evaluator::{operation::Operation, registry::lookup};
///
/// assert_eq!(lookup('/', 1).unwrap(), Operation::Division);
/// assert!(lookup('%', 1).is_err());
/// ```
pub fn lookup(symbol: char, column: usize) -> EvalResult<Operation> {
    OPERATIONS.iter()
              .find(|(registered, _)| *registered == symbol)
              .map(|(_, operation)| *operation)
              .ok_or_else(|| RuntimeError::InvalidOperation { symbol: symbol.to_string(),
                                                              column })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Operator;

    #[test]
    fn every_operator_is_registered() {
        for op in Operator::ALL {
            let operation = lookup(op.symbol(), 1).unwrap();
            assert_eq!(operation.symbol(), op.symbol());
        }
    }

    #[test]
    fn unknown_symbol_is_invalid_operation() {
        assert_eq!(lookup('^', 7),
                   Err(RuntimeError::InvalidOperation { symbol: "^".to_string(),
                                                        column: 7, }));
    }
}
