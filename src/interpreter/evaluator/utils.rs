use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the square root of a non-negative real.
///
/// # Errors
/// Returns `InvalidInput` if `x` is negative.
pub fn square_root(x: f64, column: usize) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(RuntimeError::InvalidInput { details: format!("cannot take the square root of negative number {x}"),
                                                column });
    }
    Ok(x.sqrt())
}

/// Computes `x!` for a non-negative integral `x` as an iterative product.
///
/// `0!` is `1`. The product saturates to `+inf` once it overflows, at which
/// point the remaining factors are skipped.
///
/// # Parameters
/// - `x`: Input value.
/// - `column`: Source column of the operator, for error reporting.
///
/// # Returns
/// The factorial as a real.
///
/// # Errors
/// Returns `InvalidInput` if `x` is negative, fractional or not finite.
///
/// # Example
/// ```
/// use stackcalc::interpreter::evaluator::utils::factorial;
///
/// assert_eq!(factorial(5.0, 1).unwrap(), 120.0);
/// assert_eq!(factorial(0.0, 1).unwrap(), 1.0);
/// assert!(factorial(2.5, 1).is_err());
/// ```
pub fn factorial(x: f64, column: usize) -> EvalResult<f64> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(RuntimeError::InvalidInput { details: format!("factorial is only defined for non-negative integers, but found {x}"),
                                                column });
    }

    let mut result = 1.0_f64;
    let mut factor = 2.0_f64;
    while factor <= x && result.is_finite() {
        result *= factor;
        factor += 1.0;
    }
    Ok(result)
}
