//! # stackcalc
//!
//! stackcalc evaluates arithmetic expressions written as text. It supports
//! `+ - * /`, square root `√`, factorial `!`, parentheses and decimal numbers
//! with either `.` or `,` as the separator.
//!
//! Evaluation is a three stage pipeline: the lexer splits the expression into
//! tokens, the shunting-yard converter reorders them into postfix order and
//! the evaluator runs the postfix sequence on an operand stack. Every call
//! owns its own stacks, so evaluation is re-entrant.
//!
//! ```
//! use stackcalc::{error::ErrorKind, evaluate};
//!
//! assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
//! assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
//! assert_eq!(evaluate("4/0").unwrap_err().kind(), ErrorKind::DivisionByZero);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate_postfix,
        lexer::tokenize,
        parser::shunting_yard::{render, to_postfix},
    },
};

/// Provides unified error types for conversion and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting or evaluating an expression. Errors carry the source column of
/// the offending token where one exists.
///
/// # Responsibilities
/// - Defines error enums for both failure phases (parser, evaluator).
/// - Classifies errors by kind for callers that only render a message.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the postfix converter and the
/// postfix evaluator.
///
/// # Responsibilities
/// - Coordinates the three stages of evaluation.
/// - Manages the flow of tokens and errors between stages.
pub mod interpreter;
/// The closed set of operator symbols.
///
/// Defines the `Operator` enum along with each symbol's precedence and arity.
pub mod symbol;
/// General utilities for numeric conversion and formatting.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// The expression is tokenized, converted to postfix order and evaluated on a
/// fresh operand stack. No state survives the call.
///
/// # Errors
/// Returns the first error raised by any stage: `InvalidToken` and
/// `UnbalancedParenthesis` from conversion, `InsufficientOperands`,
/// `DivisionByZero`, `InvalidInput`, `InvalidOperation` and
/// `MalformedExpression` from evaluation.
///
/// # Examples
/// ```
/// use stackcalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("6-3-2").unwrap(), 1.0);
/// assert_eq!(evaluate("√16 + 5!").unwrap(), 124.0);
/// assert_eq!(evaluate("2,5*2").unwrap(), 5.0);
///
/// let err = evaluate("(2+3").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnbalancedParenthesis);
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let span = tracing::debug_span!("evaluate", expression);
    let _guard = span.enter();

    let tokens = tokenize(expression);
    let postfix = to_postfix(&tokens).inspect_err(|e| tracing::debug!(error = %e, "conversion failed"))?;
    tracing::debug!(postfix = %render(&postfix), "converted to postfix");

    let value = evaluate_postfix(&postfix).inspect_err(|e| tracing::debug!(error = %e, "evaluation failed"))?;
    tracing::debug!(value, "evaluated expression");
    Ok(value)
}

/// Returns the postfix (reverse Polish) form of an expression.
///
/// # Errors
/// Returns `InvalidToken` or `UnbalancedParenthesis` if the expression cannot
/// be converted.
///
/// # Example
/// ```
/// use stackcalc::to_postfix_string;
///
/// assert_eq!(to_postfix_string("(2+3)*4").unwrap(), "2 3 + 4 *");
/// assert_eq!(to_postfix_string("-1√").unwrap(), "-1 √");
/// ```
pub fn to_postfix_string(expression: &str) -> Result<String, Error> {
    let postfix = to_postfix(&tokenize(expression))?;
    Ok(render(&postfix))
}

/// The outcome of evaluating one line of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct LineResult {
    /// The 1-based line number in the source text.
    pub line:       usize,
    /// The expression as written, without surrounding whitespace.
    pub expression: String,
    /// The value or the error produced by [`evaluate`].
    pub result:     Result<f64, Error>,
}

/// Yields the expression lines of a batch together with their line number.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn expression_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.lines()
          .enumerate()
          .map(|(index, line)| (index + 1, line.trim()))
          .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Evaluates every expression line of `source` independently.
///
/// A failing line does not stop the batch.
///
/// # Example
/// ```
/// use stackcalc::evaluate_lines;
///
/// let results = evaluate_lines("# sums\n1+1\n\n2*3\n1/0\n");
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].line, 2);
/// assert_eq!(results[1].result, Ok(6.0));
/// assert!(results[2].result.is_err());
/// ```
#[must_use]
pub fn evaluate_lines(source: &str) -> Vec<LineResult> {
    expression_lines(source).map(|(line, expression)| LineResult { line,
                                                                   expression: expression.to_string(),
                                                                   result: evaluate(expression) })
                            .collect()
}
