use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, Pending},
    },
    symbol::Operator,
};

/// Converts infix tokens to postfix order.
///
/// Numbers are emitted directly. An incoming operator first pops every
/// stacked operator of greater or equal precedence (so equal precedence
/// associates to the left), then is pushed itself. `(` is pushed and `)` pops
/// down to its partner. Once the input is exhausted the remaining operators
/// are popped in stack order.
///
/// The output holds only [`Token::Number`] and [`Token::Operator`] tokens and
/// keeps the source columns of the input.
///
/// # Parameters
/// - `tokens`: Infix tokens as produced by the lexer.
///
/// # Returns
/// The postfix sequence, or the first error encountered.
///
/// # Errors
/// - `UnbalancedParenthesis` for a `)` without an open partner, or a `(` that
///   is still open at the end of the input.
/// - `InvalidToken` for any [`Token::Invalid`].
///
/// # Example
/// ```
/// use stackcalc::interpreter::{
///     lexer::{Token, tokenize},
///     parser::shunting_yard::to_postfix,
/// };
///
/// let postfix = to_postfix(&tokenize("2+3*4")).unwrap();
/// let text: Vec<String> = postfix.iter().map(|(t, _)| t.to_string()).collect();
/// assert_eq!(text, ["2", "3", "4", "*", "+"]);
/// ```
pub fn to_postfix(tokens: &[Spanned]) -> ParseResult<Vec<Spanned>> {
    let mut output: Vec<Spanned> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Pending> = Vec::new();

    for (token, column) in tokens {
        let column = *column;
        match token {
            Token::Number(value) => output.push((Token::Number(*value), column)),
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top, top_column)) = operators.last()
                      && yields_to(top, *op)
                {
                    operators.pop();
                    output.push((Token::Operator(top), top_column));
                }
                operators.push(Pending::Operator(*op, column));
            },
            Token::LParen => operators.push(Pending::LParen(column)),
            Token::RParen => close_paren(&mut operators, &mut output, column)?,
            Token::Invalid(text) => {
                tracing::debug!(token = %text, column, "rejected token");
                return Err(ParseError::InvalidToken { token: text.clone(),
                                                      column });
            },
        }
        tracing::trace!(token = %token, stacked = operators.len(), "converted token");
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Operator(op, op_column) => output.push((Token::Operator(op), op_column)),
            Pending::LParen(paren_column) => {
                return Err(ParseError::UnbalancedParenthesis { column: paren_column });
            },
        }
    }

    Ok(output)
}

/// Pops operators into `output` until the `(` matching a `)` at `column`.
fn close_paren(operators: &mut Vec<Pending>,
               output: &mut Vec<Spanned>,
               column: usize)
               -> ParseResult<()> {
    loop {
        match operators.pop() {
            Some(Pending::Operator(op, op_column)) => output.push((Token::Operator(op), op_column)),
            Some(Pending::LParen(_)) => return Ok(()),
            None => return Err(ParseError::UnbalancedParenthesis { column }),
        }
    }
}

/// Renders a postfix sequence as space-separated text, e.g. `2 3 4 * +`.
#[must_use]
pub fn render(postfix: &[Spanned]) -> String {
    postfix.iter()
           .map(|(token, _)| token.to_string())
           .collect::<Vec<_>>()
           .join(" ")
}

/// Returns `true` if `op` would pop `top` off the operator stack.
#[must_use]
pub const fn yields_to(top: Operator, op: Operator) -> bool {
    top.precedence() >= op.precedence()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn postfix(source: &str) -> ParseResult<String> {
        to_postfix(&tokenize(source)).map(|p| render(&p))
    }

    #[test]
    fn precedence_orders_output() {
        assert_eq!(postfix("2+3*4").unwrap(), "2 3 4 * +");
        assert_eq!(postfix("2*3+4").unwrap(), "2 3 * 4 +");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(postfix("6-3-2").unwrap(), "6 3 - 2 -");
        assert_eq!(postfix("8/4/2").unwrap(), "8 4 / 2 /");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix("(2+3)*4").unwrap(), "2 3 + 4 *");
        assert_eq!(postfix("((1))").unwrap(), "1");
    }

    #[test]
    fn single_operand_operators() {
        assert_eq!(postfix("5!").unwrap(), "5 !");
        assert_eq!(postfix("√9").unwrap(), "9 √");
        assert_eq!(postfix("9√").unwrap(), "9 √");
        assert_eq!(postfix("2+3!").unwrap(), "2 3 ! +");
    }

    #[test]
    fn unmatched_closing_paren() {
        assert_eq!(postfix("2+3)"), Err(ParseError::UnbalancedParenthesis { column: 4 }));
        assert_eq!(postfix(")"), Err(ParseError::UnbalancedParenthesis { column: 1 }));
    }

    #[test]
    fn unmatched_opening_paren_reports_its_column() {
        assert_eq!(postfix("1+(2+3"), Err(ParseError::UnbalancedParenthesis { column: 3 }));
    }

    #[test]
    fn invalid_tokens_are_rejected() {
        assert_eq!(postfix("2^3"),
                   Err(ParseError::InvalidToken { token:  "^".to_string(),
                                                  column: 2, }));
        assert_eq!(postfix("1.2.3+1"),
                   Err(ParseError::InvalidToken { token:  "1.2.3".to_string(),
                                                  column: 1, }));
    }

    #[test]
    fn postfix_keeps_operator_columns() {
        let out = to_postfix(&tokenize("1 + 2")).unwrap();
        assert_eq!(out[2], (Token::Operator(Operator::Add), 3));
    }

    #[test]
    fn yields_to_matches_precedence() {
        assert!(yields_to(Operator::Mul, Operator::Add));
        assert!(yields_to(Operator::Sub, Operator::Add));
        assert!(!yields_to(Operator::Add, Operator::Div));
    }
}
