use logos::Logos;

use crate::symbol::Operator;

/// A token paired with the 1-based source column where it starts.
pub type Spanned = (Token, usize);

/// Represents a lexical token in an arithmetic expression.
///
/// Numbers accept both `.` and `,` as the decimal separator. Every operator
/// and parenthesis is a single character.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `2,5` or `.5`.
    Number(f64),
    /// One of `+ - * / √ !`.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Text the lexer could not classify. Rejected by the postfix converter.
    Invalid(String),
}

/// The tokens recognized by the generated lexer. Whitespace separates
/// lexemes and is otherwise dropped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    #[regex(r"[0-9.,]+", parse_number)]
    Number(f64),
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("√", |_| Operator::Sqrt)]
    #[token("!", |_| Operator::Factorial)]
    Operator(Operator),
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(n) => Self::Number(n),
            Lexeme::Operator(op) => Self::Operator(op),
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Invalid(text) => write!(f, "{text}"),
        }
    }
}

/// Splits an expression into tokens.
///
/// Tokenizing never fails: text that is not a number, an operator or a
/// parenthesis becomes [`Token::Invalid`] and is reported by the converter. A
/// `-` in prefix position that is directly followed by a number is folded into
/// a negative literal (see [`fold_signs`]).
///
/// # Parameters
/// - `source`: The raw expression.
///
/// # Returns
/// The tokens in source order, each with its 1-based column.
///
/// # Example
/// ```
/// use stackcalc::{interpreter::lexer::{Token, tokenize}, symbol::Operator};
///
/// let tokens = tokenize("2,5 * (1-3)");
/// assert_eq!(tokens[0], (Token::Number(2.5), 1));
/// assert_eq!(tokens[1], (Token::Operator(Operator::Mul), 5));
/// assert_eq!(tokens.len(), 7);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Spanned> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);
    let mut columns = ColumnTracker::default();

    while let Some(token) = lexer.next() {
        let column = columns.column_at(source, lexer.span().start);
        let token = token.map_or_else(|()| Token::Invalid(lexer.slice().to_string()), Token::from);
        tokens.push((token, column));
    }

    let tokens = fold_signs(tokens);
    tracing::debug!(count = tokens.len(), "tokenized expression");
    tokens
}

/// Folds a prefix `-` into the number that follows it.
///
/// A `-` is in prefix position at the start of the input, after `(` and after
/// a binary operator. Anywhere else it stays a subtraction.
#[must_use]
pub fn fold_signs(tokens: Vec<Spanned>) -> Vec<Spanned> {
    let mut folded: Vec<Spanned> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some((token, column)) = iter.next() {
        if token == Token::Operator(Operator::Sub)
           && is_prefix_position(folded.last().map(|(t, _)| t))
           && let Some((Token::Number(value), _)) = iter.peek()
        {
            let negated = -*value;
            iter.next();
            folded.push((Token::Number(negated), column));
            continue;
        }
        folded.push((token, column));
    }

    folded
}

fn is_prefix_position(previous: Option<&Token>) -> bool {
    match previous {
        None | Some(Token::LParen) => true,
        Some(Token::Operator(op)) => op.is_binary(),
        Some(_) => false,
    }
}

/// Parses a numeric literal from the current token slice.
///
/// A `,` is read as the decimal point. Literals with several separators, or
/// with nothing but separators, do not parse and surface as lexer errors.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().replace(',', ".").parse().ok()
}

/// Converts byte offsets into 1-based character columns.
///
/// Offsets must be requested in increasing order.
#[derive(Default)]
struct ColumnTracker {
    offset: usize,
    column: usize,
}

impl ColumnTracker {
    fn column_at(&mut self, source: &str, offset: usize) -> usize {
        self.column += source[self.offset..offset].chars().count();
        self.offset = offset;
        self.column + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn numbers_accept_both_separators() {
        assert_eq!(kinds("1.5"), vec![Token::Number(1.5)]);
        assert_eq!(kinds("1,5"), vec![Token::Number(1.5)]);
        assert_eq!(kinds(".5"), vec![Token::Number(0.5)]);
    }

    #[test]
    fn malformed_numbers_become_invalid() {
        assert_eq!(kinds("1.2.3"), vec![Token::Invalid("1.2.3".to_string())]);
        assert_eq!(kinds("."), vec![Token::Invalid(".".to_string())]);
    }

    #[test]
    fn operators_and_parens() {
        assert_eq!(kinds("(2+3)*√4!"),
                   vec![Token::LParen,
                        Token::Number(2.0),
                        Token::Operator(Operator::Add),
                        Token::Number(3.0),
                        Token::RParen,
                        Token::Operator(Operator::Mul),
                        Token::Operator(Operator::Sqrt),
                        Token::Number(4.0),
                        Token::Operator(Operator::Factorial)]);
    }

    #[test]
    fn whitespace_separates_numbers() {
        assert_eq!(kinds(" 2 \t3 "), vec![Token::Number(2.0), Token::Number(3.0)]);
    }

    #[test]
    fn unknown_characters_are_invalid() {
        assert_eq!(kinds("2^3"),
                   vec![Token::Number(2.0), Token::Invalid("^".to_string()), Token::Number(3.0)]);
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let tokens = tokenize("√9 + x");
        assert_eq!(tokens[0].1, 1);
        assert_eq!(tokens[1].1, 2);
        assert_eq!(tokens[2].1, 4);
        assert_eq!(tokens[3], (Token::Invalid("x".to_string()), 6));
    }

    #[test]
    fn prefix_minus_folds_into_literal() {
        assert_eq!(kinds("-2!"), vec![Token::Number(-2.0), Token::Operator(Operator::Factorial)]);
        assert_eq!(kinds("2*-3"),
                   vec![Token::Number(2.0), Token::Operator(Operator::Mul), Token::Number(-3.0)]);
        assert_eq!(kinds("(-1)"), vec![Token::LParen, Token::Number(-1.0), Token::RParen]);
    }

    #[test]
    fn infix_minus_stays_an_operator() {
        assert_eq!(kinds("6-3"),
                   vec![Token::Number(6.0), Token::Operator(Operator::Sub), Token::Number(3.0)]);
        assert_eq!(kinds("3!-1"),
                   vec![Token::Number(3.0),
                        Token::Operator(Operator::Factorial),
                        Token::Operator(Operator::Sub),
                        Token::Number(1.0)]);
        assert_eq!(kinds("-(1)"),
                   vec![Token::Operator(Operator::Sub),
                        Token::LParen,
                        Token::Number(1.0),
                        Token::RParen]);
    }

    #[test]
    fn folded_literal_keeps_sign_column() {
        assert_eq!(tokenize("1+-2")[2], (Token::Number(-2.0), 3));
    }
}
