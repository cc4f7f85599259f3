//! eqcalc - Tokenize, parse and evaluate single-line equations
//!
//! An equation has the form `<id> = <expression>` where the identifier is one
//! of `a`, `b` or `c` and the expression uses single-digit literals,
//! parentheses and the operators `+ - * / ^`. Every operator, `^` included,
//! is left-associative, and exponents are truncated toward zero.

pub mod equation;
pub mod expression;
pub mod lexer;

// Re-export the main public API
pub use equation::{Equation, EquationError};
pub use expression::{Node, NodeKind, Operator, ParseError, Tier};
pub use lexer::{LexError, Lexeme};

/// Parse an equation and evaluate it
///
/// Whitespace is removed before parsing, so `"a = 3 + 4"` and `"a=3+4"` are
/// equivalent. The returned equation already holds its cached value.
///
/// # Errors
///
/// Returns [`EquationError::Syntax`] if the line is not a valid equation or has
/// more than [`lexer::MAX_LINE_LENGTH`] non-whitespace characters.
///
/// # Examples
///
/// ```
/// use eqcalc::parse_and_eval;
///
/// match parse_and_eval("a = 2 ^ 3 ^ 2") {
///     Ok(equation) => assert_eq!(equation.value(), 64.0),
///     Err(e) => panic!("unexpected error: {}", e),
/// }
/// ```
pub fn parse_and_eval(line: &str) -> Result<Equation, EquationError> {
    let text = lexer::strip_whitespace(line);
    let equation = Equation::parse(&text)?;
    equation.value();
    Ok(equation)
}

/// Render the tokenized echo of a line, e.g. `[id,equal_sign,3,add_op,4]`
///
/// # Errors
///
/// Returns [`EquationError::Lexical`] if the line contains a character with no label.
pub fn tokenized_echo(line: &str) -> Result<String, EquationError> {
    let lexemes = lexer::tokenize(line)?;
    Ok(lexer::render_labels(&lexemes))
}
