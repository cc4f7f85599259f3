use thiserror::Error;

/// Syntax errors raised while building the parse tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(
        "Syntax is not satisfied. Need an expression on right side of equals sign (got {length} characters)"
    )]
    InputTooShort { length: usize },
    #[error("Input is {length} characters long, at most {max} are accepted")]
    InputTooLong { length: usize, max: usize },
    #[error("Syntax is not satisfied. Need a valid identifier (a, b or c) on left side of equals sign, found '{0}'")]
    InvalidIdentifier(char),
    #[error("Syntax is not satisfied. Need an equals sign between identifier and expression, found '{0}'")]
    MissingEquals(char),
    #[error("Parentheses are not balanced")]
    UnbalancedParentheses,
    #[error("There are too many operators")]
    TooManyOperators,
    #[error("An invalid character was used: '{0}'")]
    InvalidCharacter(String),
}
