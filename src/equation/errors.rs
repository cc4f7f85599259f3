use thiserror::Error;

use crate::expression::ParseError;
use crate::lexer::LexError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexError),
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParseError),
}
