use thiserror::Error;

/// Errors raised while labelling input characters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Bad input! Try again using only valid lexemes (found '{character}' at position {position})")]
    UnknownLexeme { character: char, position: usize },
}
