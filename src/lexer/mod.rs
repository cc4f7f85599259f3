//! Front end: whitespace filtering and lexeme labelling for the tokenized echo

mod errors;
mod filter;
mod token;

pub use errors::LexError;
pub use filter::{MAX_LINE_LENGTH, strip_whitespace, truncate_line};
pub use token::{Lexeme, render_labels, tokenize};

#[cfg(test)]
mod tests;
