//! Parse tree, recursive-descent parser and memoized evaluator

mod ast;
mod display;
mod errors;
mod eval;
mod parser;
mod scanner;

pub use ast::{Node, NodeKind, Operator, Tier};
pub use errors::ParseError;
pub use parser::{parse_expression, parse_factor, parse_term};
pub use scanner::find_top_level;
