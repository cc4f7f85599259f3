//! Top-level `<id>=<expression>` rule and its evaluated result

mod core;
mod errors;

pub use self::core::{EQUALS_SIGN, Equation, IDENTIFIERS};
pub use errors::EquationError;
