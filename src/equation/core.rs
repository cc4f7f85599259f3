use std::cell::OnceCell;
use std::fmt;

use log::{debug, info};

use crate::expression::{Node, ParseError, parse_expression};
use crate::lexer::MAX_LINE_LENGTH;

/// Characters accepted on the left side of the equals sign
pub const IDENTIFIERS: [char; 3] = ['a', 'b', 'c'];
pub const EQUALS_SIGN: char = '=';

/// Parsed `<id>=<expression>` line owning its whole parse tree
#[derive(Debug, Clone)]
pub struct Equation {
    identifier: char,
    equals_sign: char,
    body: Node,
    value: OnceCell<f64>,
}

impl Equation {
    /// Parse a whitespace-free equation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The text is shorter than three characters
    /// * The text is longer than [`MAX_LINE_LENGTH`] characters
    /// * The first character is not `a`, `b` or `c`
    /// * The second character is not `=`
    /// * The right-hand side is not a valid expression
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        debug!("Parsing equation '{}'", text);

        let length = text.chars().count();
        if length < 3 {
            return Err(ParseError::InputTooShort { length });
        }
        if length > MAX_LINE_LENGTH {
            debug!("Rejecting {} characters of input", length);
            return Err(ParseError::InputTooLong {
                length,
                max: MAX_LINE_LENGTH,
            });
        }

        let mut chars = text.chars();
        let identifier = match chars.next() {
            Some(c) if IDENTIFIERS.contains(&c) => c,
            Some(c) => return Err(ParseError::InvalidIdentifier(c)),
            None => return Err(ParseError::InputTooShort { length }),
        };
        let equals_sign = match chars.next() {
            Some(EQUALS_SIGN) => EQUALS_SIGN,
            Some(c) => return Err(ParseError::MissingEquals(c)),
            None => return Err(ParseError::InputTooShort { length }),
        };

        let body = parse_expression(chars.as_str())?;
        let equation = Self {
            identifier,
            equals_sign,
            body,
            value: OnceCell::new(),
        };
        info!(
            "Parsed equation '{}' into {} nodes",
            equation,
            equation.body.node_count()
        );
        Ok(equation)
    }

    pub fn identifier(&self) -> char {
        self.identifier
    }

    pub fn equals_sign(&self) -> char {
        self.equals_sign
    }

    /// Root of the right-hand side parse tree
    pub fn body(&self) -> &Node {
        &self.body
    }

    /// Value of the right-hand side, computed on first call and cached afterwards
    pub fn value(&self) -> f64 {
        *self.value.get_or_init(|| {
            let value = self.body.value();
            debug!("Equation '{}' evaluated to {}", self, value);
            value
        })
    }

    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Final output line, `<identifier> <equals sign> <value>`
    pub fn result_line(&self) -> String {
        format!(
            "{} {} {:.6}",
            self.identifier,
            self.equals_sign,
            self.value()
        )
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.identifier, self.equals_sign, self.body)
    }
}
