use log::debug;

use crate::expression::ast::{Node, Operator};
use crate::expression::errors::ParseError;
use crate::expression::scanner::find_top_level;

type TierParser = fn(&str) -> Result<Node, ParseError>;

const EXPRESSION_OPERATORS: [char; 2] = ['+', '-'];
const TERM_OPERATORS: [char; 2] = ['*', '/'];
const FACTOR_OPERATORS: [char; 1] = ['^'];

/// Parse `Expression := Expression ('+'|'-') Term | Term`
///
/// # Errors
///
/// Returns an error if the text is empty, has an operator without an operand,
/// has unbalanced parentheses, or contains an invalid factor.
pub fn parse_expression(text: &str) -> Result<Node, ParseError> {
    if text.is_empty() {
        return Err(ParseError::TooManyOperators);
    }
    match split_at_operator(text, &EXPRESSION_OPERATORS, parse_expression, parse_term)? {
        Some(node) => Ok(node),
        None => parse_term(text),
    }
}

/// Parse `Term := Term ('*'|'/') Factor | Factor`
///
/// # Errors
///
/// Same conditions as [`parse_expression`].
pub fn parse_term(text: &str) -> Result<Node, ParseError> {
    if text.is_empty() {
        return Err(ParseError::TooManyOperators);
    }
    match split_at_operator(text, &TERM_OPERATORS, parse_term, parse_factor)? {
        Some(node) => Ok(node),
        None => parse_factor(text),
    }
}

/// Parse `Factor := Factor '^' Factor | '(' Expression ')' | Digit`
///
/// A leading `(` with a trailing `)` is stripped by position only, so
/// `(3)^(4)` becomes `3)^(4` and is rejected as an invalid character.
///
/// # Errors
///
/// Returns [`ParseError::InvalidCharacter`] for a single non-digit character
/// and for multi-character text that is neither grouped nor a power.
pub fn parse_factor(text: &str) -> Result<Node, ParseError> {
    let mut chars = text.chars();
    let (first, second) = match (chars.next(), chars.next()) {
        (None, _) => return Err(ParseError::TooManyOperators),
        (Some(first), second) => (first, second),
    };

    if second.is_none() {
        return match first.to_digit(10) {
            // A decimal digit always fits in a u8
            Some(digit) => Ok(Node::literal(digit as u8)),
            None => {
                debug!("Rejecting non-digit literal '{}'", first);
                Err(ParseError::InvalidCharacter(first.to_string()))
            }
        };
    }

    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        debug!("Factor '{}' is grouped, parsing '{}'", text, inner);
        return Ok(Node::grouped(parse_expression(inner)?));
    }

    match split_at_operator(text, &FACTOR_OPERATORS, parse_factor, parse_factor)? {
        Some(node) => Ok(node),
        None => {
            debug!("Factor '{}' is not a digit, group or power", text);
            Err(ParseError::InvalidCharacter(text.to_string()))
        }
    }
}

/// Split `text` at its rightmost top-level operator and parse both sides
///
/// The left side is parsed by `same` (the current tier) and the right side by
/// `tighter`. Returns `None` when the text has no top-level operator of this
/// tier, leaving the caller to delegate the whole text.
fn split_at_operator(
    text: &str,
    operators: &[char],
    same: TierParser,
    tighter: TierParser,
) -> Result<Option<Node>, ParseError> {
    let Some(index) = find_top_level(text, operators)? else {
        return Ok(None);
    };

    let op = text[index..]
        .chars()
        .next()
        .and_then(Operator::from_symbol)
        .ok_or_else(|| ParseError::InvalidCharacter(text[index..].to_string()))?;
    let (left, right) = (&text[..index], &text[index + op.symbol().len_utf8()..]);

    debug!(
        "Splitting '{}' at '{}': left='{}', right='{}'",
        text,
        op.symbol(),
        left,
        right
    );

    if left.is_empty() || right.is_empty() {
        debug!("Operator '{}' in '{}' is missing an operand", op.symbol(), text);
        return Err(ParseError::TooManyOperators);
    }

    let left = same(left)?;
    let right = tighter(right)?;
    Ok(Some(Node::binary(op, left, right)))
}
