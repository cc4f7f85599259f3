use log::{debug, trace};

use crate::expression::errors::ParseError;

/// Find the rightmost occurrence of any of `candidates` outside parentheses
///
/// The scan runs from the last character to the first, counting `)` as an
/// opening of depth and `(` as a closing, and only accepts a candidate while
/// the depth is zero. Picking the rightmost operator and recursing into the
/// left remainder is what makes every tier left-associative.
///
/// Returns the byte index of the match, or `None` if nothing qualifies.
///
/// # Errors
///
/// Returns [`ParseError::UnbalancedParentheses`] if the scan reaches the start
/// of the string with a nonzero depth.
pub fn find_top_level(text: &str, candidates: &[char]) -> Result<Option<usize>, ParseError> {
    let mut depth: i32 = 0;

    for (index, c) in text.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => depth -= 1,
            _ => {}
        }
        if depth == 0 && candidates.contains(&c) {
            trace!("Found top-level '{}' at {} in '{}'", c, index, text);
            return Ok(Some(index));
        }
    }

    if depth != 0 {
        debug!("Unbalanced parentheses in '{}' (depth {})", text, depth);
        return Err(ParseError::UnbalancedParentheses);
    }

    Ok(None)
}
