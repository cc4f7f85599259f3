use log::{debug, warn};

/// Longest input line that is considered, in characters
pub const MAX_LINE_LENGTH: usize = 100;

/// Remove every ASCII whitespace character
pub fn strip_whitespace(line: &str) -> String {
    let stripped: String = line.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    debug!("Stripped whitespace: '{}' -> '{}'", line.trim_end(), stripped);
    stripped
}

/// Drop the line terminator and cut `line` down to at most [`MAX_LINE_LENGTH`] characters
pub fn truncate_line(line: &str) -> &str {
    let line = line.trim_end_matches(['\n', '\r']);
    match line.char_indices().nth(MAX_LINE_LENGTH) {
        Some((cut, _)) => {
            warn!(
                "Input longer than {} characters, ignoring the rest",
                MAX_LINE_LENGTH
            );
            &line[..cut]
        }
        None => line,
    }
}
