use log::debug;
use logos::Logos;

use crate::lexer::errors::LexError;

/// One labelled input character
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Lexeme {
    /// Equation identifier, one of `a`, `b` or `c`
    #[regex("[abc]", |lex| lex.slice().chars().next())]
    Identifier(char),
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("^")]
    Pow,
    #[token("=")]
    EqualSign,
    #[regex("[0-9]", |lex| lex.slice().parse().ok())]
    Digit(u8),
}

impl Lexeme {
    /// Display name used in the tokenized echo
    pub fn label(&self) -> String {
        match self {
            Lexeme::Identifier(_) => "id".to_string(),
            Lexeme::LeftParen => "lt_paren".to_string(),
            Lexeme::RightParen => "rt_paren".to_string(),
            Lexeme::Add => "add_op".to_string(),
            Lexeme::Sub => "sub_op".to_string(),
            Lexeme::Mul => "mul_op".to_string(),
            Lexeme::Div => "div_op".to_string(),
            Lexeme::Pow => "pow_op".to_string(),
            Lexeme::EqualSign => "equal_sign".to_string(),
            Lexeme::Digit(d) => d.to_string(),
        }
    }
}

/// Label every non-whitespace character of `source`
///
/// # Errors
///
/// Returns [`LexError::UnknownLexeme`] for the first character that has no label.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
    debug!("Tokenizing '{}'", source);

    let mut lexemes = Vec::with_capacity(source.len());
    let mut lexer = Lexeme::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(lexeme) => lexemes.push(lexeme),
            Err(()) => {
                let position = lexer.span().start;
                let character = source[position..].chars().next().unwrap_or('\u{FFFD}');
                debug!("No lexeme for '{}' at position {}", character, position);
                return Err(LexError::UnknownLexeme {
                    character,
                    position,
                });
            }
        }
    }

    debug!("Tokenized {} lexemes", lexemes.len());
    Ok(lexemes)
}

/// Render lexemes as `[label1,label2,...]`
pub fn render_labels(lexemes: &[Lexeme]) -> String {
    let labels: Vec<String> = lexemes.iter().map(Lexeme::label).collect();
    format!("[{}]", labels.join(","))
}
