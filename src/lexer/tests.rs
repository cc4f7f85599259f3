use proptest::prelude::*;

use crate::lexer::{
    LexError, Lexeme, MAX_LINE_LENGTH, render_labels, strip_whitespace, tokenize, truncate_line,
};

#[test]
fn test_tokenize_simple_equation() {
    let lexemes = tokenize("a=3+4");
    assert_eq!(
        lexemes,
        Ok(vec![
            Lexeme::Identifier('a'),
            Lexeme::EqualSign,
            Lexeme::Digit(3),
            Lexeme::Add,
            Lexeme::Digit(4),
        ])
    );
}

#[test]
fn test_render_labels() {
    let lexemes = tokenize("b = (1-2)*3/4^5");
    assert!(lexemes.is_ok());
    if let Ok(lexemes) = lexemes {
        assert_eq!(
            render_labels(&lexemes),
            "[id,equal_sign,lt_paren,1,sub_op,2,rt_paren,mul_op,3,div_op,4,pow_op,5]"
        );
    }
}

#[test]
fn test_render_labels_empty() {
    assert_eq!(render_labels(&[]), "[]");
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(tokenize(" \tc =\r\n 9 "), tokenize("c=9"));
}

#[test]
fn test_unknown_lexeme() {
    assert_eq!(
        tokenize("a=3%4"),
        Err(LexError::UnknownLexeme {
            character: '%',
            position: 3,
        })
    );
    assert_eq!(
        tokenize("d=1"),
        Err(LexError::UnknownLexeme {
            character: 'd',
            position: 0,
        })
    );
}

#[test]
fn test_unknown_multibyte_lexeme() {
    assert_eq!(
        tokenize("a=é"),
        Err(LexError::UnknownLexeme {
            character: 'é',
            position: 2,
        })
    );
}

#[test]
fn test_strip_whitespace() {
    assert_eq!(strip_whitespace(" a = 3 + 4\n"), "a=3+4");
    assert_eq!(strip_whitespace("a\t=\r3"), "a=3");
    assert_eq!(strip_whitespace(""), "");
}

#[test]
fn test_truncate_line() {
    let short = "a=1+2";
    assert_eq!(truncate_line(short), short);

    let long = "1".repeat(MAX_LINE_LENGTH + 20);
    assert_eq!(truncate_line(&long).len(), MAX_LINE_LENGTH);

    let exact = "2".repeat(MAX_LINE_LENGTH);
    assert_eq!(truncate_line(&exact), exact);
}

#[test]
fn test_truncate_line_ignores_terminator() {
    let exact = "3".repeat(MAX_LINE_LENGTH);
    assert_eq!(truncate_line(&format!("{}\n", exact)), exact);
    assert_eq!(truncate_line(&format!("{}\r\n", exact)), exact);

    let long = format!("{}\n", "4".repeat(MAX_LINE_LENGTH + 1));
    assert_eq!(truncate_line(&long), "4".repeat(MAX_LINE_LENGTH));
}

proptest! {
    #[test]
    fn one_label_per_significant_character(text in "[abc()+*/^=0-9 \t-]{0,60}") {
        let lexemes = tokenize(&text);
        prop_assert!(lexemes.is_ok());
        if let Ok(lexemes) = lexemes {
            let significant: Vec<char> =
                text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            prop_assert_eq!(lexemes.len(), significant.len());

            let rendered = render_labels(&lexemes);
            prop_assert!(rendered.starts_with('[') && rendered.ends_with(']'));
            prop_assert!(!rendered.ends_with(",]"));
            if !significant.is_empty() {
                let inner = &rendered[1..rendered.len() - 1];
                prop_assert_eq!(inner.split(',').count(), significant.len());
            }

            for (lexeme, c) in lexemes.iter().zip(significant) {
                let label = lexeme.label();
                if let Some(digit) = c.to_digit(10) {
                    prop_assert_eq!(label, digit.to_string());
                } else {
                    prop_assert!(!label.is_empty());
                }
            }
        }
    }
}
