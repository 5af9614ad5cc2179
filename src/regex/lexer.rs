use crate::regex::ast::TokenKind;

const LITERAL: &str = "match this character literally";

/// Result of classifying the character (or escape pair) at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub len: usize,
    pub explanation: String,
}

impl Lexeme {
    fn new(kind: TokenKind, len: usize, explanation: impl Into<String>) -> Self {
        Lexeme {
            kind,
            len,
            explanation: explanation.into(),
        }
    }

    pub fn literal(len: usize) -> Self {
        Lexeme::new(TokenKind::Literal, len, LITERAL)
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_meta_char(c: char) -> bool {
    matches!(c, '^' | '$' | '.' | '[' | ']' | '|')
}

pub fn is_quantifier_char(c: char) -> bool {
    matches!(c, '*' | '+' | '?')
}

/// True when the `(` at `pos` is followed by a literal `?:`.
pub fn opens_non_capturing(pattern: &str, pos: usize) -> bool {
    pattern
        .get(pos + 1..)
        .is_some_and(|rest| rest.starts_with("?:"))
}

/// Classifies the character at byte offset `pos`. Braces are not handled here:
/// the annotator decides whether they belong to a range quantifier.
///
/// `pos` must be a char boundary inside `pattern`.
pub fn classify(pattern: &str, pos: usize) -> Lexeme {
    let mut chars = pattern[pos..].chars();
    let Some(c) = chars.next() else {
        return Lexeme::literal(0);
    };

    match c {
        '\\' => match chars.next() {
            Some(escaped) => Lexeme::new(
                TokenKind::Escape,
                1 + escaped.len_utf8(),
                escape_explanation(escaped),
            ),
            // trailing backslash
            None => Lexeme::literal(1),
        },
        '(' if opens_non_capturing(pattern, pos) => {
            Lexeme::new(TokenKind::GroupOpenNonCapturing, 1, "start non-capturing group")
        }
        '(' => Lexeme::new(TokenKind::GroupOpen, 1, "start capturing group"),
        ')' => Lexeme::new(TokenKind::GroupClose, 1, "end group"),
        '|' => Lexeme::new(TokenKind::Alternation, 1, "alternation (OR)"),
        c if is_meta_char(c) => Lexeme::new(TokenKind::MetaChar, 1, meta_explanation(c)),
        c if is_quantifier_char(c) => {
            Lexeme::new(TokenKind::Quantifier, 1, quantifier_explanation(c))
        }
        c => Lexeme::literal(c.len_utf8()),
    }
}

pub fn escape_explanation(c: char) -> String {
    let text = match c {
        'd' => "match any digit [0-9]",
        'D' => "match any non-digit",
        'w' => "match any word character [a-zA-Z0-9_]",
        'W' => "match any non-word character",
        's' => "match any whitespace character (space, tab, newline)",
        'S' => "match any non-whitespace character",
        'b' => "match a word boundary",
        'B' => "match a non-word boundary",
        'A' => "match start of string",
        'z' => "match end of string",
        't' => "match tab character",
        'n' => "match newline character",
        'r' => "match carriage return",
        other => return format!("escaped character '{other}'"),
    };
    text.to_string()
}

fn meta_explanation(c: char) -> &'static str {
    match c {
        '^' => "match start of line",
        '$' => "match end of line",
        '.' => "match any character except newline",
        '[' => "start character class",
        ']' => "end character class",
        _ => LITERAL,
    }
}

fn quantifier_explanation(c: char) -> &'static str {
    match c {
        '*' => "match the preceding token zero or more times",
        '+' => "match the preceding token one or more times",
        '?' => "match the preceding token zero or one time",
        _ => LITERAL,
    }
}
