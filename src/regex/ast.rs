use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Literal,
    Escape,                // \d, \w, \.
    MetaChar,              // ^ $ . [ ]
    GroupOpen,             // (
    GroupOpenNonCapturing, // (?:
    GroupClose,            // )
    Quantifier,            // * + ?
    QuantifierRange,       // {n}, {n,}, {n,m}
    Alternation,           // |
}

/// One explained piece of a pattern. `span` is a byte range into the pattern
/// and always starts and ends on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternToken {
    pub span: Range<usize>,
    pub text: String,
    pub kind: TokenKind,
    pub nesting_depth: usize,
    pub explanation: String,
}

impl PatternToken {
    pub fn position(&self) -> usize {
        self.span.start
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
