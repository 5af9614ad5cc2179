use crate::regex::ast::{PatternToken, TokenKind};
use crate::regex::lexer::{Lexeme, classify};
use crate::regex::quantifier::{closes_range, parse_range};

pub fn annotate(pattern: &str) -> Vec<PatternToken> {
    let mut annotator = Annotator::new(pattern);
    annotator.run();
    annotator.tokens
}

/// Single left-to-right scan over a pattern. Each position is consumed
/// exactly once; `depth` counts open capturing groups and never goes below 0.
pub struct Annotator<'a> {
    pattern: &'a str,
    pos: usize,
    depth: usize,
    tokens: Vec<PatternToken>,
}

impl<'a> Annotator<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Annotator {
            pattern,
            pos: 0,
            depth: 0,
            tokens: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn run(&mut self) {
        while self.pos < self.pattern.len() {
            let lexeme = self.next_lexeme();
            self.push(lexeme);
        }
    }

    fn next_lexeme(&self) -> Lexeme {
        match self.pattern.as_bytes()[self.pos] {
            b'{' => match parse_range(self.pattern, self.pos) {
                Some(range) => Lexeme {
                    kind: TokenKind::QuantifierRange,
                    len: range.end - range.start,
                    explanation: range.explanation(),
                },
                None => Lexeme::literal(1),
            },
            b'}' => {
                // a `}` that closes a valid range went out with its `{`
                debug_assert!(!closes_range(self.pattern, self.pos));
                Lexeme::literal(1)
            }
            _ => classify(self.pattern, self.pos),
        }
    }

    fn push(&mut self, lexeme: Lexeme) {
        let nesting_depth = match lexeme.kind {
            TokenKind::GroupOpen => {
                self.depth += 1;
                self.depth - 1
            }
            TokenKind::GroupClose => {
                self.depth = self.depth.saturating_sub(1);
                self.depth
            }
            _ => self.depth,
        };

        let span = self.pos..self.pos + lexeme.len;
        self.pos = span.end;
        self.tokens.push(PatternToken {
            text: self.pattern[span.clone()].to_string(),
            span,
            kind: lexeme.kind,
            nesting_depth,
            explanation: lexeme.explanation,
        });
    }
}
