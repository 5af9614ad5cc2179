pub mod ast;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod quantifier;

pub use ast::{PatternToken, TokenKind};
pub use matcher::{CaptureSet, Evaluation, MatchSpan, evaluate, has_capture_groups};
pub use parser::annotate;
