pub mod app;
pub mod cli;
pub mod error;
pub mod highlight;
pub mod input;
pub mod output;
pub mod regex;
pub mod session;

pub use error::PatternError;
pub use highlight::{HighlightRun, highlight};
pub use crate::regex::{
    CaptureSet, Evaluation, MatchSpan, PatternToken, TokenKind, annotate, evaluate,
    has_capture_groups,
};
pub use session::{Session, Snapshot};
