use tracing::{debug, warn};

use crate::error::PatternError;
use crate::highlight::{HighlightRun, highlight};
use crate::regex::{CaptureSet, MatchSpan, PatternToken, annotate, evaluate};

/// Everything a front-end needs to draw after one recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tokens: Vec<PatternToken>,
    pub matches: Vec<MatchSpan>,
    pub captures: CaptureSet,
    pub has_capture_groups: bool,
    pub runs: Vec<HighlightRun>,
    pub error: Option<PatternError>,
}

impl Snapshot {
    fn plain(content: &str, tokens: Vec<PatternToken>, error: Option<PatternError>) -> Self {
        Snapshot {
            tokens,
            matches: Vec::new(),
            captures: CaptureSet::new(),
            has_capture_groups: false,
            runs: highlight(content, &[]),
            error,
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Capture pane is worth showing only for a pattern with capturing groups
    /// that actually matched something.
    pub fn shows_captures(&self) -> bool {
        self.has_capture_groups && !self.captures.is_empty()
    }
}

/// Evaluation context: the content buffer plus the pattern currently typed.
/// Every change rebuilds the snapshot from scratch.
#[derive(Debug, Clone)]
pub struct Session {
    content: String,
    pattern: String,
    snapshot: Snapshot,
}

impl Session {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let snapshot = Snapshot::plain(&content, Vec::new(), None);
        Session {
            content,
            pattern: String::new(),
            snapshot,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) -> &Snapshot {
        self.pattern = pattern.into();
        self.recompute()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &Snapshot {
        self.content = content.into();
        self.recompute()
    }

    fn recompute(&mut self) -> &Snapshot {
        self.snapshot = compute(&self.pattern, &self.content);
        &self.snapshot
    }
}

/// annotate -> evaluate -> highlight for one pattern.
pub fn compute(pattern: &str, content: &str) -> Snapshot {
    if pattern.is_empty() {
        return Snapshot::plain(content, Vec::new(), None);
    }

    let tokens = annotate(pattern);
    match evaluate(pattern, content) {
        Ok(eval) => {
            debug!(
                pattern_len = pattern.len(),
                tokens = tokens.len(),
                matches = eval.matches.len(),
                "recomputed"
            );
            let runs = highlight(content, &eval.matches);
            Snapshot {
                tokens,
                matches: eval.matches,
                captures: eval.captures,
                has_capture_groups: eval.has_capture_groups,
                runs,
                error: None,
            }
        }
        Err(err) => {
            warn!("invalid pattern: {err}");
            Snapshot::plain(content, tokens, Some(err))
        }
    }
}
