use crate::regex::MatchSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRun {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightRun {
    fn plain(text: &str) -> Self {
        HighlightRun {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn matched(text: &str) -> Self {
        HighlightRun {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Splits `content` into plain and matched runs. Matches are expected in
/// left-to-right order; a span that reaches back before the previous one is
/// clipped, so the runs always cover `content` exactly once. Empty runs are
/// dropped, except that content with no matches always gives one run.
pub fn highlight(content: &str, matches: &[MatchSpan]) -> Vec<HighlightRun> {
    if matches.is_empty() {
        return vec![HighlightRun::plain(content)];
    }

    let mut runs = Vec::new();
    let mut last_end = 0;

    for m in matches {
        let start = m.start.max(last_end);
        let end = m.end.min(content.len());
        if end <= start {
            continue;
        }
        let (Some(gap), Some(hit)) = (content.get(last_end..start), content.get(start..end))
        else {
            continue;
        };

        if !gap.is_empty() {
            runs.push(HighlightRun::plain(gap));
        }
        runs.push(HighlightRun::matched(hit));
        last_end = end;
    }

    if last_end < content.len() {
        runs.push(HighlightRun::plain(&content[last_end..]));
    }
    if runs.is_empty() {
        runs.push(HighlightRun::plain(content));
    }
    runs
}
