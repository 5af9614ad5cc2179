use std::collections::BTreeMap;

use regex::Regex;

use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        MatchSpan { start, end }
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, end): (usize, usize)) -> Self {
        MatchSpan { start, end }
    }
}

/// Group index (1-based) to the distinct values it captured, in the order
/// they were first seen.
pub type CaptureSet = BTreeMap<usize, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub matches: Vec<MatchSpan>,
    pub captures: CaptureSet,
    pub has_capture_groups: bool,
}

pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    Ok(Regex::new(pattern)?)
}

pub fn evaluate(pattern: &str, content: &str) -> Result<Evaluation, PatternError> {
    let re = compile(pattern)?;
    Ok(evaluate_compiled(&re, pattern, content))
}

pub fn evaluate_compiled(re: &Regex, pattern: &str, content: &str) -> Evaluation {
    let matches = re
        .find_iter(content)
        .map(|m| MatchSpan::new(m.start(), m.end()))
        .collect();

    let has_capture_groups = has_capture_groups(pattern);
    let captures = if has_capture_groups {
        collect_captures(re, content)
    } else {
        CaptureSet::new()
    };

    Evaluation {
        matches,
        captures,
        has_capture_groups,
    }
}

fn collect_captures(re: &Regex, content: &str) -> CaptureSet {
    let mut captures = CaptureSet::new();
    for caps in re.captures_iter(content) {
        // group 0 is the whole match
        for index in 1..caps.len() {
            // a group that did not take part in this match counts as ""
            let value = caps.get(index).map_or("", |m| m.as_str());
            let seen = captures.entry(index).or_default();
            if !seen.iter().any(|v| v == value) {
                seen.push(value.to_string());
            }
        }
    }
    captures
}

/// Best-effort check used to decide whether a capture pane is worth showing:
/// unescaped `(` must outnumber occurrences of `(?:`.
pub fn has_capture_groups(pattern: &str) -> bool {
    let mut opens = 0;
    let mut escaped = false;
    for c in pattern.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '(' => opens += 1,
            _ => {}
        }
    }
    opens > pattern.matches("(?:").count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(pattern: &str, content: &str) -> Vec<(usize, usize)> {
        evaluate(pattern, content)
            .unwrap()
            .matches
            .into_iter()
            .map(|m| (m.start, m.end))
            .collect()
    }

    #[test]
    fn finds_all_non_overlapping_matches() {
        assert_eq!(spans("ab", "ab ab"), vec![(0, 2), (3, 5)]);
        assert_eq!(spans("aa", "aaaa"), vec![(0, 2), (2, 4)]);
        assert_eq!(spans("x", "abc"), vec![]);
    }

    #[test]
    fn dedups_captures_across_matches() {
        let eval = evaluate("(a)(b)", "ab ab").unwrap();
        assert_eq!(eval.matches.len(), 2);
        assert!(eval.has_capture_groups);
        assert_eq!(
            eval.captures,
            CaptureSet::from([(1, vec!["a".to_string()]), (2, vec!["b".to_string()])])
        );
    }

    #[test]
    fn keeps_first_seen_order() {
        let eval = evaluate(r"(\d)", "3 1 3 2 1").unwrap();
        assert_eq!(eval.captures[&1], vec!["3", "1", "2"]);
    }

    #[test]
    fn non_participating_group_is_empty_string() {
        let eval = evaluate("(a)|(b)", "ab").unwrap();
        assert_eq!(eval.captures[&1], vec!["a", ""]);
        assert_eq!(eval.captures[&2], vec!["", "b"]);
    }

    #[test]
    fn no_groups_no_captures() {
        let eval = evaluate("(?:ab)+", "abab").unwrap();
        assert!(!eval.has_capture_groups);
        assert!(eval.captures.is_empty());
    }

    #[test]
    fn invalid_pattern_reports_compiler_message() {
        let err = evaluate("[", "anything").unwrap_err();
        assert!(!err.message.is_empty());
        assert_eq!(err.to_string(), err.message);
    }

    #[test]
    fn capture_group_heuristic() {
        assert!(has_capture_groups("(a)"));
        assert!(has_capture_groups("(?:a)(b)"));
        assert!(!has_capture_groups("(?:a)"));
        assert!(!has_capture_groups(r"\(a\)"));
        assert!(!has_capture_groups("abc"));
        // named groups are counted too
        assert!(has_capture_groups("(?P<x>a)"));
    }
}
