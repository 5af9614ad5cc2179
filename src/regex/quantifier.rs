use crate::regex::lexer::is_digit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBounds<'a> {
    Exactly(&'a str),          // {n}
    AtLeast(&'a str),          // {n,}
    Between(&'a str, &'a str), // {n,m}
}

/// A `{...}` construct that passed validation. `end` is exclusive and points
/// just past the closing brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuantifier<'a> {
    pub start: usize,
    pub end: usize,
    pub bounds: RangeBounds<'a>,
}

impl RangeQuantifier<'_> {
    pub fn explanation(&self) -> String {
        match self.bounds {
            RangeBounds::Exactly(n) => format!("match exactly {n} of the preceding token"),
            RangeBounds::AtLeast(n) => format!("match {n} or more of the preceding token"),
            RangeBounds::Between(n, m) => {
                format!("match between {n} and {m} of the preceding token")
            }
        }
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_digit)
}

/// Splits brace content following `digits (',' digits?)?`.
pub fn parse_bounds(content: &str) -> Option<RangeBounds<'_>> {
    match content.split_once(',') {
        None if is_numeric(content) => Some(RangeBounds::Exactly(content)),
        None => None,
        Some((n, "")) if is_numeric(n) => Some(RangeBounds::AtLeast(n)),
        Some((n, m)) if is_numeric(n) && is_numeric(m) => Some(RangeBounds::Between(n, m)),
        Some(_) => None,
    }
}

pub fn is_valid_range_content(content: &str) -> bool {
    parse_bounds(content).is_some()
}

/// Tries to read a range quantifier starting at the `{` at `open`.
///
/// Only the first `}` after `open` is considered: any later brace would put
/// that `}` inside the content, which can never be valid.
pub fn parse_range(pattern: &str, open: usize) -> Option<RangeQuantifier<'_>> {
    if pattern.as_bytes().get(open) != Some(&b'{') {
        return None;
    }
    let body_start = open + 1;
    let close = body_start + pattern[body_start..].find('}')?;
    let bounds = parse_bounds(&pattern[body_start..close])?;

    Some(RangeQuantifier {
        start: open,
        end: close + 1,
        bounds,
    })
}

/// Lookback for a `}` at `close`: true when the nearest `{` before it is
/// unescaped and the text between them is valid range content.
pub fn closes_range(pattern: &str, close: usize) -> bool {
    if pattern.as_bytes().get(close) != Some(&b'}') {
        return false;
    }
    let Some(open) = pattern[..close].rfind('{') else {
        return false;
    };
    if is_escaped(pattern, open) {
        return false;
    }
    is_valid_range_content(&pattern[open + 1..close])
}

// An odd run of backslashes right before `pos` escapes it.
fn is_escaped(pattern: &str, pos: usize) -> bool {
    let backslashes = pattern.as_bytes()[..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}
