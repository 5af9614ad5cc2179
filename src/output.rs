use std::fmt::Write;

use crate::regex::TokenKind;
use crate::session::Snapshot;

const COLOR_RESET: &str = "\x1b[m";
const MATCH_COLOR: &str = "\x1b[01;31m";
const ERROR_COLOR: &str = "\x1b[31m";

pub const PLACEHOLDER: &str = "Enter a pattern to see explanation";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub use_color: bool,
    pub explain_only: bool,
}

fn kind_color(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Literal => "\x1b[90m",
        TokenKind::Escape => "\x1b[32m",
        TokenKind::MetaChar | TokenKind::Alternation => "\x1b[95m",
        TokenKind::GroupOpen | TokenKind::GroupOpenNonCapturing | TokenKind::GroupClose => {
            "\x1b[96m"
        }
        TokenKind::Quantifier | TokenKind::QuantifierRange => "\x1b[38;5;208m",
    }
}

pub fn maybe_colorize(s: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{color}{s}{COLOR_RESET}")
    } else {
        s.to_string()
    }
}

/// Renders the explanation, content, and capture panes for one snapshot.
pub fn render(snapshot: &Snapshot, opts: RenderOptions) -> String {
    let mut out = String::new();

    out.push_str("pattern explanation\n");
    if let Some(err) = &snapshot.error {
        let line = format!("Invalid regex: {err}");
        let _ = writeln!(out, "{}", maybe_colorize(&line, ERROR_COLOR, opts.use_color));
    } else if snapshot.tokens.is_empty() {
        let _ = writeln!(out, "{PLACEHOLDER}");
    } else {
        render_tokens(&mut out, snapshot, opts.use_color);
    }

    if !opts.explain_only {
        out.push_str("\ncontent\n");
        for run in &snapshot.runs {
            if run.highlighted {
                out.push_str(&maybe_colorize(&run.text, MATCH_COLOR, opts.use_color));
            } else {
                out.push_str(&run.text);
            }
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    if snapshot.shows_captures() {
        out.push_str("\ncapture\n");
        for (group, values) in &snapshot.captures {
            let _ = writeln!(out, "Group {group}:");
            for value in values {
                let _ = writeln!(out, "\t{value}");
            }
        }
    }

    if snapshot.error.is_none() && !snapshot.tokens.is_empty() {
        let _ = writeln!(out, "\nTotal matches: {}", snapshot.match_count());
    }
    out
}

fn render_tokens(out: &mut String, snapshot: &Snapshot, use_color: bool) {
    for token in &snapshot.tokens {
        let indent = "  ".repeat(token.nesting_depth);
        let text = maybe_colorize(&token.text, kind_color(token.kind), use_color);
        let _ = writeln!(out, "{indent}{text}: {}", token.explanation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::compute;
    use pretty_assertions::assert_eq;

    const PLAIN: RenderOptions = RenderOptions {
        use_color: false,
        explain_only: false,
    };

    #[test]
    fn renders_all_panes() {
        let snap = compute("(a)b", "ab cb ab");
        assert_eq!(
            render(&snap, PLAIN),
            "pattern explanation\n\
             (: start capturing group\n\
             \x20\x20a: match this character literally\n\
             ): end group\n\
             b: match this character literally\n\
             \n\
             content\n\
             ab cb ab\n\
             \n\
             capture\n\
             Group 1:\n\
             \ta\n\
             \n\
             Total matches: 2\n"
        );
    }

    #[test]
    fn invalid_pattern_replaces_explanation() {
        let snap = compute("[", "abc");
        let text = render(&snap, PLAIN);
        assert!(text.starts_with("pattern explanation\nInvalid regex: "));
        assert!(text.contains("\ncontent\nabc\n"));
        assert!(!text.contains("capture"));
        assert!(!text.contains("Total matches"));
    }

    #[test]
    fn empty_pattern_shows_placeholder() {
        let snap = compute("", "abc");
        let text = render(
            &snap,
            RenderOptions {
                use_color: false,
                explain_only: true,
            },
        );
        assert_eq!(text, format!("pattern explanation\n{PLACEHOLDER}\n"));
    }

    #[test]
    fn colours_matches_when_asked() {
        let snap = compute("b", "abc");
        let text = render(
            &snap,
            RenderOptions {
                use_color: true,
                explain_only: false,
            },
        );
        assert!(text.contains("a\x1b[01;31mb\x1b[mc"));
    }
}
