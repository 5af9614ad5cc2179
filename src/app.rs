use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::cli::{Config, resolve_use_color};
use crate::input::load_content;
use crate::output::{RenderOptions, render};
use crate::session::Session;

pub fn run(cfg: Config) -> Result<i32> {
    let content = load_content(cfg.file.as_deref())?;
    info!(bytes = content.len(), patterns = cfg.patterns.len(), "content loaded");

    let opts = RenderOptions {
        use_color: resolve_use_color(&cfg.color),
        explain_only: cfg.explain_only,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&cfg.patterns, content, opts, &mut out)
}

/// Writes one report per pattern and returns the exit code:
/// 0 when something matched, 1 when nothing did, 2 on any invalid pattern.
pub fn report(
    patterns: &[String],
    content: String,
    opts: RenderOptions,
    out: &mut impl Write,
) -> Result<i32> {
    let mut session = Session::new(content);

    if patterns.is_empty() {
        out.write_all(render(session.snapshot(), opts).as_bytes())?;
        out.flush()?;
        return Ok(1);
    }

    let mut any_matched = false;
    let mut any_invalid = false;

    for (i, pattern) in patterns.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let snapshot = session.set_pattern(pattern.as_str());
        any_invalid |= snapshot.error.is_some();
        any_matched |= snapshot.match_count() > 0;
        out.write_all(render(snapshot, opts).as_bytes())?;
    }
    out.flush()?;

    Ok(if any_invalid {
        2
    } else if any_matched {
        0
    } else {
        1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: RenderOptions = RenderOptions {
        use_color: false,
        explain_only: true,
    };

    fn run_report(patterns: &[&str], content: &str) -> (i32, String) {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        let mut out = Vec::new();
        let code = report(&patterns, content.to_string(), PLAIN, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_codes() {
        assert_eq!(run_report(&["b"], "abc").0, 0);
        assert_eq!(run_report(&["z"], "abc").0, 1);
        assert_eq!(run_report(&["b", "("], "abc").0, 2);
        assert_eq!(run_report(&[], "abc").0, 1);
    }

    #[test]
    fn one_report_per_pattern() {
        let (_, text) = run_report(&["a", "c"], "abc");
        assert_eq!(text.matches("pattern explanation").count(), 2);
        assert!(text.contains("Total matches: 1\n\npattern explanation"));
    }
}
