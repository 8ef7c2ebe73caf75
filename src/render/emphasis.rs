//! Inline `*emphasis*` markup used by the generated explanation text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest `*...*` span on a single line.
static EMPHASIS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*.*?\*").expect("Invalid emphasis regex pattern"));

/// A piece of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Plain(String),
    /// Inner text of a `*...*` span, markers removed
    Emphasis(String),
}

impl Run {
    pub fn text(&self) -> &str {
        match self {
            Run::Plain(text) | Run::Emphasis(text) => text,
        }
    }

    pub fn is_emphasis(&self) -> bool {
        matches!(self, Run::Emphasis(_))
    }
}

/// Tokenize one line.
///
/// Empty (`**`) and unbalanced markers stay literal. Adjacent plain text is
/// merged and empty plain runs are dropped.
pub fn parse_emphasis(line: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut last = 0;

    for m in EMPHASIS_REGEX.find_iter(line) {
        plain.push_str(&line[last..m.start()]);
        let marked = m.as_str();
        let inner = &marked[1..marked.len() - 1];
        if inner.is_empty() {
            plain.push_str(marked);
        } else {
            if !plain.is_empty() {
                runs.push(Run::Plain(std::mem::take(&mut plain)));
            }
            runs.push(Run::Emphasis(inner.to_string()));
        }
        last = m.end();
    }

    plain.push_str(&line[last..]);
    if !plain.is_empty() {
        runs.push(Run::Plain(plain));
    }
    runs
}

/// Split `text` into lines (dropping a trailing `\r`) and tokenize each.
///
/// Blank lines are kept as empty run lists so paragraph breaks survive.
pub fn render_explanation(text: &str) -> Vec<Vec<Run>> {
    text.split('\n')
        .map(|line| parse_emphasis(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}
