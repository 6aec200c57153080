use std::sync::LazyLock;

use regex::Regex;

use crate::Config;

/// Tokens that only show up in stylesheets: shadow-DOM selectors and custom
/// property references.
const CSS_MARKERS: &[&str] = &[":host", "::slotted", "var(--"];

/// A line ending in a statement terminator, block brace, or a `label:` colon.
static CODE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)[{};:]\s*$").unwrap());

/// Returns `true` if `text` reads like article prose rather than CSS or script
/// source that leaked into the page as text.
///
/// Text is rejected if any of these hold:
/// - it contains a CSS-only marker (`:host`, `::slotted`, `var(--`);
/// - `{` and `}` make up more than `config.max_brace_ratio` of its characters;
/// - some line ends in `{`, `}`, `;` or `:` and the text spans more than
///   `config.max_code_lines` lines.
pub fn is_article_content(text: &str, config: &Config) -> bool {
    if CSS_MARKERS.iter().any(|m| text.contains(m)) {
        return false;
    }

    if brace_ratio(text) > config.max_brace_ratio {
        return false;
    }

    let lines = text.split('\n').count();
    if lines > config.max_code_lines && CODE_LINE_RE.is_match(text) {
        return false;
    }

    true
}

/// Fraction of characters that are curly braces. Returns 0.0 for empty text.
fn brace_ratio(text: &str) -> f64 {
    let (braces, total) = text.chars().fold((0usize, 0usize), |(b, t), ch| {
        (b + usize::from(ch == '{' || ch == '}'), t + 1)
    });
    if total == 0 {
        0.0
    } else {
        braces as f64 / total as f64
    }
}
