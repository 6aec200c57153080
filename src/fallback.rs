// Fallback block scan: longest acceptable block anywhere in the document.

use scraper::ElementRef;

use crate::content::accepted_text;
use crate::document::Document;
use crate::Config;

/// Block-level containers considered by the scan.
const BLOCK_TAGS: &[&str] = &["div", "section", "main", "article"];

/// Lowercase substrings of a block's own class that disqualify it outright.
const SKIP_CLASS_SUBSTRINGS: &[&str] = &["code", "syntax", "highlight", "css", "style", "script"];

fn is_block(el: &ElementRef<'_>) -> bool {
    BLOCK_TAGS.contains(&el.value().name())
}

fn has_code_class(el: &ElementRef<'_>) -> bool {
    el.value().attr("class").is_some_and(|class| {
        let class = class.to_ascii_lowercase();
        SKIP_CLASS_SUBSTRINGS.iter().any(|s| class.contains(s))
    })
}

/// Scan every block container in document order and return the longest
/// acceptable text.
///
/// Score is the normalized character count. A candidate only replaces the
/// current best on a strictly greater score, so among equal lengths the
/// earliest block wins.
pub fn scan_blocks(doc: &Document, config: &Config) -> Option<String> {
    let mut best: Option<(usize, String)> = None;

    for el in doc.elements().filter(is_block) {
        if has_code_class(&el) {
            continue;
        }
        let Some(text) = accepted_text(&el, config) else {
            continue;
        };
        let score = text.chars().count();
        if best.as_ref().is_none_or(|(max, _)| score > *max) {
            crate::trace!(tag = el.value().name(), score, "new best block");
            best = Some((score, text));
        }
    }

    crate::debug!(score = best.as_ref().map(|(score, _)| *score), "fallback scan finished");
    best.map(|(_, text)| text)
}
