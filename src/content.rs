// Primary content extraction: semantic containers tried in priority order.

use scraper::ElementRef;

use crate::document::{Document, ElementExt, Locator, Matcher};
use crate::normalize::normalize_text;
use crate::quality::is_article_content;
use crate::Config;

/// Article containers in priority order.
const CONTENT_LOCATORS: &[Locator] = &[
    Locator::new(Matcher::Tag("article")),
    Locator::new(Matcher::ClassToken("post")),
    Locator::new(Matcher::ClassToken("content")),
    Locator::new(Matcher::ClassToken("article-content")),
    Locator::new(Matcher::ClassToken("entry-content")),
    Locator::new(Matcher::AttrEquals {
        attr: "role",
        value: "article",
    }),
    Locator::within(Matcher::Tag("main"), Matcher::Tag("article")),
    Locator::new(Matcher::ClassToken("post-content")),
    Locator::new(Matcher::ClassToken("article-body")),
    Locator::new(Matcher::ClassToken("post-body")),
];

/// Descendant tags whose text never belongs to the article body.
const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "code", "pre",
    // raw-text or inert containers: their markup would leak in as text
    "noscript", "template",
];

/// Class tokens for ad slots and highlighted code.
const EXCLUDED_CLASS_TOKENS: &[&str] = &["ad", "ads", "code", "highlight"];

/// Lowercase substrings of a class attribute that mark code or style blocks.
const EXCLUDED_CLASS_SUBSTRINGS: &[&str] = &["code", "syntax", "css", "style", "script"];

/// Returns `true` for descendants whose whole subtree is left out of body text.
pub(crate) fn is_technical(el: &ElementRef<'_>) -> bool {
    let element = el.value();
    if EXCLUDED_TAGS.contains(&element.name()) {
        return true;
    }
    if element
        .classes()
        .any(|c| EXCLUDED_CLASS_TOKENS.contains(&c))
    {
        return true;
    }
    element.attr("class").is_some_and(|class| {
        let class = class.to_ascii_lowercase();
        EXCLUDED_CLASS_SUBSTRINGS.iter().any(|s| class.contains(s))
    })
}

/// Normalized text of `el` with technical descendants removed, if it is long
/// enough and passes the quality filter.
pub(crate) fn accepted_text(el: &ElementRef<'_>, config: &Config) -> Option<String> {
    let text = normalize_text(&el.text_without(is_technical));
    let length = text.chars().count();
    if length <= config.min_content_chars {
        crate::trace!(length, "candidate too short");
        return None;
    }
    if !is_article_content(&text, config) {
        crate::trace!(length, "candidate rejected by quality filter");
        return None;
    }
    Some(text)
}

/// Body text from the first semantic container that yields acceptable text.
///
/// Each locator contributes only its first match in document order. Returns
/// `None` when every locator is exhausted; the caller then runs the fallback
/// scan.
pub fn extract_primary(doc: &Document, config: &Config) -> Option<String> {
    CONTENT_LOCATORS.iter().find_map(|locator| {
        let el = doc.find_first(locator)?;
        let text = accepted_text(&el, config)?;
        crate::debug!(?locator, length = text.chars().count(), "primary content accepted");
        Some(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "The harbour town has changed slowly over the last century. Fishing boats \
                         still leave before dawn, but most of the old warehouses now hold small \
                         galleries, bakeries and a bookshop that stays open late on Fridays.";

    fn primary(html: &str) -> Option<String> {
        extract_primary(&Document::parse(html), &Config::default())
    }

    #[test]
    fn test_prose_is_long_enough() {
        assert!(PROSE.chars().count() > 200);
    }

    #[test]
    fn test_article_strips_script() {
        let html = format!("<article><p>{PROSE}</p><script>var x = 1;</script></article>");
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_strips_chrome_and_code() {
        let html = format!(
            "<article>\
             <header>Header text</header><nav>Home | News</nav>\
             <p>{PROSE}</p>\
             <pre>fn main() {{}}</pre><code>let y = 2;</code>\
             <div class=\"ad\">Buy now</div><div class=\"Syntax-Block\">tokens</div>\
             <aside>Related</aside><footer>Footer text</footer>\
             </article>"
        );
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_class_substring_exclusion() {
        let html = format!(
            "<article><p>{PROSE}</p>\
             <span class=\"inline-css-rules\">hidden</span>\
             <span class=\"noscript-warning\">hidden</span>\
             <span class=\"typeStyle\">hidden</span></article>"
        );
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_short_article_moves_to_next_locator() {
        let html = format!(
            "<article><p>Too short.</p></article>\
             <div class=\"entry-content\"><p>{PROSE}</p></div>"
        );
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_only_first_match_per_locator() {
        // The second <article> is never consulted by the `article` locator.
        let html = format!("<article><p>Too short.</p></article><article><p>{PROSE}</p></article>");
        assert_eq!(primary(&html), None);
    }

    #[test]
    fn test_main_article_locator() {
        // `article` picks the first (short) one; `main article` finds the other.
        let html = format!(
            "<article>Too short.</article><main><article><p>{PROSE}</p></article></main>"
        );
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_role_article() {
        let html = format!("<section role=\"article\"><p>{PROSE}</p></section>");
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_css_text_rejected() {
        let css = ":host { display: block; } ".repeat(12);
        let html = format!("<article><p>{css}</p></article>");
        assert_eq!(primary(&html), None);
    }

    #[test]
    fn test_no_container() {
        let html = format!("<div><p>{PROSE}</p></div>");
        assert_eq!(primary(&html), None);
    }

    #[test]
    fn test_exactly_min_length_rejected() {
        let text = "a".repeat(200);
        let html = format!("<article>{text}</article>");
        assert_eq!(primary(&html), None);
        let html = format!("<article>{text}b</article>");
        assert!(primary(&html).is_some());
    }

    #[test]
    fn test_configurable_min_length() {
        let config = Config::default().with_min_content_chars(5);
        let doc = Document::parse("<article><p>Short but fine.</p></article>");
        assert_eq!(
            extract_primary(&doc, &config).as_deref(),
            Some("Short but fine.")
        );
    }

    #[test]
    fn test_noscript_and_template_excluded() {
        let html = format!(
            "<article><noscript><img src=\"pixel.gif\">Enable JavaScript</noscript>\
             <p>{PROSE}</p><template><p>Card placeholder</p></template></article>"
        );
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_deeply_nested_container() {
        let depth = 20_000;
        let html = format!(
            "<article>{}{PROSE}<script>var x = 1;</script>{}</article>",
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );
        assert_eq!(primary(&html).as_deref(), Some(PROSE));
    }

    #[test]
    fn test_is_technical() {
        let doc = Document::parse(
            r#"<div><p class="lead">a</p><p class="ads top">b</p><p class="HighlightJS">c</p></div>"#,
        );
        let flags: Vec<bool> = doc
            .elements()
            .filter(|el| el.value().name() == "p")
            .map(|el| is_technical(&el))
            .collect();
        // `HighlightJS` is not a whole `highlight` token and contains no excluded substring
        assert_eq!(flags, vec![false, true, false]);
    }
}
