// Title and date resolution: ordered locators, first non-blank value wins.

use scraper::ElementRef;

use crate::document::{Document, ElementExt, Locator, Matcher, MetaKey};

/// Title locators in priority order.
const TITLE_LOCATORS: &[Locator] = &[
    Locator::within(Matcher::Tag("article"), Matcher::Tag("h1")),
    Locator::within(Matcher::ClassToken("post"), Matcher::Tag("h1")),
    Locator::within(Matcher::ClassToken("content"), Matcher::Tag("h1")),
    Locator::new(Matcher::Tag("h1")),
    Locator::new(Matcher::Tag("title")),
    Locator::new(Matcher::Meta {
        key: MetaKey::Property,
        value: "og:title",
    }),
];

/// Date locators in priority order.
const DATE_LOCATORS: &[Locator] = &[
    Locator::new(Matcher::TagWithAttr {
        tag: "time",
        attr: "datetime",
    }),
    Locator::new(Matcher::Tag("time")),
    Locator::new(Matcher::ClassToken("date")),
    Locator::new(Matcher::ClassToken("published")),
    Locator::new(Matcher::ClassToken("post-date")),
    Locator::new(Matcher::ClassContains("date")),
    Locator::new(Matcher::ClassContains("time")),
    Locator::new(Matcher::Meta {
        key: MetaKey::Property,
        value: "article:published_time",
    }),
    Locator::new(Matcher::Meta {
        key: MetaKey::Name,
        value: "date",
    }),
    Locator::new(Matcher::Meta {
        key: MetaKey::Name,
        value: "publish-date",
    }),
];

/// Resolve the page title.
///
/// Each locator contributes only its first match; if that match is blank the
/// next locator is tried.
pub fn resolve_title(doc: &Document) -> Option<String> {
    first_value(doc, TITLE_LOCATORS, title_value)
}

/// Resolve the publish date as the raw string found on the page.
pub fn resolve_date(doc: &Document) -> Option<String> {
    first_value(doc, DATE_LOCATORS, date_value)
}

fn first_value<F>(doc: &Document, locators: &[Locator], read: F) -> Option<String>
where
    F: Fn(&Locator, &ElementRef<'_>) -> Option<String>,
{
    locators.iter().find_map(|locator| {
        let el = doc.find_first(locator)?;
        let value = read(locator, &el)?;
        crate::trace!(?locator, value = %value, "resolved");
        Some(value)
    })
}

fn title_value(locator: &Locator, el: &ElementRef<'_>) -> Option<String> {
    if locator.target.is_meta() {
        el.non_blank_attr("content").map(|v| v.trim().to_string())
    } else {
        non_empty(el.trimmed_text())
    }
}

/// `datetime`, then `content`, then visible text. Values are trimmed but
/// otherwise returned as found.
fn date_value(_locator: &Locator, el: &ElementRef<'_>) -> Option<String> {
    el.non_blank_attr("datetime")
        .or_else(|| el.non_blank_attr("content"))
        .map(|v| v.trim().to_string())
        .or_else(|| non_empty(el.trimmed_text()))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
