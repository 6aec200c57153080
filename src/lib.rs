//! Best-effort article extraction from raw HTML.
//!
//! `pagegist` pulls a title, a publish date, and the body text out of an
//! arbitrary article page without any per-site schema. Body text comes from
//! the first semantic container (`<article>`, `.post`, `.entry-content`, ...)
//! whose text is long enough and does not look like leaked CSS or script; if
//! none qualifies, the longest acceptable block in the whole document is used.
//!
//! # Quick start
//!
//! ```rust
//! let html = "<html><head><title>Hello</title></head><body><p>Too short.</p></body></html>";
//! let article = pagegist::parse_article(html);
//! assert_eq!(article.title.as_deref(), Some("Hello"));
//! assert_eq!(article.content, None);
//! ```
//!
//! Every call parses its own tree and shares nothing, so calls can run on any
//! number of threads. Callers should bound input size; the fallback scan is
//! linear in document size per block container.

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use debug;
pub(crate) use trace;

mod article;
mod content;
mod document;
mod error;
mod fallback;
mod metadata;
mod normalize;
mod quality;

pub use article::ParsedArticle;
pub use error::ExtractError;
pub use normalize::normalize_text;
pub use quality::is_article_content;

use document::Document;

/// Thresholds for content acceptance.
///
/// Lengths are counted in characters of normalized text.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Body text must be strictly longer than this.
    pub min_content_chars: usize,
    /// Text whose `{`/`}` share of characters exceeds this is rejected.
    pub max_brace_ratio: f64,
    /// Text with more lines than this is rejected if any line ends like code.
    pub max_code_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_content_chars: 200,
            max_brace_ratio: 0.05,
            max_code_lines: 5,
        }
    }
}

impl Config {
    pub fn with_min_content_chars(mut self, n: usize) -> Self {
        self.min_content_chars = n;
        self
    }
    pub fn with_max_brace_ratio(mut self, v: f64) -> Self {
        self.max_brace_ratio = v;
        self
    }
    pub fn with_max_code_lines(mut self, n: usize) -> Self {
        self.max_code_lines = n;
        self
    }
}

/// Extract title, date, and body text using default thresholds.
pub fn parse_article(html: &str) -> ParsedArticle {
    parse_article_with(html, &Config::default())
}

/// Extract title, date, and body text.
///
/// Never fails: malformed markup is repaired by the HTML5 parser, and fields
/// that cannot be found are `None`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(html_len = html.len()))
)]
pub fn parse_article_with(html: &str, config: &Config) -> ParsedArticle {
    let doc = Document::parse(html);

    let title = metadata::resolve_title(&doc);
    let date = metadata::resolve_date(&doc);
    let content = content::extract_primary(&doc, config).or_else(|| {
        debug!("no container accepted, scanning all blocks");
        fallback::scan_blocks(&doc, config)
    });

    debug!(
        title = title.is_some(),
        date = date.is_some(),
        content_chars = content.as_ref().map(|c| c.chars().count()),
        "article parsed"
    );
    ParsedArticle::new(title, date, content)
}

/// Extract from raw bytes, which must be UTF-8.
///
/// Charset detection belongs to whoever fetched the page. Undecodable input is
/// the only error; an article with no content is still `Ok`.
///
/// # Example
///
/// ```rust
/// let err = pagegist::parse_article_bytes(&[0xff, 0xfe], &pagegist::Config::default());
/// assert!(matches!(err, Err(pagegist::ExtractError::InvalidUtf8(_))));
/// ```
pub fn parse_article_bytes(bytes: &[u8], config: &Config) -> Result<ParsedArticle, ExtractError> {
    let html = std::str::from_utf8(bytes)?;
    Ok(parse_article_with(html, config))
}
