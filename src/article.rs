/// Best-effort fields extracted from one article page.
///
/// Each field is `None` when nothing acceptable was found; a present field is
/// never blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct ParsedArticle {
    /// Page title, trimmed.
    pub title: Option<String>,
    /// Publish date exactly as the page states it (trimmed, never parsed).
    pub date: Option<String>,
    /// Normalized body text.
    pub content: Option<String>,
}

impl ParsedArticle {
    pub(crate) fn new(title: Option<String>, date: Option<String>, content: Option<String>) -> Self {
        Self {
            title,
            date,
            content,
        }
    }

    /// Returns `true` if body text was extracted.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Returns `true` if no field was found at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.content.is_none()
    }
}
