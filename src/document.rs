use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Which attribute of a `<meta>` element carries its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MetaKey {
    Name,
    Property,
}

impl MetaKey {
    fn attr(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

/// A single-element predicate. Closed set; there is no selector language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    /// Element name, e.g. `h1`.
    Tag(&'static str),
    /// Whole class token, e.g. `.post`.
    ClassToken(&'static str),
    /// Case-insensitive substring of the raw class attribute, e.g. `[class*=date]`.
    ClassContains(&'static str),
    /// Element name plus attribute presence, e.g. `time[datetime]`.
    TagWithAttr { tag: &'static str, attr: &'static str },
    /// Exact attribute value, e.g. `[role=article]`.
    AttrEquals { attr: &'static str, value: &'static str },
    /// `<meta name=..>` or `<meta property=..>` with the given key.
    Meta { key: MetaKey, value: &'static str },
}

impl Matcher {
    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let element = el.value();
        match *self {
            Matcher::Tag(tag) => element.name().eq_ignore_ascii_case(tag),
            Matcher::ClassToken(token) => element.classes().any(|c| c == token),
            Matcher::ClassContains(needle) => element
                .attr("class")
                .is_some_and(|class| class.to_ascii_lowercase().contains(needle)),
            Matcher::TagWithAttr { tag, attr } => {
                element.name().eq_ignore_ascii_case(tag) && element.attr(attr).is_some()
            }
            Matcher::AttrEquals { attr, value } => element.attr(attr) == Some(value),
            Matcher::Meta { key, value } => {
                element.name() == "meta" && element.attr(key.attr()) == Some(value)
            }
        }
    }

    /// Meta locators read the `content` attribute instead of visible text.
    pub fn is_meta(&self) -> bool {
        matches!(self, Matcher::Meta { .. })
    }
}

/// A target matcher, optionally required to sit inside an element matching
/// `within` (the descendant combinator, e.g. `article h1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Locator {
    pub within: Option<Matcher>,
    pub target: Matcher,
}

impl Locator {
    pub const fn new(target: Matcher) -> Self {
        Self {
            within: None,
            target,
        }
    }

    pub const fn within(scope: Matcher, target: Matcher) -> Self {
        Self {
            within: Some(scope),
            target,
        }
    }

    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        if !self.target.matches(el) {
            return false;
        }
        match self.within {
            None => true,
            Some(scope) => el
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|ancestor| scope.matches(&ancestor)),
        }
    }
}

/// Parsed HTML for a single extraction call.
///
/// Read-only after construction. Parsing is html5ever's error-recovering
/// algorithm, so any input string yields a tree.
pub(crate) struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Every element in document (pre-)order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    /// First element in document order matched by `locator`.
    pub fn find_first(&self, locator: &Locator) -> Option<ElementRef<'_>> {
        self.elements().find(|el| locator.matches(el))
    }
}

/// Read helpers on top of `scraper::ElementRef`.
pub(crate) trait ElementExt {
    /// Attribute value, or `None` if missing or blank.
    fn non_blank_attr(&self, name: &str) -> Option<&str>;

    /// All descendant text, trimmed.
    fn trimmed_text(&self) -> String;

    /// Descendant text concatenated in document order, leaving out the whole
    /// subtree of any descendant element for which `skip` returns `true`.
    /// The element itself is never tested against `skip`.
    fn text_without<F>(&self, skip: F) -> String
    where
        F: Fn(&ElementRef<'_>) -> bool;
}

impl ElementExt for ElementRef<'_> {
    fn non_blank_attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name).filter(|v| !v.trim().is_empty())
    }

    fn trimmed_text(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn text_without<F>(&self, skip: F) -> String
    where
        F: Fn(&ElementRef<'_>) -> bool,
    {
        let mut out = String::new();
        collect_text(**self, &skip, &mut out);
        out
    }
}

/// Iterative pre-order walk; an explicit stack keeps arbitrarily deep markup
/// off the call stack.
fn collect_text<F>(root: NodeRef<'_, Node>, skip: &F, out: &mut String)
where
    F: Fn(&ElementRef<'_>) -> bool,
{
    let mut stack: Vec<NodeRef<'_, Node>> = root.children().rev().collect();
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(node) {
                    if !skip(&el) {
                        stack.extend(node.children().rev());
                    }
                }
            }
            // Comments, doctypes, processing instructions carry no visible text
            _ => {}
        }
    }
}
