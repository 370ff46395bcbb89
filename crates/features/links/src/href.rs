use std::fmt;
use std::sync::Arc;

/// A normalized, site-relative link target such as `docs/intro.html#setup`.
///
/// No leading slash, `/`-separated, no `.`/`..`/empty segments, percent-decoded. The empty
/// href is the site root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Href(Arc<str>);

impl Href {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The document part of the href, dropping `#fragment`.
    #[must_use]
    pub fn without_anchor(&self) -> Self {
        match self.0.split_once('#') {
            Some((document, _)) => Self::new(document),
            None => self.clone(),
        }
    }

    /// Appends `#anchor` to the document part of this href.
    #[must_use]
    pub fn with_anchor(&self, anchor: &str) -> Self {
        let document = self.without_anchor();
        Self::new(format!("{}#{anchor}", document.as_str()))
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Href {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Href {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
