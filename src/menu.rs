//! Navigation menu model.

use std::fmt;

/// Single navigation entry rendered as a menu link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub url: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Ordered navigation menu, either fixed up front or produced lazily.
///
/// Insertion order is preserved and determines render order. The deferred
/// form wraps a producer that is only evaluated at render time, so entries
/// that depend on late state (a log-in vs log-out link, say) can be decided
/// after the page body has already been written.
pub enum Menu {
    Fixed(Vec<MenuItem>),
    Deferred(Box<dyn FnOnce() -> Vec<MenuItem>>),
}

impl Menu {
    /// Builds a fixed menu from `(label, url)` pairs, keeping their order.
    pub fn fixed<L, U>(pairs: impl IntoIterator<Item = (L, U)>) -> Self
    where
        L: Into<String>,
        U: Into<String>,
    {
        Self::Fixed(
            pairs
                .into_iter()
                .map(|(label, url)| MenuItem::new(label, url))
                .collect(),
        )
    }

    /// Builds a menu whose items are produced when the page renders.
    pub fn deferred(producer: impl FnOnce() -> Vec<MenuItem> + 'static) -> Self {
        Self::Deferred(Box::new(producer))
    }

    /// Resolves the menu into its final item list.
    ///
    /// A deferred producer runs here; if it panics, the panic propagates to
    /// the render pass.
    pub fn resolve(self) -> Vec<MenuItem> {
        match self {
            Self::Fixed(items) => items,
            Self::Deferred(producer) => producer(),
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::Fixed(Vec::new())
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(items) => f.debug_tuple("Fixed").field(items).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
