//! Navigation menu component

use maud::{Markup, html};

use crate::MenuItem;

/// Renders the navigation list for the page header.
///
/// Items appear in input order. Labels and URLs are HTML-escaped
/// independently by Maud, so `A&B` becomes `A&amp;B` in the link text and
/// quotes in a URL cannot break out of the attribute. An empty item list
/// renders an empty `<ul>`, not an error.
pub fn menu(items: &[MenuItem]) -> Markup {
    html! {
        nav {
            ul {
                @for item in items {
                    li {
                        a href=(item.url) { (item.label) }
                    }
                }
            }
        }
    }
}
