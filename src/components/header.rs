//! Page header component

use maud::{Markup, PreEscaped, html};

use crate::theme::Header;

/// Renders the fixed header block for a theme's layout variant.
///
/// The logo variant produces a flex header with the inline SVG in a
/// `#logo-container` div next to the menu; the stylesheet hides the
/// container below the theme's breakpoint. The site-title variant centers
/// an `<h1>` carrying the escaped site title above the menu.
///
/// # Arguments
///
/// * `site_title`: Site title text for the heading variant
/// * `header`: Theme header layout variant
/// * `menu`: Pre-rendered navigation markup
///
/// # Returns
///
/// Header markup embedding the menu
pub fn header(site_title: &str, header: &Header, menu: Markup) -> Markup {
    match header {
        Header::Logo { svg } => html! {
            header {
                div id="logo-container" {
                    (PreEscaped(svg.as_ref()))
                }
                (menu)
            }
        },
        Header::SiteTitle => html! {
            header {
                h1 { (site_title) }
                (menu)
            }
        },
    }
}
