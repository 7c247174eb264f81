//! Full document wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Data container for document assembly.
///
/// Everything arrives pre-resolved: the stylesheet is the theme CSS
/// already concatenated with any appended rules, the header is rendered
/// markup, and the body is the sealed capture buffer.
pub struct Document<'a> {
    pub page_title: &'a str,
    pub css: &'a str,
    pub favicon_href: &'a str,
    pub head_extra: &'a str,
    pub header: Markup,
    pub body: &'a str,
}

/// Wraps captured body content in the complete HTML document.
///
/// Emits doctype, `<head>` with viewport meta, escaped title, inline
/// stylesheet, favicon link, and raw extra head content, then `<body>`
/// with the header block followed by the captured body. The body and
/// `head_extra` are caller-produced markup and embedded unescaped; the
/// title is escaped.
///
/// # Arguments
///
/// * `doc`: Document data container with all required fields
///
/// # Returns
///
/// Complete HTML document markup
pub fn document(doc: Document<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (doc.page_title) }
                style { (PreEscaped(doc.css)) }
                link rel="icon" href=(doc.favicon_href);
                (PreEscaped(doc.head_extra))
            }
            body {
                (doc.header)
                (PreEscaped(doc.body))
            }
        }
    }
}
