//! Visual themes for the page shell.
//!
//! A theme bundles the stylesheet, header layout, and favicon that the
//! shell wraps around captured content. The built-in themes embed their
//! assets at compile time; custom assets can be loaded from disk.

use anyhow::{Context, Result, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::borrow::Cow;
use std::path::Path;

const MIDNIGHT_CSS: &str = include_str!("../assets/midnight.css");
const CLASSIC_CSS: &str = include_str!("../assets/classic.css");
const LOGO_SVG: &str = include_str!("../assets/logo.svg");
const FAVICON_SVG: &str = include_str!("../assets/favicon.svg");

/// Default viewport width below which the midnight logo is hidden.
const DEFAULT_LOGO_BREAKPOINT_EM: u32 = 50;

/// Header layout variant.
#[derive(Debug, Clone)]
pub enum Header {
    /// Flex header with an inline SVG logo next to the menu.
    Logo { svg: Cow<'static, str> },
    /// Centered heading carrying the site title above the menu.
    SiteTitle,
}

/// Theme value object consumed by the render pass.
///
/// Collapses the per-theme presentation differences (palette, header
/// layout, responsive breakpoint) into data so a single renderer serves
/// every variant.
#[derive(Debug, Clone)]
pub struct Theme {
    name: Cow<'static, str>,
    css: Cow<'static, str>,
    header: Header,
    logo_breakpoint_em: u32,
    favicon_svg: Cow<'static, str>,
}

impl Theme {
    /// Dark teal theme with an inline logo header.
    pub fn midnight() -> Self {
        Self {
            name: Cow::Borrowed("midnight"),
            css: Cow::Borrowed(MIDNIGHT_CSS),
            header: Header::Logo {
                svg: Cow::Borrowed(LOGO_SVG),
            },
            logo_breakpoint_em: DEFAULT_LOGO_BREAKPOINT_EM,
            favicon_svg: Cow::Borrowed(FAVICON_SVG),
        }
    }

    /// Blue theme with a large centered site-title header.
    pub fn classic() -> Self {
        Self {
            name: Cow::Borrowed("classic"),
            css: Cow::Borrowed(CLASSIC_CSS),
            header: Header::SiteTitle,
            logo_breakpoint_em: DEFAULT_LOGO_BREAKPOINT_EM,
            favicon_svg: Cow::Borrowed(FAVICON_SVG),
        }
    }

    /// Looks up a built-in theme by name.
    ///
    /// # Errors
    ///
    /// Returns error if the name matches no built-in theme.
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "midnight" => Ok(Self::midnight()),
            "classic" => Ok(Self::classic()),
            other => bail!("Unknown theme: {}", other),
        }
    }

    /// Overrides the logo breakpoint in em units.
    #[must_use]
    pub fn with_logo_breakpoint_em(mut self, em: u32) -> Self {
        self.logo_breakpoint_em = em;
        self
    }

    /// Replaces the stylesheet with the contents of a CSS file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn with_css_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let css = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet: {}", path.display()))?;
        self.css = Cow::Owned(css);
        Ok(self)
    }

    /// Replaces the header logo with an SVG file, switching the header
    /// layout to the logo variant if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn with_logo_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let svg = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read logo: {}", path.display()))?;
        self.header = Header::Logo {
            svg: Cow::Owned(svg),
        };
        Ok(self)
    }

    /// Replaces the favicon with an SVG file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn with_favicon_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let svg = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read favicon: {}", path.display()))?;
        self.favicon_svg = Cow::Owned(svg);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Responsive rule hiding the logo container on narrow viewports.
    ///
    /// Only the logo header variant carries one; the site-title header has
    /// nothing to collapse.
    pub fn media_css(&self) -> Option<String> {
        match self.header {
            Header::Logo { .. } => Some(format!(
                "@media(max-width: {}em) {{\n    #logo-container {{\n        display: none;\n    }}\n}}\n",
                self.logo_breakpoint_em
            )),
            Header::SiteTitle => None,
        }
    }

    /// Favicon as a `data:` URI suitable for a `<link rel="icon">` href.
    pub fn favicon_data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.favicon_svg.as_bytes())
        )
    }
}
