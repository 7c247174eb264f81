//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for pageshell.
#[derive(Debug, Clone, Parser)]
#[command(name = "pageshell", version, about, long_about = None)]
pub struct Config {
    /// Body fragment file, or "-" for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Site title shown in the header and title bar
    #[arg(long)]
    pub site_title: String,

    /// Page title (defaults to the site title)
    #[arg(long)]
    pub page_title: Option<String>,

    /// Menu entry as LABEL=URL, repeatable, rendered in order
    #[arg(long = "menu", value_name = "LABEL=URL")]
    pub menu: Vec<String>,

    /// Theme name (midnight, classic)
    #[arg(long, default_value = "midnight")]
    pub theme: String,

    /// Viewport width in em below which the logo is hidden
    #[arg(long)]
    pub breakpoint: Option<u32>,

    /// Emit the body verbatim with no shell decoration
    #[arg(long)]
    pub raw: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the site title is empty or a menu entry is not in
    /// LABEL=URL form.
    pub fn validate(&self) -> Result<()> {
        if self.site_title.is_empty() {
            bail!("Site title must not be empty");
        }

        for entry in &self.menu {
            if !entry.contains('=') {
                bail!("Menu entry is not LABEL=URL: {}", entry);
            }
        }

        Ok(())
    }

    /// Splits menu entries into `(label, url)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns error if an entry has no `=` separator.
    pub fn menu_pairs(&self) -> Result<Vec<(String, String)>> {
        self.menu
            .iter()
            .map(|entry| {
                entry
                    .split_once('=')
                    .map(|(label, url)| (label.to_string(), url.to_string()))
                    .with_context(|| format!("Menu entry is not LABEL=URL: {}", entry))
            })
            .collect()
    }
}
