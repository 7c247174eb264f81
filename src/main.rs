use anyhow::{Context, Result};
use pageshell::{Config, Menu, PageShell, Theme};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the body fragment from the configured input.
///
/// # Arguments
///
/// * `input`: Fragment file path, "-" for stdin
///
/// # Returns
///
/// Body fragment as a string
///
/// # Errors
///
/// Returns error if the input cannot be read or is not UTF-8.
fn read_body(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read body from stdin")?;
        Ok(body)
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read body fragment: {}", input.display()))
    }
}

/// Builds the theme from configuration, applying overrides.
fn build_theme(config: &Config) -> Result<Theme> {
    let mut theme = Theme::by_name(&config.theme).context("Invalid theme")?;
    if let Some(em) = config.breakpoint {
        theme = theme.with_logo_breakpoint_em(em);
    }
    Ok(theme)
}

/// Wraps the body fragment in the shell, writing the document to `sink`.
fn run(config: &Config, body: &str, sink: impl Write) -> Result<()> {
    let menu = Menu::fixed(config.menu_pairs()?);
    let theme = build_theme(config)?;

    let mut shell = PageShell::begin(sink, config.site_title.clone(), menu, theme)
        .context("Failed to begin page shell")?;
    if let Some(title) = &config.page_title {
        shell = shell.with_page_title(title);
    }

    shell
        .write_all(body.as_bytes())
        .context("Failed to capture body fragment")?;

    if config.raw {
        shell.abort().context("Failed to emit raw body")?;
    }

    shell.finish().context("Failed to render page")
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let body = read_body(&config.input)?;

    match &config.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            run(&config, &body, io::BufWriter::new(file))?;
            println!("Generated: {}", path.display());
        }
        None => {
            run(&config, &body, io::stdout().lock())?;
        }
    }

    Ok(())
}
