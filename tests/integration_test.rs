//! Integration tests for pageshell.
//!
//! Exercises the full capture, hook, and render lifecycle through the
//! public API, including file sinks and theme variants.

use anyhow::Result;
use pageshell::{Menu, MenuItem, PageShell, Theme};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

/// Tests the plain wrap path: construct, write body, finish.
#[test]
fn test_wrap_body_in_full_shell() -> Result<()> {
    // Arrange
    let mut out = Vec::new();
    let mut shell = PageShell::begin(&mut out, "Example", Menu::default(), Theme::midnight())?;

    // Act
    write!(shell, "<p>Hi</p>")?;
    shell.finish()?;

    // Assert
    let html = String::from_utf8(out)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<title>").count(), 1, "Exactly one title");
    assert!(html.contains("<title>Example</title>"));
    assert!(html.contains("<p>Hi</p>"));
    assert!(html.ends_with("</html>"));
    Ok(())
}

/// Tests that abort emits exactly the body with no shell wrapper.
#[test]
fn test_abort_emits_body_verbatim() -> Result<()> {
    // Arrange
    let mut out = Vec::new();
    let mut shell = PageShell::begin(&mut out, "Example", Menu::default(), Theme::midnight())?;
    write!(shell, "<p>Hi</p>")?;

    // Act
    shell.abort()?;
    shell.finish()?;

    // Assert
    assert_eq!(out, b"<p>Hi</p>");
    Ok(())
}

/// Tests menu escaping for labels containing markup-significant characters.
#[test]
fn test_menu_label_escaping() -> Result<()> {
    // Arrange
    let menu = Menu::fixed([("Home", "/"), ("A&B", "/ab")]);
    let mut out = Vec::new();
    let shell = PageShell::begin(&mut out, "Example", menu, Theme::midnight())?;

    // Act
    shell.finish()?;

    // Assert
    let html = String::from_utf8(out)?;
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("A&amp;B"), "Second entry should be escaped");
    assert!(
        !html.contains(">A&B<"),
        "No raw ampersand outside escaped form"
    );
    Ok(())
}

/// Tests that the menu count matches the input and order is preserved.
#[test]
fn test_menu_count_and_order() -> Result<()> {
    // Arrange
    let menu = Menu::fixed([("One", "/1"), ("Two", "/2"), ("Three", "/3")]);
    let mut out = Vec::new();
    let shell = PageShell::begin(&mut out, "Example", menu, Theme::classic())?;

    // Act
    shell.finish()?;

    // Assert
    let html = String::from_utf8(out)?;
    assert_eq!(html.matches("<li>").count(), 3);
    let one = html.find(">One<").expect("One should render");
    let two = html.find(">Two<").expect("Two should render");
    let three = html.find(">Three<").expect("Three should render");
    assert!(one < two && two < three, "Order should follow insertion");
    Ok(())
}

/// Tests a deferred menu deciding a login link at render time.
#[test]
fn test_deferred_menu_login_link() -> Result<()> {
    // Arrange
    let logged_in = true;
    let menu = Menu::deferred(move || {
        let mut items = vec![MenuItem::new("Home", "/")];
        if logged_in {
            items.push(MenuItem::new("Log out", "/logout"));
        } else {
            items.push(MenuItem::new("Log in", "/login"));
        }
        items
    });
    let mut out = Vec::new();
    let shell = PageShell::begin(&mut out, "Example", menu, Theme::midnight())?;

    // Act
    shell.finish()?;

    // Assert
    let html = String::from_utf8(out)?;
    assert!(html.contains("Log out"));
    assert!(!html.contains("Log in<"));
    Ok(())
}

/// Tests hooks adjusting head and style content before the render pass.
#[test]
fn test_hooks_feed_accumulators() -> Result<()> {
    // Arrange
    let mut out = Vec::new();
    let mut shell = PageShell::begin(&mut out, "Example", Menu::default(), Theme::classic())?;
    write!(shell, "<p>body</p>")?;
    shell.register_hook(|s| {
        s.echo_head("<meta name=\"generator\" content=\"pageshell\">");
        s.echo_css("footer { display: none; }");
    });

    // Act
    shell.finish()?;

    // Assert
    let html = String::from_utf8(out)?;
    assert!(html.contains("<meta name=\"generator\" content=\"pageshell\">"));
    assert!(html.contains("footer { display: none; }"));
    assert!(html.contains("<p>body</p>"));
    Ok(())
}

/// Tests both theme variants produce their distinctive header layout.
#[test]
fn test_theme_header_variants() -> Result<()> {
    // Arrange & Act
    let mut midnight = Vec::new();
    PageShell::begin(&mut midnight, "Example", Menu::default(), Theme::midnight())?.finish()?;
    let mut classic = Vec::new();
    PageShell::begin(&mut classic, "Example", Menu::default(), Theme::classic())?.finish()?;

    // Assert
    let midnight = String::from_utf8(midnight)?;
    assert!(midnight.contains("id=\"logo-container\""));
    assert!(midnight.contains("@media(max-width: 50em)"));
    assert!(midnight.contains("data:image/svg+xml;base64,"));

    let classic = String::from_utf8(classic)?;
    assert!(classic.contains("<h1>Example</h1>"));
    assert!(!classic.contains("logo-container"));
    Ok(())
}

/// Tests rendering into a file sink on disk.
#[test]
fn test_render_to_file_sink() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let path = dir.path().join("page.html");
    let file = fs::File::create(&path)?;
    let mut shell = PageShell::begin(file, "Example", Menu::fixed([("Home", "/")]), Theme::midnight())?;

    // Act
    write!(shell, "<p>on disk</p>")?;
    shell.finish()?;

    // Assert
    let html = fs::read_to_string(&path)?;
    assert!(html.contains("<title>Example</title>"));
    assert!(html.contains("<p>on disk</p>"));
    Ok(())
}

/// Tests custom theme assets loaded from files, and the read-failure path.
#[test]
fn test_theme_assets_from_files() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let css_path = dir.path().join("custom.css");
    fs::write(&css_path, "body { background: black; }")?;
    let theme = Theme::classic().with_css_file(&css_path)?;

    let mut out = Vec::new();
    let shell = PageShell::begin(&mut out, "Example", Menu::default(), theme)?;

    // Act
    shell.finish()?;

    // Assert
    let html = String::from_utf8(out)?;
    assert!(html.contains("body { background: black; }"));

    let missing = Theme::classic().with_css_file(dir.path().join("absent.css"));
    assert!(missing.is_err(), "Missing asset should propagate an error");
    Ok(())
}

/// Tests that a disabled shell still passes through late writes.
#[test]
fn test_abort_then_stream_remaining_output() -> Result<()> {
    // Arrange
    let mut out = Vec::new();
    let mut shell = PageShell::begin(&mut out, "Example", Menu::default(), Theme::midnight())?;
    write!(shell, "chunk1;")?;

    // Act
    shell.abort()?;
    write!(shell, "chunk2;")?;
    shell.finish()?;

    // Assert
    assert_eq!(out, b"chunk1;chunk2;");
    Ok(())
}
