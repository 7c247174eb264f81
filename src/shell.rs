//! Page shell capture and render lifecycle.

use anyhow::{Context, Result, bail};
use std::io;
use std::mem;

use crate::components::document::{Document, document};
use crate::components::header::header;
use crate::components::menu::menu;
use crate::theme::Theme;
use crate::Menu;

type Hook<W> = Box<dyn FnOnce(&mut PageShell<W>)>;

/// Captures body output and wraps it in a themed page shell.
///
/// A shell is single-use: construct it with [`PageShell::begin`] before
/// producing any body output, write the body through the shell's
/// [`io::Write`] impl, and call [`PageShell::finish`] when done. `finish`
/// runs the registered hooks and emits either the full decorated document
/// or, if decoration was aborted, the raw captured body. A shell dropped
/// without `finish` renders best-effort on drop, swallowing write errors.
///
/// Writes are diverted into an internal buffer until the render pass seals
/// it; after [`PageShell::abort`] they pass straight through to the sink.
pub struct PageShell<W: io::Write> {
    sink: W,
    buffer: Vec<u8>,
    capturing: bool,
    enabled: bool,
    rendered: bool,
    site_title: String,
    page_title: String,
    menu: Menu,
    theme: Theme,
    head_extra: String,
    style_extra: String,
    hooks: Vec<Hook<W>>,
}

impl<W: io::Write> std::fmt::Debug for PageShell<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageShell")
            .field("capturing", &self.capturing)
            .field("enabled", &self.enabled)
            .field("rendered", &self.rendered)
            .field("site_title", &self.site_title)
            .field("page_title", &self.page_title)
            .finish_non_exhaustive()
    }
}

impl<W: io::Write> PageShell<W> {
    /// Begins capturing page output destined for `sink`.
    ///
    /// The page title defaults to the site title; override it with
    /// [`PageShell::with_page_title`].
    ///
    /// # Arguments
    ///
    /// * `sink`: Output destination for the rendered document
    /// * `site_title`: Site title, required non-empty
    /// * `menu`: Navigation menu, fixed or deferred
    /// * `theme`: Visual theme for the shell
    ///
    /// # Errors
    ///
    /// Returns error if the site title is empty.
    pub fn begin(
        sink: W,
        site_title: impl Into<String>,
        menu: Menu,
        theme: Theme,
    ) -> Result<Self> {
        let site_title = site_title.into();
        if site_title.is_empty() {
            bail!("Site title must not be empty");
        }

        Ok(Self {
            sink,
            buffer: Vec::new(),
            capturing: true,
            enabled: true,
            rendered: false,
            page_title: site_title.clone(),
            site_title,
            menu,
            theme,
            head_extra: String::new(),
            style_extra: String::new(),
            hooks: Vec::new(),
        })
    }

    /// Sets an initial page title, replacing the site-title default.
    #[must_use]
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    /// Cancels shell decoration.
    ///
    /// Flushes whatever was captured so far to the sink verbatim, stops
    /// diversion so further writes pass straight through, and turns the
    /// render pass into a raw flush. Idempotent; a second call only
    /// re-flushes.
    ///
    /// # Errors
    ///
    /// Returns error if flushing the captured body to the sink fails.
    pub fn abort(&mut self) -> Result<()> {
        self.enabled = false;
        self.capturing = false;

        let body = mem::take(&mut self.buffer);
        self.sink
            .write_all(&body)
            .context("Failed to flush captured body")?;
        self.sink.flush().context("Failed to flush output sink")?;
        Ok(())
    }

    /// Skips shell decoration without flushing.
    ///
    /// Intended for hooks: the render pass stops iterating hooks as soon
    /// as the shell is disabled and emits the raw captured body instead of
    /// the decorated document.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Prefixes the page title with the site title.
    ///
    /// The argument has never been consulted: across every observed
    /// variant the formula reuses the existing page title, so
    /// `set_page_title` turns `"Home"` into `"Example - Home"` regardless
    /// of what is passed. Preserved as-is until the intended contract is
    /// confirmed; see the pinning test below.
    pub fn set_page_title(&mut self, _title: &str) {
        self.page_title = format!("{} - {}", self.site_title, self.page_title);
    }

    /// Registers a hook to run immediately before rendering.
    ///
    /// Hooks run in reverse registration order (last registered first) and
    /// receive mutable access to the shell, so they can adjust the title,
    /// menu, head and style content, or disable decoration entirely. A
    /// hook that disables the shell short-circuits the remaining hooks.
    pub fn register_hook(&mut self, hook: impl FnOnce(&mut Self) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Appends raw content to the `<head>` section. No escaping is
    /// performed; the caller supplies safe markup.
    pub fn echo_head(&mut self, content: &str) {
        self.head_extra.push_str(content);
    }

    /// Appends raw content to the inline stylesheet.
    pub fn echo_css(&mut self, content: &str) {
        self.style_extra.push_str(content);
    }

    /// Replaces the navigation menu.
    pub fn set_menu(&mut self, menu: Menu) {
        self.menu = menu;
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Body captured so far. Mostly useful inside hooks, which run after
    /// the caller has finished writing.
    pub fn captured_body(&self) -> &[u8] {
        &self.buffer
    }

    /// Runs the render pass and releases the shell.
    ///
    /// Hooks run first, in reverse registration order; anything they write
    /// through the shell still lands in the captured body. If the shell is
    /// still enabled afterwards the full document is emitted, otherwise
    /// the raw body. Exactly one render happens per shell, whether through
    /// `finish` or drop.
    ///
    /// # Errors
    ///
    /// Returns error if the captured body is not valid UTF-8 or the sink
    /// rejects the output.
    pub fn finish(mut self) -> Result<()> {
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        if self.rendered {
            return Ok(());
        }
        self.rendered = true;

        if !self.enabled {
            // Aborted earlier; emit anything captured since, undecorated.
            return self.flush_raw();
        }

        let hooks = mem::take(&mut self.hooks);
        for hook in hooks.into_iter().rev() {
            hook(self);
            if !self.enabled {
                return self.flush_raw();
            }
        }

        self.capturing = false;
        let body = String::from_utf8(mem::take(&mut self.buffer))
            .context("Captured body contains invalid UTF8")?;

        let items = mem::take(&mut self.menu).resolve();
        let nav = menu(&items);
        let head = header(&self.site_title, self.theme.header(), nav);

        let mut css = String::from(self.theme.css());
        if let Some(media) = self.theme.media_css() {
            css.push_str(&media);
        }
        css.push_str(&self.style_extra);

        let favicon = self.theme.favicon_data_uri();
        let doc = document(Document {
            page_title: &self.page_title,
            css: &css,
            favicon_href: &favicon,
            head_extra: &self.head_extra,
            header: head,
            body: &body,
        });

        self.sink
            .write_all(doc.into_string().as_bytes())
            .context("Failed to write rendered document")?;
        self.sink.flush().context("Failed to flush output sink")?;
        Ok(())
    }

    fn flush_raw(&mut self) -> Result<()> {
        self.capturing = false;
        let body = mem::take(&mut self.buffer);
        self.sink
            .write_all(&body)
            .context("Failed to flush captured body")?;
        self.sink.flush().context("Failed to flush output sink")?;
        Ok(())
    }
}

impl<W: io::Write> io::Write for PageShell<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.capturing {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            self.sink.write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.capturing {
            Ok(())
        } else {
            self.sink.flush()
        }
    }
}

impl<W: io::Write> Drop for PageShell<W> {
    fn drop(&mut self) {
        if !self.rendered {
            let _ = self.render();
        }
    }
}
