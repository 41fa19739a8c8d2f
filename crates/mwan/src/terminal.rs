//! Terminal mount point for the dashboard.

use mwan_core::refresh::Surface;
use mwan_core::view::{self, Node, TextOptions};
use std::io::{self, Write};
use std::sync::Arc;

/// Clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Text(TextOptions),
    Html,
}

/// Writes each tree to `out` in a single write, optionally clearing the
/// screen first so the new dashboard replaces the old one.
pub struct TerminalSurface<W: Write> {
    out: W,
    markup: Markup,
    clear: bool,
    trailer: Option<String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, markup: Markup) -> Self {
        Self {
            out,
            markup,
            clear: false,
            trailer: None,
        }
    }

    /// Clear the screen before every tree and print `trailer` after it.
    pub fn redrawing(mut self, trailer: impl Into<String>) -> Self {
        self.clear = true;
        self.trailer = Some(trailer.into());
        self
    }

    fn serialize(&self, tree: &Node) -> String {
        let mut frame = String::new();
        if self.clear {
            frame.push_str(CLEAR_SCREEN);
        }

        match self.markup {
            Markup::Text(options) => frame.push_str(&view::to_text(tree, &options)),
            Markup::Html => {
                frame.push_str(&view::to_html(tree));
                frame.push('\n');
            }
        }

        if let Some(trailer) = &self.trailer {
            frame.push('\n');
            frame.push_str(trailer);
            frame.push('\n');
        }
        frame
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn replace(&mut self, tree: Arc<Node>) -> io::Result<()> {
        let frame = self.serialize(&tree);
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
