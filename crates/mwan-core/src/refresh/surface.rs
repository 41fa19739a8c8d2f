use crate::view::Node;
use std::io;
use std::sync::{Arc, Mutex};

/// Mount point holding the currently displayed tree.
pub trait Surface {
    /// Swap in a fully built tree in one step.
    fn replace(&mut self, tree: Arc<Node>) -> io::Result<()>;
}

/// Keeps the displayed tree in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    current: Option<Arc<Node>>,
    replacements: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with an initial tree already mounted.
    pub fn with_tree(tree: Arc<Node>) -> Self {
        Self {
            current: Some(tree),
            replacements: 0,
        }
    }

    pub fn current(&self) -> Option<&Arc<Node>> {
        self.current.as_ref()
    }

    /// Number of replacements since creation.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Surface for MemorySurface {
    fn replace(&mut self, tree: Arc<Node>) -> io::Result<()> {
        self.current = Some(tree);
        self.replacements += 1;
        Ok(())
    }
}

/// A surface shared with another thread, e.g. one the refresh loop writes
/// while the caller inspects it.
impl<S: Surface> Surface for Arc<Mutex<S>> {
    fn replace(&mut self, tree: Arc<Node>) -> io::Result<()> {
        let mut surface = self
            .lock()
            .map_err(|_| io::Error::other("surface lock poisoned"))?;
        surface.replace(tree)
    }
}
