//! Browsing session: the tree, its visible positions, the viewport, and the
//! status line, driven one [`NavEvent`] at a time.

use std::error::Error;

use tracing::{info, warn};

use crate::registry::Registry;
use crate::tree::{Node, NodeId, Tree};
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Down,
    Up,
    Expand,
    Collapse,
    Activate,
    Char(char),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One drawable row of the tree area.
#[derive(Clone, Copy, Debug)]
pub struct VisibleRow<'a> {
    pub row: usize,
    pub node: &'a Node,
    pub highlighted: bool,
}

pub struct Browser<R> {
    registry: R,
    tree: Tree,
    positions: Vec<NodeId>,
    viewport: Viewport,
    status: String,
}

impl<R: Registry> Browser<R> {
    pub fn new(registry: R, tree: Tree, visible_height: usize) -> Self {
        let positions = tree.flatten();
        Self {
            registry,
            tree,
            positions,
            viewport: Viewport::new(visible_height),
            status: String::new(),
        }
    }

    pub fn handle(&mut self, event: NavEvent) -> Flow {
        match event {
            NavEvent::Down => self.move_by(1),
            NavEvent::Up => self.move_by(-1),
            NavEvent::Expand => self.expand(),
            NavEvent::Collapse => self.collapse(),
            NavEvent::Activate => {
                if self.tree.node(self.current()).is_expanded() {
                    self.collapse();
                } else {
                    self.expand();
                }
            }
            NavEvent::Char(c) => self.jump_to_prefix(c.encode_utf8(&mut [0; 4])),
            NavEvent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn positions(&self) -> &[NodeId] {
        &self.positions
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Selected node. The root is always visible, so there is one.
    pub fn current(&self) -> NodeId {
        self.positions
            .get(self.viewport.full_index())
            .copied()
            .unwrap_or_else(|| self.tree.root())
    }

    pub fn resize(&mut self, visible_height: usize) {
        self.viewport.resize(visible_height);
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = VisibleRow<'_>> + '_ {
        let cursor = self.viewport.cursor_row();
        self.positions
            .iter()
            .skip(self.viewport.scroll_offset())
            .take(self.viewport.height())
            .enumerate()
            .map(move |(row, id)| VisibleRow {
                row,
                node: self.tree.node(*id),
                highlighted: row == cursor,
            })
    }

    fn move_by(&mut self, delta: isize) {
        self.viewport.move_by(delta, self.positions.len());
        self.status = self.tree.full_path(self.current());
    }

    fn expand(&mut self) {
        let id = self.current();
        let newly_expanded = self.tree.expand(id);

        if newly_expanded && id != self.tree.root() && self.tree.node(id).children().is_empty() {
            let repository = self.tree.path(id);
            info!(%repository, "loading tags");
            let tags = match self.registry.list_tags(&repository) {
                Ok(tags) => tags,
                Err(err) => {
                    warn!(%repository, error = %error_chain(&err), "tag fetch failed");
                    self.status = error_chain(&err);
                    return;
                }
            };
            if let Err(err) = self.tree.populate_tags(id, tags) {
                self.status = err.to_string();
                return;
            }
        }

        self.reflatten();
    }

    fn collapse(&mut self) {
        let id = self.current();
        if !self.tree.collapse(id) {
            self.move_to_parent();
        }
        self.reflatten();
    }

    fn move_to_parent(&mut self) {
        let current = self.viewport.full_index();
        let Some(&id) = self.positions.get(current) else {
            return;
        };
        let depth = self.tree.node(id).depth();
        if let Some(parent) = self.positions[..current]
            .iter()
            .rposition(|p| self.tree.node(*p).depth() < depth)
        {
            self.viewport.move_by(parent as isize - current as isize, self.positions.len());
        }
    }

    fn jump_to_prefix(&mut self, prefix: &str) {
        let names: Vec<&str> = self
            .positions
            .iter()
            .map(|id| self.tree.node(*id).name())
            .collect();
        self.viewport.jump_to_prefix(&names, prefix);
    }

    fn reflatten(&mut self) {
        self.positions = self.tree.flatten();
        self.viewport.clamp(self.positions.len());
    }
}

/// `outer: inner: root cause`, for the one-line status bar.
fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
#[path = "tests/browser_tests.rs"]
mod tests;
