//! Registry tree: repository path segments as inner nodes, tags as leaves.
//!
//! Nodes live in an arena owned by [`Tree`]. A parent owns its children
//! through `children`; `parent` is a plain index used only to walk upwards.

mod flatten;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Path,
    Tag,
}

#[derive(Clone, Debug)]
pub struct Node {
    kind: NodeKind,
    name: String,
    depth: usize,
    expanded: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_tag(&self) -> bool {
        self.kind == NodeKind::Tag
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("node `{0}` already has children")]
    AlreadyPopulated(String),
    #[error("tags can only be attached to a repository node, `{0}` is a tag")]
    NotAPath(String),
}

#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Path,
                name: root_name.into(),
                depth: 0,
                expanded: true,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Builds the whole prefix tree from flat repository paths.
    ///
    /// Siblings keep the order in which they were first seen.
    pub fn from_paths<I, S>(root_name: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new(root_name);
        for path in paths {
            tree.insert_path(path.as_ref());
        }
        tree
    }

    pub fn insert_path(&mut self, path: &str) {
        let mut cur = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            cur = self.child_or_insert(cur, segment);
        }
    }

    fn child_or_insert(&mut self, parent: NodeId, name: &str) -> NodeId {
        match self.child(parent, name) {
            Some(existing) => existing,
            None => self.push_child(parent, NodeKind::Path, name.to_string()),
        }
    }

    fn push_child(&mut self, parent: NodeId, kind: NodeKind, name: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(Node {
            kind,
            name,
            depth,
            expanded: false,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Finds a direct child by name.
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|c| self.nodes[c.0].name == name)
    }

    /// Resolves a `/`-separated path below the root.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self.root(), |cur, segment| self.child(cur, segment))
    }

    /// Returns `true` if the flag changed. Tags never expand.
    pub fn expand(&mut self, id: NodeId) -> bool {
        let node = &mut self.nodes[id.0];
        if node.kind != NodeKind::Path || node.expanded {
            return false;
        }
        node.expanded = true;
        true
    }

    /// Returns `true` if the flag changed. The root stays expanded.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        if id == self.root() {
            return false;
        }
        let node = &mut self.nodes[id.0];
        if !node.expanded {
            return false;
        }
        node.expanded = false;
        true
    }

    /// Attaches fetched tags as sorted leaf children of a childless repository node.
    pub fn populate_tags<I, S>(&mut self, id: NodeId, tags: I) -> Result<usize, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let node = &self.nodes[id.0];
        if node.kind == NodeKind::Tag {
            return Err(TreeError::NotAPath(node.name.clone()));
        }
        if !node.children.is_empty() {
            return Err(TreeError::AlreadyPopulated(node.name.clone()));
        }

        for tag in tags {
            self.push_child(id, NodeKind::Tag, tag.into());
        }

        let mut children = std::mem::take(&mut self.nodes[id.0].children);
        children.sort_by(|a, b| self.nodes[a.0].name.cmp(&self.nodes[b.0].name));
        let count = children.len();
        self.nodes[id.0].children = children;
        Ok(count)
    }

    /// Repository-relative path: `team/app/web`, or `team/app/api:v1` for a tag.
    /// Empty for the root.
    pub fn path(&self, id: NodeId) -> String {
        let mut chain = Vec::new();
        let mut cur = id;
        while let Some(parent) = self.nodes[cur.0].parent {
            chain.push(cur);
            cur = parent;
        }

        let mut out = String::new();
        for (i, id) in chain.iter().rev().enumerate() {
            let node = &self.nodes[id.0];
            if i > 0 {
                out.push(if node.is_tag() { ':' } else { '/' });
            }
            out.push_str(&node.name);
        }
        out
    }

    /// Display path with the root label in front, e.g.
    /// `registry.example.com/team/app/api:v1`.
    pub fn full_path(&self, id: NodeId) -> String {
        let root = &self.nodes[0].name;
        if id == self.root() {
            return root.clone();
        }
        let rel = self.path(id);
        if root.is_empty() {
            return rel;
        }
        format!("{}/{}", root, rel)
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
