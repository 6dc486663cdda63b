use super::{NodeId, Tree};

impl Tree {
    /// Visible nodes in display order: pre-order, descending only into
    /// expanded nodes. The root is always first.
    pub fn flatten(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            let node = self.node(id);
            if node.is_expanded() {
                stack.extend(node.children().iter().rev().copied());
            }
        }
        out
    }
}
