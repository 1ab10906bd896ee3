use slotmap::SlotMap;

use crate::scene::{SceneNode, SceneNodeHandle};

/// Arena container for an imported scene hierarchy.
///
/// Nodes are stored in a [`SlotMap`] so handles stay stable while the graph
/// grows; the hierarchy is a forest rooted at `root_nodes`. The graph is
/// acyclic by construction of the importer, the converter core relies on
/// that guarantee rather than re-checking it.
#[derive(Debug, Default)]
pub struct SceneGraph {
    pub nodes: SlotMap<SceneNodeHandle, SceneNode>,
    pub root_nodes: Vec<SceneNodeHandle>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Inserts a node as a new root.
    pub fn add_node(&mut self, node: SceneNode) -> SceneNodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Inserts a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: SceneNode, parent: SceneNodeHandle) -> SceneNodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }

        handle
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: SceneNodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }
}
