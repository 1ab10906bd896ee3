use glam::Mat4;

use crate::scene::SceneNodeHandle;

/// A node of the imported scene graph.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: Optional handle to the parent node (None for root nodes)
/// - `children`: Ordered list of child node handles
///
/// # Addressing
///
/// The `sid` is a scoped identifier, unique among siblings, used by
/// slash-delimited paths to address deeply nested nodes (see
/// [`crate::scene::resolve_sid_path`]).
///
/// The converter core reads this type but never mutates it; mutation is the
/// importer's job during graph construction.
#[derive(Debug, Clone)]
pub struct SceneNode {
    // === Core Hierarchy ===
    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<SceneNodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<SceneNodeHandle>,

    // === Identity ===
    /// Element name, if present in the document
    pub name: Option<String>,
    /// Scoped identifier, if present in the document
    pub sid: Option<String>,

    // === Spatial Data ===
    /// Local transform, already in column-major convention
    pub local_transform: Mat4,
}

impl SceneNode {
    /// Creates an unnamed node with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            name: None,
            sid: None,
            local_transform: Mat4::IDENTITY,
        }
    }

    /// Creates a node carrying the given scoped identifier.
    #[must_use]
    pub fn with_sid(sid: &str) -> Self {
        let mut node = Self::new();
        node.sid = Some(sid.to_string());
        node
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<SceneNodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SceneNodeHandle] {
        &self.children
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}
