use glam::{Quat, Vec3};

use crate::converter::{ConverterContext, ConverterNodeHandle};
use crate::math;
use crate::scene::{SceneGraph, SceneNodeHandle};

/// Converter-space mirror of a scene node.
///
/// Holds the decomposed local transform (position, rotation, scale) rather
/// than the raw matrix, since that is the form the animation and skinning
/// stages consume.
#[derive(Debug, Clone)]
pub struct ConverterNode {
    /// The scene node this node was converted from
    pub source: SceneNodeHandle,
    /// Converter-space parent (None for converted subtree roots)
    pub parent: Option<ConverterNodeHandle>,
    /// Converter-space children
    pub children: Vec<ConverterNodeHandle>,
    /// Element name, empty if the document carried none
    pub name: String,

    // === Decomposed local transform ===
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl ConverterNode {
    /// Recursively converts `source` and its descendants, registering every
    /// created node in the context's scene→converter map.
    ///
    /// Returns `None` if `source` is not a live node of `graph`.
    pub fn create_node(
        graph: &SceneGraph,
        source: SceneNodeHandle,
        parent: Option<ConverterNodeHandle>,
        ctx: &mut ConverterContext,
    ) -> Option<ConverterNodeHandle> {
        let scene_node = graph.get(source)?;
        let (translation, rotation, scale) = math::decompose(&scene_node.local_transform);

        let handle = ctx.register_node(Self {
            source,
            parent,
            children: Vec::new(),
            name: scene_node.name.clone().unwrap_or_default(),
            translation,
            rotation,
            scale,
        });

        if let Some(parent) = parent
            && let Some(parent_node) = ctx.nodes.get_mut(parent)
        {
            parent_node.children.push(handle);
        }

        for &child in scene_node.children() {
            Self::create_node(graph, child, Some(handle), ctx);
        }

        Some(handle)
    }
}
