use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::converter::{ConverterNode, ConverterNodeHandle};
use crate::diag::{LogLevel, LogSink};
use crate::scene::SceneNodeHandle;

/// Capabilities and state threaded through one conversion.
///
/// Bundles the converter-node arena, the scene-node → converter-node map,
/// and the diagnostic sink. Every conversion owns its own context; nothing
/// here is shared across conversions.
pub struct ConverterContext<'a> {
    /// Converter-node storage for this conversion
    pub nodes: SlotMap<ConverterNodeHandle, ConverterNode>,
    /// Scene-node handle → converter-node handle
    node_map: FxHashMap<SceneNodeHandle, ConverterNodeHandle>,
    log: &'a dyn LogSink,
}

impl<'a> ConverterContext<'a> {
    #[must_use]
    pub fn new(log: &'a dyn LogSink) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            node_map: FxHashMap::default(),
            log,
        }
    }

    /// Stores a converter node and records the mapping from its source
    /// scene node.
    pub fn register_node(&mut self, node: ConverterNode) -> ConverterNodeHandle {
        let source = node.source;
        let handle = self.nodes.insert(node);
        self.node_map.insert(source, handle);
        handle
    }

    /// Looks up the converter-space counterpart of a scene node.
    ///
    /// Returns `None` for nodes outside the converted subtree.
    #[must_use]
    pub fn find_converter_node(&self, source: SceneNodeHandle) -> Option<ConverterNodeHandle> {
        self.node_map.get(&source).copied()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: ConverterNodeHandle) -> Option<&ConverterNode> {
        self.nodes.get(handle)
    }

    /// Emits a warning-level diagnostic through the injected sink.
    pub fn warn(&self, message: &str) {
        self.log.write(message, LogLevel::Warning);
    }

    /// Consumes the context, releasing the converter-node arena to the
    /// caller.
    #[must_use]
    pub fn into_nodes(self) -> SlotMap<ConverterNodeHandle, ConverterNode> {
        self.nodes
    }
}
