use slotmap::SlotMap;

use crate::converter::{ConverterContext, ConverterNode, ConverterNodeHandle};
use crate::diag::{ConsoleLog, LogSink};
use crate::scene::SceneGraph;

/// The imported document, as handed over by the (out of scope) loader.
///
/// Only the parts the conversion core consumes are represented: the visual
/// scene graph, if the document has one.
#[derive(Debug, Default)]
pub struct Document {
    pub scene: Option<SceneGraph>,
}

/// Result of a document conversion: the converter-space node forest.
pub struct ConverterFile {
    /// Top-level converter nodes, one per scene root
    pub roots: Vec<ConverterNodeHandle>,
    /// Converter-node storage the root handles resolve against
    pub nodes: SlotMap<ConverterNodeHandle, ConverterNode>,
}

/// Top-level conversion entry point.
pub struct Converter {
    log: Box<dyn LogSink>,
}

impl Converter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Box::new(ConsoleLog),
        }
    }

    /// Uses the given sink for all diagnostics instead of the console.
    #[must_use]
    pub fn with_log(log: Box<dyn LogSink>) -> Self {
        Self { log }
    }

    /// Converts a document's scene graph into converter-space nodes.
    #[must_use]
    pub fn convert(&self, doc: &Document) -> ConverterFile {
        let mut ctx = ConverterContext::new(&*self.log);
        let roots = Self::create_scene(doc, &mut ctx);
        ConverterFile {
            roots,
            nodes: ctx.into_nodes(),
        }
    }

    /// Converts every top-level scene node, registering the whole forest in
    /// the context. A document without a scene yields an empty forest and a
    /// warning.
    pub fn create_scene(doc: &Document, ctx: &mut ConverterContext) -> Vec<ConverterNodeHandle> {
        let Some(scene) = &doc.scene else {
            ctx.warn("Collada document has no scene");
            return Vec::new();
        };

        scene
            .root_nodes
            .iter()
            .filter_map(|&root| ConverterNode::create_node(scene, root, None, ctx))
            .collect()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
