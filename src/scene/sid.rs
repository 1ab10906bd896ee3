//! Scoped-identifier path resolution.

use std::collections::VecDeque;

use crate::scene::{SceneGraph, SceneNodeHandle};

/// Resolves a slash-delimited scoped-identifier path against a subtree root.
///
/// The path is split into segments; each segment selects, via breadth-first
/// search below the current node, a descendant whose `sid` equals the
/// segment, and the search descends from the match. Returns `None` as soon
/// as any segment fails to match. Pure function, no side effects.
///
/// The COLLADA specification is inconsistent about joint addressing: joint
/// ids lack the anchor id that target addressing (chapter 3.3) requires,
/// while the skin element (chapter 5) implies they are scoped identifiers
/// relative to the skeleton root node. This function commits to the latter,
/// root-relative interpretation; keep that choice for compatibility with
/// documents in the wild.
#[must_use]
pub fn resolve_sid_path(
    graph: &SceneGraph,
    root: SceneNodeHandle,
    path: &str,
) -> Option<SceneNodeHandle> {
    let mut current = root;
    for segment in path.split('/') {
        if segment.is_empty() {
            return None;
        }
        current = find_sid_descendant(graph, current, segment)?;
    }
    Some(current)
}

/// Breadth-first search below `start` for a node whose sid is `sid`.
fn find_sid_descendant(
    graph: &SceneGraph,
    start: SceneNodeHandle,
    sid: &str,
) -> Option<SceneNodeHandle> {
    let mut queue: VecDeque<SceneNodeHandle> =
        graph.get(start)?.children().iter().copied().collect();

    while let Some(handle) = queue.pop_front() {
        let node = graph.get(handle)?;
        if node.sid.as_deref() == Some(sid) {
            return Some(handle);
        }
        queue.extend(node.children().iter().copied());
    }

    None
}
