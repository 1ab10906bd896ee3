//! Scene graph consumed by the converter.
//!
//! - `SceneNode`: imported node (hierarchy links, local transform, sid)
//! - `SceneGraph`: arena container with stable node handles
//! - `sid`: scoped-identifier path resolution

pub mod graph;
pub mod node;
pub mod sid;

pub use graph::SceneGraph;
pub use node::SceneNode;
pub use sid::resolve_sid_path;

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle identifying a [`SceneNode`] within its [`SceneGraph`].
    pub struct SceneNodeHandle;
}
