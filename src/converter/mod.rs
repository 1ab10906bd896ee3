//! Converter-space representation of the imported scene.
//!
//! - `ConverterContext`: per-conversion capabilities (node map, log sink)
//! - `ConverterNode`: converter-space mirror of a scene node
//! - `Bone`: skeletal joint reconstruction for skins
//! - `Converter`: top-level conversion entry point

pub mod bone;
pub mod context;
pub mod driver;
pub mod node;

pub use bone::Bone;
pub use context::ConverterContext;
pub use driver::{Converter, ConverterFile, Document};
pub use node::ConverterNode;

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle identifying a [`ConverterNode`] within its conversion.
    pub struct ConverterNodeHandle;
}
