use glam::Mat4;

use crate::converter::{ConverterContext, ConverterNodeHandle};
use crate::errors::{ConvertError, Result};
use crate::math;
use crate::scene::{SceneGraph, SceneNodeHandle, resolve_sid_path};

/// One skeletal joint of a skin's reconstructed bone hierarchy.
///
/// Bones live in a flat list owned by the conversion step that created
/// them; `index` is the bone's position in that list and `parent` is the
/// index of another bone in the same list, so cross-references stay valid
/// while the list grows.
#[derive(Debug, Clone)]
pub struct Bone {
    /// Dense position in the owning list, stable once assigned
    pub index: usize,
    /// Converter-space node this bone corresponds to
    pub node: ConverterNodeHandle,
    /// Joint scoped identifier (empty for synthesized ancestor bones)
    pub name: String,
    /// Index of the parent bone in the same list (None for hierarchy roots)
    pub parent: Option<usize>,
    /// True only for bones explicitly listed in the skin's joint list
    pub attached_to_skin: bool,
    /// Set by the animation conversion stage, never by bone construction
    pub animated: bool,
    /// Joint inverse bind matrix with the skin's bind shape matrix folded in
    pub inv_bind_matrix: Mat4,
}

impl Bone {
    fn new(node: ConverterNodeHandle, joint_sid: &str, index: usize) -> Self {
        Self {
            index,
            node,
            name: joint_sid.to_string(),
            parent: None,
            attached_to_skin: false,
            animated: false,
            inv_bind_matrix: Mat4::IDENTITY,
        }
    }

    /// Index of the parent bone, or -1 for hierarchy roots.
    #[must_use]
    pub fn parent_index(&self) -> i32 {
        self.parent.map_or(-1, |p| p as i32)
    }

    /// Finds the scene node referenced by a joint sid.
    ///
    /// Each candidate skeleton root is tried in order; the first root whose
    /// subtree resolves the path wins and the remaining roots are not
    /// searched.
    #[must_use]
    pub fn find_bone_node(
        joint_sid: &str,
        skeleton_roots: &[SceneNodeHandle],
        graph: &SceneGraph,
    ) -> Option<SceneNodeHandle> {
        skeleton_roots
            .iter()
            .find_map(|&root| resolve_sid_path(graph, root, joint_sid))
    }

    /// Creates all bones used by a skin.
    ///
    /// `inv_bind_matrices` is the skin's flat buffer of row-major 4×4
    /// blocks, one per joint in `joint_sids` order. A joint that cannot be
    /// resolved, or that resolves to a node without a converter counterpart,
    /// invalidates the whole skeleton: the skin gets no bones at all rather
    /// than a partial hierarchy that would mis-skin geometry. Each such
    /// joint is reported through the context's log sink.
    pub fn create_skin_bones(
        joint_sids: &[String],
        skeleton_roots: &[SceneNodeHandle],
        bind_shape_matrix: &Mat4,
        inv_bind_matrices: &[f32],
        graph: &SceneGraph,
        ctx: &ConverterContext,
    ) -> Result<Vec<Bone>> {
        if inv_bind_matrices.len() != joint_sids.len() * 16 {
            return Err(ConvertError::InverseBindMatrixCount {
                joints: joint_sids.len(),
                floats: inv_bind_matrices.len(),
            });
        }
        if skeleton_roots.is_empty() {
            return Err(ConvertError::NoSkeletonRoots);
        }

        let mut bones: Vec<Bone> = Vec::with_capacity(joint_sids.len());

        // Add all bones referenced by the skin
        for joint_sid in joint_sids {
            let Some(joint_node) = Self::find_bone_node(joint_sid, skeleton_roots, graph) else {
                ctx.warn(&format!(
                    "Joint {joint_sid} not found for skeleton, no bones created"
                ));
                return Ok(Vec::new());
            };
            let Some(converter_node) = ctx.find_converter_node(joint_node) else {
                ctx.warn(&format!(
                    "Joint {joint_sid} not converted for skeleton, no bones created"
                ));
                return Ok(Vec::new());
            };

            let mut bone = Bone::new(converter_node, joint_sid, bones.len());
            bone.attached_to_skin = true;

            // COLLADA skinning equation:
            //   boneWeight * boneMatrix * invBindMatrix * bindShapeMatrix * vertexPos
            // The bind shape matrix is folded into each bone here, so
            // downstream skinning only needs boneMatrix * invBindMatrix.
            bone.inv_bind_matrix =
                math::extract_mat4(inv_bind_matrices, bone.index) * *bind_shape_matrix;
            bones.push(bone);
        }

        // Add all missing bones of the skeleton
        Self::link_parents(&mut bones, ctx);

        Ok(bones)
    }

    /// Finds the parent for each bone, growing the list as needed.
    ///
    /// The skeleton may contain more nodes than the skin references; every
    /// ancestor required to connect the referenced bones to a common root is
    /// appended as a synthesized bone (`attached_to_skin = false`).
    pub fn link_parents(bones: &mut Vec<Bone>, ctx: &ConverterContext) {
        let mut i = 0;
        // The list grows during traversal; appended ancestors are processed
        // by the same loop in a later iteration.
        while i < bones.len() {
            let Some(node) = ctx.get(bones[i].node) else {
                i += 1;
                continue;
            };

            if let Some(parent_node) = node.parent {
                let parent = match bones.iter().position(|b| b.node == parent_node) {
                    Some(k) => k,
                    None => {
                        let index = bones.len();
                        bones.push(Bone::new(parent_node, "", index));
                        index
                    }
                };
                bones[i].parent = Some(parent);
            }

            i += 1;
        }
    }
}
