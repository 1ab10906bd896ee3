//! Numeric buffer extraction and matrix decomposition.
//!
//! COLLADA documents store matrices row major in flat float arrays; the
//! converter works in glam's column-major convention throughout. The
//! extraction helpers here pull fixed-size blocks out of those flat buffers
//! and perform the transposition at the boundary.

use glam::{Mat3, Mat4, Quat, Vec3};

/// Extracts a 3D vector from an array of vectors stored as a flat float
/// buffer.
///
/// # Panics
///
/// Panics if `src` does not contain a full 3-float block at `index`.
#[must_use]
pub fn extract_vec3(src: &[f32], index: usize) -> Vec3 {
    let base = index * 3;
    Vec3::new(src[base], src[base + 1], src[base + 2])
}

/// Extracts a 4×4 matrix from an array of matrices stored as a flat float
/// buffer.
///
/// The 16-float block is interpreted as row major (COLLADA storage order)
/// and transposed into glam's column-major convention.
///
/// # Panics
///
/// Panics if `src` does not contain a full 16-float block at `index`.
#[must_use]
pub fn extract_mat4(src: &[f32], index: usize) -> Mat4 {
    let base = index * 16;
    Mat4::from_cols_slice(&src[base..base + 16]).transpose()
}

/// Decomposes a transform into `(translation, rotation, scale)`.
///
/// Translation is the matrix's translation column. Scale is the length of
/// each of the three basis columns. Rotation is the quaternion of the
/// column-normalized upper-left 3×3 block.
///
/// Assumes the 3×3 block is a rotation times a nonuniform scale with no
/// shear; shear terms yield an incorrect rotation/scale split. Callers that
/// need shear-exact results must use a full polar decomposition instead.
#[must_use]
pub fn decompose(mat: &Mat4) -> (Vec3, Quat, Vec3) {
    let translation = mat.w_axis.truncate();

    let x = mat.x_axis.truncate();
    let y = mat.y_axis.truncate();
    let z = mat.z_axis.truncate();
    let scale = Vec3::new(x.length(), y.length(), z.length());

    let rotation = Quat::from_mat3(&Mat3::from_cols(
        x / scale.x,
        y / scale.y,
        z / scale.z,
    ));

    (translation, rotation, scale)
}
