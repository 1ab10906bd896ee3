//! Math Utility Tests
//!
//! Tests for:
//! - Flat-buffer block extraction (vec3, mat4 with row-major transposition)
//! - Matrix → translation/rotation/scale decomposition

use std::f32::consts::FRAC_PI_2;

use collada_rig::math::{decompose, extract_mat4, extract_vec3};
use glam::{Mat4, Quat, Vec3};

/// Flattens a glam matrix into COLLADA's row-major storage order.
fn row_major(mat: &Mat4) -> [f32; 16] {
    mat.transpose().to_cols_array()
}

// ============================================================================
// Buffer Extraction
// ============================================================================

#[test]
fn extract_vec3_reads_indexed_block() {
    let buffer = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
    assert_eq!(extract_vec3(&buffer, 1), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn extract_mat4_transposes_row_major_input() {
    // Row-major translation matrix: translation lives in the last column of
    // each row triple.
    #[rustfmt::skip]
    let buffer = [
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 2.0,
        0.0, 0.0, 1.0, 3.0,
        0.0, 0.0, 0.0, 1.0,
    ];
    let mat = extract_mat4(&buffer, 0);

    assert!((mat.w_axis.truncate() - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    assert!(
        (mat.transform_point3(Vec3::ZERO) - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6,
        "Extracted matrix should translate the origin"
    );
}

#[test]
fn extract_mat4_reads_indexed_block() {
    let first = row_major(&Mat4::from_translation(Vec3::new(9.0, 9.0, 9.0)));
    let second = row_major(&Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    let buffer: Vec<f32> = first.iter().chain(second.iter()).copied().collect();

    let mat = extract_mat4(&buffer, 1);
    assert!(mat.abs_diff_eq(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)), 1e-6));
}

// ============================================================================
// Decomposition
// ============================================================================

#[test]
fn decompose_diagonal_scale() {
    let mat = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
    let (translation, rotation, scale) = decompose(&mat);

    assert!((scale - Vec3::new(2.0, 3.0, 4.0)).length() < 1e-5);
    assert!(translation.length() < 1e-6);
    assert!(rotation.dot(Quat::IDENTITY).abs() > 1.0 - 1e-5);
}

#[test]
fn decompose_rotation_and_nonuniform_scale() {
    let expected_rotation = Quat::from_rotation_z(FRAC_PI_2);
    let mat = Mat4::from_scale_rotation_translation(
        Vec3::new(1.0, 2.0, 3.0),
        expected_rotation,
        Vec3::new(4.0, 5.0, 6.0),
    );
    let (translation, rotation, scale) = decompose(&mat);

    assert!((translation - Vec3::new(4.0, 5.0, 6.0)).length() < 1e-5);
    assert!((scale - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    // Quaternion sign is not observable; compare up to sign.
    assert!(rotation.dot(expected_rotation).abs() > 1.0 - 1e-5);
}

// Translation is wired through to the return value per the documented
// contract. Historical converter builds computed the translation and then
// discarded it.
// TODO: confirm with the pipeline owner that no downstream consumer relies
// on the discarded value before treating this as final behavior.
#[test]
fn decompose_returns_translation_column() {
    let mat = Mat4::from_translation(Vec3::new(7.0, -8.0, 9.0));
    let (translation, _, _) = decompose(&mat);

    assert!((translation - Vec3::new(7.0, -8.0, 9.0)).length() < 1e-6);
}
