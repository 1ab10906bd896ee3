//! Error Types
//!
//! This module defines the error types used by the conversion core.
//!
//! # Overview
//!
//! [`ConvertError`] covers *structural* contract violations at the public
//! boundary, such as a flat inverse-bind-matrix buffer whose length does not
//! match the skin's joint count.
//!
//! Expected document-level failures (an unresolvable joint address, a scene
//! node without a converter counterpart, a document with no scene) are not
//! errors: they are reported through the injected log sink and signaled via
//! empty return values, so a conversion with broken skinning data still
//! completes and emits geometry without a skeleton.

use thiserror::Error;

/// The error type for skeleton/skin conversion.
///
/// Each variant is a caller contract violation, not a recoverable
/// document defect.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The flat inverse-bind-matrix buffer does not contain exactly one
    /// 16-float block per joint.
    #[error("Inverse bind matrix buffer has {floats} floats for {joints} joints (expected 16 per joint)")]
    InverseBindMatrixCount {
        /// Number of joints referenced by the skin
        joints: usize,
        /// Number of floats in the supplied buffer
        floats: usize,
    },

    /// The skin supplied no candidate skeleton root nodes.
    #[error("Skin has no skeleton root nodes to resolve joints against")]
    NoSkeletonRoots,
}

/// Alias for `Result<T, ConvertError>`.
pub type Result<T> = std::result::Result<T, ConvertError>;
