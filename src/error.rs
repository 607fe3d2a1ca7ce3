//! Error types for trimat.
//!
//! This module defines all error types used throughout the library.
//!
//! Two failure classes are deliberately kept apart: defects in the upstream
//! mesh container (a face referencing a vertex that does not exist, reported
//! by a container that claimed to be validated) abort via `assert!` inside
//! the converters, while unsupported-but-well-formed *input* — non-manifold
//! topology above all — is reported through [`MeshError`] so the caller can
//! reject the mesh.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh construction and conversion.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An edge has more than two incident faces.
    ///
    /// The adjacency builders support edge-manifold meshes only; no partial
    /// result is produced when this is detected.
    #[error("edge ({v0}, {v1}) has more than two incident faces")]
    NonManifoldEdge {
        /// First (smaller) vertex of the edge.
        v0: usize,
        /// Second (larger) vertex of the edge.
        v1: usize,
    },

    /// Both faces incident to an interior edge traverse it in the same
    /// direction, so no consistent left/right assignment exists.
    #[error("edge ({v0}, {v1}) is traversed in the same direction by both incident faces")]
    InconsistentWinding {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },
}
