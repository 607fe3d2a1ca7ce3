//! # Trimat
//!
//! Dense matrix views and edge adjacency for triangle meshes.
//!
//! Trimat converts an indexed triangle mesh into the dense `nalgebra`
//! matrices numeric pipelines consume, and reconstructs the mesh's
//! edge-level connectivity (vertex-edge, face-edge, edge-face relations)
//! directly from the triangle list, with a deterministic,
//! orientation-consistent labeling.
//!
//! ## Features
//!
//! - **Attribute export**: vertex positions, face indices, and stored
//!   normals as V×3 / F×3 matrices
//! - **Face-face re-export**: the container-maintained `FFp`/`FFi` topology
//!   as matrices, -1 marking boundaries
//! - **Edge-adjacency reconstruction**: `EV`/`FE`/`EF` relations recovered
//!   from nothing but the face list via a global sort/merge, with the left
//!   face of every edge guaranteed to traverse it in `EV` order
//! - **Mesh-agnostic**: converters read any container implementing the
//!   narrow [`TriMeshSource`](mesh::TriMeshSource) interface
//!
//! ## Quick Start
//!
//! ```
//! use trimat::prelude::*;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![
//!     [0, 2, 1], // bottom
//!     [0, 1, 3], // front
//!     [1, 2, 3], // right
//!     [2, 0, 3], // left
//! ];
//!
//! let mesh = TriMesh::from_triangles(&positions, &faces).unwrap();
//!
//! // Dense attribute matrices
//! let (vertices, face_ids) = mesh_matrices(&mesh);
//! assert_eq!(vertices.shape(), (4, 3));
//! assert_eq!(face_ids.shape(), (4, 3));
//!
//! // Edge-level connectivity: a closed tetrahedron has six interior edges
//! let adj = mesh_edge_adjacency(&mesh).unwrap();
//! assert_eq!(adj.num_edges(), 6);
//! assert!((0..6).all(|e| !adj.is_boundary_edge(e)));
//! ```
//!
//! ## Failure model
//!
//! The adjacency builders support edge-manifold meshes only. A mesh where
//! three or more faces share an edge, or where the two faces of an interior
//! edge wind it the same way, is rejected with a [`MeshError`](error::MeshError);
//! no partial matrices are ever returned. An empty mesh is not an error and
//! produces correctly-dimensioned 0-row matrices.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod matrix;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use trimat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::matrix::{
        edge_adjacency, face_face_matrices, mesh_edge_adjacency, mesh_matrices, normal_matrices,
        vector_from_point, EdgeAdjacency, FaceFaceMatrices,
    };
    pub use crate::mesh::{TriFace, TriMesh, TriMeshSource, TriVertex};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
