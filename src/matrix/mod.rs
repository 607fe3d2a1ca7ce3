//! Dense matrix views of a triangle mesh.
//!
//! This module converts a mesh, read through
//! [`TriMeshSource`](crate::mesh::TriMeshSource), into the dense `nalgebra`
//! matrices a numeric pipeline consumes, and reconstructs edge-level
//! connectivity from nothing but the face list.
//!
//! # Conventions
//!
//! All integer matrices hold 0-based element IDs; `-1` is the only sentinel
//! and marks "absent" (no neighbor face, no right face). Every export is a
//! read-only snapshot of the mesh at call time: editing the mesh invalidates
//! previously produced matrices, which must be recomputed from scratch.
//!
//! # Overview
//!
//! - [`mesh_matrices`] / [`normal_matrices`]: per-vertex and per-face
//!   attributes as V×3 / F×3 matrices.
//! - [`face_face_matrices`]: re-export of the container-maintained face-face
//!   topology as the `FFp`/`FFi` matrix pair.
//! - [`edge_adjacency`] / [`mesh_edge_adjacency`]: the edge set and its
//!   `EV`/`FE`/`EF` relations, reconstructed by a global sort/merge over all
//!   triangle-edge incidences.
//!
//! ```
//! use trimat::mesh::TriMesh;
//! use trimat::matrix::{mesh_matrices, mesh_edge_adjacency};
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let mesh = TriMesh::from_triangles(&positions, &[[0, 1, 2]]).unwrap();
//!
//! let (vertices, faces) = mesh_matrices(&mesh);
//! assert_eq!(vertices.nrows(), 3);
//! assert_eq!(faces.nrows(), 1);
//!
//! let adj = mesh_edge_adjacency(&mesh).unwrap();
//! assert_eq!(adj.ev.nrows(), 3); // a lone triangle has three edges
//! ```

mod adjacency;
mod arrays;

pub use adjacency::{edge_adjacency, face_face_matrices, mesh_edge_adjacency, EdgeAdjacency, FaceFaceMatrices};
pub use arrays::{mesh_matrices, normal_matrices, vector_from_point};
