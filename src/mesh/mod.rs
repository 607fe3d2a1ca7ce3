//! Mesh container and the read interface consumed by the converters.
//!
//! The conversion routines in [`crate::matrix`] never depend on a concrete
//! mesh type; they consume the narrow [`TriMeshSource`] read interface.
//! This module provides that trait along with [`TriMesh`], a minimal indexed
//! triangle-mesh container implementing it.
//!
//! # Construction
//!
//! ```
//! use trimat::mesh::TriMesh;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh = TriMesh::from_triangles(&positions, &faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! ```

mod source;
mod trimesh;

pub use source::TriMeshSource;
pub use trimesh::{TriFace, TriMesh, TriVertex};
