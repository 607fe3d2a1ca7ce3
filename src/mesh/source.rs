//! The read interface the matrix converters consume.

use nalgebra::{Point3, Vector3};

use crate::error::Result;

/// Read access to an indexed triangle mesh.
///
/// This is the complete surface the converters in [`crate::matrix`] depend
/// on: counts, per-element attributes, face corner indices, and the
/// container-maintained face-face topology. Vertex and face IDs are 0-based
/// positions in the container's storage order.
///
/// Implementations must return stable IDs: `face_triangle` entries index the
/// same vertex sequence that `position`/`vertex_normal` read from. A face
/// corner outside `0..vertex_count()` is a container defect, not an input
/// error; the converters assert on it.
pub trait TriMeshSource {
    /// Number of vertices.
    fn num_vertices(&self) -> usize;

    /// Number of triangle faces.
    fn num_faces(&self) -> usize;

    /// Position of vertex `v`.
    fn position(&self, v: usize) -> Point3<f64>;

    /// Stored normal of vertex `v`.
    fn vertex_normal(&self, v: usize) -> Vector3<f64>;

    /// The three corner vertex IDs of face `f`, in winding order.
    fn face_triangle(&self, f: usize) -> [usize; 3];

    /// Stored normal of face `f`.
    fn face_normal(&self, f: usize) -> Vector3<f64>;

    /// Recompute the face-face topology links read by [`face_face`].
    ///
    /// Idempotent; must be invoked after any face edit before the links are
    /// read again. Fails on meshes that are not edge-manifold.
    ///
    /// [`face_face`]: TriMeshSource::face_face
    fn rebuild_face_face(&mut self) -> Result<()>;

    /// The neighbor across face `f`'s edge at local `slot` (0–2), as
    /// `(neighbor face ID, neighbor's matching slot)`.
    ///
    /// Returns `None` when no neighbor is recorded (boundary edge, or
    /// topology not yet built).
    fn face_face(&self, f: usize, slot: usize) -> Option<(usize, usize)>;
}
