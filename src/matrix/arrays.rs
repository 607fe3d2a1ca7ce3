//! Dense attribute exports: positions, faces, normals.

use nalgebra::{DMatrix, Point3, Vector3};

use crate::mesh::TriMeshSource;

/// Convert a 3D point into its coordinate vector.
///
/// Trivial adapter between the point type at the mesh seam and the row form
/// the matrix exports use.
#[inline]
pub fn vector_from_point(p: &Point3<f64>) -> Vector3<f64> {
    p.coords
}

/// Export vertex positions and face corner indices as dense matrices.
///
/// Returns `(vertices, faces)` where `vertices` is V×3 (`f64`) and `faces`
/// is F×3 (`i32`, 0-based vertex IDs in winding order). An empty mesh
/// yields 0×3 matrices.
///
/// # Panics
/// Panics if a face references a vertex ID outside `0..num_vertices()`.
/// That is a defect in the mesh container, not a runtime input condition,
/// and silently emitting it would corrupt every downstream relation.
pub fn mesh_matrices<M: TriMeshSource>(mesh: &M) -> (DMatrix<f64>, DMatrix<i32>) {
    let vn = mesh.num_vertices();
    let fn_ = mesh.num_faces();

    let mut vertices = DMatrix::zeros(vn, 3);
    for v in 0..vn {
        let c = vector_from_point(&mesh.position(v));
        vertices.row_mut(v).copy_from(&c.transpose());
    }

    let mut faces = DMatrix::zeros(fn_, 3);
    for f in 0..fn_ {
        let tri = mesh.face_triangle(f);
        for (j, &v) in tri.iter().enumerate() {
            assert!(v < vn, "face {} references vertex {} out of range {}", f, v, vn);
            faces[(f, j)] = v as i32;
        }
    }

    (vertices, faces)
}

/// Export stored vertex and face normals as dense matrices.
///
/// Returns `(vertex_normals, face_normals)`, V×3 and F×3 (`f64`). Normals
/// are read as stored; nothing is recomputed here. Run the container's
/// normal update first if positions have changed.
pub fn normal_matrices<M: TriMeshSource>(mesh: &M) -> (DMatrix<f64>, DMatrix<f64>) {
    let vn = mesh.num_vertices();
    let fn_ = mesh.num_faces();

    let mut vertex_normals = DMatrix::zeros(vn, 3);
    for v in 0..vn {
        vertex_normals.row_mut(v).copy_from(&mesh.vertex_normal(v).transpose());
    }

    let mut face_normals = DMatrix::zeros(fn_, 3);
    for f in 0..fn_ {
        face_normals.row_mut(f).copy_from(&mesh.face_normal(f).transpose());
    }

    (vertex_normals, face_normals)
}
