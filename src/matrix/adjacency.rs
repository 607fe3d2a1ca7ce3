//! Face-face topology export and edge-adjacency reconstruction.
//!
//! Two adjacency products live here. [`face_face_matrices`] is a direct
//! re-export of topology the mesh container already maintains. The
//! edge-level relations have no counterpart in the container at all:
//! [`edge_adjacency`] reconstructs them from nothing but the face list, by
//! sorting all 3F triangle-edge incidences so that the two uses of a shared
//! edge land next to each other, then merging equal-key runs in one scan.

use nalgebra::DMatrix;
use rayon::prelude::*;

use super::arrays::mesh_matrices;
use crate::error::{MeshError, Result};
use crate::mesh::TriMeshSource;

/// Below this many incidence records the sequential sort wins; above it the
/// records are sorted in parallel. Either path produces the same order.
const PAR_SORT_CUTOFF: usize = 1 << 14;

/// Face-face adjacency as a dense matrix pair.
///
/// Row `f`, column `j` describes the neighbor across face `f`'s local edge
/// slot `j`: `ffp` holds the neighbor face ID and `ffi` the neighbor's
/// matching slot, or -1 in both where no neighbor is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceFaceMatrices {
    /// F×3 neighbor face IDs (-1 = no neighbor).
    pub ffp: DMatrix<i32>,
    /// F×3 neighbor local slots (-1 = no neighbor).
    pub ffi: DMatrix<i32>,
}

/// Edge-level connectivity of a triangle mesh.
///
/// Edge IDs are assigned in the order edges are discovered during the
/// sorted merge scan; they are deterministic for a given face matrix but
/// carry no geometric meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAdjacency {
    /// E×2 endpoint vertex IDs. `ev[(e, 0)] → ev[(e, 1)]` is the direction
    /// in which the left face [`ef`](Self::ef)`[(e, 0)]` traverses the edge.
    pub ev: DMatrix<i32>,
    /// F×3 global edge IDs: row `f`, column `k` is the edge between face
    /// `f`'s corners `k` and `k + 1 mod 3`. Fully populated on success.
    pub fe: DMatrix<i32>,
    /// E×2 incident face IDs, left then right relative to the `ev`
    /// direction. The right column is -1 for boundary edges.
    pub ef: DMatrix<i32>,
}

impl EdgeAdjacency {
    /// Number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.ev.nrows()
    }

    /// Whether edge `e` borders exactly one face.
    #[inline]
    pub fn is_boundary_edge(&self, e: usize) -> bool {
        self.ef[(e, 1)] < 0
    }
}

/// Export the container-maintained face-face topology.
///
/// Invokes the container's (idempotent) topology rebuild once, then reads
/// every face/slot link out into the `FFp`/`FFi` pair. Fails if the rebuild
/// rejects the mesh as non-manifold. Contrast with [`edge_adjacency`], which
/// reconstructs adjacency instead of re-exporting it.
pub fn face_face_matrices<M: TriMeshSource>(mesh: &mut M) -> Result<FaceFaceMatrices> {
    mesh.rebuild_face_face()?;

    let fn_ = mesh.num_faces();
    let mut ffp = DMatrix::from_element(fn_, 3, -1i32);
    let mut ffi = DMatrix::from_element(fn_, 3, -1i32);

    for f in 0..fn_ {
        for j in 0..3 {
            if let Some((nf, ns)) = mesh.face_face(f, j) {
                assert!(nf < fn_, "face {} slot {} links to face {} out of range {}", f, j, nf, fn_);
                ffp[(f, j)] = nf as i32;
                ffi[(f, j)] = ns as i32;
            }
        }
    }

    Ok(FaceFaceMatrices { ffp, ffi })
}

/// Reconstruct edge adjacency from an F×3 face matrix.
///
/// The mesh must be edge-manifold: every undirected vertex pair may occur as
/// a triangle edge at most twice. On success every `fe` entry is a valid
/// edge ID, every `ef` left column is a real face traversing the edge in
/// `ev` order, and rerunning on the same matrix yields bit-identical output.
/// On failure no partial result is returned.
///
/// # Errors
/// [`MeshError::NonManifoldEdge`] when three or more faces share an edge;
/// [`MeshError::InconsistentWinding`] when the two faces of an interior edge
/// traverse it in the same direction.
///
/// # Panics
/// Panics if `faces` does not have exactly three columns.
pub fn edge_adjacency(faces: &DMatrix<i32>) -> Result<EdgeAdjacency> {
    assert_eq!(faces.ncols(), 3, "face matrix must be F x 3");
    let fn_ = faces.nrows();

    // One record per face corner: undirected key, then source face and slot.
    // The trailing fields make the sort a total order, so the output never
    // depends on sort implementation details.
    let mut records: Vec<(i32, i32, usize, usize)> = Vec::with_capacity(fn_ * 3);
    for f in 0..fn_ {
        for i in 0..3 {
            let v0 = faces[(f, i)];
            let v1 = faces[(f, (i + 1) % 3)];
            let (a, b) = if v0 < v1 { (v0, v1) } else { (v1, v0) };
            records.push((a, b, f, i));
        }
    }

    if records.len() >= PAR_SORT_CUTOFF {
        records.par_sort_unstable();
    } else {
        records.sort_unstable();
    }

    // Count equal-key runs first so the matrices are sized exactly up front.
    let mut en = usize::from(!records.is_empty());
    for w in records.windows(2) {
        if (w[0].0, w[0].1) != (w[1].0, w[1].1) {
            en += 1;
        }
    }

    let mut ev = DMatrix::from_element(en, 2, -1i32);
    let mut fe = DMatrix::from_element(fn_, 3, -1i32);
    let mut ef = DMatrix::from_element(en, 2, -1i32);

    let mut e = 0;
    let mut i = 0;
    while i < records.len() {
        let (a, b, f1, s1) = records[i];
        let mut j = i + 1;
        while j < records.len() && records[j].0 == a && records[j].1 == b {
            j += 1;
        }
        match j - i {
            1 => {
                // Boundary edge.
                ev[(e, 0)] = a;
                ev[(e, 1)] = b;
                ef[(e, 0)] = f1 as i32;
                fe[(f1, s1)] = e as i32;
            }
            2 => {
                // Shared interior edge; both faces recorded in scan order.
                let (_, _, f2, s2) = records[i + 1];
                ev[(e, 0)] = a;
                ev[(e, 1)] = b;
                ef[(e, 0)] = f1 as i32;
                ef[(e, 1)] = f2 as i32;
                fe[(f1, s1)] = e as i32;
                fe[(f2, s2)] = e as i32;
            }
            _ => {
                return Err(MeshError::NonManifoldEdge {
                    v0: a as usize,
                    v1: b as usize,
                })
            }
        }
        e += 1;
        i = j;
    }

    orient_edge_faces(faces, &mut ev, &mut ef)?;

    Ok(EdgeAdjacency { ev, fe, ef })
}

/// Make `ef[(e, 0)]` the face that traverses edge `e` in `ev` order.
///
/// The merge scan records faces in sorted-scan order, which says nothing
/// about winding. For an interior edge whose second face is the forward one,
/// the two `ef` columns are swapped. A boundary edge whose only face runs
/// against the min-first key has its `ev` row reversed instead, so the left
/// column always holds a real face; the min-first form is a sort key, not an
/// output guarantee.
fn orient_edge_faces(faces: &DMatrix<i32>, ev: &mut DMatrix<i32>, ef: &mut DMatrix<i32>) -> Result<()> {
    for e in 0..ev.nrows() {
        let left = ef[(e, 0)] as usize;
        if traverses_forward(faces, left, ev[(e, 0)], ev[(e, 1)]) {
            continue;
        }

        if ef[(e, 1)] >= 0 {
            let other = ef[(e, 1)] as usize;
            if !traverses_forward(faces, other, ev[(e, 0)], ev[(e, 1)]) {
                // Both faces wind the edge the same way; there is no
                // canonical left face to pick.
                return Err(MeshError::InconsistentWinding {
                    v0: ev[(e, 0)] as usize,
                    v1: ev[(e, 1)] as usize,
                });
            }
            ef.swap((e, 0), (e, 1));
        } else {
            ev.swap((e, 0), (e, 1));
        }
    }
    Ok(())
}

/// Whether face `f` has a corner `k` with `(corner k, corner k+1) == (v0, v1)`.
fn traverses_forward(faces: &DMatrix<i32>, f: usize, v0: i32, v1: i32) -> bool {
    (0..3).any(|j| faces[(f, j)] == v0 && faces[(f, (j + 1) % 3)] == v1)
}

/// Reconstruct edge adjacency directly from a mesh.
///
/// Thin adapter over [`edge_adjacency`]: exports the face matrix first, then
/// runs the same reconstruction.
pub fn mesh_edge_adjacency<M: TriMeshSource>(mesh: &M) -> Result<EdgeAdjacency> {
    let (_, faces) = mesh_matrices(mesh);
    edge_adjacency(&faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::TriMesh;
    use nalgebra::Point3;

    fn face_matrix(faces: &[[i32; 3]]) -> DMatrix<i32> {
        DMatrix::from_fn(faces.len(), 3, |r, c| faces[r][c])
    }

    /// Checks the invariants every successful reconstruction must satisfy.
    fn assert_relations_consistent(faces: &DMatrix<i32>, adj: &EdgeAdjacency) {
        // FE is fully populated and agrees with EV on endpoints.
        for f in 0..faces.nrows() {
            for k in 0..3 {
                let e = adj.fe[(f, k)];
                assert!(e >= 0, "fe[({}, {})] unset", f, k);
                let e = e as usize;
                let mut edge = [adj.ev[(e, 0)], adj.ev[(e, 1)]];
                let mut expect = [faces[(f, k)], faces[(f, (k + 1) % 3)]];
                edge.sort_unstable();
                expect.sort_unstable();
                assert_eq!(edge, expect, "fe[({}, {})] maps to the wrong edge", f, k);
            }
        }

        // The left face of every edge traverses it in EV order.
        for e in 0..adj.num_edges() {
            let f = adj.ef[(e, 0)];
            assert!(f >= 0, "ef[({}, 0)] has no face", e);
            assert!(
                traverses_forward(faces, f as usize, adj.ev[(e, 0)], adj.ev[(e, 1)]),
                "ef[({}, 0)] does not traverse edge forward",
                e
            );
        }
    }

    #[test]
    fn test_single_triangle() {
        let faces = face_matrix(&[[0, 1, 2]]);
        let adj = edge_adjacency(&faces).unwrap();

        assert_eq!(adj.num_edges(), 3);
        for e in 0..3 {
            assert_eq!(adj.ef[(e, 0)], 0);
            assert_eq!(adj.ef[(e, 1)], -1);
            assert!(adj.is_boundary_edge(e));
        }
        assert_relations_consistent(&faces, &adj);
    }

    #[test]
    fn test_split_square() {
        let faces = face_matrix(&[[0, 1, 2], [0, 2, 3]]);
        let adj = edge_adjacency(&faces).unwrap();

        assert_eq!(adj.num_edges(), 5);

        let interior: Vec<usize> = (0..5).filter(|&e| !adj.is_boundary_edge(e)).collect();
        assert_eq!(interior.len(), 1);

        let e = interior[0];
        let mut endpoints = [adj.ev[(e, 0)], adj.ev[(e, 1)]];
        endpoints.sort_unstable();
        assert_eq!(endpoints, [0, 2]); // the diagonal

        let mut incident = [adj.ef[(e, 0)], adj.ef[(e, 1)]];
        incident.sort_unstable();
        assert_eq!(incident, [0, 1]);

        assert_relations_consistent(&faces, &adj);
    }

    #[test]
    fn test_closed_tetrahedron() {
        let faces = face_matrix(&[[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]);
        let adj = edge_adjacency(&faces).unwrap();

        // Closed mesh: |E| = 3|F|/2, every edge interior.
        assert_eq!(adj.num_edges(), 6);
        for e in 0..6 {
            assert!(adj.ef[(e, 0)] >= 0);
            assert!(adj.ef[(e, 1)] >= 0);
        }
        assert_relations_consistent(&faces, &adj);
    }

    #[test]
    fn test_edge_count_bound() {
        // Two triangles with no shared edge: the 3F bound is tight.
        let faces = face_matrix(&[[0, 1, 2], [3, 4, 5]]);
        let adj = edge_adjacency(&faces).unwrap();
        assert_eq!(adj.num_edges(), 6);
        assert_relations_consistent(&faces, &adj);
    }

    #[test]
    fn test_empty_face_matrix() {
        let faces = DMatrix::<i32>::zeros(0, 3);
        let adj = edge_adjacency(&faces).unwrap();
        assert_eq!(adj.ev.shape(), (0, 2));
        assert_eq!(adj.fe.shape(), (0, 3));
        assert_eq!(adj.ef.shape(), (0, 2));
    }

    #[test]
    fn test_idempotent() {
        let faces = face_matrix(&[[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]);
        let first = edge_adjacency(&faces).unwrap();
        let second = edge_adjacency(&faces).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_manifold_edge_rejected() {
        // Three triangles all sharing the edge 0-1.
        let faces = face_matrix(&[[0, 1, 2], [1, 0, 3], [0, 1, 4]]);
        assert!(matches!(
            edge_adjacency(&faces),
            Err(MeshError::NonManifoldEdge { v0: 0, v1: 1 })
        ));
    }

    #[test]
    fn test_inconsistent_winding_rejected() {
        // Both faces traverse 1 -> 0, so neither can be the left face of
        // the shared edge.
        let faces = face_matrix(&[[1, 0, 2], [1, 0, 3]]);
        assert!(matches!(
            edge_adjacency(&faces),
            Err(MeshError::InconsistentWinding { .. })
        ));
    }

    #[test]
    fn test_mesh_entry_point_matches_core() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let mesh = TriMesh::from_triangles(&positions, &faces).unwrap();

        let from_mesh = mesh_edge_adjacency(&mesh).unwrap();
        let (_, exported_faces) = mesh_matrices(&mesh);
        let from_matrix = edge_adjacency(&exported_faces).unwrap();
        assert_eq!(from_mesh, from_matrix);
    }

    #[test]
    fn test_face_face_matrices() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mut mesh = TriMesh::from_triangles(&positions, &[[0, 1, 2], [0, 2, 3]]).unwrap();
        let ff = face_face_matrices(&mut mesh).unwrap();

        assert_eq!(ff.ffp.shape(), (2, 3));
        assert_eq!(ff.ffi.shape(), (2, 3));

        // The diagonal 0-2 is face 0's slot 2 and face 1's slot 0.
        assert_eq!(ff.ffp[(0, 2)], 1);
        assert_eq!(ff.ffi[(0, 2)], 0);
        assert_eq!(ff.ffp[(1, 0)], 0);
        assert_eq!(ff.ffi[(1, 0)], 2);

        // Everything else is boundary.
        for &(f, j) in &[(0, 0), (0, 1), (1, 1), (1, 2)] {
            assert_eq!(ff.ffp[(f, j)], -1);
            assert_eq!(ff.ffi[(f, j)], -1);
        }
    }

    #[test]
    fn test_face_face_matrices_rejects_non_manifold() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, -1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let faces = vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]];
        let mut mesh = TriMesh::from_triangles(&positions, &faces).unwrap();
        assert!(matches!(
            face_face_matrices(&mut mesh),
            Err(MeshError::NonManifoldEdge { .. })
        ));
    }

    #[test]
    fn test_boundary_face_on_right_reverses_edge() {
        // In face [0, 1, 2] the boundary edge between vertices 0 and 2 is
        // traversed 2 -> 0, against the min-first key. The builder must keep
        // the face in the left column and flip EV instead.
        let faces = face_matrix(&[[0, 1, 2]]);
        let adj = edge_adjacency(&faces).unwrap();

        let e = (0..3)
            .find(|&e| {
                let mut p = [adj.ev[(e, 0)], adj.ev[(e, 1)]];
                p.sort_unstable();
                p == [0, 2]
            })
            .unwrap();
        assert_eq!(adj.ev[(e, 0)], 2);
        assert_eq!(adj.ev[(e, 1)], 0);
        assert_eq!(adj.ef[(e, 0)], 0);
        assert_eq!(adj.ef[(e, 1)], -1);
    }

    #[test]
    fn test_grid_boundary_counts() {
        // 3x3 quad grid split into triangles: 16 vertices, 18 faces,
        // 33 edges of which 12 lie on the outer boundary.
        let n = 3;
        let mut faces = Vec::new();
        for j in 0..n {
            for i in 0..n {
                let v00 = (j * (n + 1) + i) as i32;
                let v10 = v00 + 1;
                let v01 = v00 + (n as i32 + 1);
                let v11 = v01 + 1;
                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }
        let faces = face_matrix(&faces);
        let adj = edge_adjacency(&faces).unwrap();

        assert_eq!(adj.num_edges(), 33);
        let boundary = (0..33).filter(|&e| adj.is_boundary_edge(e)).count();
        assert_eq!(boundary, 12);
        assert_relations_consistent(&faces, &adj);
    }
}
