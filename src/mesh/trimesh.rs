//! A minimal indexed triangle-mesh container.
//!
//! [`TriMesh`] stores vertices and faces in flat vectors; element IDs are
//! positions in those vectors. It maintains per-element normals and
//! face-face adjacency links on request, which is exactly the state the
//! converters in [`crate::matrix`] read through [`TriMeshSource`].

use nalgebra::{Point3, Vector3};

use super::source::TriMeshSource;
use crate::error::{MeshError, Result};

/// A vertex: position plus stored normal.
#[derive(Debug, Clone)]
pub struct TriVertex {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// The stored vertex normal. Zero until [`TriMesh::update_normals`] runs.
    pub normal: Vector3<f64>,
}

impl TriVertex {
    /// Create a new vertex at the given position with a zero normal.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
        }
    }
}

/// A triangle face: corner vertex IDs in winding order plus stored normal.
#[derive(Debug, Clone)]
pub struct TriFace {
    /// The three corner vertex IDs, in winding order.
    pub vertices: [usize; 3],

    /// The stored face normal. Zero until [`TriMesh::update_normals`] runs.
    pub normal: Vector3<f64>,

    /// Face-face links per local edge slot: `(neighbor face, neighbor slot)`,
    /// `None` where no neighbor is recorded.
    pub(crate) ff: [Option<(usize, usize)>; 3],
}

impl TriFace {
    /// Create a new face from corner vertex IDs, with no normal or topology.
    pub fn new(vertices: [usize; 3]) -> Self {
        Self {
            vertices,
            normal: Vector3::zeros(),
            ff: [None; 3],
        }
    }
}

/// An indexed triangle mesh with stored normals and face-face topology.
///
/// IDs are 0-based storage positions, so the matrix converters can emit them
/// directly without any per-element lookup table.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    vertices: Vec<TriVertex>,
    faces: Vec<TriFace>,
}

impl TriMesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from vertex positions and triangle faces.
    ///
    /// Every face must reference in-range vertex IDs and have three distinct
    /// corners. An empty mesh (no vertices, no faces) is valid.
    ///
    /// # Example
    /// ```
    /// use trimat::mesh::TriMesh;
    /// use nalgebra::Point3;
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.5, 1.0, 0.0),
    /// ];
    /// let mesh = TriMesh::from_triangles(&positions, &[[0, 1, 2]]).unwrap();
    /// assert_eq!(mesh.num_faces(), 1);
    /// ```
    pub fn from_triangles(positions: &[Point3<f64>], faces: &[[usize; 3]]) -> Result<Self> {
        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi >= positions.len() {
                    return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        Ok(Self {
            vertices: positions.iter().map(|&p| TriVertex::new(p)).collect(),
            faces: faces.iter().map(|&f| TriFace::new(f)).collect(),
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, v: usize) -> &TriVertex {
        &self.vertices[v]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, f: usize) -> &TriFace {
        &self.faces[f]
    }

    /// Positions of the three corners of face `f`.
    pub fn face_positions(&self, f: usize) -> [Point3<f64>; 3] {
        let [v0, v1, v2] = self.faces[f].vertices;
        [
            self.vertices[v0].position,
            self.vertices[v1].position,
            self.vertices[v2].position,
        ]
    }

    /// Recompute stored face and vertex normals from current positions.
    ///
    /// Face normals follow the winding order; vertex normals are the
    /// normalized area-weighted sum of incident face normals.
    pub fn update_normals(&mut self) {
        for v in &mut self.vertices {
            v.normal = Vector3::zeros();
        }

        for f in 0..self.faces.len() {
            let [p0, p1, p2] = self.face_positions(f);
            let weighted = (p1 - p0).cross(&(p2 - p0)); // area-weighted
            self.faces[f].normal = weighted.normalize();
            for &v in &self.faces[f].vertices {
                self.vertices[v].normal += weighted;
            }
        }

        for v in &mut self.vertices {
            if v.normal.norm() > 0.0 {
                v.normal.normalize_mut();
            }
        }
    }
}

impl TriMeshSource for TriMesh {
    #[inline]
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    fn position(&self, v: usize) -> Point3<f64> {
        self.vertices[v].position
    }

    #[inline]
    fn vertex_normal(&self, v: usize) -> Vector3<f64> {
        self.vertices[v].normal
    }

    #[inline]
    fn face_triangle(&self, f: usize) -> [usize; 3] {
        self.faces[f].vertices
    }

    #[inline]
    fn face_normal(&self, f: usize) -> Vector3<f64> {
        self.faces[f].normal
    }

    fn rebuild_face_face(&mut self) -> Result<()> {
        for face in &mut self.faces {
            face.ff = [None; 3];
        }

        // One record per directed face edge, keyed by the undirected pair.
        let mut records: Vec<(usize, usize, usize, usize)> =
            Vec::with_capacity(self.faces.len() * 3);
        for (f, face) in self.faces.iter().enumerate() {
            for slot in 0..3 {
                let v0 = face.vertices[slot];
                let v1 = face.vertices[(slot + 1) % 3];
                let (a, b) = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                records.push((a, b, f, slot));
            }
        }
        records.sort_unstable();

        let mut i = 0;
        while i < records.len() {
            let (a, b, f1, s1) = records[i];
            let mut j = i + 1;
            while j < records.len() && records[j].0 == a && records[j].1 == b {
                j += 1;
            }
            match j - i {
                1 => {} // boundary edge, no link
                2 => {
                    let (_, _, f2, s2) = records[i + 1];
                    self.faces[f1].ff[s1] = Some((f2, s2));
                    self.faces[f2].ff[s2] = Some((f1, s1));
                }
                _ => return Err(MeshError::NonManifoldEdge { v0: a, v1: b }),
            }
            i = j;
        }

        Ok(())
    }

    #[inline]
    fn face_face(&self, f: usize, slot: usize) -> Option<(usize, usize)> {
        self.faces[f].ff[slot]
    }
}
