use std::collections::HashMap;

use cgmath::Vector3 as CgVector3;

pub type Vector3 = CgVector3<f64>;

/// Zero-based indices into the vertex list, in input winding order.
pub type Triangle = [usize; 3];

/// Vertex index to normal index, as last observed in a face record.
pub type VertexNormalMap = HashMap<usize, usize>;

/// Everything the OBJ parser accumulates in one pass.
#[derive(Debug, Default)]
pub struct ObjMesh {
    pub vertices: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub triangles: Vec<Triangle>,
    pub vertex_normals: VertexNormalMap,
}

/// A mesh ready to be written as `.msh`: axes already remapped and one
/// normal per vertex.
#[derive(Debug)]
pub struct MshMesh {
    pub vertices: Vec<Vector3>,
    pub triangles: Vec<Triangle>,
    pub normals: Vec<Vector3>,
}

/// Maps `(x, y, z)` to `(x, -z, y)`.
pub fn to_msh_axes(v: Vector3) -> Vector3 {
    Vector3::new(v.x, -v.z, v.y)
}
