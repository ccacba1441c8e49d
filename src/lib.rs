//! Converts Wavefront `.obj` triangle meshes into the line-oriented `.msh`
//! format: vertex and triangle counts, then positions, indices and one
//! normal per vertex, with `(x, y, z)` written as `(x, -z, y)`.

mod error;
mod msh;
mod obj;
pub mod model;

use std::path::Path;

use log::info;

pub use self::error::{Error, RecordError, Result};
pub use self::model::{MshMesh, ObjMesh, Triangle, Vector3, VertexNormalMap};
pub use self::msh::{save_msh, write_msh};
pub use self::obj::{load_obj, parse_obj_bytes, parse_obj_file};

/// Converts `.obj` text to `.msh` text.
pub fn convert(obj: &str) -> Result<String> {
    let mesh = MshMesh::from_obj(&parse_obj_file(obj)?)?;

    let mut out = Vec::new();
    write_msh(&mesh, &mut out).map_err(|e| Error::io("<memory>", e))?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Reads `input` completely, resolves every normal, and only then creates
/// `output`. A malformed input never leaves an output file behind.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<MshMesh> {
    let obj = load_obj(input.as_ref())?;
    let mesh = MshMesh::from_obj(&obj)?;
    save_msh(&mesh, output.as_ref())?;

    info!(
        "wrote {} vertices and {} triangles to {}",
        mesh.vertices.len(),
        mesh.triangles.len(),
        output.as_ref().display()
    );

    Ok(mesh)
}
