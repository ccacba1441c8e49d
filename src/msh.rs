use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};
use crate::model::*;

impl MshMesh {
    /// Remaps axes and picks each vertex's normal through the vertex/normal
    /// map. Every vertex in `0..vertices.len()` must resolve.
    pub fn from_obj(obj: &ObjMesh) -> Result<MshMesh> {
        let normals = (0..obj.vertices.len())
            .map(|vertex| {
                let normal = *obj
                    .vertex_normals
                    .get(&vertex)
                    .ok_or(Error::UnresolvedNormal { vertex })?;
                obj.normals
                    .get(normal)
                    .map(|n| to_msh_axes(*n))
                    .ok_or(Error::NormalIndexOutOfRange {
                        vertex,
                        normal,
                        count: obj.normals.len(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MshMesh {
            vertices: obj.vertices.iter().map(|v| to_msh_axes(*v)).collect(),
            triangles: obj.triangles.clone(),
            normals,
        })
    }
}

fn write_components<W: Write>(mut out: W, v: &Vector3) -> std::io::Result<()> {
    writeln!(out, "{}", v.x)?;
    writeln!(out, "{}", v.y)?;
    writeln!(out, "{}", v.z)
}

/// Writes the mesh as text, one value per line.
pub fn write_msh<W: Write>(mesh: &MshMesh, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{}", mesh.vertices.len())?;
    writeln!(out, "{}", mesh.triangles.len())?;

    writeln!(out, "vertices")?;
    for v in &mesh.vertices {
        write_components(&mut out, v)?;
    }

    writeln!(out, "triangles")?;
    for t in &mesh.triangles {
        for i in t {
            writeln!(out, "{}", i)?;
        }
    }

    writeln!(out, "normals")?;
    for n in &mesh.normals {
        write_components(&mut out, n)?;
    }

    Ok(())
}

/// Creates or truncates `path`. A file left half-written by a failed write
/// is removed.
pub fn save_msh<P: AsRef<Path>>(mesh: &MshMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_or_remove(mesh, file, path)
}

// `out` must be the already-created file at `path`.
fn write_or_remove<W: Write>(mesh: &MshMesh, out: W, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(out);
    let written = write_msh(mesh, &mut out).and_then(|_| out.flush());

    if let Err(e) = written {
        drop(out);
        if let Err(remove) = fs::remove_file(path) {
            warn!("could not remove partial output {}: {}", path.display(), remove);
        }
        return Err(Error::io(path, e));
    }

    Ok(())
}
