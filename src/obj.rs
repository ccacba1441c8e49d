use std::fs;
use std::path::Path;

use log::{debug, trace};
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::number::complete::double;
use nom::sequence::{pair, preceded, tuple};
use nom::{Finish, IResult};

use crate::error::{Error, RecordError, Result};
use crate::model::*;

/*
    Basic Parsers
*/

fn coordinate(input: &str) -> IResult<&str, f64> {
    double(input)
}

fn index(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

fn to_zero_based(index: i64) -> std::result::Result<usize, RecordError> {
    if index < 1 {
        return Err(RecordError::NonPositiveIndex(index));
    }
    Ok((index - 1) as usize)
}

/*
    Vertex / Vertex Normal
*/

fn parse_coordinate(token: &str) -> std::result::Result<f64, RecordError> {
    all_consuming(coordinate)(token)
        .finish()
        .map(|(_, x)| x)
        .map_err(|_| RecordError::InvalidNumber(token.to_string()))
}

// Shared by `v` and `vn`; anything past the z component is ignored.
fn parse_vector(tokens: &[&str]) -> std::result::Result<Vector3, RecordError> {
    if tokens.len() < 4 {
        return Err(RecordError::TooFewFields {
            expected: 4,
            found: tokens.len(),
        });
    }

    Ok(Vector3::new(
        parse_coordinate(tokens[1])?,
        parse_coordinate(tokens[2])?,
        parse_coordinate(tokens[3])?,
    ))
}

/*
    Face
*/

/// `v/t/n` or `v//n`. The texture index is recognised but never used.
fn face_group(input: &str) -> IResult<&str, (i64, Option<i64>, i64)> {
    tuple((
        index,
        preceded(char('/'), opt(index)),
        preceded(char('/'), index),
    ))(input)
}

/// Returns zero-based `(vertex, normal)` pairs for the first three groups.
fn parse_face(tokens: &[&str]) -> std::result::Result<[(usize, usize); 3], RecordError> {
    if tokens.len() < 4 {
        return Err(RecordError::TooFewFields {
            expected: 4,
            found: tokens.len(),
        });
    }

    let mut corners = [(0, 0); 3];
    for (corner, &token) in corners.iter_mut().zip(&tokens[1..4]) {
        let (_, (vertex, _texture, normal)) = all_consuming(face_group)(token)
            .finish()
            .map_err(|_| RecordError::InvalidFaceGroup(token.to_string()))?;
        *corner = (to_zero_based(vertex)?, to_zero_based(normal)?);
    }

    Ok(corners)
}

/*
    Lines
*/

fn parse_line(mesh: &mut ObjMesh, line: &str) -> std::result::Result<(), RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.first() {
        Some(&"v") => mesh.vertices.push(parse_vector(&tokens)?),
        Some(&"vn") => mesh.normals.push(parse_vector(&tokens)?),
        Some(&"f") => {
            let corners = parse_face(&tokens)?;
            let mut triangle = [0; 3];
            for (slot, &(vertex, normal)) in triangle.iter_mut().zip(corners.iter()) {
                *slot = vertex;
                match mesh.vertex_normals.insert(vertex, normal) {
                    Some(previous) if previous != normal => trace!(
                        "vertex {} re-associated from normal {} to normal {}",
                        vertex,
                        previous,
                        normal
                    ),
                    _ => {}
                }
            }
            mesh.triangles.push(triangle);
        }
        _ => {}
    }

    Ok(())
}

fn parse_lines<I, S>(lines: I) -> Result<ObjMesh>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mesh = ObjMesh::default();

    for (number, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        parse_line(&mut mesh, line).map_err(|source| Error::MalformedRecord {
            line: number + 1,
            content: line.trim().to_string(),
            source,
        })?;
    }

    debug!(
        "parsed {} vertices, {} normals, {} triangles ({} vertices paired with a normal)",
        mesh.vertices.len(),
        mesh.normals.len(),
        mesh.triangles.len(),
        mesh.vertex_normals.len()
    );

    Ok(mesh)
}

pub fn parse_obj_file(data: &str) -> Result<ObjMesh> {
    parse_lines(data.lines())
}

/// Like [`parse_obj_file`], but decodes each line on its own. Bytes that are
/// not UTF-8 only matter when they land in a `v`, `vn` or `f` record, where
/// they fail to parse as numbers.
pub fn parse_obj_bytes(data: &[u8]) -> Result<ObjMesh> {
    parse_lines(data.split(|&b| b == b'\n').map(String::from_utf8_lossy))
}

/// Reads the whole file before parsing any of it.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<ObjMesh> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    parse_obj_bytes(&data)
}
