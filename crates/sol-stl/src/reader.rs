use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use sol_core::{Result, SolError};
use sol_math::Vector3;
use tracing::debug;

use crate::mesh::{StlModel, Triangle};
use crate::{COUNT_SIZE, HEADER_SIZE, TRIANGLE_SIZE, VECTOR_SIZE};

/// Upper bound on triangles pre-allocated from the declared count. The
/// count field is untrusted until the records actually arrive; a
/// truncated file must surface a `Format` error, not an allocation
/// failure.
const PREALLOC_TRIANGLE_LIMIT: usize = 65_536;

/// Parse a binary STL file into a model.
///
/// The file handle lives only for the duration of this call; it is closed
/// on every exit path, error paths included.
pub fn read_stl_file<P: AsRef<Path>>(path: P) -> Result<StlModel> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let triangles = decode_stl(&mut reader)?;
    Ok(StlModel::from_file(path.to_path_buf(), triangles))
}

/// Decode a binary STL byte stream into triangles, in file order.
///
/// Fails with a `Format` error if the stream ends before the header, the
/// count field, or any declared triangle record is complete; nothing
/// partial is returned.
pub fn decode_stl<R: Read>(reader: &mut R) -> Result<Vec<Triangle>> {
    // Header content is discarded.
    let mut header = [0u8; HEADER_SIZE];
    read_block(reader, &mut header, "header")?;

    let mut count_bytes = [0u8; COUNT_SIZE];
    read_block(reader, &mut count_bytes, "triangle count")?;
    let count = u32::from_le_bytes(count_bytes);

    let mut triangles = Vec::with_capacity((count as usize).min(PREALLOC_TRIANGLE_LIMIT));
    let mut record = [0u8; TRIANGLE_SIZE];
    for _ in 0..count {
        read_block(reader, &mut record, "triangle record")?;
        triangles.push(triangle_from_record(&record));
    }

    debug!(triangles = triangles.len(), "decoded binary STL");
    Ok(triangles)
}

fn read_block<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => SolError::Format(format!("truncated STL: short {what}")),
        _ => SolError::Io(e),
    })
}

fn triangle_from_record(record: &[u8; TRIANGLE_SIZE]) -> Triangle {
    // Four vector blocks back to back; the trailing 2 attribute bytes
    // are not read.
    let normal = vec3_from_le(&record[0..VECTOR_SIZE]);
    let p0 = vec3_from_le(&record[VECTOR_SIZE..2 * VECTOR_SIZE]);
    let p1 = vec3_from_le(&record[2 * VECTOR_SIZE..3 * VECTOR_SIZE]);
    let p2 = vec3_from_le(&record[3 * VECTOR_SIZE..4 * VECTOR_SIZE]);
    Triangle::new(normal, p0, p1, p2)
}

fn vec3_from_le(b: &[u8]) -> Vector3 {
    let x = f32::from_le_bytes([b[0], b[1], b[2], b[3]]);
    let y = f32::from_le_bytes([b[4], b[5], b[6], b[7]]);
    let z = f32::from_le_bytes([b[8], b[9], b[10], b[11]]);
    Vector3::new(x, y, z)
}
