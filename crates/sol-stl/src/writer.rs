use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sol_core::{Result, SolError};
use sol_math::Vector3;
use tracing::debug;

use crate::mesh::{StlModel, Triangle};
use crate::{HEADER_SIZE, TRIANGLE_SIZE, VECTOR_SIZE};

/// Write a model to a binary STL file.
///
/// The destination handle is scoped to this call and flushed before it
/// returns; a failed write surfaces immediately with no cleanup of
/// partial output.
pub fn write_stl_file<P: AsRef<Path>>(model: &StlModel, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode_stl(model, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode a model into the binary STL wire format.
pub fn encode_stl<W: Write>(model: &StlModel, writer: &mut W) -> Result<()> {
    let mut header = [0u8; HEADER_SIZE];
    header[..3].copy_from_slice(b"STL");
    writer.write_all(&header)?;

    // The count reflects the triangle list as it is now, not whatever a
    // parsed file once declared.
    let count = u32::try_from(model.triangles.len()).map_err(|_| {
        SolError::Format("triangle count exceeds the binary STL u32 field".to_string())
    })?;
    writer.write_all(&count.to_le_bytes())?;

    for t in &model.triangles {
        writer.write_all(&triangle_record(t))?;
    }

    debug!(triangles = model.triangles.len(), "encoded binary STL");
    Ok(())
}

fn triangle_record(t: &Triangle) -> [u8; TRIANGLE_SIZE] {
    // Zero-initialized, which also fixes the 2 attribute bytes at zero.
    let mut record = [0u8; TRIANGLE_SIZE];
    vec3_to_le(t.normal, &mut record[0..VECTOR_SIZE]);
    vec3_to_le(t.p0, &mut record[VECTOR_SIZE..2 * VECTOR_SIZE]);
    vec3_to_le(t.p1, &mut record[2 * VECTOR_SIZE..3 * VECTOR_SIZE]);
    vec3_to_le(t.p2, &mut record[3 * VECTOR_SIZE..4 * VECTOR_SIZE]);
    record
}

fn vec3_to_le(v: Vector3, out: &mut [u8]) {
    out[0..4].copy_from_slice(&v.x.to_le_bytes());
    out[4..8].copy_from_slice(&v.y.to_le_bytes());
    out[8..12].copy_from_slice(&v.z.to_le_bytes());
}
