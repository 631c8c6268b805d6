//! Binary STL codec.
//!
//! A binary STL file is an 80-byte free-form header, a little-endian u32
//! triangle count, and one 50-byte record per triangle: four 12-byte
//! vectors (normal, then three vertices) of little-endian f32 components,
//! followed by a 2-byte attribute count this codec writes as zero and
//! never reads.

pub mod mesh;
pub mod normals;
pub mod reader;
pub mod writer;

pub use mesh::{StlModel, Triangle};
pub use normals::{corrected_normal, fix_all_normals, fix_first_normal};
pub use reader::{decode_stl, read_stl_file};
pub use writer::{encode_stl, write_stl_file};

/// Header length in bytes. The header carries no structure; this codec
/// writes `b"STL"` followed by zero padding and discards it on read.
pub const HEADER_SIZE: usize = 80;
/// Width of the little-endian u32 triangle count field.
pub const COUNT_SIZE: usize = 4;
/// Fixed record length per triangle: 4 vectors of 3 f32 plus 2 attribute bytes.
pub const TRIANGLE_SIZE: usize = 50;
/// One vector block: three little-endian f32 components.
pub const VECTOR_SIZE: usize = 12;
