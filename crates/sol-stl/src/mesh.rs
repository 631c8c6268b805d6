use std::path::{Path, PathBuf};

use sol_core::{Result, SolError};
use sol_math::{maximum, minimum, Aabb3, Vector3};

/// A single facet: face normal plus three vertices in winding order.
///
/// Nothing ties the normal to the vertices; a parsed triangle may carry a
/// normal inconsistent with its winding (see [`crate::normals`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: Vector3,
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    pub fn new(normal: Vector3, p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self { normal, p0, p1, p2 }
    }
}

/// An ordered triangle soup, as stored in a binary STL file.
///
/// Triangle order is preserved through parse and serialize. The source
/// path is bookkeeping only; it records where a parsed model came from
/// and plays no role in encoding.
#[derive(Debug, Clone, Default)]
pub struct StlModel {
    pub triangles: Vec<Triangle>,
    source: Option<PathBuf>,
}

impl StlModel {
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
            source: None,
        }
    }

    pub(crate) fn from_file(source: PathBuf, triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
            source: Some(source),
        }
    }

    /// Path this model was parsed from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Axis-aligned bounding box over all vertex positions.
    ///
    /// Normals are not considered. Calling this on an empty model is an
    /// `InvalidOperation` error.
    pub fn bounding_box(&self) -> Result<Aabb3> {
        let first = self.triangles.first().ok_or_else(|| {
            SolError::InvalidOperation("bounding box of an empty model".to_string())
        })?;
        let mut min = first.p0;
        let mut max = first.p0;
        for t in &self.triangles {
            min.x = minimum(min.x, &[t.p0.x, t.p1.x, t.p2.x]);
            min.y = minimum(min.y, &[t.p0.y, t.p1.y, t.p2.y]);
            min.z = minimum(min.z, &[t.p0.z, t.p1.z, t.p2.z]);
            max.x = maximum(max.x, &[t.p0.x, t.p1.x, t.p2.x]);
            max.y = maximum(max.y, &[t.p0.y, t.p1.y, t.p2.y]);
            max.z = maximum(max.z, &[t.p0.z, t.p1.z, t.p2.z]);
        }
        Ok(Aabb3::new(min, max))
    }
}
