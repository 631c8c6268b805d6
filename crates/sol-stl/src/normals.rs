use sol_core::Result;
use sol_math::{normalize, Vector3};

use crate::mesh::{StlModel, Triangle};

/// Recompute a triangle's normal from its winding.
///
/// The candidate is `p0 x p1` — the vertex positions themselves, not edge
/// vectors, so the result depends on where the model sits relative to the
/// origin. The candidate is kept when it points into the same hemisphere
/// as the stored normal and negated otherwise, then normalized to unit
/// length. Degenerate windings (candidate of zero length) are an error.
pub fn corrected_normal(t: &Triangle) -> Result<Vector3> {
    let candidate = t.p0.cross(t.p1);
    let oriented = if t.normal.dot(candidate) > 0.0 {
        candidate
    } else {
        -candidate
    };
    normalize(oriented)
}

/// Replace the first triangle's normal with its winding-derived normal.
///
/// An empty model is left untouched.
pub fn fix_first_normal(model: &mut StlModel) -> Result<()> {
    if let Some(first) = model.triangles.first_mut() {
        let normal = corrected_normal(first)?;
        first.normal = normal;
    }
    Ok(())
}

/// Replace every triangle's normal with its winding-derived normal.
pub fn fix_all_normals(model: &mut StlModel) -> Result<()> {
    for t in &mut model.triangles {
        let normal = corrected_normal(t)?;
        t.normal = normal;
    }
    Ok(())
}
