//! End-to-end file tests: write real STL files to disk, read them back,
//! and check byte layout, round-trip fidelity, and the normal-fix flow.

use glam::vec3;
use sol_stl::{
    fix_first_normal, read_stl_file, write_stl_file, StlModel, Triangle, COUNT_SIZE, HEADER_SIZE,
    TRIANGLE_SIZE,
};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

fn vec3_approx_eq(a: glam::Vec3, b: glam::Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn quad() -> Vec<Triangle> {
    vec![
        Triangle::new(
            vec3(0.0, 0.0, 1.0),
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(1.0, 1.0, 0.0),
        ),
        Triangle::new(
            vec3(0.0, 0.0, 1.0),
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 1.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        ),
    ]
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quad.stl");

    let model = StlModel::from_triangles(quad());
    write_stl_file(&model, &path).unwrap();

    let on_disk = std::fs::metadata(&path).unwrap().len() as usize;
    assert_eq!(on_disk, HEADER_SIZE + COUNT_SIZE + 2 * TRIANGLE_SIZE);

    let parsed = read_stl_file(&path).unwrap();
    assert_eq!(parsed.source_path(), Some(path.as_path()));
    assert_eq!(parsed.triangles, model.triangles);
}

#[test]
fn test_round_trip_after_mutation() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.stl");
    let second = dir.path().join("second.stl");

    write_stl_file(&StlModel::from_triangles(quad()), &first).unwrap();

    // Grow the parsed model; the re-encoded count must follow.
    let mut model = read_stl_file(&first).unwrap();
    model.triangles.push(Triangle::new(
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, 0.0, 0.0),
        vec3(1.0, 0.0, 1.0),
        vec3(0.0, 0.0, 1.0),
    ));
    write_stl_file(&model, &second).unwrap();

    let reparsed = read_stl_file(&second).unwrap();
    assert_eq!(reparsed.triangle_count(), 3);
    assert_eq!(reparsed.triangles, model.triangles);
}

#[test]
fn test_single_triangle_file_scenario() {
    // Header bytes ignored, count = 1, one record with known vectors.
    let mut bytes = vec![0x55u8; HEADER_SIZE];
    bytes.extend_from_slice(&1u32.to_le_bytes());
    for v in [
        vec3(0.0, 0.0, 1.0),
        vec3(1.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, 0.0, 0.0),
    ] {
        bytes.extend_from_slice(&v.x.to_le_bytes());
        bytes.extend_from_slice(&v.y.to_le_bytes());
        bytes.extend_from_slice(&v.z.to_le_bytes());
    }
    bytes.extend_from_slice(&[0u8; 2]);

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let model = read_stl_file(file.path()).unwrap();
    assert_eq!(model.triangle_count(), 1);
    let t = model.triangles[0];
    assert_eq!(t.normal, vec3(0.0, 0.0, 1.0));
    assert_eq!(t.p0, vec3(1.0, 0.0, 0.0));
    assert_eq!(t.p1, vec3(0.0, 1.0, 0.0));
    assert_eq!(t.p2, vec3(0.0, 0.0, 0.0));

    // Re-encode and re-parse: same triangle comes back.
    let dir = tempdir().unwrap();
    let copy = dir.path().join("copy.stl");
    write_stl_file(&model, &copy).unwrap();
    let again = read_stl_file(&copy).unwrap();
    assert_eq!(again.triangles, model.triangles);
}

#[test]
fn test_truncated_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    // 80-byte header plus a count of 4, but no records follow.
    file.write_all(&[0u8; HEADER_SIZE]).unwrap();
    file.write_all(&4u32.to_le_bytes()).unwrap();
    file.flush().unwrap();

    assert!(read_stl_file(file.path()).is_err());
}

#[test]
fn test_fix_first_normal_flow() {
    // The normal-fix command's whole pipeline: parse, correct the first
    // triangle's normal, write, re-parse.
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.stl");
    let output = dir.path().join("out.stl");

    let triangles = vec![
        Triangle::new(
            vec3(0.2, 0.0, 0.4),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, 0.0, 0.0),
        ),
        Triangle::new(
            vec3(9.0, 9.0, 9.0),
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 1.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        ),
    ];
    write_stl_file(&StlModel::from_triangles(triangles), &input).unwrap();

    let mut model = read_stl_file(&input).unwrap();
    fix_first_normal(&mut model).unwrap();
    write_stl_file(&model, &output).unwrap();

    let fixed = read_stl_file(&output).unwrap();
    assert_eq!(fixed.triangle_count(), 2);
    // p0 x p1 = (0,0,1), same hemisphere as the stored normal.
    assert!(vec3_approx_eq(
        fixed.triangles[0].normal,
        vec3(0.0, 0.0, 1.0)
    ));
    // Second triangle is untouched.
    assert!(vec3_approx_eq(
        fixed.triangles[1].normal,
        vec3(9.0, 9.0, 9.0)
    ));

    let bb = fixed.bounding_box().unwrap();
    assert!(vec3_approx_eq(bb.min, vec3(0.0, 0.0, 0.0)));
    assert!(vec3_approx_eq(bb.max, vec3(1.0, 1.0, 0.0)));
}
