pub mod aabb;
pub mod vector;

pub use glam::{vec3, Vec3};
pub use aabb::Aabb3;
pub use vector::{maximum, minimum, normalize};

pub type Point3 = Vec3;
pub type Vector3 = Vec3;
