pub mod point;

pub use glam::{dvec3, DVec3};
pub use point::coincident;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
