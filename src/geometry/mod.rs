//! Geometry primitives for mesh-hashing.
//!
//! This module provides the minimal position type and the primitive shapes
//! (points, segments, triangles) that the hashing structures rasterize.

pub mod primitive;
pub mod vec3;

pub use primitive::Primitive;
pub use vec3::Vec3;
