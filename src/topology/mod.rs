//! Connectivity tables over point identifiers.
//!
//! This module provides:
//! - [`MultiMap`], a key → ordered values table with swap-based removal
//! - canonical edge/face keys and adjacency builders in [`connectivity`]
//!
//! Nothing here depends on positions; chains are rebuilt from edges in
//! [`crate::algs::suites`].

pub mod connectivity;
pub mod multimap;

pub use connectivity::{
    connexity, directed_edge_to_face_adjacency, edge_key, oriented_face_key,
    point_to_edge_adjacency, point_to_point_adjacency, rotate_edge_to_start,
    rotate_face_to_start,
};
pub use multimap::MultiMap;
