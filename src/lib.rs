#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-hashing
//!
//! mesh-hashing is a spatial indexing and connectivity toolkit for triangle
//! meshes and polylines. It answers proximity queries over points, segments
//! and triangles in amortized constant time regardless of dataset size, and
//! rebuilds ordered point chains ("suites") from unordered edge sets.
//!
//! ## Features
//! - [`SpatialHashGrid`](hashing::SpatialHashGrid): uniform hash grid with
//!   conservative rasterization of points, segments and triangles
//! - [`PointIndex`](hashing::PointIndex): tolerance-merging point table that
//!   hands out stable integer handles, owning its buffer or indexing a
//!   caller-owned one in place
//! - [`MultiMap`](topology::MultiMap): key → ordered values table used for
//!   connectivity
//! - Connectivity helpers (canonical edge/face keys, adjacency tables,
//!   connexity) and the suite builder [`build_suites`](algs::build_suites)
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mesh-hashing = "0.3"
//! # Optional features:
//! # features = ["fast-hash", "check-invariants"]
//! ```
//!
//! ```
//! use mesh_hashing::prelude::*;
//!
//! let mut grid = SpatialHashGrid::new(0.5)?;
//! let tri = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(2.0, 0.0, 0.0),
//!     Vec3::new(0.0, 2.0, 0.0),
//! ];
//! grid.add(tri, 0usize);
//! assert!(grid.contains(Vec3::new(0.4, 0.4, 0.0)));
//!
//! let mut index = PointIndex::new(1e-3)?;
//! let a = index.add(Vec3::new(1.0, 1.0, 1.0));
//! assert_eq!(index.add(Vec3::new(1.0, 1.0, 1.0 + 1e-5)), a);
//! # Ok::<(), MeshHashError>(())
//! ```
//!
//! ## Determinism
//!
//! Per-key value lists (grid cells, multimap slots, suites) have a
//! deterministic order. Enumeration of keys goes through hash maps and has
//! none; sort when a stable order matters.
//!
//! ## Concurrency
//!
//! Structures hold no interior mutability: shared references can be queried
//! from several threads, mutation needs exclusive access.

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod hashing;
pub mod mesh_error;
pub mod perf;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use mesh_error::MeshHashError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::suites::{SuiteOpts, build_suites, build_suites_with};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{Primitive, Vec3};
    pub use crate::hashing::{GridKey, PointIndex, SpatialHashGrid, mesh_cellsize};
    pub use crate::mesh_error::MeshHashError;
    pub use crate::topology::connectivity::{
        connexity, directed_edge_to_face_adjacency, edge_key, oriented_face_key,
        point_to_edge_adjacency, point_to_point_adjacency,
    };
    pub use crate::topology::multimap::MultiMap;
}
