//! Spatial hashing: locate data by position in amortized constant time.
//!
//! - [`SpatialHashGrid`]: handles bound to the cells their point, segment or
//!   triangle overlaps.
//! - [`PointIndex`]: deduplicating point table assigning stable handles.
//! - [`mesh_cellsize`]: a reasonable cell size for a given point cloud.
//!
//! Both structures hash cubic cells of a fixed `cellsize` addressed by
//! [`GridKey`]; the cost of an operation depends on how many cells its
//! primitive covers, never on how much is stored.

pub mod cellsize;
pub mod grid;
pub mod key;
pub mod point_index;
pub mod rasterize;

pub use cellsize::{NUMPREC, mesh_cellsize};
pub use grid::SpatialHashGrid;
pub use key::GridKey;
pub use point_index::{PointBuffer, PointIndex};
