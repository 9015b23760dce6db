//! MeshHashError: Unified error type for mesh-hashing public APIs
//!
//! This error type is used throughout the mesh-hashing library to provide robust,
//! non-panicking error handling for all public APIs.

use thiserror::Error;

/// Unified error type for mesh-hashing operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshHashError {
    /// A grid or point index was built with a cell size that is not finite and positive.
    #[error("cell size must be finite and > 0, got {0}")]
    InvalidCellSize(f64),
    /// Two grids with different cell sizes cannot be merged (no implicit rehash).
    #[error("cannot merge grids with different cell sizes ({left} vs {right})")]
    CellSizeMismatch { left: f64, right: f64 },
    /// Only points (1), segments (2) and triangles (3) can be rasterized.
    #[error("unsupported primitive: expected 1, 2 or 3 positions, got {arity}")]
    UnsupportedPrimitive { arity: usize },
    /// No stored point lies within tolerance of the queried position.
    #[error("no point stored at this position")]
    PointNotFound,
    /// `MultiMap::remove` on a key with no associated value.
    #[error("key is not associated to any value")]
    MissingKey,
    /// `MultiMap::remove` on a value absent from the key's slots.
    #[error("value is not associated to this key")]
    MissingValue,
    /// A cell size cannot be derived from an empty point set.
    #[error("point set is empty")]
    EmptyPointSet,
    /// A flat coordinate buffer could not be viewed as 3D positions.
    #[error("invalid coordinate buffer: {0}")]
    CoordinateBuffer(String),
    /// A data structure invariant does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
