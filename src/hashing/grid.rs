//! SpatialHashGrid: handles associated with the cells their primitives overlap.
//!
//! A grid stores opaque handles (indices into a registry owned by the caller)
//! in the cells rasterized from a point, segment or triangle. Every operation
//! costs time proportional to the cell footprint of its primitive, whatever
//! the number of stored handles.
//!
//! Queries are conservative: [`SpatialHashGrid::get`] yields every handle
//! whose primitive *may* intersect the query primitive, possibly with extra
//! candidates and with a handle repeated once per shared cell.

use crate::debug_invariants::DebugInvariants;
use crate::geometry::primitive::Primitive;
use crate::geometry::vec3::Vec3;
use crate::hashing::cellsize::check_cellsize;
use crate::hashing::key::GridKey;
use crate::hashing::rasterize::rasterize;
use crate::mesh_error::MeshHashError;
use crate::perf::FastMap;

/// Uniform hash grid of cubic cells mapping [`GridKey`]s to handle lists.
///
/// # Invariants
///
/// - `cellsize` is finite, positive and never changes.
/// - No cell holds an empty list.
/// - Handles of a cell keep their insertion order; duplicates are allowed.
#[derive(Clone, Debug)]
pub struct SpatialHashGrid<H = usize> {
    cellsize: f64,
    cells: FastMap<GridKey, Vec<H>>,
}

impl<H> SpatialHashGrid<H> {
    /// Create an empty grid.
    ///
    /// # Errors
    /// `InvalidCellSize` if `cellsize` is not finite and positive.
    pub fn new(cellsize: f64) -> Result<Self, MeshHashError> {
        Ok(Self {
            cellsize: check_cellsize(cellsize)?,
            cells: FastMap::default(),
        })
    }

    #[inline]
    pub fn cellsize(&self) -> f64 {
        self.cellsize
    }

    /// Number of occupied cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells overlapped by `primitive` (conservative).
    pub fn keys_for(&self, primitive: impl Into<Primitive>) -> Vec<GridKey> {
        rasterize(&primitive.into(), self.cellsize)
    }

    /// Like [`keys_for`](Self::keys_for) for a primitive given as 1, 2 or 3 positions.
    ///
    /// # Errors
    /// `UnsupportedPrimitive` for any other number of positions.
    pub fn keys_for_slice(&self, positions: &[Vec3]) -> Result<Vec<GridKey>, MeshHashError> {
        Ok(self.keys_for(Primitive::try_from(positions)?))
    }

    /// Handles potentially intersecting `primitive`.
    ///
    /// Lazy; a handle shows up once per queried cell that holds it.
    pub fn get(&self, primitive: impl Into<Primitive>) -> impl Iterator<Item = &H> {
        self.keys_for(primitive)
            .into_iter()
            .filter_map(move |k| self.cells.get(&k))
            .flatten()
    }

    /// Like [`get`](Self::get) for a primitive given as a position slice.
    pub fn get_slice(
        &self,
        positions: &[Vec3],
    ) -> Result<impl Iterator<Item = &H>, MeshHashError> {
        Ok(self.get(Primitive::try_from(positions)?))
    }

    /// True if any handle is stored in a cell overlapped by `primitive`.
    pub fn contains(&self, primitive: impl Into<Primitive>) -> bool {
        self.keys_for(primitive)
            .iter()
            .any(|k| self.cells.contains_key(k))
    }

    /// Handles stored in one cell, in insertion order.
    pub fn cell(&self, key: GridKey) -> &[H] {
        self.cells.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Occupied cells with their handles, in arbitrary cell order.
    pub fn cells(&self) -> impl Iterator<Item = (GridKey, &[H])> {
        self.cells.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl<H: Clone> SpatialHashGrid<H> {
    /// Associate `handle` with every cell overlapped by `primitive`.
    ///
    /// A degenerate segment or triangle overlaps no cell and stores nothing.
    pub fn add(&mut self, primitive: impl Into<Primitive>, handle: H) {
        for key in self.keys_for(primitive) {
            self.cells.entry(key).or_default().push(handle.clone());
        }
    }

    /// Like [`add`](Self::add) for a primitive given as a position slice.
    ///
    /// # Errors
    /// `UnsupportedPrimitive` unless `positions` holds 1, 2 or 3 positions.
    pub fn add_slice(&mut self, positions: &[Vec3], handle: H) -> Result<(), MeshHashError> {
        self.add(Primitive::try_from(positions)?, handle);
        Ok(())
    }

    /// Add every `(primitive, handle)` pair.
    pub fn update<P, I>(&mut self, items: I)
    where
        P: Into<Primitive>,
        I: IntoIterator<Item = (P, H)>,
    {
        for (primitive, handle) in items {
            self.add(primitive, handle);
        }
    }

    /// Merge the cells of `other`, appending its handles after ours per cell.
    ///
    /// # Errors
    /// `CellSizeMismatch` if the grids do not share the same cell size; the
    /// grid is left untouched.
    pub fn update_from_grid(&mut self, other: &SpatialHashGrid<H>) -> Result<(), MeshHashError> {
        if self.cellsize != other.cellsize {
            return Err(MeshHashError::CellSizeMismatch {
                left: self.cellsize,
                right: other.cellsize,
            });
        }
        for (key, handles) in other.cells.iter() {
            self.cells
                .entry(*key)
                .or_default()
                .extend(handles.iter().cloned());
        }
        crate::debug_invariants!(self.validate_invariants(), "SpatialHashGrid::update_from_grid");
        Ok(())
    }
}

impl<H> DebugInvariants for SpatialHashGrid<H> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SpatialHashGrid");
    }

    fn validate_invariants(&self) -> Result<(), MeshHashError> {
        check_cellsize(self.cellsize)?;
        if let Some((key, _)) = self.cells.iter().find(|(_, v)| v.is_empty()) {
            return Err(MeshHashError::InvariantViolation(format!(
                "empty handle list stored in cell {key}"
            )));
        }
        Ok(())
    }
}
