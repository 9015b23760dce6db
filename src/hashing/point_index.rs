//! PointIndex: tolerance-merging point table
//!
//! A `PointIndex` assigns a stable `usize` handle to every distinct position
//! it is given, where "distinct" is decided on the grid: two positions are the
//! same point when the later one finds the earlier one's cell among its 8
//! candidate cells (a cube-shaped tolerance of about one cell size, not a
//! sphere).
//!
//! Handles are indices into the backing point buffer. The buffer is never
//! compacted: removing a point only drops its table entry, leaving a
//! permanent hole, and re-adding the same position appends a new handle.
//!
//! The buffer is either owned by the index or borrowed from the caller
//! ([`PointIndex::manage`]). A managed buffer keeps receiving the points added
//! through the index; mutating it by other means while the index lives is
//! prevented by the borrow, but editing it between two indices built over it
//! makes any handle kept from the first one meaningless.

use std::ops::{Deref, DerefMut};

use crate::debug_invariants::DebugInvariants;
use crate::geometry::vec3::Vec3;
use crate::hashing::cellsize::{NUMPREC, check_cellsize};
use crate::hashing::key::GridKey;
use crate::mesh_error::MeshHashError;
use crate::perf::{FastMap, FastSet};

/// Storage behind a [`PointIndex`]: owned, or borrowed from the caller.
#[derive(Debug)]
pub enum PointBuffer<'a> {
    Owned(Vec<Vec3>),
    Managed(&'a mut Vec<Vec3>),
}

impl Deref for PointBuffer<'_> {
    type Target = Vec<Vec3>;

    fn deref(&self) -> &Vec<Vec3> {
        match self {
            PointBuffer::Owned(v) => v,
            PointBuffer::Managed(v) => &**v,
        }
    }
}

impl DerefMut for PointBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<Vec3> {
        match self {
            PointBuffer::Owned(v) => v,
            PointBuffer::Managed(v) => &mut **v,
        }
    }
}

/// Point buffer plus a cell table from canonical [`GridKey`] to handle.
///
/// # Invariants
///
/// - Every handle in the table indexes the buffer.
/// - A handle is registered only under the canonical key of its point.
/// - No handle is registered twice.
#[derive(Debug)]
pub struct PointIndex<'a> {
    cellsize: f64,
    points: PointBuffer<'a>,
    table: FastMap<GridKey, usize>,
}

impl PointIndex<'static> {
    /// Empty index owning its buffer.
    ///
    /// # Errors
    /// `InvalidCellSize` if `cellsize` is not finite and positive.
    pub fn new(cellsize: f64) -> Result<Self, MeshHashError> {
        Ok(Self {
            cellsize: check_cellsize(cellsize)?,
            points: PointBuffer::Owned(Vec::new()),
            table: FastMap::default(),
        })
    }

    /// Owned index built by adding `points` in order.
    pub fn from_points<I>(cellsize: f64, points: I) -> Result<Self, MeshHashError>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut index = Self::new(cellsize)?;
        index.update(points);
        Ok(index)
    }

    /// Owned index built from a flat `[x0, y0, z0, x1, ...]` coordinate buffer.
    ///
    /// # Errors
    /// `CoordinateBuffer` if the length is not a multiple of 3.
    pub fn from_coords(cellsize: f64, coords: &[f64]) -> Result<Self, MeshHashError> {
        let points: &[Vec3] = bytemuck::try_cast_slice(coords)
            .map_err(|e| MeshHashError::CoordinateBuffer(format!("{e} (len = {})", coords.len())))?;
        Self::from_points(cellsize, points.iter().copied())
    }
}

impl<'a> PointIndex<'a> {
    /// Index an existing buffer in place, without copying it.
    ///
    /// Entries sharing a canonical cell collapse onto the lowest index; the
    /// others stay in the buffer but are not reachable through the index.
    /// Points added later are appended to `points`.
    pub fn manage(cellsize: f64, points: &'a mut Vec<Vec3>) -> Result<Self, MeshHashError> {
        let cellsize = check_cellsize(cellsize)?;
        let mut table = FastMap::default();
        for (i, p) in points.iter().enumerate().rev() {
            table.insert(GridKey::of(*p, cellsize), i);
        }
        let index = Self {
            cellsize,
            points: PointBuffer::Managed(points),
            table,
        };
        crate::debug_invariants!(index.validate_invariants(), "PointIndex::manage");
        Ok(index)
    }

    #[inline]
    pub fn cellsize(&self) -> f64 {
        self.cellsize
    }

    /// Number of points reachable through the index (holes excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The backing buffer; handles index into it.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn is_managed(&self) -> bool {
        matches!(self.points, PointBuffer::Managed(_))
    }

    pub fn into_buffer(self) -> PointBuffer<'a> {
        self.points
    }

    /// Canonical key: the cell a new point is registered under.
    #[inline]
    pub fn key_for(&self, p: Vec3) -> GridKey {
        GridKey::of(p, self.cellsize)
    }

    /// The 8 cells an equivalent point may have been registered under.
    ///
    /// Per axis, the cells of `p/cellsize - 1/2` and `p/cellsize + 1/2`
    /// (pulled in by [`NUMPREC`]), so that points on either side of a cell
    /// wall compare equal.
    pub fn keys_for(&self, p: Vec3) -> [GridKey; 8] {
        let vox = p / self.cellsize;
        let half = Vec3::splat(0.5 - NUMPREC);
        let lo = GridKey::from_scaled(vox - half);
        let hi = GridKey::from_scaled(vox + half);
        std::array::from_fn(|i| {
            GridKey::new(
                if i & 1 == 0 { lo.x() } else { hi.x() },
                if i & 2 == 0 { lo.y() } else { hi.y() },
                if i & 4 == 0 { lo.z() } else { hi.z() },
            )
        })
    }

    /// Handle of the point equivalent to `p`, if any.
    pub fn get(&self, p: Vec3) -> Option<usize> {
        self.keys_for(p)
            .iter()
            .find_map(|k| self.table.get(k).copied())
    }

    /// Handle of the point equivalent to `p`.
    ///
    /// # Errors
    /// `PointNotFound` if no stored point is equivalent to `p`.
    pub fn lookup(&self, p: Vec3) -> Result<usize, MeshHashError> {
        self.get(p).ok_or(MeshHashError::PointNotFound)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        self.get(p).is_some()
    }

    /// Insert `p` unless an equivalent point exists; return the handle of
    /// the stored point either way.
    pub fn add(&mut self, p: Vec3) -> usize {
        if let Some(existing) = self.get(p) {
            return existing;
        }
        let handle = self.points.len();
        let key = self.key_for(p);
        self.points.push(p);
        self.table.insert(key, handle);
        handle
    }

    /// Add every point, returning their handles in input order.
    pub fn update<I>(&mut self, points: I) -> Vec<usize>
    where
        I: IntoIterator<Item = Vec3>,
    {
        points.into_iter().map(|p| self.add(p)).collect()
    }

    /// Unregister the point equivalent to `p` and return its handle.
    ///
    /// The buffer entry stays in place as a hole.
    ///
    /// # Errors
    /// `PointNotFound` if no stored point is equivalent to `p`.
    pub fn remove(&mut self, p: Vec3) -> Result<usize, MeshHashError> {
        for key in self.keys_for(p) {
            if let Some(handle) = self.table.remove(&key) {
                return Ok(handle);
            }
        }
        Err(MeshHashError::PointNotFound)
    }

    /// Unregister every point equivalent to `p`; no-op if there is none.
    pub fn discard(&mut self, p: Vec3) {
        for key in self.keys_for(p) {
            self.table.remove(&key);
        }
    }

    /// Discard every point of `points`.
    pub fn difference_update<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vec3>,
    {
        for p in points {
            self.discard(p);
        }
    }
}

impl DebugInvariants for PointIndex<'_> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PointIndex");
    }

    fn validate_invariants(&self) -> Result<(), MeshHashError> {
        check_cellsize(self.cellsize)?;
        let mut seen: FastSet<usize> = FastSet::default();
        for (key, &handle) in self.table.iter() {
            let Some(&p) = self.points.get(handle) else {
                return Err(MeshHashError::InvariantViolation(format!(
                    "handle {handle} out of buffer bounds ({})",
                    self.points.len()
                )));
            };
            if self.key_for(p) != *key {
                return Err(MeshHashError::InvariantViolation(format!(
                    "handle {handle} registered under {key}, expected {}",
                    self.key_for(p)
                )));
            }
            if !seen.insert(handle) {
                return Err(MeshHashError::InvariantViolation(format!(
                    "handle {handle} registered twice"
                )));
            }
        }
        Ok(())
    }
}
