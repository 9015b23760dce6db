//! `GridKey`: integer address of a cubic cell
//!
//! A grid key is the component-wise `floor(position / cellsize)` of any
//! position inside the cell. Two positions share a key iff they fall in the
//! same cell. Keys are plain values: they are hashed, ordered and printed,
//! never dereferenced.

use std::fmt;

use num_traits::ToPrimitive;

use crate::geometry::vec3::Vec3;

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct GridKey(pub [i64; 3]);

impl GridKey {
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        GridKey([x, y, z])
    }

    /// Key of the cell containing `p` for the given cell size.
    #[inline]
    pub fn of(p: Vec3, cellsize: f64) -> Self {
        Self::from_scaled(p / cellsize)
    }

    /// Key of a position already expressed in cell units.
    #[inline]
    pub fn from_scaled(v: Vec3) -> Self {
        GridKey([floor_index(v.x), floor_index(v.y), floor_index(v.z)])
    }

    #[inline]
    pub const fn x(self) -> i64 {
        self.0[0]
    }

    #[inline]
    pub const fn y(self) -> i64 {
        self.0[1]
    }

    #[inline]
    pub const fn z(self) -> i64 {
        self.0[2]
    }

    /// Lower corner of the cell in world coordinates.
    pub fn origin(self, cellsize: f64) -> Vec3 {
        Vec3::new(
            self.0[0] as f64 * cellsize,
            self.0[1] as f64 * cellsize,
            self.0[2] as f64 * cellsize,
        )
    }
}

/// `floor(v)` as a cell index, saturating at the `i64` range.
#[inline]
pub(crate) fn floor_index(v: f64) -> i64 {
    v.floor().to_i64().unwrap_or(if v.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Last cell index covered by an interval ending at `hi` (cell units) and
/// starting in cell `first`: an interval ending exactly on a cell wall does
/// not enter the next cell.
#[inline]
pub(crate) fn last_index(first: i64, hi: f64) -> i64 {
    let last = hi.ceil().to_i64().unwrap_or(if hi.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    });
    last.saturating_sub(1).max(first)
}

impl From<[i64; 3]> for GridKey {
    fn from(k: [i64; 3]) -> Self {
        GridKey(k)
    }
}

impl From<(i64, i64, i64)> for GridKey {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        GridKey([x, y, z])
    }
}

impl fmt::Debug for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GridKey")
            .field(&self.0[0])
            .field(&self.0[1])
            .field(&self.0[2])
            .finish()
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_cell_same_key() {
        let a = GridKey::of(Vec3::new(0.1, 0.9, 0.5), 1.0);
        let b = GridKey::of(Vec3::new(0.99, 0.0, 0.01), 1.0);
        assert_eq!(a, b);
        assert_eq!(a, GridKey::new(0, 0, 0));
    }

    #[test]
    fn negative_coordinates_floor_down() {
        let k = GridKey::of(Vec3::new(-0.5, -1.0, -1.5), 1.0);
        assert_eq!(k, GridKey::new(-1, -1, -2));
    }

    #[test]
    fn cellsize_scales_keys() {
        let k = GridKey::of(Vec3::new(2.5, 5.0, -0.1), 0.5);
        assert_eq!(k, GridKey::new(5, 10, -1));
        assert_eq!(k.origin(0.5), Vec3::new(2.5, 5.0, -0.5));
    }

    #[test]
    fn saturates_out_of_range() {
        assert_eq!(floor_index(f64::INFINITY), i64::MAX);
        assert_eq!(floor_index(-1e300), i64::MIN);
    }

    #[test]
    fn half_open_interval_end() {
        assert_eq!(last_index(0, 3.0), 2);
        assert_eq!(last_index(0, 2.5), 2);
        assert_eq!(last_index(1, 1.0), 1);
        assert_eq!(last_index(-1, -0.5), -1);
    }

    #[test]
    fn debug_and_display() {
        let k = GridKey::new(1, -2, 3);
        assert_eq!(format!("{:?}", k), "GridKey(1, -2, 3)");
        assert_eq!(format!("{}", k), "(1, -2, 3)");
    }
}
