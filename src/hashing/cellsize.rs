//! Cell size selection and numeric precision.

use crate::geometry::vec3::Vec3;
use crate::mesh_error::MeshHashError;

/// Relative precision of `f64` geometry. Used to detect degenerate
/// primitives and to shrink the point-merging window away from cell walls.
pub const NUMPREC: f64 = 1e-13;

/// Recommended cell size to index the primitives of a mesh.
///
/// The number of cells a triangle covers grows with its area, and points lie
/// on that area, so `sqrt(points.len())` hints at the point density along the
/// surface: the result is the bounding box diagonal divided by it.
///
/// # Errors
/// `EmptyPointSet` if `points` is empty, `InvalidCellSize` if all points
/// coincide (zero-sized box).
pub fn mesh_cellsize(points: &[Vec3]) -> Result<f64, MeshHashError> {
    let (first, rest) = points.split_first().ok_or(MeshHashError::EmptyPointSet)?;
    let (lo, hi) = rest
        .iter()
        .fold((*first, *first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let cellsize = (hi - lo).length() / (points.len() as f64).sqrt();
    check_cellsize(cellsize)
}

/// Validate a cell size: finite and strictly positive.
pub fn check_cellsize(cellsize: f64) -> Result<f64, MeshHashError> {
    if cellsize.is_finite() && cellsize > 0.0 {
        Ok(cellsize)
    } else {
        Err(MeshHashError::InvalidCellSize(cellsize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_corners() {
        let pts: Vec<Vec3> = (0..8)
            .map(|i| Vec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
            .collect();
        let c = mesh_cellsize(&pts).unwrap();
        assert!((c - 3f64.sqrt() / 8f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_and_degenerate_sets() {
        assert_eq!(mesh_cellsize(&[]), Err(MeshHashError::EmptyPointSet));
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            mesh_cellsize(&[p, p]),
            Err(MeshHashError::InvalidCellSize(_))
        ));
    }

    #[test]
    fn rejects_bad_cellsizes() {
        assert!(check_cellsize(0.0).is_err());
        assert!(check_cellsize(-1.0).is_err());
        assert!(check_cellsize(f64::NAN).is_err());
        assert!(check_cellsize(f64::INFINITY).is_err());
        assert_eq!(check_cellsize(0.25), Ok(0.25));
    }
}
