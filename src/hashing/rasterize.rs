//! Conservative rasterization of points, segments and triangles into grid cells.
//!
//! All computations run in cell units (positions divided by the cell size), so
//! slab `k` along an axis covers `[k, k + 1]`. Segments and triangles are
//! permuted so that their dominant axis (segment direction, triangle normal)
//! becomes the last local axis, then swept slab by slab:
//!
//! - segments walk the depth axis, bound the second axis by interpolating the
//!   segment over the depth slab, then bound the third axis over the part of
//!   the depth slab where the segment stays in the current second-axis slab;
//! - triangles walk the two in-plane axes, bounding the second by the edges
//!   crossing the first-axis slab and the depth by the plane equation at the
//!   corners of each column, clipped to the triangle's bounding box.
//!
//! The result may contain cells the primitive does not touch, but never
//! misses one it does. Degenerate input (zero length or zero area relative to
//! the coordinate magnitude) rasterizes to nothing.

use crate::geometry::primitive::Primitive;
use crate::geometry::vec3::Vec3;
use crate::hashing::cellsize::NUMPREC;
use crate::hashing::key::{GridKey, floor_index, last_index};

/// Cells overlapped by `primitive`.
pub fn rasterize(primitive: &Primitive, cellsize: f64) -> Vec<GridKey> {
    match *primitive {
        Primitive::Point(p) => vec![rasterize_point(p, cellsize)],
        Primitive::Segment(s) => rasterize_segment(s, cellsize),
        Primitive::Triangle(t) => rasterize_triangle(t, cellsize),
    }
}

#[inline]
pub fn rasterize_point(p: Vec3, cellsize: f64) -> GridKey {
    GridKey::of(p, cellsize)
}

pub fn rasterize_segment(segment: [Vec3; 2], cellsize: f64) -> Vec<GridKey> {
    let [a, b] = segment.map(|p| p / cellsize);
    let dir = (b - a).abs();
    if dir.max_element() <= NUMPREC * magnitude(&[a, b]) {
        log::trace!("degenerate segment {segment:?} rasterized to no cell");
        return Vec::new();
    }

    let frame = Frame::dominant(dir);
    let (a, b) = (frame.to_local(a), frame.to_local(b));
    let (a, b) = if a[2] <= b[2] { (a, b) } else { (b, a) };
    let depth = b[2] - a[2];
    let at = |z: f64, axis: usize| a[axis] + (b[axis] - a[axis]) * ((z - a[2]) / depth);

    let mut keys = Vec::new();
    let kz0 = floor_index(a[2]);
    for kz in kz0..=last_index(kz0, b[2]) {
        let z_lo = (kz as f64).max(a[2]);
        let z_hi = ((kz + 1) as f64).min(b[2]);

        let (y_lo, y_hi) = ordered(at(z_lo, 1), at(z_hi, 1));
        let ky0 = floor_index(y_lo);
        let ky1 = last_index(ky0, y_hi);
        for ky in ky0..=ky1 {
            // part of the depth slab where the segment stays in this slab
            let (sub_lo, sub_hi) = if ky0 == ky1 {
                (z_lo, z_hi)
            } else {
                let rise = b[1] - a[1];
                let (za, zb) = ordered(
                    a[2] + (ky as f64 - a[1]) * depth / rise,
                    a[2] + ((ky + 1) as f64 - a[1]) * depth / rise,
                );
                let (lo, hi) = (za.max(z_lo), zb.min(z_hi));
                if lo <= hi { (lo, hi) } else { (z_lo, z_hi) }
            };

            let (x_lo, x_hi) = ordered(at(sub_lo, 0), at(sub_hi, 0));
            let kx0 = floor_index(x_lo);
            for kx in kx0..=last_index(kx0, x_hi) {
                keys.push(frame.to_key([kx, ky, kz]));
            }
        }
    }
    keys
}

pub fn rasterize_triangle(triangle: [Vec3; 3], cellsize: f64) -> Vec<GridKey> {
    let p = triangle.map(|v| v / cellsize);
    let normal = (p[1] - p[0]).cross(p[2] - p[0]);
    let scale = magnitude(&p);
    if normal.abs().max_element() <= NUMPREC * scale * scale {
        log::trace!("degenerate triangle {triangle:?} rasterized to no cell");
        return Vec::new();
    }

    let frame = Frame::dominant(normal.abs());
    let q = p.map(|v| frame.to_local(v));
    let n = frame.to_local(normal);
    let plane = |x: f64, y: f64| q[0][2] - (n[0] * (x - q[0][0]) + n[1] * (y - q[0][1])) / n[2];

    let lo: [f64; 3] = std::array::from_fn(|i| q[0][i].min(q[1][i]).min(q[2][i]));
    let hi: [f64; 3] = std::array::from_fn(|i| q[0][i].max(q[1][i]).max(q[2][i]));
    let first: [i64; 3] = std::array::from_fn(|i| floor_index(lo[i]));
    let last: [i64; 3] = std::array::from_fn(|i| last_index(first[i], hi[i]));

    let mut keys = Vec::new();
    for kx in first[0]..=last[0] {
        let x_lo = (kx as f64).max(lo[0]);
        let x_hi = ((kx + 1) as f64).min(hi[0]);
        let Some((y_lo, y_hi)) = span_in_slab(&q, x_lo, x_hi) else {
            continue;
        };
        let (y_lo, y_hi) = (y_lo.max(lo[1]), y_hi.min(hi[1]));

        // columns and depth cells are kept inside the bounding box
        let ky0 = floor_index(y_lo).max(first[1]);
        let ky1 = last_index(ky0, y_hi).min(last[1]);
        for ky in ky0..=ky1 {
            let cy_lo = (ky as f64).max(y_lo);
            let cy_hi = ((ky + 1) as f64).min(y_hi);
            let corners = [
                plane(x_lo, cy_lo),
                plane(x_hi, cy_lo),
                plane(x_lo, cy_hi),
                plane(x_hi, cy_hi),
            ];
            let z_lo = corners.iter().copied().fold(f64::INFINITY, f64::min).max(lo[2]);
            let z_hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max).min(hi[2]);

            let kz0 = floor_index(z_lo).max(first[2]);
            let kz1 = last_index(kz0, z_hi).min(last[2]);
            for kz in kz0..=kz1 {
                keys.push(frame.to_key([kx, ky, kz]));
            }
        }
    }
    keys
}

/// Axis permutation sending the dominant axis of a direction to local index 2.
#[derive(Clone, Copy, Debug)]
struct Frame {
    depth: usize,
}

impl Frame {
    /// Ties prefer y, then x, then z.
    fn dominant(n: Vec3) -> Self {
        let depth = if n.y >= n.x && n.y >= n.z {
            1
        } else if n.x >= n.y && n.x >= n.z {
            0
        } else {
            2
        };
        Frame { depth }
    }

    #[inline]
    fn to_local(self, p: Vec3) -> [f64; 3] {
        [p[(self.depth + 1) % 3], p[(self.depth + 2) % 3], p[self.depth]]
    }

    #[inline]
    fn to_key(self, local: [i64; 3]) -> GridKey {
        let mut k = [0i64; 3];
        k[(self.depth + 1) % 3] = local[0];
        k[(self.depth + 2) % 3] = local[1];
        k[self.depth] = local[2];
        GridKey(k)
    }
}

/// Range of local-y covered by the triangle edges within `x_lo ..= x_hi`.
fn span_in_slab(q: &[[f64; 3]; 3], x_lo: f64, x_hi: f64) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for i in 0..3 {
        let (s, e) = (q[i], q[(i + 1) % 3]);
        let (ex_lo, ex_hi) = ordered(s[0], e[0]);
        if ex_hi < x_lo || ex_lo > x_hi {
            continue;
        }
        let dx = e[0] - s[0];
        let ys = if dx == 0.0 {
            [s[1], e[1]]
        } else {
            let t0 = ((x_lo - s[0]) / dx).clamp(0.0, 1.0);
            let t1 = ((x_hi - s[0]) / dx).clamp(0.0, 1.0);
            [s[1] + (e[1] - s[1]) * t0, s[1] + (e[1] - s[1]) * t1]
        };
        for y in ys {
            lo = lo.min(y);
            hi = hi.max(y);
        }
    }
    (lo <= hi).then_some((lo, hi))
}

/// Largest absolute coordinate among `points`.
fn magnitude(points: &[Vec3]) -> f64 {
    points
        .iter()
        .map(|p| p.abs().max_element())
        .fold(0.0, f64::max)
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
