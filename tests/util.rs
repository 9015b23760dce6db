#![allow(dead_code)]
use mesh_hashing::geometry::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn v(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Reproducible cloud of `n` points in the cube `[-extent, extent]^3`.
pub fn point_cloud(seed: u64, n: usize, extent: f64) -> Vec<Vec3> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            v(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

/// Reproducible triangles with vertices within `size` of a random center.
pub fn triangle_soup(seed: u64, n: usize, extent: f64, size: f64) -> Vec<[Vec3; 3]> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let jitter = |rng: &mut SmallRng| {
        v(
            rng.gen_range(-size..size),
            rng.gen_range(-size..size),
            rng.gen_range(-size..size),
        )
    };
    point_cloud(seed ^ 0x5eed, n, extent)
        .into_iter()
        .map(|c| [c + jitter(&mut rng), c + jitter(&mut rng), c + jitter(&mut rng)])
        .collect()
}

/// Point of `tri` at barycentric weights `(u, w)`, `u + w <= 1`.
pub fn barycentric(tri: &[Vec3; 3], u: f64, w: f64) -> Vec3 {
    tri[0] + (tri[1] - tri[0]) * u + (tri[2] - tri[0]) * w
}

/// Unit-spaced `n × n` sheet of quads in the z = 0 plane, split in
/// counter-clockwise triangles, each triangle carrying its own copy of its
/// vertex positions.
pub fn quad_sheet(n: usize) -> Vec<[Vec3; 3]> {
    let p = |i: usize, j: usize| v(i as f64, j as f64, 0.0);
    let mut tris = Vec::with_capacity(2 * n * n);
    for i in 0..n {
        for j in 0..n {
            let (a, b, c, d) = (p(i, j), p(i + 1, j), p(i + 1, j + 1), p(i, j + 1));
            tris.push([a, b, c]);
            tris.push([a, c, d]);
        }
    }
    tris
}

/// Consecutive pairs of every suite.
pub fn suite_links(suites: &[Vec<u32>]) -> Vec<[u32; 2]> {
    suites
        .iter()
        .flat_map(|s| s.windows(2).map(|w| [w[0], w[1]]))
        .collect()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Clone + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
