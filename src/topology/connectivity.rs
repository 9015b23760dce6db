//! Connectivity helpers over plain index tuples.
//!
//! Edges are `[P; 2]` and triangles `[P; 3]` of point identifiers (usually
//! indices into a position buffer). Nothing here looks at geometry: the
//! functions only canonicalize keys and build adjacency tables.

use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use crate::perf::FastMap;
use crate::topology::multimap::MultiMap;

/// Undirected key of the edge `(a, b)`: the lower identifier first.
#[inline]
pub fn edge_key<P: Ord>(a: P, b: P) -> [P; 2] {
    if a <= b { [a, b] } else { [b, a] }
}

/// Key of an oriented triangle: the rotation starting at its lowest
/// identifier. Rotations of the same triangle share a key, the reversed
/// triangle does not.
pub fn oriented_face_key<P: Ord + Copy>(face: [P; 3]) -> [P; 3] {
    let [a, b, c] = face;
    if a <= b && a <= c {
        [a, b, c]
    } else if b <= c {
        [b, c, a]
    } else {
        [c, a, b]
    }
}

/// Rotate `face` so that `p` comes first; unchanged if `p` is not a corner.
pub fn rotate_face_to_start<P: PartialEq + Copy>(face: [P; 3], p: P) -> [P; 3] {
    let [a, b, c] = face;
    if b == p {
        [b, c, a]
    } else if c == p {
        [c, a, b]
    } else {
        face
    }
}

/// Reverse `edge` so that `p` comes first; unchanged if `p` is not an end.
pub fn rotate_edge_to_start<P: PartialEq + Copy>(edge: [P; 2], p: P) -> [P; 2] {
    let [a, b] = edge;
    if b == p { [b, a] } else { edge }
}

/// Undirected neighbors of every point, following each polygon's sides
/// (closing side included). Neighbor lists hold no duplicate and keep the
/// order in which neighbors were first seen.
pub fn point_to_point_adjacency<P, I>(polygons: I) -> FastMap<P, Vec<P>>
where
    P: Eq + Hash + Copy,
    I: IntoIterator,
    I::Item: AsRef<[P]>,
{
    let mut conn: FastMap<P, Vec<P>> = FastMap::default();
    for polygon in polygons {
        let polygon = polygon.as_ref();
        if polygon.len() < 2 {
            continue;
        }
        for (a, b) in polygon.iter().copied().circular_tuple_windows::<(P, P)>() {
            if a == b {
                continue;
            }
            for (from, to) in [(a, b), (b, a)] {
                let neighbors = conn.entry(from).or_default();
                if !neighbors.contains(&to) {
                    neighbors.push(to);
                }
            }
        }
    }
    conn
}

/// Owning triangle of every directed edge.
///
/// Each triangle `[a, b, c]` claims `[a, b]`, `[b, c]` and `[c, a]`. On
/// non-manifold input a directed edge claimed twice maps to the last
/// triangle claiming it.
pub fn directed_edge_to_face_adjacency<P>(faces: &[[P; 3]]) -> FastMap<[P; 2], usize>
where
    P: Eq + Hash + Copy + Debug,
{
    let mut conn = FastMap::default();
    for (i, &[a, b, c]) in faces.iter().enumerate() {
        for edge in [[a, b], [b, c], [c, a]] {
            if let Some(prev) = conn.insert(edge, i) {
                log::debug!("directed edge {edge:?} of face {i} was already owned by face {prev}");
            }
        }
    }
    conn
}

/// Indices of the edges incident to every point.
pub fn point_to_edge_adjacency<P>(edges: &[[P; 2]]) -> MultiMap<P, usize>
where
    P: Eq + Hash + Copy,
{
    edges
        .iter()
        .enumerate()
        .flat_map(|(i, &[a, b])| [(a, i), (b, i)])
        .collect()
}

/// Number of occurrences of every point across `links` (edges, faces or
/// chains of any length).
pub fn connexity<P, I>(links: I) -> FastMap<P, usize>
where
    P: Eq + Hash + Copy,
    I: IntoIterator,
    I::Item: AsRef<[P]>,
{
    let mut reach: FastMap<P, usize> = FastMap::default();
    for link in links {
        for &p in link.as_ref() {
            *reach.entry(p).or_insert(0) += 1;
        }
    }
    reach
}
