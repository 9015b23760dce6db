//! Triangle soup → indexed mesh → adjacency → boundary outline.
mod util;

use mesh_hashing::algs::build_suites;
use mesh_hashing::hashing::{PointIndex, SpatialHashGrid, mesh_cellsize};
use mesh_hashing::perf::FastSet;
use mesh_hashing::topology::{
    connexity, directed_edge_to_face_adjacency, oriented_face_key, point_to_edge_adjacency,
    point_to_point_adjacency, rotate_face_to_start,
};
use util::{quad_sheet, v};

const N: usize = 4;

fn indexed_sheet() -> (Vec<mesh_hashing::geometry::Vec3>, Vec<[usize; 3]>) {
    let soup = quad_sheet(N);
    let mut index = PointIndex::new(1e-6).unwrap();
    let faces: Vec<[usize; 3]> = soup.iter().map(|t| t.map(|p| index.add(p))).collect();
    (index.points().to_vec(), faces)
}

#[test]
fn soup_vertices_are_merged() {
    let (points, faces) = indexed_sheet();
    assert_eq!(points.len(), (N + 1) * (N + 1));
    assert_eq!(faces.len(), 2 * N * N);
    let keys: FastSet<[usize; 3]> = faces.iter().map(|&f| oriented_face_key(f)).collect();
    assert_eq!(keys.len(), faces.len());
    // rotating a face does not change its key
    let f = faces[5];
    assert_eq!(oriented_face_key(rotate_face_to_start(f, f[2])), oriented_face_key(f));
}

#[test]
fn sheet_adjacency() {
    let (points, faces) = indexed_sheet();
    let corner = points.iter().position(|&p| p == v(0.0, 0.0, 0.0)).unwrap();
    let inner = points.iter().position(|&p| p == v(1.0, 1.0, 0.0)).unwrap();

    let neighbors = point_to_point_adjacency(&faces);
    assert_eq!(neighbors.get(&corner).map(Vec::len), Some(3));
    assert_eq!(neighbors.get(&inner).map(Vec::len), Some(6));

    let reach = connexity(&faces);
    assert_eq!(reach.get(&corner), Some(&2));
    assert_eq!(reach.get(&inner), Some(&6));
    assert_eq!(reach.values().sum::<usize>(), 3 * faces.len());
}

#[test]
fn boundary_outline_is_one_closed_suite() {
    let (_, faces) = indexed_sheet();
    let owner = directed_edge_to_face_adjacency(&faces);
    assert_eq!(owner.len(), 3 * faces.len());

    let boundary: Vec<[usize; 2]> = faces
        .iter()
        .flat_map(|&[a, b, c]| [[a, b], [b, c], [c, a]])
        .filter(|&[a, b]| !owner.contains_key(&[b, a]))
        .collect();
    assert_eq!(boundary.len(), 4 * N);

    let incident = point_to_edge_adjacency(&boundary);
    assert!(incident.keys().all(|p| incident.connexity(p) == 2));

    let suites = build_suites(&boundary);
    assert_eq!(suites.len(), 1);
    let outline = &suites[0];
    assert_eq!(outline.len(), 4 * N + 1);
    assert_eq!(outline.first(), outline.last());
}

#[test]
fn grid_locates_faces() -> Result<(), Box<dyn std::error::Error>> {
    let (points, faces) = indexed_sheet();
    let mut grid = SpatialHashGrid::new(mesh_cellsize(&points)?)?;
    for (i, f) in faces.iter().enumerate() {
        grid.add(f.map(|p| points[p]), i);
    }
    // quad (1, 1) holds faces 2 * (1 * N + 1) and the next one
    let hits: FastSet<usize> = grid.get(v(1.5, 1.5, 0.0)).copied().collect();
    assert!(hits.contains(&(2 * (N + 1))));
    assert!(hits.contains(&(2 * (N + 1) + 1)));
    assert!(grid.get(v(1.5, 1.5, 3.0)).next().is_none());
    Ok(())
}
