mod util;

use mesh_hashing::algs::{SuiteOpts, build_suites, build_suites_with};
use mesh_hashing::topology::{connexity, edge_key};
use proptest::prelude::*;
use util::{assert_permutation, suite_links};

fn edge_soup() -> impl Strategy<Value = Vec<[u32; 2]>> {
    prop::collection::vec((0u32..8, 0u32..8), 0..30)
        .prop_map(|pairs| pairs.into_iter().map(|(a, b)| [a, b]).collect())
}

proptest! {
    #[test]
    fn oriented_suites_keep_every_edge(edges in edge_soup(), cut in any::<bool>()) {
        let opts = SuiteOpts { oriented: true, cut, loop_close: false };
        let suites = build_suites_with(&edges, opts);
        prop_assert!(suites.iter().all(|s| s.len() >= 2));
        assert_permutation(&suite_links(&suites), &edges);
    }

    #[test]
    fn unoriented_suites_keep_every_edge(edges in edge_soup(), loop_close in any::<bool>()) {
        let opts = SuiteOpts { oriented: false, cut: true, loop_close };
        let suites = build_suites_with(&edges, opts);
        let got: Vec<_> = suite_links(&suites).into_iter().map(|[a, b]| edge_key(a, b)).collect();
        let want: Vec<_> = edges.iter().map(|&[a, b]| edge_key(a, b)).collect();
        assert_permutation(&got, &want);
    }

    #[test]
    fn cut_suites_have_no_shared_interior_point(edges in edge_soup()) {
        let suites = build_suites(&edges);
        let reach = connexity(&suites);
        for s in &suites {
            for p in &s[1..s.len() - 1] {
                prop_assert_eq!(reach.get(p), Some(&1), "suite {:?} runs through {}", s, p);
            }
        }
    }
}

#[test]
fn closed_square_is_one_suite() {
    let edges = [[0u32, 1], [1, 2], [2, 3], [3, 0]];
    let suites = build_suites(&edges);
    assert_eq!(suites.len(), 1);
    let s = &suites[0];
    assert_eq!(s.len(), 5);
    assert_eq!(s.first(), s.last());
    assert_permutation(&s[..4], &[0, 1, 2, 3]);
}

#[test]
fn loops_sharing_a_point_split_there() {
    let edges = [[2u32, 0], [0, 1], [4, 0], [0, 3], [3, 4], [1, 2]];
    let opts = SuiteOpts {
        loop_close: true,
        ..SuiteOpts::default()
    };
    let suites = build_suites_with(&edges, opts);
    assert_eq!(suites.len(), 2);
    for s in &suites {
        assert_eq!((s.first(), s.last()), (Some(&0), Some(&0)));
    }
}

#[test]
fn branching_polyline_is_cut_at_the_branch() {
    // a T: 0-1-2 with 1-3 hanging off the middle
    let edges = [[0u32, 1], [1, 2], [1, 3]];
    let suites = build_suites(&edges);
    for s in &suites {
        assert!(!s[1..s.len() - 1].contains(&1), "{s:?} runs through the branch");
    }
    assert_permutation(&suite_links(&suites), &edges);
}
