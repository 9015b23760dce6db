//! Suite builder: reassemble ordered point chains from an unordered edge soup.
//!
//! Edges (or longer chains) are joined end to end greedily: a chain grows
//! from a popped edge by repeatedly scanning the remaining pool for an edge
//! that continues one of its ends. Optionally the resulting suites are cut at
//! every point shared with another suite, so that no suite runs through a
//! branch point.
//!
//! # Complexity
//! Each join restarts a linear scan of the pool, so the worst case is
//! quadratic in the number of edges. This is fine for the hundreds of edges
//! of an outline or a section, not for large wireframes.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::topology::connectivity::connexity;

/// Options for [`build_suites_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteOpts {
    /// Edges keep their direction: `(a, b)` and `(c, b)` are never joined.
    pub oriented: bool,
    /// Cut suites at points they share with other suites.
    pub cut: bool,
    /// Stop growing a suite as soon as it closes on itself.
    pub loop_close: bool,
}

impl Default for SuiteOpts {
    fn default() -> Self {
        Self {
            oriented: true,
            cut: true,
            loop_close: false,
        }
    }
}

/// How an edge continues the current suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Join {
    /// The edge ends where the suite starts.
    Front,
    /// The edge starts where the suite ends.
    Back,
    /// Unoriented only: the edge starts where the suite starts.
    FrontReversed,
    /// Unoriented only: the edge ends where the suite ends.
    BackReversed,
}

fn find_join<P: PartialEq + Copy>(suite: &VecDeque<P>, edge: &[P], oriented: bool) -> Option<Join> {
    let (&head, &tail) = (suite.front()?, suite.back()?);
    let (&first, &last) = (edge.first()?, edge.last()?);
    if last == head {
        Some(Join::Front)
    } else if first == tail {
        Some(Join::Back)
    } else if !oriented && first == head {
        Some(Join::FrontReversed)
    } else if !oriented && last == tail {
        Some(Join::BackReversed)
    } else {
        None
    }
}

/// Replace the matching end point of `suite` by the whole `edge`.
fn apply_join<P: Copy>(suite: &mut VecDeque<P>, edge: &[P], join: Join) {
    match join {
        Join::Front => {
            suite.pop_front();
            for &p in edge.iter().rev() {
                suite.push_front(p);
            }
        }
        Join::FrontReversed => {
            suite.pop_front();
            for &p in edge {
                suite.push_front(p);
            }
        }
        Join::Back => {
            suite.pop_back();
            suite.extend(edge.iter().copied());
        }
        Join::BackReversed => {
            suite.pop_back();
            suite.extend(edge.iter().rev().copied());
        }
    }
}

/// [`build_suites_with`] using [`SuiteOpts::default`]: oriented, cut at
/// shared points, loops not closed early.
pub fn build_suites<P, E>(edges: &[E]) -> Vec<Vec<P>>
where
    P: Eq + Hash + Copy + Debug,
    E: AsRef<[P]>,
{
    build_suites_with(edges, SuiteOpts::default())
}

/// Reassemble the suites formed by `edges`.
///
/// Each input item is an edge or a longer chain of at least two points;
/// shorter items are skipped. Edges are consumed from the end of the input,
/// and each suite is grown until no remaining edge continues it (or, with
/// `loop_close`, until both of its ends coincide).
///
/// With `cut`, point connexity is counted over the grown suites, and every
/// suite is split at the first interior point counted more than once; the
/// remainder is appended to the output and split in turn. A closed suite
/// repeats its start point, so its start counts twice.
pub fn build_suites_with<P, E>(edges: &[E], opts: SuiteOpts) -> Vec<Vec<P>>
where
    P: Eq + Hash + Copy + Debug,
    E: AsRef<[P]>,
{
    let mut pool: Vec<&[P]> = Vec::with_capacity(edges.len());
    for (i, edge) in edges.iter().enumerate() {
        let edge = edge.as_ref();
        if edge.len() < 2 {
            log::warn!(
                "build_suites: skipping chain {i} with {} point(s), need at least 2",
                edge.len()
            );
            continue;
        }
        pool.push(edge);
    }

    let mut suites: Vec<Vec<P>> = Vec::new();
    while let Some(start) = pool.pop() {
        let mut suite: VecDeque<P> = start.iter().copied().collect();
        loop {
            let found = pool
                .iter()
                .enumerate()
                .find_map(|(i, edge)| find_join(&suite, edge, opts.oriented).map(|j| (i, j)));
            let Some((i, join)) = found else {
                break;
            };
            let edge = pool.remove(i);
            apply_join(&mut suite, edge, join);
            if opts.loop_close && suite.front() == suite.back() {
                break;
            }
        }
        suites.push(Vec::from(suite));
    }

    if opts.cut {
        cut_at_shared_points(&mut suites);
    }
    suites
}

fn cut_at_shared_points<P>(suites: &mut Vec<Vec<P>>)
where
    P: Eq + Hash + Copy + Debug,
{
    let reach = connexity(suites.iter());
    let shared = |p: &P| reach.get(p).is_some_and(|&n| n > 1);
    // suites pushed during the pass are cut as well
    let mut k = 0;
    while k < suites.len() {
        let suite = &suites[k];
        if let Some(i) = (1..suite.len().saturating_sub(1)).find(|&i| shared(&suite[i])) {
            log::trace!("build_suites: cutting suite {k} at {:?}", suite[i]);
            let rest = suite[i..].to_vec();
            suites[k].truncate(i + 1);
            suites.push(rest);
        }
        k += 1;
    }
}
