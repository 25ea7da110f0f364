use crate::geometry::{Point, Segment};
use std::collections::{HashMap, HashSet};

/// Undirected graph whose nodes are endpoints and whose edges are segments.
pub type Adjacency = HashMap<Point, HashSet<Point>>;

/// Build the endpoint graph for a set of segments.
///
/// Neighbor sets collapse repeated segments between the same two points into
/// a single edge. Zero-length segments contribute nothing.
pub fn build_adjacency(segments: &[Segment]) -> Adjacency {
    let mut adjacency: Adjacency = HashMap::new();

    for s in segments.iter().filter(|s| !s.is_degenerate()) {
        adjacency.entry(s.p1).or_default().insert(s.p2);
        adjacency.entry(s.p2).or_default().insert(s.p1);
    }

    adjacency
}

/// Whether the segments contain at least one closed loop.
///
/// Runs a depth-first search over every component of the endpoint graph,
/// remembering the node each vertex was reached from. Meeting an already
/// visited vertex that is not that parent means a back edge, so a cycle.
///
/// This is simple-graph cycle detection: two segments joining the same pair
/// of points count as one edge and do not close a loop on their own.
pub fn has_closed_loop(segments: &[Segment]) -> bool {
    // A simple cycle needs at least three edges
    if segments.len() < 3 {
        return false;
    }

    let adjacency = build_adjacency(segments);
    let mut visited: HashSet<Point> = HashSet::with_capacity(adjacency.len());
    let mut stack: Vec<(Point, Option<Point>)> = Vec::new();

    for &root in adjacency.keys() {
        if !visited.insert(root) {
            continue;
        }
        stack.push((root, None));

        while let Some((node, parent)) = stack.pop() {
            let Some(neighbors) = adjacency.get(&node) else {
                continue;
            };

            for &next in neighbors {
                if Some(next) == parent {
                    continue;
                }
                if !visited.insert(next) {
                    return true;
                }
                stack.push((next, Some(node)));
            }
        }
    }

    false
}
