// convex hull closure of the street graph

use super::graph::{NodeId, StreetGraph};
use super::utils::orientation;

/// Convex hull of the live nodes by gift wrapping.
/// Starts at the lowest-x node (lowest y on ties) and keeps picking the most
/// clockwise point seen from the last hull vertex, so no node is ever right of a hull
/// edge and the vertices come out counter-clockwise with y pointing up.
/// Collinear points resolve to the farthest one, points on a hull edge are not vertices.
pub fn convex_hull(graph: &StreetGraph) -> Vec<NodeId> {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    if ids.len() < 3 {
        return ids;
    }

    let Some(start) = ids.iter().copied().min_by(|&a, &b| {
        let (pa, pb) = (graph.position(a), graph.position(b));
        pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y))
    }) else {
        return Vec::new();
    };

    let mut hull = vec![start];
    let mut current = start;

    loop {
        let origin = graph.position(current);
        let mut next = if ids[0] == current { ids[1] } else { ids[0] };

        for &candidate in &ids {
            if candidate == current || candidate == next {
                continue;
            }
            let turn = orientation(origin, graph.position(next), graph.position(candidate));
            let farther = origin.distance_squared(graph.position(candidate))
                > origin.distance_squared(graph.position(next));

            if turn < 0.0 || (turn == 0.0 && farther) {
                next = candidate;
            }
        }

        // coincident points or rounding could keep us from ever reaching the start again
        if next == start || hull.len() >= ids.len() {
            break;
        }
        hull.push(next);
        current = next;
    }

    hull
}

/// Links every pair of consecutive hull vertices, wrapping around.
/// Street constraints are not checked here, this closes the outer ring unconditionally.
/// # Returns the number of edges added
pub fn close_hull(graph: &mut StreetGraph) -> usize {
    let hull = convex_hull(graph);

    match hull.len() {
        0 | 1 => 0,
        2 => usize::from(graph.connect(hull[0], hull[1])),
        n => (0..n)
            .filter(|&i| graph.connect(hull[i], hull[(i + 1) % n]))
            .count(),
    }
}
