// dead end removal

use super::graph::StreetGraph;

/// Removes nodes of degree 0 or 1 until none are left.
/// Removing a dead end can expose a new one, so full scans repeat until one removes nothing.
/// # Returns the number of removed nodes
pub fn prune_dead_ends(graph: &mut StreetGraph) -> usize {
    let mut removed = 0;

    loop {
        let mut changed = false;
        for id in 0..graph.capacity() {
            if graph.contains(id) && graph.degree(id) <= 1 {
                graph.remove_node(id);
                removed += 1;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    removed
}
