// arena-backed undirected street graph
// nodes are addressed by their index, which never changes once assigned;
// removed nodes stay in the arena as tombstones so the indices stay valid

use bevy::prelude::*;
use smallvec::SmallVec;

pub type NodeId = usize;

/// Neighbour list, inline up to the degree cap used while growing streets.
/// Hull closure may push a node past it, in which case the list spills to the heap.
pub type Neighbors = SmallVec<[NodeId; 4]>;

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub pos: Vec2,
    neighbors: Neighbors,
    alive: bool,
}

impl Node {
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    nodes: Vec<Node>,
    live_count: usize,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph with one node per position and no edges.
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>) -> Self {
        let mut graph = Self::new();
        for pos in positions {
            graph.add_node(pos);
        }
        graph
    }

    pub fn add_node(&mut self, pos: Vec2) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            pos,
            neighbors: Neighbors::new(),
            alive: true,
        });
        self.live_count += 1;
        id
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.live_count
    }

    /// Size of the arena, tombstones included. Every `NodeId` is below this.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.alive)
    }

    pub fn position(&self, id: NodeId) -> Vec2 {
        self.nodes[id].pos
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].neighbors
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.nodes[id].neighbors.len()
    }

    /// Live node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().filter(|n| n.alive).map(|n| n.id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.alive)
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes[a].neighbors.contains(&b)
    }

    /// Whether some node is already linked to both `a` and `b`,
    /// i.e. an edge `a-b` would close a triangle.
    pub fn shares_neighbor(&self, a: NodeId, b: NodeId) -> bool {
        let b_neighbors = &self.nodes[b].neighbors;
        self.nodes[a].neighbors.iter().any(|n| b_neighbors.contains(n))
    }

    /// Adds the undirected edge `a-b`.
    /// # Returns `false` when the edge already exists or `a == b`
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b || self.has_edge(a, b) {
            return false;
        }
        debug_assert!(self.contains(a) && self.contains(b), "connecting a removed node");

        self.nodes[a].neighbors.push(b);
        self.nodes[b].neighbors.push(a);
        true
    }

    /// Tombstones a node and detaches it from all of its neighbours.
    pub fn remove_node(&mut self, id: NodeId) {
        if !self.contains(id) {
            return;
        }

        let neighbors = std::mem::take(&mut self.nodes[id].neighbors);
        for n in neighbors {
            self.nodes[n].neighbors.retain(|other| *other != id);
        }
        self.nodes[id].alive = false;
        self.live_count -= 1;
    }

    /// Every edge exactly once as `(low, high)`, ordered by the lower id.
    pub fn edge_iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes().flat_map(|node| {
            node.neighbors
                .iter()
                .copied()
                .filter(move |&n| node.id < n)
                .map(move |n| (node.id, n))
        })
    }

    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges: Vec<_> = self.edge_iter().collect();
        edges.sort_unstable();
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edge_iter().count()
    }

    /// Edge endpoints as positions, for drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.edge_iter().map(|(a, b)| (self.position(a), self.position(b)))
    }
}
