use crate::collections::Stack;
use crate::tile::TileId;

pub mod astar;

pub use astar::{astar, manhattan, AstarSolver};

/// A tile reached during search together with the index of the node it was reached from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub tile: TileId,
    pub parent: Option<usize>,
}

/// The parent-linked result of a successful search, rooted at the goal. Node `i` has parent
/// `i + 1` and the last node (the start) has none.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchChain {
    nodes: Vec<SearchNode>,
    cost: f64,
}

impl SearchChain {
    /// Extracts the chain ending at `head` from a search arena, discarding every other node.
    pub(crate) fn from_arena(arena: &[SearchNode], head: usize, cost: f64) -> SearchChain {
        let tiles = std::iter::successors(Some(&arena[head]), |n| n.parent.map(|p| &arena[p]))
            .map(|n| n.tile)
            .collect::<Vec<_>>();
        let last = tiles.len() - 1;
        let nodes = tiles
            .into_iter()
            .enumerate()
            .map(|(i, tile)| SearchNode {
                tile,
                parent: (i < last).then_some(i + 1),
            })
            .collect();
        SearchChain { nodes, cost }
    }
    /// The node holding the goal tile.
    pub fn head(&self) -> &SearchNode {
        &self.nodes[0]
    }
    pub fn parent(&self, node: &SearchNode) -> Option<&SearchNode> {
        node.parent.map(|p| &self.nodes[p])
    }
    /// Walks the parent links from the goal back to the start.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(self.head()), |n| self.parent(n))
    }
    /// Number of tiles on the path, both endpoints included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    /// Always false: a chain holds at least the start tile.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Number of moves on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }
    /// Summed edge weight from start to goal.
    pub fn cost(&self) -> f64 {
        self.cost
    }
    pub fn goal(&self) -> TileId {
        self.head().tile
    }
    pub fn start(&self) -> TileId {
        self.nodes[self.nodes.len() - 1].tile
    }
    /// Orders the chain from start to goal.
    pub fn to_path(&self) -> Vec<TileId> {
        let mut stack = Stack::with_capacity(self.len());
        for node in self.iter() {
            stack.push(node.tile);
        }
        let mut path = Vec::with_capacity(stack.size());
        while let Some(tile) = stack.try_pop() {
            path.push(tile);
        }
        path
    }
}
