use crate::Result;
use num_traits::Float;
use std::fmt::Debug;

/// Trait representing the read capability shared by all adjacency containers.
///
/// An adjacency container is a finite ordered sequence of nodes
/// `0..num_nodes()`, where each node owns an ordered sequence of integer
/// adjacents. Differently from the most common adjacency lists, which are
/// thought for handling graph structures, this is a more general
/// representation: the adjacent values need not be node ids, so the
/// container acts as a sparse set-valued map from integers to integers.
///
/// Adjacent values are unique per node (no parallel connections), but carry
/// no ordering guarantee beyond insertion order.
pub trait AdjacencyContainer: Debug {
    /// Returns the number of nodes in the container
    fn num_nodes(&self) -> usize;

    /// Returns the total number of connections across all nodes
    fn num_connections(&self) -> usize;

    /// Returns the number of adjacents owned by the given node
    ///
    /// Fails with [`crate::Error::OutOfRange`] if `node >= num_nodes()`.
    fn num_adjacents(&self, node: usize) -> Result<usize>;

    /// Returns the adjacent in position `idx` of the given node's sequence
    ///
    /// Fails with [`crate::Error::OutOfRange`] if `node >= num_nodes()` or
    /// `idx >= num_adjacents(node)`.
    fn get_adjacent(&self, node: usize, idx: usize) -> Result<usize>;

    /// Returns an iterator over the given node's adjacents, in sequence
    /// order; empty if the node does not exist
    fn adjacents(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}

/// Trait for adjacency containers whose connections carry a weight.
///
/// The weights are indexed identically to the adjacents: the connection in
/// position `idx` of node `i` pairs `get_adjacent(i, idx)` with
/// `get_weight(i, idx)`.
pub trait WeightedContainer<W>: AdjacencyContainer
where
    W: Float + Debug + Copy,
{
    /// Returns the weight of the connection in position `idx` of the given
    /// node's sequence
    ///
    /// Fails with [`crate::Error::OutOfRange`] if `node >= num_nodes()` or
    /// `idx >= num_adjacents(node)`.
    fn get_weight(&self, node: usize, idx: usize) -> Result<W>;

    /// Returns an iterator over the given node's (adjacent, weight) pairs,
    /// in sequence order; empty if the node does not exist
    fn connections(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;
}
