use crate::adjacency::mutable::MutableAdjacency;
use crate::adjacency::traits::{AdjacencyContainer, WeightedContainer};
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A mutable adjacency container whose connections carry a floating point
/// weight.
///
/// This decorates [`MutableAdjacency`] with a weight sequence per node, kept
/// index-aligned with the adjacents. Every mutation of the unweighted
/// container has a weight-aware sibling here; the plain forms default the
/// weight of new or redirected connections to 1.
#[derive(Debug, Clone)]
pub struct WeightedAdjacency<W = f64>
where
    W: Float + Debug + Copy,
{
    /// The underlying unweighted container.
    list: MutableAdjacency,

    /// Connection weights, aligned with the adjacency lists.
    weights: Vec<Vec<W>>,
}

impl<W> WeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a container with `num_nodes` nodes and no connections.
    pub fn with_nodes(num_nodes: usize) -> Self {
        WeightedAdjacency {
            list: MutableAdjacency::with_nodes(num_nodes),
            weights: vec![Vec::new(); num_nodes],
        }
    }

    /// Creates a container from parallel lists of `(node, adjacent)`
    /// connections and their weights, where `weights[i]` belongs to
    /// `connections[i]`.
    ///
    /// As in [`MutableAdjacency::from_connections`], duplicate pairs are
    /// silently dropped, together with their weights.
    ///
    /// Fails with [`Error::FailedAssertion`] if the two lists differ in
    /// length.
    pub fn from_connections(connections: &[(usize, usize)], weights: &[W]) -> Result<Self> {
        if connections.len() != weights.len() {
            return Err(Error::FailedAssertion(format!(
                "{} connections do not match {} weights",
                connections.len(),
                weights.len()
            )));
        }

        let num_nodes = connections
            .iter()
            .map(|&(node, _)| node + 1)
            .max()
            .unwrap_or(0);

        let mut container = Self::with_nodes(num_nodes);
        for (&(node, adjacent), &weight) in connections.iter().zip(weights) {
            if container
                .add_adjacent_weighted(node, adjacent, weight)
                .is_err()
            {
                log::trace!("dropping duplicate connection ({}, {})", node, adjacent);
            }
        }
        Ok(container)
    }

    /// Creates a weighted copy of any unweighted [`AdjacencyContainer`],
    /// assigning every connection the weight 1.
    pub fn from_container<C>(source: &C) -> Self
    where
        C: AdjacencyContainer + ?Sized,
    {
        let list = MutableAdjacency::from_container(source);
        let weights = (0..list.num_nodes())
            .map(|node| vec![W::one(); list.adjacents(node).count()])
            .collect();
        WeightedAdjacency { list, weights }
    }

    /// Creates a deep copy of any [`WeightedContainer`], carrying its
    /// weights over.
    pub fn from_weighted_container<C>(source: &C) -> Self
    where
        C: WeightedContainer<W> + ?Sized,
    {
        let num_nodes = source.num_nodes();
        let mut container = Self::with_nodes(num_nodes);
        for node in 0..num_nodes {
            for (adjacent, weight) in source.connections(node) {
                if container
                    .add_adjacent_weighted(node, adjacent, weight)
                    .is_err()
                {
                    log::trace!("dropping duplicate connection ({}, {})", node, adjacent);
                }
            }
        }
        container
    }

    /// Appends a new node with an empty adjacency list.
    pub fn add_node(&mut self) {
        self.list.add_node();
        self.weights.push(Vec::new());
    }

    /// Inserts a new empty node at index `i`, shifting higher node ids up
    /// by one. See [`MutableAdjacency::insert_node`] for the renumbering
    /// contract.
    pub fn insert_node(&mut self, i: usize) -> Result<()> {
        self.list.insert_node(i)?;
        self.weights.insert(i, Vec::new());
        Ok(())
    }

    /// Swaps the adjacency lists and weights of nodes `i` and `j`.
    pub fn swap_nodes(&mut self, i: usize, j: usize) -> Result<()> {
        self.list.swap_nodes(i, j)?;
        self.weights.swap(i, j);
        Ok(())
    }

    /// Removes node `i`, shifting higher node ids down by one. See
    /// [`MutableAdjacency::remove_node`] for the renumbering contract.
    pub fn remove_node(&mut self, i: usize) -> Result<()> {
        self.list.remove_node(i)?;
        self.weights.remove(i);
        Ok(())
    }

    /// Appends `j` to node `i`'s adjacency list with weight 1.
    pub fn add_adjacent(&mut self, i: usize, j: usize) -> Result<()> {
        self.add_adjacent_weighted(i, j, W::one())
    }

    /// Appends `j` to node `i`'s adjacency list with the given weight.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` is invalid, or with
    /// [`Error::FailedAssertion`] if `j` is already an adjacent of `i`.
    pub fn add_adjacent_weighted(&mut self, i: usize, j: usize, weight: W) -> Result<()> {
        self.list.add_adjacent(i, j)?;
        self.weights[i].push(weight);
        Ok(())
    }

    /// Inserts `j` at position `idx` of node `i`'s list with weight 1.
    pub fn insert_adjacent(&mut self, i: usize, j: usize, idx: usize) -> Result<()> {
        self.insert_adjacent_weighted(i, j, idx, W::one())
    }

    /// Inserts `j` at position `idx` of node `i`'s list with the given
    /// weight, shifting the following connections forward.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` or `idx` is invalid, or with
    /// [`Error::FailedAssertion`] if `j` is already an adjacent of `i`.
    pub fn insert_adjacent_weighted(
        &mut self,
        i: usize,
        j: usize,
        idx: usize,
        weight: W,
    ) -> Result<()> {
        self.list.insert_adjacent(i, j, idx)?;
        self.weights[i].insert(idx, weight);
        Ok(())
    }

    /// Redirects the connection at position `idx` of node `i` to the value
    /// `j`, resetting its weight to 1.
    pub fn update_adjacent(&mut self, i: usize, j: usize, idx: usize) -> Result<()> {
        self.update_adjacent_weighted(i, j, idx, W::one())
    }

    /// Redirects the connection at position `idx` of node `i` to the value
    /// `j` with the given weight.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` or `idx` is invalid, or with
    /// [`Error::FailedAssertion`] if `j` already appears elsewhere in `i`'s
    /// list.
    pub fn update_adjacent_weighted(
        &mut self,
        i: usize,
        j: usize,
        idx: usize,
        weight: W,
    ) -> Result<()> {
        self.list.update_adjacent(i, j, idx)?;
        self.weights[i][idx] = weight;
        Ok(())
    }

    /// Replaces the adjacent value `j` of node `i` with the value `k`,
    /// keeping the connection's weight.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` is invalid, or with
    /// [`Error::FailedAssertion`] if `k` is already an adjacent of `i` or
    /// `j` is not.
    pub fn replace_adjacent(&mut self, i: usize, j: usize, k: usize) -> Result<()> {
        self.list.replace_adjacent(i, j, k)
    }

    /// Replaces only the weight of the existing adjacent `j` of node `i`,
    /// leaving its target value untouched.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` is invalid, or with
    /// [`Error::FailedAssertion`] if `j` is not an adjacent of `i`.
    pub fn replace_weight(&mut self, i: usize, j: usize, weight: W) -> Result<()> {
        if i >= self.num_nodes() {
            return Err(Error::out_of_range("nodes", i, self.num_nodes()));
        }
        let pos = self.list.position_of(i, j)?;
        self.weights[i][pos] = weight;
        Ok(())
    }

    /// Replaces the adjacent value `j` of node `i` with the value `k` and
    /// assigns the connection a new weight, in one operation.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` is invalid, or with
    /// [`Error::FailedAssertion`] if `k` is already an adjacent of `i` or
    /// `j` is not.
    pub fn replace_adjacent_weighted(
        &mut self,
        i: usize,
        j: usize,
        k: usize,
        weight: W,
    ) -> Result<()> {
        self.list.replace_adjacent(i, j, k)?;
        let pos = self.list.position_of(i, k)?;
        self.weights[i][pos] = weight;
        Ok(())
    }

    /// Removes the connection at position `idx` of node `i`, together with
    /// its weight.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` or `idx` is invalid.
    pub fn remove_adjacent(&mut self, i: usize, idx: usize) -> Result<()> {
        self.list.remove_adjacent(i, idx)?;
        self.weights[i].remove(idx);
        Ok(())
    }
}

impl<W> AdjacencyContainer for WeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn num_nodes(&self) -> usize {
        self.list.num_nodes()
    }

    fn num_connections(&self) -> usize {
        self.list.num_connections()
    }

    fn num_adjacents(&self, node: usize) -> Result<usize> {
        self.list.num_adjacents(node)
    }

    fn get_adjacent(&self, node: usize, idx: usize) -> Result<usize> {
        self.list.get_adjacent(node, idx)
    }

    fn adjacents(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        self.list.adjacents(node)
    }
}

impl<W> WeightedContainer<W> for WeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn get_weight(&self, node: usize, idx: usize) -> Result<W> {
        // Delegating the lookup performs both range checks
        self.list.get_adjacent(node, idx)?;
        Ok(self.weights[node][idx])
    }

    fn connections(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.weights.get(node) {
            Some(weights) => Box::new(self.list.adjacents(node).zip(weights.iter().copied())),
            None => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_stay_aligned_through_mutation() {
        let mut wm: WeightedAdjacency = WeightedAdjacency::with_nodes(2);
        wm.add_adjacent_weighted(0, 5, 2.0).unwrap();
        wm.add_adjacent_weighted(0, 6, 3.0).unwrap();
        wm.insert_adjacent_weighted(0, 7, 1, 4.0).unwrap();

        let pairs: Vec<(usize, f64)> = wm.connections(0).collect();
        assert_eq!(pairs, vec![(5, 2.0), (7, 4.0), (6, 3.0)]);

        wm.remove_adjacent(0, 0).unwrap();
        let pairs: Vec<(usize, f64)> = wm.connections(0).collect();
        assert_eq!(pairs, vec![(7, 4.0), (6, 3.0)]);
    }

    #[test]
    fn failed_list_mutation_leaves_weights_untouched() {
        let mut wm: WeightedAdjacency = WeightedAdjacency::with_nodes(1);
        wm.add_adjacent_weighted(0, 3, 2.5).unwrap();
        assert!(wm.add_adjacent_weighted(0, 3, 9.0).is_err());
        assert_eq!(wm.get_weight(0, 0).unwrap(), 2.5);
        assert_eq!(wm.num_adjacents(0).unwrap(), 1);
    }
}
