use crate::adjacency::compact::CompactAdjacency;
use crate::adjacency::traits::{AdjacencyContainer, WeightedContainer};
use crate::adjacency::weighted::WeightedAdjacency;
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// The read-only, flattened counterpart of [`WeightedAdjacency`].
///
/// Built like [`CompactAdjacency`] but carrying a parallel flat weight
/// vector, aligned with the adjacency values. Immutable after construction.
#[derive(Debug, Clone)]
pub struct CompactWeightedAdjacency<W = f64>
where
    W: Float + Debug + Copy,
{
    /// The underlying unweighted CSR container.
    compact: CompactAdjacency,

    /// Connection weights, aligned with the flat adjacency values.
    weights: Vec<W>,
}

impl<W> CompactWeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a container from parallel lists of `(node, adjacent)`
    /// connections and their weights, where `weights[i]` belongs to
    /// `connections[i]`.
    ///
    /// Connections are stably sorted by node id together with their
    /// weights; the node id space covers both endpoints, as in
    /// [`CompactAdjacency::from_connections`].
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
            .map(|&(node, adjacent)| node.max(adjacent) + 1)
            .max()
            .unwrap_or(0);

        let mut sorted: Vec<((usize, usize), W)> = connections
            .iter()
            .copied()
            .zip(weights.iter().copied())
            .collect();
        sorted.sort_by_key(|&((node, _), _)| node);

        let mut values = Vec::with_capacity(sorted.len());
        let mut sorted_weights = Vec::with_capacity(sorted.len());
        let mut offsets = vec![0usize; num_nodes + 1];
        for &((node, adjacent), weight) in &sorted {
            offsets[node + 1] += 1;
            values.push(adjacent);
            sorted_weights.push(weight);
        }
        for node in 0..num_nodes {
            offsets[node + 1] += offsets[node];
        }

        Ok(CompactWeightedAdjacency {
            compact: CompactAdjacency::from_parts(values, offsets),
            weights: sorted_weights,
        })
    }

    /// Creates a weighted, flattened copy of any unweighted
    /// [`AdjacencyContainer`], assigning every connection the weight 1.
    pub fn from_container<C>(source: &C) -> Self
    where
        C: AdjacencyContainer + ?Sized,
    {
        let compact = CompactAdjacency::from_container(source);
        let weights = vec![W::one(); compact.num_connections()];
        CompactWeightedAdjacency { compact, weights }
    }

    /// Creates a deep, flattened copy of any [`WeightedContainer`],
    /// carrying its weights over.
    ///
    /// When the source is already a `CompactWeightedAdjacency`, cloning it
    /// is the cheaper same-representation fast path.
    pub fn from_weighted_container<C>(source: &C) -> Self
    where
        C: WeightedContainer<W> + ?Sized,
    {
        let num_nodes = source.num_nodes();
        let mut values = Vec::with_capacity(source.num_connections());
        let mut weights = Vec::with_capacity(source.num_connections());
        let mut offsets = Vec::with_capacity(num_nodes + 1);
        offsets.push(0);
        for node in 0..num_nodes {
            for (adjacent, weight) in source.connections(node) {
                values.push(adjacent);
                weights.push(weight);
            }
            offsets.push(values.len());
        }
        CompactWeightedAdjacency {
            compact: CompactAdjacency::from_parts(values, offsets),
            weights,
        }
    }
}

impl<W> Default for CompactWeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        CompactWeightedAdjacency {
            compact: CompactAdjacency::default(),
            weights: Vec::new(),
        }
    }
}

impl<W> From<&WeightedAdjacency<W>> for CompactWeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn from(source: &WeightedAdjacency<W>) -> Self {
        CompactWeightedAdjacency::from_weighted_container(source)
    }
}

/// Freezes a [`WeightedAdjacency`], consuming it.
impl<W> From<WeightedAdjacency<W>> for CompactWeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn from(source: WeightedAdjacency<W>) -> Self {
        CompactWeightedAdjacency::from_weighted_container(&source)
    }
}

impl<W> From<&CompactWeightedAdjacency<W>> for WeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn from(source: &CompactWeightedAdjacency<W>) -> Self {
        WeightedAdjacency::from_weighted_container(source)
    }
}

/// Thaws a [`CompactWeightedAdjacency`] back into the mutable weighted
/// representation, consuming it.
impl<W> From<CompactWeightedAdjacency<W>> for WeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn from(source: CompactWeightedAdjacency<W>) -> Self {
        WeightedAdjacency::from_weighted_container(&source)
    }
}

impl<W> AdjacencyContainer for CompactWeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn num_nodes(&self) -> usize {
        self.compact.num_nodes()
    }

    fn num_connections(&self) -> usize {
        self.compact.num_connections()
    }

    fn num_adjacents(&self, node: usize) -> Result<usize> {
        self.compact.num_adjacents(node)
    }

    fn get_adjacent(&self, node: usize, idx: usize) -> Result<usize> {
        self.compact.get_adjacent(node, idx)
    }

    fn adjacents(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        self.compact.adjacents(node)
    }
}

impl<W> WeightedContainer<W> for CompactWeightedAdjacency<W>
where
    W: Float + Debug + Copy,
{
    fn get_weight(&self, node: usize, idx: usize) -> Result<W> {
        // Delegating the lookup performs both range checks
        self.compact.get_adjacent(node, idx)?;
        Ok(self.weights[self.compact.node_range(node).start + idx])
    }

    fn connections(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if node >= self.num_nodes() {
            return Box::new(std::iter::empty());
        }
        let range = self.compact.node_range(node);
        Box::new(
            self.compact
                .adjacents(node)
                .zip(self.weights[range].iter().copied()),
        )
    }
}
