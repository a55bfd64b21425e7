use crate::adjacency::mutable::MutableAdjacency;
use crate::adjacency::traits::AdjacencyContainer;
use crate::{Error, Result};

/// A compact, read-optimized implementation of [`AdjacencyContainer`].
///
/// All adjacents are concatenated into a single flat vector, nodes in
/// ascending id order, with a per-node offset index (CSR layout). Lookups
/// are O(1) with no per-node allocation and the best cache locality of the
/// family; in exchange the container is immutable after construction.
#[derive(Debug, Clone)]
pub struct CompactAdjacency {
    /// All adjacents, concatenated by ascending node id.
    values: Vec<usize>,

    /// Node `i` owns `values[offsets[i]..offsets[i + 1]]`; the vector
    /// always has `num_nodes() + 1` entries.
    offsets: Vec<usize>,
}

impl CompactAdjacency {
    /// Creates a container from a list of `(node, adjacent)` connections.
    ///
    /// Connections are stably sorted by node id, so each node's adjacents
    /// keep their input order. The node id space covers both endpoints of
    /// every connection: a connection `(4, 5)` implies node 5 exists, with
    /// an empty adjacency list unless other connections fill it.
    pub fn from_connections(connections: &[(usize, usize)]) -> Self {
        let num_nodes = connections
            .iter()
            .map(|&(node, adjacent)| node.max(adjacent) + 1)
            .max()
            .unwrap_or(0);

        let mut sorted = connections.to_vec();
        sorted.sort_by_key(|&(node, _)| node);

        let mut values = Vec::with_capacity(sorted.len());
        let mut offsets = vec![0usize; num_nodes + 1];
        for &(node, adjacent) in &sorted {
            offsets[node + 1] += 1;
            values.push(adjacent);
        }
        for node in 0..num_nodes {
            offsets[node + 1] += offsets[node];
        }

        CompactAdjacency { values, offsets }
    }

    /// Creates a container holding a deep, flattened copy of any
    /// [`AdjacencyContainer`], filling the offsets with running per-node
    /// degree sums.
    ///
    /// When the source is already a `CompactAdjacency`, cloning it is the
    /// cheaper same-representation fast path.
    pub fn from_container<C>(source: &C) -> Self
    where
        C: AdjacencyContainer + ?Sized,
    {
        let num_nodes = source.num_nodes();
        let mut values = Vec::with_capacity(source.num_connections());
        let mut offsets = Vec::with_capacity(num_nodes + 1);
        offsets.push(0);
        for node in 0..num_nodes {
            values.extend(source.adjacents(node));
            offsets.push(values.len());
        }
        CompactAdjacency { values, offsets }
    }

    /// Assembles a container from already-flattened backing vectors.
    /// `offsets` must have one entry more than the number of nodes and be
    /// non-decreasing with `offsets[last] == values.len()`.
    pub(crate) fn from_parts(values: Vec<usize>, offsets: Vec<usize>) -> Self {
        debug_assert_eq!(offsets.last().copied(), Some(values.len()));
        CompactAdjacency { values, offsets }
    }

    /// Range of `values` owned by the given node; the node must be valid.
    pub(crate) fn node_range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node]..self.offsets[node + 1]
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.num_nodes() {
            return Err(Error::out_of_range("nodes", node, self.num_nodes()));
        }
        Ok(())
    }
}

impl Default for CompactAdjacency {
    fn default() -> Self {
        CompactAdjacency {
            values: Vec::new(),
            offsets: vec![0],
        }
    }
}

impl From<&MutableAdjacency> for CompactAdjacency {
    fn from(source: &MutableAdjacency) -> Self {
        CompactAdjacency::from_container(source)
    }
}

/// Freezes a [`MutableAdjacency`], consuming it.
impl From<MutableAdjacency> for CompactAdjacency {
    fn from(source: MutableAdjacency) -> Self {
        CompactAdjacency::from_container(&source)
    }
}

impl From<&CompactAdjacency> for MutableAdjacency {
    fn from(source: &CompactAdjacency) -> Self {
        MutableAdjacency::from_container(source)
    }
}

/// Thaws a [`CompactAdjacency`] back into the mutable representation,
/// consuming it.
impl From<CompactAdjacency> for MutableAdjacency {
    fn from(source: CompactAdjacency) -> Self {
        MutableAdjacency::from_container(&source)
    }
}

impl AdjacencyContainer for CompactAdjacency {
    fn num_nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    fn num_connections(&self) -> usize {
        self.values.len()
    }

    fn num_adjacents(&self, node: usize) -> Result<usize> {
        self.check_node(node)?;
        Ok(self.offsets[node + 1] - self.offsets[node])
    }

    fn get_adjacent(&self, node: usize, idx: usize) -> Result<usize> {
        self.check_node(node)?;
        let degree = self.offsets[node + 1] - self.offsets[node];
        if idx >= degree {
            return Err(Error::out_of_range("adjacents", idx, degree));
        }
        Ok(self.values[self.offsets[node] + idx])
    }

    fn adjacents(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if node >= self.num_nodes() {
            return Box::new(std::iter::empty());
        }
        Box::new(self.values[self.offsets[node]..self.offsets[node + 1]].iter().copied())
    }
}
