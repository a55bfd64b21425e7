use crate::adjacency::traits::AdjacencyContainer;
use crate::{Error, Result};

/// A flexible, mutable implementation of [`AdjacencyContainer`].
///
/// The container is backed by one vector of adjacents per node, so every
/// mutation runs in O(degree) or amortized O(1). It is not the most
/// efficient representation for read-only access; freeze it into a
/// [`crate::CompactAdjacency`] when mutation is over.
#[derive(Debug, Clone, Default)]
pub struct MutableAdjacency {
    /// The list of lists implementing the adjacency container.
    adj: Vec<Vec<usize>>,

    /// Cached total number of connections, kept exact across mutations.
    connections: usize,
}

impl MutableAdjacency {
    /// Creates a container with `num_nodes` nodes and no connections.
    pub fn with_nodes(num_nodes: usize) -> Self {
        MutableAdjacency {
            adj: vec![Vec::new(); num_nodes],
            connections: 0,
        }
    }

    /// Creates a container from a list of `(node, adjacent)` connections.
    ///
    /// The node count is inferred as `max(node) + 1` across the pairs, and
    /// each node's vector is pre-reserved by counting its occurrences.
    /// Connections that would duplicate an existing adjacent of their node
    /// are silently dropped; the single-pair
    /// [`MutableAdjacency::add_adjacent`] instead fails on duplicates.
    pub fn from_connections(connections: &[(usize, usize)]) -> Self {
        let num_nodes = connections
            .iter()
            .map(|&(node, _)| node + 1)
            .max()
            .unwrap_or(0);

        let mut counts = vec![0usize; num_nodes];
        for &(node, _) in connections {
            counts[node] += 1;
        }

        let mut container = MutableAdjacency {
            adj: counts.into_iter().map(Vec::with_capacity).collect(),
            connections: 0,
        };
        for &(node, adjacent) in connections {
            if container.add_adjacent(node, adjacent).is_err() {
                log::trace!("dropping duplicate connection ({}, {})", node, adjacent);
            }
        }
        container
    }

    /// Creates a container holding a deep copy of any
    /// [`AdjacencyContainer`], walking it node by node.
    ///
    /// When the source is already a `MutableAdjacency`, cloning it is the
    /// cheaper same-representation fast path.
    pub fn from_container<C>(source: &C) -> Self
    where
        C: AdjacencyContainer + ?Sized,
    {
        let num_nodes = source.num_nodes();
        let mut adj = Vec::with_capacity(num_nodes);
        let mut connections = 0;
        for node in 0..num_nodes {
            let list: Vec<usize> = source.adjacents(node).collect();
            connections += list.len();
            adj.push(list);
        }
        MutableAdjacency { adj, connections }
    }

    /// Appends a new node with an empty adjacency list; its id is the
    /// previous `num_nodes()`.
    pub fn add_node(&mut self) {
        self.adj.push(Vec::new());
    }

    /// Inserts a new node with an empty adjacency list at index `i`.
    ///
    /// Every node previously numbered `j >= i` becomes `j + 1`, but the
    /// adjacency lists themselves are left untouched: adjacent values
    /// elsewhere that referenced a shifted node are not rewritten, and it is
    /// the caller's responsibility to know they are now stale.
    ///
    /// Fails with [`Error::OutOfRange`] if `i >= num_nodes()`.
    pub fn insert_node(&mut self, i: usize) -> Result<()> {
        self.check_node(i)?;
        self.adj.insert(i, Vec::new());
        Ok(())
    }

    /// Swaps the entire adjacency lists of nodes `i` and `j`. Does nothing
    /// when `i == j`. Adjacent values referencing `i` or `j` elsewhere are
    /// not renamed.
    ///
    /// Fails with [`Error::OutOfRange`] if either node is invalid.
    pub fn swap_nodes(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_node(i)?;
        self.check_node(j)?;
        self.adj.swap(i, j);
        Ok(())
    }

    /// Removes node `i` together with its adjacency list.
    ///
    /// Every node previously numbered `j > i` becomes `j - 1`; as with
    /// [`MutableAdjacency::insert_node`], dangling references inside other
    /// nodes' lists are not rewritten.
    ///
    /// Fails with [`Error::OutOfRange`] if `i >= num_nodes()`.
    pub fn remove_node(&mut self, i: usize) -> Result<()> {
        self.check_node(i)?;
        self.connections -= self.adj[i].len();
        self.adj.remove(i);
        Ok(())
    }

    /// Appends `j` to node `i`'s adjacency list.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` is invalid, or with
    /// [`Error::FailedAssertion`] if `j` is already an adjacent of `i`.
    pub fn add_adjacent(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_node(i)?;
        self.check_not_adjacent(i, j)?;

        self.adj[i].push(j);
        self.connections += 1;
        Ok(())
    }

    /// Inserts `j` at position `idx` of node `i`'s adjacency list, shifting
    /// the following entries forward. `idx` may equal `num_adjacents(i)`,
    /// which appends.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` or `idx` is invalid, or with
    /// [`Error::FailedAssertion`] if `j` is already an adjacent of `i`.
    pub fn insert_adjacent(&mut self, i: usize, j: usize, idx: usize) -> Result<()> {
        self.check_node(i)?;
        if idx > self.adj[i].len() {
            return Err(Error::out_of_range("adjacents", idx, self.adj[i].len()));
        }
        self.check_not_adjacent(i, j)?;

        self.adj[i].insert(idx, j);
        self.connections += 1;
        Ok(())
    }

    /// Redirects the connection at position `idx` of node `i` to the value
    /// `j`. Does nothing if the connection already points to `j`.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` or `idx` is invalid, or with
    /// [`Error::FailedAssertion`] if `j` already appears elsewhere in `i`'s
    /// list.
    pub fn update_adjacent(&mut self, i: usize, j: usize, idx: usize) -> Result<()> {
        self.check_node(i)?;
        self.check_adjacent_index(i, idx)?;

        // Ignore if the update does not change the value
        if self.adj[i][idx] == j {
            return Ok(());
        }

        self.check_not_adjacent(i, j)?;
        self.adj[i][idx] = j;
        Ok(())
    }

    /// Replaces the adjacent value `j` in node `i`'s list with the value
    /// `k`, preserving its position.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` is invalid, or with
    /// [`Error::FailedAssertion`] if `k` is already an adjacent of `i` or
    /// `j` is not.
    pub fn replace_adjacent(&mut self, i: usize, j: usize, k: usize) -> Result<()> {
        self.check_node(i)?;
        self.check_not_adjacent(i, k)?;

        let pos = self.position_of(i, j)?;
        self.adj[i][pos] = k;
        Ok(())
    }

    /// Removes the connection at position `idx` of node `i`'s list,
    /// shifting the following entries down.
    ///
    /// Fails with [`Error::OutOfRange`] if `i` or `idx` is invalid.
    pub fn remove_adjacent(&mut self, i: usize, idx: usize) -> Result<()> {
        self.check_node(i)?;
        self.check_adjacent_index(i, idx)?;

        self.adj[i].remove(idx);
        self.connections -= 1;
        Ok(())
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.adj.len() {
            return Err(Error::out_of_range("nodes", node, self.adj.len()));
        }
        Ok(())
    }

    fn check_adjacent_index(&self, node: usize, idx: usize) -> Result<()> {
        if idx >= self.adj[node].len() {
            return Err(Error::out_of_range("adjacents", idx, self.adj[node].len()));
        }
        Ok(())
    }

    fn check_not_adjacent(&self, node: usize, value: usize) -> Result<()> {
        if self.adj[node].contains(&value) {
            return Err(Error::FailedAssertion(format!(
                "{} is already an adjacent of node {}",
                value, node
            )));
        }
        Ok(())
    }

    pub(crate) fn position_of(&self, node: usize, value: usize) -> Result<usize> {
        self.adj[node]
            .iter()
            .position(|&adjacent| adjacent == value)
            .ok_or_else(|| {
                Error::FailedAssertion(format!("{} is not an adjacent of node {}", value, node))
            })
    }
}

impl AdjacencyContainer for MutableAdjacency {
    fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    fn num_connections(&self) -> usize {
        self.connections
    }

    fn num_adjacents(&self, node: usize) -> Result<usize> {
        self.check_node(node)?;
        Ok(self.adj[node].len())
    }

    fn get_adjacent(&self, node: usize, idx: usize) -> Result<usize> {
        self.check_node(node)?;
        self.check_adjacent_index(node, idx)?;
        Ok(self.adj[node][idx])
    }

    fn adjacents(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.adj.get(node) {
            Some(list) => Box::new(list.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
