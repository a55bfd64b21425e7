//! Sparse Containers - indexed heaps and adjacency-list containers
//!
//! This library provides a small set of general-purpose in-memory data
//! structures:
//!
//! - [`IndexedHeap`]: a binary min-/max-heap over a fixed, pre-numbered set
//!   of elements `{0..n-1}`, supporting O(log n) key increase/decrease and
//!   O(1) key lookup by element id.
//! - An adjacency-container family: a mutable, general-purpose sparse map
//!   from integer keys to sets of integer values, with a flexible
//!   vector-of-vectors representation ([`MutableAdjacency`]) and a compact,
//!   read-optimized CSR representation ([`CompactAdjacency`]), plus weighted
//!   variants of both.
//!
//! The two representations convert into each other (or from anything
//! implementing [`AdjacencyContainer`]), enabling a "build flexibly, freeze
//! for performance" workflow.

pub mod adjacency;
pub mod data_structures;

pub use adjacency::{
    AdjacencyContainer, CompactAdjacency, CompactWeightedAdjacency, MutableAdjacency,
    WeightedAdjacency, WeightedContainer,
};
/// Re-export main types for convenient use
pub use data_structures::IndexedHeap;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Index {index} out of range: {what} has length {len}")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Assertion failed: {0}")]
    FailedAssertion(String),

    #[error("Allocation of {0} bytes failed")]
    AllocationFailed(usize),
}

impl Error {
    /// Builds an out-of-range error for an index checked against a length.
    pub(crate) fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Error::OutOfRange { what, index, len }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
