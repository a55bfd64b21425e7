pub mod compact;
pub mod compact_weighted;
pub mod mutable;
pub mod traits;
pub mod weighted;

pub use compact::CompactAdjacency;
pub use compact_weighted::CompactWeightedAdjacency;
pub use mutable::MutableAdjacency;
pub use traits::{AdjacencyContainer, WeightedContainer};
pub use weighted::WeightedAdjacency;
