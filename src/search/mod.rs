pub mod a_star;
pub mod common;
pub mod reference;
pub mod uniform_cost;

pub use a_star::AStar;
pub use common::{SearchError, SearchResult, SearchStrategy};
pub use uniform_cost::UniformCost;
