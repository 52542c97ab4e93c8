//! Shortest-cost routing on a bounded grid with penalized barrier cells.
//!
//! Two informed-search strategies share the same topology and cost model:
//!
//! - **Uniform-cost search** ([`UniformCost`]) orders its frontier by the
//!   cumulative path cost alone
//! - **A\*** ([`AStar`]) adds a Chebyshev estimate of the remaining cost
//!
//! Barrier cells are expensive terrain rather than walls: a route may cut
//! through one when every detour costs more. Both strategies return the
//! route, the set of cells finalized along the way, and the total cost.

pub mod barrier;
pub mod config;
pub mod grid;
pub mod search;
pub mod statistics;

pub use barrier::{BarrierMap, CostModel};
pub use grid::{GridBounds, Position};
pub use search::{AStar, SearchError, SearchResult, SearchStrategy, UniformCost};

/// Uniform-cost search over the default 8x8 grid and cost model.
pub fn uniform_cost_search(
    start: Position,
    goal: Position,
    barriers: &BarrierMap,
) -> Result<SearchResult, SearchError> {
    UniformCost::default().search(start, goal, barriers)
}

/// A* search over the default 8x8 grid and cost model.
pub fn a_star_search(
    start: Position,
    goal: Position,
    barriers: &BarrierMap,
) -> Result<SearchResult, SearchError> {
    AStar::default().search(start, goal, barriers)
}
