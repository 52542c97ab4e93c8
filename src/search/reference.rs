use pathfinding::prelude::astar;

use crate::barrier::{BarrierMap, CostModel};
use crate::grid::{GridBounds, Position};
use crate::search::a_star::chebyshev;

/// Recompute the optimal path cost with the `pathfinding` crate, over the
/// same topology and cost model as the hand-rolled engines. Used as an
/// independent check of their bookkeeping.
pub fn reference_cost(
    bounds: GridBounds,
    costs: CostModel,
    start: Position,
    goal: Position,
    barriers: &BarrierMap,
) -> Option<u32> {
    if !bounds.contains(start) || !bounds.contains(goal) {
        return None;
    }

    let result = astar(
        &start,
        |p| {
            bounds
                .neighbors(*p)
                .into_iter()
                .map(|next| (next, costs.move_cost(next, barriers)))
                .collect::<Vec<_>>()
        },
        |p| chebyshev(*p, goal),
        |p| *p == goal,
    );

    // Only the cost matters here; the route itself comes from our engines.
    result.map(|(_, cost)| cost)
}
