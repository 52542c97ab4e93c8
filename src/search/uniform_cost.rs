use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::barrier::{BarrierMap, CostModel};
use crate::grid::{GridBounds, Position};
use crate::search::common::{
    ensure_in_bounds, reconstruct_path, FrontierEntry, SearchError, SearchResult, SearchStrategy,
};

/// Uniform-cost (Dijkstra-style) search: the frontier is ordered by the
/// cumulative path cost G alone.
#[derive(Debug, Clone, Copy)]
pub struct UniformCost {
    bounds: GridBounds,
    costs: CostModel,
}

impl UniformCost {
    pub fn new(bounds: GridBounds, costs: CostModel) -> Self {
        UniformCost { bounds, costs }
    }
}

impl Default for UniformCost {
    fn default() -> Self {
        UniformCost::new(GridBounds::default(), CostModel::default())
    }
}

impl SearchStrategy for UniformCost {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn search(
        &self,
        start: Position,
        goal: Position,
        barriers: &BarrierMap,
    ) -> Result<SearchResult, SearchError> {
        ensure_in_bounds(self.bounds, start)?;
        ensure_in_bounds(self.bounds, goal)?;

        // Best known path cost from start, per discovered cell.
        let mut g: FxHashMap<Position, u32> = FxHashMap::default();
        let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
        let mut expanded: FxHashSet<Position> = FxHashSet::default();
        let mut frontier = BinaryHeap::new();

        g.insert(start, 0);
        frontier.push(FrontierEntry {
            priority: 0,
            g: 0,
            pos: start,
        });

        while let Some(entry) = frontier.pop() {
            let current = entry.pos;

            // Stale heap entry: the cell was finalized, or relaxed to a
            // better cost, after this entry was pushed.
            if expanded.contains(&current) || entry.priority != g[&current] {
                continue;
            }

            if current == goal {
                let path = reconstruct_path(&parent, goal);
                return Ok(SearchResult {
                    path,
                    expanded,
                    cost: g[&goal],
                });
            }

            expanded.insert(current);
            let current_g = g[&current];

            for next in self.bounds.neighbors(current) {
                // Finalized cells never go back on the frontier.
                if expanded.contains(&next) {
                    continue;
                }

                let tentative = current_g + self.costs.move_cost(next, barriers);
                match g.get(&next) {
                    Some(&known) if tentative >= known => {}
                    _ => {
                        g.insert(next, tentative);
                        parent.insert(next, current);
                        frontier.push(FrontierEntry {
                            priority: tentative,
                            g: tentative,
                            pos: next,
                        });
                    }
                }
            }
        }

        Err(SearchError::Exhausted { start, goal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::assert_valid_route;

    fn searcher() -> UniformCost {
        UniformCost::default()
    }

    #[test]
    fn diagonal_route_on_open_grid() {
        let result = searcher()
            .search(Position::new(1, 1), Position::new(3, 3), &BarrierMap::new())
            .unwrap();

        assert_eq!(result.cost, 2);
        assert_eq!(result.path.len(), 3);
        assert_valid_route(&GridBounds::default(), &CostModel::default(), &result, &BarrierMap::new());
    }

    #[test]
    fn detours_around_a_penalized_cell() {
        let barriers = BarrierMap::from_segments(vec![vec![Position::new(2, 1)]]);
        let result = searcher()
            .search(Position::new(1, 1), Position::new(3, 1), &barriers)
            .unwrap();

        // The straight line through (2,1) would cost 201; the detour via
        // (2,2) costs 2.
        assert_eq!(result.cost, 2);
        assert!(!result.path.contains(&Position::new(2, 1)));
        assert_valid_route(&GridBounds::default(), &CostModel::default(), &result, &barriers);
    }

    #[test]
    fn pays_the_penalty_when_no_detour_exists() {
        // A full-height wall on column 2 forces the route through it.
        let wall: Vec<Position> = (1..=8).map(|y| Position::new(2, y)).collect();
        let barriers = BarrierMap::from_segments(vec![wall]);
        let result = searcher()
            .search(Position::new(1, 4), Position::new(3, 4), &barriers)
            .unwrap();

        assert_eq!(result.cost, 201);
        assert_valid_route(&GridBounds::default(), &CostModel::default(), &result, &barriers);
    }

    #[test]
    fn start_equals_goal_is_trivial() {
        let result = searcher()
            .search(Position::new(5, 5), Position::new(5, 5), &BarrierMap::new())
            .unwrap();

        assert_eq!(result.path, vec![Position::new(5, 5)]);
        assert_eq!(result.cost, 0);
        assert!(result.expanded.is_empty());
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let err = searcher()
            .search(Position::new(0, 0), Position::new(3, 3), &BarrierMap::new())
            .unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(Position::new(0, 0)));

        let err = searcher()
            .search(Position::new(1, 1), Position::new(9, 1), &BarrierMap::new())
            .unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(Position::new(9, 1)));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let barriers = BarrierMap::from_segments(vec![vec![
            Position::new(4, 3),
            Position::new(4, 4),
            Position::new(4, 5),
        ]]);
        let first = searcher()
            .search(Position::new(1, 4), Position::new(8, 4), &barriers)
            .unwrap();
        let second = searcher()
            .search(Position::new(1, 4), Position::new(8, 4), &barriers)
            .unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.expanded, second.expanded);
    }

    #[test]
    fn goal_is_not_counted_as_expanded() {
        let result = searcher()
            .search(Position::new(1, 1), Position::new(2, 2), &BarrierMap::new())
            .unwrap();
        assert!(!result.expanded.contains(&Position::new(2, 2)));
    }
}
