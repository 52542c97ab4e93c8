use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::barrier::{BarrierMap, CostModel};
use crate::grid::{GridBounds, Position};
use crate::search::common::{
    ensure_in_bounds, reconstruct_path, FrontierEntry, SearchError, SearchResult, SearchStrategy,
};

/// Chebyshev distance between two cells. With king moves at unit cost this
/// never overestimates the true remaining cost, so A* stays optimal.
pub fn chebyshev(pos: Position, goal: Position) -> u32 {
    (pos.x - goal.x).abs().max((pos.y - goal.y).abs()) as u32
}

/// A* search: the frontier is ordered by F = G + Chebyshev estimate to the
/// goal.
#[derive(Debug, Clone, Copy)]
pub struct AStar {
    bounds: GridBounds,
    costs: CostModel,
}

impl AStar {
    pub fn new(bounds: GridBounds, costs: CostModel) -> Self {
        AStar { bounds, costs }
    }
}

impl Default for AStar {
    fn default() -> Self {
        AStar::new(GridBounds::default(), CostModel::default())
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn search(
        &self,
        start: Position,
        goal: Position,
        barriers: &BarrierMap,
    ) -> Result<SearchResult, SearchError> {
        ensure_in_bounds(self.bounds, start)?;
        ensure_in_bounds(self.bounds, goal)?;

        // G holds the best known path cost from start; F adds the estimate
        // to the goal and is what the frontier is ordered by.
        let mut g: FxHashMap<Position, u32> = FxHashMap::default();
        let mut f: FxHashMap<Position, u32> = FxHashMap::default();
        let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
        let mut expanded: FxHashSet<Position> = FxHashSet::default();
        let mut frontier = BinaryHeap::new();

        g.insert(start, 0);
        f.insert(start, chebyshev(start, goal));
        frontier.push(FrontierEntry {
            priority: f[&start],
            g: 0,
            pos: start,
        });

        while let Some(entry) = frontier.pop() {
            let current = entry.pos;

            // Stale heap entry: the cell was finalized, or relaxed to a
            // better estimate, after this entry was pushed.
            if expanded.contains(&current) || entry.priority != f[&current] {
                continue;
            }

            if current == goal {
                let path = reconstruct_path(&parent, goal);
                // F[goal] = G[goal] since the estimate vanishes at the goal.
                return Ok(SearchResult {
                    path,
                    expanded,
                    cost: f[&goal],
                });
            }

            expanded.insert(current);
            let current_g = g[&current];

            for next in self.bounds.neighbors(current) {
                if expanded.contains(&next) {
                    continue;
                }

                let tentative_g = current_g + self.costs.move_cost(next, barriers);
                let estimate = tentative_g + chebyshev(next, goal);
                match f.get(&next) {
                    Some(&known) if estimate >= known => {}
                    _ => {
                        g.insert(next, tentative_g);
                        f.insert(next, estimate);
                        parent.insert(next, current);
                        frontier.push(FrontierEntry {
                            priority: estimate,
                            g: tentative_g,
                            pos: next,
                        });
                    }
                }
            }
        }

        Err(SearchError::Exhausted { start, goal })
    }
}
