use crate::grid::{GridBounds, Position};
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Barrier cells, organized as the segments they were defined in.
///
/// Membership is answered from a flattened hash set; the segment list is
/// kept only for reporting.
#[derive(Debug, Clone, Default)]
pub struct BarrierMap {
    segments: Vec<Vec<Position>>,
    cells: FxHashSet<Position>,
}

impl BarrierMap {
    pub fn new() -> Self {
        BarrierMap::default()
    }

    pub fn from_segments(segments: Vec<Vec<Position>>) -> Self {
        let cells = segments.iter().flatten().copied().collect();
        BarrierMap { segments, cells }
    }

    /// Generate a random scatter of `count` barrier cells, avoiding the
    /// start and goal. A seed gives reproducible layouts.
    pub fn random(
        bounds: GridBounds,
        count: usize,
        start: Position,
        goal: Position,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = if let Some(seed) = seed {
            rand::rngs::StdRng::seed_from_u64(seed)
        } else {
            rand::rngs::StdRng::from_entropy()
        };

        let mut cells = FxHashSet::default();
        let mut attempts = 0;
        // Bounded attempts so a crowded grid cannot loop forever.
        while cells.len() < count && attempts < count * 10 {
            let pos = Position {
                x: rng.gen_range(1..=bounds.width),
                y: rng.gen_range(1..=bounds.height),
            };

            if pos != start && pos != goal && !cells.contains(&pos) {
                cells.insert(pos);
            }
            attempts += 1;
        }

        let mut segment: Vec<Position> = cells.iter().copied().collect();
        segment.sort();
        BarrierMap::from_segments(vec![segment])
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn cells(&self) -> &FxHashSet<Position> {
        &self.cells
    }

    pub fn segments(&self) -> &[Vec<Position>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Movement pricing: barriers are expensive terrain, not walls.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    pub unit_cost: u32,
    pub barrier_penalty: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            unit_cost: 1,
            barrier_penalty: 200,
        }
    }
}

impl CostModel {
    pub fn new(unit_cost: u32, barrier_penalty: u32) -> Self {
        CostModel {
            unit_cost,
            barrier_penalty,
        }
    }

    /// Cost of stepping into `next`.
    pub fn move_cost(&self, next: Position, barriers: &BarrierMap) -> u32 {
        if barriers.contains(next) {
            self.barrier_penalty
        } else {
            self.unit_cost
        }
    }
}
