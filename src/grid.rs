use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

/// Rectangular grid limits. Coordinates are 1-based: valid cells are
/// [1, width] x [1, height].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl Default for GridBounds {
    fn default() -> Self {
        GridBounds {
            width: 8,
            height: 8,
        }
    }
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> Self {
        GridBounds { width, height }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.x <= self.width && pos.y >= 1 && pos.y <= self.height
    }

    /// All in-bounds cells one king-move away from `pos`.
    ///
    /// The offset enumeration order is fixed; tie-breaking in the search
    /// engines relies on every call seeing the same order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(8);

        for (dx, dy) in &[
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (-1, 1),
            (1, -1),
            (-1, -1),
        ] {
            let next = Position {
                x: pos.x + dx,
                y: pos.y + dy,
            };
            if self.contains(next) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// Print a visual representation of a search scenario
    pub fn print_route(
        &self,
        start: Position,
        goal: Position,
        barriers: &FxHashSet<Position>,
        path: &[Position],
        expanded: &FxHashSet<Position>,
    ) {
        println!("Legend: S=Start, G=Goal, *=Path, o=Expanded, #=Barrier, .=Empty");

        let path_cells: FxHashSet<Position> = path.iter().copied().collect();

        // Print column numbers header
        print!("   ");
        for x in 1..=self.width {
            print!("{:2}", x % 10);
        }
        println!();

        for y in 1..=self.height {
            // Print row number
            print!("{:2} ", y);

            for x in 1..=self.width {
                let pos = Position { x, y };
                let char = if pos == start {
                    'S'
                } else if pos == goal {
                    'G'
                } else if path_cells.contains(&pos) {
                    '*'
                } else if barriers.contains(&pos) {
                    '#'
                } else if expanded.contains(&pos) {
                    'o'
                } else {
                    '.'
                };
                print!("{} ", char);
            }
            println!();
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_matches_one_based_bounds() {
        let bounds = GridBounds::default();
        assert!(bounds.contains(Position::new(1, 1)));
        assert!(bounds.contains(Position::new(8, 8)));
        assert!(!bounds.contains(Position::new(0, 4)));
        assert!(!bounds.contains(Position::new(4, 9)));
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let bounds = GridBounds::default();
        let neighbors = bounds.neighbors(Position::new(4, 4));
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.iter().all(|n| bounds.contains(*n)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let bounds = GridBounds::default();
        let neighbors = bounds.neighbors(Position::new(1, 1));
        assert_eq!(
            neighbors,
            vec![
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn neighbor_order_is_stable() {
        let bounds = GridBounds::new(5, 5);
        let first = bounds.neighbors(Position::new(3, 3));
        let second = bounds.neighbors(Position::new(3, 3));
        assert_eq!(first, second);
    }
}
