use clap::Parser;

use crate::barrier::CostModel;
use crate::grid::{GridBounds, Position};

/// One barrier segment as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrierSegment(pub Vec<Position>);

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 8)]
    pub width: i32,

    #[arg(long, default_value_t = 8)]
    pub height: i32,

    /// Start cell as "x,y" (1-based)
    #[arg(long, default_value = "1,1", value_parser = parse_position)]
    pub start: Position,

    /// Goal cell as "x,y" (1-based)
    #[arg(long, default_value = "8,8", value_parser = parse_position)]
    pub goal: Position,

    /// Barrier segment as "x,y x,y ..." (repeat the flag per segment)
    #[arg(long = "barrier", value_parser = parse_segment)]
    pub barriers: Vec<BarrierSegment>,

    /// Scatter this many random barrier cells in addition to --barrier
    #[arg(long, default_value_t = 0)]
    pub random_barriers: usize,

    /// Seed for --random-barriers, for reproducible layouts
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "all")]
    pub algorithm: String,

    /// Cost of stepping into a barrier cell
    #[arg(long, default_value_t = 200)]
    pub penalty: u32,

    /// Cost of stepping into a free cell
    #[arg(long, default_value_t = 1)]
    pub unit_cost: u32,

    /// Cross-check the result against the pathfinding crate's A*
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.width, self.height)
    }

    pub fn costs(&self) -> CostModel {
        CostModel::new(self.unit_cost, self.penalty)
    }

    pub fn barrier_segments(&self) -> Vec<Vec<Position>> {
        self.barriers.iter().map(|s| s.0.clone()).collect()
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("expected 'x,y', got '{}'", s));
    }
    let x = parts[0]
        .parse()
        .map_err(|_| format!("'{}' is not a valid x coordinate", parts[0]))?;
    let y = parts[1]
        .parse()
        .map_err(|_| format!("'{}' is not a valid y coordinate", parts[1]))?;
    Ok(Position::new(x, y))
}

fn parse_segment(s: &str) -> Result<BarrierSegment, String> {
    let cells: Result<Vec<Position>, String> = s
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(parse_position)
        .collect();

    let cells = cells?;
    if cells.is_empty() {
        return Err("barrier segment is empty".to_string());
    }
    Ok(BarrierSegment(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_coordinate_pair() {
        assert_eq!(parse_position("3,7"), Ok(Position::new(3, 7)));
        assert_eq!(parse_position(" 2 , 1 "), Ok(Position::new(2, 1)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,b").is_err());
    }

    #[test]
    fn parses_a_segment_with_mixed_separators() {
        let segment = parse_segment("2,1 2,2;2,3").unwrap();
        assert_eq!(
            segment.0,
            vec![
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3),
            ]
        );
        assert!(parse_segment("  ").is_err());
    }

    #[test]
    fn defaults_match_the_reference_scenario() {
        let config = Config::parse_from(["grid_search"]);
        assert_eq!(config.bounds(), GridBounds::new(8, 8));
        assert_eq!(config.costs().barrier_penalty, 200);
        assert_eq!(config.costs().unit_cost, 1);
        assert_eq!(config.start, Position::new(1, 1));
        assert_eq!(config.goal, Position::new(8, 8));
        assert_eq!(config.algorithm, "all");
    }

    #[test]
    fn repeated_barrier_flags_become_separate_segments() {
        let config = Config::parse_from([
            "grid_search",
            "--barrier",
            "2,1 2,2",
            "--barrier",
            "5,5",
        ]);
        assert_eq!(config.barriers.len(), 2);
        assert_eq!(config.barriers[1].0, vec![Position::new(5, 5)]);
    }
}
