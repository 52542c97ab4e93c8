use std::fmt;
use std::time::Duration;

use crate::search::SearchResult;

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub algorithm: String,
    pub cost: u32,
    pub path_len: usize,
    pub expanded_count: usize,
    pub duration: Duration,
}

impl SearchReport {
    pub fn new(algorithm: &str, result: &SearchResult, duration: Duration) -> Self {
        SearchReport {
            algorithm: algorithm.to_string(),
            cost: result.cost,
            path_len: result.path.len(),
            expanded_count: result.expanded.len(),
            duration,
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Path cost: {}", self.cost)?;
        writeln!(f, "Path length: {} cells", self.path_len)?;
        writeln!(f, "Expanded nodes: {}", self.expanded_count)?;
        writeln!(f, "Search time: {:.2?}", self.duration)?;
        Ok(())
    }
}

/// Print a side-by-side table for runs of the same scenario under
/// different algorithms.
pub fn print_comparison(reports: &[SearchReport]) {
    println!("\n=== ALGORITHM COMPARISON ===");
    println!(
        "{:<12} {:<8} {:<8} {:<10} {:<12}",
        "Algorithm", "Cost", "Length", "Expanded", "Time"
    );
    println!("{}", "-".repeat(52));

    for report in reports {
        println!(
            "{:<12} {:<8} {:<8} {:<10} {:<12}",
            report.algorithm,
            report.cost,
            report.path_len,
            report.expanded_count,
            format!("{:.2?}", report.duration)
        );
    }

    if reports.len() > 1 {
        println!();
        if reports.windows(2).all(|pair| pair[0].cost == pair[1].cost) {
            println!("✓ All algorithms agree on the optimal cost");
        } else {
            println!("⚠ Cost mismatch between algorithms - this indicates a bookkeeping bug");
        }

        if let Some(fewest) = reports.iter().min_by_key(|r| r.expanded_count) {
            println!(
                "Fewest expansions: {} ({} nodes)",
                fewest.algorithm, fewest.expanded_count
            );
        }
    }
}
