use clap::Parser;

use std::time::Instant;

use grid_search::barrier::BarrierMap;
use grid_search::config::Config;
use grid_search::search::reference::reference_cost;
use grid_search::search::{AStar, SearchStrategy, UniformCost};
use grid_search::statistics::{print_comparison, SearchReport};

fn main() {
    let config = Config::parse();

    if !config.quiet {
        println!("Starting grid search...");
        println!("Grid size: {}x{}", config.width, config.height);
        println!(
            "Start: ({}, {}), Goal: ({}, {})",
            config.start.x, config.start.y, config.goal.x, config.goal.y
        );
        println!("Algorithm: {}", config.algorithm);
        println!(
            "Costs: unit {}, barrier penalty {}",
            config.unit_cost, config.penalty
        );
    }

    let bounds = config.bounds();
    let costs = config.costs();

    // Explicit segments first, then any randomly scattered cells.
    let mut segments = config.barrier_segments();
    if config.random_barriers > 0 {
        let random = BarrierMap::random(
            bounds,
            config.random_barriers,
            config.start,
            config.goal,
            config.seed,
        );
        segments.extend(random.segments().iter().cloned());
    }
    let barriers = BarrierMap::from_segments(segments);

    if !config.quiet {
        println!("Barrier cells: {}", barriers.len());
        println!();
    }

    let strategies: Vec<Box<dyn SearchStrategy>> = match config.algorithm.as_str() {
        "ucs" => vec![Box::new(UniformCost::new(bounds, costs))],
        "a_star" => vec![Box::new(AStar::new(bounds, costs))],
        "all" => vec![
            Box::new(UniformCost::new(bounds, costs)),
            Box::new(AStar::new(bounds, costs)),
        ],
        other => {
            eprintln!(
                "Unknown algorithm '{}': select 'ucs', 'a_star', or 'all'",
                other
            );
            std::process::exit(1);
        }
    };

    let mut reports = Vec::new();

    for strategy in &strategies {
        let started = Instant::now();
        match strategy.search(config.start, config.goal, &barriers) {
            Ok(result) => {
                let report = SearchReport::new(strategy.name(), &result, started.elapsed());
                if !config.quiet {
                    println!("{}", report);
                }
                if !config.no_visualization {
                    bounds.print_route(
                        config.start,
                        config.goal,
                        barriers.cells(),
                        &result.path,
                        &result.expanded,
                    );
                }
                reports.push(report);
            }
            Err(e) => {
                eprintln!("{} search failed: {}", strategy.name(), e);
                std::process::exit(1);
            }
        }
    }

    if config.verify {
        match reference_cost(bounds, costs, config.start, config.goal, &barriers) {
            Some(expected) => {
                for report in &reports {
                    if report.cost == expected {
                        println!("✓ {} matches the reference cost {}", report.algorithm, expected);
                    } else {
                        println!(
                            "⚠ {} returned cost {} but the reference found {}",
                            report.algorithm, report.cost, expected
                        );
                    }
                }
            }
            None => println!("Reference search found no path to verify against"),
        }
    }

    if reports.len() > 1 {
        print_comparison(&reports);
    }
}
