// collision_check_main.rs
use junction_conflicts::config::AnalyzerConfig;
use junction_conflicts::monitoring::report_log::log_to_csv;
use junction_conflicts::{CollisionChecker, CollisionReport};
use std::env;
use std::error::Error;

fn print_report(report: &CollisionReport) {
    for (first, second) in &report.colliding_pairs {
        println!("{}; {}", first, second);
    }
    println!("{}", "-".repeat(50));
    println!("Unsafe routes:");
    for (route, count) in &report.unsafe_routes {
        println!("{}: {}", route, count);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let arg = env::args().nth(1);
    let config = AnalyzerConfig::load(arg.as_deref())?;
    let mut checker = CollisionChecker::new(config.green_lights.clone(), config.n_ways)?;

    println!("{}", "=".repeat(50));
    println!("Checking collision...");
    let mut report = checker.check_unsafe_routes()?;
    if config.verbose {
        print_report(&report);
    }

    for route in &config.remove_routes {
        println!("{}", "=".repeat(50));
        println!("Removing route {}", route);
        checker.remove_route(*route)?;
        report = checker.check_unsafe_routes()?;
        if config.verbose {
            print_report(&report);
        }
    }

    println!(
        "{} colliding pairs remain across {} routes",
        report.conflict_count(),
        report.unsafe_routes.len()
    );
    if let Some(path) = &config.report_csv {
        log_to_csv(path, &report.records())?;
        log::info!("Wrote unsafe routes to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Collision check error: {}", e);
        std::process::exit(1);
    }
}
