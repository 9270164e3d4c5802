// safe_route_main.rs
use junction_conflicts::config::AnalyzerConfig;
use junction_conflicts::monitoring::report_log::log_to_csv;
use junction_conflicts::SafeRouteFinder;
use std::env;
use std::error::Error;

fn run() -> Result<(), Box<dyn Error>> {
    let arg = env::args().nth(1);
    let config = AnalyzerConfig::load(arg.as_deref())?;
    let mut finder = SafeRouteFinder::new(config.green_lights.clone(), config.n_ways)?;

    println!("Checking safe route...");
    let mut safe_routes = finder.find_safe_candidates()?;
    if config.verbose {
        for route in &safe_routes {
            println!("{}", route);
        }
    }

    if config.commit_safe_routes {
        safe_routes = finder.commit_all_safe()?;
        println!("{}", "-".repeat(50));
        println!("Committed routes:");
        for route in &safe_routes {
            println!("{}", route);
        }
        println!(
            "Green lights: {}",
            serde_json::to_string(finder.green_lights())?
        );
    }

    if let Some(path) = &config.report_csv {
        log_to_csv(path, &safe_routes)?;
        log::info!("Wrote {} routes to {}", safe_routes.len(), path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Safe route error: {}", e);
        std::process::exit(1);
    }
}
