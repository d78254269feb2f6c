//! Zero-argument stability demo.
//!
//! Runs the default configuration and prints a human-readable report.
//! Consumes no arguments, flags, environment variables, or files.

use stability_sim::config::SimulationConfig;
use stability_sim::simulation::{aggregate_statistics, simulate, TYPE_STABLE};

fn main() {
    let config = SimulationConfig::default();

    let outcome = match simulate(&config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let stats = aggregate_statistics(&outcome.scores, &outcome.agent_types);

    println!("Synthetic Stability Demo");
    println!("------------------------");
    println!("Overall mean stability: {:.3}", stats.overall.mean);
    println!("Overall std stability:  {:.3}", stats.overall.std_dev);
    println!(
        "Min / Max:              {:.3} / {:.3}",
        stats.overall.min, stats.overall.max
    );

    println!();
    println!("By agent type (abstract):");
    for group in &stats.groups {
        let label = if group.agent_type == TYPE_STABLE {
            "Type 0 (more stable)"
        } else {
            "Type 1 (less stable)"
        };
        match group.mean {
            Some(mean) => println!("  {}   mean={:.3}  n={}", label, mean, group.count),
            None => println!("  {}   no data (n=0)", label),
        }
    }
}
