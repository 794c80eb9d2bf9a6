//! Balance simulator CLI.
//!
//! Plays scripted sessions against the real engine and reports outcome
//! rates.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 warrior runs
//!   cargo run --bin simulate -- -n 100 -c rogue   # 100 rogue runs
//!   cargo run --bin simulate -- --seed 42 --json  # reproducible, as JSON

use std::env;

use teds_thread::character::Class;
use teds_thread::simulator::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, as_json) = parse_args(&args);

    if !as_json {
        println!("=== TED'S THREAD BALANCE SIMULATOR ===");
        println!();
        println!("Configuration:");
        println!("  Runs:         {}", config.num_runs);
        println!("  Class:        {}", config.class.name());
        println!("  Max commands: {}", config.max_commands);
        if let Some(seed) = config.seed {
            println!("  Seed:         {seed}");
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    if as_json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut as_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.num_runs = value;
                }
                i += 1;
            }
            "--seed" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.seed = Some(value);
                }
                i += 1;
            }
            "--max-commands" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.max_commands = value;
                }
                i += 1;
            }
            "-c" | "--class" => {
                if let Some(class) = args.get(i + 1).and_then(|v| Class::parse(v)) {
                    config.class = class;
                }
                i += 1;
            }
            "--json" => as_json = true,
            "-h" | "--help" => {
                println!("Usage: simulate [-n RUNS] [--seed SEED] [--max-commands N] [-c CLASS] [--json]");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option '{other}' (try --help)");
            }
        }
        i += 1;
    }

    (config, as_json)
}
