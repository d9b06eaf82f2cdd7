use std::fs::File;
use std::io::{BufWriter, Write};

use firesim::aggregate;
use firesim::config::RunConfig;
use firesim::data::HistoricalSeriesStore;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config = RunConfig::canonical();
    let mut asset_override: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut wire = false;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--asset" => {
                i += 1;
                asset_override = Some(args[i].clone());
            }
            "--balance" => {
                i += 1;
                config.request.starting_balance =
                    args[i].parse().expect("--balance requires an integer");
            }
            "--withdrawal" => {
                i += 1;
                config.request.annual_withdrawal =
                    args[i].parse().expect("--withdrawal requires an integer");
            }
            "--min-years" => {
                i += 1;
                config.request.min_years = args[i].parse().expect("--min-years requires a u32");
            }
            "--mode-years" => {
                i += 1;
                config.request.mode_years = args[i].parse().expect("--mode-years requires a u32");
            }
            "--max-years" => {
                i += 1;
                config.request.max_years = args[i].parse().expect("--max-years requires a u32");
            }
            "--trials" => {
                i += 1;
                config.trials = args[i].parse().expect("--trials requires a u32");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("--seed requires a u64");
            }
            "--data-dir" => {
                i += 1;
                config.data_dir = args[i].clone();
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--wire" => wire = true,
            "--quiet" => quiet = true,
            _ => {}
        }
        i += 1;
    }

    if let Some(name) = asset_override {
        config.request.asset_class = match name.parse() {
            Ok(class) => class,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };
    }

    let store = match HistoricalSeriesStore::load(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let summary =
        match aggregate::simulate_parallel(&config.request, &store, config.trials, config.seed) {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };

    if wire {
        println!(
            "{}",
            serde_json::to_string(&summary.wire_row()).expect("failed to serialize wire row")
        );
    }

    if let Some(path) = output_path {
        let file = File::create(&path)
            .unwrap_or_else(|e| panic!("failed to create {path}: {e}"));
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &summary)
            .expect("failed to serialize summary");
        writeln!(writer).expect("newline");
    }

    if !quiet {
        let req = &config.request;
        println!(
            "=== Retirement bootstrap ({} trials, seed {}) ===",
            config.trials, config.seed
        );
        println!("  Asset class:           {}", req.asset_class);
        println!("  Starting balance:      {}", req.starting_balance);
        println!("  Annual withdrawal:     {}", req.annual_withdrawal);
        println!(
            "  Retirement years:      {}–{} (most likely {})",
            req.min_years, req.max_years, req.mode_years
        );
        println!();
        println!("  Depletion probability: {:.1}%", summary.depletion_probability_pct);
        println!("  Mean ending balance:   {}", summary.mean_outcome);
        println!("  Min ending balance:    {}", summary.min_outcome);
        println!("  Max ending balance:    {}", summary.max_outcome);
    }
}
