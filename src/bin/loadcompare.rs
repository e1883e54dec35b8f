use std::{env, path::Path, process};

use loadcompare::{
    CompareError,
    baseline::{self, BaselineAction},
    cli::CliConfig,
    compare::{Comparator, RatioEntry},
    gate::{GateOutcome, ThresholdGate},
    report,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CliConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CliConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    match run(&config) {
        Ok(GateOutcome::Pass) => {}
        Ok(GateOutcome::Fail(_)) => {
            eprintln!("Some of the requests are above the given threshold factor!");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> Result<GateOutcome, CompareError> {
    let mut comparer = Comparator::new(&config.prefix);
    let mut results: Vec<RatioEntry> = Vec::new();

    match config.option.as_str() {
        "create_baseline" => match baseline::create_baseline(&config.prefix)? {
            BaselineAction::Rotated => {
                println!("Removed old baseline");
                println!("Created new baseline");
            }
            BaselineAction::Created => println!("Created new baseline"),
            BaselineAction::AlreadyExists => println!("Baseline exists"),
        },
        "create_comparison_stats" => {
            let path = comparer.write_comparison_stats()?;
            println!("Wrote {}", path.display());
        }
        "compare_column" => {
            for column in config.column_list() {
                results.extend(comparer.compare_column(column)?);
            }
        }
        other => {
            println!("Invalid option: {other}\nRun with --help for valid options");
        }
    }

    if config.render_output {
        report::render_report(comparer.tables(), Path::new(&config.output))?;
    }

    println!("Threshold factor: {}", config.threshold);
    Ok(ThresholdGate::new(config.threshold).evaluate(&results))
}
