//! `cpu-sched`: compare FCFS, SJF, SRTF and Round Robin on a batch of
//! processes read from stdin (or a file) as `arrival burst` pairs.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use cpu_sched::config::SimulationConfig;
use cpu_sched::input::read_pairs;
use cpu_sched::report::run_batch;
use cpu_sched::workload::{generate, WorkloadSpec};

/// CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "cpu-sched")]
#[command(about = "Compare CPU scheduling disciplines on a batch of processes", long_about = None)]
struct Args {
    /// Round Robin time quantum (default 100)
    #[arg(allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Read `arrival burst` pairs from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate N random processes instead of reading input
    #[arg(long, value_name = "N")]
    generate: Option<usize>,

    /// Seed for --generate
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output the full report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Append each discipline's dispatch trace
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match SimulationConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };
    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }

    let pairs = match load_pairs(&args, &config) {
        Ok(pairs) => pairs,
        Err(e) => {
            error!("cannot read input: {e}");
            eprintln!("error: cannot read input: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("read {} processes", pairs.len());

    let report = match run_batch(&pairs, &config) {
        Ok(Some(report)) => report,
        Ok(None) => return ExitCode::SUCCESS,
        Err(errors) => {
            for e in &errors {
                eprintln!("error: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("cannot serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else if args.trace {
        print!("{}", report.to_text_with_trace());
    } else {
        print!("{report}");
    }

    ExitCode::SUCCESS
}

fn load_pairs(args: &Args, config: &SimulationConfig) -> io::Result<Vec<(i64, i64)>> {
    if let Some(count) = args.generate {
        let spec = WorkloadSpec::with_count(count.min(config.max_batch));
        return Ok(generate(&spec, args.seed));
    }

    match &args.input {
        Some(path) => read_pairs(BufReader::new(File::open(path)?), config.max_batch),
        None => read_pairs(io::stdin().lock(), config.max_batch),
    }
}
