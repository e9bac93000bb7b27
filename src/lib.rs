//! Single-CPU scheduling simulator.
//!
//! Runs a batch of processes, each a single CPU burst with a known arrival
//! time, under four classical disciplines and reports mean response,
//! turnaround and waiting time for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessTable`, `ProcessOutcome`,
//!   `Slice`, `SimulationRun`, `Discipline`
//! - **`dispatching`**: Selection rules (SPT, SRPT, FIFO) and the rule engine
//! - **`scheduler`**: The FCFS, SJF, SRTF and Round Robin simulators, `Stats`
//! - **`report`**: Batch runner and text/JSON report
//! - **`validation`**: Input checks (burst, arrival, quantum)
//! - **`input`**, **`config`**, **`workload`**: Boundary plumbing
//!
//! # Example
//!
//! ```
//! use cpu_sched::config::SimulationConfig;
//! use cpu_sched::report::run_batch;
//!
//! let config = SimulationConfig::new().with_quantum(2);
//! let report = run_batch(&[(0, 5), (1, 3), (2, 1)], &config)
//!     .unwrap()
//!     .unwrap();
//! assert!(report.to_string().starts_with("First Come, First Served\nAvg. Resp.:3.33"));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod config;
pub mod dispatching;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
