//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `staffing_core` linkage by printing the seeded registry.
//! - Optionally start file logging from `STAFFING_LOG_DIR`/`STAFFING_LOG_LEVEL`.

use staffing_core::{LogConfig, RegistryService};
use std::process::ExitCode;

fn main() -> ExitCode {
    match LogConfig::from_env() {
        Ok(Some(config)) => {
            if let Err(err) = staffing_core::init_logging(&config) {
                eprintln!("logging disabled: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => {
            eprintln!("invalid logging config: {err}");
            return ExitCode::FAILURE;
        }
    }

    let registry = RegistryService::default();
    println!("staffing_core version={}", staffing_core::core_version());

    for worker in registry.list_workers() {
        let job = registry
            .job_of_worker(worker.id)
            .map(|job| job.name)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "worker id={} name={} job={} salary={:.2}",
            worker.id, worker.name, job, worker.salary
        );
    }

    for summary in registry.job_summaries() {
        let average = summary
            .average_salary
            .map(|value| format!("{value:.2}"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "job id={} name={} workers={} average_salary={}",
            summary.id, summary.name, summary.worker_count, average
        );
    }

    log::info!("event=cli_smoke module=cli status=ok");
    ExitCode::SUCCESS
}
