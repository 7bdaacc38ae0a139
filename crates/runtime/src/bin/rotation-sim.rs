//! Runs the bundled demo kit under two rotation policies and prints a
//! per-skill summary of each. Set `SIM_REPORT_PATH` to also write the
//! timelines as JSON.
//!
//! ```bash
//! SIM_HORIZON_MS=60000 RUST_LOG=rotation_core=debug cargo run -p rotation-runtime --bin rotation-sim
//! ```

use rotation_core::KernelError;
use rotation_runtime::{Report, RunnerConfig, RuntimeError, demo, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init(tracing::Level::INFO);

    if let Err(error) = run().await {
        tracing::error!(
            severity = error.severity().as_str(),
            code = error.error_code(),
            "rotation-sim failed: {error}"
        );
        return Err(error.into());
    }
    Ok(())
}

async fn run() -> Result<(), RuntimeError> {
    let config = RunnerConfig::from_env()?;
    let runner = demo::runner(&config)?;

    let policies = demo::policies(runner.book())?;
    let report = Report::new(runner.config().clone(), runner.run_many(policies).await?);

    for run in &report.runs {
        println!("[{}] {}", run.policy, run.summary);
    }
    if let Some(path) = &config.report_path {
        report.save(path)?;
    }
    Ok(())
}
