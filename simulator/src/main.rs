use anyhow::Context;
use bridge::server::{bind_address, ReportBridge};
use clap::Parser;
use scapcore::safety::AsilLevel;
use scapcore::telemetry::timestamp_to_iso;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod bridge;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the SCAP sensor-drift workflow")]
struct Args {
    /// Generate one synthetic batch and print its drift report
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value = "LIDAR_FRONT_001")]
    sensor_id: String,
    #[arg(long)]
    vin: Option<String>,
    #[arg(long, default_value_t = 256)]
    samples: usize,
    #[arg(long, default_value_t = 0.05)]
    noise: f64,
    #[arg(long, default_value_t = 0.0)]
    bias: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value = "ASIL-D")]
    asil_level: AsilLevel,
    /// Safety goal, repeatable
    #[arg(long = "goal")]
    goals: Vec<String>,
    /// Print the safety workflow summaries
    #[arg(long, default_value_t = false)]
    lifecycle: bool,
    /// Keep the report bridge alive for incoming batches
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        let mut config =
            WorkflowConfig::from_args(args.sensor_id, args.samples, args.noise, args.bias, args.seed);
        config.vin = args.vin;
        config.asil_level = args.asil_level;
        config.safety_goals = args.goals;
        config
    };

    let runner = Arc::new(Runner::new(workflow_config));
    let bridge = ReportBridge::new(runner.clone());

    if args.lifecycle {
        let logic = runner.safety_logic();
        println!(
            "{} safety goals: [{}]",
            logic.asil_level(),
            logic.safety_goals().join(", ")
        );
        for summary in logic.lifecycle() {
            println!("{}", summary);
        }
    }

    if args.offline {
        let report = runner.run_offline()?;
        println!("{}", serde_json::to_string_pretty(&report)?);

        let line = format!("{} {}\n", timestamp_to_iso(None)?, report.summary_line());
        bridge.publish(report);
        bridge.publish_status("Offline drift report ready.");

        let report_path = PathBuf::from("tools/data/offline_drift.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&report_path)
            .with_context(|| format!("opening {}", report_path.display()))?;
        file.write_all(line.as_bytes())?;
    }

    if args.serve {
        let addr = bind_address()?;
        let (bound, _server) = bridge.serve(addr)?;
        bridge.publish_status(&format!("HTTP bridge on {} (Ctrl+C to stop)...", bound));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
