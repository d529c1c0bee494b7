use crate::bridge::model::ReportModel;
use crate::generator::profile::{build_sensor_batch_from_config, GeneratorConfig};
use crate::workflow::runner::Runner;
use anyhow::Context;
use log::{info, warn};
use scapcore::analysis::DriftReport;
use scapcore::config::load_environment_config;
use scapcore::SensorBatch;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{mpsc, Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{
    filters::body::BodyDeserializeError,
    http::StatusCode,
    reply::{Json, WithStatus},
    Filter, Rejection, Reply,
};

pub const BRIDGE_ADDR_KEY: &str = "SCAP_BRIDGE_ADDR";
const DEFAULT_BRIDGE_ADDR: &str = "127.0.0.1:9000";

type SharedModel = Arc<RwLock<ReportModel>>;

/// Bind address from `SCAP_BRIDGE_ADDR`, defaulting to `127.0.0.1:9000`.
pub fn bind_address() -> anyhow::Result<SocketAddr> {
    let raw = load_environment_config(BRIDGE_ADDR_KEY, Some(DEFAULT_BRIDGE_ADDR))
        .unwrap_or_else(|| DEFAULT_BRIDGE_ADDR.to_string());
    raw.parse()
        .with_context(|| format!("parsing {}={}", BRIDGE_ADDR_KEY, raw))
}

/// Bridge that hosts the report HTTP endpoints and analyses incoming batches.
pub struct ReportBridge {
    state: SharedModel,
    runner: Arc<Runner>,
}

impl ReportBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ReportModel::default())),
            runner,
        }
    }

    pub fn routes(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        routes(self.state.clone(), self.runner.clone())
    }

    /// Binds `addr` and serves the routes on a dedicated thread until the
    /// process exits. Returns once the listener is bound, or with the bind error.
    pub fn serve(&self, addr: SocketAddr) -> anyhow::Result<(SocketAddr, thread::JoinHandle<()>)> {
        let routes = self.routes();
        let (ready_tx, ready_rx) = mpsc::channel::<anyhow::Result<SocketAddr>>();
        let handle = thread::spawn(move || {
            let runtime = match Builder::new_current_thread()
                .enable_all()
                .build()
                .context("building report bridge runtime")
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = ready_tx.send(Err(err));
                    return;
                }
            };
            runtime.block_on(async move {
                match warp::serve(routes)
                    .try_bind_ephemeral(addr)
                    .with_context(|| format!("binding report bridge to {}", addr))
                {
                    Ok((bound, server)) => {
                        let _ = ready_tx.send(Ok(bound));
                        server.await;
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                    }
                }
            });
        });

        let bound = ready_rx
            .recv()
            .context("report bridge thread exited before binding")??;
        info!("report bridge listening on {}", bound);
        Ok((bound, handle))
    }

    pub fn publish(&self, report: DriftReport) {
        store(&self.state, report, None);
        if let Ok(guard) = self.state.read() {
            info!("[bridge] reports received: {}", guard.reports_received);
        }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ReportModel {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

fn store(state: &SharedModel, report: DriftReport, scenario: Option<String>) {
    if let Ok(mut guard) = state.write() {
        guard.record(report, scenario);
    }
}

fn error_reply(message: String) -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({"status": "error", "message": message})),
        StatusCode::UNPROCESSABLE_ENTITY,
    )
}

/// Answers malformed request bodies with the same 422 error shape.
async fn recover_body(rejection: Rejection) -> Result<WithStatus<Json>, Rejection> {
    match rejection.find::<BodyDeserializeError>() {
        Some(err) => {
            warn!("rejected request body: {}", err);
            Ok(error_reply(err.to_string()))
        }
        None => Err(rejection),
    }
}

fn ingest(
    batch: &SensorBatch,
    scenario: Option<String>,
    description: Option<&str>,
    state: &SharedModel,
    runner: &Runner,
) -> WithStatus<Json> {
    match runner.execute(batch) {
        Ok(report) => {
            let mut body = json!({
                "status": "ok",
                "sensor_id": report.sensor_id,
                "rmse": report.rmse,
                "insufficient_data": report.insufficient_data,
            });
            if let Some(description) = description {
                body["description"] = json!(description);
            }
            if let Some(name) = scenario.as_ref() {
                info!("[bridge] scenario {} -> rmse {:.6}", name, report.rmse);
            }
            store(state, report, scenario);
            warp::reply::with_status(warp::reply::json(&body), StatusCode::OK)
        }
        Err(err) => {
            warn!("ingest error: {:#}", err);
            error_reply(format!("{:#}", err))
        }
    }
}

fn routes(
    state: SharedModel,
    runner: Arc<Runner>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());
    let runner_filter = warp::any().map(move || runner.clone());

    let report_route = warp::path("report")
        .and(warp::path::end())
        .and(warp::get())
        .and(state_filter.clone())
        .map(|state: SharedModel| {
            let model = state
                .read()
                .map(|guard| guard.clone())
                .unwrap_or_default();
            warp::reply::json(&model)
        });

    let metrics_route = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .and(runner_filter.clone())
        .map(|runner: Arc<Runner>| warp::reply::json(&runner.metrics()));

    let ingest_route = warp::path("ingest")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and(runner_filter.clone())
        .and_then(
            |batch: SensorBatch, state: SharedModel, runner: Arc<Runner>| async move {
                Ok::<_, Rejection>(ingest(&batch, None, None, &state, &runner))
            },
        );

    let generator_route = warp::path("ingest-config")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter)
        .and(runner_filter)
        .and_then(
            |config: GeneratorConfig, state: SharedModel, runner: Arc<Runner>| async move {
                let reply = match build_sensor_batch_from_config(&config) {
                    Ok(batch) => ingest(
                        &batch,
                        config.scenario.clone(),
                        config.description.as_deref(),
                        &state,
                        &runner,
                    ),
                    Err(err) => {
                        warn!("ingest-config error: {:#}", err);
                        error_reply(format!("{:#}", err))
                    }
                };
                Ok::<_, Rejection>(reply)
            },
        );

    report_route
        .or(metrics_route)
        .or(ingest_route)
        .or(generator_route)
        .recover(recover_body)
}
