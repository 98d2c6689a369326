use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cgr_server::config::ServerConfig;
use cgr_server::plan::ContactPlan;
use cgr_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid configuration");
        process::exit(1);
    });

    let plan = ContactPlan::from_path(&config.plan_path).unwrap_or_else(|e| {
        error!(error = %e, "failed to load contact plan");
        process::exit(1);
    });
    info!(
        path = %config.plan_path.display(),
        contacts = plan.len(),
        nodes = plan.nodes().count(),
        "loaded contact plan"
    );

    let state = AppState::new(plan, config.search.clone(), &config.cache);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap_or_else(|e| {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            process::exit(1);
        });
    info!(addr = %config.bind_addr, "contact graph router listening");
    info!("endpoints: GET /health, GET /plan, GET /contacts, POST /route");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        process::exit(1);
    }
}
