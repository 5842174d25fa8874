use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::file::{students::StudentStore, tutors::TutorStore};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Any origin may call the API; the frontend is served elsewhere.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(5000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_data_dir() -> String {
    match configs::load_default() {
        Ok(cfg) => cfg.storage.data_dir,
        Err(_) => env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    }
}

/// Open both document stores under the data directory, seeding empty
/// documents on first start.
pub async fn open_stores(data_dir: &str) -> anyhow::Result<ServerState> {
    let dir = Path::new(data_dir);
    let tutors = TutorStore::open(dir.join("tutors.json")).await?;
    let students = StudentStore::open(dir.join("students.json")).await?;
    Ok(ServerState { tutors, students })
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let data_dir = load_data_dir();
    let state = open_stores(&data_dir).await?;
    info!(%data_dir, "document stores ready");

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting tutor-match server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
