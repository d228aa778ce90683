//! Notes Service: persistent notes over HTTP.
//!
//! Serves the content of one append-only text file and accepts new lines.
//!
//! Default: http://0.0.0.0:3000/

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::time::Instant;

mod config;
mod controllers;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub config: Config,
    pub notes: NoteStore,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            notes: NoteStore::new(config.notes_path.clone()),
            config,
            started_at: Instant::now(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    log::info!("Notes service v{}", env!("CARGO_PKG_VERSION"));
    log::info!("[Notes] Backing file: {}", config.notes_path.display());

    let state = web::Data::new(AppState::new(config.clone()));

    if !state.notes.storage_dir_exists() {
        log::warn!(
            "[Notes] Storage directory for {} does not exist yet (volume not mounted?), it will be created on first add",
            config.notes_path.display()
        );
    }

    let bind_address = config.bind_address.clone();
    let port = config.port;
    log::info!("Notes service listening on http://{}:{}", bind_address, port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind((bind_address.as_str(), port))?
    .run();

    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
