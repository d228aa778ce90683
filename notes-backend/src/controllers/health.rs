use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(liveness)));
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
    cfg.service(web::resource("/api/version").route(web::get().to(get_version)));
    cfg.service(web::resource("/api/health/config").route(web::get().to(get_config_status)));
}

/// Plain-text probe for container health checks
async fn liveness() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("ok")
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": VERSION
    }))
}

async fn get_version() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "version": VERSION
    }))
}

#[derive(Debug, Serialize)]
struct ConfigStatus {
    notes_path: String,
    notes_present: bool,
    /// False usually means the volume is not mounted
    storage_dir_present: bool,
    uptime_secs: u64,
}

async fn get_config_status(state: web::Data<AppState>) -> impl Responder {
    let storage = match state.notes.status().await {
        Ok(s) => s,
        Err(e) => {
            log::error!("[Notes] Storage probe failed: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Storage probe failed"
            }));
        }
    };

    HttpResponse::Ok().json(ConfigStatus {
        notes_path: state.config.notes_path.to_string_lossy().to_string(),
        notes_present: storage.notes_present,
        storage_dir_present: storage.storage_dir_present,
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
