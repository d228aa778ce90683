//! Notes HTTP API: read the whole store and append single lines.

use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::AppState;

/// Label prepended to the note content on `GET /`
pub const NOTES_LABEL: &str = "Current Notes:\n";
pub const NOTE_ADDED: &str = "Note added!";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(get_notes)));
    cfg.service(web::resource("/add").route(web::post().to(add_note)));
}

fn plain(mut builder: actix_web::HttpResponseBuilder, body: impl Into<String>) -> HttpResponse {
    builder.content_type(TEXT_PLAIN).body(body.into())
}

/// Return the label followed by the literal store content
async fn get_notes(data: web::Data<AppState>) -> impl Responder {
    match data.notes.read_all().await {
        Ok(content) => {
            let mut body = String::with_capacity(NOTES_LABEL.len() + content.len());
            body.push_str(NOTES_LABEL);
            body.push_str(&content);
            plain(HttpResponse::Ok(), body)
        }
        Err(e) => {
            log::error!(
                "[Notes] Failed to read {}: {}",
                data.notes.path().display(),
                e
            );
            plain(HttpResponse::InternalServerError(), "Failed to read notes")
        }
    }
}

/// Extract the `text` field from a JSON request body
fn parse_note_text(body: &[u8]) -> Result<String, &'static str> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| "Request body must be valid JSON")?;

    let object = value
        .as_object()
        .ok_or("Request body must be a JSON object")?;

    match object.get("text") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err("Field 'text' must be a string"),
        None => Err("Missing field 'text'"),
    }
}

/// Append the submitted text as one line
async fn add_note(data: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let text = match parse_note_text(&body) {
        Ok(t) => t,
        Err(reason) => {
            log::warn!("[Notes] Rejected add request: {}", reason);
            return plain(HttpResponse::BadRequest(), reason);
        }
    };

    match data.notes.append(&text).await {
        Ok(()) => {
            log::debug!("[Notes] Appended {} bytes", text.len() + 1);
            plain(HttpResponse::Ok(), NOTE_ADDED)
        }
        Err(e) => {
            log::error!(
                "[Notes] Failed to append to {}: {}",
                data.notes.path().display(),
                e
            );
            plain(HttpResponse::InternalServerError(), "Failed to add note")
        }
    }
}
