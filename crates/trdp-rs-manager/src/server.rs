//! Implements the HTTP API of the configuration manager using axum.

use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use trdp_rs_xml::ConfigSummary;
use uuid::Uuid;

use crate::engine::EngineController;
use crate::error::ManagerError;
use crate::model::{ConfigListEntry, EngineStatus, UploadResponse};
use crate::storage::ConfigStore;

/// Maximum accepted size of an uploaded configuration document.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// The shared application state: the document store and the engine
/// lifecycle context, both constructed at process start.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ConfigStore>,
    pub engine: Arc<Mutex<EngineController>>,
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/configs", get(list_configs))
        .route(
            "/api/configs/upload",
            post(upload_config).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/configs/{id}/summary", get(config_summary))
        .route("/api/configs/{id}/activate", post(activate_config))
        .route("/api/engine", get(engine_status))
        .with_state(state)
}

/// The main entry point for starting the web server.
///
/// This function binds to the given address and serves the API until the
/// process is terminated.
pub async fn serve(addr: SocketAddr, state: AppState) {
    info!("Configuration manager listening on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind web server to {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, router(state)).await {
        error!("Web server encountered an error: {}", e);
    }
}

/// `GET /api/configs`: lists the stored configurations in upload order.
async fn list_configs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConfigListEntry>>, ManagerError> {
    let records = state.store.list().await?;
    Ok(Json(
        records.into_iter().map(ConfigListEntry::from).collect(),
    ))
}

/// `POST /api/configs/upload`: accepts one XML document as the multipart
/// `file` field.
async fn upload_config(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ManagerError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ManagerError::InvalidUpload("Malformed multipart request."))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("config.xml").to_string();
        let content_type = field.content_type().map(str::to_string);
        if !is_xml_upload(&filename, content_type.as_deref()) {
            return Err(ManagerError::InvalidUpload("Only XML files are allowed."));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|_| ManagerError::InvalidUpload("Failed to read uploaded file."))?;
        let record = state.store.save(&filename, &bytes).await?;
        return Ok((StatusCode::CREATED, Json(UploadResponse::from(record))));
    }

    Err(ManagerError::InvalidUpload(
        "No file uploaded. Please attach an XML file.",
    ))
}

fn is_xml_upload(filename: &str, content_type: Option<&str>) -> bool {
    matches!(content_type, Some("text/xml") | Some("application/xml"))
        || filename.to_ascii_lowercase().ends_with(".xml")
}

/// `GET /api/configs/{id}/summary`: extracts the structured summary of a
/// stored document.
async fn config_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfigSummary>, ManagerError> {
    let document = state.store.read_document(id).await?;
    let summary = trdp_rs_xml::load_summary_from_str(&document)?;
    Ok(Json(summary))
}

/// `POST /api/configs/{id}/activate`: hands the raw document to the engine
/// and runs the restart sequence.
async fn activate_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EngineStatus>, ManagerError> {
    let document = state.store.read_document(id).await?;

    let mut engine = state.engine.lock().await;
    engine.load_config(id, document);
    engine.restart().await?;
    state.store.set_active(id).await?;

    info!("Configuration {} activated", id);
    Ok(Json(EngineStatus {
        state: engine.state(),
        active_config_id: engine.active_config_id(),
    }))
}

/// `GET /api/engine`: current engine lifecycle state.
async fn engine_status(State(state): State<AppState>) -> Json<EngineStatus> {
    let engine = state.engine.lock().await;
    Json(EngineStatus {
        state: engine.state(),
        active_config_id: engine.active_config_id(),
    })
}

#[cfg(test)]
mod tests {
    use super::is_xml_upload;

    #[test]
    fn xml_uploads_are_accepted_by_type_or_extension() {
        assert!(is_xml_upload("unit.xml", None));
        assert!(is_xml_upload("UNIT.XML", None));
        assert!(is_xml_upload("unit.cfg", Some("application/xml")));
        assert!(is_xml_upload("unit.cfg", Some("text/xml")));
    }

    #[test]
    fn non_xml_uploads_are_rejected() {
        assert!(!is_xml_upload("unit.json", Some("application/json")));
        assert!(!is_xml_upload("unit.txt", None));
    }
}
