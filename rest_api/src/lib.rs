// rest_api/src/lib.rs

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use models::{PatientKey, PatientRecord};
use portal::aggregate;
use portal::auth::authenticate;
use portal::resolve::resolve_patient;
use portal::sections;
use portal::social::SocialSection;
use portal::{PortalError, RecordStore};

pub mod config;

// Define the REST API error enum. Every handler failure is converted
// here before it reaches the transport layer; internal detail is
// logged, never echoed to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Username (patient first name) and password (patient ID) are required")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Patient not found")]
    PatientNotFound,
    #[error("Unknown social history section")]
    UnknownSection,
    #[error("{message}")]
    Internal { message: &'static str },
}

impl ApiError {
    /// Logs the underlying failure and returns the endpoint's generic
    /// 500 with `message` as the client-facing text.
    fn internal(message: &'static str, err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "{message}");
        ApiError::Internal { message }
    }
}

// Convert ApiError into an HTTP response with the portal's error
// envelope.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingCredentials | ApiError::UnknownSection => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::PatientNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// Shared state for the Axum application.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Resolves the path identifier to a patient or fails with 404, folding
/// malformed identifiers into not-found. Store failures become the
/// endpoint's generic 500.
async fn require_patient(
    state: &AppState,
    raw_id: &str,
    failure_message: &'static str,
) -> Result<PatientRecord, ApiError> {
    resolve_patient(state.store.as_ref(), raw_id)
        .await
        .map_err(|e| ApiError::internal(failure_message, e))?
        .ok_or(ApiError::PatientNotFound)
}

// Handler for the POST /api/auth/login endpoint
async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let identity = authenticate(state.store.as_ref(), &username, &password)
        .await
        .map_err(|e| match e {
            PortalError::MissingCredentials => ApiError::MissingCredentials,
            PortalError::InvalidCredentials => ApiError::InvalidCredentials,
            other => ApiError::internal("Unable to authenticate. Please try again later.", other),
        })?;

    Ok(Json(json!({ "success": true, "data": identity })))
}

// Handler for the GET /api/patient-demographics/:patient_id endpoint
async fn demographics_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let patient =
        require_patient(&state, &patient_id, "Unable to fetch patient demographics").await?;
    Ok(Json(
        json!({ "success": true, "data": sections::demographics(&patient) }),
    ))
}

// Handler for the GET /api/contact-information/:patient_id endpoint
async fn contact_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let patient =
        require_patient(&state, &patient_id, "Unable to fetch contact information").await?;
    Ok(Json(
        json!({ "success": true, "data": sections::contact(&patient) }),
    ))
}

// Handler for the GET /api/insurance/:patient_id endpoint. The
// insurance payload is flattened beside `success` rather than nested
// under `data`; clients depend on this shape.
async fn insurance_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let patient =
        require_patient(&state, &patient_id, "Unable to fetch insurance information").await?;
    let view = sections::insurance(&patient);
    Ok(Json(json!({
        "success": true,
        "insurance": view.insurance,
        "patient_id": view.patient_id,
    })))
}

// Handler for the GET /api/allergies/:patient_id endpoint
async fn allergies_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let patient = require_patient(&state, &patient_id, "Unable to fetch allergies").await?;
    Ok(Json(
        json!({ "success": true, "data": sections::allergies(&patient) }),
    ))
}

// Handler for the GET /api/family-history/:patient_id endpoint
async fn family_history_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let patient = require_patient(&state, &patient_id, "Unable to fetch family history").await?;
    Ok(Json(
        json!({ "success": true, "data": sections::family_history(&patient) }),
    ))
}

// Handler for the GET /api/social-history/:patient_id endpoint
async fn social_history_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let patient = require_patient(&state, &patient_id, "Unable to fetch social history").await?;
    Ok(Json(
        json!({ "success": true, "data": sections::social_history(&patient) }),
    ))
}

// Handler for the GET /api/social-history/:patient_id/:section
// endpoint. "summary" bypasses the section table and returns the full
// aggregate; an unmapped key is the one genuine 400 on this surface.
async fn social_section_handler(
    State(state): State<AppState>,
    Path((patient_id, section)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let patient =
        require_patient(&state, &patient_id, "Unable to fetch social history section").await?;

    if section == "summary" {
        return Ok(Json(
            json!({ "success": true, "data": sections::social_history(&patient) }),
        ));
    }

    let section = SocialSection::from_key(&section).ok_or(ApiError::UnknownSection)?;
    let social = patient.social_history.clone().unwrap_or_default();
    let data = section.value(&social).cloned().unwrap_or(Value::Null);
    Ok(Json(json!({ "success": true, "data": data })))
}

// Handler for the GET /api/patients/:patient_id/profile endpoint
async fn profile_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let patient = require_patient(&state, &patient_id, "Unable to fetch patient profile").await?;
    Ok(Json(
        json!({ "success": true, "data": aggregate::profile_summary(&patient) }),
    ))
}

// Handler for the GET /api/visits/:patient_id endpoint. A malformed or
// unknown identifier yields an empty sequence, not a 404.
async fn visits_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let visits = match patient_id.parse::<PatientKey>() {
        Ok(key) => state
            .store
            .visits_for(&key)
            .await
            .map_err(|e| ApiError::internal("Unable to fetch patient visits", e))?,
        Err(_) => Vec::new(),
    };
    Ok(Json(json!({ "success": true, "data": visits })))
}

// Handler for the GET /health endpoint
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the portal router over the given record store. CORS and any
/// other transport-level layers are applied by the caller.
pub fn app(store: Arc<dyn RecordStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/patient-demographics/:patient_id", get(demographics_handler))
        .route("/api/contact-information/:patient_id", get(contact_handler))
        .route("/api/insurance/:patient_id", get(insurance_handler))
        .route("/api/allergies/:patient_id", get(allergies_handler))
        .route("/api/family-history/:patient_id", get(family_history_handler))
        .route("/api/social-history/:patient_id", get(social_history_handler))
        .route("/api/social-history/:patient_id/:section", get(social_section_handler))
        .route("/api/patients/:patient_id/profile", get(profile_handler))
        .route("/api/visits/:patient_id", get(visits_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
