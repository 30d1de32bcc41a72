use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::db::{Db, UserRecord};
use crate::verify::ProofVerifier;

pub struct AppState {
    pub db: Db,
    pub verifier: Arc<dyn ProofVerifier>,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/register", post(register))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub verification: VerificationPayload,
}

#[derive(Deserialize)]
pub struct VerificationPayload {
    pub proofs: Value,
    #[serde(rename = "queryResult")]
    pub query_result: Value,
}

fn failure(status: StatusCode, error: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": false, "error": error })))
}

async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(failure(StatusCode::BAD_REQUEST, "email and password are required"));
    }

    if state
        .db
        .get_user_by_email(&req.email)
        .map_err(|e| failure(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?
        .is_some()
    {
        return Err(failure(StatusCode::CONFLICT, "user already exists"));
    }

    let outcome = state
        .verifier
        .verify(&req.verification.proofs, &req.verification.query_result)
        .await
        .map_err(|e| failure(StatusCode::BAD_GATEWAY, &format!("verifier: {e}")))?;

    if !outcome.verified {
        return Err(failure(StatusCode::BAD_REQUEST, "Verification failed"));
    }
    let user_id = outcome
        .unique_identifier
        .ok_or_else(|| failure(StatusCode::BAD_GATEWAY, "verifier returned no identifier"))?;

    // disclosed fields ride along in the query result
    let nationality = req.verification.query_result["nationality"]["disclose"]["result"]
        .as_str()
        .map(String::from);

    state
        .db
        .insert_user(&UserRecord {
            email: req.email,
            user_id: user_id.clone(),
            nationality,
        })
        .map_err(|e| failure(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;

    Ok(Json(json!({ "success": true, "userId": user_id })))
}
