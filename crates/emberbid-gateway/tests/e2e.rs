use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use emberbid_gateway::api::{self, AppState, SharedState};
use emberbid_gateway::db::Db;
use emberbid_gateway::verify::{ProofVerifier, VerifyOutcome};

/// Verifier stub: accepts or rejects everything.
struct StubVerifier {
    verified: bool,
}

#[async_trait]
impl ProofVerifier for StubVerifier {
    async fn verify(&self, _proofs: &Value, _query_result: &Value) -> anyhow::Result<VerifyOutcome> {
        Ok(VerifyOutcome {
            verified: self.verified,
            unique_identifier: self.verified.then(|| "0xdeadbeef".to_string()),
        })
    }
}

fn make_state(db: Db, verified: bool) -> SharedState {
    Arc::new(AppState {
        db,
        verifier: Arc::new(StubVerifier { verified }),
    })
}

fn register_body() -> Value {
    json!({
        "email": "alice@example.com",
        "password": "hunter2",
        "verification": {
            "proofs": [{ "proof": "0x00" }],
            "queryResult": {
                "nationality": { "disclose": { "result": "FRA" } }
            }
        }
    })
}

fn post_register(body: &Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri("/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn register_happy_path() {
    let tmp = tempfile::tempdir().unwrap();
    let db = Db::open(&tmp.path().join("test.db")).unwrap();
    let state = make_state(db, true);
    let app = api::router(state.clone());

    let resp = app.clone().oneshot(post_register(&register_body())).await.unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["userId"], "0xdeadbeef");

    // the user landed in the store with the disclosed nationality
    let user = state
        .db
        .get_user_by_email("alice@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(user.user_id, "0xdeadbeef");
    assert_eq!(user.nationality.as_deref(), Some("FRA"));

    // registering the same email again → 409
    let resp = app.oneshot(post_register(&register_body())).await.unwrap();
    assert_eq!(resp.status(), 409);
    let json = json_body(resp).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn failed_verification_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = Db::open(&tmp.path().join("test.db")).unwrap();
    let state = make_state(db, false);
    let app = api::router(state.clone());

    let resp = app.oneshot(post_register(&register_body())).await.unwrap();
    assert_eq!(resp.status(), 400);
    let json = json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Verification failed");
    assert_eq!(state.db.user_count().unwrap(), 0);
}

#[tokio::test]
async fn missing_credentials_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = Db::open(&tmp.path().join("test.db")).unwrap();
    let app = api::router(make_state(db, true));

    let mut body = register_body();
    body["email"] = json!("");
    let resp = app.oneshot(post_register(&body)).await.unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn health_endpoint() {
    let tmp = tempfile::tempdir().unwrap();
    let db = Db::open(&tmp.path().join("test.db")).unwrap();
    let app = api::router(make_state(db, true));

    let resp = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["status"], "ok");
}
