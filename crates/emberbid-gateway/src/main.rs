use std::sync::Arc;

use emberbid_gateway::api::{self, AppState};
use emberbid_gateway::db::Db;
use emberbid_gateway::verify::HttpVerifier;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

#[tokio::main]
async fn main() {
    let db_path = env_or("EMBERBID_DB_PATH", "emberbid-gateway.db");
    let listen_addr = env_or("EMBERBID_LISTEN_ADDR", "0.0.0.0:3000");
    let verifier_url = env_or("EMBERBID_VERIFIER_URL", "http://localhost:3100/verify");
    let dev_mode = env_or("EMBERBID_DEV_MODE", "true") == "true";

    eprintln!("emberbid-gateway starting...");
    eprintln!("  verifier: {verifier_url}");
    eprintln!("  db:       {db_path}");
    if dev_mode {
        eprintln!("  dev mode: accepting dev-mode proofs");
    }

    let db = Db::open(std::path::Path::new(&db_path)).expect("failed to open db");
    let users = db.user_count().expect("failed to count users");
    eprintln!("loaded {users} registered users");

    let state = Arc::new(AppState {
        db,
        verifier: Arc::new(HttpVerifier::new(&verifier_url, dev_mode)),
    });

    let router = api::router(state);
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind");
    eprintln!("listening on {listen_addr}");
    axum::serve(listener, router).await.expect("server error");
}
