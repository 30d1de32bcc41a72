// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! One-shot verification handshake with the identity app.
//!
//! Proof generation is an external asynchronous exchange: the user scans
//! a request, their device generates the proof, and a stream of progress
//! events arrives until a terminal result. Rather than ad hoc callback
//! registration, the exchange is a single subscription consumed to one
//! tagged outcome. Dropping the session abandons the handshake — it does
//! not cancel anything on the identity-app side.

use tokio::sync::mpsc;

use emberbid_types::ProofResult;

/// Progress events emitted during the handshake.
#[derive(Debug, Clone)]
pub enum VerificationEvent {
    /// The identity app accepted the request.
    RequestReceived,
    /// Proof generation started on the user's device.
    GeneratingProof,
    /// The proof bundle is available.
    ProofGenerated(ProofResult),
    /// Terminal: the query result arrived, verified or not.
    Result { verified: bool },
    /// Terminal: the user declined the request.
    Rejected,
    /// Terminal: the exchange failed.
    Error(String),
}

/// Terminal outcome of a handshake.
#[derive(Debug, Clone)]
pub enum VerificationOutcome {
    /// Verified, with the proof bundle captured along the way.
    Verified(ProofResult),
    Rejected,
    Error(String),
}

/// Emitter half, held by whatever adapts the identity SDK's events.
#[derive(Clone)]
pub struct VerificationHandle {
    tx: mpsc::Sender<VerificationEvent>,
}

impl VerificationHandle {
    /// Emit an event; returns false once the session is gone.
    pub fn emit(&self, event: VerificationEvent) -> bool {
        self.tx.try_send(event).is_ok()
    }
}

/// Consumer half: a one-time subscription over the event stream.
pub struct VerificationSession {
    rx: mpsc::Receiver<VerificationEvent>,
}

pub fn channel() -> (VerificationHandle, VerificationSession) {
    let (tx, rx) = mpsc::channel(16);
    (VerificationHandle { tx }, VerificationSession { rx })
}

impl VerificationSession {
    /// Next raw event, for callers that surface progress.
    pub async fn next_event(&mut self) -> Option<VerificationEvent> {
        self.rx.recv().await
    }

    /// Consume events until a terminal one and fold them into the
    /// outcome. A `Result { verified: true }` without a preceding
    /// `ProofGenerated` is an error: there is nothing to submit.
    pub async fn outcome(mut self) -> VerificationOutcome {
        let mut proof: Option<ProofResult> = None;
        while let Some(event) = self.rx.recv().await {
            match event {
                VerificationEvent::RequestReceived | VerificationEvent::GeneratingProof => {}
                VerificationEvent::ProofGenerated(p) => proof = Some(p),
                VerificationEvent::Result { verified: true } => {
                    return match proof {
                        Some(p) => VerificationOutcome::Verified(p),
                        None => VerificationOutcome::Error(
                            "verified result arrived without a generated proof".to_string(),
                        ),
                    };
                }
                VerificationEvent::Result { verified: false } => {
                    return VerificationOutcome::Error(
                        "verification failed on the identity-app side".to_string(),
                    );
                }
                VerificationEvent::Rejected => return VerificationOutcome::Rejected,
                VerificationEvent::Error(message) => return VerificationOutcome::Error(message),
            }
        }
        VerificationOutcome::Error("verification session ended without a result".to_string())
    }
}
