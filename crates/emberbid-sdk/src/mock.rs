// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Scripted wallet provider for testing without a wallet or a chain.
//!
//! Responses are consumed in push order; every dispatched request is
//! recorded so tests can assert what (if anything) went over the wire.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::provider::{ProviderError, WalletProvider};

#[derive(Default)]
pub struct MockProvider {
    responses: Mutex<VecDeque<Result<Value, ProviderError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn push_ok(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    /// Queue an error response.
    pub fn push_err(&self, err: ProviderError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// All `(method, params)` pairs dispatched so far.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ProviderError::Transport(format!(
                    "mock: no scripted response for {method}"
                )))
            })
    }
}
