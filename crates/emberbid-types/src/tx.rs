use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Receipt status of a submitted transaction.
///
/// Created `Pending` at submission; only the chain moves it to a
/// terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    Pending,
    Success,
    Reverted { reason: Option<String> },
}

impl TxStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TxStatus::Pending)
    }
}

/// A submitted transaction and its eventual receipt status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub hash: B256,
    pub status: TxStatus,
}

impl TransactionRecord {
    pub fn pending(hash: B256) -> Self {
        Self {
            hash,
            status: TxStatus::Pending,
        }
    }
}
