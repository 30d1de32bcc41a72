pub mod params;
pub mod proof;
pub mod tx;

pub use params::{ProofResult, ProofVerificationData, ProofVerificationParams, ServiceConfig};
pub use proof::Groth16Proof;
pub use tx::{TransactionRecord, TxStatus};
