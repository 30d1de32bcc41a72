//! Groth16 proof objects as emitted by the proving library.
//!
//! The prover outputs curve points as arrays of decimal strings; `pi_a`
//! and `pi_c` may carry a third homogeneous coordinate and `pi_b` a third
//! row, which the on-chain encoding ignores. Shape validation happens at
//! encoding time, not here — this type holds whatever the prover said.

use serde::{Deserialize, Serialize};

/// A Groth16 proof: three curve-point groups plus protocol/curve tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Groth16Proof {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default = "default_curve")]
    pub curve: String,
}

fn default_protocol() -> String {
    "groth16".to_string()
}

fn default_curve() -> String {
    "bn128".to_string()
}

impl Groth16Proof {
    /// Parse a proof from the prover's JSON output.
    ///
    /// Missing `protocol`/`curve` tags default to `groth16`/`bn128`.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prover_output() {
        let json = r#"{
            "pi_a": ["1", "2", "1"],
            "pi_b": [["3", "4"], ["5", "6"], ["1", "0"]],
            "pi_c": ["7", "8", "1"],
            "protocol": "groth16",
            "curve": "bn128"
        }"#;
        let proof = Groth16Proof::from_json(json).unwrap();
        assert_eq!(proof.pi_a.len(), 3);
        assert_eq!(proof.pi_b.len(), 3);
        assert_eq!(proof.curve, "bn128");
    }

    #[test]
    fn defaults_protocol_and_curve() {
        let json = r#"{"pi_a": [], "pi_b": [], "pi_c": []}"#;
        let proof = Groth16Proof::from_json(json).unwrap();
        assert_eq!(proof.protocol, "groth16");
        assert_eq!(proof.curve, "bn128");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Groth16Proof::from_json("not json").is_err());
        assert!(Groth16Proof::from_json(r#"{"pi_a": "oops"}"#).is_err());
    }
}
