// Copyright 2026 Emberbid Contributors
// Licensed under the Apache License, Version 2.0

//! Fixed-width uint256 word encoding.
//!
//! Legacy/manual calldata path only — function calls go through the
//! `sol!` encoder in [`crate::abi`]. Kept because the raw word form is
//! still what receipt fields and probe results come back as.

use alloy_primitives::U256;
use anyhow::{ensure, Context, Result};

/// Parse a non-negative integer literal, decimal or `0x`-prefixed hex.
pub fn parse_uint256(value: &str) -> Result<U256> {
    let v = value.trim();
    ensure!(!v.is_empty(), "empty integer literal");
    v.parse::<U256>()
        .with_context(|| format!("not a non-negative integer literal: {value:?}"))
}

/// Encode a value as a `0x`-prefixed, left-zero-padded 32-byte hex word.
pub fn encode_uint256(value: &str) -> Result<String> {
    let v = parse_uint256(value)?;
    let hex = format!("{v:x}");
    Ok(format!("0x{hex:0>64}"))
}

/// Encode values as one hex blob of concatenated words, in input order.
pub fn encode_uint256_array(values: &[String]) -> Result<String> {
    let mut out = String::with_capacity(2 + 64 * values.len());
    out.push_str("0x");
    for value in values {
        let word = encode_uint256(value)?;
        out.push_str(&word[2..]);
    }
    Ok(out)
}
