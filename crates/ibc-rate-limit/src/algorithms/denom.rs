//! # Denom Resolver
//!
//! Maps the denom carried on the wire to the local identifier used for
//! rate-limit accounting.
//!
//! ```text
//! send non-native:  transfer/channel-0/uatom  ->  ibc/27394F...
//! send native:      uosmo                     ->  uosmo
//! recv non-native:  uatom                     ->  uatom
//! recv native:      transfer/channel-0/uosmo  ->  ibc/...
//! ```
//!
//! The rule is direction-agnostic. The middleware supplies the wire denom
//! already adjusted for the side of the channel it is processing.

use crate::domain::{IBC_DENOM_PREFIX, TRANSFER_TRACE_PREFIX};
use sha2::{Digest, Sha256};

const CHANNEL_PREFIX: &str = "channel-";

/// Parsed denom trace: `{path}/{base_denom}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenomTrace {
    /// Sequence of `port/channel` hops, `/`-joined. Empty for native denoms.
    pub path: String,
    /// Base denom on the origin chain. May itself contain `/`.
    pub base_denom: String,
}

impl DenomTrace {
    /// Parse a raw denom into path and base denom.
    ///
    /// `(port, channel)` pairs are consumed while the channel element is a
    /// valid channel identifier; the rest is the base denom. Never fails:
    /// malformed input yields a best-effort trace.
    pub fn parse(raw_denom: &str) -> Self {
        let items: Vec<&str> = raw_denom.split('/').collect();
        if items.len() == 1 {
            return Self {
                path: String::new(),
                base_denom: raw_denom.to_string(),
            };
        }

        let length = items.len();
        let mut path: Vec<&str> = Vec::new();
        let mut base: &[&str] = &[];
        let mut i = 0;
        while i < length {
            if i < length - 1 && length > 2 && is_valid_channel_id(items[i + 1]) {
                path.push(items[i]);
                path.push(items[i + 1]);
            } else {
                base = &items[i..];
                break;
            }
            i += 2;
        }

        Self {
            path: path.join("/"),
            base_denom: base.join("/"),
        }
    }

    /// Full denom path `{path}/{base_denom}`, or the base denom when native.
    pub fn full_path(&self) -> String {
        if self.path.is_empty() {
            self.base_denom.clone()
        } else {
            format!("{}/{}", self.path, self.base_denom)
        }
    }

    /// SHA-256 of the full denom path.
    pub fn hash(&self) -> [u8; 32] {
        Sha256::digest(self.full_path().as_bytes()).into()
    }

    /// Canonical local denom: `ibc/{HASH}` for traced denoms, else the base denom.
    pub fn ibc_denom(&self) -> String {
        if self.path.is_empty() {
            return self.base_denom.clone();
        }
        format!("{}{}", IBC_DENOM_PREFIX, hex::encode_upper(self.hash()))
    }
}

/// Check for `channel-{u64}`.
pub fn is_valid_channel_id(id: &str) -> bool {
    match id.strip_prefix(CHANNEL_PREFIX) {
        Some(seq) => {
            !seq.is_empty()
                && seq.len() <= 20
                && seq.bytes().all(|b| b.is_ascii_digit())
                && seq.parse::<u64>().is_ok()
        }
        None => false,
    }
}

/// Resolve a wire denom to its local accounting identifier.
pub fn resolve_local_denom(wire_denom: &str) -> String {
    if wire_denom.starts_with(TRANSFER_TRACE_PREFIX) {
        DenomTrace::parse(wire_denom).ibc_denom()
    } else {
        wire_denom.to_string()
    }
}
