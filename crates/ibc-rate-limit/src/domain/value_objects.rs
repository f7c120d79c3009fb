//! # Domain Value Objects
//!
//! Immutable value types shared by the resolver, calculator and invokers.

use super::errors::{Amount, RateLimitError};
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::fmt;
use std::str::FromStr;

/// Wire denoms carrying a full transfer trace start with this prefix.
pub const TRANSFER_TRACE_PREFIX: &str = "transfer/";

/// Hashed (non-native) local denoms start with this prefix.
pub const IBC_DENOM_PREFIX: &str = "ibc/";

/// Channel sentinel meaning "aggregate across all channels".
pub const ANY_CHANNEL: &str = "any";

/// ICS-20 transfer port.
pub const TRANSFER_PORT: &str = "transfer";

/// ICS-20 application version, used as the escrow address domain separator.
pub const ICS20_VERSION: &str = "ics20-1";

/// Packet direction relative to the local chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Outbound transfer (`send_packet`).
    Send,
    /// Inbound transfer (`recv_packet`).
    Recv,
}

impl Direction {
    /// Request tag understood by the policy engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Send => "send_packet",
            Direction::Recv => "recv_packet",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = RateLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "send_packet" => Ok(Direction::Send),
            "recv_packet" => Ok(Direction::Recv),
            other => Err(RateLimitError::BadMessage(other.to_string())),
        }
    }
}

/// Total value backing a channel for one denom, in base units.
///
/// Serialized as a bare JSON number of arbitrary magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelValue(pub Amount);

impl ChannelValue {
    /// Zero channel value.
    pub fn zero() -> Self {
        Self(Amount::zero())
    }

    /// Inner amount.
    pub fn amount(&self) -> Amount {
        self.0
    }
}

impl From<Amount> for ChannelValue {
    fn from(amount: Amount) -> Self {
        Self(amount)
    }
}

impl From<u64> for ChannelValue {
    fn from(amount: u64) -> Self {
        Self(Amount::from(amount))
    }
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ChannelValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.0.to_string()).map_err(ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChannelValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        // At most one pair of quotes: a decimal string or a bare number.
        let digits = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(de::Error::custom(format!(
                "invalid channel value {text}: expected a non-negative integer"
            )));
        }
        Amount::from_dec_str(digits)
            .map(ChannelValue)
            .map_err(|e| de::Error::custom(format!("invalid channel value {text}: {e:?}")))
    }
}

/// Raw account address bytes (20-byte accounts, 32-byte contracts).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress(Vec<u8>);

impl AccountAddress {
    /// Wrap raw address bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Address bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}
