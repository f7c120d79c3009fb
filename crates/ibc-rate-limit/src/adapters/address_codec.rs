//! Bech32 Address Codec Adapter
//!
//! Implements `AddressCodec` for bech32 account addresses under a fixed
//! human-readable prefix.

use crate::domain::{AccountAddress, RateLimitError};
use crate::ports::outbound::AddressCodec;
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};

/// Longest address payload accepted, in bytes.
pub const MAX_ADDRESS_LEN: usize = 255;

/// Bech32 codec bound to one prefix (e.g. `osmo`).
#[derive(Clone, Debug)]
pub struct Bech32AddressCodec {
    prefix: String,
}

impl Bech32AddressCodec {
    /// Create a codec for `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().to_lowercase(),
        }
    }
}

fn invalid(address: &str, reason: impl Into<String>) -> RateLimitError {
    RateLimitError::InvalidAddress {
        address: address.to_string(),
        reason: reason.into(),
    }
}

impl AddressCodec for Bech32AddressCodec {
    fn parse(&self, address: &str) -> Result<AccountAddress, RateLimitError> {
        if address.trim().is_empty() {
            return Err(invalid(address, "empty address string is not allowed"));
        }

        let checked = CheckedHrpstring::new::<Bech32>(address)
            .map_err(|e| invalid(address, e.to_string()))?;

        let hrp = checked.hrp().as_str().to_lowercase();
        if hrp != self.prefix {
            return Err(invalid(
                address,
                format!("invalid Bech32 prefix; expected {}, got {}", self.prefix, hrp),
            ));
        }

        let bytes: Vec<u8> = checked.byte_iter().collect();
        if bytes.is_empty() {
            return Err(invalid(address, "addresses cannot be empty"));
        }
        if bytes.len() > MAX_ADDRESS_LEN {
            return Err(invalid(
                address,
                format!("address max length is {MAX_ADDRESS_LEN}, got {}", bytes.len()),
            ));
        }

        Ok(AccountAddress::new(bytes))
    }

    fn encode(&self, address: &AccountAddress) -> Result<String, RateLimitError> {
        let hrp = Hrp::parse(&self.prefix).map_err(|e| {
            invalid(
                &address.to_string(),
                format!("invalid Bech32 prefix {:?}: {e}", self.prefix),
            )
        })?;
        bech32::encode::<Bech32>(hrp, address.as_bytes())
            .map_err(|e| RateLimitError::Encoding(e.to_string()))
    }
}
