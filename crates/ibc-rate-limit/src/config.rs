//! # Configuration
//!
//! Policy engine address and address prefix. Sourced from chain
//! parameters by the embedder; `from_env` exists for node operators and
//! test harnesses.

use crate::adapters::Bech32AddressCodec;
use crate::domain::RateLimitError;
use crate::ports::outbound::AddressCodec;
use serde::{Deserialize, Serialize};

/// Environment variable holding the policy engine address.
pub const ENV_CONTRACT: &str = "IBC_RATE_LIMIT_CONTRACT";

/// Environment variable holding the bech32 account prefix.
pub const ENV_BECH32_PREFIX: &str = "IBC_RATE_LIMIT_BECH32_PREFIX";

/// Default bech32 account prefix.
pub const DEFAULT_BECH32_PREFIX: &str = "osmo";

/// Rate-limit hook configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Policy engine address. `None` disables rate limiting.
    pub contract: Option<String>,
    /// Bech32 prefix every account address must carry.
    pub bech32_prefix: String,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            contract: None,
            bech32_prefix: DEFAULT_BECH32_PREFIX.to_string(),
        }
    }
}

impl RateLimitConfig {
    /// Config with a policy engine address and the default prefix.
    pub fn with_contract(contract: impl Into<String>) -> Self {
        Self {
            contract: Some(contract.into()),
            ..Self::default()
        }
    }

    /// Load from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup` on the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(contract) = lookup(ENV_CONTRACT) {
            config.contract = Some(contract);
        }
        if let Some(prefix) = lookup(ENV_BECH32_PREFIX) {
            config.bech32_prefix = prefix.to_lowercase();
        }
        config
    }

    /// Configured policy engine address, ignoring blank values.
    pub fn contract_address(&self) -> Option<&str> {
        self.contract
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Check that a configured policy engine address is well formed.
    pub fn validate(&self) -> Result<(), RateLimitError> {
        if let Some(contract) = self.contract_address() {
            Bech32AddressCodec::new(self.bech32_prefix.clone()).parse(contract)?;
        }
        Ok(())
    }
}
