//! # Outbound Ports
//!
//! Read-only ledger collaborators and the policy engine handle. The core
//! never reaches ambient state: everything it reads comes through these
//! traits, so every node computes the same result from the same state.

use crate::domain::{AccountAddress, Amount, EngineError, RateLimitError};
use parking_lot::Mutex;

/// Bank balance and supply source - outbound port.
pub trait BankReader: Send + Sync {
    /// Balance of `denom` held by `account`. Missing records read as zero.
    fn balance(&self, account: &AccountAddress, denom: &str) -> Amount;

    /// Chain-wide supply of `denom` adjusted by its configured offset.
    fn supply_with_offset(&self, denom: &str) -> Amount;
}

/// Escrow address derivation - outbound port.
pub trait EscrowAddressDeriver: Send + Sync {
    /// Escrow account holding native funds locked for `(port, channel)`.
    fn escrow_address(&self, port: &str, channel: &str) -> AccountAddress;
}

/// Chain address parsing - outbound port.
pub trait AddressCodec: Send + Sync {
    /// Parse a human-readable chain address.
    fn parse(&self, address: &str) -> Result<AccountAddress, RateLimitError>;

    /// Encode raw address bytes to their human-readable form.
    fn encode(&self, address: &AccountAddress) -> Result<String, RateLimitError>;
}

/// Privileged policy engine entry point - outbound port.
///
/// Calls are synchronous and run inside the enclosing state transition.
pub trait PolicyEngine: Send + Sync {
    /// Execute an administrative request against the engine at `contract`.
    fn sudo(&self, contract: &AccountAddress, msg: &[u8]) -> Result<Vec<u8>, EngineError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Recording policy engine for testing.
#[derive(Default)]
pub struct MockPolicyEngine {
    /// Requests received, in order: (contract, raw message).
    pub calls: Mutex<Vec<(AccountAddress, Vec<u8>)>>,
    /// Failure returned for every call, if set.
    pub fail_with: Mutex<Option<EngineError>>,
}

impl MockPolicyEngine {
    /// Create an engine that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that fails every call.
    pub fn failing(err: EngineError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Mutex::new(Some(err)),
        }
    }

    /// Number of engine calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Requests received so far, decoded as JSON.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.calls
            .lock()
            .iter()
            .filter_map(|(_, msg)| serde_json::from_slice(msg).ok())
            .collect()
    }
}

impl PolicyEngine for MockPolicyEngine {
    fn sudo(&self, contract: &AccountAddress, msg: &[u8]) -> Result<Vec<u8>, EngineError> {
        self.calls.lock().push((contract.clone(), msg.to_vec()));
        match self.fail_with.lock().clone() {
            Some(err) => Err(err),
            None => Ok(Vec::new()),
        }
    }
}

/// Policy engine that accepts every request without recording it.
///
/// Suited to long-running loops where call history would grow unbounded.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAllPolicyEngine;

impl PolicyEngine for AcceptAllPolicyEngine {
    fn sudo(&self, _contract: &AccountAddress, _msg: &[u8]) -> Result<Vec<u8>, EngineError> {
        Ok(Vec::new())
    }
}
