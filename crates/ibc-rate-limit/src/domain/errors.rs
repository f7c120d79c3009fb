//! # Domain Errors
//!
//! Error taxonomy for the rate-limit hook.
//!
//! Every error is returned to the enclosing middleware. Nothing here is
//! logged-and-swallowed.

use primitive_types::U256;
use thiserror::Error;

/// Token amount in the asset's base unit (256-bit, like the bank module).
pub type Amount = U256;

/// Structured failure reported by the policy engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The engine evaluated the request and rejected it.
    #[error("rejected by policy engine: {0}")]
    Rejected(String),

    /// The engine could not execute the request (transport or contract fault).
    #[error("policy engine execution failed: {0}")]
    Execution(String),
}

/// Rate-limit hook error types.
#[derive(Debug, Error)]
pub enum RateLimitError {
    /// Policy engine address is not a well-formed chain address.
    #[error("Invalid address {address:?}: {reason}")]
    InvalidAddress {
        /// The address as supplied.
        address: String,
        /// Why it failed to parse.
        reason: String,
    },

    /// Unsupported direction value.
    #[error("Bad message: unsupported direction {0:?}")]
    BadMessage(String),

    /// Send/receive check failed. Blocks the transfer.
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(#[source] EngineError),

    /// Undo call failed.
    #[error("Contract error: {0}")]
    ContractError(#[source] EngineError),

    /// Packet payload is not ICS-20 fungible token packet data.
    #[error("Invalid packet data: {0}")]
    InvalidPacketData(String),

    /// Acknowledgement is not an ICS-20 acknowledgement.
    #[error("Invalid acknowledgement: {0}")]
    InvalidAcknowledgement(String),

    /// Request could not be serialized.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl RateLimitError {
    /// Underlying policy engine failure, if this error came from an engine call.
    pub fn engine_error(&self) -> Option<&EngineError> {
        match self {
            Self::RateLimitExceeded(e) | Self::ContractError(e) => Some(e),
            _ => None,
        }
    }
}
