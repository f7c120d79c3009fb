//! # IBC Rate Limit
//!
//! Rate-limit enforcement hook for ICS-20 transfer packets.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Every outbound transfer is checked against an external policy engine
//! before it commits; every inbound transfer is recorded against it. A
//! send that later fails (error acknowledgement or timeout) releases its
//! reserved quota with a compensating `undo_send`.
//!
//! The hook is stateless: quota windows live in the policy engine, balances
//! and supplies in the bank. Every validator computes identical requests
//! from identical packet data and ledger state.
//!
//! ## Policy Engine Requests
//!
//! | Tag | Fields | Issued by |
//! |-----|--------|-----------|
//! | `send_packet` | `channel_id, denom, channel_value, funds` | `check_and_update_rate_limits` |
//! | `recv_packet` | `channel_id, denom, channel_value, funds` | `check_and_update_rate_limits` |
//! | `undo_send` | `channel_id, denom, funds` | `undo_send_rate_limit` |
//!
//! ## Error Taxonomy
//!
//! | Error | Cause |
//! |-------|-------|
//! | `InvalidAddress` | policy engine address does not parse |
//! | `BadMessage` | unsupported direction tag |
//! | `RateLimitExceeded` | engine rejected or failed a send/recv check |
//! | `ContractError` | engine failed an undo |
//!
//! ## Module Structure
//!
//! ```text
//! ibc-rate-limit/
//! ├── domain/          # PolicyRequest, ChannelValue, Direction, errors
//! ├── algorithms/      # Denom resolver, channel value, request builder
//! ├── ports/           # RateLimitApi, BankReader, PolicyEngine, ...
//! ├── adapters/        # ICS-20 escrow, bech32 codec, in-memory bank
//! ├── config.rs        # RateLimitConfig
//! └── service.rs       # RateLimitService (invokers + packet hooks)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{Bech32AddressCodec, InMemoryBank, Ics20EscrowAddresses};
pub use algorithms::{
    build_policy_request, build_undo_request, calculate_channel_value, encode_request,
    funds_from_packet, is_valid_channel_id, parse_acknowledgement, resolve_local_denom,
    DenomTrace,
};
pub use config::RateLimitConfig;
pub use domain::{
    invariant_undo_matches_send, AccountAddress, Acknowledgement, Amount, ChannelValue,
    Direction, EngineError, Packet, PolicyRequest, RateLimitCheck, RateLimitError,
    TransferPacketData, UndoSend, ANY_CHANNEL, IBC_DENOM_PREFIX, ICS20_VERSION, TRANSFER_PORT,
    TRANSFER_TRACE_PREFIX,
};
pub use ports::{
    AcceptAllPolicyEngine, AddressCodec, BankReader, EscrowAddressDeriver, MockPolicyEngine,
    PolicyEngine, RateLimitApi,
};
pub use service::RateLimitService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
