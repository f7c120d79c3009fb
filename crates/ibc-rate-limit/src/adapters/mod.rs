//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits: escrow derivation, address codec and
//! an in-memory bank.

mod address_codec;
mod bank;
mod escrow;

pub use address_codec::{Bech32AddressCodec, MAX_ADDRESS_LEN};
pub use bank::InMemoryBank;
pub use escrow::Ics20EscrowAddresses;
