//! ICS-20 Escrow Address Adapter
//!
//! Implements `EscrowAddressDeriver` the way the transfer module does:
//! `SHA-256("ics20-1" || 0x00 || "{port}/{channel}")[..20]`.

use crate::domain::{AccountAddress, ICS20_VERSION};
use crate::ports::outbound::EscrowAddressDeriver;
use sha2::{Digest, Sha256};

/// Stateless ICS-20 escrow address derivation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ics20EscrowAddresses;

impl EscrowAddressDeriver for Ics20EscrowAddresses {
    fn escrow_address(&self, port: &str, channel: &str) -> AccountAddress {
        let mut hasher = Sha256::new();
        hasher.update(ICS20_VERSION.as_bytes());
        hasher.update([0u8]);
        hasher.update(format!("{port}/{channel}").as_bytes());
        let hash = hasher.finalize();
        AccountAddress::new(&hash[..20])
    }
}
