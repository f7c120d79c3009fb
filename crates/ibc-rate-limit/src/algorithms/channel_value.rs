//! # Channel Value Calculator
//!
//! The economic baseline the policy engine expresses limits against.
//!
//! | Denom | Channel value |
//! |-------|---------------|
//! | `ibc/...` | total supply with offset (channel-independent) |
//! | native | escrow balance of `(port, channel)` |
//! | native, channel `any` | escrow balance of `(port, "any")` |
//!
//! Only ledger state is read. The packet's own amount never contributes.

use crate::domain::{ChannelValue, ANY_CHANNEL, IBC_DENOM_PREFIX};
use crate::ports::{BankReader, EscrowAddressDeriver};
use tracing::debug;

/// Compute the channel value for `denom` over `(port, channel)`.
pub fn calculate_channel_value<B, E>(
    denom: &str,
    port: &str,
    channel: &str,
    bank: &B,
    escrow: &E,
) -> ChannelValue
where
    B: BankReader + ?Sized,
    E: EscrowAddressDeriver + ?Sized,
{
    if denom.starts_with(IBC_DENOM_PREFIX) {
        return ChannelValue(bank.supply_with_offset(denom));
    }

    if channel == ANY_CHANNEL {
        // TODO: sum escrow balances over every channel on `port` once the
        // middleware can hand us a channel enumeration.
        debug!(
            port = %port,
            denom = %denom,
            "[rate-limit] aggregate channel value falls back to single escrow lookup"
        );
    }

    let escrow_address = escrow.escrow_address(port, channel);
    ChannelValue(bank.balance(&escrow_address, denom))
}
