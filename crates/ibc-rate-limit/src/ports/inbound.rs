//! # Inbound Ports
//!
//! API trait the channel middleware drives.

use crate::domain::{ChannelValue, Packet, RateLimitError};

/// Rate-limit hook API - inbound port.
///
/// Every method is synchronous and deterministic. Errors are returned to
/// the middleware, which decides whether to block the packet.
pub trait RateLimitApi {
    /// Ask the policy engine whether a transfer fits its channel's limit.
    ///
    /// `msg_type` is `"send_packet"` or `"recv_packet"`; anything else is
    /// rejected with `BadMessage` before the engine is contacted.
    fn check_and_update_rate_limits(
        &self,
        msg_type: &str,
        contract: &str,
        channel_value: ChannelValue,
        source_channel: &str,
        denom: &str,
        amount: &str,
    ) -> Result<(), RateLimitError>;

    /// Release quota reserved by a send that was later rolled back.
    fn undo_send_rate_limit(
        &self,
        contract: &str,
        source_channel: &str,
        denom: &str,
        amount: &str,
    ) -> Result<(), RateLimitError>;

    /// Channel value for `denom` over `(port, channel)`.
    fn channel_value(&self, denom: &str, port: &str, channel: &str) -> ChannelValue;

    /// Outbound packet hook.
    fn on_send_packet(&self, packet: &Packet) -> Result<(), RateLimitError>;

    /// Inbound packet hook.
    fn on_recv_packet(&self, packet: &Packet) -> Result<(), RateLimitError>;

    /// Acknowledgement hook. Undoes the send when the ack is an error.
    fn on_acknowledgement_packet(
        &self,
        packet: &Packet,
        acknowledgement: &[u8],
    ) -> Result<(), RateLimitError>;

    /// Timeout hook. Always undoes the send.
    fn on_timeout_packet(&self, packet: &Packet) -> Result<(), RateLimitError>;
}
