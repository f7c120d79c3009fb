//! # Policy Request Builder
//!
//! Shapes the administrative requests sent to the policy engine.

use crate::domain::{ChannelValue, Direction, PolicyRequest, RateLimitError};

/// Build a `send_packet` / `recv_packet` request from a raw direction tag.
///
/// Unknown tags fail with `BadMessage`.
pub fn build_policy_request(
    msg_type: &str,
    source_channel: &str,
    denom: &str,
    channel_value: ChannelValue,
    amount: &str,
) -> Result<PolicyRequest, RateLimitError> {
    let direction: Direction = msg_type.parse()?;
    Ok(PolicyRequest::check(
        direction,
        source_channel,
        denom,
        channel_value,
        amount,
    ))
}

/// Build the `undo_send` request for a rolled back send.
pub fn build_undo_request(source_channel: &str, denom: &str, amount: &str) -> PolicyRequest {
    PolicyRequest::undo_send(source_channel, denom, amount)
}

/// Serialize a request to the JSON bytes the engine expects.
pub fn encode_request(request: &PolicyRequest) -> Result<Vec<u8>, RateLimitError> {
    serde_json::to_vec(request).map_err(|e| RateLimitError::Encoding(e.to_string()))
}
