//! # Packet Accessors
//!
//! Reads transfer funds and acknowledgements out of raw packet bytes.

use super::denom::resolve_local_denom;
use crate::domain::{Acknowledgement, RateLimitError, TransferPacketData};

/// Amount and local denom carried by a transfer packet.
pub fn funds_from_packet(data: &[u8]) -> Result<(String, String), RateLimitError> {
    let packet_data: TransferPacketData = serde_json::from_slice(data)
        .map_err(|e| RateLimitError::InvalidPacketData(e.to_string()))?;
    let denom = resolve_local_denom(&packet_data.denom);
    Ok((packet_data.amount, denom))
}

/// Decode an ICS-20 acknowledgement.
pub fn parse_acknowledgement(data: &[u8]) -> Result<Acknowledgement, RateLimitError> {
    serde_json::from_slice(data).map_err(|e| RateLimitError::InvalidAcknowledgement(e.to_string()))
}
