//! # Domain Entities
//!
//! Call-scoped records: the policy request sent to the engine and the
//! packet shapes read from the protocol layer. Nothing here outlives a
//! single packet-processing call.

use super::value_objects::{ChannelValue, Direction};
use serde::{Deserialize, Serialize};

/// Payload of a `send_packet` / `recv_packet` check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitCheck {
    /// Channel the transfer flows through.
    pub channel_id: String,
    /// Local denom used for accounting.
    pub denom: String,
    /// Percentage base for the engine's limits.
    pub channel_value: ChannelValue,
    /// Transferred amount as a decimal integer string.
    pub funds: String,
}

/// Payload of an `undo_send` compensation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoSend {
    /// Channel of the original send.
    pub channel_id: String,
    /// Local denom of the original send.
    pub denom: String,
    /// Amount of the original send.
    pub funds: String,
}

/// Administrative request sent to the policy engine.
///
/// Serializes externally tagged, e.g. `{"send_packet": {...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRequest {
    /// Outbound transfer check.
    SendPacket(RateLimitCheck),
    /// Inbound transfer accounting.
    RecvPacket(RateLimitCheck),
    /// Release quota reserved by a send that was rolled back.
    UndoSend(UndoSend),
}

impl PolicyRequest {
    /// Build the check request for a direction.
    pub fn check(
        direction: Direction,
        channel_id: impl Into<String>,
        denom: impl Into<String>,
        channel_value: ChannelValue,
        funds: impl Into<String>,
    ) -> Self {
        let content = RateLimitCheck {
            channel_id: channel_id.into(),
            denom: denom.into(),
            channel_value,
            funds: funds.into(),
        };
        match direction {
            Direction::Send => PolicyRequest::SendPacket(content),
            Direction::Recv => PolicyRequest::RecvPacket(content),
        }
    }

    /// Build the compensation request for a rolled back send.
    pub fn undo_send(
        channel_id: impl Into<String>,
        denom: impl Into<String>,
        funds: impl Into<String>,
    ) -> Self {
        PolicyRequest::UndoSend(UndoSend {
            channel_id: channel_id.into(),
            denom: denom.into(),
            funds: funds.into(),
        })
    }

    /// Wire tag of this request.
    pub fn tag(&self) -> &'static str {
        match self {
            PolicyRequest::SendPacket(_) => Direction::Send.as_str(),
            PolicyRequest::RecvPacket(_) => Direction::Recv.as_str(),
            PolicyRequest::UndoSend(_) => "undo_send",
        }
    }

    /// Channel the request refers to.
    pub fn channel_id(&self) -> &str {
        match self {
            PolicyRequest::SendPacket(c) | PolicyRequest::RecvPacket(c) => &c.channel_id,
            PolicyRequest::UndoSend(u) => &u.channel_id,
        }
    }

    /// Denom the request refers to.
    pub fn denom(&self) -> &str {
        match self {
            PolicyRequest::SendPacket(c) | PolicyRequest::RecvPacket(c) => &c.denom,
            PolicyRequest::UndoSend(u) => &u.denom,
        }
    }

    /// Funds the request refers to.
    pub fn funds(&self) -> &str {
        match self {
            PolicyRequest::SendPacket(c) | PolicyRequest::RecvPacket(c) => &c.funds,
            PolicyRequest::UndoSend(u) => &u.funds,
        }
    }

    /// Matching undo for a send request. `None` for other variants.
    pub fn to_undo(&self) -> Option<PolicyRequest> {
        match self {
            PolicyRequest::SendPacket(c) => Some(PolicyRequest::undo_send(
                c.channel_id.clone(),
                c.denom.clone(),
                c.funds.clone(),
            )),
            PolicyRequest::RecvPacket(_) | PolicyRequest::UndoSend(_) => None,
        }
    }
}

/// ICS-20 fungible token packet data as carried on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPacketData {
    /// Wire denom, possibly trace-prefixed.
    pub denom: String,
    /// Decimal amount string.
    pub amount: String,
    /// Sender on the source chain.
    pub sender: String,
    /// Receiver on the destination chain.
    pub receiver: String,
    /// Optional memo.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
}

/// Channel packet as handed over by the middleware.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    /// Packet sequence.
    pub sequence: u64,
    /// Port on the sending chain.
    pub source_port: String,
    /// Channel on the sending chain.
    pub source_channel: String,
    /// Port on the receiving chain.
    pub destination_port: String,
    /// Channel on the receiving chain.
    pub destination_channel: String,
    /// Opaque application payload.
    pub data: Vec<u8>,
}

/// ICS-20 acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acknowledgement {
    /// Success, with base64 result bytes.
    Result(String),
    /// Failure, with the error string.
    Error(String),
}

impl Acknowledgement {
    /// Check if the counterparty accepted the packet.
    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgement::Result(_))
    }
}
