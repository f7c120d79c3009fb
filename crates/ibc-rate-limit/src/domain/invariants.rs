//! # Domain Invariants
//!
//! Rules the middleware must uphold around the two request shapes.

use super::entities::PolicyRequest;

/// Invariant: undo references the original approval.
///
/// An `undo_send` must carry the identical `(channel_id, denom, funds)`
/// tuple consumed by the `send_packet` it compensates.
pub fn invariant_undo_matches_send(send: &PolicyRequest, undo: &PolicyRequest) -> bool {
    match (send, undo) {
        (PolicyRequest::SendPacket(check), PolicyRequest::UndoSend(u)) => {
            check.channel_id == u.channel_id && check.denom == u.denom && check.funds == u.funds
        }
        _ => false,
    }
}
