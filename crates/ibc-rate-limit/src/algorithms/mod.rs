//! # Algorithms Module
//!
//! Denom resolution, channel value arithmetic and request shaping.

pub mod channel_value;
pub mod denom;
pub mod packet;
pub mod request;

pub use channel_value::calculate_channel_value;
pub use denom::{is_valid_channel_id, resolve_local_denom, DenomTrace};
pub use packet::{funds_from_packet, parse_acknowledgement};
pub use request::{build_policy_request, build_undo_request, encode_request};
