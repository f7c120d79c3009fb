//! # Test Fixtures
//!
//! A small chain: in-memory bank with escrow balances and supplies, and a
//! policy engine that enforces a flat percentage-of-channel-value quota.

use ibc_rate_limit::{
    AccountAddress, Amount, EngineError, EscrowAddressDeriver, InMemoryBank,
    Ics20EscrowAddresses, Packet, PolicyEngine, PolicyRequest, RateLimitConfig,
    RateLimitService, TRANSFER_PORT,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Policy engine address (32 bytes of 0x07 under `osmo`).
pub const CONTRACT: &str = "osmo1qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurswpc8qurstc4vrk";

/// ATOM received over `transfer/channel-0`.
pub const IBC_ATOM: &str = "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";

/// Service wired against the fixtures.
pub type TestChain = RateLimitService<InMemoryBank, Ics20EscrowAddresses, QuotaEngine>;

/// Policy engine allowing `max_percent` of the channel value in net outflow.
pub struct QuotaEngine {
    max_percent: u64,
    /// (channel, denom) -> net outflow.
    used: Mutex<HashMap<(String, String), Amount>>,
    /// Every request received, decoded.
    pub log: Mutex<Vec<PolicyRequest>>,
}

impl QuotaEngine {
    /// Engine allowing `max_percent` of the channel value.
    pub fn new(max_percent: u64) -> Self {
        Self {
            max_percent,
            used: Mutex::new(HashMap::new()),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Net outflow recorded for `(channel, denom)`.
    pub fn used(&self, channel: &str, denom: &str) -> Amount {
        self.used
            .lock()
            .get(&(channel.to_string(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    fn parse_funds(funds: &str) -> Result<Amount, EngineError> {
        Amount::from_dec_str(funds).map_err(|e| EngineError::Execution(format!("bad funds: {e:?}")))
    }
}

impl PolicyEngine for QuotaEngine {
    fn sudo(&self, _contract: &AccountAddress, msg: &[u8]) -> Result<Vec<u8>, EngineError> {
        let request: PolicyRequest =
            serde_json::from_slice(msg).map_err(|e| EngineError::Execution(e.to_string()))?;
        self.log.lock().push(request.clone());

        let key = (request.channel_id().to_string(), request.denom().to_string());
        let funds = Self::parse_funds(request.funds())?;
        let mut used = self.used.lock();
        let current = used.get(&key).copied().unwrap_or_default();

        match &request {
            PolicyRequest::SendPacket(check) => {
                let limit = check.channel_value.amount() * Amount::from(self.max_percent)
                    / Amount::from(100u64);
                let next = current.saturating_add(funds);
                if next > limit {
                    return Err(EngineError::Rejected(format!(
                        "IBC rate limit exceeded for {}/{}: {} > {}",
                        key.0, key.1, next, limit
                    )));
                }
                used.insert(key, next);
            }
            PolicyRequest::RecvPacket(_) | PolicyRequest::UndoSend(_) => {
                used.insert(key, current.saturating_sub(funds));
            }
        }
        Ok(Vec::new())
    }
}

/// Chain with 50_000 uosmo escrowed on channel-7 and 1_000_000 ATOM
/// supply offset by -200_000.
pub fn test_chain(max_percent: u64) -> TestChain {
    crate::init_tracing();

    let bank = InMemoryBank::new();
    bank.set_balance(
        &Ics20EscrowAddresses.escrow_address(TRANSFER_PORT, "channel-7"),
        "uosmo",
        Amount::from(50_000u64),
    );
    bank.set_supply(IBC_ATOM, Amount::from(1_000_000u64));
    bank.set_supply_offset(IBC_ATOM, -200_000);

    RateLimitService::new(
        RateLimitConfig::with_contract(CONTRACT),
        bank,
        Ics20EscrowAddresses,
        QuotaEngine::new(max_percent),
    )
}

/// Transfer packet leaving on `source_channel` towards `channel-42`.
pub fn transfer_packet(sequence: u64, source_channel: &str, denom: &str, amount: &str) -> Packet {
    let data = serde_json::json!({
        "amount": amount,
        "denom": denom,
        "receiver": "cosmos1receiver",
        "sender": "osmo1sender",
    });
    Packet {
        sequence,
        source_port: TRANSFER_PORT.to_string(),
        source_channel: source_channel.to_string(),
        destination_port: TRANSFER_PORT.to_string(),
        destination_channel: "channel-42".to_string(),
        data: serde_json::to_vec(&data).unwrap_or_default(),
    }
}

/// Transfer packet arriving on `destination_channel`.
pub fn inbound_packet(sequence: u64, destination_channel: &str, denom: &str, amount: &str) -> Packet {
    let mut packet = transfer_packet(sequence, "channel-99", denom, amount);
    packet.destination_channel = destination_channel.to_string();
    packet
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with debug-level logs of the current thread captured.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    {
        let _guard = subscriber.set_default();
        f();
    }
    capture.contents()
}
