//! # Rate Limit Service
//!
//! Policy Invoker, Undo Invoker and the packet lifecycle hooks the
//! channel middleware calls.
//!
//! ## Ordering
//!
//! - `send_packet` must be accepted before the transfer's state effects commit.
//! - A rolled back send (error ack or timeout) issues `undo_send` with the
//!   identical `(channel, denom, amount)` tuple before the rollback completes.
//!
//! Execution is synchronous and single-threaded per packet. Nothing here
//! retries; retry policy belongs to the caller.

use crate::adapters::Bech32AddressCodec;
use crate::algorithms::{
    build_policy_request, build_undo_request, calculate_channel_value, encode_request,
    funds_from_packet, parse_acknowledgement,
};
use crate::config::RateLimitConfig;
use crate::domain::{ChannelValue, Direction, Packet, RateLimitError};
use crate::ports::inbound::RateLimitApi;
use crate::ports::outbound::{AddressCodec, BankReader, EscrowAddressDeriver, PolicyEngine};
use tracing::{debug, instrument, warn};

/// The rate-limit hook.
pub struct RateLimitService<B, E, P, C = Bech32AddressCodec> {
    /// Hook configuration.
    config: RateLimitConfig,
    /// Balance and supply source.
    bank: B,
    /// Escrow address derivation.
    escrow: E,
    /// Policy engine handle.
    engine: P,
    /// Address parser.
    codec: C,
}

impl<B, E, P> RateLimitService<B, E, P, Bech32AddressCodec>
where
    B: BankReader,
    E: EscrowAddressDeriver,
    P: PolicyEngine,
{
    /// Create a service parsing addresses under the configured bech32 prefix.
    pub fn new(config: RateLimitConfig, bank: B, escrow: E, engine: P) -> Self {
        let codec = Bech32AddressCodec::new(config.bech32_prefix.clone());
        Self::with_codec(config, bank, escrow, engine, codec)
    }
}

impl<B, E, P, C> RateLimitService<B, E, P, C>
where
    B: BankReader,
    E: EscrowAddressDeriver,
    P: PolicyEngine,
    C: AddressCodec,
{
    /// Create a service with a custom address codec.
    pub fn with_codec(config: RateLimitConfig, bank: B, escrow: E, engine: P, codec: C) -> Self {
        Self {
            config,
            bank,
            escrow,
            engine,
            codec,
        }
    }

    /// Policy engine handle.
    pub fn engine(&self) -> &P {
        &self.engine
    }

    fn check_packet(
        &self,
        direction: Direction,
        contract: &str,
        port: &str,
        channel: &str,
        packet: &Packet,
    ) -> Result<(), RateLimitError> {
        let (amount, denom) = funds_from_packet(&packet.data)?;
        let channel_value = self.channel_value(&denom, port, channel);
        self.check_and_update_rate_limits(
            direction.as_str(),
            contract,
            channel_value,
            channel,
            &denom,
            &amount,
        )
    }

    fn revert_sent_packet(&self, contract: &str, packet: &Packet) -> Result<(), RateLimitError> {
        let (amount, denom) = funds_from_packet(&packet.data)?;
        self.undo_send_rate_limit(contract, &packet.source_channel, &denom, &amount)
    }
}

impl<B, E, P, C> RateLimitApi for RateLimitService<B, E, P, C>
where
    B: BankReader,
    E: EscrowAddressDeriver,
    P: PolicyEngine,
    C: AddressCodec,
{
    fn check_and_update_rate_limits(
        &self,
        msg_type: &str,
        contract: &str,
        channel_value: ChannelValue,
        source_channel: &str,
        denom: &str,
        amount: &str,
    ) -> Result<(), RateLimitError> {
        let contract_addr = self.codec.parse(contract)?;
        let request =
            build_policy_request(msg_type, source_channel, denom, channel_value, amount)?;
        let msg = encode_request(&request)?;

        debug!(
            direction = msg_type,
            channel = source_channel,
            denom = denom,
            funds = amount,
            channel_value = %channel_value,
            "[rate-limit] checking transfer"
        );

        self.engine.sudo(&contract_addr, &msg).map_err(|e| {
            warn!(
                direction = msg_type,
                channel = source_channel,
                denom = denom,
                funds = amount,
                error = %e,
                "[rate-limit] transfer blocked"
            );
            RateLimitError::RateLimitExceeded(e)
        })?;

        Ok(())
    }

    fn undo_send_rate_limit(
        &self,
        contract: &str,
        source_channel: &str,
        denom: &str,
        amount: &str,
    ) -> Result<(), RateLimitError> {
        let contract_addr = self.codec.parse(contract)?;
        let msg = encode_request(&build_undo_request(source_channel, denom, amount))?;

        debug!(
            channel = source_channel,
            denom = denom,
            funds = amount,
            "[rate-limit] undoing send"
        );

        self.engine.sudo(&contract_addr, &msg).map_err(|e| {
            warn!(
                channel = source_channel,
                denom = denom,
                funds = amount,
                error = %e,
                "[rate-limit] undo failed"
            );
            RateLimitError::ContractError(e)
        })?;

        Ok(())
    }

    fn channel_value(&self, denom: &str, port: &str, channel: &str) -> ChannelValue {
        calculate_channel_value(denom, port, channel, &self.bank, &self.escrow)
    }

    #[instrument(skip(self, packet), fields(sequence = packet.sequence))]
    fn on_send_packet(&self, packet: &Packet) -> Result<(), RateLimitError> {
        let Some(contract) = self.config.contract_address() else {
            debug!("[rate-limit] no policy engine configured, skipping send");
            return Ok(());
        };
        self.check_packet(
            Direction::Send,
            contract,
            &packet.source_port,
            &packet.source_channel,
            packet,
        )
    }

    #[instrument(skip(self, packet), fields(sequence = packet.sequence))]
    fn on_recv_packet(&self, packet: &Packet) -> Result<(), RateLimitError> {
        let Some(contract) = self.config.contract_address() else {
            debug!("[rate-limit] no policy engine configured, skipping recv");
            return Ok(());
        };
        self.check_packet(
            Direction::Recv,
            contract,
            &packet.destination_port,
            &packet.destination_channel,
            packet,
        )
    }

    #[instrument(skip(self, packet, acknowledgement), fields(sequence = packet.sequence))]
    fn on_acknowledgement_packet(
        &self,
        packet: &Packet,
        acknowledgement: &[u8],
    ) -> Result<(), RateLimitError> {
        let Some(contract) = self.config.contract_address() else {
            return Ok(());
        };
        if parse_acknowledgement(acknowledgement)?.is_success() {
            return Ok(());
        }
        self.revert_sent_packet(contract, packet)
    }

    #[instrument(skip(self, packet), fields(sequence = packet.sequence))]
    fn on_timeout_packet(&self, packet: &Packet) -> Result<(), RateLimitError> {
        let Some(contract) = self.config.contract_address() else {
            return Ok(());
        };
        self.revert_sent_packet(contract, packet)
    }
}
