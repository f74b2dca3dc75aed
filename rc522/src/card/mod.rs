// rc522/src/card/mod.rs

//! Card session: activation, authentication and block memory access on a
//! MIFARE Classic card through an initialized [`Device`].

use std::time::Duration;

use crate::device::{Device, Initialized};
use crate::protocol::layout::sector_of;
use crate::protocol::AccessConditions;
use crate::types::{Atqa, BlockData, CardType, Key, KeyType, Sak, Uid};
use crate::Result;

pub mod auth;
pub mod operations;
pub mod selection;

/// Where the card stands in the ISO 14443-3 activation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum SelectionState {
    #[default]
    Idle,
    /// REQA/WUPA answered.
    Requested,
    Selected,
}

/// An accepted three-pass authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSession {
    pub key_type: KeyType,
    pub block: u8,
}

impl AuthSession {
    pub fn sector(&self) -> u8 {
        sector_of(self.block)
    }

    /// Crypto1 state is per sector.
    pub fn covers(&self, block: u8) -> bool {
        sector_of(block) == self.sector()
    }
}

/// Per-card state tracked by the device handle.
#[derive(Debug, Clone, Default)]
pub struct CardSession {
    pub(crate) state: SelectionState,
    pub(crate) uid: Option<Uid>,
    pub(crate) sak: Option<Sak>,
    pub(crate) auth: Option<AuthSession>,
    /// An increment/decrement/restore left a value in the transfer buffer.
    pub(crate) transfer_pending: bool,
}

impl CardSession {
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// UID of the last successful anticollision.
    pub fn uid(&self) -> Option<&Uid> {
        self.uid.as_ref()
    }

    pub fn sak(&self) -> Option<Sak> {
        self.sak
    }

    pub fn auth(&self) -> Option<AuthSession> {
        self.auth
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    pub fn transfer_pending(&self) -> bool {
        self.transfer_pending
    }

    pub(crate) fn drop_auth(&mut self) {
        self.auth = None;
        self.transfer_pending = false;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self {
            uid: self.uid,
            ..Self::default()
        };
    }
}

/// A fully activated card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
    atqa: Atqa,
    sak: Sak,
}

impl Card {
    pub fn new(uid: Uid, atqa: Atqa, sak: Sak) -> Self {
        Self { uid, atqa, sak }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }
    pub fn atqa(&self) -> Atqa {
        self.atqa
    }
    pub fn sak(&self) -> Sak {
        self.sak
    }
    pub fn card_type(&self) -> CardType {
        self.sak.card_type()
    }
}

impl Device<Initialized> {
    pub fn session(&self) -> &CardSession {
        &self.card
    }

    /// Send REQA; the ATQA must be exactly 16 bits.
    pub fn request(&mut self) -> Result<Atqa> {
        selection::request(self)
    }

    /// Send WUPA, which also wakes halted cards.
    pub fn wake_up(&mut self) -> Result<Atqa> {
        selection::wake_up(self)
    }

    /// REQA as a presence check. Only bus failures are errors.
    pub fn is_card_present(&mut self) -> Result<bool> {
        selection::is_card_present(self)
    }

    /// Cascade level 1 anticollision; the UID is recorded on success.
    pub fn anticollision(&mut self) -> Result<Uid> {
        selection::anticollision(self)
    }

    /// Presence check followed by anticollision. `None` when no card answers.
    pub fn detect_uid(&mut self) -> Result<Option<Uid>> {
        selection::detect_uid(self)
    }

    /// Poll [`Device::detect_uid`] up to `attempts` times.
    pub fn wait_for_uid(&mut self, interval: Duration, attempts: usize) -> Result<Option<Uid>> {
        selection::wait_for_uid(self, interval, attempts)
    }

    /// SELECT every cascade level of `uid`.
    pub fn select(&mut self, uid: &Uid) -> Result<Sak> {
        selection::select(self, uid)
    }

    /// Like [`Device::select`], reporting card-level failures as `false`.
    pub fn select_tag(&mut self, uid: &Uid) -> Result<bool> {
        selection::select_tag(self, uid)
    }

    /// Full activation (REQA, anticollision and select on every cascade
    /// level), resolving 4- and 7-byte UIDs.
    pub fn activate(&mut self) -> Result<Card> {
        selection::activate(self)
    }

    /// HLTA. Silence is the card's acknowledgement.
    pub fn halt(&mut self) -> Result<()> {
        selection::halt(self)
    }

    pub fn authenticate(&mut self, key_type: KeyType, block: u8, key: &Key) -> Result<()> {
        auth::authenticate(self, key_type, block, key)
    }

    /// Leave the encrypted session.
    pub fn stop_crypto(&mut self) -> Result<()> {
        auth::stop_crypto(self)
    }

    pub fn read_block(&mut self, block: u8) -> Result<BlockData> {
        operations::read_block(self, block)
    }

    pub fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        operations::write_block(self, block, data)
    }

    /// [`Device::write_block`] for callers holding a slice; the length is
    /// checked before any traffic.
    pub fn write_block_bytes(&mut self, block: u8, data: &[u8]) -> Result<()> {
        operations::write_block(self, block, &BlockData::try_from(data)?)
    }

    pub fn increment(&mut self, block: u8, delta: i32) -> Result<()> {
        operations::increment(self, block, delta)
    }

    pub fn decrement(&mut self, block: u8, delta: i32) -> Result<()> {
        operations::decrement(self, block, delta)
    }

    /// Load a value block into the transfer buffer unchanged.
    pub fn restore(&mut self, block: u8) -> Result<()> {
        operations::restore(self, block)
    }

    /// Commit the transfer buffer to `block`.
    pub fn transfer(&mut self, block: u8) -> Result<()> {
        operations::transfer(self, block)
    }

    pub fn read_value(&mut self, block: u8) -> Result<i32> {
        operations::read_value(self, block)
    }

    pub fn write_value(&mut self, block: u8, value: i32) -> Result<()> {
        operations::write_value(self, block, value)
    }

    pub fn write_trailer(
        &mut self,
        sector: u8,
        key_a: &Key,
        access_bits: &[u8],
        user_data: u8,
        key_b: &Key,
    ) -> Result<()> {
        operations::write_trailer(self, sector, key_a, access_bits, user_data, key_b)
    }

    pub fn read_access_conditions(&mut self, sector: u8) -> Result<AccessConditions> {
        operations::read_access_conditions(self, sector)
    }
}
