// rc522/src/card/auth.rs

//! MIFARE Classic three-pass authentication through MFAuthent.

use log::{debug, warn};

use crate::card::{AuthSession, SelectionState};
use crate::constants::MF_CRYPTO1_ON;
use crate::device::{Command, Device, Initialized, Register};
use crate::error::ErrorKind;
use crate::protocol::commands;
use crate::types::{Key, KeyType};
use crate::{Error, Result};

/// Authenticate the sector holding `block`. Success is reported by the
/// chip's Crypto1 status bit, not by the command completing: a card that
/// rejects the key usually just stops answering, so a timeout or protocol
/// error from MFAuthent still ends in the status check.
pub fn authenticate(
    device: &mut Device<Initialized>,
    key_type: KeyType,
    block: u8,
    key: &Key,
) -> Result<()> {
    if device.card.state != SelectionState::Selected {
        return Err(Error::InvalidState(
            "authentication needs a selected card".into(),
        ));
    }
    let uid = device
        .card
        .uid
        .ok_or_else(|| Error::InvalidState("no UID recorded for the selected card".into()))?;

    device.card.drop_auth();
    // stale bit from an earlier sector would read as success
    device.clear_bits(Register::Status2, MF_CRYPTO1_ON)?;
    let frame = commands::auth_frame(key_type, block, key, &uid.auth_bytes());
    match device.execute(Command::MfAuthent, &frame) {
        Ok(_) => {}
        Err(e) if matches!(e.kind(), ErrorKind::Timeout | ErrorKind::Protocol) => {
            debug!("MFAuthent for block {} ended with {}", block, e);
        }
        Err(e) => return Err(e),
    }

    let status = device.read_register(Register::Status2)?;
    if status & MF_CRYPTO1_ON == 0 {
        warn!("{} rejected for block {} of {}", key_type, block, uid);
        return Err(Error::AuthenticationFailed { block });
    }
    device.card.auth = Some(AuthSession { key_type, block });
    debug!("authenticated block {} with {}", block, key_type);
    Ok(())
}

pub fn stop_crypto(device: &mut Device<Initialized>) -> Result<()> {
    device.clear_bits(Register::Status2, MF_CRYPTO1_ON)?;
    device.card.drop_auth();
    Ok(())
}

/// Fail without touching the bus unless `block` lies in the
/// authenticated sector.
pub(crate) fn require_auth(device: &Device<Initialized>, block: u8) -> Result<()> {
    match device.card.auth {
        Some(session) if session.covers(block) => Ok(()),
        _ => Err(Error::NotAuthenticated { block }),
    }
}
