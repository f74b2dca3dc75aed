// rc522/src/card/selection.rs

//! ISO/IEC 14443-3 type A activation: REQA/WUPA, anticollision and select
//! over cascade levels 1 and 2, and HLTA.

use std::time::Duration;

use log::{debug, trace};

use crate::card::{Card, SelectionState};
use crate::constants::{ANTICOLLISION_BITS, ATQA_BITS, SAK_BITS, VALUES_AFTER_COLL};
use crate::device::{Device, Initialized, Register};
use crate::error::ErrorKind;
use crate::protocol::checksum::bcc;
use crate::protocol::commands::{self, CascadeLevel, PiccCommand};
use crate::types::{Atqa, Sak, Uid};
use crate::{Error, Result};

/// Bits sent in the short REQA/WUPA frame.
const SHORT_FRAME_BITS: u8 = 7;

pub fn request(device: &mut Device<Initialized>) -> Result<Atqa> {
    send_request(device, PiccCommand::ReqA)
}

pub fn wake_up(device: &mut Device<Initialized>) -> Result<Atqa> {
    send_request(device, PiccCommand::WupA)
}

fn send_request(device: &mut Device<Initialized>, cmd: PiccCommand) -> Result<Atqa> {
    device.card.reset();
    let frame = commands::request_frame(cmd);
    let resp = device.transceive_bits(&frame, SHORT_FRAME_BITS)?;
    let data = resp.expect_bits(ATQA_BITS)?;
    let atqa = Atqa([data[0], data[1]]);
    device.card.state = SelectionState::Requested;
    trace!("{:?} answered with ATQA {:#06x}", cmd, atqa.as_u16());
    Ok(atqa)
}

pub fn is_card_present(device: &mut Device<Initialized>) -> Result<bool> {
    match request(device) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::HardwareIo => Err(e),
        Err(e) => {
            trace!("no card: {}", e);
            Ok(false)
        }
    }
}

/// Anticollision at one cascade level: four UID bytes checked against BCC.
pub(crate) fn anticollision_level(
    device: &mut Device<Initialized>,
    level: CascadeLevel,
) -> Result<[u8; 4]> {
    device.clear_bits(Register::Coll, VALUES_AFTER_COLL)?;
    let resp = device.transceive(&commands::anticollision_frame(level))?;
    let data = resp.expect_bits(ANTICOLLISION_BITS)?;
    let part = [data[0], data[1], data[2], data[3]];
    let expected = bcc(&part);
    if data[4] != expected {
        debug!(
            "anticollision {:?}: BCC {:#04x} does not match {:#04x}",
            level, data[4], expected
        );
        return Err(Error::Collision {
            expected,
            actual: data[4],
        });
    }
    Ok(part)
}

pub fn anticollision(device: &mut Device<Initialized>) -> Result<Uid> {
    let uid = Uid::from_single(anticollision_level(device, CascadeLevel::One)?);
    device.card.drop_auth();
    device.card.uid = Some(uid);
    device.card.sak = None;
    device.card.state = SelectionState::Requested;
    debug!("anticollision: uid {}", uid);
    Ok(uid)
}

pub fn detect_uid(device: &mut Device<Initialized>) -> Result<Option<Uid>> {
    if !is_card_present(device)? {
        return Ok(None);
    }
    match anticollision(device) {
        Ok(uid) => Ok(Some(uid)),
        Err(Error::Timeout) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn wait_for_uid(
    device: &mut Device<Initialized>,
    interval: Duration,
    attempts: usize,
) -> Result<Option<Uid>> {
    for attempt in 0..attempts {
        if attempt > 0 {
            std::thread::sleep(interval);
        }
        match detect_uid(device) {
            Ok(Some(uid)) => return Ok(Some(uid)),
            Ok(None) => {}
            Err(e) if e.is_retryable() => trace!("attempt {}: {}", attempt + 1, e),
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

/// SELECT one cascade level and return its SAK.
pub(crate) fn select_level(
    device: &mut Device<Initialized>,
    level: CascadeLevel,
    part: &[u8; 4],
) -> Result<Sak> {
    let mut frame = commands::select_frame(level, part);
    device.append_crc(&mut frame)?;
    let resp = device.transceive(&frame)?;
    let data = resp.expect_bits(SAK_BITS)?;
    Ok(Sak(data[0]))
}

pub fn select(device: &mut Device<Initialized>, uid: &Uid) -> Result<Sak> {
    let levels = [CascadeLevel::One, CascadeLevel::Two];
    let mut sak = Sak(0);
    for (part, level) in uid.cascade_parts().iter().zip(levels) {
        sak = match select_level(device, level, part) {
            Ok(sak) => sak,
            Err(e) => {
                deselect(device);
                return Err(e);
            }
        };
    }
    if !sak.is_uid_complete() {
        deselect(device);
        return Err(Error::MalformedResponse(format!(
            "SAK {:#04x} asks for another cascade level after {}",
            sak.0, uid
        )));
    }
    mark_selected(device, *uid, sak);
    Ok(sak)
}

pub fn select_tag(device: &mut Device<Initialized>, uid: &Uid) -> Result<bool> {
    match select(device, uid) {
        Ok(_) => Ok(true),
        Err(e) if e.is_retryable() => {
            debug!("select {} failed: {}", uid, e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

pub fn activate(device: &mut Device<Initialized>) -> Result<Card> {
    let atqa = request(device)?;
    activate_levels(device, atqa).inspect_err(|_| deselect(device))
}

fn activate_levels(device: &mut Device<Initialized>, atqa: Atqa) -> Result<Card> {
    let cl1 = anticollision_level(device, CascadeLevel::One)?;

    if cl1[0] != PiccCommand::CascadeTag.code() {
        let uid = Uid::from_single(cl1);
        device.card.uid = Some(uid);
        let sak = select_level(device, CascadeLevel::One, &cl1)?;
        if !sak.is_uid_complete() {
            return Err(Error::MalformedResponse(format!(
                "SAK {:#04x} announces a cascade level after a single-size UID",
                sak.0
            )));
        }
        mark_selected(device, uid, sak);
        return Ok(Card::new(uid, atqa, sak));
    }

    let sak1 = select_level(device, CascadeLevel::One, &cl1)?;
    if sak1.is_uid_complete() {
        return Err(Error::MalformedResponse(
            "cascade tag received but SAK reports a complete UID".into(),
        ));
    }
    let cl2 = anticollision_level(device, CascadeLevel::Two)?;
    let uid = Uid::from_double([cl1[1], cl1[2], cl1[3], cl2[0], cl2[1], cl2[2], cl2[3]]);
    device.card.uid = Some(uid);
    let sak = select_level(device, CascadeLevel::Two, &cl2)?;
    mark_selected(device, uid, sak);
    Ok(Card::new(uid, atqa, sak))
}

fn deselect(device: &mut Device<Initialized>) {
    device.card.drop_auth();
    device.card.sak = None;
    device.card.state = SelectionState::Idle;
}

fn mark_selected(device: &mut Device<Initialized>, uid: Uid, sak: Sak) {
    device.card.drop_auth();
    device.card.uid = Some(uid);
    device.card.sak = Some(sak);
    device.card.state = SelectionState::Selected;
    debug!("selected {} ({})", uid, sak.card_type());
}

pub fn halt(device: &mut Device<Initialized>) -> Result<()> {
    let mut frame = commands::halt_frame();
    device.append_crc(&mut frame)?;
    let result = device.transceive(&frame);
    device.card.reset();
    match result {
        Err(Error::Timeout) => Ok(()),
        Ok(resp) => Err(Error::MalformedResponse(format!(
            "card answered HLTA with {} bit(s)",
            resp.bit_len()
        ))),
        Err(e) => Err(e),
    }
}
