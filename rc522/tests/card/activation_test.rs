#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rc522::card::SelectionState;
use rc522::transport::mock::CardReply;
use rc522::{Atqa, CardType, Error, Sak};

#[test]
fn full_activation_of_single_size_uid() -> anyhow::Result<()> {
    common::init_logging();
    let (mut device, mock) = common::initialized_mock_device()?;
    for reply in common::activation_replies(&fixtures::sample_uid(), 0x08) {
        mock.push_reply(reply);
    }

    let card = device.activate()?;
    assert_eq!(card.uid(), &fixtures::sample_uid());
    assert_eq!(card.card_type(), CardType::Mifare1K);
    assert_eq!(device.session().state(), SelectionState::Selected);
    assert_eq!(device.session().sak(), Some(Sak(0x08)));
    Ok(())
}

#[test]
fn full_activation_of_double_size_uid() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    for reply in common::activation_replies(&fixtures::double_uid(), 0x18) {
        mock.push_reply(reply);
    }
    let card = device.activate()?;
    assert_eq!(card.uid(), &fixtures::double_uid());
    assert_eq!(card.card_type(), CardType::Mifare4K);
    assert_eq!(card.uid().to_hex(), "04123456789ABC");
    Ok(())
}

#[test]
fn atqa_must_be_sixteen_bits() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;

    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    assert_eq!(device.request()?, Atqa([0x04, 0x00]));

    mock.push_reply(CardReply::bits(&[0x04, 0x00], 7));
    assert!(!device.is_card_present()?);
    Ok(())
}

#[test]
fn wake_up_uses_wupa() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    device.wake_up()?;
    assert_eq!(mock.sent_frames(), vec![vec![0x52]]);
    Ok(())
}

#[test]
fn bcc_mismatch_is_a_collision_and_keeps_old_uid() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.push_reply(CardReply::bytes(&[0xDE, 0xAD, 0xBE, 0xEF, 0x22]));
    device.anticollision()?;

    mock.push_reply(CardReply::bytes(&[0x11, 0x22, 0x33, 0x44, 0x45]));
    let err = device.anticollision().unwrap_err();
    assert!(matches!(err, Error::Collision { .. }));
    assert!(err.is_retryable());
    assert_eq!(device.session().uid(), Some(&fixtures::sample_uid()));
    Ok(())
}

#[test]
fn detect_uid_runs_request_then_anticollision() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    mock.push_reply(CardReply::bytes(&[0xDE, 0xAD, 0xBE, 0xEF, 0x22]));
    assert_eq!(device.detect_uid()?, Some(fixtures::sample_uid()));
    assert_eq!(mock.sent_frames(), vec![vec![0x26], vec![0x93, 0x20]]);

    assert_eq!(device.detect_uid()?, None);
    Ok(())
}

#[test]
fn halted_card_needs_wupa() -> anyhow::Result<()> {
    let (mut device, mock) = common::selected_mock_device(&fixtures::sample_uid_bytes())?;
    device.halt()?;
    assert_eq!(device.session().state(), SelectionState::Idle);

    // halted cards ignore REQA
    assert!(!device.is_card_present()?);
    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    assert!(device.wake_up().is_ok());
    Ok(())
}

#[test]
fn uid_survives_antenna_off_and_reset() -> anyhow::Result<()> {
    let (mut device, _mock) = common::authenticated_mock_device(4)?;

    device.set_antenna_enabled(false)?;
    assert_eq!(device.session().state(), SelectionState::Idle);
    assert!(!device.session().is_authenticated());
    assert_eq!(device.session().uid(), Some(&fixtures::sample_uid()));

    device.soft_reset()?;
    assert_eq!(device.session().uid(), Some(&fixtures::sample_uid()));
    Ok(())
}

#[test]
fn new_anticollision_leaves_card_requested() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    mock.push_reply(CardReply::bytes(&[0xDE, 0xAD, 0xBE, 0xEF, 0x22]));
    device.anticollision()?;
    assert_eq!(device.session().state(), SelectionState::Requested);
    assert!(!device.session().is_authenticated());
    Ok(())
}

#[test]
fn failed_select_during_activation_deselects() -> anyhow::Result<()> {
    let (mut device, mock) = common::initialized_mock_device()?;
    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    mock.push_reply(CardReply::bytes(&[0xDE, 0xAD, 0xBE, 0xEF, 0x22]));
    mock.push_reply(CardReply::Silent);

    let err = device.activate().unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert_eq!(device.session().state(), SelectionState::Idle);
    assert_eq!(device.session().sak(), None);
    Ok(())
}
