#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rc522::transport::mock::CardReply;
use rc522::{Error, ErrorKind, Key, KeyType};

#[test]
fn authentication_with_accepted_key() -> anyhow::Result<()> {
    let (mut device, mock) = common::selected_mock_device(&fixtures::sample_uid_bytes())?;
    mock.push_reply(CardReply::Auth { accepted: true });
    device.authenticate(KeyType::B, 7, &fixtures::sample_key())?;

    let session = device.session().auth().unwrap();
    assert_eq!(session.sector(), 1);
    assert_eq!(session.key_type, KeyType::B);

    let frame = &mock.sent_frames()[0];
    assert_eq!(frame[0], 0x61);
    assert_eq!(&frame[2..8], fixtures::sample_key().as_bytes());
    assert_eq!(&frame[8..], &fixtures::sample_uid_bytes());
    Ok(())
}

#[test]
fn crypto_bit_clear_is_a_failure() -> anyhow::Result<()> {
    let (mut device, mock) = common::selected_mock_device(&fixtures::sample_uid_bytes())?;
    mock.push_reply(CardReply::Auth { accepted: false });
    let err = device
        .authenticate(KeyType::A, 4, &Key::DEFAULT)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(!err.is_retryable());
    assert!(!device.session().is_authenticated());

    // block operations stay locked
    assert!(matches!(
        device.read_block(4),
        Err(Error::NotAuthenticated { block: 4 })
    ));
    Ok(())
}

#[test]
fn reselect_drops_authentication() -> anyhow::Result<()> {
    let (mut device, mock) = common::authenticated_mock_device(4)?;
    assert!(device.session().is_authenticated());

    mock.push_reply(CardReply::with_crc(&[0x08]));
    device.select(&fixtures::sample_uid())?;
    assert!(!device.session().is_authenticated());
    Ok(())
}

#[test]
fn stop_crypto_ends_session() -> anyhow::Result<()> {
    let (mut device, _mock) = common::authenticated_mock_device(4)?;
    device.stop_crypto()?;
    assert!(matches!(
        device.write_block_bytes(4, &[0u8; 16]),
        Err(Error::NotAuthenticated { .. })
    ));
    Ok(())
}

#[test]
fn unanswered_authentication_is_not_retryable() -> anyhow::Result<()> {
    let (mut device, mock) = common::selected_mock_device(&fixtures::sample_uid_bytes())?;
    mock.push_reply(CardReply::Silent);
    let err = device
        .authenticate(KeyType::A, 4, &Key::DEFAULT)
        .unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { block: 4 }));
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(!err.is_retryable());
    assert!(!device.session().is_authenticated());
    Ok(())
}
