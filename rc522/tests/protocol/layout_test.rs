use rc522::protocol::layout::{
    access_group, blocks_in_sector, first_block, is_trailer, SECTOR_COUNT_4K,
};
use rc522::protocol::{block_address, sector_of, trailer_block};

#[test]
fn classic_1k_trailers() -> anyhow::Result<()> {
    let trailers: Vec<u8> = (0..16).map(trailer_block).collect::<Result<_, _>>()?;
    assert_eq!(trailers[0], 3);
    assert_eq!(trailers[15], 63);
    assert!(trailers.iter().all(|&t| is_trailer(t)));
    Ok(())
}

#[test]
fn classic_4k_large_sectors() -> anyhow::Result<()> {
    assert_eq!(blocks_in_sector(31)?, 4);
    assert_eq!(blocks_in_sector(32)?, 16);
    assert_eq!(first_block(32)?, 128);
    assert_eq!(trailer_block(32)?, 143);
    assert_eq!(trailer_block(SECTOR_COUNT_4K - 1)?, 255);
    assert_eq!(block_address(33, 15)?, 159);
    assert_eq!(sector_of(255), 39);
    Ok(())
}

#[test]
fn out_of_range_addresses_rejected() {
    assert!(blocks_in_sector(SECTOR_COUNT_4K).is_err());
    assert!(block_address(0, 4).is_err());
    assert!(block_address(32, 16).is_err());
}

#[test]
fn access_groups_of_large_sector() {
    assert_eq!(access_group(128), 0);
    assert_eq!(access_group(132), 0);
    assert_eq!(access_group(133), 1);
    assert_eq!(access_group(142), 2);
    assert_eq!(access_group(143), 3);
    assert_eq!(access_group(6), 2);
}
