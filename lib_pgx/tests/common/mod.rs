#![allow(dead_code)]

/// Builds one record: header followed by `sprites`, each already laid out as
/// plane quintets.
pub fn record(width_bytes: u8, height_pixels: u8, sprites: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![sprites.len() as u8, width_bytes, height_pixels];
    for sprite in sprites {
        assert_eq!(
            sprite.len(),
            width_bytes as usize * height_pixels as usize * 5
        );
        data.extend_from_slice(sprite);
    }
    data
}

/// A 16x16 sprite (2 bytes wide) filled with one opaque palette index.
pub fn solid_sprite(index: u8) -> Vec<u8> {
    let fill = |bit: u8| if index & bit != 0 { 0xFF } else { 0x00 };
    [0xFF, fill(0b0001), fill(0b0010), fill(0b0100), fill(0b1000)].repeat(2 * 16)
}

/// A tileset of `count` 16x16 sprites, sprite `n` filled with index `n % 16`.
pub fn tileset(count: u8) -> Vec<u8> {
    let sprites: Vec<Vec<u8>> = (0..count).map(|n| solid_sprite(n % 16)).collect();
    record(2, 16, &sprites)
}

/// The single-record archive from the format notes: one row of eight pixels.
pub const ONE_ROW: [u8; 8] = [1, 1, 1, 0xFF, 0xAA, 0x55, 0x00, 0x0F];
