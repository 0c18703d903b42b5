use log::info;

pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Index of the one entry that does not follow the additive rule.
pub const SPECIAL_INDEX: u8 = 0b0110;

/// The 16-colour palette, indexed by `irgb` (intensity is the high bit).
///
/// Entries follow `170` per set colour bit plus `85` on every channel when
/// intensity is set, except `0110`, which is brown rather than dark yellow.
#[rustfmt::skip]
pub const PALETTE: [Rgba; 16] = [
    [  0,   0,   0, 255], // 0000
    [  0,   0, 170, 255], // 0001
    [  0, 170,   0, 255], // 0010
    [  0, 170, 170, 255], // 0011
    [170,   0,   0, 255], // 0100
    [170,   0, 170, 255], // 0101
    [170,  85,   0, 255], // 0110
    [170, 170, 170, 255], // 0111
    [ 85,  85,  85, 255], // 1000
    [ 85,  85, 255, 255], // 1001
    [ 85, 255,  85, 255], // 1010
    [ 85, 255, 255, 255], // 1011
    [255,  85,  85, 255], // 1100
    [255,  85, 255, 255], // 1101
    [255, 255,  85, 255], // 1110
    [255, 255, 255, 255], // 1111
];

/// Builds the palette index from the four colour bits.
pub fn palette_index(i: u8, r: u8, g: u8, b: u8) -> u8 {
    ((i & 1) << 3) | ((r & 1) << 2) | ((g & 1) << 1) | (b & 1)
}

/// Looks up a colour in the table. Only the low four bits of `index` are used.
pub fn color(index: u8) -> Rgba {
    PALETTE[(index & 0x0F) as usize]
}

/// Per-channel additive rule: `170` if the channel bit is set, plus `85` if
/// intensity is set.
///
/// This is not the reference colour for [`SPECIAL_INDEX`]; use [`color`] to
/// decode pixels.
pub fn additive_color(index: u8) -> Rgba {
    let intensity = if index & 0b1000 != 0 { 85 } else { 0 };
    let channel = |mask: u8| if index & mask != 0 { 170 + intensity } else { intensity };

    [channel(0b0100), channel(0b0010), channel(0b0001), 255]
}

/// Indices where the additive rule and the table disagree.
pub fn additive_discrepancies() -> Vec<u8> {
    (0..PALETTE.len() as u8)
        .filter(|&index| additive_color(index) != color(index))
        .collect()
}

/// Logs every index where the additive rule would produce a different colour.
pub fn report_discrepancies() {
    for index in additive_discrepancies() {
        info!(
            "Palette index {:04b}: table colour {:?} used instead of additive {:?}",
            index,
            color(index),
            additive_color(index)
        );
    }
}
