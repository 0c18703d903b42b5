use lib_pgx::archive::TilesetHeader;
use lib_pgx::sprite::planes;

/// One glyph per palette index; transparent pixels reuse index 0's.
const GLYPHS: [&str; 16] = [
    "⚫", "🔵", "🟢", "💧", "🔴", "🟣", "🟠", "⚪", "⬛", "🟦", "🟩", "🐬", "🟥", "🟪", "🟨", "⬜",
];

/// Renders a sprite as rows of emoji, one line per pixel row of the sprite.
pub fn emoji_rows(header: &TilesetHeader, sprite: &[u8]) -> String {
    let width = header.plane_width_bytes as usize;
    let mut out = String::new();

    if width == 0 {
        return out;
    }

    let quintets: Vec<_> = planes::quintets(sprite).collect();
    for row in quintets.chunks(width) {
        for quintet in row {
            for index in quintet.indices() {
                out.push_str(GLYPHS[index.unwrap_or(0) as usize]);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_rows() {
        let header = TilesetHeader {
            sprite_count: 1,
            plane_width_bytes: 1,
            plane_height_pixels: 2,
        };
        let sprite = [0xF0, 0xFF, 0, 0, 0, 0xFF, 0xFF, 0, 0, 0xFF];
        let rows = emoji_rows(&header, &sprite);
        let lines: Vec<&str> = rows.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "🔵🔵🔵🔵⚫⚫⚫⚫");
        assert_eq!(lines[1], "🟦🟦🟦🟦🟦🟦🟦🟦");
    }
}
