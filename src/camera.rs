use crate::board::Board;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Renders a board as Unicode braille, 2x4 cells per character.
#[derive(Debug, Default)]
pub struct Camera {
    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the whole board, top row first. Each line of the frame ends with a newline.
    pub fn render(&mut self, board: &Board) -> &str {
        let (w, h) = (board.width(), board.height());

        // Let `w` and `h` refer to width and height of the board. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our
        // framebuffer (that is, not accounting for the trailing newlines).
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        self.cp.clear();
        self.cp.resize(bw * bh, BRAILLE_EMPTY);

        for (x, y) in board.alive_cells() {
            let (x, y) = (x as usize, y as usize);

            self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
        }

        // Each braille character is 3 bytes in UTF-8, plus one newline per line.
        self.fb.clear();
        self.fb.reserve(3 * (bw * bh) + bh);

        for row in self.cp.chunks(bw) {
            for &c in row {
                self.fb.push(char::from_u32(c).unwrap_or(' '));
            }

            self.fb.push('\n');
        }

        &self.fb
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
