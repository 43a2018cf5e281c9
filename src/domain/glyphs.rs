//! Digit pixel masks
//!
//! Every digit is a 4 x 7 matrix of dots imitating a seven-segment display.
//! A lit cell shows a static dot; a cell that goes dark on a value change is
//! released into the particle pool.

use serde::Deserialize;

use super::constants::{MATRIX_HEIGHT, MATRIX_WIDTH};

/// Fixed-size on/off matrix for one digit, `rows[y][x]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelMask {
    rows: [[bool; MATRIX_WIDTH]; MATRIX_HEIGHT],
}

impl PixelMask {
    /// Build a mask from 0/1 rows, checking the dimensions and values.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, String> {
        if rows.len() != MATRIX_HEIGHT {
            return Err(format!(
                "pixel mask needs {} rows, got {}",
                MATRIX_HEIGHT,
                rows.len()
            ));
        }
        let mut out = [[false; MATRIX_WIDTH]; MATRIX_HEIGHT];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != MATRIX_WIDTH {
                return Err(format!(
                    "pixel mask row {} needs {} cells, got {}",
                    y,
                    MATRIX_WIDTH,
                    row.len()
                ));
            }
            for (x, &cell) in row.iter().enumerate() {
                out[y][x] = match cell {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(format!(
                            "pixel mask cell ({}, {}) must be 0 or 1, got {}",
                            x, y, other
                        ))
                    }
                };
            }
        }
        Ok(Self { rows: out })
    }

    const fn from_table(table: &[[u8; MATRIX_WIDTH]; MATRIX_HEIGHT]) -> Self {
        let mut rows = [[false; MATRIX_WIDTH]; MATRIX_HEIGHT];
        let mut y = 0;
        while y < MATRIX_HEIGHT {
            let mut x = 0;
            while x < MATRIX_WIDTH {
                rows[y][x] = table[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self { rows }
    }

    #[inline]
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    pub fn lit_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&on| on).count()
    }
}

const DIGIT_TABLE: [[[u8; MATRIX_WIDTH]; MATRIX_HEIGHT]; 10] = [
    // 0
    [[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]],
    // 1
    [[0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1]],
    // 2
    [[1, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [1, 1, 1, 1], [1, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 1]],
    // 3
    [[1, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [1, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [1, 1, 1, 1]],
    // 4
    [[1, 0, 0, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1]],
    // 5
    [[1, 1, 1, 1], [1, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [1, 1, 1, 1]],
    // 6
    [[1, 1, 1, 1], [1, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]],
    // 7
    [[1, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 1]],
    // 8
    [[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]],
    // 9
    [[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 1], [1, 1, 1, 1]],
];

const STANDARD_MASKS: [PixelMask; 10] = {
    let mut masks = [PixelMask { rows: [[false; MATRIX_WIDTH]; MATRIX_HEIGHT] }; 10];
    let mut d = 0;
    while d < 10 {
        masks[d] = PixelMask::from_table(&DIGIT_TABLE[d]);
        d += 1;
    }
    masks
};

/// Ten masks, indexed by digit value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    masks: [PixelMask; 10],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GlyphBundle {
    Bare(Vec<Vec<Vec<u8>>>),
    Wrapped { digits: Vec<Vec<Vec<u8>>> },
}

impl GlyphSet {
    pub fn standard() -> Self {
        Self { masks: STANDARD_MASKS }
    }

    /// Load ten masks from JSON: either `[[[0,1,..],..], ..]` or `{ "digits": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let bundle: GlyphBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let digits = match bundle {
            GlyphBundle::Bare(d) => d,
            GlyphBundle::Wrapped { digits } => digits,
        };
        if digits.len() != 10 {
            return Err(format!("glyph set needs 10 digits, got {}", digits.len()));
        }
        let mut masks = STANDARD_MASKS;
        for (d, rows) in digits.iter().enumerate() {
            masks[d] = PixelMask::from_rows(rows).map_err(|e| format!("digit {}: {}", d, e))?;
        }
        log::debug!("loaded custom glyph set");
        Ok(Self { masks })
    }

    /// Mask for `digit`; `None` when the value is not a single decimal digit.
    pub fn mask(&self, digit: u8) -> Option<&PixelMask> {
        self.masks.get(digit as usize)
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::standard()
    }
}
