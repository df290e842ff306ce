//! The facelet-level representation of a cube and its text notation.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::{
    Color,
    geometry::{CENTER_STICKERS, FACE_SIZE, STICKER_COUNT},
};

/// The 54 sticker colors of a cube. See [`crate::geometry`] for the position
/// numbering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StickerCube(pub [Color; STICKER_COUNT]);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StickerParseError {
    #[error("Expected {expected} stickers but got {actual}", expected = STICKER_COUNT)]
    WrongStickerCount { actual: usize },
    #[error("The center sticker {0:?} appears on more than one face")]
    DuplicateCenter(char),
    #[error("The sticker {0:?} does not match any center sticker")]
    UnknownSticker(char),
    #[error("Invalid color code {0}, expected a value between 1 and 6")]
    InvalidColorCode(u8),
}

impl StickerCube {
    /// The cube with every face a single color.
    pub const SOLVED: StickerCube = {
        let mut stickers = [Color::White; STICKER_COUNT];
        let mut i = 0;
        while i < STICKER_COUNT {
            stickers[i] = Color::ALL[i / FACE_SIZE];
            i += 1;
        }
        StickerCube(stickers)
    };

    /// Build a sticker cube from raw color codes.
    pub fn from_codes(codes: &[u8]) -> Result<Self, StickerParseError> {
        if codes.len() != STICKER_COUNT {
            return Err(StickerParseError::WrongStickerCount {
                actual: codes.len(),
            });
        }

        let mut stickers = [Color::White; STICKER_COUNT];
        for (sticker, &code) in stickers.iter_mut().zip(codes) {
            *sticker = Color::from_code(code).ok_or(StickerParseError::InvalidColorCode(code))?;
        }
        Ok(StickerCube(stickers))
    }

    /// The stickers of one face, in row-major order.
    #[must_use]
    pub fn face(&self, color: Color) -> &[Color] {
        let start = (color.code() as usize - 1) * FACE_SIZE;
        &self.0[start..start + FACE_SIZE]
    }
}

impl Default for StickerCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Index<usize> for StickerCube {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for StickerCube {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Parses six groups of nine stickers, one per face, in up, down, front,
/// back, right, left order. Any character may stand for a color; the center
/// sticker of each face decides which color a character means. Whitespace is
/// ignored.
impl FromStr for StickerCube {
    type Err = StickerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect_vec();
        if chars.len() != STICKER_COUNT {
            return Err(StickerParseError::WrongStickerCount {
                actual: chars.len(),
            });
        }

        let centers = CENTER_STICKERS.map(|position| chars[position]);
        if let Some(&duplicate) = centers.iter().duplicates().next() {
            return Err(StickerParseError::DuplicateCenter(duplicate));
        }

        let mut stickers = [Color::White; STICKER_COUNT];
        for (sticker, c) in stickers.iter_mut().zip(chars) {
            let face = centers
                .iter()
                .position(|&center| center == c)
                .ok_or(StickerParseError::UnknownSticker(c))?;
            *sticker = Color::ALL[face];
        }
        Ok(StickerCube(stickers))
    }
}

/// Prints the notation accepted by [`StickerCube::from_str`], using the
/// letters of [`Color::letter`].
impl Display for StickerCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces = self
            .0
            .chunks_exact(FACE_SIZE)
            .map(|face| face.iter().map(|color| color.letter()).collect::<String>())
            .join(" ");
        f.write_str(&faces)
    }
}
