//! Unfolded picture of a sticker cube.

use std::fmt::{self, Display};

use cube_convert::{Color, StickerCube};
use owo_colors::OwoColorize;

use crate::config::Config;

/// Prints the up face above the left, front, right and back faces, and the
/// down face below them.
pub struct Net<'a> {
    stickers: &'a StickerCube,
    config: &'a Config,
}

impl<'a> Net<'a> {
    pub fn new(stickers: &'a StickerCube, config: &'a Config) -> Self {
        Net { stickers, config }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, face: Color, row: usize) -> fmt::Result {
        for &color in &self.stickers.face(face)[row * 3..row * 3 + 3] {
            let letter = self.config.letters.get(color);
            if self.config.color {
                let (r, g, b) = rgb(color);
                write!(f, "{}", letter.black().on_truecolor(r, g, b))?;
            } else {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 213, 0),
        Color::Green => (0, 155, 72),
        Color::Blue => (0, 70, 173),
        Color::Red => (183, 18, 52),
        Color::Orange => (255, 88, 0),
    }
}

impl Display for Net<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            f.write_str("    ")?;
            self.write_row(f, Color::White, row)?;
            writeln!(f)?;
        }
        for row in 0..3 {
            for (i, face) in [Color::Orange, Color::Green, Color::Red, Color::Blue]
                .into_iter()
                .enumerate()
            {
                if i > 0 {
                    f.write_str(" ")?;
                }
                self.write_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..3 {
            f.write_str("    ")?;
            self.write_row(f, Color::Yellow, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
