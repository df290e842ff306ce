#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Conversion between the sticker and cubie representations of a 3x3x3 cube.
//!
//! A [`StickerCube`] is the 54 facelet colors as they appear on the surface.
//! A [`CubieCube`] is the 8 corners and 12 edges, each recorded as the piece
//! sitting in a slot together with its twist. [`CubieCube::to_sticker_cube`]
//! and [`StickerCube::to_cubie_cube`] convert between the two and are exact
//! inverses of each other on valid input.

pub mod color;
pub mod convert;
pub mod cubie;
pub mod geometry;
pub mod moves;
pub mod sticker;

pub use color::Color;
pub use convert::ConversionError;
pub use cubie::{Corner, CubieCube, Edge};
pub use moves::{Face, Move, MoveParseError, parse_moves};
pub use sticker::{StickerCube, StickerParseError};
