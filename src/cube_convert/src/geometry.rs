//! Fixed correspondence between piece slots, sticker positions and the
//! colors each piece shows on a solved cube.
//!
//! Sticker positions number the faces up, down, front, back, right, left, 9
//! stickers each in row-major order. The up face is read with the front face
//! below it, the down face with the front face above it, and the four side
//! faces with the up face above them.
//!
//! Corner slots are numbered so that bit 0 is set on the right layer, bit 1
//! on the up layer and bit 2 on the front layer. A corner's stickers are
//! listed right/left first, then up/down, then front/back. An edge's first
//! sticker lies on the up or down face when the edge touches one, and on the
//! front or back face otherwise. Piece colors follow the same order as the
//! positions of the slot with the same index.

use crate::Color::{
    self, Blue as B, Green as G, Orange as O, Red as R, White as W, Yellow as Y,
};

pub const STICKER_COUNT: usize = 54;
pub const FACE_SIZE: usize = 9;
pub const CORNER_COUNT: usize = 8;
pub const EDGE_COUNT: usize = 12;

/// The sticker positions of each corner slot.
pub const CORNER_STICKERS: [[usize; 3]; CORNER_COUNT] = [
    [51, 15, 35],
    [44, 17, 33],
    [45, 0, 29],
    [38, 2, 27],
    [53, 9, 24],
    [42, 11, 26],
    [47, 6, 18],
    [36, 8, 20],
];

/// The colors of each corner piece, in the order of [`CORNER_STICKERS`].
pub const CORNER_COLORS: [[Color; 3]; CORNER_COUNT] = [
    [O, Y, B],
    [R, Y, B],
    [O, W, B],
    [R, W, B],
    [O, Y, G],
    [R, Y, G],
    [O, W, G],
    [R, W, G],
];

/// The sticker positions of each edge slot.
pub const EDGE_STICKERS: [[usize; 2]; EDGE_COUNT] = [
    [7, 19],
    [23, 39],
    [10, 25],
    [21, 50],
    [3, 46],
    [5, 37],
    [1, 28],
    [30, 41],
    [16, 34],
    [32, 48],
    [12, 52],
    [14, 43],
];

/// The colors of each edge piece, in the order of [`EDGE_STICKERS`].
pub const EDGE_COLORS: [[Color; 2]; EDGE_COUNT] = [
    [W, G],
    [G, R],
    [Y, G],
    [G, O],
    [W, O],
    [W, R],
    [W, B],
    [B, R],
    [Y, B],
    [B, O],
    [Y, O],
    [Y, R],
];

/// The center sticker of each face. Centers never move.
pub const CENTER_STICKERS: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// Whether a corner slot's stickers, in table order, run counter-clockwise
/// around the corner when viewed from outside the cube.
///
/// Moving a piece between slots of different chirality mirrors the order of
/// its stickers. Down, back and left are the odd-numbered faces; a slot is
/// counter-clockwise when it touches an even number of them.
pub const CORNER_CHIRALITY: [bool; CORNER_COUNT] = {
    let mut out = [false; CORNER_COUNT];

    let mut slot = 0;
    while slot < CORNER_COUNT {
        let mut odd_faces = 0;
        let mut i = 0;
        while i < 3 {
            if (CORNER_STICKERS[slot][i] / FACE_SIZE) % 2 == 1 {
                odd_faces += 1;
            }
            i += 1;
        }
        out[slot] = odd_faces % 2 == 0;
        slot += 1;
    }

    out
};

/// Whether a corner piece placed in `slot` shows its outer two colors in the
/// opposite order to the one in [`CORNER_COLORS`].
#[must_use]
pub fn corner_mirrored(piece: usize, slot: usize) -> bool {
    CORNER_CHIRALITY[piece] != CORNER_CHIRALITY[slot]
}
