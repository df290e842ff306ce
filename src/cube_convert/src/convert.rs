//! Conversion between [`CubieCube`] and [`StickerCube`].

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    Color, Corner, CubieCube, Edge, StickerCube,
    geometry::{CORNER_COLORS, CORNER_STICKERS, EDGE_COLORS, EDGE_STICKERS, corner_mirrored},
};

/// A slot whose stickers do not show the colors of any piece.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unrecognized corner: {}", join_colors(.0))]
    UnrecognizedCorner([Color; 3]),
    #[error("Unrecognized edge: {}", join_colors(.0))]
    UnrecognizedEdge([Color; 2]),
}

fn join_colors(colors: &[Color]) -> String {
    colors.iter().join(",")
}

/// Whether `a` and `b` hold the same colors, ignoring order.
fn sets_equal(a: &[Color], b: &[Color]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
}

fn position_of(stickers: &[Color], color: Color) -> Option<usize> {
    stickers.iter().position(|&c| c == color)
}

/// Identify the corner piece showing `stickers`, read in slot order, and its
/// orientation.
///
/// The orientation is found from where the white or yellow sticker sits.
/// Slot index 1 (up/down face) is orientation 0, index 2 (front/back face) is
/// 1 and index 0 (right/left face) is 2.
#[allow(clippy::cast_possible_truncation)]
pub fn identify_corner(stickers: [Color; 3]) -> Result<Corner, ConversionError> {
    let unrecognized = ConversionError::UnrecognizedCorner(stickers);

    let piece = CORNER_COLORS
        .iter()
        .position(|colors| sets_equal(&stickers, colors))
        .ok_or(unrecognized)?;

    // Every corner carries exactly one of these, so a recognized corner
    // always has an index.
    let index = position_of(&stickers, Color::White)
        .or_else(|| position_of(&stickers, Color::Yellow))
        .ok_or(unrecognized)?;

    Ok(Corner {
        piece: piece as u8,
        orientation: ((index + 2) % 3) as u8,
    })
}

/// Identify the edge piece showing `stickers`, read in slot order, and
/// whether it is flipped.
#[allow(clippy::cast_possible_truncation)]
pub fn identify_edge(stickers: [Color; 2]) -> Result<Edge, ConversionError> {
    let piece = EDGE_COLORS
        .iter()
        .position(|colors| sets_equal(&stickers, colors))
        .ok_or(ConversionError::UnrecognizedEdge(stickers))?;

    // An up/down color is bad in the second position. Without one, the
    // front/back color is bad in the second position.
    let [first, second] = stickers;
    let flip = second.is_top_bottom() || (second.is_front_back() && !first.is_top_bottom());

    Ok(Edge {
        piece: piece as u8,
        flip,
    })
}

impl CubieCube {
    /// Paint the pieces onto a sticker cube.
    ///
    /// # Panics
    ///
    /// If a piece identity or orientation is out of range.
    #[must_use]
    pub fn to_sticker_cube(&self) -> StickerCube {
        let mut stickers = StickerCube::SOLVED;

        for (edge, positions) in self.edges.iter().zip(EDGE_STICKERS) {
            let mut colors = EDGE_COLORS[edge.piece as usize];
            if edge.flip {
                colors.swap(0, 1);
            }
            for (position, color) in positions.into_iter().zip(colors) {
                stickers[position] = color;
            }
        }

        for (slot, (corner, positions)) in self.corners.iter().zip(CORNER_STICKERS).enumerate() {
            let piece = corner.piece as usize;
            let mut colors = CORNER_COLORS[piece];
            if corner_mirrored(piece, slot) {
                colors.swap(0, 2);
            }
            // The up/down color starts at index 1
            assert!(corner.orientation < 3, "corner orientation out of range");
            colors.rotate_right(corner.orientation as usize);
            for (position, color) in positions.into_iter().zip(colors) {
                stickers[position] = color;
            }
        }

        stickers
    }
}

impl StickerCube {
    /// Recover the pieces from the stickers.
    ///
    /// Corners are read before edges and the first slot that does not show a
    /// known piece fails the whole conversion.
    pub fn to_cubie_cube(&self) -> Result<CubieCube, ConversionError> {
        let mut cube = CubieCube::SOLVED;

        for (slot, positions) in CORNER_STICKERS.iter().enumerate() {
            let stickers = positions.map(|position| self[position]);
            let corner = identify_corner(stickers)
                .inspect_err(|err| debug!("Rejected corner slot {slot}: {err}"))?;
            trace!("Corner slot {slot} holds {corner:?}");
            cube.corners[slot] = corner;
        }

        for (slot, positions) in EDGE_STICKERS.iter().enumerate() {
            let stickers = positions.map(|position| self[position]);
            let edge = identify_edge(stickers)
                .inspect_err(|err| debug!("Rejected edge slot {slot}: {err}"))?;
            trace!("Edge slot {slot} holds {edge:?}");
            cube.edges[slot] = edge;
        }

        Ok(cube)
    }
}

impl From<&CubieCube> for StickerCube {
    fn from(cube: &CubieCube) -> Self {
        cube.to_sticker_cube()
    }
}

impl TryFrom<&StickerCube> for CubieCube {
    type Error = ConversionError;

    fn try_from(cube: &StickerCube) -> Result<Self, Self::Error> {
        cube.to_cubie_cube()
    }
}
