//! The piece-level representation of a cube.

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::geometry::{CORNER_COUNT, EDGE_COUNT};

/// The corner piece occupying a corner slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Corner {
    /// Which physical corner this is, `0..8`.
    pub piece: u8,
    /// The axis the piece's up/down colored sticker faces: 0 for up/down, 1
    /// for front/back, 2 for right/left.
    pub orientation: u8,
}

/// The edge piece occupying an edge slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Which physical edge this is, `0..12`.
    pub piece: u8,
    pub flip: bool,
}

/// A cube described by which piece sits in every slot and how it is twisted.
///
/// Nothing checks that the pieces form a permutation or that the state is
/// reachable by turning the faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubieCube {
    pub corners: [Corner; CORNER_COUNT],
    pub edges: [Edge; EDGE_COUNT],
}

impl CubieCube {
    #[allow(clippy::cast_possible_truncation)]
    pub const SOLVED: CubieCube = {
        let mut corners = [Corner {
            piece: 0,
            orientation: 0,
        }; CORNER_COUNT];
        let mut edges = [Edge {
            piece: 0,
            flip: false,
        }; EDGE_COUNT];

        let mut i = 0;
        while i < EDGE_COUNT {
            if i < CORNER_COUNT {
                corners[i].piece = i as u8;
            }
            edges[i].piece = i as u8;
            i += 1;
        }

        CubieCube { corners, edges }
    };

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "corners: {}",
            self.corners
                .iter()
                .map(|corner| format!("{}:{}", corner.piece, corner.orientation))
                .join(" ")
        )?;
        write!(
            f,
            "edges:   {}",
            self.edges
                .iter()
                .map(|edge| format!("{}:{}", edge.piece, u8::from(edge.flip)))
                .join(" ")
        )
    }
}
