//! Face turns applied directly to a [`CubieCube`].

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use itertools::Itertools;
use log::trace;
use thiserror::Error;

use crate::{
    CubieCube,
    geometry::{CORNER_COUNT, EDGE_COUNT},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    D,
    F,
    B,
    R,
    L,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::{B, D, F, L, R, U};
        let v = [U, D, F, B, R, L];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The corner orientation whose up/down sticker points along this face's
    /// axis.
    const fn axis_orientation(self) -> u8 {
        match self {
            Face::U | Face::D => 0,
            Face::F | Face::B => 1,
            Face::R | Face::L => 2,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::R => 'R',
            Face::L => 'L',
        }
    }
}

impl FromStr for Face {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "D" => Ok(Face::D),
            "F" => Ok(Face::F),
            "B" => Ok(Face::B),
            "R" => Ok(Face::R),
            "L" => Ok(Face::L),
            _ => Err(MoveParseError::UnknownFace(s.to_owned())),
        }
    }
}

/// A turn of one face by a number of clockwise quarter turns, as seen looking
/// at that face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    turns: u8,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move")]
    Empty,
    #[error("Unknown face {0:?}, expected one of U, D, F, B, R, L")]
    UnknownFace(String),
    #[error("Unknown move suffix {0:?}, expected nothing, 2 or '")]
    UnknownSuffix(String),
}

impl Move {
    /// # Panics
    ///
    /// If `turns` is not 1, 2 or 3.
    #[must_use]
    pub fn new(face: Face, turns: u8) -> Self {
        assert!((1..=3).contains(&turns), "a move turns 1, 2 or 3 quarters");
        Move { face, turns }
    }

    #[must_use]
    pub fn turns(self) -> u8 {
        self.turns
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Move {
            face: self.face,
            turns: 4 - self.turns,
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars.next().ok_or(MoveParseError::Empty)?;
        let face = face.to_string().parse::<Face>()?;
        let turns = match chars.as_str() {
            "" => 1,
            "2" | "2'" => 2,
            "'" => 3,
            suffix => return Err(MoveParseError::UnknownSuffix(suffix.to_owned())),
        };
        Ok(Move { face, turns })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.turns {
            1 => "",
            2 => "2",
            _ => "'",
        };
        write!(f, "{}{suffix}", self.face.letter())
    }
}

/// Parse a whitespace separated move sequence such as `R U R' U'`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a move sequence the way [`parse_moves`] reads it.
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

/// A clockwise quarter turn, as the slot each slot's new piece comes from.
struct QuarterTurn {
    corners: [u8; CORNER_COUNT],
    edges: [u8; EDGE_COUNT],
    /// Whether every edge the turn moves changes its flip.
    flips_edges: bool,
}

/// Indexed by [`Face`].
const QUARTER_TURNS: [QuarterTurn; 6] = [
    QuarterTurn {
        corners: [0, 1, 6, 2, 4, 5, 7, 3],
        edges: [5, 1, 2, 3, 0, 6, 4, 7, 8, 9, 10, 11],
        flips_edges: false,
    },
    QuarterTurn {
        corners: [1, 5, 2, 3, 0, 4, 6, 7],
        edges: [0, 1, 10, 3, 4, 5, 6, 7, 11, 9, 8, 2],
        flips_edges: false,
    },
    QuarterTurn {
        corners: [0, 1, 2, 3, 5, 7, 4, 6],
        edges: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
        flips_edges: true,
    },
    QuarterTurn {
        corners: [2, 0, 3, 1, 4, 5, 6, 7],
        edges: [0, 1, 2, 3, 4, 5, 7, 8, 9, 6, 10, 11],
        flips_edges: true,
    },
    QuarterTurn {
        corners: [0, 3, 2, 7, 4, 1, 6, 5],
        edges: [0, 11, 2, 3, 4, 1, 6, 5, 8, 9, 10, 7],
        flips_edges: false,
    },
    QuarterTurn {
        corners: [4, 1, 0, 3, 6, 5, 2, 7],
        edges: [0, 1, 2, 4, 9, 5, 6, 7, 8, 10, 3, 11],
        flips_edges: false,
    },
];

impl CubieCube {
    fn quarter_turn(&mut self, face: Face) {
        let turn = &QUARTER_TURNS[face as usize];
        let axis = face.axis_orientation();
        let before = *self;

        for (slot, &from) in turn.corners.iter().enumerate() {
            let mut corner = before.corners[from as usize];
            // A quarter turn swaps the two axes it does not turn about
            if from as usize != slot && corner.orientation != axis {
                corner.orientation = 3 - axis - corner.orientation;
            }
            self.corners[slot] = corner;
        }

        for (slot, &from) in turn.edges.iter().enumerate() {
            let mut edge = before.edges[from as usize];
            if from as usize != slot && turn.flips_edges {
                edge.flip = !edge.flip;
            }
            self.edges[slot] = edge;
        }
    }

    pub fn apply_move(&mut self, move_: Move) {
        trace!("Applying {move_}");
        for _ in 0..move_.turns {
            self.quarter_turn(move_.face);
        }
    }

    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            self.apply_move(move_);
        }
    }
}
