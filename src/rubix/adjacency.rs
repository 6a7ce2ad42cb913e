//! Which boundary slices move when a face turns.
//!
//! Each face grid is stored as seen from outside the cube. The four side faces
//! have Top above them, Top is seen from above with Back at its first row, and
//! Bottom is seen from below with Front at its first row.

use crate::cube::Face::{self, Back, Bottom, Front, Left, Right, Top};
use crate::grid::TurnDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    TopRow,
    BottomRow,
    LeftColumn,
    RightColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Forward,
    Reversed,
}

/// One row or column along the edge of a face, read in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundarySlice {
    pub face: Face,
    pub edge: Edge,
    pub reading: Reading,
}

impl BoundarySlice {
    /// Grid position of the `i`th sticker of this slice.
    pub fn position(&self, side: usize, i: usize) -> (usize, usize) {
        assert!(i < side);
        let t = match self.reading {
            Reading::Forward => i,
            Reading::Reversed => side - 1 - i,
        };
        match self.edge {
            Edge::TopRow => (0, t),
            Edge::BottomRow => (side - 1, t),
            Edge::LeftColumn => (t, 0),
            Edge::RightColumn => (t, side - 1),
        }
    }
}

/// The stickers of `cycle[k]` move onto `cycle[k + 1]`, and those of
/// `cycle[3]` onto `cycle[0]`.
pub type Cycle = [BoundarySlice; 4];

const fn fwd(face: Face, edge: Edge) -> BoundarySlice {
    BoundarySlice {
        face,
        edge,
        reading: Reading::Forward,
    }
}

const fn rev(face: Face, edge: Edge) -> BoundarySlice {
    BoundarySlice {
        face,
        edge,
        reading: Reading::Reversed,
    }
}

use Edge::{BottomRow, LeftColumn, RightColumn, TopRow};

// Indexed by face, then [clockwise, counter-clockwise].
const CYCLES: [[Cycle; 2]; 6] = [
    // Front
    [
        [
            fwd(Top, BottomRow),
            fwd(Right, LeftColumn),
            rev(Bottom, TopRow),
            rev(Left, RightColumn),
        ],
        [
            fwd(Top, BottomRow),
            rev(Left, RightColumn),
            rev(Bottom, TopRow),
            fwd(Right, LeftColumn),
        ],
    ],
    // Left
    [
        [
            fwd(Front, LeftColumn),
            fwd(Bottom, LeftColumn),
            rev(Back, RightColumn),
            fwd(Top, LeftColumn),
        ],
        [
            fwd(Front, LeftColumn),
            fwd(Top, LeftColumn),
            rev(Back, RightColumn),
            fwd(Bottom, LeftColumn),
        ],
    ],
    // Back
    [
        [
            fwd(Top, TopRow),
            rev(Left, LeftColumn),
            rev(Bottom, BottomRow),
            fwd(Right, RightColumn),
        ],
        [
            fwd(Top, TopRow),
            fwd(Right, RightColumn),
            rev(Bottom, BottomRow),
            rev(Left, LeftColumn),
        ],
    ],
    // Right
    [
        [
            fwd(Front, RightColumn),
            fwd(Top, RightColumn),
            rev(Back, LeftColumn),
            fwd(Bottom, RightColumn),
        ],
        [
            fwd(Front, RightColumn),
            fwd(Bottom, RightColumn),
            rev(Back, LeftColumn),
            fwd(Top, RightColumn),
        ],
    ],
    // Top
    [
        [
            fwd(Front, TopRow),
            fwd(Left, TopRow),
            fwd(Back, TopRow),
            fwd(Right, TopRow),
        ],
        [
            fwd(Front, TopRow),
            fwd(Right, TopRow),
            fwd(Back, TopRow),
            fwd(Left, TopRow),
        ],
    ],
    // Bottom
    [
        [
            fwd(Front, BottomRow),
            fwd(Right, BottomRow),
            fwd(Back, BottomRow),
            fwd(Left, BottomRow),
        ],
        [
            fwd(Front, BottomRow),
            fwd(Left, BottomRow),
            fwd(Back, BottomRow),
            fwd(Right, BottomRow),
        ],
    ],
];

pub fn cycle(face: Face, direction: TurnDirection) -> &'static Cycle {
    let column = match direction {
        TurnDirection::Clockwise => 0,
        TurnDirection::CounterClockwise => 1,
    };
    &CYCLES[face.index()][column]
}
