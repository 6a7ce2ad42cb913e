use std::fmt;

use log::debug;
use rand::Rng;

use crate::adjacency::{self, BoundarySlice};
use crate::error::CubeError;
use crate::grid::{Grid, TurnDirection};

pub type Sticker = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Front = 0,
    Left = 1,
    Back = 2,
    Right = 3,
    Top = 4,
    Bottom = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Left,
        Face::Back,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    #[cfg(test)]
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Left => "Left",
            Face::Back => "Back",
            Face::Right => "Right",
            Face::Top => "Top",
            Face::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    faces: [Grid<Sticker>; 6],
}

impl Cube {
    /// A solved cube with `area` stickers on every face.
    pub fn new(area: usize) -> Result<Cube, CubeError> {
        let blank = Grid::new(area, 0)?;
        let mut cube = Cube {
            faces: std::array::from_fn(|_| blank.clone()),
        };
        cube.init();
        Ok(cube)
    }

    pub fn init(&mut self) {
        for face in Face::ALL {
            self.faces[face.index()].fill(face.index() as Sticker);
        }
    }

    pub fn side(&self) -> usize {
        self.faces[0].side()
    }

    pub fn face(&self, face: Face) -> &Grid<Sticker> {
        &self.faces[face.index()]
    }

    /// Scatters every sticker uniformly over the whole cube. The result is
    /// generally not reachable by turns.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let total = self.faces[0].area() * self.faces.len();
        for i in (1..total).rev() {
            let j = rng.gen_range(0..=i);
            self.swap_stickers(i, j);
        }
        debug!("shuffled {} stickers", total);
    }

    /// Applies `count` random turns, which always leaves a solvable cube.
    pub fn scramble_with_turns<R>(&mut self, rng: &mut R, count: usize)
    where
        R: Rng + ?Sized,
    {
        for _ in 0..count {
            let face = Face::ALL[rng.gen_range(0..Face::ALL.len())];
            let direction = TurnDirection::all()[rng.gen_range(0..2)];
            self.turn(face, direction);
        }
    }

    // Stickers are numbered face by face across the whole cube.
    fn swap_stickers(&mut self, a: usize, b: usize) {
        let area = self.faces[0].area();
        let (face_a, offset_a) = (a / area, a % area);
        let (face_b, offset_b) = (b / area, b % area);

        if face_a == face_b {
            self.faces[face_a].values_mut().swap(offset_a, offset_b);
        } else {
            let x = self.faces[face_a].values()[offset_a];
            let y = self.faces[face_b].values()[offset_b];
            self.faces[face_a].values_mut()[offset_a] = y;
            self.faces[face_b].values_mut()[offset_b] = x;
        }
    }

    /// Every face is a single colour, whichever colour that is.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| grid.is_uniform())
    }

    pub fn turn(&mut self, face: Face, direction: TurnDirection) {
        debug!("turning {} {:?}", face, direction);
        self.faces[face.index()].rotate(direction);
        self.propagate(face, direction);
    }

    fn propagate(&mut self, face: Face, direction: TurnDirection) {
        let cycle = adjacency::cycle(face, direction);
        let side = self.side();

        let saved: Vec<Sticker> = (0..side).map(|i| self.boundary(&cycle[3], i)).collect();
        for k in (1..cycle.len()).rev() {
            for i in 0..side {
                let value = self.boundary(&cycle[k - 1], i);
                *self.boundary_mut(&cycle[k], i) = value;
            }
        }
        for (i, value) in saved.into_iter().enumerate() {
            *self.boundary_mut(&cycle[0], i) = value;
        }
    }

    fn boundary(&self, slice: &BoundarySlice, i: usize) -> Sticker {
        let side = self.side();
        self.faces[slice.face.index()][slice.position(side, i)]
    }

    fn boundary_mut(&mut self, slice: &BoundarySlice, i: usize) -> &mut Sticker {
        let side = self.side();
        &mut self.faces[slice.face.index()][slice.position(side, i)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // A cube where every sticker carries its own number, so any misplaced
    // sticker shows up.
    fn labelled(side: usize) -> Cube {
        let mut cube = Cube::new(side * side).unwrap();
        let mut next: Sticker = 0;
        for grid in cube.faces.iter_mut() {
            for cell in grid.values_mut() {
                *cell = next;
                next += 1;
            }
        }
        cube
    }

    type Point = [i32; 3];

    fn coordinate(side: usize, k: usize) -> i32 {
        2 * k as i32 - (side as i32 - 1)
    }

    // Sticker centres on a cube spanning -side..=side on every axis, with x
    // towards Right, y towards Top and z towards Front.
    fn location(face: Face, side: usize, (row, col): (usize, usize)) -> Point {
        let d = side as i32;
        let r = coordinate(side, row);
        let c = coordinate(side, col);
        match face {
            Face::Front => [c, -r, d],
            Face::Back => [-c, -r, -d],
            Face::Right => [d, -r, -c],
            Face::Left => [-d, -r, c],
            Face::Top => [c, d, r],
            Face::Bottom => [c, -d, -r],
        }
    }

    fn normal(face: Face) -> Point {
        match face {
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Right => [1, 0, 0],
            Face::Left => [-1, 0, 0],
            Face::Top => [0, 1, 0],
            Face::Bottom => [0, -1, 0],
        }
    }

    fn dot(a: Point, b: Point) -> i32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    fn cross(a: Point, b: Point) -> Point {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    // Quarter turn of `p` about the unit axis `n`, clockwise when looking
    // at the cube from the tip of `n`.
    fn quarter_turn(n: Point, p: Point, direction: TurnDirection) -> Point {
        let c = cross(n, p);
        let along = dot(n, p);
        let sign = match direction {
            TurnDirection::Clockwise => -1,
            TurnDirection::CounterClockwise => 1,
        };
        [
            sign * c[0] + along * n[0],
            sign * c[1] + along * n[1],
            sign * c[2] + along * n[2],
        ]
    }

    fn all_positions(side: usize) -> Vec<(Face, (usize, usize))> {
        Face::ALL
            .iter()
            .flat_map(|&face| {
                (0..side)
                    .cartesian_product(0..side)
                    .map(move |pos| (face, pos))
            })
            .collect()
    }

    // Turns the cube by moving stickers through space instead of through the
    // adjacency table.
    fn turned_geometrically(cube: &Cube, turned: Face, direction: TurnDirection) -> Cube {
        let side = cube.side();
        let axis = normal(turned);
        let positions = all_positions(side);
        let mut result = cube.clone();

        for &(face, pos) in &positions {
            let p = location(face, side, pos);
            if dot(p, axis) < side as i32 - 1 {
                continue;
            }
            let new_p = quarter_turn(axis, p, direction);
            let new_n = quarter_turn(axis, normal(face), direction);
            let &(new_face, new_pos) = positions
                .iter()
                .find(|(f, q)| normal(*f) == new_n && location(*f, side, *q) == new_p)
                .unwrap();
            result.faces[new_face.index()][new_pos] = cube.faces[face.index()][pos];
        }
        result
    }

    #[test]
    fn new_cube_is_solved_with_face_colours() {
        let cube = Cube::new(9).unwrap();
        assert!(cube.is_solved());
        for face in Face::ALL {
            assert!(cube
                .face(face)
                .values()
                .iter()
                .all(|x| *x as usize == face.index()));
        }
        assert_eq!(cube.side(), 3);
    }

    #[test]
    fn non_square_area_is_a_configuration_error() {
        assert_eq!(Cube::new(8), Err(CubeError::NotPerfectSquare { area: 8 }));
        assert_eq!(Cube::new(0), Err(CubeError::EmptyFace));
    }

    #[test_log::test]
    fn table_matches_geometry() {
        for side in 1..=5 {
            for face in Face::ALL {
                for direction in TurnDirection::all() {
                    let cube = labelled(side);
                    let expected = turned_geometrically(&cube, face, direction);
                    let mut actual = cube.clone();
                    actual.turn(face, direction);
                    assert_eq!(actual, expected, "side {} {} {:?}", side, face, direction);
                }
            }
        }
    }

    #[test]
    fn turn_then_inverse_restores_cube() {
        for side in 1..=4 {
            for face in Face::ALL {
                for direction in TurnDirection::all() {
                    let original = labelled(side);
                    let mut cube = original.clone();
                    cube.turn(face, direction);
                    assert_ne!(cube, original);
                    cube.turn(face, direction.reversed());
                    assert_eq!(cube, original, "side {} {} {:?}", side, face, direction);
                }
            }
        }
    }

    #[test]
    fn four_turns_restore_cube() {
        let original = labelled(3);
        for face in Face::ALL {
            let mut cube = original.clone();
            for _ in 0..4 {
                cube.turn(face, TurnDirection::Clockwise);
            }
            assert_eq!(cube, original, "{}", face);
        }
    }

    #[test]
    fn single_turn_unsolves() {
        for side in 2..=4 {
            for face in Face::ALL {
                for direction in TurnDirection::all() {
                    let mut cube = Cube::new(side * side).unwrap();
                    cube.turn(face, direction);
                    assert!(!cube.is_solved(), "side {} {} {:?}", side, face, direction);
                }
            }
        }
    }

    #[test]
    fn single_sticker_faces_are_always_solved() {
        let mut cube = Cube::new(1).unwrap();
        cube.turn(Face::Front, TurnDirection::Clockwise);
        assert!(cube.is_solved());
        assert_eq!(cube.face(Face::Right).values(), &[Face::Top as Sticker]);
    }

    #[test]
    fn front_clockwise_on_three_by_three() {
        let mut cube = Cube::new(9).unwrap();
        let before = cube.clone();
        cube.turn(Face::Front, TurnDirection::Clockwise);

        let (top, left, right, bottom) = (
            Face::Top as Sticker,
            Face::Left as Sticker,
            Face::Right as Sticker,
            Face::Bottom as Sticker,
        );
        assert_eq!(cube.face(Face::Front), before.face(Face::Front));
        assert_eq!(cube.face(Face::Back), before.face(Face::Back));
        assert_eq!(
            cube.face(Face::Top).values(),
            &[top, top, top, top, top, top, left, left, left]
        );
        assert_eq!(
            cube.face(Face::Right).values(),
            &[top, right, right, top, right, right, top, right, right]
        );
        assert_eq!(
            cube.face(Face::Bottom).values(),
            &[right, right, right, bottom, bottom, bottom, bottom, bottom, bottom]
        );
        assert_eq!(
            cube.face(Face::Left).values(),
            &[left, left, bottom, left, left, bottom, left, left, bottom]
        );

        cube.turn(Face::Front, TurnDirection::CounterClockwise);
        assert_eq!(cube, before);
    }

    #[test]
    fn front_clockwise_keeps_sticker_order_along_edges() {
        let mut cube = labelled(3);
        let before = cube.clone();
        cube.turn(Face::Front, TurnDirection::Clockwise);

        let top = before.face(Face::Top);
        let right = cube.face(Face::Right);
        for k in 0..3 {
            assert_eq!(right[(k, 0)], top[(2, k)]);
        }
        let left = before.face(Face::Left);
        let new_top = cube.face(Face::Top);
        for r in 0..3 {
            assert_eq!(new_top[(2, 2 - r)], left[(r, 2)]);
        }
    }

    #[test]
    fn shuffle_preserves_sticker_counts() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut cube = Cube::new(16).unwrap();
        let before = cube.faces.iter().flat_map(|g| g.values().iter().copied()).counts();
        cube.shuffle(&mut rng);
        let after = cube.faces.iter().flat_map(|g| g.values().iter().copied()).counts();
        assert_eq!(before, after);
        assert!(!cube.is_solved());
    }

    #[test]
    fn shuffle_is_reproducible_from_seed() {
        let mut a = Cube::new(9).unwrap();
        let mut b = Cube::new(9).unwrap();
        a.shuffle(&mut StdRng::seed_from_u64(3));
        b.shuffle(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn scramble_with_turns_preserves_centres() {
        let mut cube = Cube::new(9).unwrap();
        cube.scramble_with_turns(&mut StdRng::seed_from_u64(5), 40);
        for face in Face::ALL {
            assert_eq!(cube.face(face)[(1, 1)] as usize, face.index());
        }
    }
}
