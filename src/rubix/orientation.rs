use std::ops::Neg;

use log::debug;

use crate::cube::Face;

/// An axis-aligned unit vector: exactly one coordinate is +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector([i8; 3]);

impl Vector {
    pub const fn new(x: i8, y: i8, z: i8) -> Vector {
        Vector([x, y, z])
    }

    fn dot(&self, other: &Vector) -> i8 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    fn cross(&self, other: &Vector) -> Vector {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        Vector([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }

    fn is_unit(&self) -> bool {
        self.0.iter().filter(|x| **x != 0).count() == 1 && self.0.iter().all(|x| x.abs() <= 1)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(self.0.map(|x| -x))
    }
}

const FACE_DIRECTIONS: [(Vector, Face); 6] = [
    (Vector::new(0, 0, 1), Face::Front),
    (Vector::new(0, 0, -1), Face::Back),
    (Vector::new(1, 0, 0), Face::Right),
    (Vector::new(-1, 0, 0), Face::Left),
    (Vector::new(0, 1, 0), Face::Top),
    (Vector::new(0, -1, 0), Face::Bottom),
];

fn face_towards(v: Vector) -> Option<Face> {
    FACE_DIRECTIONS
        .iter()
        .find(|(direction, _)| *direction == v)
        .map(|(_, face)| *face)
}

/// Axes of the viewer's own frame: X runs along `right`, Y along `up` and Z
/// along `forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Positive,
    Negative,
}

/// The viewer's camera. Only quarter turns can change it, so the three
/// vectors stay an exact right-handed orthonormal frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    forward: Vector,
    up: Vector,
    right: Vector,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation {
            forward: Vector::new(0, 0, 1),
            up: Vector::new(0, 1, 0),
            right: Vector::new(1, 0, 0),
        }
    }
}

// Positive takes (a, b) to (b, -a), Negative to (-b, a).
fn swap_negate(a: &mut Vector, b: &mut Vector, sense: Sense) {
    let (old_a, old_b) = (*a, *b);
    match sense {
        Sense::Positive => {
            *a = old_b;
            *b = -old_a;
        }
        Sense::Negative => {
            *a = -old_b;
            *b = old_a;
        }
    }
}

impl Orientation {
    pub fn new() -> Orientation {
        Orientation::default()
    }

    /// Quarter turn about one of the viewer's axes. About X, Positive looks
    /// up; about Y, Positive looks right; about Z, Positive rolls clockwise.
    pub fn rotate(&mut self, axis: Axis, sense: Sense) {
        match axis {
            Axis::X => swap_negate(&mut self.forward, &mut self.up, sense),
            Axis::Y => swap_negate(&mut self.forward, &mut self.right, sense),
            Axis::Z => swap_negate(&mut self.up, &mut self.right, sense),
        }
        debug_assert!(self.is_orthonormal(), "{:?}", self);
        debug!("rotated {:?} {:?}, now {:?}", axis, sense, self);
    }

    /// The face the viewer is looking at.
    pub fn current_face(&self) -> Face {
        match face_towards(self.forward) {
            Some(face) => face,
            None => panic!("camera forward {:?} is not axis-aligned", self.forward),
        }
    }

    /// The face at the top of the viewer's picture.
    pub fn facing_up(&self) -> Face {
        match face_towards(self.up) {
            Some(face) => face,
            None => panic!("camera up {:?} is not axis-aligned", self.up),
        }
    }

    fn is_orthonormal(&self) -> bool {
        let (f, u, r) = (&self.forward, &self.up, &self.right);
        f.is_unit()
            && u.is_unit()
            && r.is_unit()
            && f.dot(u) == 0
            && f.dot(r) == 0
            && u.dot(r) == 0
            && r.cross(u) == *f
    }
}
