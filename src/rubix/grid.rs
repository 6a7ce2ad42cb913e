use std::ops::{Index, IndexMut};

use crate::error::CubeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    pub fn all() -> [TurnDirection; 2] {
        [TurnDirection::Clockwise, TurnDirection::CounterClockwise]
    }

    pub fn from_char(ch: char) -> Option<TurnDirection> {
        match ch {
            'C' => Some(TurnDirection::Clockwise),
            'P' => Some(TurnDirection::CounterClockwise),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn reversed(&self) -> TurnDirection {
        match self {
            TurnDirection::Clockwise => TurnDirection::CounterClockwise,
            TurnDirection::CounterClockwise => TurnDirection::Clockwise,
        }
    }
}

/// Side length of a square face holding `area` stickers.
pub fn side_for_area(area: usize) -> Result<usize, CubeError> {
    if area == 0 {
        return Err(CubeError::EmptyFace);
    }

    // A square that overflows is larger than any area.
    let squared = |s: usize| s.checked_mul(s);

    let mut side = (area as f64).sqrt() as usize;
    while squared(side).map_or(true, |sq| sq > area) {
        side -= 1;
    }
    while squared(side + 1).is_some_and(|sq| sq <= area) {
        side += 1;
    }

    if squared(side) != Some(area) {
        return Err(CubeError::NotPerfectSquare { area });
    }
    Ok(side)
}

/// A square grid of stickers, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    side: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Clone,
{
    pub fn new(area: usize, starting_value: T) -> Result<Grid<T>, CubeError> {
        let side = side_for_area(area)?;
        Ok(Grid {
            side,
            cells: vec![starting_value; area],
        })
    }

    #[cfg(test)]
    pub fn from_values(values: Vec<T>) -> Result<Grid<T>, CubeError> {
        let side = side_for_area(values.len())?;
        Ok(Grid {
            side,
            cells: values,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|cell| *cell = value.clone());
    }

    pub fn values(&self) -> &[T] {
        &self.cells
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.side)
    }

    pub fn is_uniform(&self) -> bool
    where
        T: PartialEq,
    {
        let first = &self.cells[0];
        self.cells.iter().all(|x| x == first)
    }

    pub fn rotate(&mut self, direction: TurnDirection) {
        match direction {
            TurnDirection::Clockwise => self.rotate_clockwise(),
            TurnDirection::CounterClockwise => self.rotate_counterclockwise(),
        }
    }

    /// (row, col) moves to (col, d-1-row).
    pub fn rotate_clockwise(&mut self) {
        let d = self.side;
        let old = self.cells.clone();
        for row in 0..d {
            for col in 0..d {
                self.cells[col * d + (d - 1 - row)] = old[row * d + col].clone();
            }
        }
    }

    /// (row, col) moves to (d-1-col, row).
    pub fn rotate_counterclockwise(&mut self) {
        let d = self.side;
        let old = self.cells.clone();
        for row in 0..d {
            for col in 0..d {
                self.cells[(d - 1 - col) * d + row] = old[row * d + col].clone();
            }
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.side && col < self.side, "({}, {}) is off the grid", row, col);
        &self.cells[row * self.side + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.side && col < self.side, "({}, {}) is off the grid", row, col);
        &mut self.cells[row * self.side + col]
    }
}
