use std::{
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{edge::Direction, error::Error};

/// A rectangular, non-empty 2d grid of labels.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner;
/// `x` is the column and `y` is the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Default + Clone,
{
    /// A `width` by `height` grid filled with `T::default()`.
    ///
    /// Callers must pass non-zero dimensions.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows of labels.
    ///
    /// Every row must have the same, non-zero width, and there must be at least one row.
    pub fn from_rows<Rows, Row>(rows: Rows) -> Result<Self, Error>
    where
        Rows: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (row, items) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(items);
            let found = cells.len() - before;

            if row == 0 {
                if found == 0 {
                    return Err(Error::EmptyGrid);
                }
                width = found;
            } else if found != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if height == 0 {
            return Err(Error::EmptyGrid);
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some((y * self.width) + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.idx(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.idx(x, y).map(|idx| &mut self.cells[idx])
    }

    /// The cell adjacent to `(x, y)` in `direction`, or `None` past the edge of the grid.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (x, y) = match direction {
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y + 1),
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x + 1, y),
        };
        self.idx(x, y).map(|_| (x, y))
    }

    /// Iterate over every coordinate of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        self.get(x, y).unwrap()
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        self.get_mut(x, y).unwrap()
    }
}

/// Parse a newline-delimited block of text, one label per character.
impl FromStr for Grid<char> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_rows(
            s.trim_matches(|c| c == '\n' || c == '\r')
                .lines()
                .map(str::chars),
        )
    }
}
