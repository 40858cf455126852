/// The direction a cell face points in.
///
/// `Up` decreases `y` and `Left` decreases `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Position of this direction within [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// `true` for faces on the top or bottom of a cell, whose fences run horizontally.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A face of the cell at `(x, y)` which borders the grid edge or a cell with a different label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryEdge {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl BoundaryEdge {
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// `(fence line, position along the fence)`.
    ///
    /// Edges facing up or down lie on a horizontal fence: the line is the row and they run along `x`.
    /// Edges facing left or right lie on a vertical fence: the line is the column and they run along `y`.
    fn fence_key(self) -> (usize, usize) {
        if self.direction.is_vertical() {
            (self.y, self.x)
        } else {
            (self.x, self.y)
        }
    }
}

/// Count the straight sides formed by a set of boundary edges.
///
/// Edges facing the same way which sit on the same fence line at adjacent positions
/// belong to the same side. Any gap, or a change of line, starts a new side.
pub fn count_sides<'a>(edges: impl IntoIterator<Item = &'a BoundaryEdge>) -> usize {
    let mut groups: [Vec<(usize, usize)>; 4] = Default::default();
    for edge in edges {
        groups[edge.direction.index()].push(edge.fence_key());
    }

    groups
        .iter_mut()
        .map(|keys| {
            keys.sort_unstable();
            let breaks = keys
                .windows(2)
                .filter(|pair| {
                    let (line, position) = pair[0];
                    pair[1] != (line, position + 1)
                })
                .count();
            if keys.is_empty() {
                0
            } else {
                breaks + 1
            }
        })
        .sum()
}
