use crate::edge::{count_sides, BoundaryEdge};

/// A maximal set of 4-connected cells sharing one label, plus the faces where it meets
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<T> {
    pub(crate) label: T,
    pub(crate) cells: Vec<(usize, usize)>,
    pub(crate) edges: Vec<BoundaryEdge>,
}

/// The numbers an output consumer needs from a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionMetrics {
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

impl<T> Region<T> {
    pub fn label(&self) -> &T {
        &self.label
    }

    /// The cells of this region, in the order the flood fill reached them.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn edges(&self) -> &[BoundaryEdge] {
        &self.edges
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn perimeter(&self) -> usize {
        self.edges.len()
    }

    /// The number of straight fence segments needed to enclose this region.
    ///
    /// Inner boundaries around holes count alongside the outer boundary.
    pub fn side_count(&self) -> usize {
        count_sides(&self.edges)
    }

    pub fn metrics(&self) -> RegionMetrics {
        RegionMetrics {
            area: self.area(),
            perimeter: self.perimeter(),
            sides: self.side_count(),
        }
    }
}
