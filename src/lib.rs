mod analyzer;
mod edge;
mod error;
mod grid;
mod region;

pub use analyzer::{find_regions, total_price, Fence};
pub use edge::{count_sides, BoundaryEdge, Direction};
pub use error::Error;
pub use grid::Grid;
pub use region::{Region, RegionMetrics};
