use tracing::{debug, trace};

use crate::{
    edge::{BoundaryEdge, Direction},
    grid::Grid,
    region::Region,
};

/// Which measure of a region's fence a price is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    /// Every boundary edge is priced individually.
    Perimeter,
    /// Each straight side is priced once, however long it is.
    Sides,
}

/// Partition the grid into maximal 4-connected regions of equal labels.
///
/// Regions are returned in the row-major order of their first cell. Every cell of the
/// grid belongs to exactly one region.
pub fn find_regions<T>(grid: &Grid<T>) -> Vec<Region<T>>
where
    T: Eq + Clone,
{
    let mut visited = Grid::<bool>::new(grid.width(), grid.height());
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for start in grid.cells() {
        if visited[start] {
            continue;
        }

        let label = &grid[start];
        let mut cells = Vec::new();
        let mut edges = Vec::new();

        visited[start] = true;
        stack.push(start);
        while let Some((x, y)) = stack.pop() {
            cells.push((x, y));
            for direction in Direction::ALL {
                match grid.neighbor(x, y, direction) {
                    Some(next) if grid[next] == *label => {
                        if !visited[next] {
                            visited[next] = true;
                            stack.push(next);
                        }
                    }
                    _ => edges.push(BoundaryEdge::new(x, y, direction)),
                }
            }
        }

        trace!(
            x = start.0,
            y = start.1,
            area = cells.len(),
            perimeter = edges.len(),
            "found region"
        );
        regions.push(Region {
            label: label.clone(),
            cells,
            edges,
        });
    }

    debug!(
        width = grid.width(),
        height = grid.height(),
        regions = regions.len(),
        "partitioned grid"
    );
    regions
}

/// Sum `price(area, measure)` over every region of the grid, where `measure` is the
/// region's perimeter or side count according to `fence`.
pub fn total_price<T, F>(grid: &Grid<T>, fence: Fence, mut price: F) -> usize
where
    T: Eq + Clone,
    F: FnMut(usize, usize) -> usize,
{
    find_regions(grid)
        .iter()
        .map(|region| {
            let measure = match fence {
                Fence::Perimeter => region.perimeter(),
                Fence::Sides => region.side_count(),
            };
            price(region.area(), measure)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionMetrics;
    use rstest::rstest;

    const SMALL: &str = "
AAAA
BBCD
BBCC
EEEC
";

    const NESTED: &str = "
OOOOO
OXOXO
OOOOO
OXOXO
OOOOO
";

    const STRIPES: &str = "
EEEEE
EXXXX
EEEEE
EXXXX
EEEEE
";

    const DIAGONAL: &str = "
AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA
";

    const LARGE: &str = "
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    const RING: &str = "
AAA
ABA
AAA
";

    fn parse(input: &str) -> Grid<char> {
        input.parse().unwrap()
    }

    fn area_times(area: usize, measure: usize) -> usize {
        area * measure
    }

    fn metrics(area: usize, perimeter: usize, sides: usize) -> RegionMetrics {
        RegionMetrics {
            area,
            perimeter,
            sides,
        }
    }

    #[test]
    fn small_example_regions() {
        let grid = parse(SMALL);
        let found: Vec<_> = find_regions(&grid)
            .iter()
            .map(|region| (*region.label(), region.metrics()))
            .collect();
        assert_eq!(
            found,
            vec![
                ('A', metrics(4, 10, 4)),
                ('B', metrics(4, 8, 4)),
                ('C', metrics(4, 10, 8)),
                ('D', metrics(1, 4, 4)),
                ('E', metrics(3, 8, 4)),
            ]
        );
    }

    #[test]
    fn single_cell() {
        let grid = parse("A");
        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].label(), &'A');
        assert_eq!(regions[0].cells().to_vec(), vec![(0, 0)]);
        assert_eq!(regions[0].metrics(), metrics(1, 4, 4));
    }

    #[test]
    fn ring_counts_inner_sides() {
        let grid = parse(RING);
        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].label(), &'A');
        assert_eq!(regions[0].metrics(), metrics(8, 16, 8));
        assert_eq!(regions[1].label(), &'B');
        assert_eq!(regions[1].metrics(), metrics(1, 4, 4));
    }

    #[test]
    fn nested_example_outer_region() {
        let grid = parse(NESTED);
        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 5);
        let outer = &regions[0];
        assert_eq!(outer.label(), &'O');
        assert_eq!(outer.area(), 21);
        assert_eq!(outer.perimeter(), 36);
        assert_eq!(outer.side_count(), 20);
        assert!(regions[1..]
            .iter()
            .all(|region| region.label() == &'X' && region.metrics() == metrics(1, 4, 4)));
    }

    #[test]
    fn disconnected_labels_are_distinct_regions() {
        let grid = Grid::from_rows(vec![vec![1_u8, 2, 1], vec![1, 2, 1]]).unwrap();
        let regions = find_regions(&grid);
        let labels: Vec<_> = regions.iter().map(|region| *region.label()).collect();
        assert_eq!(labels, vec![1, 2, 1]);
        assert!(regions
            .iter()
            .all(|region| region.metrics() == metrics(2, 6, 4)));
    }

    #[rstest]
    #[case(SMALL, 140)]
    #[case(NESTED, 772)]
    #[case(LARGE, 1930)]
    fn price_by_perimeter(#[case] input: &str, #[case] expect: usize) {
        assert_eq!(
            total_price(&parse(input), Fence::Perimeter, area_times),
            expect
        );
    }

    #[rstest]
    #[case(SMALL, 80)]
    #[case(NESTED, 436)]
    #[case(STRIPES, 236)]
    #[case(DIAGONAL, 368)]
    #[case(LARGE, 1206)]
    fn price_by_sides(#[case] input: &str, #[case] expect: usize) {
        assert_eq!(total_price(&parse(input), Fence::Sides, area_times), expect);
    }

    #[test]
    fn price_function_sees_each_region() {
        let grid = parse(SMALL);
        let mut seen = Vec::new();
        let total = total_price(&grid, Fence::Sides, |area, sides| {
            seen.push((area, sides));
            1
        });
        assert_eq!(total, 5);
        assert_eq!(seen, vec![(4, 4), (4, 4), (4, 8), (1, 4), (3, 4)]);
    }

    #[rstest]
    #[case(SMALL)]
    #[case(NESTED)]
    #[case(STRIPES)]
    #[case(DIAGONAL)]
    #[case(LARGE)]
    #[case(RING)]
    fn regions_partition_grid(#[case] input: &str) {
        let grid = parse(input);
        let mut owner = Grid::<usize>::new(grid.width(), grid.height());
        for (id, region) in find_regions(&grid).iter().enumerate() {
            assert!(region.area() > 0);
            for &cell in region.cells() {
                assert_eq!(owner[cell], 0, "cell {cell:?} is in two regions");
                assert_eq!(grid[cell], *region.label());
                owner[cell] = id + 1;
            }
        }
        assert!(grid.cells().all(|cell| owner[cell] != 0));
    }

    #[rstest]
    #[case(SMALL)]
    #[case(NESTED)]
    #[case(STRIPES)]
    #[case(DIAGONAL)]
    #[case(LARGE)]
    #[case(RING)]
    fn fence_measures_are_consistent(#[case] input: &str) {
        for region in find_regions(&parse(input)) {
            let RegionMetrics {
                perimeter, sides, ..
            } = region.metrics();
            assert!(perimeter >= 4 && perimeter % 2 == 0);
            assert!(sides >= 4 && sides % 2 == 0);
            assert!(sides <= perimeter);
        }
    }

    #[rstest]
    #[case(NESTED)]
    #[case(LARGE)]
    fn analysis_is_idempotent(#[case] input: &str) {
        let grid = parse(input);
        let measure = |grid: &Grid<char>| {
            let mut metrics: Vec<_> = find_regions(grid)
                .iter()
                .map(|region| region.metrics())
                .collect();
            metrics.sort_unstable();
            metrics
        };
        assert_eq!(measure(&grid), measure(&grid));
    }
}
