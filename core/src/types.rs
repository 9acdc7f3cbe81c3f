/// Single coordinate axis used for board size and cell positions. Signed so
/// that the UI's off-grid sentinel `(-1, -1)` stays representable.
pub type Coord = i32;

/// Two-dimensional cell coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Callers must bounds-check first; negative components wrap.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

/// Whether `coords` lies on a square board of side length `size`.
pub const fn in_bounds(coords: Coord2, size: Coord) -> bool {
    coords.0 >= 0 && coords.1 >= 0 && coords.0 < size && coords.1 < size
}

// Fixed visiting order: above-left, above, above-right, left, right,
// below-left, below, below-right. Flood fills stay reproducible.
const DISPLACEMENTS: [Coord2; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in
/// bounds.
const fn apply_delta(coords: Coord2, delta: Coord2, size: Coord) -> Option<Coord2> {
    let next = (coords.0 + delta.0, coords.1 + delta.1);
    if in_bounds(next, size) { Some(next) } else { None }
}

/// Iterates the up-to-8 in-bounds neighbors of a cell in the fixed order
/// above.
pub fn iter_neighbors(center: Coord2, size: Coord) -> NeighborIter {
    NeighborIter::new(center, size)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_cell_yields_all_eight_in_fixed_order() {
        let order: Vec<_> = iter_neighbors((1, 1), 3).collect();
        assert_eq!(
            order,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn corner_cell_is_clipped_to_in_bounds_neighbors() {
        let order: Vec<_> = iter_neighbors((0, 0), 2).collect();
        assert_eq!(order, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(iter_neighbors((0, 0), 1).count(), 0);
    }
}
