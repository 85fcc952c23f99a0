//! Granular solids (Sand): fall straight down, then diagonally. No lateral
//! spread, but a blocked grain is displaceable and so falls back on the
//! hold-or-displace search.

use crate::api::TickApi;
use crate::direction::{self, Direction};

pub(crate) fn update(api: &mut TickApi) -> bool {
    if api.at_bottom() {
        return api.hold_or_displace();
    }
    if api.try_move(Direction::Down) {
        return true;
    }
    let pair = direction::random_down_diagonal(api.rng());
    if api.try_pair(pair) {
        return true;
    }
    api.hold_or_displace()
}

#[cfg(test)]
mod tests {
    use crate::material::MaterialKind::{Empty, Rock, Sand};
    use crate::Grid;

    #[test]
    fn sand_falls_through_empty() {
        let mut grid = Grid::with_seed(3, 4, 11).unwrap();
        grid.place(1, 1, Sand);
        grid.tick();
        assert_eq!(grid.kind_at(1, 1), Empty);
        assert_eq!(grid.kind_at(1, 2), Sand);
    }

    #[test]
    fn sand_slides_off_a_pedestal() {
        let mut grid = Grid::with_seed(3, 3, 12).unwrap();
        grid.place(1, 2, Rock);
        grid.place(1, 1, Sand);
        grid.tick();
        let left = grid.kind_at(0, 2);
        let right = grid.kind_at(2, 2);
        assert!(
            (left == Sand) ^ (right == Sand),
            "grain should land on exactly one side"
        );
    }

    #[test]
    fn sand_piles_rather_than_spreading() {
        // A grain boxed in at both diagonals stays put; sand has no lateral
        // rule even with free cells beside it.
        let mut grid = Grid::with_seed(3, 3, 13).unwrap();
        grid.place(0, 2, Rock);
        grid.place(1, 2, Rock);
        grid.place(2, 2, Rock);
        grid.place(1, 1, Sand);
        grid.tick();
        assert_eq!(grid.kind_at(1, 1), Sand);
        assert_eq!(grid.kind_at(0, 1), Empty);
        assert_eq!(grid.kind_at(2, 1), Empty);
    }

    #[test]
    fn sand_rests_on_the_bottom_edge() {
        let mut grid = Grid::with_seed(1, 3, 14).unwrap();
        grid.place(0, 2, Sand);
        grid.tick();
        assert_eq!(grid.kind_at(0, 2), Sand);
    }
}
