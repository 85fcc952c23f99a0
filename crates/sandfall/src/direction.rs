//! Compass directions and the randomized tie-breaking draws.
//!
//! Movement rules that have two equally valid symmetric destinations (the two
//! laterals, the two down-diagonals, the two up-diagonals) take the pair in
//! coin-flipped order so long runs develop no left/right or up/down bias.

use rand::Rng;

/// Offset of a candidate move. `Hold` is the zero offset; y grows downward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Hold,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

/// The 8 moving directions, `Hold` excluded.
pub const COMPASS: [Direction; 8] = [
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
];

impl Direction {
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Hold => (0, 0),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
        }
    }
}

/// The two lateral directions in randomized order.
pub fn random_lateral<R: Rng>(rng: &mut R) -> (Direction, Direction) {
    flip(rng, Direction::Left, Direction::Right)
}

/// The two down-diagonals in randomized order.
pub fn random_down_diagonal<R: Rng>(rng: &mut R) -> (Direction, Direction) {
    flip(rng, Direction::DownLeft, Direction::DownRight)
}

/// The two up-diagonals in randomized order.
pub fn random_up_diagonal<R: Rng>(rng: &mut R) -> (Direction, Direction) {
    flip(rng, Direction::UpLeft, Direction::UpRight)
}

fn flip<R: Rng>(rng: &mut R, a: Direction, b: Direction) -> (Direction, Direction) {
    if rng.random_bool(0.5) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Probability-gated draw: with probability `percent`/100 (clamped to 100),
/// one of the 8 compass directions uniformly; otherwise no direction.
/// Used for the undirected jitter of gas-phase material.
pub fn random_direction<R: Rng>(rng: &mut R, percent: u8) -> Option<Direction> {
    if rng.random_range(0..100u8) < percent.min(100) {
        Some(COMPASS[rng.random_range(0..COMPASS.len())])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::HashMap;

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(0x5eed)
    }

    #[test]
    fn deltas_cover_the_8_neighborhood_plus_hold() {
        assert_eq!(Direction::Hold.delta(), (0, 0));
        let mut seen: Vec<(i32, i32)> = COMPASS.iter().map(|d| d.delta()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
        for (dx, dy) in seen {
            assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
            assert_ne!((dx, dy), (0, 0));
        }
    }

    #[test]
    fn pair_helpers_return_both_members_of_the_axis() {
        let mut rng = rng();
        for _ in 0..32 {
            let (a, b) = random_lateral(&mut rng);
            assert!(matches!(
                (a, b),
                (Direction::Left, Direction::Right) | (Direction::Right, Direction::Left)
            ));
            let (a, b) = random_down_diagonal(&mut rng);
            assert!(matches!(
                (a, b),
                (Direction::DownLeft, Direction::DownRight)
                    | (Direction::DownRight, Direction::DownLeft)
            ));
            let (a, b) = random_up_diagonal(&mut rng);
            assert!(matches!(
                (a, b),
                (Direction::UpLeft, Direction::UpRight)
                    | (Direction::UpRight, Direction::UpLeft)
            ));
        }
    }

    #[test]
    fn pair_order_is_roughly_fair() {
        let mut rng = rng();
        let trials = 4000;
        let left_first = (0..trials)
            .filter(|_| random_lateral(&mut rng).0 == Direction::Left)
            .count();
        // Coin flip: expect ~2000 with generous slack.
        assert!((1600..=2400).contains(&left_first), "{left_first}");
    }

    #[test]
    fn random_direction_respects_the_gate() {
        let mut rng = rng();
        for _ in 0..100 {
            assert_eq!(random_direction(&mut rng, 0), None);
            assert!(random_direction(&mut rng, 100).is_some());
        }
        // Clamped above 100.
        assert!(random_direction(&mut rng, 200).is_some());
    }

    #[test]
    fn random_direction_draw_is_roughly_uniform() {
        let mut rng = rng();
        let trials = 8000;
        let mut counts: HashMap<Direction, usize> = HashMap::new();
        let mut none = 0usize;
        for _ in 0..trials {
            match random_direction(&mut rng, 50) {
                Some(dir) => *counts.entry(dir).or_default() += 1,
                None => none += 1,
            }
        }
        // Gate passes about half the time.
        assert!((3200..=4800).contains(&none), "{none}");
        // Each direction gets about 1/8 of the passes.
        let passes = trials - none;
        for dir in COMPASS {
            let n = counts.get(&dir).copied().unwrap_or(0);
            assert!(
                n * 8 > passes / 2 && n * 8 < passes * 2,
                "{dir:?} drawn {n} of {passes}"
            );
        }
    }
}
