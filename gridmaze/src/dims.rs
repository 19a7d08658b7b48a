use std::ops::{Add, Sub};

/// Grid coordinate, `(row, col)`.
///
/// Signed so that neighbour offsets can step off the grid and be rejected
/// by bounds checks instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims(pub i32, pub i32);

/// Neighbour offsets in the order they are tried: up, down, left, right.
pub const DIRECTIONS: [Dims; 4] = [Dims(-1, 0), Dims(1, 0), Dims(0, -1), Dims(0, 1)];

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Whether `other` is a 4-directional neighbour of `self`.
    pub fn is_adjacent(self, other: Dims) -> bool {
        (self - other).abs_sum() == 1
    }

    /// Integer average of both coordinates, rounded towards negative infinity.
    pub fn midpoint(self, other: Dims) -> Dims {
        Dims(
            (self.0 + other.0).div_euclid(2),
            (self.1 + other.1).div_euclid(2),
        )
    }

    /// Iterates over all four neighbours, including ones outside of any grid.
    pub fn around(self) -> impl Iterator<Item = Dims> {
        DIRECTIONS.into_iter().map(move |dir| self + dir)
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_four_directional() {
        let pos = Dims(3, 3);
        assert!(pos.is_adjacent(Dims(2, 3)));
        assert!(pos.is_adjacent(Dims(3, 4)));
        assert!(!pos.is_adjacent(Dims(4, 4)));
        assert!(!pos.is_adjacent(pos));
        assert!(!pos.is_adjacent(Dims(3, 5)));
    }

    #[test]
    fn midpoint_of_neighbours_is_one_of_them() {
        let pos = Dims(2, 2);
        for next in pos.around() {
            let mid = pos.midpoint(next);
            assert!(mid == pos || mid == next);
        }
        assert_eq!(Dims(2, 2).midpoint(Dims(2, 4)), Dims(2, 3));
        assert_eq!(Dims(0, 0).midpoint(Dims(-1, 0)), Dims(-1, 0));
    }

    #[test]
    fn directions_order() {
        let around: Vec<_> = Dims::ZERO.around().collect();
        assert_eq!(around, vec![Dims(-1, 0), Dims(1, 0), Dims(0, -1), Dims(0, 1)]);
    }
}
