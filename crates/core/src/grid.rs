use std::fmt;

/// Discrete grid coordinate expressed in tiles.
///
/// `x` grows to the right, `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another vertex.
    pub fn manhattan(self, other: Vertex) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular board extents. Coordinates are valid in
/// `0..width` × `0..height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub width: u32,
    pub height: u32,
}

impl GridDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(self, v: Vertex) -> bool {
        v.x >= 0 && v.y >= 0 && (v.x as u32) < self.width && (v.y as u32) < self.height
    }
}

/// Cardinal step direction used by card patterns and offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
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

    /// Unit step for one move in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Entity facing, applied as a rigid rotation to a resolved pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Rotation {
    North,
    South,
    East,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::South,
        Rotation::East,
        Rotation::West,
    ];

    /// Clockwise rotation angle applied to a pattern drawn facing south.
    pub fn degrees(self) -> f64 {
        match self {
            Rotation::North => 180.0,
            Rotation::South => 0.0,
            Rotation::East => 270.0,
            Rotation::West => 90.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Vertex::new(1, 7);
        let b = Vertex::new(4, 2);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn dims_bound_all_four_edges() {
        let dims = GridDims::new(9, 8);
        assert!(dims.contains(Vertex::ORIGIN));
        assert!(dims.contains(Vertex::new(8, 7)));
        assert!(!dims.contains(Vertex::new(9, 0)));
        assert!(!dims.contains(Vertex::new(0, 8)));
        assert!(!dims.contains(Vertex::new(-1, 0)));
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
