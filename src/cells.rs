use bitflags::bitflags;

bitflags! {
    /// Wall presence mask of one maze cell. A set bit is a standing wall.
    ///
    /// `VISITED` is carried along in every mask but means nothing to the
    /// builder or the renderers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const NORTH   = 1;
        const SOUTH   = 2;
        const EAST    = 4;
        const WEST    = 8;
        const VISITED = 16;
    }
}

impl Walls {
    /// Every wall standing. Also the stand-in for any cell outside the grid.
    pub const CLOSED: Walls = Walls::all();

    #[inline]
    pub fn has_wall(self, direction: CompassPrimary) -> bool {
        self.contains(direction.wall())
    }

    #[inline]
    pub fn is_open(self, direction: CompassPrimary) -> bool {
        !self.has_wall(direction)
    }

    /// Knock down the wall on one side.
    #[inline]
    pub fn open(self, direction: CompassPrimary) -> Walls {
        self.difference(direction.wall())
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    #[inline]
    pub fn wall(self) -> Walls {
        match self {
            CompassPrimary::North => Walls::NORTH,
            CompassPrimary::South => Walls::SOUTH,
            CompassPrimary::East => Walls::EAST,
            CompassPrimary::West => Walls::WEST,
        }
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn closed_is_31() {
        assert_eq!(Walls::CLOSED.bits(), 31);
        assert_eq!(Walls::default(), Walls::CLOSED);
    }

    #[test]
    fn opening_clears_only_one_bit() {
        let south_open = Walls::CLOSED.open(CompassPrimary::South);
        assert_eq!(south_open.bits(), 29);
        assert!(south_open.is_open(CompassPrimary::South));
        assert!(south_open.has_wall(CompassPrimary::East));
        assert!(south_open.has_wall(CompassPrimary::North));
        assert!(south_open.has_wall(CompassPrimary::West));

        let east_open = Walls::CLOSED.open(CompassPrimary::East);
        assert_eq!(east_open.bits(), 27);
        assert!(east_open.contains(Walls::VISITED));
    }

    #[test]
    fn opening_twice_is_idempotent() {
        let once = Walls::CLOSED.open(CompassPrimary::East);
        assert_eq!(once.open(CompassPrimary::East), once);
    }
}
