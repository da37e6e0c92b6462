use super::Square;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

impl Colour {
    /// Returns the forward direction for a colour
    #[inline]
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// The eight king steps plus the eight knight jumps and the pawn double step.
/// The discriminant is the change in square index.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SEE = -6, SWW = -10, SSE = -15, SSW = -17,
    NN = 16, SS = -16,
}

impl Direction {
    /// Change in file when stepping in this direction
    #[inline]
    pub const fn file_delta(self) -> i8 {
        use Direction::*;
        match self {
            N | S | NN | SS => 0,
            E | NE | SE | NNE | SSE => 1,
            W | NW | SW | NNW | SSW => -1,
            NEE | SEE => 2,
            NWW | SWW => -2,
        }
    }

    /// Change in rank when stepping in this direction
    #[inline]
    pub const fn rank_delta(self) -> i8 {
        (self as i8 - self.file_delta()) / 8
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Negate the direction (N => S, etc...)
    fn neg(self) -> Self::Output {
        use Direction::*;
        match self {
            N => S,
            S => N,
            E => W,
            W => E,
            NE => SW,
            SW => NE,
            NW => SE,
            SE => NW,
            NNE => SSW,
            SSW => NNE,
            NNW => SSE,
            SSE => NNW,
            NEE => SWW,
            SWW => NEE,
            NWW => SEE,
            SEE => NWW,
            NN => SS,
            SS => NN,
        }
    }
}

/******************************************\
|==========================================|
|                 Castling                 |
|==========================================|
\******************************************/

/// # Castling Representation
///
/// A 4-bit set over {White-short, White-long, Black-short, Black-long}.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castling(pub u8);

crate::impl_bit_ops!(Castling, 0x0F);

impl Default for Castling {
    fn default() -> Self {
        Castling::ALL
    }
}

impl Castling {
    // Atomic castling rights
    pub const WK: Castling = Castling(1);
    pub const WQ: Castling = Castling(2);
    pub const BK: Castling = Castling(4);
    pub const BQ: Castling = Castling(8);
    // Per-colour castling rights
    pub const WHITE_CASTLING: Castling = Castling(3);
    pub const BLACK_CASTLING: Castling = Castling(12);
    // All or nothing castling rights
    pub const ALL: Castling = Castling(15);
    pub const NONE: Castling = Castling(0);

    /// Checks whether any of the rights in `right` are held
    #[inline]
    pub const fn has(self, right: Castling) -> bool {
        self.0 & right.0 != 0
    }

    /// Grants the rights in `right`
    #[inline]
    pub fn set(&mut self, right: Castling) {
        *self |= right;
    }

    /// Removes the rights in `right`
    #[inline]
    pub fn remove(&mut self, right: Castling) {
        *self &= !right;
    }

    /// Keeps only the rights also present in `mask`
    #[inline]
    pub fn mask(&mut self, mask: Castling) {
        self.0 &= mask.0;
    }

    /// Get the king side castling right for a colour
    #[inline]
    pub const fn king_side(colour: Colour) -> Self {
        match colour {
            Colour::White => Castling::WK,
            Colour::Black => Castling::BK,
        }
    }

    /// Get the queen side castling right for a colour
    #[inline]
    pub const fn queen_side(colour: Colour) -> Self {
        match colour {
            Colour::White => Castling::WQ,
            Colour::Black => Castling::BQ,
        }
    }

    /// Both castling rights of a colour
    #[inline]
    pub const fn colour(colour: Colour) -> Self {
        match colour {
            Colour::White => Castling::WHITE_CASTLING,
            Colour::Black => Castling::BLACK_CASTLING,
        }
    }

    /// Where the king lands when exercising this (single) right
    #[inline]
    pub const fn king_dest(self) -> Option<Square> {
        match self {
            Castling::WK => Some(Square::G1),
            Castling::WQ => Some(Square::C1),
            Castling::BK => Some(Square::G8),
            Castling::BQ => Some(Square::C8),
            _ => None,
        }
    }
}

impl std::fmt::Display for Castling {
    /// Displays castling right in the `KQkq` format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }

        for (right, c) in [
            (Castling::WK, 'K'),
            (Castling::WQ, 'Q'),
            (Castling::BK, 'k'),
            (Castling::BQ, 'q'),
        ] {
            if self.has(right) {
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::N.rank_delta(), 1);
        assert_eq!(Direction::N.file_delta(), 0);
        assert_eq!(Direction::SW.rank_delta(), -1);
        assert_eq!(Direction::SW.file_delta(), -1);
        assert_eq!(Direction::NWW.rank_delta(), 1);
        assert_eq!(Direction::NWW.file_delta(), -2);
        assert_eq!(Direction::SSE.rank_delta(), -2);
        assert_eq!(Direction::SSE.file_delta(), 1);
        assert_eq!(Direction::SS.rank_delta(), -2);
    }

    #[test]
    fn test_colour_not() {
        assert_eq!(!Colour::White, Colour::Black);
        assert_eq!(!Colour::Black, Colour::White);
    }

    #[test]
    fn test_castling_bitwise_operations() {
        let all = Castling::ALL;
        let none = Castling::NONE;
        let wk = Castling::WK;
        let bq = Castling::BQ;

        assert_eq!(all & wk, wk);
        assert_eq!(none & all, none);
        assert_eq!(wk | bq, Castling(9));
        assert_eq!(all ^ all, none);

        assert_eq!(!none, all);
        assert_eq!(!all, none);
        assert_eq!(!wk, Castling(14));
    }

    #[test]
    fn test_castling_helper_methods() {
        let mut castling = Castling::ALL;

        castling.remove(Castling::WK);
        assert!(!castling.has(Castling::WK));
        assert!(castling.has(Castling::WQ));
        assert!(castling.has(Castling::BK));
        assert!(castling.has(Castling::BQ));

        castling = Castling::NONE;
        castling.set(Castling::colour(Colour::White));
        assert!(castling.has(Castling::WK));
        assert!(castling.has(Castling::WQ));
        assert!(!castling.has(Castling::BLACK_CASTLING));

        castling.mask(Castling::WQ | Castling::BK);
        assert_eq!(castling, Castling::WQ);
    }

    #[test]
    fn test_castling_king_dest() {
        assert_eq!(Castling::WK.king_dest(), Some(Square::G1));
        assert_eq!(Castling::BQ.king_dest(), Some(Square::C8));
        assert_eq!(Castling::ALL.king_dest(), None);
    }

    #[test]
    fn test_castling_display() {
        assert_eq!(Castling::ALL.to_string(), "KQkq");
        assert_eq!((Castling::WK | Castling::BQ).to_string(), "Kq");
        assert_eq!(Castling::NONE.to_string(), "-");
    }
}
