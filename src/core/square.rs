use super::errors::{SquareAddError, SquareError};
use super::types::{Colour, Direction};

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Little-endian rank-major indexing: a1 = 0, b1 = 1, ..., h8 = 63

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Returns the rank of a square
    #[inline]
    pub const fn rank(&self) -> Rank {
        // Safety: a square index shifted right by 3 is always in 0..8
        unsafe { Rank::from_unchecked((*self as u8) >> 3) }
    }

    /// Returns the file of a square
    #[inline]
    pub const fn file(&self) -> File {
        // Safety: the low three bits are always in 0..8
        unsafe { File::from_unchecked((*self as u8) & 0b111) }
    }

    /// Combines a pair of file and rank to create a square
    #[inline]
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        // Safety: rank * 8 + file is always in 0..64
        unsafe { Self::from_unchecked(((rank as u8) << 3) + file as u8) }
    }

    /// Flips the rank of a square, switching perspective between white and black
    #[inline]
    pub const fn flip_rank(&self) -> Self {
        // Safety: xor with 56 keeps the index in 0..64
        unsafe { Self::from_unchecked((*self as u8) ^ Square::A8 as u8) }
    }

    /// Returns the square seen from `col`'s side of the board
    ///
    /// ```text
    /// E2.relative(White) == E2
    /// E2.relative(Black) == E7
    /// ```
    #[inline]
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::White => *self,
            Colour::Black => self.flip_rank(),
        }
    }

    /// Steps one `Direction` away, failing if that leaves the board (including
    /// wrapping around the a/h files).
    #[inline]
    pub const fn add(self, dir: Direction) -> Result<Self, SquareAddError> {
        let file = self.file() as i8 + dir.file_delta();
        let rank = self.rank() as i8 + dir.rank_delta();

        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return Err(SquareAddError::OutOfBounds);
        }

        // Safety: both coordinates were bounds-checked above
        Ok(unsafe { Self::from_unchecked((rank * 8 + file) as u8) })
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < Square::NUM {
            // Safety: bounds checked above
            Ok(unsafe { Square::from_unchecked(index) })
        } else {
            Err(SquareError::OutOfRange(index))
        }
    }
}

impl Rank {
    /// Returns the rank seen from `col`'s side of the board
    #[inline]
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::White => *self,
            // Safety: 7 - r stays in 0..8
            Colour::Black => unsafe { Self::from_unchecked(7 - (*self as u8)) },
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_indexing_is_little_endian_rank_major() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::B1.index(), 1);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A2.index(), 8);
        assert_eq!(Square::H8.index(), 63);
    }

    #[test]
    fn test_square_from_parts() {
        assert_eq!(Square::from_parts(File::FileA, Rank::Rank1), Square::A1);
        assert_eq!(Square::from_parts(File::FileE, Rank::Rank4), Square::E4);
        assert_eq!(Square::from_parts(File::FileH, Rank::Rank8), Square::H8);
    }

    #[test]
    fn test_square_conversions() {
        for file in File::iter() {
            for rank in Rank::iter() {
                let square = Square::from_parts(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_relative() {
        assert_eq!(Square::E2.relative(Colour::White), Square::E2);
        assert_eq!(Square::E2.relative(Colour::Black), Square::E7);
        assert_eq!(Rank::Rank2.relative(Colour::Black), Rank::Rank7);
        assert_eq!(Rank::Rank8.relative(Colour::White), Rank::Rank8);
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Square::try_from(0u8), Ok(Square::A1));
        assert_eq!(Square::try_from(36u8), Ok(Square::E5));
        assert_eq!(Square::try_from(63u8), Ok(Square::H8));
        assert_eq!(Square::try_from(64u8), Err(SquareError::OutOfRange(64)));
    }

    #[test]
    fn test_square_add() {
        assert_eq!(Square::E4.add(Direction::N), Ok(Square::E5));
        assert_eq!(Square::E4.add(Direction::SW), Ok(Square::D3));
        assert_eq!(Square::E4.add(Direction::NNE), Ok(Square::F6));
        assert_eq!(Square::H4.add(Direction::E), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::A4.add(Direction::NW), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::E8.add(Direction::N), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::G5.add(Direction::NEE), Err(SquareAddError::OutOfBounds));
    }

    #[test]
    fn test_square_add_round_trip() {
        use Direction::*;

        let directions = [N, S, E, W, NE, NW, SE, SW, NNE, NNW, NEE, NWW, SSE, SSW, SEE, SWW];

        for dir in directions {
            for sq in Square::iter() {
                if let Ok(next) = sq.add(dir) {
                    assert_eq!(next.add(-dir), Ok(sq), "{sq} {dir:?}");
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::H8.to_string(), "h8");
    }
}
