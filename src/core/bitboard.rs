use std::fmt;

use super::{Direction, File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// A 64-bit set of squares. Bit `i` is set when the fact the board encodes
/// (occupancy, attack reachability, ...) holds for square `i`, from A1 (LSB)
/// to H8 (MSB).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);

/******************************************\
|==========================================|
|           Bitboard Constants             |
|==========================================|
\******************************************/

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!0);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    /// Every file except A
    pub const NOT_A_FILE: Bitboard = Bitboard(0xFEFE_FEFE_FEFE_FEFE);
    /// Every file except H
    pub const NOT_H_FILE: Bitboard = Bitboard(0x7F7F_7F7F_7F7F_7F7F);
    /// Every file except A and B
    pub const NOT_AB_FILE: Bitboard = Bitboard(0xFCFC_FCFC_FCFC_FCFC);
    /// Every file except G and H
    pub const NOT_GH_FILE: Bitboard = Bitboard(0x3F3F_3F3F_3F3F_3F3F);
    /// Every rank except the first
    pub const NOT_1ST_RANK: Bitboard = Bitboard(0xFFFF_FFFF_FFFF_FF00);
    /// Every rank except the eighth
    pub const NOT_8TH_RANK: Bitboard = Bitboard(0x00FF_FFFF_FFFF_FFFF);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(1u64 << *self as u8)
    }
}

impl Rank {
    /// Converts a `Rank` into a `Bitboard` with all squares on that rank set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_1.0 << (8 * *self as u8))
    }
}

impl File {
    /// Converts a `File` into a `Bitboard` with all squares on that file set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for square in squares {
            bb.set(square);
        }
        bb
    }
}

/******************************************\
|==========================================|
|              Bit Primitives              |
|==========================================|
\******************************************/

impl Bitboard {
    /// Counts the number of set bits (population count) in the bitboard.
    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    /// Square of the least significant set bit, or `None` when empty.
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            // Safety: trailing_zeros of a non-zero u64 is in 0..64
            bits => Some(unsafe { Square::from_unchecked(bits.trailing_zeros() as u8) }),
        }
    }

    /// Removes the least significant set bit and returns its square, or `None`
    /// when the bitboard was already empty.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        lsb
    }

    /// Checks if the bitboard is empty (no bits set).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the bitboard has at least one bit set.
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    /// Checks if more than one bit is set in the bitboard.
    #[inline]
    pub const fn more_than_one(&self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    /// Checks if the bit corresponding to the given `Square` is set.
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & square.bb().0 != 0
    }

    /// Sets the bit corresponding to the given `Square`.
    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= square.bb().0;
    }

    /// Clears the bit corresponding to the given `Square`.
    #[inline]
    pub const fn clear(&mut self, square: Square) {
        self.0 &= !square.bb().0;
    }

    /// Toggles the bit corresponding to the given `Square`.
    #[inline]
    pub const fn toggle(&mut self, square: Square) {
        self.0 ^= square.bb().0;
    }

    /// Shifts every set bit one step in `dir`. Bits that would leave the board or
    /// wrap around the a/h files are dropped.
    #[inline]
    pub const fn shift(&self, dir: Direction) -> Bitboard {
        let bb = self.0 & Self::avoid_wrap(dir).0;
        let shift = dir as i8;

        if shift >= 0 {
            Bitboard(bb << shift as u32)
        } else {
            Bitboard(bb >> (-shift) as u32)
        }
    }

    /// Squares allowed to move in `dir`: the not-file/not-rank masks that stop a
    /// shift from wrapping.
    const fn avoid_wrap(dir: Direction) -> Bitboard {
        use Direction::*;
        let bb = match dir {
            N => Self::NOT_8TH_RANK.0,
            S => Self::NOT_1ST_RANK.0,
            E => Self::NOT_H_FILE.0,
            W => Self::NOT_A_FILE.0,

            NE => Self::NOT_8TH_RANK.0 & Self::NOT_H_FILE.0,
            NW => Self::NOT_8TH_RANK.0 & Self::NOT_A_FILE.0,
            SE => Self::NOT_1ST_RANK.0 & Self::NOT_H_FILE.0,
            SW => Self::NOT_1ST_RANK.0 & Self::NOT_A_FILE.0,

            // Rank overflow is dropped by the shift itself
            NNE | SSE => Self::NOT_H_FILE.0,
            NNW | SSW => Self::NOT_A_FILE.0,
            NEE | SEE => Self::NOT_GH_FILE.0,
            NWW | SWW => Self::NOT_AB_FILE.0,

            NN | SS => Self::FULL.0,
        };
        Bitboard(bb)
    }
}

/// Iterates the set squares, lowest first, consuming a copy of the bitboard.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count_bits() as usize;
        (n, Some(n))
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{SEPARATOR}")?;

        for rank in Rank::iter().rev() {
            write!(f, " {rank}   |")?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = if self.contains(square) { " 1 " } else { "   " };
                write!(f, "{cell}|")?;
            }

            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Bitboard: {:#x}", self.0)
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
    fn test_lsb() {
        assert_eq!(Square::A1.bb().lsb(), Some(Square::A1));
        assert_eq!(Square::H8.bb().lsb(), Some(Square::H8));
        assert_eq!((Square::C3.bb() | Square::F7.bb()).lsb(), Some(Square::C3));
        assert_eq!(Bitboard::EMPTY.lsb(), None);
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb = Square::E4.bb() | Square::A1.bb();
        assert_eq!(bb.pop_lsb(), Some(Square::A1));
        assert_eq!(bb.pop_lsb(), Some(Square::E4));
        assert_eq!(bb.pop_lsb(), None);
        assert_eq!(bb.pop_lsb(), None);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_count_bits() {
        assert_eq!(Bitboard::EMPTY.count_bits(), 0);
        assert_eq!(Square::E4.bb().count_bits(), 1);

        let multi = Square::E4.bb() | Square::D5.bb() | Square::A1.bb();
        assert_eq!(multi.count_bits(), 3);
        assert_eq!(Bitboard::FULL.count_bits(), 64);
    }

    #[test]
    fn test_set_clear_toggle() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::E4);
        assert!(bb.contains(Square::E4));
        assert!(!bb.contains(Square::A1));

        bb.clear(Square::E4);
        assert!(!bb.contains(Square::E4));

        bb.toggle(Square::D5);
        assert!(bb.contains(Square::D5));
        bb.toggle(Square::D5);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let bb = Bitboard::from([Square::H8, Square::E4, Square::A1]);

        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::H8]);

        let mut visited = Vec::new();
        bb.for_each(|sq| visited.push(sq));
        assert_eq!(visited, squares);
    }

    #[test]
    fn test_masks() {
        assert_eq!(!Bitboard::FILE_A, Bitboard::NOT_A_FILE);
        assert_eq!(!Bitboard::FILE_H, Bitboard::NOT_H_FILE);
        assert_eq!(!Bitboard::RANK_1, Bitboard::NOT_1ST_RANK);
        assert_eq!(!Bitboard::RANK_8, Bitboard::NOT_8TH_RANK);
        assert_eq!(File::FileA.bb(), Bitboard::FILE_A);
        assert_eq!(Rank::Rank7.bb(), Bitboard::RANK_7);
    }

    #[test]
    fn test_shift_basic_directions() {
        let bb = Square::E5.bb();

        assert_eq!(bb.shift(Direction::N), Square::E6.bb());
        assert_eq!(bb.shift(Direction::S), Square::E4.bb());
        assert_eq!(bb.shift(Direction::E), Square::F5.bb());
        assert_eq!(bb.shift(Direction::W), Square::D5.bb());

        assert_eq!(bb.shift(Direction::NE), Square::F6.bb());
        assert_eq!(bb.shift(Direction::NW), Square::D6.bb());
        assert_eq!(bb.shift(Direction::SE), Square::F4.bb());
        assert_eq!(bb.shift(Direction::SW), Square::D4.bb());

        assert_eq!(bb.shift(Direction::NN), Square::E7.bb());
        assert_eq!(bb.shift(Direction::SS), Square::E3.bb());

        assert_eq!(bb.shift(Direction::NNE), Square::F7.bb());
        assert_eq!(bb.shift(Direction::NNW), Square::D7.bb());
        assert_eq!(bb.shift(Direction::NEE), Square::G6.bb());
        assert_eq!(bb.shift(Direction::NWW), Square::C6.bb());
        assert_eq!(bb.shift(Direction::SEE), Square::G4.bb());
        assert_eq!(bb.shift(Direction::SWW), Square::C4.bb());
        assert_eq!(bb.shift(Direction::SSE), Square::F3.bb());
        assert_eq!(bb.shift(Direction::SSW), Square::D3.bb());
    }

    #[test]
    fn test_shift_edge_cases() {
        let h5 = Square::H5.bb();
        assert_eq!(h5.shift(Direction::E), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::NE), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::SE), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::W), Square::G5.bb());

        let a5 = Square::A5.bb();
        assert_eq!(a5.shift(Direction::W), Bitboard::EMPTY);
        assert_eq!(a5.shift(Direction::NW), Bitboard::EMPTY);
        assert_eq!(a5.shift(Direction::SW), Bitboard::EMPTY);

        assert_eq!(Square::E8.bb().shift(Direction::N), Bitboard::EMPTY);
        assert_eq!(Square::E1.bb().shift(Direction::S), Bitboard::EMPTY);
        assert_eq!(Square::E7.bb().shift(Direction::NN), Bitboard::EMPTY);

        assert_eq!(Square::G5.bb().shift(Direction::NEE), Bitboard::EMPTY);
        assert_eq!(Square::B5.bb().shift(Direction::SWW), Bitboard::EMPTY);
        assert_eq!(Square::H2.bb().shift(Direction::NNE), Bitboard::EMPTY);
    }

    #[test]
    fn test_shift_matches_square_add() {
        use Direction::*;

        let directions = [N, S, E, W, NE, NW, SE, SW, NNE, NNW, NEE, NWW, SSE, SSW, SEE, SWW];

        for dir in directions {
            for sq in Square::iter() {
                let expected = sq.add(dir).map(|to| to.bb()).unwrap_or(Bitboard::EMPTY);
                assert_eq!(sq.bb().shift(dir), expected, "{sq} {dir:?}");
            }
        }
    }
}
