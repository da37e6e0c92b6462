use crate::core::Colour;

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - Doubles as the index of the piece's plane: white pawn..king then black pawn..king

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhitePawn, WhiteKnight, WhiteBishop, WhiteRook, WhiteQueen, WhiteKing,
    BlackPawn, BlackKnight, BlackBishop, BlackRook, BlackQueen, BlackKing,
}

impl Piece {
    /// Number of elements in the Piece enum
    pub const NUM: usize = 12;
}

crate::impl_from_to_primitive!(Piece);
crate::impl_enum_iter!(Piece);

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Piece {
    /// Returns the piece type of the piece
    #[inline]
    pub const fn pt(self) -> PieceType {
        // Safety: index % 6 is always a valid piece type
        unsafe { PieceType::from_unchecked(self as u8 % PieceType::NUM as u8) }
    }

    /// Returns the colour of the piece
    #[inline]
    pub const fn colour(self) -> Colour {
        // Safety: index / 6 is 0 or 1
        unsafe { Colour::from_unchecked(self as u8 / PieceType::NUM as u8) }
    }

    /// Combines a colour and piece type pair to create a piece
    #[inline]
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        // Safety: colour * 6 + pt is always in 0..12
        unsafe { Piece::from_unchecked(colour as u8 * PieceType::NUM as u8 + piece_type as u8) }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// Board-diagram characters, indexed by piece
const PIECE_STR: &[u8; Piece::NUM] = b"PNBRQKpnbrqk";

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PIECE_STR[self.index()] as char)
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PIECE_STR[self.index()].to_ascii_lowercase() as char)
    }
}
