use crate::core::*;

/******************************************\
|==========================================|
|              Castling Mask               |
|==========================================|
\******************************************/

/// Castling rights that survive a move touching `square`, as origin or destination.
///
/// Moving the king off e1/e8 drops both rights of that colour; anything leaving or
/// landing on a rook corner drops the right tied to that corner.
#[inline]
pub const fn castling_rights_mask(square: Square) -> Castling {
    match square {
        Square::A1 => Castling(Castling::ALL.0 & !Castling::WQ.0),
        Square::E1 => Castling(Castling::ALL.0 & !Castling::WHITE_CASTLING.0),
        Square::H1 => Castling(Castling::ALL.0 & !Castling::WK.0),
        Square::A8 => Castling(Castling::ALL.0 & !Castling::BQ.0),
        Square::E8 => Castling(Castling::ALL.0 & !Castling::BLACK_CASTLING.0),
        Square::H8 => Castling(Castling::ALL.0 & !Castling::BK.0),
        _ => Castling::ALL,
    }
}

/******************************************\
|==========================================|
|              Castling Paths              |
|==========================================|
\******************************************/

/// Geometry of one castling right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub right: Castling,

    pub king_from: Square,

    pub king_to: Square,

    pub rook_from: Square,

    pub rook_to: Square,

    /// Squares strictly between king and rook; all must be empty
    pub empty: Bitboard,

    /// Squares the king starts on, crosses and lands on; none may be attacked
    pub safe: Bitboard,
}

#[rustfmt::skip]
pub const CASTLING_PATHS: [CastlingPath; 4] = [
    CastlingPath {
        right: Castling::WK,
        king_from: Square::E1, king_to: Square::G1,
        rook_from: Square::H1, rook_to: Square::F1,
        empty: Bitboard(0x0000_0000_0000_0060),
        safe: Bitboard(0x0000_0000_0000_0070),
    },
    CastlingPath {
        right: Castling::WQ,
        king_from: Square::E1, king_to: Square::C1,
        rook_from: Square::A1, rook_to: Square::D1,
        empty: Bitboard(0x0000_0000_0000_000E),
        safe: Bitboard(0x0000_0000_0000_001C),
    },
    CastlingPath {
        right: Castling::BK,
        king_from: Square::E8, king_to: Square::G8,
        rook_from: Square::H8, rook_to: Square::F8,
        empty: Bitboard(0x6000_0000_0000_0000),
        safe: Bitboard(0x7000_0000_0000_0000),
    },
    CastlingPath {
        right: Castling::BQ,
        king_from: Square::E8, king_to: Square::C8,
        rook_from: Square::A8, rook_to: Square::D8,
        empty: Bitboard(0x0E00_0000_0000_0000),
        safe: Bitboard(0x1C00_0000_0000_0000),
    },
];

impl CastlingPath {
    /// The two paths available to `col`, king side first
    #[inline]
    pub fn for_colour(col: Colour) -> &'static [CastlingPath] {
        match col {
            Colour::White => &CASTLING_PATHS[0..2],
            Colour::Black => &CASTLING_PATHS[2..4],
        }
    }

    /// The path whose king lands on `king_to`
    #[inline]
    pub fn by_king_dest(king_to: Square) -> Option<&'static CastlingPath> {
        CASTLING_PATHS.iter().find(|path| path.king_to == king_to)
    }
}
