pub mod mask;
pub mod movegen;
pub mod movement;

pub use movement::apply_move;

use crate::core::*;

/******************************************\
|==========================================|
|               Piece Planes               |
|==========================================|
\******************************************/

/// # Piece planes
///
/// One bitboard per [`Piece`] (white pawn..king, black pawn..king) plus the
/// per-colour and all-occupied aggregates. The aggregates are only ever
/// changed together with a piece plane, so they always equal the union of
/// the planes they cover.
///
/// The struct is a plain array of integers and is `Copy`, which is what the
/// legality filter relies on to test each candidate move on a throwaway copy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePlanes {
    pieces: [Bitboard; Piece::NUM],

    occupied: [Bitboard; Colour::NUM],

    all: Bitboard,
}

impl PiecePlanes {
    /// Planes with no pieces on them
    pub const EMPTY: PiecePlanes = PiecePlanes {
        pieces: [Bitboard::EMPTY; Piece::NUM],
        occupied: [Bitboard::EMPTY; Colour::NUM],
        all: Bitboard::EMPTY,
    };

    /// Flips `square` in the plane of `piece` and in both aggregates.
    ///
    /// Placing and removing are the same operation; callers must only toggle
    /// a piece on where the square is empty and off where that piece stands.
    #[inline]
    pub fn toggle(&mut self, piece: Piece, square: Square) {
        let bb = square.bb();
        self.pieces[piece.index()] ^= bb;
        self.occupied[piece.colour().index()] ^= bb;
        self.all ^= bb;
    }

    /// Bitboard of a single piece plane
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Bitboard of `piece_type` pieces of colour `col`
    #[inline]
    pub fn piece_bb(&self, col: Colour, piece_type: PieceType) -> Bitboard {
        self.pieces(Piece::from_parts(col, piece_type))
    }

    /// All squares occupied by `col`
    #[inline]
    pub fn colour_bb(&self, col: Colour) -> Bitboard {
        self.occupied[col.index()]
    }

    /// All occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.all
    }

    /// The piece standing on `square`, if any
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        if !self.all.contains(square) {
            return None;
        }

        Piece::iter().find(|&piece| self.pieces(piece).contains(square))
    }

    /// Square of `col`'s king. `None` only for positions with no king of that colour.
    #[inline]
    pub fn king_square(&self, col: Colour) -> Option<Square> {
        self.piece_bb(col, PieceType::King).lsb()
    }

    /// Checks that no square is set in two piece planes and that every
    /// aggregate equals the union of its planes.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        let mut by_colour = [Bitboard::EMPTY; Colour::NUM];

        for piece in Piece::iter() {
            let bb = self.pieces(piece);

            if (seen & bb).is_occupied() {
                return false;
            }

            seen |= bb;
            by_colour[piece.colour().index()] |= bb;
        }

        by_colour == self.occupied && seen == self.all
    }
}

/******************************************\
|==========================================|
|                 Position                 |
|==========================================|
\******************************************/

/// # Position
///
/// Piece planes together with the side to move, the castling rights and the
/// en passant target (the square a capturing pawn lands on, directly behind
/// a pawn that just made a double push).
///
/// Move counters and history belong to whoever owns the game and are not
/// tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    planes: PiecePlanes,

    side_to_move: Colour,

    castling: Castling,

    en_passant: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// An empty board, white to move, no castling rights, no en passant target
    pub const fn empty() -> Self {
        Self {
            planes: PiecePlanes::EMPTY,
            side_to_move: Colour::White,
            castling: Castling::NONE,
            en_passant: None,
        }
    }

    /// The standard initial position
    pub fn startpos() -> Self {
        use PieceType::*;

        const BACK_RANK: [PieceType; File::NUM] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut pos = Self::empty().with_castling(Castling::ALL);

        for col in Colour::iter() {
            for file in File::iter() {
                let back = Square::from_parts(file, Rank::Rank1.relative(col));
                let pawn = Square::from_parts(file, Rank::Rank2.relative(col));

                pos.planes.toggle(Piece::from_parts(col, BACK_RANK[file.index()]), back);
                pos.planes.toggle(Piece::from_parts(col, Pawn), pawn);
            }
        }

        pos
    }

    /// Places `piece` on an empty `square`
    pub fn put(mut self, piece: Piece, square: Square) -> Self {
        debug_assert!(
            !self.planes.occupied().contains(square),
            "put: {square} is already occupied"
        );
        self.planes.toggle(piece, square);
        self
    }

    pub fn with_side_to_move(mut self, col: Colour) -> Self {
        self.side_to_move = col;
        self
    }

    pub fn with_castling(mut self, castling: Castling) -> Self {
        self.castling = castling;
        self
    }

    pub fn with_en_passant(mut self, square: Option<Square>) -> Self {
        self.en_passant = square;
        self
    }

    #[inline]
    pub fn planes(&self) -> &PiecePlanes {
        &self.planes
    }

    #[inline]
    pub(crate) fn planes_mut(&mut self) -> &mut PiecePlanes {
        &mut self.planes
    }

    #[inline]
    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> Castling {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.planes.piece_on(square)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for PiecePlanes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{SEPARATOR}")?;

        for rank in Rank::iter().rev() {
            write!(f, " {rank}   |")?;

            for file in File::iter() {
                match self.piece_on(Square::from_parts(file, rank)) {
                    Some(piece) => write!(f, " {piece} |")?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.planes)?;
        writeln!(f)?;
        writeln!(f, "Current Side: {:?}", self.side_to_move)?;
        writeln!(f, "Castling: {}", self.castling)?;
        writeln!(
            f,
            "En Passant Square: {}",
            match self.en_passant {
                Some(square) => square.to_string(),
                None => "None".to_string(),
            }
        )
    }
}

/******************************************\
|==========================================|
|               Test Helpers               |
|==========================================|
\******************************************/

#[cfg(test)]
impl Position {
    /// Builds the piece placement from an 8x8 diagram, rank 8 first, using
    /// `PNBRQK`/`pnbrqk` for pieces and `.` for empty squares. Whitespace is ignored.
    pub(crate) fn from_diagram(diagram: &str) -> Self {
        let cells: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), Square::NUM, "diagram must have 64 cells");

        let mut pos = Self::empty();

        for (i, c) in cells.into_iter().enumerate() {
            let rank = Rank::iter().rev().nth(i / 8).unwrap();
            let file = File::iter().nth(i % 8).unwrap();
            let square = Square::from_parts(file, rank);

            let piece_type = match c.to_ascii_lowercase() {
                '.' => continue,
                'p' => PieceType::Pawn,
                'n' => PieceType::Knight,
                'b' => PieceType::Bishop,
                'r' => PieceType::Rook,
                'q' => PieceType::Queen,
                'k' => PieceType::King,
                _ => panic!("unexpected diagram cell {c:?}"),
            };
            let col = if c.is_ascii_uppercase() { Colour::White } else { Colour::Black };

            pos = pos.put(Piece::from_parts(col, piece_type), square);
        }

        pos
    }
}
