use crate::core::*;

/******************************************\
|==========================================|
|                Move Kind                 |
|==========================================|
\******************************************/

/// # Move kind
///
/// Two-bit tag stored in the top of a [`Move`]. Captures are not tagged: the
/// applier infers them from what stands on the destination square.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal = 0b00,
    Promotion = 0b01,
    EnPassant = 0b10,
    Castling = 0b11,
}

impl MoveKind {
    /// Number of elements in the MoveKind enum
    pub const NUM: usize = 4;
}

crate::impl_from_to_primitive!(MoveKind);

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// # Move
///
/// Packed 16 bit move:
///
/// ```text
/// 15 14 | 13 12 | 11 ... 6 | 5 ... 0
/// kind  | promo |   from   |   to
/// ```
///
/// The promotion selector is only meaningful for [`MoveKind::Promotion`] and is
/// zero otherwise, so two moves with equal fields always compare equal.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Move {
    data: u16,
}

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl Move {
    const TO_SHIFT: u16 = 0;

    const FROM_SHIFT: u16 = 6;

    const PROMO_SHIFT: u16 = 12;

    const KIND_SHIFT: u16 = 14;

    const SQUARE_MASK: u16 = 0x3F;

    const TWO_BIT_MASK: u16 = 0x3;

    /// Placeholder move (a1 to a1), never generated
    pub const NONE: Self = Self::new(Square::A1, Square::A1, MoveKind::Normal);

    /// Creates a non-promotion move of the given kind
    #[inline(always)]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        debug_assert!(!matches!(kind, MoveKind::Promotion));

        let data = ((to as u16) << Self::TO_SHIFT)
            | ((from as u16) << Self::FROM_SHIFT)
            | ((kind as u16) << Self::KIND_SHIFT);

        Self { data }
    }

    /// Creates a promotion to `piece_type`, which must be a knight, bishop, rook or queen
    #[inline(always)]
    pub const fn new_promotion(from: Square, to: Square, piece_type: PieceType) -> Self {
        let promo = match piece_type {
            PieceType::Knight => 0,
            PieceType::Bishop => 1,
            PieceType::Rook => 2,
            PieceType::Queen => 3,
            _ => panic!("Invalid promotion piece type!"),
        };

        let data = ((to as u16) << Self::TO_SHIFT)
            | ((from as u16) << Self::FROM_SHIFT)
            | (promo << Self::PROMO_SHIFT)
            | ((MoveKind::Promotion as u16) << Self::KIND_SHIFT);

        Self { data }
    }

    /// Raw 16 bit encoding
    #[inline(always)]
    pub const fn raw(&self) -> u16 {
        self.data
    }

    #[inline(always)]
    pub const fn from(&self) -> Square {
        // Safety: six bits always decode to a valid square
        unsafe { Square::from_unchecked(((self.data >> Self::FROM_SHIFT) & Self::SQUARE_MASK) as u8) }
    }

    #[inline(always)]
    pub const fn to(&self) -> Square {
        // Safety: six bits always decode to a valid square
        unsafe { Square::from_unchecked(((self.data >> Self::TO_SHIFT) & Self::SQUARE_MASK) as u8) }
    }

    #[inline(always)]
    pub const fn kind(&self) -> MoveKind {
        // Safety: two bits always decode to a valid kind
        unsafe { MoveKind::from_unchecked(((self.data >> Self::KIND_SHIFT) & Self::TWO_BIT_MASK) as u8) }
    }

    #[inline(always)]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind(), MoveKind::Promotion)
    }

    /// Piece type selected by the promotion field. Only meaningful for promotions.
    #[inline(always)]
    pub const fn promotion_pt(&self) -> PieceType {
        // Knight..Queen are contiguous starting at 1
        let promo = ((self.data >> Self::PROMO_SHIFT) & Self::TWO_BIT_MASK) as u8;
        // Safety: 1 + (0..4) is always a valid piece type
        unsafe { PieceType::from_unchecked(PieceType::Knight as u8 + promo) }
    }
}

impl std::fmt::Display for Move {
    /// Long algebraic form, e.g. `e2e4`, `e7e8q`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;

        if self.is_promotion() {
            write!(f, "{}", self.promotion_pt())?;
        }

        Ok(())
    }
}
