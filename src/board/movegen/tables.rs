use std::sync::LazyLock;

use super::leapers::LeaperTables;
use super::magic::{Slider, SliderTable};
use crate::core::*;

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

/// # Attack Tables
///
/// Every lookup move generation needs: pawn (per colour), knight and king
/// attacks per square, and the magic-hashed bishop and rook tables.
///
/// Built once and read-only afterwards, so a shared reference can be used
/// from any number of threads. Either own one via [`AttackTables::new`] or
/// borrow the process-wide instance from [`init_attack_tables`].
#[derive(Debug, Clone)]
pub struct AttackTables {
    leapers: LeaperTables,

    bishop: SliderTable,

    rook: SliderTable,
}

static ATTACK_TABLES: LazyLock<AttackTables> = LazyLock::new(AttackTables::new);

/// Returns the process-wide tables, building them on first use.
///
/// Concurrent first calls block until the single build finishes; every call
/// returns the same instance.
pub fn init_attack_tables() -> &'static AttackTables {
    &ATTACK_TABLES
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}

impl AttackTables {
    /// Builds all tables from the fixed magic numbers
    pub fn new() -> Self {
        Self {
            leapers: LeaperTables::new(),
            bishop: SliderTable::new(Slider::Bishop),
            rook: SliderTable::new(Slider::Rook),
        }
    }

    /// Squares a pawn of colour `col` on `sq` attacks
    #[inline]
    pub fn pawn_attacks(&self, col: Colour, sq: Square) -> Bitboard {
        self.leapers.pawn[col.index()][sq.index()]
    }

    #[inline]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.leapers.knight[sq.index()]
    }

    #[inline]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.leapers.king[sq.index()]
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop.attacks(sq, occ)
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.rook.attacks(sq, occ)
    }

    #[inline]
    pub fn queen_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occ) | self.rook_attacks(sq, occ)
    }

    /// Attacks of a knight, bishop, rook, queen or king on `sq`.
    /// Pawns are colour dependent and go through [`AttackTables::pawn_attacks`].
    #[inline]
    pub fn attacks(&self, pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
        debug_assert!(pt != PieceType::Pawn, "pawn attacks depend on colour");

        match pt {
            PieceType::Knight => self.knight_attacks(sq),
            PieceType::Bishop => self.bishop_attacks(sq, occ),
            PieceType::Rook => self.rook_attacks(sq, occ),
            PieceType::Queen => self.queen_attacks(sq, occ),
            PieceType::King => self.king_attacks(sq),
            PieceType::Pawn => Bitboard::EMPTY,
        }
    }
}
