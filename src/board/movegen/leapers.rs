use crate::core::*;

/******************************************\
|==========================================|
|              Leaper Attacks              |
|==========================================|
\******************************************/

// Set-wise attacks for the non-sliding pieces. Every function takes a whole
// bitboard, so the same code fills the per-square tables and computes the
// attacked set of all pawns/knights of one colour at once.

/// Squares attacked by pawns of colour `col` standing on `pawns`
#[inline]
pub const fn pawn_attacks_bb(col: Colour, pawns: Bitboard) -> Bitboard {
    use Direction::*;
    match col {
        Colour::White => Bitboard(pawns.shift(NE).0 | pawns.shift(NW).0),
        Colour::Black => Bitboard(pawns.shift(SE).0 | pawns.shift(SW).0),
    }
}

/// Squares attacked by knights standing on `knights`
#[inline]
pub const fn knight_attacks_bb(knights: Bitboard) -> Bitboard {
    use Direction::*;
    const JUMPS: [Direction; 8] = [NNE, NNW, NEE, NWW, SSE, SSW, SEE, SWW];

    let mut attacks = 0;
    let mut i = 0;
    while i < JUMPS.len() {
        attacks |= knights.shift(JUMPS[i]).0;
        i += 1;
    }
    Bitboard(attacks)
}

/// Squares attacked by a king standing on `king`
#[inline]
pub const fn king_attacks_bb(king: Bitboard) -> Bitboard {
    use Direction::*;
    const STEPS: [Direction; 8] = [N, S, E, W, NE, NW, SE, SW];

    let mut attacks = 0;
    let mut i = 0;
    while i < STEPS.len() {
        attacks |= king.shift(STEPS[i]).0;
        i += 1;
    }
    Bitboard(attacks)
}

/******************************************\
|==========================================|
|               Leaper Tables              |
|==========================================|
\******************************************/

/// Per-square tables for pawns (per colour), knights and kings
#[derive(Debug, Clone)]
pub struct LeaperTables {
    pub pawn: [[Bitboard; Square::NUM]; Colour::NUM],

    pub knight: [Bitboard; Square::NUM],

    pub king: [Bitboard; Square::NUM],
}

impl LeaperTables {
    pub const fn new() -> Self {
        let mut tables = Self {
            pawn: [[Bitboard::EMPTY; Square::NUM]; Colour::NUM],
            knight: [Bitboard::EMPTY; Square::NUM],
            king: [Bitboard::EMPTY; Square::NUM],
        };

        let mut i = 0;
        while i < Square::NUM {
            // Safety: i < 64
            let bb = unsafe { Square::from_unchecked(i as u8) }.bb();

            tables.pawn[Colour::White as usize][i] = pawn_attacks_bb(Colour::White, bb);
            tables.pawn[Colour::Black as usize][i] = pawn_attacks_bb(Colour::Black, bb);
            tables.knight[i] = knight_attacks_bb(bb);
            tables.king[i] = king_attacks_bb(bb);

            i += 1;
        }

        tables
    }
}

impl Default for LeaperTables {
    fn default() -> Self {
        Self::new()
    }
}
