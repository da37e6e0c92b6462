use super::{AttackTables, MoveList};
use crate::board::Position;
use crate::board::mask::CastlingPath;
use crate::core::*;

/// Promotion choices, in the order they are emitted
const PROMOTION_PIECES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

impl AttackTables {
    /// Every move the side to move's pieces can make, ignoring whether it
    /// leaves their own king in check.
    ///
    /// Moves are grouped by piece: pawns, knights, bishops, rooks, queens,
    /// king, then castling.
    pub fn generate_pseudo_legal_moves(&self, pos: &Position) -> MoveList {
        let mut move_list = MoveList::new();

        self.gen_pawn_moves(pos, &mut move_list);

        for pt in [
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
            PieceType::King,
        ] {
            self.gen_piece_moves(pos, pt, &mut move_list);
        }

        self.gen_castling_moves(pos, &mut move_list);

        move_list
    }

    fn gen_pawn_moves(&self, pos: &Position, move_list: &mut MoveList) {
        let us = pos.side_to_move();
        let planes = pos.planes();

        let empty = !planes.occupied();
        let ep_bb = pos.en_passant().map_or(Bitboard::EMPTY, |sq| sq.bb());
        let targets = planes.colour_bb(!us) | ep_bb;
        let start_rank = Rank::Rank2.relative(us).bb();
        let up = us.forward();

        for from in planes.piece_bb(us, PieceType::Pawn) {
            // Single push, then the double push through the now known empty square
            let single = from.bb().shift(up) & empty;
            if let Some(to) = single.lsb() {
                push_pawn_move(move_list, us, from, to);

                if start_rank.contains(from) {
                    if let Some(to) = (single.shift(up) & empty).lsb() {
                        move_list.push(Move::new(from, to, MoveKind::Normal));
                    }
                }
            }

            for to in self.pawn_attacks(us, from) & targets {
                if ep_bb.contains(to) {
                    move_list.push(Move::new(from, to, MoveKind::EnPassant));
                } else {
                    push_pawn_move(move_list, us, from, to);
                }
            }
        }
    }

    fn gen_piece_moves(&self, pos: &Position, pt: PieceType, move_list: &mut MoveList) {
        let us = pos.side_to_move();
        let planes = pos.planes();

        let occ = planes.occupied();
        let not_own = !planes.colour_bb(us);

        for from in planes.piece_bb(us, pt) {
            for to in self.attacks(pt, from, occ) & not_own {
                move_list.push(Move::new(from, to, MoveKind::Normal));
            }
        }
    }

    fn gen_castling_moves(&self, pos: &Position, move_list: &mut MoveList) {
        let us = pos.side_to_move();
        let planes = pos.planes();

        if !pos.castling().has(Castling::colour(us)) {
            return;
        }

        let occ = planes.occupied();
        let king = planes.piece_bb(us, PieceType::King);
        // The king is lifted so it cannot hide the square behind it from a slider
        let mut attacked: Option<Bitboard> = None;

        for path in CastlingPath::for_colour(us) {
            if !pos.castling().has(path.right)
                || !king.contains(path.king_from)
                || (occ & path.empty).is_occupied()
            {
                continue;
            }

            let danger = *attacked.get_or_insert_with(|| self.attacked_by(planes, occ ^ king, !us));

            if (danger & path.safe).is_empty() {
                move_list.push(Move::new(path.king_from, path.king_to, MoveKind::Castling));
            }
        }
    }
}

/// Pushes a pawn move, fanned out into the four promotions on the last rank
#[inline]
fn push_pawn_move(move_list: &mut MoveList, us: Colour, from: Square, to: Square) {
    if to.rank() == Rank::Rank8.relative(us) {
        for pt in PROMOTION_PIECES {
            move_list.push(Move::new_promotion(from, to, pt));
        }
    } else {
        move_list.push(Move::new(from, to, MoveKind::Normal));
    }
}
