use super::AttackTables;
use super::leapers::{king_attacks_bb, knight_attacks_bb, pawn_attacks_bb};
use crate::board::{PiecePlanes, Position};
use crate::core::*;

impl AttackTables {
    /// Is `sq` attacked by any piece of colour `by`?
    ///
    /// `occ` is the occupancy the sliders see. It is passed separately from the
    /// planes so callers can remove pieces (the castling king) without
    /// touching the planes themselves.
    pub fn is_square_attacked(
        &self,
        planes: &PiecePlanes,
        occ: Bitboard,
        sq: Square,
        by: Colour,
    ) -> bool {
        use PieceType::*;

        // A pawn of `by` attacks sq exactly when a pawn of the other colour on sq would attack it
        if (self.pawn_attacks(!by, sq) & planes.piece_bb(by, Pawn)).is_occupied() {
            return true;
        }

        if (self.knight_attacks(sq) & planes.piece_bb(by, Knight)).is_occupied() {
            return true;
        }

        if (self.king_attacks(sq) & planes.piece_bb(by, King)).is_occupied() {
            return true;
        }

        let queens = planes.piece_bb(by, Queen);

        if (self.bishop_attacks(sq, occ) & (planes.piece_bb(by, Bishop) | queens)).is_occupied() {
            return true;
        }

        (self.rook_attacks(sq, occ) & (planes.piece_bb(by, Rook) | queens)).is_occupied()
    }

    /// Every square attacked by colour `by`, with sliders seeing `occ`
    pub fn attacked_by(&self, planes: &PiecePlanes, occ: Bitboard, by: Colour) -> Bitboard {
        use PieceType::*;

        let mut attacked = pawn_attacks_bb(by, planes.piece_bb(by, Pawn))
            | knight_attacks_bb(planes.piece_bb(by, Knight))
            | king_attacks_bb(planes.piece_bb(by, King));

        let queens = planes.piece_bb(by, Queen);

        for sq in planes.piece_bb(by, Bishop) | queens {
            attacked |= self.bishop_attacks(sq, occ);
        }

        for sq in planes.piece_bb(by, Rook) | queens {
            attacked |= self.rook_attacks(sq, occ);
        }

        attacked
    }

    /// Is the side to move in check?
    pub fn in_check(&self, pos: &Position) -> bool {
        let us = pos.side_to_move();
        let planes = pos.planes();

        planes
            .king_square(us)
            .is_some_and(|ksq| self.is_square_attacked(planes, planes.occupied(), ksq, !us))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::movegen::init_attack_tables;

    /// Cross-checks the single-square query against the attacked set
    fn assert_queries_agree(pos: &Position) {
        let tables = init_attack_tables();
        let planes = pos.planes();

        for by in Colour::iter() {
            let attacked = tables.attacked_by(planes, planes.occupied(), by);

            for sq in Square::iter() {
                assert_eq!(
                    tables.is_square_attacked(planes, planes.occupied(), sq, by),
                    attacked.contains(sq),
                    "{sq} by {by:?}"
                );
            }
        }
    }

    #[test]
    fn test_startpos_attacks() {
        let tables = init_attack_tables();
        let pos = Position::startpos();
        let planes = pos.planes();

        let white = tables.attacked_by(planes, planes.occupied(), Colour::White);
        // Ranks 2 and 3 entirely, plus rank 1 except the corners
        assert_eq!(white, Bitboard(0x0000_0000_00FF_FF7E));

        let black = tables.attacked_by(planes, planes.occupied(), Colour::Black);
        assert_eq!(black, Bitboard(0x7EFF_FF00_0000_0000));

        assert!(!tables.in_check(&pos));
        assert_queries_agree(&pos);
    }

    #[test]
    fn test_knight_attacks_for_both_colours() {
        let tables = init_attack_tables();

        for col in Colour::iter() {
            let pos = Position::empty().put(Piece::from_parts(col, PieceType::Knight), Square::F3);
            let planes = pos.planes();

            for target in [Square::E1, Square::G1, Square::D2, Square::H4, Square::E5] {
                assert!(tables.is_square_attacked(planes, planes.occupied(), target, col));
                assert!(!tables.is_square_attacked(planes, planes.occupied(), target, !col));
            }
            assert!(!tables.is_square_attacked(planes, planes.occupied(), Square::F4, col));
        }
    }

    #[test]
    fn test_pawn_attack_direction() {
        let tables = init_attack_tables();
        let pos = Position::empty()
            .put(Piece::WhitePawn, Square::D4)
            .put(Piece::BlackPawn, Square::D6);
        let planes = pos.planes();
        let occ = planes.occupied();

        assert!(tables.is_square_attacked(planes, occ, Square::E5, Colour::White));
        assert!(tables.is_square_attacked(planes, occ, Square::C5, Colour::White));
        assert!(!tables.is_square_attacked(planes, occ, Square::E3, Colour::White));
        assert!(tables.is_square_attacked(planes, occ, Square::E5, Colour::Black));
        assert!(!tables.is_square_attacked(planes, occ, Square::E7, Colour::Black));
    }

    #[test]
    fn test_sliders_respect_passed_occupancy() {
        let tables = init_attack_tables();
        let pos = Position::empty()
            .put(Piece::BlackRook, Square::A1)
            .put(Piece::WhiteKing, Square::E1);
        let planes = pos.planes();

        // The king shields f1 from the rook on the real board
        assert!(!tables.is_square_attacked(planes, planes.occupied(), Square::F1, Colour::Black));

        let without_king = planes.occupied() & !Square::E1.bb();
        assert!(tables.is_square_attacked(planes, without_king, Square::F1, Colour::Black));
        assert!(tables.attacked_by(planes, without_king, Colour::Black).contains(Square::H1));
    }

    #[test]
    fn test_queries_agree_on_busy_position() {
        let pos = Position::from_diagram(
            "r...k..r
             p.ppqpb.
             bn..pnp.
             ...PN...
             .p..P...
             ..N..Q.p
             PPPBBPPP
             R...K..R",
        );

        assert_queries_agree(&pos);
    }

    #[test]
    fn test_in_check() {
        let tables = init_attack_tables();
        let pos = Position::empty()
            .put(Piece::WhiteKing, Square::E1)
            .put(Piece::BlackQueen, Square::H4)
            .put(Piece::BlackKing, Square::E8);

        assert!(tables.in_check(&pos));
        assert!(!tables.in_check(&pos.with_side_to_move(Colour::Black)));

        let blocked = pos.put(Piece::WhitePawn, Square::F2);
        assert!(!tables.in_check(&blocked));
    }
}
