use super::mask::{CastlingPath, castling_rights_mask};
use super::{PiecePlanes, Position};
use crate::core::*;

impl PiecePlanes {
    /// Applies a pseudo-legal move to the planes.
    ///
    /// Only the board changes: side to move, castling rights and the en passant
    /// target are left to the caller (see [`Position::play`]). Captures are not
    /// encoded in the move and are inferred from whatever stands on the
    /// destination.
    pub fn apply_move(&mut self, move_: Move) {
        let from = move_.from();
        let to = move_.to();

        debug_assert!(self.piece_on(from).is_some(), "apply_move: {from} is empty");
        let Some(piece) = self.piece_on(from) else {
            return;
        };
        let us = piece.colour();

        match move_.kind() {
            MoveKind::Normal => {
                self.remove_captured(to);
                self.toggle(piece, from);
                self.toggle(piece, to);
            }
            MoveKind::EnPassant => {
                // The captured pawn sits behind the destination from the mover's view
                let victim = Square::from_parts(to.file(), from.rank());
                self.toggle(Piece::from_parts(!us, PieceType::Pawn), victim);
                self.toggle(piece, from);
                self.toggle(piece, to);
            }
            MoveKind::Castling => {
                self.toggle(piece, from);
                self.toggle(piece, to);

                if let Some(path) = CastlingPath::by_king_dest(to) {
                    let rook = Piece::from_parts(us, PieceType::Rook);
                    self.toggle(rook, path.rook_from);
                    self.toggle(rook, path.rook_to);
                }
            }
            MoveKind::Promotion => {
                self.remove_captured(to);
                self.toggle(piece, from);
                self.toggle(Piece::from_parts(us, move_.promotion_pt()), to);
            }
        }
    }

    /// Clears whatever piece stands on `square`
    #[inline]
    fn remove_captured(&mut self, square: Square) {
        if let Some(captured) = self.piece_on(square) {
            self.toggle(captured, square);
        }
    }
}

/// Applies `move_` to `planes` in place. See [`PiecePlanes::apply_move`].
#[inline]
pub fn apply_move(planes: &mut PiecePlanes, move_: Move) {
    planes.apply_move(move_);
}

impl Position {
    /// Plays a pseudo-legal move and advances the rest of the state: the side
    /// to move flips, castling rights touched by the move are dropped and the
    /// en passant target is set only after a double pawn push.
    pub fn play(&mut self, move_: Move) {
        let from = move_.from();
        let to = move_.to();
        let us = self.side_to_move();

        let double_push = self.planes().piece_bb(us, PieceType::Pawn).contains(from)
            && from.rank() == Rank::Rank2.relative(us)
            && to.rank() == Rank::Rank4.relative(us);

        self.planes_mut().apply_move(move_);

        self.castling
            .mask(castling_rights_mask(from) & castling_rights_mask(to));

        self.en_passant = if double_push {
            from.add(us.forward()).ok()
        } else {
            None
        };

        self.side_to_move = !us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_move() {
        let mut planes = *Position::startpos().planes();
        planes.apply_move(Move::new(Square::G1, Square::F3, MoveKind::Normal));

        assert_eq!(planes.piece_on(Square::F3), Some(Piece::WhiteKnight));
        assert_eq!(planes.piece_on(Square::G1), None);
        assert!(planes.is_consistent());
    }

    #[test]
    fn test_capture_clears_victim_plane() {
        let pos = Position::empty()
            .put(Piece::WhiteBishop, Square::C4)
            .put(Piece::BlackKnight, Square::F7);
        let mut planes = *pos.planes();

        apply_move(&mut planes, Move::new(Square::C4, Square::F7, MoveKind::Normal));

        assert_eq!(planes.piece_on(Square::F7), Some(Piece::WhiteBishop));
        assert!(planes.pieces(Piece::BlackKnight).is_empty());
        assert!(planes.colour_bb(Colour::Black).is_empty());
        assert!(planes.is_consistent());
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        // White captures: the victim is one rank below the destination
        let pos = Position::empty()
            .put(Piece::WhitePawn, Square::E5)
            .put(Piece::BlackPawn, Square::D5);
        let mut planes = *pos.planes();
        planes.apply_move(Move::new(Square::E5, Square::D6, MoveKind::EnPassant));

        assert_eq!(planes.piece_on(Square::D6), Some(Piece::WhitePawn));
        assert_eq!(planes.piece_on(Square::D5), None);
        assert_eq!(planes.piece_on(Square::E5), None);
        assert!(planes.is_consistent());

        // Black captures: the victim is one rank above the destination
        let pos = Position::empty()
            .put(Piece::BlackPawn, Square::B4)
            .put(Piece::WhitePawn, Square::C4);
        let mut planes = *pos.planes();
        planes.apply_move(Move::new(Square::B4, Square::C3, MoveKind::EnPassant));

        assert_eq!(planes.piece_on(Square::C3), Some(Piece::BlackPawn));
        assert_eq!(planes.piece_on(Square::C4), None);
        assert!(planes.is_consistent());
    }

    #[test]
    fn test_castling_moves_rook() {
        let cases = [
            (Square::E1, Square::G1, Square::H1, Square::F1, Piece::WhiteKing),
            (Square::E1, Square::C1, Square::A1, Square::D1, Piece::WhiteKing),
            (Square::E8, Square::G8, Square::H8, Square::F8, Piece::BlackKing),
            (Square::E8, Square::C8, Square::A8, Square::D8, Piece::BlackKing),
        ];

        for (king_from, king_to, rook_from, rook_to, king) in cases {
            let rook = Piece::from_parts(king.colour(), PieceType::Rook);
            let mut planes = *Position::empty()
                .put(king, king_from)
                .put(rook, rook_from)
                .planes();

            planes.apply_move(Move::new(king_from, king_to, MoveKind::Castling));

            assert_eq!(planes.piece_on(king_to), Some(king));
            assert_eq!(planes.piece_on(rook_to), Some(rook));
            assert_eq!(planes.piece_on(king_from), None);
            assert_eq!(planes.piece_on(rook_from), None);
            assert!(planes.is_consistent());
        }
    }

    #[test]
    fn test_promotion_replaces_pawn() {
        let pos = Position::empty()
            .put(Piece::WhitePawn, Square::G7)
            .put(Piece::BlackRook, Square::H8);

        let mut planes = *pos.planes();
        planes.apply_move(Move::new_promotion(Square::G7, Square::G8, PieceType::Knight));
        assert_eq!(planes.piece_on(Square::G8), Some(Piece::WhiteKnight));
        assert!(planes.pieces(Piece::WhitePawn).is_empty());
        assert!(planes.is_consistent());

        let mut planes = *pos.planes();
        planes.apply_move(Move::new_promotion(Square::G7, Square::H8, PieceType::Queen));
        assert_eq!(planes.piece_on(Square::H8), Some(Piece::WhiteQueen));
        assert!(planes.pieces(Piece::BlackRook).is_empty());
        assert!(planes.pieces(Piece::WhitePawn).is_empty());
        assert!(planes.is_consistent());
    }

    #[test]
    fn test_play_updates_state() {
        let mut pos = Position::startpos();

        pos.play(Move::new(Square::E2, Square::E4, MoveKind::Normal));
        assert_eq!(pos.side_to_move(), Colour::Black);
        assert_eq!(pos.en_passant(), Some(Square::E3));

        pos.play(Move::new(Square::G8, Square::F6, MoveKind::Normal));
        assert_eq!(pos.side_to_move(), Colour::White);
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.castling(), Castling::ALL);

        pos.play(Move::new(Square::E1, Square::E2, MoveKind::Normal));
        assert_eq!(pos.castling(), Castling::BLACK_CASTLING);

        pos.play(Move::new(Square::H8, Square::G8, MoveKind::Normal));
        assert_eq!(pos.castling(), Castling::BQ);
    }

    #[test]
    fn test_play_capture_on_rook_corner_drops_right() {
        let mut pos = Position::empty()
            .put(Piece::WhiteKing, Square::E1)
            .put(Piece::WhiteRook, Square::H1)
            .put(Piece::BlackKing, Square::E8)
            .put(Piece::BlackBishop, Square::B7)
            .with_castling(Castling::WK)
            .with_side_to_move(Colour::Black);

        pos.play(Move::new(Square::B7, Square::H1, MoveKind::Normal));

        assert_eq!(pos.castling(), Castling::NONE);
        assert_eq!(pos.piece_on(Square::H1), Some(Piece::BlackBishop));
    }
}
