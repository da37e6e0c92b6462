use super::{AttackTables, MoveList};
use crate::board::Position;

impl AttackTables {
    /// Legal moves of the side to move.
    ///
    /// Each pseudo-legal move is played on a copy of the planes and kept only
    /// if the mover's king is not attacked afterwards. `pos` is never touched.
    pub fn generate_legal_moves(&self, pos: &Position) -> MoveList {
        let us = pos.side_to_move();
        let mut legal = MoveList::new();

        for &move_ in self.generate_pseudo_legal_moves(pos).iter() {
            let mut planes = *pos.planes();
            planes.apply_move(move_);

            let safe = match planes.king_square(us) {
                Some(ksq) => !self.is_square_attacked(&planes, planes.occupied(), ksq, !us),
                None => true,
            };

            if safe {
                legal.push(move_);
            }
        }

        legal
    }
}
